//! `serde` 特性下的符号串行化。
//!
//! 域类型只以规范符号出现在线上；没有名称的数值无法串行化，反串行化只接受符号字符串。

use core::fmt;

use serde::{
    Deserializer, Serializer,
    de::{self, Visitor},
    ser,
};

use crate::{
    domain::Domain,
    error::ParseEnumError,
    table::{EnumValue, Table},
};

pub(crate) fn serialize_symbol<S: Serializer>(
    symbol: Option<&'static str>,
    domain: Domain,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match symbol {
        Some(symbol) => serializer.serialize_str(symbol),
        None => Err(ser::Error::custom(format_args!(
            "value has no canonical {domain} symbol"
        ))),
    }
}

/// 依次在 `tables` 中解析，首个成功的表胜出。
pub(crate) fn deserialize_symbol<'de, T, D>(
    tables: &[&'static Table<T>],
    deserializer: D,
) -> Result<T, D::Error>
where
    T: EnumValue,
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(SymbolVisitor { tables })
}

struct SymbolVisitor<'t, T: 'static> {
    tables: &'t [&'static Table<T>],
}

impl<T: EnumValue> Visitor<'_> for SymbolVisitor<'_, T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tables.first() {
            Some(table) => write!(f, "a {} symbol", table.domain()),
            None => f.write_str("an enumerant symbol"),
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        if let Some(value) = self.tables.iter().find_map(|table| table.parse(v)) {
            return Ok(value);
        }
        match self.tables.first() {
            Some(table) => Err(E::custom(ParseEnumError::new(table.domain(), v))),
            None => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
        }
    }
}
