//! 域 newtype 的公共样板。
//!
//! 每个单表域都需要同一组转换：`EnumValue`、符号投影/解析、`Display`、`FromStr` 以及可选的
//! serde 实现。宏只生成这些胶水，表本身仍由各域模块显式声明。声道掩码有三张表，手写实现。

/// 为 `pub struct $ty(pub $raw)` 生成基于单张表 `$table` 的转换实现。
///
/// `fallback` 为没有规范名称时 `Display` 使用的数值格式。
macro_rules! enumerant {
    ($ty:ident($raw:ty), table = $table:ident, fallback = $fmt:literal) => {
        impl $crate::table::EnumValue for $ty {
            fn to_raw(self) -> i64 {
                i64::from(self.0)
            }

            fn from_raw(raw: i64) -> Option<Self> {
                <$raw>::try_from(raw).ok().map(Self)
            }
        }

        impl $ty {
            /// 原始数值。
            #[must_use]
            pub const fn raw(self) -> $raw {
                self.0
            }

            /// 规范符号；没有规范名称时返回 `None`。
            #[must_use]
            pub fn to_symbol(self) -> Option<&'static str> {
                $table.project(self)
            }

            /// 按当前产物的可见性解析规范符号或别名。
            #[must_use]
            pub fn from_symbol(symbol: &str) -> Option<Self> {
                $table.parse(symbol)
            }

            /// 以指定可见性解析。
            #[must_use]
            pub fn from_symbol_with(
                symbol: &str,
                visibility: $crate::visibility::Visibility,
            ) -> Option<Self> {
                $table.parse_with(symbol, visibility)
            }

            /// 本域的枚举表。
            #[must_use]
            pub fn table() -> &'static $crate::table::Table<Self> {
                &$table
            }
        }

        impl From<$raw> for $ty {
            fn from(raw: $raw) -> Self {
                Self(raw)
            }
        }

        impl From<$ty> for $raw {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl core::fmt::Display for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self.to_symbol() {
                    Some(symbol) => f.write_str(symbol),
                    None => write!(f, $fmt, self.0),
                }
            }
        }

        impl core::str::FromStr for $ty {
            type Err = $crate::error::ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_symbol(s)
                    .ok_or_else(|| $crate::error::ParseEnumError::new($table.domain(), s))
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                $crate::serde_impl::serialize_symbol(self.to_symbol(), $table.domain(), serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                $crate::serde_impl::deserialize_symbol(&[&$table], deserializer)
            }
        }
    };
}
