//! 枚举表原语：条目、角色与通用的投影/解析扫描。
//!
//! # 契约说明（What）
//! - 每个域恰好拥有一张有序表；顺序既是解析的并列裁决顺序，也是复合值引用离散值的声明顺序；
//! - 投影只扫描 [`Role::Canonical`] 与 [`Role::FrameworkOnly`] 行，返回首个数值完全相等的符号；
//! - 解析先扫描规范行（按可见性决定是否包括框架专用行），再扫描别名行，区分大小写，首个匹配即返回；
//! - [`Role::Sentinel`] 行属于域的数值空间，但不参与任何方向的转换。
//!
//! # 实现策略（How）
//! - 表由两段 `'static` 切片组成：`rows` 在所有产物中存在，`framework_rows` 只在 `framework` 特性下非空；
//! - 所有扫描都是对小型固定表的线性遍历，无分配、无锁、可重入；
//! - 数值唯一性不再依赖 `switch` 语句的编译错误，而由 [`Table::validate`] 在测试期显式检查。

use core::fmt::Debug;

use crate::{domain::Domain, error::TableError, visibility::Visibility};

/// 可以出现在枚举表中的数值类型。
///
/// 原始整数统一提升为 `i64`，既能容纳 `u32` 掩码，也能容纳带符号的 `-1` 哨兵。
pub trait EnumValue: Copy + Eq + Debug + Send + Sync + 'static {
    /// 转换为原始整数。
    fn to_raw(self) -> i64;

    /// 从原始整数构造；超出域的整数宽度时返回 `None`。
    fn from_raw(raw: i64) -> Option<Self>;
}

/// 条目在表中的角色。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// 该数值唯一的规范符号，投影只会返回这一类（以及框架专用）符号。
    Canonical,
    /// 与某个规范值数值相等的旧名称，只参与解析。
    Alias,
    /// 仅框架进程可见的规范符号；厂商侧产物不包含这些行。
    FrameworkOnly,
    /// 属于数值空间但刻意排除在字符串转换之外的值。
    Sentinel,
}

impl Role {
    /// 是否参与投影。
    #[must_use]
    pub const fn is_projectable(self) -> bool {
        matches!(self, Self::Canonical | Self::FrameworkOnly)
    }
}

/// 表中的一行：`(符号, 数值, 角色)`。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry<T: 'static> {
    symbol: &'static str,
    value: T,
    role: Role,
}

impl<T: Copy> Entry<T> {
    /// 规范条目。
    pub const fn canonical(symbol: &'static str, value: T) -> Self {
        Self {
            symbol,
            value,
            role: Role::Canonical,
        }
    }

    /// 别名条目，`value` 必须等于同表中某个规范值。
    pub const fn alias(symbol: &'static str, value: T) -> Self {
        Self {
            symbol,
            value,
            role: Role::Alias,
        }
    }

    /// 仅框架可见的条目。
    pub const fn framework_only(symbol: &'static str, value: T) -> Self {
        Self {
            symbol,
            value,
            role: Role::FrameworkOnly,
        }
    }

    /// 不可转换的哨兵条目。
    pub const fn sentinel(symbol: &'static str, value: T) -> Self {
        Self {
            symbol,
            value,
            role: Role::Sentinel,
        }
    }

    /// 线上字符串形式。
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// 数值。
    #[must_use]
    pub fn value(&self) -> T {
        self.value
    }

    /// 角色。
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}

/// 单个域的有序枚举表。
///
/// ### 契约（What）
/// - `rows` 在厂商与框架产物中都存在；`framework_rows` 只包含 [`Role::FrameworkOnly`] 行，
///   厂商产物中为空切片；
/// - 迭代顺序固定为 `rows` 之后接 `framework_rows`；
/// - 表在编译期构造，运行期不增删改任何行，可被任意线程并发读取。
#[derive(Debug)]
pub struct Table<T: 'static> {
    domain: Domain,
    rows: &'static [Entry<T>],
    framework_rows: &'static [Entry<T>],
}

impl<T: EnumValue> Table<T> {
    /// 以两段静态切片构造表。
    pub const fn new(
        domain: Domain,
        rows: &'static [Entry<T>],
        framework_rows: &'static [Entry<T>],
    ) -> Self {
        Self {
            domain,
            rows,
            framework_rows,
        }
    }

    /// 表所属的域。
    #[must_use]
    pub const fn domain(&self) -> Domain {
        self.domain
    }

    /// 按定义顺序遍历所有已编入的条目。
    pub fn entries(&self) -> impl Iterator<Item = &'static Entry<T>> + use<T> {
        let rows: &'static [Entry<T>] = self.rows;
        let framework_rows: &'static [Entry<T>] = self.framework_rows;
        rows.iter().chain(framework_rows.iter())
    }

    /// 参与投影的条目（规范 + 框架专用）。
    pub fn canonical(&self) -> impl Iterator<Item = &'static Entry<T>> + use<T> {
        self.entries().filter(|entry| entry.role.is_projectable())
    }

    /// 别名条目。
    pub fn aliases(&self) -> impl Iterator<Item = &'static Entry<T>> + use<T> {
        self.entries().filter(|entry| entry.role == Role::Alias)
    }

    /// 已编入的条目数量（含别名与哨兵）。
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len() + self.framework_rows.len()
    }

    /// 表是否为空。
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 数值 → 规范符号。
    ///
    /// 没有规范名称是预期结果而不是错误：哨兵与保留位组合都会返回 `None`。
    #[must_use]
    pub fn project(&self, value: T) -> Option<&'static str> {
        self.canonical()
            .find(|entry| entry.value == value)
            .map(Entry::symbol)
    }

    /// 按当前产物的可见性解析符号。
    #[must_use]
    pub fn parse(&self, symbol: &str) -> Option<T> {
        self.parse_with(symbol, Visibility::BUILD)
    }

    /// 以指定可见性解析符号。
    ///
    /// 先扫描规范行，再扫描别名行。`Visibility::Framework` 无法找回未编入产物的行。
    #[must_use]
    pub fn parse_with(&self, symbol: &str, visibility: Visibility) -> Option<T> {
        let admits_framework = visibility.admits_framework_rows();
        let mut canonical = self.entries().filter(move |entry| match entry.role {
            Role::Canonical => true,
            Role::FrameworkOnly => admits_framework,
            Role::Alias | Role::Sentinel => false,
        });

        canonical
            .find(|entry| entry.symbol == symbol)
            .or_else(|| self.aliases().find(|entry| entry.symbol == symbol))
            .map(|entry| entry.value)
    }

    /// 边界风格的解析：成功时写入 `out` 并返回 `true`，失败时 `out` 保持不变。
    pub fn parse_into(&self, symbol: &str, out: &mut T) -> bool {
        match self.parse(symbol) {
            Some(value) => {
                *out = value;
                true
            }
            None => false,
        }
    }

    /// 检查表的结构不变量。
    ///
    /// 1. 参与投影的数值两两不同；
    /// 2. 符号在表内两两不同；
    /// 3. 每个别名的数值都等于某个参与投影的数值；
    /// 4. 哨兵数值不与任何参与投影的数值冲突。
    ///
    /// 违反任一条都是表定义缺陷，应当在测试中阻断构建，而不是作为运行期条件处理。
    pub fn validate(&self) -> Result<(), TableError> {
        let entries = || self.entries().enumerate();

        for (i, first) in entries() {
            for (_, second) in entries().skip(i + 1) {
                if first.symbol == second.symbol {
                    return Err(TableError::DuplicateSymbol {
                        domain: self.domain,
                        symbol: first.symbol,
                    });
                }
                if first.role.is_projectable()
                    && second.role.is_projectable()
                    && first.value == second.value
                {
                    return Err(TableError::DuplicateValue {
                        domain: self.domain,
                        first: first.symbol,
                        second: second.symbol,
                    });
                }
            }
        }

        for entry in self.entries() {
            let projected = self.project(entry.value);
            match (entry.role, projected) {
                (Role::Alias, None) => {
                    return Err(TableError::DanglingAlias {
                        domain: self.domain,
                        alias: entry.symbol,
                    });
                }
                (Role::Sentinel, Some(canonical)) => {
                    return Err(TableError::SentinelCollision {
                        domain: self.domain,
                        sentinel: entry.symbol,
                        canonical,
                    });
                }
                _ => {}
            }
        }

        Ok(())
    }
}

impl EnumValue for u32 {
    fn to_raw(self) -> i64 {
        i64::from(self)
    }

    fn from_raw(raw: i64) -> Option<Self> {
        u32::try_from(raw).ok()
    }
}

impl EnumValue for i32 {
    fn to_raw(self) -> i64 {
        i64::from(self)
    }

    fn from_raw(raw: i64) -> Option<Self> {
        i32::try_from(raw).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ROWS: &[Entry<u32>] = &[
        Entry::canonical("ZERO", 0),
        Entry::canonical("ONE", 1),
        Entry::canonical("TWO", 2),
        Entry::alias("UNO", 1),
        Entry::sentinel("INVALID", 0xFFFF_FFFF),
    ];
    static FRAMEWORK_ROWS: &[Entry<u32>] = &[Entry::framework_only("SEVEN", 7)];
    static SAMPLE: Table<u32> = Table::new(Domain::GainMode, ROWS, FRAMEWORK_ROWS);

    #[test]
    fn projection_prefers_canonical_over_alias() {
        assert_eq!(SAMPLE.project(1), Some("ONE"));
        assert_eq!(SAMPLE.parse("UNO"), Some(1));
    }

    #[test]
    fn sentinel_is_excluded_both_ways() {
        assert_eq!(SAMPLE.project(0xFFFF_FFFF), None);
        assert_eq!(SAMPLE.parse("INVALID"), None);
    }

    #[test]
    fn framework_rows_follow_visibility() {
        assert_eq!(SAMPLE.project(7), Some("SEVEN"));
        assert_eq!(SAMPLE.parse_with("SEVEN", Visibility::Framework), Some(7));
        assert_eq!(SAMPLE.parse_with("SEVEN", Visibility::Vendor), None);
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(SAMPLE.parse("one"), None);
        assert_eq!(SAMPLE.parse(" ONE"), None);
    }

    #[test]
    fn parse_into_leaves_output_untouched_on_failure() {
        let mut out = 42;
        assert!(!SAMPLE.parse_into("MISSING", &mut out));
        assert_eq!(out, 42);
        assert!(SAMPLE.parse_into("ZERO", &mut out));
        assert_eq!(out, 0);
    }

    #[test]
    fn sample_table_is_valid() {
        assert_eq!(SAMPLE.validate(), Ok(()));
        assert_eq!(SAMPLE.len(), 6);
        assert_eq!(SAMPLE.canonical().count(), 4);
        assert_eq!(SAMPLE.aliases().count(), 1);
    }

    #[test]
    fn validate_rejects_duplicate_canonical_values() {
        static DUP: &[Entry<u32>] = &[Entry::canonical("A", 3), Entry::canonical("B", 3)];
        let table = Table::new(Domain::GainMode, DUP, &[]);
        assert_eq!(
            table.validate(),
            Err(TableError::DuplicateValue {
                domain: Domain::GainMode,
                first: "A",
                second: "B",
            })
        );
    }

    #[test]
    fn validate_rejects_dangling_alias() {
        static DANGLING: &[Entry<u32>] = &[Entry::canonical("A", 1), Entry::alias("B", 2)];
        let table = Table::new(Domain::GainMode, DANGLING, &[]);
        assert_eq!(
            table.validate(),
            Err(TableError::DanglingAlias {
                domain: Domain::GainMode,
                alias: "B",
            })
        );
    }

    #[test]
    fn validate_rejects_sentinel_collision() {
        static COLLIDING: &[Entry<u32>] = &[Entry::canonical("A", 1), Entry::sentinel("NOPE", 1)];
        let table = Table::new(Domain::GainMode, COLLIDING, &[]);
        assert_eq!(
            table.validate(),
            Err(TableError::SentinelCollision {
                domain: Domain::GainMode,
                sentinel: "NOPE",
                canonical: "A",
            })
        );
    }

    #[test]
    fn validate_rejects_duplicate_symbols() {
        static SAME: &[Entry<u32>] = &[Entry::canonical("A", 1), Entry::alias("A", 1)];
        let table = Table::new(Domain::GainMode, SAME, &[]);
        assert_eq!(
            table.validate(),
            Err(TableError::DuplicateSymbol {
                domain: Domain::GainMode,
                symbol: "A",
            })
        );
    }

    #[test]
    fn raw_conversion_respects_width() {
        assert_eq!(<u32 as EnumValue>::from_raw(-1), None);
        assert_eq!(<u32 as EnumValue>::from_raw(0xFFFF_FFFF), Some(u32::MAX));
        assert_eq!(<i32 as EnumValue>::from_raw(-1), Some(-1));
        assert_eq!(<i32 as EnumValue>::from_raw(i64::from(u32::MAX)), None);
    }
}
