//! # error 模块说明
//!
//! ## 角色定位（Why）
//! - 解析失败只是"边界上出现了无法识别的枚举值"，编解码层不替调用方决定策略，只负责把域与原始字符串带出去；
//! - 表定义缺陷（数值重复、别名悬空等）以 [`TableError`] 报告，由测试把它变成构建失败。
//!
//! ## 设计要求（What）
//! - 启用 `std` 时两类错误派生 `thiserror::Error`；`no_std` 下手写 `Display`，文案保持一致；
//! - 所有错误均可 `Clone`/`PartialEq`，便于测试直接断言。

use alloc::string::String;
#[cfg(not(feature = "std"))]
use core::fmt;

#[cfg(feature = "std")]
use thiserror::Error;

use crate::domain::Domain;

/// 字符串无法映射到目标域的任何可见条目。
#[cfg_attr(feature = "std", derive(Error))]
#[cfg_attr(
    feature = "std",
    error("`{symbol}` is not a recognized {domain} symbol")
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseEnumError {
    domain: Domain,
    symbol: String,
}

impl ParseEnumError {
    /// 以目标域与原始输入构造错误。
    pub fn new(domain: Domain, symbol: &str) -> Self {
        Self {
            domain,
            symbol: String::from(symbol),
        }
    }

    /// 解析所针对的域。
    #[must_use]
    pub const fn domain(&self) -> Domain {
        self.domain
    }

    /// 未能识别的原始输入。
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

/// 枚举表结构不变量被破坏。
///
/// - **意图 (Why)**：原先依赖 `switch` 重复 `case` 的编译错误来保证唯一性，现改为显式校验；
/// - **契约 (What)**：出现任何变体都表示表定义有误，必须修正表，而不是在运行期绕过。
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    /// 两个参与投影的条目共享同一数值，投影不再是函数。
    #[cfg_attr(
        feature = "std",
        error("{domain}: `{first}` and `{second}` share a canonical value")
    )]
    DuplicateValue {
        /// 所在域。
        domain: Domain,
        /// 先出现的符号。
        first: &'static str,
        /// 后出现的符号。
        second: &'static str,
    },

    /// 同一符号在表内出现多次。
    #[cfg_attr(feature = "std", error("{domain}: symbol `{symbol}` is declared twice"))]
    DuplicateSymbol {
        /// 所在域。
        domain: Domain,
        /// 重复的符号。
        symbol: &'static str,
    },

    /// 别名指向的数值没有规范条目。
    #[cfg_attr(
        feature = "std",
        error("{domain}: alias `{alias}` does not refer to a canonical value")
    )]
    DanglingAlias {
        /// 所在域。
        domain: Domain,
        /// 悬空的别名。
        alias: &'static str,
    },

    /// 哨兵数值与某个规范值相同，导致哨兵可以被投影出名称。
    #[cfg_attr(
        feature = "std",
        error("{domain}: sentinel `{sentinel}` collides with canonical `{canonical}`")
    )]
    SentinelCollision {
        /// 所在域。
        domain: Domain,
        /// 哨兵符号。
        sentinel: &'static str,
        /// 冲突的规范符号。
        canonical: &'static str,
    },
}

#[cfg(not(feature = "std"))]
impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` is not a recognized {} symbol",
            self.symbol, self.domain
        )
    }
}

#[cfg(not(feature = "std"))]
impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateValue {
                domain,
                first,
                second,
            } => write!(f, "{domain}: `{first}` and `{second}` share a canonical value"),
            Self::DuplicateSymbol { domain, symbol } => {
                write!(f, "{domain}: symbol `{symbol}` is declared twice")
            }
            Self::DanglingAlias { domain, alias } => write!(
                f,
                "{domain}: alias `{alias}` does not refer to a canonical value"
            ),
            Self::SentinelCollision {
                domain,
                sentinel,
                canonical,
            } => write!(
                f,
                "{domain}: sentinel `{sentinel}` collides with canonical `{canonical}`"
            ),
        }
    }
}
