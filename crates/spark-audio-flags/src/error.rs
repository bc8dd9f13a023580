//! 特性开关读取错误。
//!
//! 这些错误不会越过 [`CachedFlag`](crate::CachedFlag)：它们只被记录，随后回退到默认值。
//! 直接使用 [`FlagSource`](crate::FlagSource) 的调用方可以自行决定策略。

use std::{io, path::PathBuf};

use thiserror::Error;

/// 读取特性开关来源时的失败。
#[derive(Debug, Error)]
pub enum FlagError {
    /// 配置文件无法读取。
    #[error("failed to read flag file `{}`", .path.display())]
    Io {
        /// 文件路径。
        path: PathBuf,
        /// 底层 I/O 错误。
        #[source]
        source: io::Error,
    },

    /// 配置文档不是合法的 TOML，或 `[flags]` 表中出现非布尔值。
    #[error("malformed flag document `{origin}`")]
    Toml {
        /// 文档来源描述（文件路径或 `<inline>`）。
        origin: String,
        /// 底层解析错误。
        #[source]
        source: toml::de::Error,
    },

    /// 开关值无法解释为布尔。
    #[error("flag `{flag}` has non-boolean value `{value}`")]
    InvalidValue {
        /// 开关名称。
        flag: String,
        /// 原始取值。
        value: String,
    },
}
