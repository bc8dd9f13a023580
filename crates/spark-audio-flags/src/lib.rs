#![warn(missing_docs)]

//! # spark-audio-flags
//!
//! ## 定位（Why）
//! - 音频进程里有少量布尔特性开关（例如互斥锁是否启用优先级继承），读取外部配置的代价与时机都不可控；
//! - 本 crate 把"读一次、记录一次、之后只返回缓存值"收敛为 [`CachedFlag`]，任意线程、任意时刻调用都安全。
//!
//! ## 交互契约（What）
//! - 配置来源抽象为 [`FlagSource`]：内存表、环境变量、TOML 文档，以及按优先级叠加的 [`LayeredFlags`]；
//! - [`CachedFlag::get`] 首次调用时恰好读取来源一次，并发的首次调用者观察到同一次求值与相同结果；
//!   来源报错时记录告警并回退到默认值，调用方永远拿到 `bool`；
//! - 优先推荐由拥有者构造 [`CachedFlag`] 并显式传递；[`mutex_priority_inheritance_enabled`]
//!   保留为进程级入口，供无法注入依赖的锁原语使用。
//!
//! ## 风险提示（Trade-offs）
//! - 缓存不可失效：进程生命周期内修改环境变量或配置文件不会生效，这是"结果一致"承诺的代价。

mod cached;
mod error;
mod process;
mod source;

pub use crate::{
    cached::CachedFlag,
    error::FlagError,
    process::{
        FLAG_ENV_PREFIX, FLAGS_FILE_ENV, PRIORITY_INHERITANCE_FLAG,
        mutex_priority_inheritance_enabled, process_source,
    },
    source::{EnvFlags, FixedFlags, FlagSource, LayeredFlags, TomlFileFlags, TomlFlags, parse_bool},
};
