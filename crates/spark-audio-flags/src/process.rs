//! 进程级开关入口。
//!
//! 优先级继承互斥锁在构造时需要查询开关，而它无法接收注入的依赖，因此这里保留一个进程级单例。
//! 来源顺序：环境变量 `SPARK_AUDIO_FLAG_MUTEX_PRIORITY_INHERITANCE`，然后是
//! `$SPARK_AUDIO_FLAGS_FILE` 指向的 TOML 文件（若设置），都没有给出值时为 `false`。

use std::{env, sync::LazyLock};

use tracing::debug;

use crate::{
    cached::CachedFlag,
    source::{EnvFlags, LayeredFlags, TomlFileFlags},
};

/// 优先级继承开关的名称。
pub const PRIORITY_INHERITANCE_FLAG: &str = "mutex_priority_inheritance";

/// 环境变量来源的默认前缀。
pub const FLAG_ENV_PREFIX: &str = "SPARK_AUDIO_FLAG_";

/// 指向 TOML 开关文件的环境变量。
pub const FLAGS_FILE_ENV: &str = "SPARK_AUDIO_FLAGS_FILE";

static PRIORITY_INHERITANCE: LazyLock<CachedFlag<LayeredFlags>> =
    LazyLock::new(|| CachedFlag::new(PRIORITY_INHERITANCE_FLAG, false, process_source()));

/// 进程默认的开关来源：环境变量优先，其次是 `$SPARK_AUDIO_FLAGS_FILE`。
pub fn process_source() -> LayeredFlags {
    let layered = LayeredFlags::new().layer(EnvFlags::default());
    match env::var_os(FLAGS_FILE_ENV) {
        Some(path) if !path.is_empty() => {
            debug!(path = %path.to_string_lossy(), "flag file configured");
            layered.layer(TomlFileFlags::new(path))
        }
        _ => layered,
    }
}

/// 互斥锁是否启用优先级继承。
///
/// 进程内首次调用时读取来源并缓存，之后的调用只返回缓存值，可在任意线程、任意初始化阶段调用。
pub fn mutex_priority_inheritance_enabled() -> bool {
    PRIORITY_INHERITANCE.get()
}
