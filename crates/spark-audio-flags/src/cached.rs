//! # cached 模块说明
//!
//! ## 角色定位（Why）
//! - 锁原语等热路径组件需要一个"任意时刻可调用、无副作用"的布尔查询，但真正的来源读取可能涉及文件 I/O；
//! - [`CachedFlag`] 把来源读取推迟到首次查询，并保证整个生命周期只读取一次。
//!
//! ## 契约（What）
//! - 首次 [`CachedFlag::get`] 读取来源恰好一次；并发的首次调用者阻塞在同一个初始化屏障上，观察到相同结果；
//! - 来源给出值时使用该值，无意见时使用默认值，出错时以 `warn` 级别记录并使用默认值；
//! - 结果以 `debug` 级别记录一次，字段 `flag`、`enabled`、`origin`。
//!
//! ## 实现策略（How）
//! - 初始化屏障直接使用 `std::sync::OnceLock`，不引入额外的锁或原子状态机。

use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::source::FlagSource;

/// 只求值一次的布尔开关。
pub struct CachedFlag<S> {
    name: &'static str,
    default: bool,
    source: S,
    value: OnceLock<bool>,
}

impl<S: FlagSource> CachedFlag<S> {
    /// 构造未初始化的开关；不会访问来源。
    pub const fn new(name: &'static str, default: bool, source: S) -> Self {
        Self {
            name,
            default,
            source,
            value: OnceLock::new(),
        }
    }

    /// 当前值；首次调用时读取来源。
    pub fn get(&self) -> bool {
        *self.value.get_or_init(|| self.evaluate())
    }

    /// 是否已完成首次求值。
    pub fn is_initialized(&self) -> bool {
        self.value.get().is_some()
    }

    /// 已缓存的值，不触发求值。
    pub fn peek(&self) -> Option<bool> {
        self.value.get().copied()
    }

    /// 开关名称。
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 来源无意见或出错时使用的默认值。
    pub fn default_value(&self) -> bool {
        self.default
    }

    fn evaluate(&self) -> bool {
        match self.source.read(self.name) {
            Ok(Some(enabled)) => {
                debug!(flag = self.name, enabled, origin = "source", "feature flag resolved");
                enabled
            }
            Ok(None) => {
                debug!(
                    flag = self.name,
                    enabled = self.default,
                    origin = "default",
                    "feature flag resolved"
                );
                self.default
            }
            Err(error) => {
                warn!(
                    flag = self.name,
                    enabled = self.default,
                    %error,
                    "feature flag source failed; using default"
                );
                self.default
            }
        }
    }
}

impl<S> std::fmt::Debug for CachedFlag<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedFlag")
            .field("name", &self.name)
            .field("default", &self.default)
            .field("value", &self.value.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tracing_test::traced_test;

    use super::*;
    use crate::{error::FlagError, source::FixedFlags};

    struct Failing;

    impl FlagSource for Failing {
        fn read(&self, flag: &str) -> Result<Option<bool>, FlagError> {
            Err(FlagError::InvalidValue {
                flag: flag.to_owned(),
                value: "maybe".to_owned(),
            })
        }
    }

    struct Counting {
        reads: AtomicUsize,
    }

    impl FlagSource for Counting {
        fn read(&self, _flag: &str) -> Result<Option<bool>, FlagError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(Some(true))
        }
    }

    #[test]
    fn construction_does_not_touch_the_source() {
        let flag = CachedFlag::new("x", false, Counting { reads: AtomicUsize::new(0) });
        assert!(!flag.is_initialized());
        assert_eq!(flag.peek(), None);
        assert_eq!(flag.source.reads.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn repeated_reads_hit_the_source_once() {
        let flag = CachedFlag::new("x", false, Counting { reads: AtomicUsize::new(0) });
        for _ in 0..5 {
            assert!(flag.get());
        }
        assert_eq!(flag.source.reads.load(Ordering::SeqCst), 1);
        assert_eq!(flag.peek(), Some(true));
    }

    #[traced_test]
    #[test]
    fn source_value_is_logged() {
        let flag = CachedFlag::new(
            "mutex_priority_inheritance",
            false,
            FixedFlags::new().with("mutex_priority_inheritance", true),
        );
        assert!(flag.get());
        assert!(logs_contain("feature flag resolved"));
        assert!(logs_contain("mutex_priority_inheritance"));
        assert!(logs_contain("origin=\"source\""));
    }

    #[traced_test]
    #[test]
    fn silent_source_falls_back_to_default() {
        let flag = CachedFlag::new("absent", true, FixedFlags::new());
        assert!(flag.get());
        assert!(logs_contain("origin=\"default\""));
    }

    #[traced_test]
    #[test]
    fn failing_source_warns_and_uses_default() {
        let flag = CachedFlag::new("broken", false, Failing);
        assert!(!flag.get());
        assert!(flag.is_initialized());
        assert!(logs_contain("WARN"));
        assert!(logs_contain("feature flag source failed"));
        assert!(logs_contain("non-boolean value `maybe`"));
    }
}
