//! 构建期可见性开关。
//!
//! - `framework` 特性开启时，仅限框架的行被编入各域的解析表与投影表；
//! - 厂商侧产物关闭该特性，这些行在结构上不存在，任何厂商来源的字符串都无法解析出框架专用值；
//! - 框架进程可以用 [`Visibility::Vendor`] 显式模拟厂商侧解析，例如校验即将下发给 HAL 的字符串。

/// 解析时允许看到的行集合。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// 仅厂商可见的行参与解析。
    Vendor,
    /// 框架专用行也参与解析（前提是它们已被编入产物）。
    Framework,
}

impl Visibility {
    /// 当前产物的编译模式。
    #[cfg(feature = "framework")]
    pub const BUILD: Self = Self::Framework;

    /// 当前产物的编译模式。
    #[cfg(not(feature = "framework"))]
    pub const BUILD: Self = Self::Vendor;

    /// 是否允许框架专用行参与解析。
    #[must_use]
    pub const fn admits_framework_rows(self) -> bool {
        matches!(self, Self::Framework)
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::BUILD
    }
}
