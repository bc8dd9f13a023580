//! 域标识与按原始整数访问的动态入口。
//!
//! 类型化 API（例如 [`AudioUsage::to_symbol`](crate::AudioUsage::to_symbol)）是首选；
//! 这里的入口面向只持有 `(域, 原始整数)` 的诊断路径，例如转储 HAL 配置时统一渲染不同字段。
//! 声道掩码按方向拆成三个域，调用方必须自己知道原始值属于哪个方向。

use alloc::boxed::Box;
use core::fmt;

use crate::{
    channel, content, device,
    error::TableError,
    flags, format, gain, source, stream,
    table::{EnumValue, Table},
    usage,
    visibility::Visibility,
};

/// 具名枚举空间，每个域恰好对应一张表。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    /// 输出方向的声道掩码。
    OutputChannelMask,
    /// 输入方向的声道掩码。
    InputChannelMask,
    /// 索引表示的声道掩码。
    IndexChannelMask,
    /// 内容类型。
    ContentType,
    /// 设备。
    Device,
    /// 单个输出标志。
    OutputFlag,
    /// 单个输入标志。
    InputFlag,
    /// 音频格式。
    Format,
    /// 增益模式。
    GainMode,
    /// 采集来源。
    Source,
    /// 流类型。
    StreamType,
    /// 用途。
    Usage,
}

impl Domain {
    /// 全部域，按声明顺序排列。
    pub const ALL: [Self; 12] = [
        Self::OutputChannelMask,
        Self::InputChannelMask,
        Self::IndexChannelMask,
        Self::ContentType,
        Self::Device,
        Self::OutputFlag,
        Self::InputFlag,
        Self::Format,
        Self::GainMode,
        Self::Source,
        Self::StreamType,
        Self::Usage,
    ];

    /// 人类可读名称。
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::OutputChannelMask => "output channel mask",
            Self::InputChannelMask => "input channel mask",
            Self::IndexChannelMask => "index channel mask",
            Self::ContentType => "audio content type",
            Self::Device => "audio device",
            Self::OutputFlag => "audio output flag",
            Self::InputFlag => "audio input flag",
            Self::Format => "audio format",
            Self::GainMode => "audio gain mode",
            Self::Source => "audio source",
            Self::StreamType => "audio stream type",
            Self::Usage => "audio usage",
        }
    }

    fn table(self) -> &'static dyn RawTable {
        match self {
            Self::OutputChannelMask => &channel::OUTPUT_MASKS,
            Self::InputChannelMask => &channel::INPUT_MASKS,
            Self::IndexChannelMask => &channel::INDEX_MASKS,
            Self::ContentType => &content::CONTENT_TYPES,
            Self::Device => &device::DEVICES,
            Self::OutputFlag => &flags::OUTPUT_FLAGS,
            Self::InputFlag => &flags::INPUT_FLAGS,
            Self::Format => &format::FORMATS,
            Self::GainMode => &gain::GAIN_MODES,
            Self::Source => &source::SOURCES,
            Self::StreamType => &stream::STREAM_TYPES,
            Self::Usage => &usage::USAGES,
        }
    }

    /// 原始整数 → 规范符号；超出域整数宽度的输入同样返回 `None`。
    #[must_use]
    pub fn project(self, raw: i64) -> Option<&'static str> {
        self.table().project_raw(raw)
    }

    /// 按当前产物的可见性解析为原始整数。
    #[must_use]
    pub fn parse(self, symbol: &str) -> Option<i64> {
        self.parse_with(symbol, Visibility::BUILD)
    }

    /// 以指定可见性解析为原始整数。
    #[must_use]
    pub fn parse_with(self, symbol: &str, visibility: Visibility) -> Option<i64> {
        self.table().parse_raw(symbol, visibility)
    }

    /// 校验本域表的结构不变量。
    pub fn validate(self) -> Result<(), TableError> {
        self.table().check()
    }

    /// 本域参与投影的 `(符号, 原始值)` 列表，按定义顺序。
    pub fn canonical_entries(self) -> impl Iterator<Item = (&'static str, i64)> {
        self.table().canonical_raw()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 原始整数 → 规范符号，等价于 [`Domain::project`]。
#[must_use]
pub fn project(domain: Domain, raw: i64) -> Option<&'static str> {
    domain.project(raw)
}

/// 符号 → 原始整数，等价于 [`Domain::parse`]。
#[must_use]
pub fn parse(domain: Domain, symbol: &str) -> Option<i64> {
    domain.parse(symbol)
}

/// 依次校验全部域，返回遇到的第一个缺陷。
pub fn validate_all() -> Result<(), TableError> {
    Domain::ALL.iter().try_for_each(|domain| domain.validate())
}

trait RawTable: Sync {
    fn project_raw(&self, raw: i64) -> Option<&'static str>;
    fn parse_raw(&self, symbol: &str, visibility: Visibility) -> Option<i64>;
    fn check(&self) -> Result<(), TableError>;
    fn canonical_raw(&self) -> Box<dyn Iterator<Item = (&'static str, i64)>>;
}

impl<T: EnumValue> RawTable for Table<T> {
    fn project_raw(&self, raw: i64) -> Option<&'static str> {
        T::from_raw(raw).and_then(|value| self.project(value))
    }

    fn parse_raw(&self, symbol: &str, visibility: Visibility) -> Option<i64> {
        self.parse_with(symbol, visibility).map(EnumValue::to_raw)
    }

    fn check(&self) -> Result<(), TableError> {
        self.validate()
    }

    fn canonical_raw(&self) -> Box<dyn Iterator<Item = (&'static str, i64)>> {
        Box::new(
            self.canonical()
                .map(|entry| (entry.symbol(), entry.value().to_raw())),
        )
    }
}
