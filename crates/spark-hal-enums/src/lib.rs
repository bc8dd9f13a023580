#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! # spark-hal-enums
//!
//! ## 定位（Why）
//! - 框架进程与厂商 HAL 组件之间只以字符串交换音频枚举（声道掩码、格式、设备、标志、用途、来源、流类型），
//!   字符串形式由外部 HAL 配置 schema 约定；本 crate 维护数值 ↔ 规范符号的双向映射表。
//! - 映射表是两个方向的唯一事实来源：每个域只声明一次有序表，投影（数值 → 名称）与解析（名称 → 数值）
//!   都由 [`Table`] 上的通用扫描完成，不为每个域重复生成代码。
//!
//! ## 交互契约（What）
//! - 投影永远不会失败：没有规范名称的值（哨兵、保留位组合）返回 `None`，调用方自行回退到数值渲染；
//! - 解析失败通过 `Option`/`Result` 显式返回，输出位置保持不变，策略（拒绝/替换默认/记录后继续）由调用方决定；
//! - 声道掩码分为输出、输入、索引三个方向，调用方必须指明方向，不存在"任意掩码"入口；
//! - `framework` 特性决定仅限框架的行是否编入产物，详见 [`Visibility`]；
//! - 关闭 `std` 后以 `no_std` 编译，但始终依赖 `alloc`。
//!
//! ## 实现策略（How）
//! - `table`：条目、角色与通用扫描、启动/测试期不变量校验；
//! - 各域模块（`channel`、`device`、`format` 等）以 newtype + 关联常量声明数值，复合值只由先前声明的离散值按位或构成；
//! - `domain`：以 [`Domain`] 标识动态选择表，供诊断工具按原始整数访问；
//! - `serde` 特性开启时，所有域类型以规范符号串行化。
//!
//! ## 风险提示（Trade-offs）
//! - 本表不是 schema 的来源，新增跨边界的值必须与外部 schema 同步修改；
//! - 不支持把组合标志集合编码为字符串列表，只支持单个枚举值。

extern crate alloc;

#[macro_use]
mod macros;

pub mod channel;
pub mod content;
pub mod device;
pub mod domain;
mod error;
pub mod flags;
pub mod format;
pub mod gain;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod source;
pub mod stream;
pub mod table;
pub mod usage;
mod visibility;

pub use crate::{
    channel::{AudioChannelMask, ChannelRepresentation},
    content::AudioContentType,
    device::AudioDevice,
    domain::Domain,
    error::{ParseEnumError, TableError},
    flags::{AudioInputFlags, AudioOutputFlags},
    format::AudioFormat,
    gain::AudioGainMode,
    source::AudioSource,
    stream::AudioStreamType,
    table::{EnumValue, Entry, Role, Table},
    usage::AudioUsage,
    visibility::Visibility,
};
