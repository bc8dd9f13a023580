//! 流类型。

use crate::{domain::Domain, table::{Entry, Table}};

/// 旧式音量分组所用的流类型，带符号以容纳 `-1`。
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AudioStreamType(pub i32);

impl AudioStreamType {
    /// 框架内部表示"由策略决定"的默认流。
    #[cfg(feature = "framework")]
    pub const DEFAULT: Self = Self(-1);
    /// 通话。
    pub const VOICE_CALL: Self = Self(0);
    /// 系统音。
    pub const SYSTEM: Self = Self(1);
    /// 铃声。
    pub const RING: Self = Self(2);
    /// 媒体。
    pub const MUSIC: Self = Self(3);
    /// 闹钟。
    pub const ALARM: Self = Self(4);
    /// 通知。
    pub const NOTIFICATION: Self = Self(5);
    /// 蓝牙 SCO。
    pub const BLUETOOTH_SCO: Self = Self(6);
    /// 强制可闻。
    pub const ENFORCED_AUDIBLE: Self = Self(7);
    /// 拨号音。
    pub const DTMF: Self = Self(8);
    /// 文字转语音。
    pub const TTS: Self = Self(9);
    /// 无障碍。
    pub const ACCESSIBILITY: Self = Self(10);
    /// 语音助手。
    pub const ASSISTANT: Self = Self(11);
    /// 重路由。
    pub const REROUTING: Self = Self(12);
    /// 音频补丁。
    pub const PATCH: Self = Self(13);
    /// 通话助手。
    pub const CALL_ASSISTANT: Self = Self(14);
}

static ROWS: &[Entry<AudioStreamType>] = &[
    Entry::canonical("AUDIO_STREAM_VOICE_CALL", AudioStreamType::VOICE_CALL),
    Entry::canonical("AUDIO_STREAM_SYSTEM", AudioStreamType::SYSTEM),
    Entry::canonical("AUDIO_STREAM_RING", AudioStreamType::RING),
    Entry::canonical("AUDIO_STREAM_MUSIC", AudioStreamType::MUSIC),
    Entry::canonical("AUDIO_STREAM_ALARM", AudioStreamType::ALARM),
    Entry::canonical("AUDIO_STREAM_NOTIFICATION", AudioStreamType::NOTIFICATION),
    Entry::canonical("AUDIO_STREAM_BLUETOOTH_SCO", AudioStreamType::BLUETOOTH_SCO),
    Entry::canonical("AUDIO_STREAM_ENFORCED_AUDIBLE", AudioStreamType::ENFORCED_AUDIBLE),
    Entry::canonical("AUDIO_STREAM_DTMF", AudioStreamType::DTMF),
    Entry::canonical("AUDIO_STREAM_TTS", AudioStreamType::TTS),
    Entry::canonical("AUDIO_STREAM_ACCESSIBILITY", AudioStreamType::ACCESSIBILITY),
    Entry::canonical("AUDIO_STREAM_ASSISTANT", AudioStreamType::ASSISTANT),
    Entry::canonical("AUDIO_STREAM_REROUTING", AudioStreamType::REROUTING),
    Entry::canonical("AUDIO_STREAM_PATCH", AudioStreamType::PATCH),
    Entry::canonical("AUDIO_STREAM_CALL_ASSISTANT", AudioStreamType::CALL_ASSISTANT),
];

#[cfg(feature = "framework")]
static FRAMEWORK_ROWS: &[Entry<AudioStreamType>] =
    &[Entry::framework_only("AUDIO_STREAM_DEFAULT", AudioStreamType::DEFAULT)];
#[cfg(not(feature = "framework"))]
static FRAMEWORK_ROWS: &[Entry<AudioStreamType>] = &[];

/// 流类型表。
pub static STREAM_TYPES: Table<AudioStreamType> =
    Table::new(Domain::StreamType, ROWS, FRAMEWORK_ROWS);

enumerant!(AudioStreamType(i32), table = STREAM_TYPES, fallback = "{}");

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn stream_types_are_dense_from_zero() {
        for raw in 0..=14 {
            assert!(AudioStreamType(raw).to_symbol().is_some(), "{raw}");
        }
        assert_eq!(AudioStreamType(15).to_symbol(), None);
    }

    #[cfg(feature = "framework")]
    #[test]
    fn default_renders_in_framework_build() {
        assert_eq!(AudioStreamType::DEFAULT.to_string(), "AUDIO_STREAM_DEFAULT");
    }
}
