//! 采集来源。
//!
//! `INVALID`（-1）只在框架进程内部使用，厂商产物不包含这一行，也就无法从字符串解析出它。

use crate::{domain::Domain, table::{Entry, Table}};

/// 音频采集来源，带符号以容纳 `-1`。
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AudioSource(pub i32);

impl AudioSource {
    /// 框架内部的无效来源。
    #[cfg(feature = "framework")]
    pub const INVALID: Self = Self(-1);
    /// 默认。
    pub const DEFAULT: Self = Self(0);
    /// 麦克风。
    pub const MIC: Self = Self(1);
    /// 通话上行。
    pub const VOICE_UPLINK: Self = Self(2);
    /// 通话下行。
    pub const VOICE_DOWNLINK: Self = Self(3);
    /// 通话上下行混合。
    pub const VOICE_CALL: Self = Self(4);
    /// 摄像。
    pub const CAMCORDER: Self = Self(5);
    /// 语音识别。
    pub const VOICE_RECOGNITION: Self = Self(6);
    /// 语音通信。
    pub const VOICE_COMMUNICATION: Self = Self(7);
    /// 远程混音。
    pub const REMOTE_SUBMIX: Self = Self(8);
    /// 未经处理的原始采集。
    pub const UNPROCESSED: Self = Self(9);
    /// 演唱/演奏。
    pub const VOICE_PERFORMANCE: Self = Self(10);
    /// 回声参考。
    pub const ECHO_REFERENCE: Self = Self(1997);
    /// 收音机调谐器。
    pub const FM_TUNER: Self = Self(1998);
    /// 唤醒词。
    pub const HOTWORD: Self = Self(1999);
}

static ROWS: &[Entry<AudioSource>] = &[
    Entry::canonical("AUDIO_SOURCE_DEFAULT", AudioSource::DEFAULT),
    Entry::canonical("AUDIO_SOURCE_MIC", AudioSource::MIC),
    Entry::canonical("AUDIO_SOURCE_VOICE_UPLINK", AudioSource::VOICE_UPLINK),
    Entry::canonical("AUDIO_SOURCE_VOICE_DOWNLINK", AudioSource::VOICE_DOWNLINK),
    Entry::canonical("AUDIO_SOURCE_VOICE_CALL", AudioSource::VOICE_CALL),
    Entry::canonical("AUDIO_SOURCE_CAMCORDER", AudioSource::CAMCORDER),
    Entry::canonical("AUDIO_SOURCE_VOICE_RECOGNITION", AudioSource::VOICE_RECOGNITION),
    Entry::canonical("AUDIO_SOURCE_VOICE_COMMUNICATION", AudioSource::VOICE_COMMUNICATION),
    Entry::canonical("AUDIO_SOURCE_REMOTE_SUBMIX", AudioSource::REMOTE_SUBMIX),
    Entry::canonical("AUDIO_SOURCE_UNPROCESSED", AudioSource::UNPROCESSED),
    Entry::canonical("AUDIO_SOURCE_VOICE_PERFORMANCE", AudioSource::VOICE_PERFORMANCE),
    Entry::canonical("AUDIO_SOURCE_ECHO_REFERENCE", AudioSource::ECHO_REFERENCE),
    Entry::canonical("AUDIO_SOURCE_FM_TUNER", AudioSource::FM_TUNER),
    Entry::canonical("AUDIO_SOURCE_HOTWORD", AudioSource::HOTWORD),
];

#[cfg(feature = "framework")]
static FRAMEWORK_ROWS: &[Entry<AudioSource>] =
    &[Entry::framework_only("AUDIO_SOURCE_INVALID", AudioSource::INVALID)];
#[cfg(not(feature = "framework"))]
static FRAMEWORK_ROWS: &[Entry<AudioSource>] = &[];

/// 采集来源表。
pub static SOURCES: Table<AudioSource> = Table::new(Domain::Source, ROWS, FRAMEWORK_ROWS);

enumerant!(AudioSource(i32), table = SOURCES, fallback = "{}");
