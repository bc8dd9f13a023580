//! 输出/输入流标志。
//!
//! 标志在 HAL 接口上以位集合出现，但字符串边界只交换单个标志；组合值没有符号，
//! `to_symbol` 返回 `None`，`Display` 回退为十六进制。

use core::ops::BitOr;

use crate::{domain::Domain, table::{Entry, Table}};

/// 输出流标志。
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AudioOutputFlags(pub u32);

impl AudioOutputFlags {
    /// 无标志。
    pub const NONE: Self = Self(0x0);
    /// 直通，不经混音。
    pub const DIRECT: Self = Self(0x1);
    /// 主输出。
    pub const PRIMARY: Self = Self(0x2);
    /// 低延迟快速通路。
    pub const FAST: Self = Self(0x4);
    /// 深缓冲。
    pub const DEEP_BUFFER: Self = Self(0x8);
    /// 压缩卸载。
    pub const COMPRESS_OFFLOAD: Self = Self(0x10);
    /// 非阻塞写。
    pub const NON_BLOCKING: Self = Self(0x20);
    /// 硬件音画同步。
    pub const HW_AV_SYNC: Self = Self(0x40);
    /// 文字转语音。
    pub const TTS: Self = Self(0x80);
    /// 原始数据，不做处理。
    pub const RAW: Self = Self(0x100);
    /// 同步。
    pub const SYNC: Self = Self(0x200);
    /// IEC958 非音频负载。
    pub const IEC958_NONAUDIO: Self = Self(0x400);
    /// 直通 PCM。
    pub const DIRECT_PCM: Self = Self(0x2000);
    /// MMAP 无中断。
    pub const MMAP_NOIRQ: Self = Self(0x4000);
    /// VoIP 下行。
    pub const VOIP_RX: Self = Self(0x8000);
    /// 通话中音乐。
    pub const INCALL_MUSIC: Self = Self(0x10000);
    /// 无缝卸载。
    pub const GAPLESS_OFFLOAD: Self = Self(0x20000);

    /// 是否包含 `other` 的全部位。
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for AudioOutputFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// 输入流标志。
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AudioInputFlags(pub u32);

impl AudioInputFlags {
    /// 无标志。
    pub const NONE: Self = Self(0x0);
    /// 低延迟快速通路。
    pub const FAST: Self = Self(0x1);
    /// 硬件唤醒词。
    pub const HW_HOTWORD: Self = Self(0x2);
    /// 原始数据。
    pub const RAW: Self = Self(0x4);
    /// 同步。
    pub const SYNC: Self = Self(0x8);
    /// MMAP 无中断。
    pub const MMAP_NOIRQ: Self = Self(0x10);
    /// VoIP 上行。
    pub const VOIP_TX: Self = Self(0x20);
    /// 硬件音画同步。
    pub const HW_AV_SYNC: Self = Self(0x40);
    /// 直通。
    pub const DIRECT: Self = Self(0x80);

    /// 是否包含 `other` 的全部位。
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for AudioInputFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

static OUTPUT_ROWS: &[Entry<AudioOutputFlags>] = &[
    Entry::canonical("AUDIO_OUTPUT_FLAG_NONE", AudioOutputFlags::NONE),
    Entry::canonical("AUDIO_OUTPUT_FLAG_DIRECT", AudioOutputFlags::DIRECT),
    Entry::canonical("AUDIO_OUTPUT_FLAG_PRIMARY", AudioOutputFlags::PRIMARY),
    Entry::canonical("AUDIO_OUTPUT_FLAG_FAST", AudioOutputFlags::FAST),
    Entry::canonical("AUDIO_OUTPUT_FLAG_DEEP_BUFFER", AudioOutputFlags::DEEP_BUFFER),
    Entry::canonical("AUDIO_OUTPUT_FLAG_COMPRESS_OFFLOAD", AudioOutputFlags::COMPRESS_OFFLOAD),
    Entry::canonical("AUDIO_OUTPUT_FLAG_NON_BLOCKING", AudioOutputFlags::NON_BLOCKING),
    Entry::canonical("AUDIO_OUTPUT_FLAG_HW_AV_SYNC", AudioOutputFlags::HW_AV_SYNC),
    Entry::canonical("AUDIO_OUTPUT_FLAG_TTS", AudioOutputFlags::TTS),
    Entry::canonical("AUDIO_OUTPUT_FLAG_RAW", AudioOutputFlags::RAW),
    Entry::canonical("AUDIO_OUTPUT_FLAG_SYNC", AudioOutputFlags::SYNC),
    Entry::canonical("AUDIO_OUTPUT_FLAG_IEC958_NONAUDIO", AudioOutputFlags::IEC958_NONAUDIO),
    Entry::canonical("AUDIO_OUTPUT_FLAG_DIRECT_PCM", AudioOutputFlags::DIRECT_PCM),
    Entry::canonical("AUDIO_OUTPUT_FLAG_MMAP_NOIRQ", AudioOutputFlags::MMAP_NOIRQ),
    Entry::canonical("AUDIO_OUTPUT_FLAG_VOIP_RX", AudioOutputFlags::VOIP_RX),
    Entry::canonical("AUDIO_OUTPUT_FLAG_INCALL_MUSIC", AudioOutputFlags::INCALL_MUSIC),
    Entry::canonical("AUDIO_OUTPUT_FLAG_GAPLESS_OFFLOAD", AudioOutputFlags::GAPLESS_OFFLOAD),
];

static INPUT_ROWS: &[Entry<AudioInputFlags>] = &[
    Entry::canonical("AUDIO_INPUT_FLAG_NONE", AudioInputFlags::NONE),
    Entry::canonical("AUDIO_INPUT_FLAG_FAST", AudioInputFlags::FAST),
    Entry::canonical("AUDIO_INPUT_FLAG_HW_HOTWORD", AudioInputFlags::HW_HOTWORD),
    Entry::canonical("AUDIO_INPUT_FLAG_RAW", AudioInputFlags::RAW),
    Entry::canonical("AUDIO_INPUT_FLAG_SYNC", AudioInputFlags::SYNC),
    Entry::canonical("AUDIO_INPUT_FLAG_MMAP_NOIRQ", AudioInputFlags::MMAP_NOIRQ),
    Entry::canonical("AUDIO_INPUT_FLAG_VOIP_TX", AudioInputFlags::VOIP_TX),
    Entry::canonical("AUDIO_INPUT_FLAG_HW_AV_SYNC", AudioInputFlags::HW_AV_SYNC),
    Entry::canonical("AUDIO_INPUT_FLAG_DIRECT", AudioInputFlags::DIRECT),
];

/// 输出标志表。
pub static OUTPUT_FLAGS: Table<AudioOutputFlags> = Table::new(Domain::OutputFlag, OUTPUT_ROWS, &[]);

/// 输入标志表。
pub static INPUT_FLAGS: Table<AudioInputFlags> = Table::new(Domain::InputFlag, INPUT_ROWS, &[]);

enumerant!(AudioOutputFlags(u32), table = OUTPUT_FLAGS, fallback = "{:#x}");
enumerant!(AudioInputFlags(u32), table = INPUT_FLAGS, fallback = "{:#x}");
