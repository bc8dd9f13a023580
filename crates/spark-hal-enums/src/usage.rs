//! # usage 模块说明
//!
//! ## 角色定位（Why）
//! - 用途描述"为什么播放"，是路由与音量策略的主要输入，也是跨边界最频繁出现的枚举之一。
//!
//! ## 契约（What）
//! - 通知的四个细分类别（7..=10）只在框架内部使用，厂商侧不能接收这些字符串；
//!   它们位于 `framework_rows`，厂商产物中不存在；
//! - 1000 起的车载用途对厂商可见。

use crate::{domain::Domain, table::{Entry, Table}};

/// 音频用途。
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AudioUsage(pub u32);

impl AudioUsage {
    /// 未知。
    pub const UNKNOWN: Self = Self(0);
    /// 媒体。
    pub const MEDIA: Self = Self(1);
    /// 语音通信。
    pub const VOICE_COMMUNICATION: Self = Self(2);
    /// 通信信令音。
    pub const VOICE_COMMUNICATION_SIGNALLING: Self = Self(3);
    /// 闹钟。
    pub const ALARM: Self = Self(4);
    /// 通知。
    pub const NOTIFICATION: Self = Self(5);
    /// 来电铃声。
    pub const NOTIFICATION_TELEPHONY_RINGTONE: Self = Self(6);
    /// 通信请求通知。
    #[cfg(feature = "framework")]
    pub const NOTIFICATION_COMMUNICATION_REQUEST: Self = Self(7);
    /// 即时通信通知。
    #[cfg(feature = "framework")]
    pub const NOTIFICATION_COMMUNICATION_INSTANT: Self = Self(8);
    /// 延迟通信通知。
    #[cfg(feature = "framework")]
    pub const NOTIFICATION_COMMUNICATION_DELAYED: Self = Self(9);
    /// 事件通知。
    #[cfg(feature = "framework")]
    pub const NOTIFICATION_EVENT: Self = Self(10);
    /// 无障碍辅助。
    pub const ASSISTANCE_ACCESSIBILITY: Self = Self(11);
    /// 导航播报。
    pub const ASSISTANCE_NAVIGATION_GUIDANCE: Self = Self(12);
    /// 界面提示音。
    pub const ASSISTANCE_SONIFICATION: Self = Self(13);
    /// 游戏。
    pub const GAME: Self = Self(14);
    /// 虚拟来源。
    pub const VIRTUAL_SOURCE: Self = Self(15);
    /// 语音助手。
    pub const ASSISTANT: Self = Self(16);
    /// 通话助手。
    pub const CALL_ASSISTANT: Self = Self(17);
    /// 紧急。
    pub const EMERGENCY: Self = Self(1000);
    /// 安全。
    pub const SAFETY: Self = Self(1001);
    /// 车辆状态。
    pub const VEHICLE_STATUS: Self = Self(1002);
    /// 公告。
    pub const ANNOUNCEMENT: Self = Self(1003);
}

static ROWS: &[Entry<AudioUsage>] = &[
    Entry::canonical("AUDIO_USAGE_UNKNOWN", AudioUsage::UNKNOWN),
    Entry::canonical("AUDIO_USAGE_MEDIA", AudioUsage::MEDIA),
    Entry::canonical("AUDIO_USAGE_VOICE_COMMUNICATION", AudioUsage::VOICE_COMMUNICATION),
    Entry::canonical(
        "AUDIO_USAGE_VOICE_COMMUNICATION_SIGNALLING",
        AudioUsage::VOICE_COMMUNICATION_SIGNALLING,
    ),
    Entry::canonical("AUDIO_USAGE_ALARM", AudioUsage::ALARM),
    Entry::canonical("AUDIO_USAGE_NOTIFICATION", AudioUsage::NOTIFICATION),
    Entry::canonical(
        "AUDIO_USAGE_NOTIFICATION_TELEPHONY_RINGTONE",
        AudioUsage::NOTIFICATION_TELEPHONY_RINGTONE,
    ),
    Entry::canonical("AUDIO_USAGE_ASSISTANCE_ACCESSIBILITY", AudioUsage::ASSISTANCE_ACCESSIBILITY),
    Entry::canonical(
        "AUDIO_USAGE_ASSISTANCE_NAVIGATION_GUIDANCE",
        AudioUsage::ASSISTANCE_NAVIGATION_GUIDANCE,
    ),
    Entry::canonical("AUDIO_USAGE_ASSISTANCE_SONIFICATION", AudioUsage::ASSISTANCE_SONIFICATION),
    Entry::canonical("AUDIO_USAGE_GAME", AudioUsage::GAME),
    Entry::canonical("AUDIO_USAGE_VIRTUAL_SOURCE", AudioUsage::VIRTUAL_SOURCE),
    Entry::canonical("AUDIO_USAGE_ASSISTANT", AudioUsage::ASSISTANT),
    Entry::canonical("AUDIO_USAGE_CALL_ASSISTANT", AudioUsage::CALL_ASSISTANT),
    Entry::canonical("AUDIO_USAGE_EMERGENCY", AudioUsage::EMERGENCY),
    Entry::canonical("AUDIO_USAGE_SAFETY", AudioUsage::SAFETY),
    Entry::canonical("AUDIO_USAGE_VEHICLE_STATUS", AudioUsage::VEHICLE_STATUS),
    Entry::canonical("AUDIO_USAGE_ANNOUNCEMENT", AudioUsage::ANNOUNCEMENT),
];

#[cfg(feature = "framework")]
static FRAMEWORK_ROWS: &[Entry<AudioUsage>] = &[
    Entry::framework_only(
        "AUDIO_USAGE_NOTIFICATION_COMMUNICATION_REQUEST",
        AudioUsage::NOTIFICATION_COMMUNICATION_REQUEST,
    ),
    Entry::framework_only(
        "AUDIO_USAGE_NOTIFICATION_COMMUNICATION_INSTANT",
        AudioUsage::NOTIFICATION_COMMUNICATION_INSTANT,
    ),
    Entry::framework_only(
        "AUDIO_USAGE_NOTIFICATION_COMMUNICATION_DELAYED",
        AudioUsage::NOTIFICATION_COMMUNICATION_DELAYED,
    ),
    Entry::framework_only("AUDIO_USAGE_NOTIFICATION_EVENT", AudioUsage::NOTIFICATION_EVENT),
];
#[cfg(not(feature = "framework"))]
static FRAMEWORK_ROWS: &[Entry<AudioUsage>] = &[];

/// 用途表。
pub static USAGES: Table<AudioUsage> = Table::new(Domain::Usage, ROWS, FRAMEWORK_ROWS);

enumerant!(AudioUsage(u32), table = USAGES, fallback = "{}");

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::visibility::Visibility;

    #[test]
    fn automotive_usages_are_vendor_visible() {
        assert_eq!(
            AudioUsage::from_symbol_with("AUDIO_USAGE_ANNOUNCEMENT", Visibility::Vendor),
            Some(AudioUsage::ANNOUNCEMENT)
        );
    }

    #[cfg(feature = "framework")]
    #[test]
    fn framework_rows_come_after_vendor_rows() {
        let symbols: Vec<_> = USAGES.entries().map(|entry| entry.symbol()).collect();
        assert_eq!(symbols.last(), Some(&"AUDIO_USAGE_NOTIFICATION_EVENT"));
        assert_eq!(USAGES.len(), 22);
    }

    #[cfg(feature = "framework")]
    #[test]
    fn emulated_vendor_parse_rejects_notification_subcategories() {
        for symbol in [
            "AUDIO_USAGE_NOTIFICATION_COMMUNICATION_REQUEST",
            "AUDIO_USAGE_NOTIFICATION_COMMUNICATION_INSTANT",
            "AUDIO_USAGE_NOTIFICATION_COMMUNICATION_DELAYED",
            "AUDIO_USAGE_NOTIFICATION_EVENT",
        ] {
            assert_eq!(AudioUsage::from_symbol_with(symbol, Visibility::Vendor), None);
            let value = AudioUsage::from_symbol(symbol).unwrap();
            assert_eq!(value.to_symbol(), Some(symbol));
        }
    }
}
