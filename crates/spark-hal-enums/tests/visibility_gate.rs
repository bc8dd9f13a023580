//! 可见性开关的集成测试。
//!
//! # 测试目标（Why）
//! - 厂商产物（关闭 `framework` 特性）在结构上不包含框架专用行，任何来源的字符串都无法解析出它们；
//! - 框架产物既能解析也能投影这些行，并且可以显式模拟厂商侧解析。
//!
//! # 运行方式（How）
//! - 默认特性下运行框架侧断言；
//! - `cargo test -p spark-hal-enums --no-default-features --features std` 运行厂商侧断言。

use spark_hal_enums::{AudioSource, AudioStreamType, AudioUsage, Domain, Visibility};

const FRAMEWORK_ONLY_USAGES: [&str; 4] = [
    "AUDIO_USAGE_NOTIFICATION_COMMUNICATION_REQUEST",
    "AUDIO_USAGE_NOTIFICATION_COMMUNICATION_INSTANT",
    "AUDIO_USAGE_NOTIFICATION_COMMUNICATION_DELAYED",
    "AUDIO_USAGE_NOTIFICATION_EVENT",
];

#[test]
fn vendor_visibility_never_parses_framework_rows() {
    for symbol in FRAMEWORK_ONLY_USAGES {
        assert_eq!(AudioUsage::from_symbol_with(symbol, Visibility::Vendor), None);
        assert_eq!(Domain::Usage.parse_with(symbol, Visibility::Vendor), None);
    }
    assert_eq!(
        AudioSource::from_symbol_with("AUDIO_SOURCE_INVALID", Visibility::Vendor),
        None
    );
    assert_eq!(
        AudioStreamType::from_symbol_with("AUDIO_STREAM_DEFAULT", Visibility::Vendor),
        None
    );
}

#[test]
fn vendor_visible_rows_parse_in_every_mode() {
    for visibility in [Visibility::Vendor, Visibility::Framework] {
        assert_eq!(
            AudioUsage::from_symbol_with("AUDIO_USAGE_NOTIFICATION", visibility),
            Some(AudioUsage::NOTIFICATION)
        );
    }
}

#[cfg(feature = "framework")]
mod framework_build {
    use super::*;

    #[test]
    fn framework_rows_parse_and_project_back() {
        assert_eq!(Visibility::BUILD, Visibility::Framework);
        for symbol in FRAMEWORK_ONLY_USAGES {
            let usage: AudioUsage = symbol.parse().expect("框架产物应当识别框架专用用途");
            assert_eq!(usage.to_symbol(), Some(symbol));
            assert_eq!(usage.to_string(), symbol);
        }
        assert_eq!(
            "AUDIO_USAGE_NOTIFICATION_EVENT".parse::<AudioUsage>(),
            Ok(AudioUsage::NOTIFICATION_EVENT)
        );
    }

    #[test]
    fn negative_framework_values_render() {
        assert_eq!(AudioSource::INVALID.to_symbol(), Some("AUDIO_SOURCE_INVALID"));
        assert_eq!(AudioStreamType::DEFAULT.to_symbol(), Some("AUDIO_STREAM_DEFAULT"));
        assert_eq!(Domain::Source.project(-1), Some("AUDIO_SOURCE_INVALID"));
    }
}

#[cfg(not(feature = "framework"))]
mod vendor_build {
    use super::*;

    #[test]
    fn framework_rows_are_not_compiled_in() {
        assert_eq!(Visibility::BUILD, Visibility::Vendor);
        for symbol in FRAMEWORK_ONLY_USAGES {
            assert!(symbol.parse::<AudioUsage>().is_err());
            assert_eq!(AudioUsage::from_symbol_with(symbol, Visibility::Framework), None);
        }
        for raw in 7..=10 {
            assert_eq!(AudioUsage(raw).to_symbol(), None);
            assert_eq!(AudioUsage(raw).to_string(), raw.to_string());
        }
        assert_eq!(Domain::StreamType.project(-1), None);
    }
}
