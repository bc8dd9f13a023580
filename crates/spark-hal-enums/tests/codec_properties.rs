//! 枚举编解码的跨域性质测试。
//!
//! # 测试目标（Why）
//! - 以外部 crate 视角验证"表是两个方向的唯一事实来源"：规范值往返、别名只进不出、哨兵双向排除；
//! - 逐行遍历全部表，防止新增行时只测了手写的几个样例；随机原始值与随机字符串交给 proptest。
//!
//! # 结构安排（How）
//! - 手写样例覆盖声道组合、索引公式、别名等价等固定数值；
//! - `every_row_honours_its_role` 确定性地覆盖每一个表条目；
//! - `proptest!` 块覆盖任意原始值与任意字符串。

use proptest::prelude::*;
use spark_hal_enums::{
    AudioChannelMask, AudioDevice, AudioFormat, AudioUsage, Domain, EnumValue, Role, Table, domain,
};

fn decode_out(symbol: &str) -> u32 {
    AudioChannelMask::from_out_symbol(symbol)
        .unwrap_or_else(|| panic!("{symbol} 应当可以解析"))
        .raw()
}

#[test]
fn every_table_passes_validation() {
    assert_eq!(domain::validate_all(), Ok(()));
    for domain in Domain::ALL {
        assert_eq!(domain.validate(), Ok(()), "{domain}");
    }
}

#[test]
fn stereo_is_front_left_or_front_right() {
    let stereo = decode_out("AUDIO_CHANNEL_OUT_STEREO");
    assert_eq!(
        stereo,
        AudioChannelMask::OUT_FRONT_LEFT.raw() | AudioChannelMask::OUT_FRONT_RIGHT.raw()
    );
    assert_eq!(stereo, 0x3);
}

#[test]
fn index_masks_decode_to_header_plus_low_bits() {
    for n in 1..=24u32 {
        let symbol = format!("AUDIO_CHANNEL_INDEX_MASK_{n}");
        let decoded = AudioChannelMask::from_index_symbol(&symbol).expect("索引掩码应当可以解析");
        assert_eq!(decoded.raw(), 0x8000_0000 | ((1 << n) - 1), "{symbol}");
        assert_eq!(decoded.channel_count(), n);
        assert_eq!(decoded.to_index_symbol(), Some(symbol.as_str()));
    }
    assert_eq!(
        AudioChannelMask::from_index_symbol("AUDIO_CHANNEL_INDEX_MASK_3").map(AudioChannelMask::raw),
        Some(0x8000_0007)
    );
    assert_eq!(AudioChannelMask::from_index_symbol("AUDIO_CHANNEL_INDEX_MASK_25"), None);
}

#[test]
fn legacy_channel_names_are_aliases() {
    assert_eq!(
        decode_out("AUDIO_CHANNEL_OUT_5POINT1_BACK"),
        decode_out("AUDIO_CHANNEL_OUT_5POINT1")
    );
    assert_eq!(
        AudioChannelMask::OUT_5POINT1.to_out_symbol(),
        Some("AUDIO_CHANNEL_OUT_5POINT1")
    );
    assert_eq!(
        AudioChannelMask::OUT_QUAD.to_out_symbol(),
        Some("AUDIO_CHANNEL_OUT_QUAD")
    );
    assert_eq!(decode_out("AUDIO_CHANNEL_OUT_QUAD_BACK"), 0x33);
}

#[test]
fn sentinels_are_members_but_never_convert() {
    let cases: [(Domain, i64, &str); 5] = [
        (Domain::OutputChannelMask, 0xC000_0000, "AUDIO_CHANNEL_INVALID"),
        (Domain::OutputChannelMask, 0x300F_FFFF, "AUDIO_CHANNEL_OUT_ALL"),
        (Domain::InputChannelMask, 0x77_FFFC, "AUDIO_CHANNEL_IN_ALL"),
        (Domain::IndexChannelMask, 0xC000_0000, "AUDIO_CHANNEL_INVALID"),
        (Domain::Format, 0xFFFF_FFFF, "AUDIO_FORMAT_INVALID"),
    ];
    for (domain, raw, symbol) in cases {
        assert_eq!(domain.project(raw), None, "{symbol}");
        assert_eq!(domain.parse(symbol), None, "{symbol}");
    }
    assert_eq!(AudioFormat::INVALID.to_symbol(), None);
}

#[test]
fn discrete_channels_have_no_symbol_of_their_own() {
    assert_eq!(AudioChannelMask::from_out_symbol("AUDIO_CHANNEL_OUT_FRONT_LEFT"), None);
    assert_eq!(
        AudioChannelMask::OUT_FRONT_LEFT.to_out_symbol(),
        Some("AUDIO_CHANNEL_OUT_MONO")
    );
    assert_eq!(AudioChannelMask::OUT_TOP_CENTER.to_out_symbol(), None);
}

#[test]
fn failed_parse_leaves_output_untouched() {
    let mut usage = AudioUsage::GAME;
    assert!(!AudioUsage::table().parse_into("AUDIO_USAGE_GAMES", &mut usage));
    assert_eq!(usage, AudioUsage::GAME);

    let mut device = AudioDevice::OUT_SPEAKER;
    assert!(AudioDevice::table().parse_into("AUDIO_DEVICE_NONE", &mut device));
    assert_eq!(device, AudioDevice::NONE);
}

#[test]
fn from_str_reports_domain_and_input() {
    let err = "AUDIO_FORMAT_MP4".parse::<AudioFormat>().unwrap_err();
    assert_eq!(err.domain(), Domain::Format);
    assert_eq!(err.symbol(), "AUDIO_FORMAT_MP4");
    assert_eq!(
        err.to_string(),
        "`AUDIO_FORMAT_MP4` is not a recognized audio format symbol"
    );
}

/// 收集某个域全部条目的 `(符号, 原始值, 角色)`。
fn rows_of<T: EnumValue>(table: &Table<T>) -> Vec<(&'static str, i64, Role)> {
    table
        .entries()
        .map(|entry| (entry.symbol(), entry.value().to_raw(), entry.role()))
        .collect()
}

fn all_rows() -> Vec<(Domain, &'static str, i64, Role)> {
    use spark_hal_enums::{channel, content, device, flags, format, gain, source, stream, usage};

    let tagged = |domain: Domain, rows: Vec<(&'static str, i64, Role)>| {
        rows.into_iter()
            .map(move |(symbol, raw, role)| (domain, symbol, raw, role))
            .collect::<Vec<_>>()
    };
    [
        tagged(Domain::OutputChannelMask, rows_of(&channel::OUTPUT_MASKS)),
        tagged(Domain::InputChannelMask, rows_of(&channel::INPUT_MASKS)),
        tagged(Domain::IndexChannelMask, rows_of(&channel::INDEX_MASKS)),
        tagged(Domain::ContentType, rows_of(&content::CONTENT_TYPES)),
        tagged(Domain::Device, rows_of(&device::DEVICES)),
        tagged(Domain::OutputFlag, rows_of(&flags::OUTPUT_FLAGS)),
        tagged(Domain::InputFlag, rows_of(&flags::INPUT_FLAGS)),
        tagged(Domain::Format, rows_of(&format::FORMATS)),
        tagged(Domain::GainMode, rows_of(&gain::GAIN_MODES)),
        tagged(Domain::Source, rows_of(&source::SOURCES)),
        tagged(Domain::StreamType, rows_of(&stream::STREAM_TYPES)),
        tagged(Domain::Usage, rows_of(&usage::USAGES)),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// 逐行遍历全部表：规范行往返，别名只解析不投影，哨兵双向排除。
#[test]
fn every_row_honours_its_role() {
    let rows = all_rows();
    assert!(!rows.is_empty());
    for (domain, symbol, raw, role) in rows {
        match role {
            Role::Canonical | Role::FrameworkOnly => {
                assert_eq!(domain.project(raw), Some(symbol), "{domain}: {symbol}");
                assert_eq!(domain.parse(symbol), Some(raw), "{domain}: {symbol}");
            }
            Role::Alias => {
                let canonical = domain.project(raw);
                assert!(canonical.is_some(), "{domain}: {symbol}");
                assert_ne!(canonical, Some(symbol), "{domain}: {symbol}");
                assert_eq!(domain.parse(symbol), Some(raw), "{domain}: {symbol}");
            }
            Role::Sentinel => {
                assert_eq!(domain.project(raw), None, "{domain}: {symbol}");
                assert_eq!(domain.parse(symbol), None, "{domain}: {symbol}");
            }
        }
    }
}

proptest! {
    /// 任意原始值：凡能投影出符号的，解析该符号必回到同一数值。
    #[test]
    fn prop_projection_round_trips(raw in any::<u32>(), pick in 0usize..12) {
        let domain = Domain::ALL[pick];
        if let Some(symbol) = domain.project(i64::from(raw)) {
            prop_assert_eq!(domain.parse(symbol), Some(i64::from(raw)));
        }
    }

    /// 任意字符串：解析要么失败，要么结果能投影回某个规范符号。
    #[test]
    fn prop_parse_never_invents_values(symbol in "AUDIO_[A-Z0-9_]{1,32}", pick in 0usize..12) {
        let domain = Domain::ALL[pick];
        if let Some(raw) = domain.parse(&symbol) {
            prop_assert!(domain.project(raw).is_some());
        }
    }

    /// 带符号域：宽度之外的原始值一律无名。
    #[test]
    fn prop_out_of_width_values_are_unnamed(raw in (i64::from(u32::MAX) + 1)..i64::MAX) {
        for domain in Domain::ALL {
            prop_assert_eq!(domain.project(raw), None);
        }
    }
}
