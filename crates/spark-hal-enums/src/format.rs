//! # format 模块说明
//!
//! ## 角色定位（Why）
//! - 格式值分为两段：最高字节是主类（PCM、MP3、AAC……），低三字节是主类内部的子类型；
//! - 子类型常量只在所属主类内有意义，AAC 的 `0x2`（LC）与 PCM 的 `0x2`（8 bit）毫无关系。
//!
//! ## 契约（What）
//! - 带子类型的格式一律由 [`AudioFormat::with_sub`] 组合主类与子类型常量，不写独立的魔数；
//! - [`AudioFormat::sub_format`] 只返回低三字节，调用方只能在同一主类内比较；
//!   [`AudioFormat::is_same_sub_format`] 在主类不同的情况下恒为 `false`；
//! - `INVALID`（全 1）是哨兵；`PCM` 与 `DEFAULT` 数值相同（0），只作为常量存在，不参与字符串转换。

use crate::{domain::Domain, table::{Entry, Table}};

/// 音频格式：主类 | 子类型。
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AudioFormat(pub u32);

/// PCM 子类型。
pub mod pcm {
    /// 有符号 16 位。
    pub const SUB_16_BIT: u32 = 0x1;
    /// 无符号 8 位。
    pub const SUB_8_BIT: u32 = 0x2;
    /// 有符号 32 位。
    pub const SUB_32_BIT: u32 = 0x3;
    /// 32 位容器中的 Q8.23。
    pub const SUB_8_24_BIT: u32 = 0x4;
    /// 单精度浮点。
    pub const SUB_FLOAT: u32 = 0x5;
    /// 紧凑 24 位。
    pub const SUB_24_BIT_PACKED: u32 = 0x6;
}

/// AAC 族（AAC、ADTS、LATM）共享的子类型。
pub mod aac {
    /// AAC MAIN。
    pub const MAIN: u32 = 0x1;
    /// AAC LC。
    pub const LC: u32 = 0x2;
    /// AAC SSR。
    pub const SSR: u32 = 0x4;
    /// AAC LTP。
    pub const LTP: u32 = 0x8;
    /// AAC HE V1。
    pub const HE_V1: u32 = 0x10;
    /// AAC SCALABLE。
    pub const SCALABLE: u32 = 0x20;
    /// AAC ERLC。
    pub const ERLC: u32 = 0x40;
    /// AAC LD。
    pub const LD: u32 = 0x80;
    /// AAC HE V2。
    pub const HE_V2: u32 = 0x100;
    /// AAC ELD。
    pub const ELD: u32 = 0x200;
    /// AAC XHE。
    pub const XHE: u32 = 0x300;
}

/// E-AC3 子类型。
pub mod e_ac3 {
    /// 联合对象编码。
    pub const JOC: u32 = 0x1;
}

/// Dolby MAT 子类型。
pub mod mat {
    /// MAT 1.0。
    pub const V1_0: u32 = 0x1;
    /// MAT 2.0。
    pub const V2_0: u32 = 0x2;
    /// MAT 2.1。
    pub const V2_1: u32 = 0x3;
}

/// MPEG-H 子类型（profile 与 level）。
pub mod mpegh {
    /// 基线 profile，level 3。
    pub const BL_L3: u32 = 0x13;
    /// 基线 profile，level 4。
    pub const BL_L4: u32 = 0x14;
    /// 低复杂度 profile，level 3。
    pub const LC_L3: u32 = 0x23;
    /// 低复杂度 profile，level 4。
    pub const LC_L4: u32 = 0x24;
}

impl AudioFormat {
    /// 主类所在位。
    pub const MAIN_MASK: u32 = 0xFF00_0000;
    /// 子类型所在位。
    pub const SUB_MASK: u32 = 0x00FF_FFFF;

    /// 哨兵：无效格式。
    pub const INVALID: Self = Self(0xFFFF_FFFF);
    /// 默认格式。
    pub const DEFAULT: Self = Self(0);
    /// PCM 主类，数值上与 `DEFAULT` 相同，没有独立的符号。
    pub const PCM: Self = Self(0);
    /// PCM 16 bit。
    pub const PCM_16_BIT: Self = Self::PCM.with_sub(pcm::SUB_16_BIT);
    /// PCM 8 bit。
    pub const PCM_8_BIT: Self = Self::PCM.with_sub(pcm::SUB_8_BIT);
    /// PCM 32 bit。
    pub const PCM_32_BIT: Self = Self::PCM.with_sub(pcm::SUB_32_BIT);
    /// PCM 8 24 bit。
    pub const PCM_8_24_BIT: Self = Self::PCM.with_sub(pcm::SUB_8_24_BIT);
    /// PCM float。
    pub const PCM_FLOAT: Self = Self::PCM.with_sub(pcm::SUB_FLOAT);
    /// PCM 24 bit packed。
    pub const PCM_24_BIT_PACKED: Self = Self::PCM.with_sub(pcm::SUB_24_BIT_PACKED);
    /// MP3 主类。
    pub const MP3: Self = Self(0x0100_0000);
    /// AMR-NB 主类。
    pub const AMR_NB: Self = Self(0x0200_0000);
    /// AMR-WB 主类。
    pub const AMR_WB: Self = Self(0x0300_0000);
    /// AAC 主类。
    pub const AAC: Self = Self(0x0400_0000);
    /// AAC MAIN。
    pub const AAC_MAIN: Self = Self::AAC.with_sub(aac::MAIN);
    /// AAC LC。
    pub const AAC_LC: Self = Self::AAC.with_sub(aac::LC);
    /// AAC SSR。
    pub const AAC_SSR: Self = Self::AAC.with_sub(aac::SSR);
    /// AAC LTP。
    pub const AAC_LTP: Self = Self::AAC.with_sub(aac::LTP);
    /// AAC HE V1。
    pub const AAC_HE_V1: Self = Self::AAC.with_sub(aac::HE_V1);
    /// AAC SCALABLE。
    pub const AAC_SCALABLE: Self = Self::AAC.with_sub(aac::SCALABLE);
    /// AAC ERLC。
    pub const AAC_ERLC: Self = Self::AAC.with_sub(aac::ERLC);
    /// AAC LD。
    pub const AAC_LD: Self = Self::AAC.with_sub(aac::LD);
    /// AAC HE V2。
    pub const AAC_HE_V2: Self = Self::AAC.with_sub(aac::HE_V2);
    /// AAC ELD。
    pub const AAC_ELD: Self = Self::AAC.with_sub(aac::ELD);
    /// AAC XHE。
    pub const AAC_XHE: Self = Self::AAC.with_sub(aac::XHE);
    /// HE-AAC-V1 主类。
    pub const HE_AAC_V1: Self = Self(0x0500_0000);
    /// HE-AAC-V2 主类。
    pub const HE_AAC_V2: Self = Self(0x0600_0000);
    /// VORBIS 主类。
    pub const VORBIS: Self = Self(0x0700_0000);
    /// OPUS 主类。
    pub const OPUS: Self = Self(0x0800_0000);
    /// AC3 主类。
    pub const AC3: Self = Self(0x0900_0000);
    /// E-AC3 主类。
    pub const E_AC3: Self = Self(0x0A00_0000);
    /// E AC3 JOC。
    pub const E_AC3_JOC: Self = Self::E_AC3.with_sub(e_ac3::JOC);
    /// DTS 主类。
    pub const DTS: Self = Self(0x0B00_0000);
    /// DTS-HD 主类。
    pub const DTS_HD: Self = Self(0x0C00_0000);
    /// IEC61937 主类。
    pub const IEC61937: Self = Self(0x0D00_0000);
    /// DOLBY-TRUEHD 主类。
    pub const DOLBY_TRUEHD: Self = Self(0x0E00_0000);
    /// EVRC 主类。
    pub const EVRC: Self = Self(0x1000_0000);
    /// EVRCB 主类。
    pub const EVRCB: Self = Self(0x1100_0000);
    /// EVRCWB 主类。
    pub const EVRCWB: Self = Self(0x1200_0000);
    /// EVRCNW 主类。
    pub const EVRCNW: Self = Self(0x1300_0000);
    /// AAC-ADIF 主类。
    pub const AAC_ADIF: Self = Self(0x1400_0000);
    /// WMA 主类。
    pub const WMA: Self = Self(0x1500_0000);
    /// WMA-PRO 主类。
    pub const WMA_PRO: Self = Self(0x1600_0000);
    /// AMR-WB-PLUS 主类。
    pub const AMR_WB_PLUS: Self = Self(0x1700_0000);
    /// MP2 主类。
    pub const MP2: Self = Self(0x1800_0000);
    /// QCELP 主类。
    pub const QCELP: Self = Self(0x1900_0000);
    /// DSD 主类。
    pub const DSD: Self = Self(0x1A00_0000);
    /// FLAC 主类。
    pub const FLAC: Self = Self(0x1B00_0000);
    /// ALAC 主类。
    pub const ALAC: Self = Self(0x1C00_0000);
    /// APE 主类。
    pub const APE: Self = Self(0x1D00_0000);
    /// AAC-ADTS 主类。
    pub const AAC_ADTS: Self = Self(0x1E00_0000);
    /// AAC ADTS MAIN。
    pub const AAC_ADTS_MAIN: Self = Self::AAC_ADTS.with_sub(aac::MAIN);
    /// AAC ADTS LC。
    pub const AAC_ADTS_LC: Self = Self::AAC_ADTS.with_sub(aac::LC);
    /// AAC ADTS SSR。
    pub const AAC_ADTS_SSR: Self = Self::AAC_ADTS.with_sub(aac::SSR);
    /// AAC ADTS LTP。
    pub const AAC_ADTS_LTP: Self = Self::AAC_ADTS.with_sub(aac::LTP);
    /// AAC ADTS HE V1。
    pub const AAC_ADTS_HE_V1: Self = Self::AAC_ADTS.with_sub(aac::HE_V1);
    /// AAC ADTS SCALABLE。
    pub const AAC_ADTS_SCALABLE: Self = Self::AAC_ADTS.with_sub(aac::SCALABLE);
    /// AAC ADTS ERLC。
    pub const AAC_ADTS_ERLC: Self = Self::AAC_ADTS.with_sub(aac::ERLC);
    /// AAC ADTS LD。
    pub const AAC_ADTS_LD: Self = Self::AAC_ADTS.with_sub(aac::LD);
    /// AAC ADTS HE V2。
    pub const AAC_ADTS_HE_V2: Self = Self::AAC_ADTS.with_sub(aac::HE_V2);
    /// AAC ADTS ELD。
    pub const AAC_ADTS_ELD: Self = Self::AAC_ADTS.with_sub(aac::ELD);
    /// AAC ADTS XHE。
    pub const AAC_ADTS_XHE: Self = Self::AAC_ADTS.with_sub(aac::XHE);
    /// SBC 主类。
    pub const SBC: Self = Self(0x1F00_0000);
    /// APTX 主类。
    pub const APTX: Self = Self(0x2000_0000);
    /// APTX-HD 主类。
    pub const APTX_HD: Self = Self(0x2100_0000);
    /// AC4 主类。
    pub const AC4: Self = Self(0x2200_0000);
    /// LDAC 主类。
    pub const LDAC: Self = Self(0x2300_0000);
    /// MAT 主类。
    pub const MAT: Self = Self(0x2400_0000);
    /// MAT 1.0。
    pub const MAT_1_0: Self = Self::MAT.with_sub(mat::V1_0);
    /// MAT 2.0。
    pub const MAT_2_0: Self = Self::MAT.with_sub(mat::V2_0);
    /// MAT 2.1。
    pub const MAT_2_1: Self = Self::MAT.with_sub(mat::V2_1);
    /// AAC-LATM 主类。
    pub const AAC_LATM: Self = Self(0x2500_0000);
    /// AAC LATM LC。
    pub const AAC_LATM_LC: Self = Self::AAC_LATM.with_sub(aac::LC);
    /// AAC LATM HE V1。
    pub const AAC_LATM_HE_V1: Self = Self::AAC_LATM.with_sub(aac::HE_V1);
    /// AAC LATM HE V2。
    pub const AAC_LATM_HE_V2: Self = Self::AAC_LATM.with_sub(aac::HE_V2);
    /// CELT 主类。
    pub const CELT: Self = Self(0x2600_0000);
    /// APTX-ADAPTIVE 主类。
    pub const APTX_ADAPTIVE: Self = Self(0x2700_0000);
    /// LHDC 主类。
    pub const LHDC: Self = Self(0x2800_0000);
    /// LHDC-LL 主类。
    pub const LHDC_LL: Self = Self(0x2900_0000);
    /// APTX-TWSP 主类。
    pub const APTX_TWSP: Self = Self(0x2A00_0000);
    /// LC3 主类。
    pub const LC3: Self = Self(0x2B00_0000);
    /// MPEGH 主类。
    pub const MPEGH: Self = Self(0x2C00_0000);
    /// MPEGH BL L3。
    pub const MPEGH_BL_L3: Self = Self::MPEGH.with_sub(mpegh::BL_L3);
    /// MPEGH BL L4。
    pub const MPEGH_BL_L4: Self = Self::MPEGH.with_sub(mpegh::BL_L4);
    /// MPEGH LC L3。
    pub const MPEGH_LC_L3: Self = Self::MPEGH.with_sub(mpegh::LC_L3);
    /// MPEGH LC L4。
    pub const MPEGH_LC_L4: Self = Self::MPEGH.with_sub(mpegh::LC_L4);

    /// 以主类与子类型组合格式；子类型超出 [`Self::SUB_MASK`] 的位被丢弃。
    #[must_use]
    pub const fn with_sub(self, sub: u32) -> Self {
        Self((self.0 & Self::MAIN_MASK) | (sub & Self::SUB_MASK))
    }

    /// 仅保留主类。
    #[must_use]
    pub const fn main_format(self) -> Self {
        Self(self.0 & Self::MAIN_MASK)
    }

    /// 子类型位，只在同一主类内有意义。
    #[must_use]
    pub const fn sub_format(self) -> u32 {
        self.0 & Self::SUB_MASK
    }

    /// 子类型相同，且主类相同。
    #[must_use]
    pub const fn is_same_sub_format(self, other: Self) -> bool {
        self.main_format().0 == other.main_format().0 && self.sub_format() == other.sub_format()
    }

    /// 是否为线性 PCM（主类为 0）。
    #[must_use]
    pub const fn is_linear_pcm(self) -> bool {
        self.main_format().0 == Self::PCM.0
    }
}

static ROWS: &[Entry<AudioFormat>] = &[
    Entry::sentinel("AUDIO_FORMAT_INVALID", AudioFormat::INVALID),
    Entry::canonical("AUDIO_FORMAT_DEFAULT", AudioFormat::DEFAULT),
    Entry::canonical("AUDIO_FORMAT_PCM_16_BIT", AudioFormat::PCM_16_BIT),
    Entry::canonical("AUDIO_FORMAT_PCM_8_BIT", AudioFormat::PCM_8_BIT),
    Entry::canonical("AUDIO_FORMAT_PCM_32_BIT", AudioFormat::PCM_32_BIT),
    Entry::canonical("AUDIO_FORMAT_PCM_8_24_BIT", AudioFormat::PCM_8_24_BIT),
    Entry::canonical("AUDIO_FORMAT_PCM_FLOAT", AudioFormat::PCM_FLOAT),
    Entry::canonical("AUDIO_FORMAT_PCM_24_BIT_PACKED", AudioFormat::PCM_24_BIT_PACKED),
    Entry::canonical("AUDIO_FORMAT_MP3", AudioFormat::MP3),
    Entry::canonical("AUDIO_FORMAT_AMR_NB", AudioFormat::AMR_NB),
    Entry::canonical("AUDIO_FORMAT_AMR_WB", AudioFormat::AMR_WB),
    Entry::canonical("AUDIO_FORMAT_AAC", AudioFormat::AAC),
    Entry::canonical("AUDIO_FORMAT_AAC_MAIN", AudioFormat::AAC_MAIN),
    Entry::canonical("AUDIO_FORMAT_AAC_LC", AudioFormat::AAC_LC),
    Entry::canonical("AUDIO_FORMAT_AAC_SSR", AudioFormat::AAC_SSR),
    Entry::canonical("AUDIO_FORMAT_AAC_LTP", AudioFormat::AAC_LTP),
    Entry::canonical("AUDIO_FORMAT_AAC_HE_V1", AudioFormat::AAC_HE_V1),
    Entry::canonical("AUDIO_FORMAT_AAC_SCALABLE", AudioFormat::AAC_SCALABLE),
    Entry::canonical("AUDIO_FORMAT_AAC_ERLC", AudioFormat::AAC_ERLC),
    Entry::canonical("AUDIO_FORMAT_AAC_LD", AudioFormat::AAC_LD),
    Entry::canonical("AUDIO_FORMAT_AAC_HE_V2", AudioFormat::AAC_HE_V2),
    Entry::canonical("AUDIO_FORMAT_AAC_ELD", AudioFormat::AAC_ELD),
    Entry::canonical("AUDIO_FORMAT_AAC_XHE", AudioFormat::AAC_XHE),
    Entry::canonical("AUDIO_FORMAT_HE_AAC_V1", AudioFormat::HE_AAC_V1),
    Entry::canonical("AUDIO_FORMAT_HE_AAC_V2", AudioFormat::HE_AAC_V2),
    Entry::canonical("AUDIO_FORMAT_VORBIS", AudioFormat::VORBIS),
    Entry::canonical("AUDIO_FORMAT_OPUS", AudioFormat::OPUS),
    Entry::canonical("AUDIO_FORMAT_AC3", AudioFormat::AC3),
    Entry::canonical("AUDIO_FORMAT_E_AC3", AudioFormat::E_AC3),
    Entry::canonical("AUDIO_FORMAT_E_AC3_JOC", AudioFormat::E_AC3_JOC),
    Entry::canonical("AUDIO_FORMAT_DTS", AudioFormat::DTS),
    Entry::canonical("AUDIO_FORMAT_DTS_HD", AudioFormat::DTS_HD),
    Entry::canonical("AUDIO_FORMAT_IEC61937", AudioFormat::IEC61937),
    Entry::canonical("AUDIO_FORMAT_DOLBY_TRUEHD", AudioFormat::DOLBY_TRUEHD),
    Entry::canonical("AUDIO_FORMAT_EVRC", AudioFormat::EVRC),
    Entry::canonical("AUDIO_FORMAT_EVRCB", AudioFormat::EVRCB),
    Entry::canonical("AUDIO_FORMAT_EVRCWB", AudioFormat::EVRCWB),
    Entry::canonical("AUDIO_FORMAT_EVRCNW", AudioFormat::EVRCNW),
    Entry::canonical("AUDIO_FORMAT_AAC_ADIF", AudioFormat::AAC_ADIF),
    Entry::canonical("AUDIO_FORMAT_WMA", AudioFormat::WMA),
    Entry::canonical("AUDIO_FORMAT_WMA_PRO", AudioFormat::WMA_PRO),
    Entry::canonical("AUDIO_FORMAT_AMR_WB_PLUS", AudioFormat::AMR_WB_PLUS),
    Entry::canonical("AUDIO_FORMAT_MP2", AudioFormat::MP2),
    Entry::canonical("AUDIO_FORMAT_QCELP", AudioFormat::QCELP),
    Entry::canonical("AUDIO_FORMAT_DSD", AudioFormat::DSD),
    Entry::canonical("AUDIO_FORMAT_FLAC", AudioFormat::FLAC),
    Entry::canonical("AUDIO_FORMAT_ALAC", AudioFormat::ALAC),
    Entry::canonical("AUDIO_FORMAT_APE", AudioFormat::APE),
    Entry::canonical("AUDIO_FORMAT_AAC_ADTS", AudioFormat::AAC_ADTS),
    Entry::canonical("AUDIO_FORMAT_AAC_ADTS_MAIN", AudioFormat::AAC_ADTS_MAIN),
    Entry::canonical("AUDIO_FORMAT_AAC_ADTS_LC", AudioFormat::AAC_ADTS_LC),
    Entry::canonical("AUDIO_FORMAT_AAC_ADTS_SSR", AudioFormat::AAC_ADTS_SSR),
    Entry::canonical("AUDIO_FORMAT_AAC_ADTS_LTP", AudioFormat::AAC_ADTS_LTP),
    Entry::canonical("AUDIO_FORMAT_AAC_ADTS_HE_V1", AudioFormat::AAC_ADTS_HE_V1),
    Entry::canonical("AUDIO_FORMAT_AAC_ADTS_SCALABLE", AudioFormat::AAC_ADTS_SCALABLE),
    Entry::canonical("AUDIO_FORMAT_AAC_ADTS_ERLC", AudioFormat::AAC_ADTS_ERLC),
    Entry::canonical("AUDIO_FORMAT_AAC_ADTS_LD", AudioFormat::AAC_ADTS_LD),
    Entry::canonical("AUDIO_FORMAT_AAC_ADTS_HE_V2", AudioFormat::AAC_ADTS_HE_V2),
    Entry::canonical("AUDIO_FORMAT_AAC_ADTS_ELD", AudioFormat::AAC_ADTS_ELD),
    Entry::canonical("AUDIO_FORMAT_AAC_ADTS_XHE", AudioFormat::AAC_ADTS_XHE),
    Entry::canonical("AUDIO_FORMAT_SBC", AudioFormat::SBC),
    Entry::canonical("AUDIO_FORMAT_APTX", AudioFormat::APTX),
    Entry::canonical("AUDIO_FORMAT_APTX_HD", AudioFormat::APTX_HD),
    Entry::canonical("AUDIO_FORMAT_AC4", AudioFormat::AC4),
    Entry::canonical("AUDIO_FORMAT_LDAC", AudioFormat::LDAC),
    Entry::canonical("AUDIO_FORMAT_MAT", AudioFormat::MAT),
    Entry::canonical("AUDIO_FORMAT_MAT_1_0", AudioFormat::MAT_1_0),
    Entry::canonical("AUDIO_FORMAT_MAT_2_0", AudioFormat::MAT_2_0),
    Entry::canonical("AUDIO_FORMAT_MAT_2_1", AudioFormat::MAT_2_1),
    Entry::canonical("AUDIO_FORMAT_AAC_LATM", AudioFormat::AAC_LATM),
    Entry::canonical("AUDIO_FORMAT_AAC_LATM_LC", AudioFormat::AAC_LATM_LC),
    Entry::canonical("AUDIO_FORMAT_AAC_LATM_HE_V1", AudioFormat::AAC_LATM_HE_V1),
    Entry::canonical("AUDIO_FORMAT_AAC_LATM_HE_V2", AudioFormat::AAC_LATM_HE_V2),
    Entry::canonical("AUDIO_FORMAT_CELT", AudioFormat::CELT),
    Entry::canonical("AUDIO_FORMAT_APTX_ADAPTIVE", AudioFormat::APTX_ADAPTIVE),
    Entry::canonical("AUDIO_FORMAT_LHDC", AudioFormat::LHDC),
    Entry::canonical("AUDIO_FORMAT_LHDC_LL", AudioFormat::LHDC_LL),
    Entry::canonical("AUDIO_FORMAT_APTX_TWSP", AudioFormat::APTX_TWSP),
    Entry::canonical("AUDIO_FORMAT_LC3", AudioFormat::LC3),
    Entry::canonical("AUDIO_FORMAT_MPEGH", AudioFormat::MPEGH),
    Entry::canonical("AUDIO_FORMAT_MPEGH_BL_L3", AudioFormat::MPEGH_BL_L3),
    Entry::canonical("AUDIO_FORMAT_MPEGH_BL_L4", AudioFormat::MPEGH_BL_L4),
    Entry::canonical("AUDIO_FORMAT_MPEGH_LC_L3", AudioFormat::MPEGH_LC_L3),
    Entry::canonical("AUDIO_FORMAT_MPEGH_LC_L4", AudioFormat::MPEGH_LC_L4),
];

/// 格式表。
pub static FORMATS: Table<AudioFormat> = Table::new(Domain::Format, ROWS, &[]);

enumerant!(AudioFormat(u32), table = FORMATS, fallback = "{:#x}");

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn sub_formats_are_scoped_to_their_main_class() {
        assert_eq!(AudioFormat::AAC_LC.sub_format(), AudioFormat::PCM_8_BIT.sub_format());
        assert!(!AudioFormat::AAC_LC.is_same_sub_format(AudioFormat::PCM_8_BIT));
        assert!(AudioFormat::AAC_ADTS_LC.main_format() == AudioFormat::AAC_ADTS);
        assert!(AudioFormat::AAC_LC.is_same_sub_format(AudioFormat::AAC.with_sub(aac::LC)));
    }

    #[test]
    fn composed_values_match_wire_constants() {
        assert_eq!(AudioFormat::AAC_LC.0, 0x0400_0002);
        assert_eq!(AudioFormat::AAC_ADTS_XHE.0, 0x1E00_0300);
        assert_eq!(AudioFormat::E_AC3_JOC.0, 0x0A00_0001);
        assert_eq!(AudioFormat::MAT_2_1.0, 0x2400_0003);
        assert_eq!(AudioFormat::MPEGH_LC_L4.0, 0x2C00_0024);
        assert_eq!(AudioFormat::PCM_FLOAT.0, 0x5);
    }

    #[test]
    fn pcm_and_invalid_have_no_symbol_of_their_own() {
        assert_eq!(AudioFormat::PCM.to_symbol(), Some("AUDIO_FORMAT_DEFAULT"));
        assert_eq!(AudioFormat::from_symbol("AUDIO_FORMAT_PCM"), None);
        assert_eq!(AudioFormat::INVALID.to_symbol(), None);
        assert_eq!(AudioFormat::from_symbol("AUDIO_FORMAT_INVALID"), None);
        assert_eq!(AudioFormat::INVALID.to_string(), "0xffffffff");
    }

    #[test]
    fn linear_pcm_detection_ignores_sub_format() {
        assert!(AudioFormat::PCM_24_BIT_PACKED.is_linear_pcm());
        assert!(!AudioFormat::MP3.is_linear_pcm());
    }
}
