//! 增益模式。

use crate::{domain::Domain, table::{Entry, Table}};

/// 增益控制器的工作模式，单个位。
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AudioGainMode(pub u32);

impl AudioGainMode {
    /// 所有声道联动。
    pub const JOINT: Self = Self(0x1);
    /// 逐声道独立。
    pub const CHANNELS: Self = Self(0x2);
    /// 平滑过渡。
    pub const RAMP: Self = Self(0x4);
}

static ROWS: &[Entry<AudioGainMode>] = &[
    Entry::canonical("AUDIO_GAIN_MODE_JOINT", AudioGainMode::JOINT),
    Entry::canonical("AUDIO_GAIN_MODE_CHANNELS", AudioGainMode::CHANNELS),
    Entry::canonical("AUDIO_GAIN_MODE_RAMP", AudioGainMode::RAMP),
];

/// 增益模式表。
pub static GAIN_MODES: Table<AudioGainMode> = Table::new(Domain::GainMode, ROWS, &[]);

enumerant!(AudioGainMode(u32), table = GAIN_MODES, fallback = "{:#x}");

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn combined_modes_have_no_symbol() {
        let both = AudioGainMode(AudioGainMode::JOINT.0 | AudioGainMode::RAMP.0);
        assert_eq!(both.to_symbol(), None);
        assert_eq!(both.to_string(), "0x5");
        assert_eq!(
            "AUDIO_GAIN_MODE_RAMP".parse::<AudioGainMode>(),
            Ok(AudioGainMode::RAMP)
        );
    }
}
