//! # device 模块说明
//!
//! ## 契约（What）
//! - 设备值的最高两位是纯标志：`BIT_IN` 区分输入/输出，`BIT_DEFAULT` 表示"由策略选择的默认设备"；
//!   其余低位才是具体设备，输入设备一律带 `BIT_IN`；
//! - 旧名称 `AUX_DIGITAL`（现为 HDMI）、`VOICE_CALL`（现为 TELEPHONY_RX）与 `STUB`（现为默认设备）
//!   作为别名保留，只参与解析；
//! - `NONE` 既不是输入也不是输出。

use crate::{domain::Domain, table::{Entry, Table}};

/// 音频设备类型。
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AudioDevice(pub u32);

impl AudioDevice {
    /// 输入方向标志位。
    pub const BIT_IN: u32 = 0x8000_0000;
    /// 默认设备标志位。
    pub const BIT_DEFAULT: u32 = 0x4000_0000;

    /// 无设备。
    pub const NONE: Self = Self(0);
    /// 输出：earpiece。
    pub const OUT_EARPIECE: Self = Self(0x1);
    /// 输出：speaker。
    pub const OUT_SPEAKER: Self = Self(0x2);
    /// 输出：wired headset。
    pub const OUT_WIRED_HEADSET: Self = Self(0x4);
    /// 输出：wired headphone。
    pub const OUT_WIRED_HEADPHONE: Self = Self(0x8);
    /// 输出：bluetooth sco。
    pub const OUT_BLUETOOTH_SCO: Self = Self(0x10);
    /// 输出：bluetooth sco headset。
    pub const OUT_BLUETOOTH_SCO_HEADSET: Self = Self(0x20);
    /// 输出：bluetooth sco carkit。
    pub const OUT_BLUETOOTH_SCO_CARKIT: Self = Self(0x40);
    /// 输出：bluetooth a2dp。
    pub const OUT_BLUETOOTH_A2DP: Self = Self(0x80);
    /// 输出：bluetooth a2dp headphones。
    pub const OUT_BLUETOOTH_A2DP_HEADPHONES: Self = Self(0x100);
    /// 输出：bluetooth a2dp speaker。
    pub const OUT_BLUETOOTH_A2DP_SPEAKER: Self = Self(0x200);
    /// 输出：hdmi。
    pub const OUT_HDMI: Self = Self(0x400);
    /// 输出：anlg dock headset。
    pub const OUT_ANLG_DOCK_HEADSET: Self = Self(0x800);
    /// 输出：dgtl dock headset。
    pub const OUT_DGTL_DOCK_HEADSET: Self = Self(0x1000);
    /// 输出：usb accessory。
    pub const OUT_USB_ACCESSORY: Self = Self(0x2000);
    /// 输出：usb device。
    pub const OUT_USB_DEVICE: Self = Self(0x4000);
    /// 输出：remote submix。
    pub const OUT_REMOTE_SUBMIX: Self = Self(0x8000);
    /// 输出：telephony tx。
    pub const OUT_TELEPHONY_TX: Self = Self(0x10000);
    /// 输出：line。
    pub const OUT_LINE: Self = Self(0x20000);
    /// 输出：hdmi arc。
    pub const OUT_HDMI_ARC: Self = Self(0x40000);
    /// 输出：spdif。
    pub const OUT_SPDIF: Self = Self(0x80000);
    /// 输出：fm。
    pub const OUT_FM: Self = Self(0x100000);
    /// 输出：aux line。
    pub const OUT_AUX_LINE: Self = Self(0x200000);
    /// 输出：speaker safe。
    pub const OUT_SPEAKER_SAFE: Self = Self(0x400000);
    /// 输出：ip。
    pub const OUT_IP: Self = Self(0x800000);
    /// 输出：bus。
    pub const OUT_BUS: Self = Self(0x1000000);
    /// 输出：proxy。
    pub const OUT_PROXY: Self = Self(0x2000000);
    /// 输出：usb headset。
    pub const OUT_USB_HEADSET: Self = Self(0x4000000);
    /// 输出：hearing aid。
    pub const OUT_HEARING_AID: Self = Self(0x8000000);
    /// 输出：echo canceller。
    pub const OUT_ECHO_CANCELLER: Self = Self(0x10000000);
    /// 输出：ble headset。
    pub const OUT_BLE_HEADSET: Self = Self(0x20000000);
    /// 输出：ble speaker。
    pub const OUT_BLE_SPEAKER: Self = Self(0x20000001);
    /// 输出：默认设备。
    pub const OUT_DEFAULT: Self = Self(Self::BIT_DEFAULT);
    /// 输入：communication。
    pub const IN_COMMUNICATION: Self = Self(Self::BIT_IN | 0x1);
    /// 输入：ambient。
    pub const IN_AMBIENT: Self = Self(Self::BIT_IN | 0x2);
    /// 输入：builtin mic。
    pub const IN_BUILTIN_MIC: Self = Self(Self::BIT_IN | 0x4);
    /// 输入：bluetooth sco headset。
    pub const IN_BLUETOOTH_SCO_HEADSET: Self = Self(Self::BIT_IN | 0x8);
    /// 输入：wired headset。
    pub const IN_WIRED_HEADSET: Self = Self(Self::BIT_IN | 0x10);
    /// 输入：hdmi。
    pub const IN_HDMI: Self = Self(Self::BIT_IN | 0x20);
    /// 输入：telephony rx。
    pub const IN_TELEPHONY_RX: Self = Self(Self::BIT_IN | 0x40);
    /// 输入：back mic。
    pub const IN_BACK_MIC: Self = Self(Self::BIT_IN | 0x80);
    /// 输入：remote submix。
    pub const IN_REMOTE_SUBMIX: Self = Self(Self::BIT_IN | 0x100);
    /// 输入：anlg dock headset。
    pub const IN_ANLG_DOCK_HEADSET: Self = Self(Self::BIT_IN | 0x200);
    /// 输入：dgtl dock headset。
    pub const IN_DGTL_DOCK_HEADSET: Self = Self(Self::BIT_IN | 0x400);
    /// 输入：usb accessory。
    pub const IN_USB_ACCESSORY: Self = Self(Self::BIT_IN | 0x800);
    /// 输入：usb device。
    pub const IN_USB_DEVICE: Self = Self(Self::BIT_IN | 0x1000);
    /// 输入：fm tuner。
    pub const IN_FM_TUNER: Self = Self(Self::BIT_IN | 0x2000);
    /// 输入：tv tuner。
    pub const IN_TV_TUNER: Self = Self(Self::BIT_IN | 0x4000);
    /// 输入：line。
    pub const IN_LINE: Self = Self(Self::BIT_IN | 0x8000);
    /// 输入：spdif。
    pub const IN_SPDIF: Self = Self(Self::BIT_IN | 0x10000);
    /// 输入：bluetooth a2dp。
    pub const IN_BLUETOOTH_A2DP: Self = Self(Self::BIT_IN | 0x20000);
    /// 输入：loopback。
    pub const IN_LOOPBACK: Self = Self(Self::BIT_IN | 0x40000);
    /// 输入：ip。
    pub const IN_IP: Self = Self(Self::BIT_IN | 0x80000);
    /// 输入：bus。
    pub const IN_BUS: Self = Self(Self::BIT_IN | 0x100000);
    /// 输入：proxy。
    pub const IN_PROXY: Self = Self(Self::BIT_IN | 0x1000000);
    /// 输入：usb headset。
    pub const IN_USB_HEADSET: Self = Self(Self::BIT_IN | 0x2000000);
    /// 输入：bluetooth ble。
    pub const IN_BLUETOOTH_BLE: Self = Self(Self::BIT_IN | 0x4000000);
    /// 输入：hdmi arc。
    pub const IN_HDMI_ARC: Self = Self(Self::BIT_IN | 0x8000000);
    /// 输入：echo reference。
    pub const IN_ECHO_REFERENCE: Self = Self(Self::BIT_IN | 0x10000000);
    /// 输入：ble headset。
    pub const IN_BLE_HEADSET: Self = Self(Self::BIT_IN | 0x20000000);
    /// 输入：默认设备。
    pub const IN_DEFAULT: Self = Self(Self::BIT_IN | Self::BIT_DEFAULT);

    /// 是否为输入设备。
    #[must_use]
    pub const fn is_input(self) -> bool {
        self.0 & Self::BIT_IN != 0
    }

    /// 是否为输出设备。
    #[must_use]
    pub const fn is_output(self) -> bool {
        self.0 != 0 && !self.is_input()
    }

    /// 是否带默认设备标志。
    #[must_use]
    pub const fn is_default(self) -> bool {
        self.0 & Self::BIT_DEFAULT != 0
    }
}

static ROWS: &[Entry<AudioDevice>] = &[
    Entry::canonical("AUDIO_DEVICE_NONE", AudioDevice::NONE),
    Entry::canonical("AUDIO_DEVICE_OUT_EARPIECE", AudioDevice::OUT_EARPIECE),
    Entry::canonical("AUDIO_DEVICE_OUT_SPEAKER", AudioDevice::OUT_SPEAKER),
    Entry::canonical("AUDIO_DEVICE_OUT_WIRED_HEADSET", AudioDevice::OUT_WIRED_HEADSET),
    Entry::canonical("AUDIO_DEVICE_OUT_WIRED_HEADPHONE", AudioDevice::OUT_WIRED_HEADPHONE),
    Entry::canonical("AUDIO_DEVICE_OUT_BLUETOOTH_SCO", AudioDevice::OUT_BLUETOOTH_SCO),
    Entry::canonical("AUDIO_DEVICE_OUT_BLUETOOTH_SCO_HEADSET", AudioDevice::OUT_BLUETOOTH_SCO_HEADSET),
    Entry::canonical("AUDIO_DEVICE_OUT_BLUETOOTH_SCO_CARKIT", AudioDevice::OUT_BLUETOOTH_SCO_CARKIT),
    Entry::canonical("AUDIO_DEVICE_OUT_BLUETOOTH_A2DP", AudioDevice::OUT_BLUETOOTH_A2DP),
    Entry::canonical("AUDIO_DEVICE_OUT_BLUETOOTH_A2DP_HEADPHONES", AudioDevice::OUT_BLUETOOTH_A2DP_HEADPHONES),
    Entry::canonical("AUDIO_DEVICE_OUT_BLUETOOTH_A2DP_SPEAKER", AudioDevice::OUT_BLUETOOTH_A2DP_SPEAKER),
    Entry::canonical("AUDIO_DEVICE_OUT_HDMI", AudioDevice::OUT_HDMI),
    Entry::canonical("AUDIO_DEVICE_OUT_ANLG_DOCK_HEADSET", AudioDevice::OUT_ANLG_DOCK_HEADSET),
    Entry::canonical("AUDIO_DEVICE_OUT_DGTL_DOCK_HEADSET", AudioDevice::OUT_DGTL_DOCK_HEADSET),
    Entry::canonical("AUDIO_DEVICE_OUT_USB_ACCESSORY", AudioDevice::OUT_USB_ACCESSORY),
    Entry::canonical("AUDIO_DEVICE_OUT_USB_DEVICE", AudioDevice::OUT_USB_DEVICE),
    Entry::canonical("AUDIO_DEVICE_OUT_REMOTE_SUBMIX", AudioDevice::OUT_REMOTE_SUBMIX),
    Entry::canonical("AUDIO_DEVICE_OUT_TELEPHONY_TX", AudioDevice::OUT_TELEPHONY_TX),
    Entry::canonical("AUDIO_DEVICE_OUT_LINE", AudioDevice::OUT_LINE),
    Entry::canonical("AUDIO_DEVICE_OUT_HDMI_ARC", AudioDevice::OUT_HDMI_ARC),
    Entry::canonical("AUDIO_DEVICE_OUT_SPDIF", AudioDevice::OUT_SPDIF),
    Entry::canonical("AUDIO_DEVICE_OUT_FM", AudioDevice::OUT_FM),
    Entry::canonical("AUDIO_DEVICE_OUT_AUX_LINE", AudioDevice::OUT_AUX_LINE),
    Entry::canonical("AUDIO_DEVICE_OUT_SPEAKER_SAFE", AudioDevice::OUT_SPEAKER_SAFE),
    Entry::canonical("AUDIO_DEVICE_OUT_IP", AudioDevice::OUT_IP),
    Entry::canonical("AUDIO_DEVICE_OUT_BUS", AudioDevice::OUT_BUS),
    Entry::canonical("AUDIO_DEVICE_OUT_PROXY", AudioDevice::OUT_PROXY),
    Entry::canonical("AUDIO_DEVICE_OUT_USB_HEADSET", AudioDevice::OUT_USB_HEADSET),
    Entry::canonical("AUDIO_DEVICE_OUT_HEARING_AID", AudioDevice::OUT_HEARING_AID),
    Entry::canonical("AUDIO_DEVICE_OUT_ECHO_CANCELLER", AudioDevice::OUT_ECHO_CANCELLER),
    Entry::canonical("AUDIO_DEVICE_OUT_BLE_HEADSET", AudioDevice::OUT_BLE_HEADSET),
    Entry::canonical("AUDIO_DEVICE_OUT_BLE_SPEAKER", AudioDevice::OUT_BLE_SPEAKER),
    Entry::canonical("AUDIO_DEVICE_OUT_DEFAULT", AudioDevice::OUT_DEFAULT),
    Entry::canonical("AUDIO_DEVICE_IN_COMMUNICATION", AudioDevice::IN_COMMUNICATION),
    Entry::canonical("AUDIO_DEVICE_IN_AMBIENT", AudioDevice::IN_AMBIENT),
    Entry::canonical("AUDIO_DEVICE_IN_BUILTIN_MIC", AudioDevice::IN_BUILTIN_MIC),
    Entry::canonical("AUDIO_DEVICE_IN_BLUETOOTH_SCO_HEADSET", AudioDevice::IN_BLUETOOTH_SCO_HEADSET),
    Entry::canonical("AUDIO_DEVICE_IN_WIRED_HEADSET", AudioDevice::IN_WIRED_HEADSET),
    Entry::canonical("AUDIO_DEVICE_IN_HDMI", AudioDevice::IN_HDMI),
    Entry::canonical("AUDIO_DEVICE_IN_TELEPHONY_RX", AudioDevice::IN_TELEPHONY_RX),
    Entry::canonical("AUDIO_DEVICE_IN_BACK_MIC", AudioDevice::IN_BACK_MIC),
    Entry::canonical("AUDIO_DEVICE_IN_REMOTE_SUBMIX", AudioDevice::IN_REMOTE_SUBMIX),
    Entry::canonical("AUDIO_DEVICE_IN_ANLG_DOCK_HEADSET", AudioDevice::IN_ANLG_DOCK_HEADSET),
    Entry::canonical("AUDIO_DEVICE_IN_DGTL_DOCK_HEADSET", AudioDevice::IN_DGTL_DOCK_HEADSET),
    Entry::canonical("AUDIO_DEVICE_IN_USB_ACCESSORY", AudioDevice::IN_USB_ACCESSORY),
    Entry::canonical("AUDIO_DEVICE_IN_USB_DEVICE", AudioDevice::IN_USB_DEVICE),
    Entry::canonical("AUDIO_DEVICE_IN_FM_TUNER", AudioDevice::IN_FM_TUNER),
    Entry::canonical("AUDIO_DEVICE_IN_TV_TUNER", AudioDevice::IN_TV_TUNER),
    Entry::canonical("AUDIO_DEVICE_IN_LINE", AudioDevice::IN_LINE),
    Entry::canonical("AUDIO_DEVICE_IN_SPDIF", AudioDevice::IN_SPDIF),
    Entry::canonical("AUDIO_DEVICE_IN_BLUETOOTH_A2DP", AudioDevice::IN_BLUETOOTH_A2DP),
    Entry::canonical("AUDIO_DEVICE_IN_LOOPBACK", AudioDevice::IN_LOOPBACK),
    Entry::canonical("AUDIO_DEVICE_IN_IP", AudioDevice::IN_IP),
    Entry::canonical("AUDIO_DEVICE_IN_BUS", AudioDevice::IN_BUS),
    Entry::canonical("AUDIO_DEVICE_IN_PROXY", AudioDevice::IN_PROXY),
    Entry::canonical("AUDIO_DEVICE_IN_USB_HEADSET", AudioDevice::IN_USB_HEADSET),
    Entry::canonical("AUDIO_DEVICE_IN_BLUETOOTH_BLE", AudioDevice::IN_BLUETOOTH_BLE),
    Entry::canonical("AUDIO_DEVICE_IN_HDMI_ARC", AudioDevice::IN_HDMI_ARC),
    Entry::canonical("AUDIO_DEVICE_IN_ECHO_REFERENCE", AudioDevice::IN_ECHO_REFERENCE),
    Entry::canonical("AUDIO_DEVICE_IN_BLE_HEADSET", AudioDevice::IN_BLE_HEADSET),
    Entry::canonical("AUDIO_DEVICE_IN_DEFAULT", AudioDevice::IN_DEFAULT),
    Entry::alias("AUDIO_DEVICE_OUT_AUX_DIGITAL", AudioDevice::OUT_HDMI),
    Entry::alias("AUDIO_DEVICE_OUT_STUB", AudioDevice::OUT_DEFAULT),
    Entry::alias("AUDIO_DEVICE_IN_VOICE_CALL", AudioDevice::IN_TELEPHONY_RX),
    Entry::alias("AUDIO_DEVICE_IN_AUX_DIGITAL", AudioDevice::IN_HDMI),
    Entry::alias("AUDIO_DEVICE_IN_STUB", AudioDevice::IN_DEFAULT),
];

/// 设备表。
pub static DEVICES: Table<AudioDevice> = Table::new(Domain::Device, ROWS, &[]);

enumerant!(AudioDevice(u32), table = DEVICES, fallback = "{:#x}");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_names_parse_to_modern_devices() {
        assert_eq!(
            AudioDevice::from_symbol("AUDIO_DEVICE_OUT_AUX_DIGITAL"),
            Some(AudioDevice::OUT_HDMI)
        );
        assert_eq!(AudioDevice::OUT_HDMI.to_symbol(), Some("AUDIO_DEVICE_OUT_HDMI"));
        assert_eq!(
            AudioDevice::from_symbol("AUDIO_DEVICE_IN_VOICE_CALL"),
            Some(AudioDevice::IN_TELEPHONY_RX)
        );
        assert_eq!(
            AudioDevice::IN_DEFAULT.to_symbol(),
            Some("AUDIO_DEVICE_IN_DEFAULT")
        );
    }

    #[test]
    fn direction_comes_from_the_high_bit() {
        assert!(AudioDevice::IN_BUILTIN_MIC.is_input());
        assert!(!AudioDevice::IN_BUILTIN_MIC.is_output());
        assert!(AudioDevice::OUT_SPEAKER.is_output());
        assert!(AudioDevice::OUT_DEFAULT.is_output());
        assert!(AudioDevice::OUT_DEFAULT.is_default());
        assert!(AudioDevice::IN_DEFAULT.is_default());
        assert!(!AudioDevice::NONE.is_input());
        assert!(!AudioDevice::NONE.is_output());
    }

    #[test]
    fn input_and_output_share_low_bits_without_colliding() {
        assert_eq!(AudioDevice::OUT_WIRED_HEADSET.0 & !AudioDevice::BIT_IN, 0x4);
        assert_eq!(AudioDevice::IN_BUILTIN_MIC.0 & !AudioDevice::BIT_IN, 0x4);
        assert_ne!(AudioDevice::OUT_WIRED_HEADSET, AudioDevice::IN_BUILTIN_MIC);
    }

    #[test]
    fn ble_speaker_is_not_a_single_bit() {
        assert_eq!(AudioDevice::OUT_BLE_SPEAKER.0, 0x2000_0001);
        assert_eq!(
            AudioDevice::OUT_BLE_SPEAKER.to_symbol(),
            Some("AUDIO_DEVICE_OUT_BLE_SPEAKER")
        );
    }
}
