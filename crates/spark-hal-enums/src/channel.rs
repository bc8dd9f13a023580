//! # channel 模块说明
//!
//! ## 角色定位（Why）
//! - 声道掩码有两种表示：位置表示（每位对应一个物理声道位置）与索引表示（低 N 位置位，表示"按索引编号的 N 个声道"）；
//! - 输入与输出的离散声道位区间部分重叠，同一个原始值在两个方向上含义不同，因此三种方向各有一张表。
//!
//! ## 契约（What）
//! - 投影与解析都必须指明方向：`to_out_symbol` / `to_in_symbol` / `to_index_symbol` 及对应的 `from_*_symbol`；
//!   不提供"任意方向"的入口；
//! - 复合掩码只由先前声明的离散常量按位或得到，不写独立魔数；
//! - 位 30..=31 是表示标签：`0` 为位置表示，`2` 为索引表示，其余组合（例如 `INVALID`）不是有效掩码；
//! - `OUT_ALL`、`IN_ALL`、`INVALID` 是哨兵行，不参与任何方向的转换；`HAPTIC_ALL` 与 `OUT_HAPTIC_AB` 数值相同，只作为常量存在。
//!
//! ## 风险提示（Trade-offs）
//! - `Display` 只渲染数值：没有方向信息时无法给出可信的符号；
//! - serde 串行化按表示标签选表，位置表示先查输出表再查输入表。两张表的命名值互不相交，
//!   往返保持数值不变，但方向信息不会被恢复。

use core::{fmt, ops::BitOr};

use crate::{
    domain::Domain,
    table::{EnumValue, Entry, Table},
};

/// 声道掩码的表示方式，取自位 30..=31。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ChannelRepresentation {
    /// 每位对应一个物理声道位置。
    Position = 0,
    /// 低 N 位置位，声道按索引编号。
    Index = 2,
}

/// 声道掩码。
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AudioChannelMask(pub u32);

impl AudioChannelMask {
    /// 单个掩码可描述的最大声道数，也是表示标签的位偏移。
    pub const COUNT_MAX: u32 = 30;
    /// 索引表示的头部位。
    pub const INDEX_HDR: u32 = (ChannelRepresentation::Index as u32) << Self::COUNT_MAX;
    /// 承载声道的低 30 位。
    pub const PAYLOAD_MASK: u32 = (1 << Self::COUNT_MAX) - 1;
    /// 具名索引掩码覆盖的最大声道数。
    pub const INDEX_MASK_MAX: u32 = 24;

    /// 无声道，三个方向共享。
    pub const NONE: Self = Self(0);
    /// 哨兵：表示标签为 3，不是有效掩码。
    pub const INVALID: Self = Self(0xC000_0000);

    // 输出离散声道，位 0..=19 与触觉位 28..=29。
    /// 输出离散声道：前左。
    pub const OUT_FRONT_LEFT: Self = Self(0x1);
    /// 输出离散声道：前右。
    pub const OUT_FRONT_RIGHT: Self = Self(0x2);
    /// 输出离散声道：前中。
    pub const OUT_FRONT_CENTER: Self = Self(0x4);
    /// 输出离散声道：低频。
    pub const OUT_LOW_FREQUENCY: Self = Self(0x8);
    /// 输出离散声道：后左。
    pub const OUT_BACK_LEFT: Self = Self(0x10);
    /// 输出离散声道：后右。
    pub const OUT_BACK_RIGHT: Self = Self(0x20);
    /// 输出离散声道：前中偏左。
    pub const OUT_FRONT_LEFT_OF_CENTER: Self = Self(0x40);
    /// 输出离散声道：前中偏右。
    pub const OUT_FRONT_RIGHT_OF_CENTER: Self = Self(0x80);
    /// 输出离散声道：后中。
    pub const OUT_BACK_CENTER: Self = Self(0x100);
    /// 输出离散声道：侧左。
    pub const OUT_SIDE_LEFT: Self = Self(0x200);
    /// 输出离散声道：侧右。
    pub const OUT_SIDE_RIGHT: Self = Self(0x400);
    /// 输出离散声道：顶中。
    pub const OUT_TOP_CENTER: Self = Self(0x800);
    /// 输出离散声道：顶前左。
    pub const OUT_TOP_FRONT_LEFT: Self = Self(0x1000);
    /// 输出离散声道：顶前中。
    pub const OUT_TOP_FRONT_CENTER: Self = Self(0x2000);
    /// 输出离散声道：顶前右。
    pub const OUT_TOP_FRONT_RIGHT: Self = Self(0x4000);
    /// 输出离散声道：顶后左。
    pub const OUT_TOP_BACK_LEFT: Self = Self(0x8000);
    /// 输出离散声道：顶后中。
    pub const OUT_TOP_BACK_CENTER: Self = Self(0x10000);
    /// 输出离散声道：顶后右。
    pub const OUT_TOP_BACK_RIGHT: Self = Self(0x20000);
    /// 输出离散声道：顶侧左。
    pub const OUT_TOP_SIDE_LEFT: Self = Self(0x40000);
    /// 输出离散声道：顶侧右。
    pub const OUT_TOP_SIDE_RIGHT: Self = Self(0x80000);
    /// 输出离散声道：触觉 A。
    pub const OUT_HAPTIC_A: Self = Self(0x20000000);
    /// 输出离散声道：触觉 B。
    pub const OUT_HAPTIC_B: Self = Self(0x10000000);

    // 输入离散声道，位 2..=22（位 19 未分配）。
    /// 输入离散声道：左。
    pub const IN_LEFT: Self = Self(0x4);
    /// 输入离散声道：右。
    pub const IN_RIGHT: Self = Self(0x8);
    /// 输入离散声道：前。
    pub const IN_FRONT: Self = Self(0x10);
    /// 输入离散声道：后。
    pub const IN_BACK: Self = Self(0x20);
    /// 输入离散声道：左（已处理）。
    pub const IN_LEFT_PROCESSED: Self = Self(0x40);
    /// 输入离散声道：右（已处理）。
    pub const IN_RIGHT_PROCESSED: Self = Self(0x80);
    /// 输入离散声道：前（已处理）。
    pub const IN_FRONT_PROCESSED: Self = Self(0x100);
    /// 输入离散声道：后（已处理）。
    pub const IN_BACK_PROCESSED: Self = Self(0x200);
    /// 输入离散声道：气压。
    pub const IN_PRESSURE: Self = Self(0x400);
    /// 输入离散声道：X 轴。
    pub const IN_X_AXIS: Self = Self(0x800);
    /// 输入离散声道：Y 轴。
    pub const IN_Y_AXIS: Self = Self(0x1000);
    /// 输入离散声道：Z 轴。
    pub const IN_Z_AXIS: Self = Self(0x2000);
    /// 输入离散声道：通话上行。
    pub const IN_VOICE_UPLINK: Self = Self(0x4000);
    /// 输入离散声道：通话下行。
    pub const IN_VOICE_DNLINK: Self = Self(0x8000);
    /// 输入离散声道：后左。
    pub const IN_BACK_LEFT: Self = Self(0x10000);
    /// 输入离散声道：后右。
    pub const IN_BACK_RIGHT: Self = Self(0x20000);
    /// 输入离散声道：中。
    pub const IN_CENTER: Self = Self(0x40000);
    /// 输入离散声道：低频。
    pub const IN_LOW_FREQUENCY: Self = Self(0x100000);
    /// 输入离散声道：顶左。
    pub const IN_TOP_LEFT: Self = Self(0x200000);
    /// 输入离散声道：顶右。
    pub const IN_TOP_RIGHT: Self = Self(0x400000);

    // 输出掩码，只由先前声明的常量组合。
    /// 输出掩码 `MONO`。
    pub const OUT_MONO: Self = Self::OUT_FRONT_LEFT;
    /// 输出掩码 `STEREO`。
    pub const OUT_STEREO: Self = Self::OUT_FRONT_LEFT.union(Self::OUT_FRONT_RIGHT);
    /// 输出掩码 `2POINT1`。
    pub const OUT_2POINT1: Self = Self::union_all(&[
        Self::OUT_FRONT_LEFT,
        Self::OUT_FRONT_RIGHT,
        Self::OUT_LOW_FREQUENCY,
    ]);
    /// 输出掩码 `TRI`。
    pub const OUT_TRI: Self = Self::union_all(&[
        Self::OUT_FRONT_LEFT,
        Self::OUT_FRONT_RIGHT,
        Self::OUT_FRONT_CENTER,
    ]);
    /// 输出掩码 `TRI_BACK`。
    pub const OUT_TRI_BACK: Self = Self::union_all(&[
        Self::OUT_FRONT_LEFT,
        Self::OUT_FRONT_RIGHT,
        Self::OUT_BACK_CENTER,
    ]);
    /// 输出掩码 `3POINT1`。
    pub const OUT_3POINT1: Self = Self::union_all(&[
        Self::OUT_FRONT_LEFT,
        Self::OUT_FRONT_RIGHT,
        Self::OUT_FRONT_CENTER,
        Self::OUT_LOW_FREQUENCY,
    ]);
    /// 输出掩码 `2POINT0POINT2`。
    pub const OUT_2POINT0POINT2: Self = Self::union_all(&[
        Self::OUT_FRONT_LEFT,
        Self::OUT_FRONT_RIGHT,
        Self::OUT_TOP_SIDE_LEFT,
        Self::OUT_TOP_SIDE_RIGHT,
    ]);
    /// 输出掩码 `2POINT1POINT2`。
    pub const OUT_2POINT1POINT2: Self = Self::union_all(&[
        Self::OUT_FRONT_LEFT,
        Self::OUT_FRONT_RIGHT,
        Self::OUT_TOP_SIDE_LEFT,
        Self::OUT_TOP_SIDE_RIGHT,
        Self::OUT_LOW_FREQUENCY,
    ]);
    /// 输出掩码 `3POINT0POINT2`。
    pub const OUT_3POINT0POINT2: Self = Self::union_all(&[
        Self::OUT_FRONT_LEFT,
        Self::OUT_FRONT_RIGHT,
        Self::OUT_FRONT_CENTER,
        Self::OUT_TOP_SIDE_LEFT,
        Self::OUT_TOP_SIDE_RIGHT,
    ]);
    /// 输出掩码 `3POINT1POINT2`。
    pub const OUT_3POINT1POINT2: Self = Self::union_all(&[
        Self::OUT_FRONT_LEFT,
        Self::OUT_FRONT_RIGHT,
        Self::OUT_FRONT_CENTER,
        Self::OUT_TOP_SIDE_LEFT,
        Self::OUT_TOP_SIDE_RIGHT,
        Self::OUT_LOW_FREQUENCY,
    ]);
    /// 输出掩码 `QUAD`。
    pub const OUT_QUAD: Self = Self::union_all(&[
        Self::OUT_FRONT_LEFT,
        Self::OUT_FRONT_RIGHT,
        Self::OUT_BACK_LEFT,
        Self::OUT_BACK_RIGHT,
    ]);
    /// 输出掩码 `QUAD_SIDE`。
    pub const OUT_QUAD_SIDE: Self = Self::union_all(&[
        Self::OUT_FRONT_LEFT,
        Self::OUT_FRONT_RIGHT,
        Self::OUT_SIDE_LEFT,
        Self::OUT_SIDE_RIGHT,
    ]);
    /// 输出掩码 `SURROUND`。
    pub const OUT_SURROUND: Self = Self::union_all(&[
        Self::OUT_FRONT_LEFT,
        Self::OUT_FRONT_RIGHT,
        Self::OUT_FRONT_CENTER,
        Self::OUT_BACK_CENTER,
    ]);
    /// 输出掩码 `PENTA`。
    pub const OUT_PENTA: Self = Self::OUT_QUAD.union(Self::OUT_FRONT_CENTER);
    /// 输出掩码 `5POINT1`。
    pub const OUT_5POINT1: Self = Self::union_all(&[
        Self::OUT_FRONT_LEFT,
        Self::OUT_FRONT_RIGHT,
        Self::OUT_FRONT_CENTER,
        Self::OUT_LOW_FREQUENCY,
        Self::OUT_BACK_LEFT,
        Self::OUT_BACK_RIGHT,
    ]);
    /// 输出掩码 `5POINT1_SIDE`。
    pub const OUT_5POINT1_SIDE: Self = Self::union_all(&[
        Self::OUT_FRONT_LEFT,
        Self::OUT_FRONT_RIGHT,
        Self::OUT_FRONT_CENTER,
        Self::OUT_LOW_FREQUENCY,
        Self::OUT_SIDE_LEFT,
        Self::OUT_SIDE_RIGHT,
    ]);
    /// 输出掩码 `5POINT1POINT2`。
    pub const OUT_5POINT1POINT2: Self = Self::union_all(&[
        Self::OUT_5POINT1,
        Self::OUT_TOP_SIDE_LEFT,
        Self::OUT_TOP_SIDE_RIGHT,
    ]);
    /// 输出掩码 `5POINT1POINT4`。
    pub const OUT_5POINT1POINT4: Self = Self::union_all(&[
        Self::OUT_5POINT1,
        Self::OUT_TOP_FRONT_LEFT,
        Self::OUT_TOP_FRONT_RIGHT,
        Self::OUT_TOP_BACK_LEFT,
        Self::OUT_TOP_BACK_RIGHT,
    ]);
    /// 输出掩码 `6POINT1`。
    pub const OUT_6POINT1: Self = Self::union_all(&[
        Self::OUT_FRONT_LEFT,
        Self::OUT_FRONT_RIGHT,
        Self::OUT_FRONT_CENTER,
        Self::OUT_LOW_FREQUENCY,
        Self::OUT_BACK_LEFT,
        Self::OUT_BACK_RIGHT,
        Self::OUT_BACK_CENTER,
    ]);
    /// 输出掩码 `7POINT1`。
    pub const OUT_7POINT1: Self = Self::union_all(&[
        Self::OUT_FRONT_LEFT,
        Self::OUT_FRONT_RIGHT,
        Self::OUT_FRONT_CENTER,
        Self::OUT_LOW_FREQUENCY,
        Self::OUT_BACK_LEFT,
        Self::OUT_BACK_RIGHT,
        Self::OUT_SIDE_LEFT,
        Self::OUT_SIDE_RIGHT,
    ]);
    /// 输出掩码 `7POINT1POINT2`。
    pub const OUT_7POINT1POINT2: Self = Self::union_all(&[
        Self::OUT_7POINT1,
        Self::OUT_TOP_SIDE_LEFT,
        Self::OUT_TOP_SIDE_RIGHT,
    ]);
    /// 输出掩码 `7POINT1POINT4`。
    pub const OUT_7POINT1POINT4: Self = Self::union_all(&[
        Self::OUT_7POINT1,
        Self::OUT_TOP_FRONT_LEFT,
        Self::OUT_TOP_FRONT_RIGHT,
        Self::OUT_TOP_BACK_LEFT,
        Self::OUT_TOP_BACK_RIGHT,
    ]);
    /// 输出掩码 `MONO_HAPTIC_A`。
    pub const OUT_MONO_HAPTIC_A: Self = Self::OUT_MONO.union(Self::OUT_HAPTIC_A);
    /// 输出掩码 `STEREO_HAPTIC_A`。
    pub const OUT_STEREO_HAPTIC_A: Self = Self::OUT_STEREO.union(Self::OUT_HAPTIC_A);
    /// 输出掩码 `HAPTIC_AB`。
    pub const OUT_HAPTIC_AB: Self = Self::OUT_HAPTIC_A.union(Self::OUT_HAPTIC_B);
    /// 输出掩码 `MONO_HAPTIC_AB`。
    pub const OUT_MONO_HAPTIC_AB: Self = Self::OUT_MONO.union(Self::OUT_HAPTIC_AB);
    /// 输出掩码 `STEREO_HAPTIC_AB`。
    pub const OUT_STEREO_HAPTIC_AB: Self = Self::OUT_STEREO.union(Self::OUT_HAPTIC_AB);
    /// `5POINT1` 的旧名。
    pub const OUT_5POINT1_BACK: Self = Self::OUT_5POINT1;
    /// `QUAD` 的旧名。
    pub const OUT_QUAD_BACK: Self = Self::OUT_QUAD;

    // 输入掩码。
    /// 输入掩码 `MONO`。
    pub const IN_MONO: Self = Self::IN_FRONT;
    /// 输入掩码 `STEREO`。
    pub const IN_STEREO: Self = Self::IN_LEFT.union(Self::IN_RIGHT);
    /// 输入掩码 `FRONT_BACK`。
    pub const IN_FRONT_BACK: Self = Self::IN_FRONT.union(Self::IN_BACK);
    /// 输入掩码 `6`。
    pub const IN_6: Self = Self::union_all(&[
        Self::IN_LEFT,
        Self::IN_RIGHT,
        Self::IN_FRONT,
        Self::IN_BACK,
        Self::IN_LEFT_PROCESSED,
        Self::IN_RIGHT_PROCESSED,
    ]);
    /// 输入掩码 `2POINT0POINT2`。
    pub const IN_2POINT0POINT2: Self = Self::union_all(&[
        Self::IN_LEFT,
        Self::IN_RIGHT,
        Self::IN_TOP_LEFT,
        Self::IN_TOP_RIGHT,
    ]);
    /// 输入掩码 `2POINT1POINT2`。
    pub const IN_2POINT1POINT2: Self = Self::union_all(&[
        Self::IN_LEFT,
        Self::IN_RIGHT,
        Self::IN_TOP_LEFT,
        Self::IN_TOP_RIGHT,
        Self::IN_LOW_FREQUENCY,
    ]);
    /// 输入掩码 `3POINT0POINT2`。
    pub const IN_3POINT0POINT2: Self = Self::union_all(&[
        Self::IN_LEFT,
        Self::IN_CENTER,
        Self::IN_RIGHT,
        Self::IN_TOP_LEFT,
        Self::IN_TOP_RIGHT,
    ]);
    /// 输入掩码 `3POINT1POINT2`。
    pub const IN_3POINT1POINT2: Self = Self::union_all(&[
        Self::IN_LEFT,
        Self::IN_CENTER,
        Self::IN_RIGHT,
        Self::IN_TOP_LEFT,
        Self::IN_TOP_RIGHT,
        Self::IN_LOW_FREQUENCY,
    ]);
    /// 输入掩码 `5POINT1`。
    pub const IN_5POINT1: Self = Self::union_all(&[
        Self::IN_LEFT,
        Self::IN_CENTER,
        Self::IN_RIGHT,
        Self::IN_BACK_LEFT,
        Self::IN_BACK_RIGHT,
        Self::IN_LOW_FREQUENCY,
    ]);
    /// 输入掩码 `VOICE_UPLINK_MONO`。
    pub const IN_VOICE_UPLINK_MONO: Self = Self::IN_VOICE_UPLINK.union(Self::IN_MONO);
    /// 输入掩码 `VOICE_DNLINK_MONO`。
    pub const IN_VOICE_DNLINK_MONO: Self = Self::IN_VOICE_DNLINK.union(Self::IN_MONO);
    /// 输入掩码 `VOICE_CALL_MONO`。
    pub const IN_VOICE_CALL_MONO: Self = Self::IN_VOICE_UPLINK_MONO.union(Self::IN_VOICE_DNLINK_MONO);

    // 索引掩码：`INDEX_HDR | (2^N - 1)`。
    /// 1 个按索引标识的声道。
    pub const INDEX_MASK_1: Self = Self::index_mask_unchecked(1);
    /// 2 个按索引标识的声道。
    pub const INDEX_MASK_2: Self = Self::index_mask_unchecked(2);
    /// 3 个按索引标识的声道。
    pub const INDEX_MASK_3: Self = Self::index_mask_unchecked(3);
    /// 4 个按索引标识的声道。
    pub const INDEX_MASK_4: Self = Self::index_mask_unchecked(4);
    /// 5 个按索引标识的声道。
    pub const INDEX_MASK_5: Self = Self::index_mask_unchecked(5);
    /// 6 个按索引标识的声道。
    pub const INDEX_MASK_6: Self = Self::index_mask_unchecked(6);
    /// 7 个按索引标识的声道。
    pub const INDEX_MASK_7: Self = Self::index_mask_unchecked(7);
    /// 8 个按索引标识的声道。
    pub const INDEX_MASK_8: Self = Self::index_mask_unchecked(8);
    /// 9 个按索引标识的声道。
    pub const INDEX_MASK_9: Self = Self::index_mask_unchecked(9);
    /// 10 个按索引标识的声道。
    pub const INDEX_MASK_10: Self = Self::index_mask_unchecked(10);
    /// 11 个按索引标识的声道。
    pub const INDEX_MASK_11: Self = Self::index_mask_unchecked(11);
    /// 12 个按索引标识的声道。
    pub const INDEX_MASK_12: Self = Self::index_mask_unchecked(12);
    /// 13 个按索引标识的声道。
    pub const INDEX_MASK_13: Self = Self::index_mask_unchecked(13);
    /// 14 个按索引标识的声道。
    pub const INDEX_MASK_14: Self = Self::index_mask_unchecked(14);
    /// 15 个按索引标识的声道。
    pub const INDEX_MASK_15: Self = Self::index_mask_unchecked(15);
    /// 16 个按索引标识的声道。
    pub const INDEX_MASK_16: Self = Self::index_mask_unchecked(16);
    /// 17 个按索引标识的声道。
    pub const INDEX_MASK_17: Self = Self::index_mask_unchecked(17);
    /// 18 个按索引标识的声道。
    pub const INDEX_MASK_18: Self = Self::index_mask_unchecked(18);
    /// 19 个按索引标识的声道。
    pub const INDEX_MASK_19: Self = Self::index_mask_unchecked(19);
    /// 20 个按索引标识的声道。
    pub const INDEX_MASK_20: Self = Self::index_mask_unchecked(20);
    /// 21 个按索引标识的声道。
    pub const INDEX_MASK_21: Self = Self::index_mask_unchecked(21);
    /// 22 个按索引标识的声道。
    pub const INDEX_MASK_22: Self = Self::index_mask_unchecked(22);
    /// 23 个按索引标识的声道。
    pub const INDEX_MASK_23: Self = Self::index_mask_unchecked(23);
    /// 24 个按索引标识的声道。
    pub const INDEX_MASK_24: Self = Self::index_mask_unchecked(24);

    /// 全部输出离散声道，按位序排列。
    pub const OUT_DISCRETE: [Self; 22] = [
        Self::OUT_FRONT_LEFT,
        Self::OUT_FRONT_RIGHT,
        Self::OUT_FRONT_CENTER,
        Self::OUT_LOW_FREQUENCY,
        Self::OUT_BACK_LEFT,
        Self::OUT_BACK_RIGHT,
        Self::OUT_FRONT_LEFT_OF_CENTER,
        Self::OUT_FRONT_RIGHT_OF_CENTER,
        Self::OUT_BACK_CENTER,
        Self::OUT_SIDE_LEFT,
        Self::OUT_SIDE_RIGHT,
        Self::OUT_TOP_CENTER,
        Self::OUT_TOP_FRONT_LEFT,
        Self::OUT_TOP_FRONT_CENTER,
        Self::OUT_TOP_FRONT_RIGHT,
        Self::OUT_TOP_BACK_LEFT,
        Self::OUT_TOP_BACK_CENTER,
        Self::OUT_TOP_BACK_RIGHT,
        Self::OUT_TOP_SIDE_LEFT,
        Self::OUT_TOP_SIDE_RIGHT,
        Self::OUT_HAPTIC_A,
        Self::OUT_HAPTIC_B,
    ];
    /// 全部输入离散声道，按位序排列。
    pub const IN_DISCRETE: [Self; 20] = [
        Self::IN_LEFT,
        Self::IN_RIGHT,
        Self::IN_FRONT,
        Self::IN_BACK,
        Self::IN_LEFT_PROCESSED,
        Self::IN_RIGHT_PROCESSED,
        Self::IN_FRONT_PROCESSED,
        Self::IN_BACK_PROCESSED,
        Self::IN_PRESSURE,
        Self::IN_X_AXIS,
        Self::IN_Y_AXIS,
        Self::IN_Z_AXIS,
        Self::IN_VOICE_UPLINK,
        Self::IN_VOICE_DNLINK,
        Self::IN_BACK_LEFT,
        Self::IN_BACK_RIGHT,
        Self::IN_CENTER,
        Self::IN_LOW_FREQUENCY,
        Self::IN_TOP_LEFT,
        Self::IN_TOP_RIGHT,
    ];
    /// 全部输出离散声道（含触觉），不可转换。
    pub const OUT_ALL: Self = Self::union_all(&Self::OUT_DISCRETE);
    /// 全部输入离散声道，不可转换。
    pub const IN_ALL: Self = Self::union_all(&Self::IN_DISCRETE);
    /// 两个触觉声道，与 `OUT_HAPTIC_AB` 数值相同。
    pub const HAPTIC_ALL: Self = Self::OUT_HAPTIC_B.union(Self::OUT_HAPTIC_A);

    /// 按位或，可在常量上下文使用。
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// 对一组掩码逐个按位或。
    #[must_use]
    pub const fn union_all(masks: &[Self]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < masks.len() {
            bits |= masks[i].0;
            i += 1;
        }
        Self(bits)
    }

    const fn index_mask_unchecked(count: u32) -> Self {
        Self(Self::INDEX_HDR | ((1 << count) - 1))
    }

    /// `count` 个按索引编号的声道；`count` 必须位于 `1..=COUNT_MAX`。
    ///
    /// 只有 `count <= INDEX_MASK_MAX` 的结果拥有规范符号。
    #[must_use]
    pub const fn index_mask(count: u32) -> Option<Self> {
        if count == 0 || count > Self::COUNT_MAX {
            None
        } else {
            Some(Self::index_mask_unchecked(count))
        }
    }

    /// 原始数值。
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// 表示标签；`INVALID` 这类标签为 1 或 3 的值返回 `None`。
    #[must_use]
    pub const fn representation(self) -> Option<ChannelRepresentation> {
        match self.0 >> Self::COUNT_MAX {
            0 => Some(ChannelRepresentation::Position),
            2 => Some(ChannelRepresentation::Index),
            _ => None,
        }
    }

    /// 声道数：载荷位的置位个数。索引表示下即 N。
    #[must_use]
    pub const fn channel_count(self) -> u32 {
        (self.0 & Self::PAYLOAD_MASK).count_ones()
    }

    /// 位置表示且包含任一触觉声道。
    #[must_use]
    pub const fn has_haptic(self) -> bool {
        matches!(self.representation(), Some(ChannelRepresentation::Position))
            && self.0 & Self::HAPTIC_ALL.0 != 0
    }

    /// 是否包含 `other` 的全部位。
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// 按输出方向投影。
    #[must_use]
    pub fn to_out_symbol(self) -> Option<&'static str> {
        OUTPUT_MASKS.project(self)
    }

    /// 按输入方向投影。
    #[must_use]
    pub fn to_in_symbol(self) -> Option<&'static str> {
        INPUT_MASKS.project(self)
    }

    /// 按索引表示投影。
    #[must_use]
    pub fn to_index_symbol(self) -> Option<&'static str> {
        INDEX_MASKS.project(self)
    }

    /// 解析输出掩码符号（含别名）。
    #[must_use]
    pub fn from_out_symbol(symbol: &str) -> Option<Self> {
        OUTPUT_MASKS.parse(symbol)
    }

    /// 解析输入掩码符号。
    #[must_use]
    pub fn from_in_symbol(symbol: &str) -> Option<Self> {
        INPUT_MASKS.parse(symbol)
    }

    /// 解析索引掩码符号。
    #[must_use]
    pub fn from_index_symbol(symbol: &str) -> Option<Self> {
        INDEX_MASKS.parse(symbol)
    }
}

static OUTPUT_ROWS: &[Entry<AudioChannelMask>] = &[
    Entry::canonical("AUDIO_CHANNEL_NONE", AudioChannelMask::NONE),
    Entry::canonical("AUDIO_CHANNEL_OUT_MONO", AudioChannelMask::OUT_MONO),
    Entry::canonical("AUDIO_CHANNEL_OUT_STEREO", AudioChannelMask::OUT_STEREO),
    Entry::canonical("AUDIO_CHANNEL_OUT_2POINT1", AudioChannelMask::OUT_2POINT1),
    Entry::canonical("AUDIO_CHANNEL_OUT_TRI", AudioChannelMask::OUT_TRI),
    Entry::canonical("AUDIO_CHANNEL_OUT_TRI_BACK", AudioChannelMask::OUT_TRI_BACK),
    Entry::canonical("AUDIO_CHANNEL_OUT_3POINT1", AudioChannelMask::OUT_3POINT1),
    Entry::canonical("AUDIO_CHANNEL_OUT_2POINT0POINT2", AudioChannelMask::OUT_2POINT0POINT2),
    Entry::canonical("AUDIO_CHANNEL_OUT_2POINT1POINT2", AudioChannelMask::OUT_2POINT1POINT2),
    Entry::canonical("AUDIO_CHANNEL_OUT_3POINT0POINT2", AudioChannelMask::OUT_3POINT0POINT2),
    Entry::canonical("AUDIO_CHANNEL_OUT_3POINT1POINT2", AudioChannelMask::OUT_3POINT1POINT2),
    Entry::canonical("AUDIO_CHANNEL_OUT_QUAD", AudioChannelMask::OUT_QUAD),
    Entry::canonical("AUDIO_CHANNEL_OUT_QUAD_SIDE", AudioChannelMask::OUT_QUAD_SIDE),
    Entry::canonical("AUDIO_CHANNEL_OUT_SURROUND", AudioChannelMask::OUT_SURROUND),
    Entry::canonical("AUDIO_CHANNEL_OUT_PENTA", AudioChannelMask::OUT_PENTA),
    Entry::canonical("AUDIO_CHANNEL_OUT_5POINT1", AudioChannelMask::OUT_5POINT1),
    Entry::canonical("AUDIO_CHANNEL_OUT_5POINT1_SIDE", AudioChannelMask::OUT_5POINT1_SIDE),
    Entry::canonical("AUDIO_CHANNEL_OUT_5POINT1POINT2", AudioChannelMask::OUT_5POINT1POINT2),
    Entry::canonical("AUDIO_CHANNEL_OUT_5POINT1POINT4", AudioChannelMask::OUT_5POINT1POINT4),
    Entry::canonical("AUDIO_CHANNEL_OUT_6POINT1", AudioChannelMask::OUT_6POINT1),
    Entry::canonical("AUDIO_CHANNEL_OUT_7POINT1", AudioChannelMask::OUT_7POINT1),
    Entry::canonical("AUDIO_CHANNEL_OUT_7POINT1POINT2", AudioChannelMask::OUT_7POINT1POINT2),
    Entry::canonical("AUDIO_CHANNEL_OUT_7POINT1POINT4", AudioChannelMask::OUT_7POINT1POINT4),
    Entry::canonical("AUDIO_CHANNEL_OUT_MONO_HAPTIC_A", AudioChannelMask::OUT_MONO_HAPTIC_A),
    Entry::canonical("AUDIO_CHANNEL_OUT_STEREO_HAPTIC_A", AudioChannelMask::OUT_STEREO_HAPTIC_A),
    Entry::canonical("AUDIO_CHANNEL_OUT_HAPTIC_AB", AudioChannelMask::OUT_HAPTIC_AB),
    Entry::canonical("AUDIO_CHANNEL_OUT_MONO_HAPTIC_AB", AudioChannelMask::OUT_MONO_HAPTIC_AB),
    Entry::canonical("AUDIO_CHANNEL_OUT_STEREO_HAPTIC_AB", AudioChannelMask::OUT_STEREO_HAPTIC_AB),
    Entry::alias("AUDIO_CHANNEL_OUT_5POINT1_BACK", AudioChannelMask::OUT_5POINT1_BACK),
    Entry::alias("AUDIO_CHANNEL_OUT_QUAD_BACK", AudioChannelMask::OUT_QUAD_BACK),
    Entry::sentinel("AUDIO_CHANNEL_OUT_ALL", AudioChannelMask::OUT_ALL),
    Entry::sentinel("AUDIO_CHANNEL_INVALID", AudioChannelMask::INVALID),
];

static INPUT_ROWS: &[Entry<AudioChannelMask>] = &[
    Entry::canonical("AUDIO_CHANNEL_NONE", AudioChannelMask::NONE),
    Entry::canonical("AUDIO_CHANNEL_IN_MONO", AudioChannelMask::IN_MONO),
    Entry::canonical("AUDIO_CHANNEL_IN_STEREO", AudioChannelMask::IN_STEREO),
    Entry::canonical("AUDIO_CHANNEL_IN_FRONT_BACK", AudioChannelMask::IN_FRONT_BACK),
    Entry::canonical("AUDIO_CHANNEL_IN_6", AudioChannelMask::IN_6),
    Entry::canonical("AUDIO_CHANNEL_IN_2POINT0POINT2", AudioChannelMask::IN_2POINT0POINT2),
    Entry::canonical("AUDIO_CHANNEL_IN_2POINT1POINT2", AudioChannelMask::IN_2POINT1POINT2),
    Entry::canonical("AUDIO_CHANNEL_IN_3POINT0POINT2", AudioChannelMask::IN_3POINT0POINT2),
    Entry::canonical("AUDIO_CHANNEL_IN_3POINT1POINT2", AudioChannelMask::IN_3POINT1POINT2),
    Entry::canonical("AUDIO_CHANNEL_IN_5POINT1", AudioChannelMask::IN_5POINT1),
    Entry::canonical("AUDIO_CHANNEL_IN_VOICE_UPLINK_MONO", AudioChannelMask::IN_VOICE_UPLINK_MONO),
    Entry::canonical("AUDIO_CHANNEL_IN_VOICE_DNLINK_MONO", AudioChannelMask::IN_VOICE_DNLINK_MONO),
    Entry::canonical("AUDIO_CHANNEL_IN_VOICE_CALL_MONO", AudioChannelMask::IN_VOICE_CALL_MONO),
    Entry::sentinel("AUDIO_CHANNEL_IN_ALL", AudioChannelMask::IN_ALL),
    Entry::sentinel("AUDIO_CHANNEL_INVALID", AudioChannelMask::INVALID),
];

static INDEX_ROWS: &[Entry<AudioChannelMask>] = &[
    Entry::canonical("AUDIO_CHANNEL_NONE", AudioChannelMask::NONE),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_1", AudioChannelMask::INDEX_MASK_1),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_2", AudioChannelMask::INDEX_MASK_2),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_3", AudioChannelMask::INDEX_MASK_3),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_4", AudioChannelMask::INDEX_MASK_4),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_5", AudioChannelMask::INDEX_MASK_5),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_6", AudioChannelMask::INDEX_MASK_6),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_7", AudioChannelMask::INDEX_MASK_7),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_8", AudioChannelMask::INDEX_MASK_8),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_9", AudioChannelMask::INDEX_MASK_9),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_10", AudioChannelMask::INDEX_MASK_10),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_11", AudioChannelMask::INDEX_MASK_11),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_12", AudioChannelMask::INDEX_MASK_12),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_13", AudioChannelMask::INDEX_MASK_13),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_14", AudioChannelMask::INDEX_MASK_14),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_15", AudioChannelMask::INDEX_MASK_15),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_16", AudioChannelMask::INDEX_MASK_16),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_17", AudioChannelMask::INDEX_MASK_17),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_18", AudioChannelMask::INDEX_MASK_18),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_19", AudioChannelMask::INDEX_MASK_19),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_20", AudioChannelMask::INDEX_MASK_20),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_21", AudioChannelMask::INDEX_MASK_21),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_22", AudioChannelMask::INDEX_MASK_22),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_23", AudioChannelMask::INDEX_MASK_23),
    Entry::canonical("AUDIO_CHANNEL_INDEX_MASK_24", AudioChannelMask::INDEX_MASK_24),
    Entry::sentinel("AUDIO_CHANNEL_INVALID", AudioChannelMask::INVALID),
];

/// 输出方向掩码表。
pub static OUTPUT_MASKS: Table<AudioChannelMask> =
    Table::new(Domain::OutputChannelMask, OUTPUT_ROWS, &[]);

/// 输入方向掩码表。
pub static INPUT_MASKS: Table<AudioChannelMask> =
    Table::new(Domain::InputChannelMask, INPUT_ROWS, &[]);

/// 索引表示掩码表。
pub static INDEX_MASKS: Table<AudioChannelMask> =
    Table::new(Domain::IndexChannelMask, INDEX_ROWS, &[]);

impl EnumValue for AudioChannelMask {
    fn to_raw(self) -> i64 {
        i64::from(self.0)
    }

    fn from_raw(raw: i64) -> Option<Self> {
        u32::try_from(raw).ok().map(Self)
    }
}

impl BitOr for AudioChannelMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl From<u32> for AudioChannelMask {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<AudioChannelMask> for u32 {
    fn from(mask: AudioChannelMask) -> Self {
        mask.0
    }
}

impl fmt::Display for AudioChannelMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AudioChannelMask {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (symbol, domain) = match self.representation() {
            Some(ChannelRepresentation::Index) => {
                (self.to_index_symbol(), Domain::IndexChannelMask)
            }
            _ => (
                self.to_out_symbol().or_else(|| self.to_in_symbol()),
                Domain::OutputChannelMask,
            ),
        };
        crate::serde_impl::serialize_symbol(symbol, domain, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AudioChannelMask {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::serde_impl::deserialize_symbol(
            &[&OUTPUT_MASKS, &INPUT_MASKS, &INDEX_MASKS],
            deserializer,
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn composites_are_unions_of_discrete_channels() {
        assert_eq!(AudioChannelMask::OUT_STEREO.0, 0x3);
        assert_eq!(AudioChannelMask::OUT_5POINT1.0, 0x3F);
        assert_eq!(AudioChannelMask::OUT_7POINT1POINT4.0, 0x2D63F);
        assert_eq!(AudioChannelMask::OUT_STEREO_HAPTIC_AB.0, 0x3000_0003);
        assert_eq!(AudioChannelMask::IN_VOICE_CALL_MONO.0, 0xC010);
        assert_eq!(AudioChannelMask::IN_5POINT1.0, 0x17_000C);
    }

    #[test]
    fn all_masks_cover_every_discrete_channel() {
        assert_eq!(AudioChannelMask::OUT_ALL.0, 0x300F_FFFF);
        assert_eq!(AudioChannelMask::IN_ALL.0, 0x77_FFFC);
        assert_eq!(AudioChannelMask::HAPTIC_ALL, AudioChannelMask::OUT_HAPTIC_AB);
    }

    #[test]
    fn index_masks_follow_the_header_formula() {
        assert_eq!(AudioChannelMask::INDEX_HDR, 0x8000_0000);
        assert_eq!(AudioChannelMask::INDEX_MASK_3.0, 0x8000_0007);
        assert_eq!(AudioChannelMask::INDEX_MASK_24.0, 0x80FF_FFFF);
        assert_eq!(AudioChannelMask::index_mask(0), None);
        assert_eq!(AudioChannelMask::index_mask(31), None);
        assert_eq!(
            AudioChannelMask::index_mask(30).map(AudioChannelMask::channel_count),
            Some(30)
        );
        assert_eq!(AudioChannelMask::index_mask(25).and_then(AudioChannelMask::to_index_symbol), None);
    }

    #[test]
    fn representation_comes_from_the_tag_bits() {
        assert_eq!(
            AudioChannelMask::OUT_STEREO.representation(),
            Some(ChannelRepresentation::Position)
        );
        assert_eq!(
            AudioChannelMask::INDEX_MASK_8.representation(),
            Some(ChannelRepresentation::Index)
        );
        assert_eq!(AudioChannelMask::INVALID.representation(), None);
    }

    #[test]
    fn channel_count_ignores_the_tag() {
        assert_eq!(AudioChannelMask::OUT_5POINT1.channel_count(), 6);
        assert_eq!(AudioChannelMask::INDEX_MASK_12.channel_count(), 12);
        assert_eq!(AudioChannelMask::NONE.channel_count(), 0);
    }

    #[test]
    fn haptic_detection_is_positional_only() {
        assert!(AudioChannelMask::OUT_MONO_HAPTIC_A.has_haptic());
        assert!(!AudioChannelMask::OUT_7POINT1.has_haptic());
        assert!(!AudioChannelMask::INDEX_MASK_24.has_haptic());
    }

    #[test]
    fn direction_decides_the_name() {
        let raw = AudioChannelMask(0xC);
        assert_eq!(raw.to_in_symbol(), Some("AUDIO_CHANNEL_IN_STEREO"));
        assert_eq!(raw.to_out_symbol(), None);
        assert_eq!(AudioChannelMask::OUT_STEREO.to_in_symbol(), None);
        assert_eq!(AudioChannelMask::from_in_symbol("AUDIO_CHANNEL_OUT_STEREO"), None);
    }

    #[test]
    fn none_is_shared_by_every_direction() {
        for table in [&OUTPUT_MASKS, &INPUT_MASKS, &INDEX_MASKS] {
            assert_eq!(table.project(AudioChannelMask::NONE), Some("AUDIO_CHANNEL_NONE"));
            assert_eq!(table.parse("AUDIO_CHANNEL_NONE"), Some(AudioChannelMask::NONE));
        }
    }

    #[test]
    fn display_is_numeric() {
        assert_eq!(AudioChannelMask::OUT_STEREO.to_string(), "0x3");
    }
}
