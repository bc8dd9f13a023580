//! 内容类型。

use crate::{domain::Domain, table::{Entry, Table}};

/// 音频内容类型，描述"播放的是什么"，与用途正交。
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AudioContentType(pub u32);

impl AudioContentType {
    /// 未知。
    pub const UNKNOWN: Self = Self(0);
    /// 语音。
    pub const SPEECH: Self = Self(1);
    /// 音乐。
    pub const MUSIC: Self = Self(2);
    /// 影视伴音。
    pub const MOVIE: Self = Self(3);
    /// 提示音。
    pub const SONIFICATION: Self = Self(4);
}

static ROWS: &[Entry<AudioContentType>] = &[
    Entry::canonical("AUDIO_CONTENT_TYPE_UNKNOWN", AudioContentType::UNKNOWN),
    Entry::canonical("AUDIO_CONTENT_TYPE_SPEECH", AudioContentType::SPEECH),
    Entry::canonical("AUDIO_CONTENT_TYPE_MUSIC", AudioContentType::MUSIC),
    Entry::canonical("AUDIO_CONTENT_TYPE_MOVIE", AudioContentType::MOVIE),
    Entry::canonical("AUDIO_CONTENT_TYPE_SONIFICATION", AudioContentType::SONIFICATION),
];

/// 内容类型表。
pub static CONTENT_TYPES: Table<AudioContentType> = Table::new(Domain::ContentType, ROWS, &[]);

enumerant!(AudioContentType(u32), table = CONTENT_TYPES, fallback = "{}");

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn unknown_value_renders_as_number() {
        assert_eq!(AudioContentType::MOVIE.to_string(), "AUDIO_CONTENT_TYPE_MOVIE");
        assert_eq!(AudioContentType(40).to_string(), "40");
        assert_eq!(AudioContentType(40).to_symbol(), None);
    }
}
