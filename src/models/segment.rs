use embedded_graphics::pixelcolor::Rgb888;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::models::session::{format_duration, SessionDataProvider};

/// Flags describing what a segment is bound to and how it is styled.
///
/// A literal segment carries `NORMAL` only. A placeholder segment carries exactly one
/// placeholder bit plus any style bits, and `COLORED` when the template gave it an
/// explicit color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SegmentFlags(u16);

impl SegmentFlags {
    pub const NORMAL: Self = Self(0);
    pub const ARTIST: Self = Self(1 << 0);
    pub const SONG: Self = Self(1 << 1);
    pub const ALBUM: Self = Self(1 << 2);
    pub const CURRENT_TIME: Self = Self(1 << 3);
    pub const REMAINING: Self = Self(1 << 4);
    pub const SONG_LENGTH: Self = Self(1 << 5);
    pub const BOLD: Self = Self(1 << 6);
    pub const ITALIC: Self = Self(1 << 7);
    pub const UNDERLINE: Self = Self(1 << 8);
    pub const COLORED: Self = Self(1 << 9);

    const NAMES: [(Self, &'static str); 10] = [
        (Self::ARTIST, "ARTIST"),
        (Self::SONG, "SONG"),
        (Self::ALBUM, "ALBUM"),
        (Self::CURRENT_TIME, "CURRENT_TIME"),
        (Self::REMAINING, "REMAINING"),
        (Self::SONG_LENGTH, "SONG_LENGTH"),
        (Self::BOLD, "BOLD"),
        (Self::ITALIC, "ITALIC"),
        (Self::UNDERLINE, "UNDERLINE"),
        (Self::COLORED, "COLORED"),
    ];

    pub const fn is_normal(self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `other` is set in `self`. `NORMAL` is contained in everything.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// The placeholder type this flag set is bound to, if any.
    pub fn placeholder_kind(self) -> Option<PlaceholderKind> {
        PlaceholderKind::ALL
            .iter()
            .copied()
            .find(|kind| self.contains(kind.flag()))
    }
}

impl BitOr for SegmentFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for SegmentFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl fmt::Debug for SegmentFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_normal() {
            return write!(f, "SegmentFlags(NORMAL)");
        }
        let names: Vec<&str> = Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "SegmentFlags({})", names.join(" | "))
    }
}

/// The closed set of placeholder tags a template may use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    Artist,
    Song,
    Album,
    CurrentTime,
    Remaining,
    SongLength,
}

impl PlaceholderKind {
    pub const ALL: [PlaceholderKind; 6] = [
        PlaceholderKind::Artist,
        PlaceholderKind::Song,
        PlaceholderKind::Album,
        PlaceholderKind::CurrentTime,
        PlaceholderKind::Remaining,
        PlaceholderKind::SongLength,
    ];

    /// Tag text as written between the braces.
    pub fn tag(self) -> &'static str {
        match self {
            PlaceholderKind::Artist => "artist",
            PlaceholderKind::Song => "song",
            PlaceholderKind::Album => "album",
            PlaceholderKind::CurrentTime => "time",
            PlaceholderKind::Remaining => "remaining",
            PlaceholderKind::SongLength => "length",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.tag() == tag)
    }

    pub fn flag(self) -> SegmentFlags {
        match self {
            PlaceholderKind::Artist => SegmentFlags::ARTIST,
            PlaceholderKind::Song => SegmentFlags::SONG,
            PlaceholderKind::Album => SegmentFlags::ALBUM,
            PlaceholderKind::CurrentTime => SegmentFlags::CURRENT_TIME,
            PlaceholderKind::Remaining => SegmentFlags::REMAINING,
            PlaceholderKind::SongLength => SegmentFlags::SONG_LENGTH,
        }
    }

    /// Current display text of the bound session field.
    pub fn value(self, session: &dyn SessionDataProvider) -> String {
        match self {
            PlaceholderKind::Artist => single_line(session.artist().to_string()),
            PlaceholderKind::Song => single_line(session.song_name().to_string()),
            PlaceholderKind::Album => single_line(session.album_name().to_string()),
            PlaceholderKind::CurrentTime => format_duration(session.song_progress()),
            PlaceholderKind::Remaining => format_duration(
                session.song_length().saturating_sub(session.song_progress()),
            ),
            PlaceholderKind::SongLength => format_duration(session.song_length()),
        }
    }
}

/// Replace line breaks with spaces; labels are drawn on a single line.
pub fn single_line(mut text: String) -> String {
    if text.contains(['\n', '\r']) {
        text = text.replace(['\n', '\r'], " ");
    }
    text
}

/// One independently styled run of label text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSegment {
    pub text: String,
    pub flags: SegmentFlags,
    pub color: Rgb888,
}

impl TextSegment {
    pub fn literal(text: impl Into<String>, color: Rgb888) -> Self {
        Self {
            text: single_line(text.into()),
            flags: SegmentFlags::NORMAL,
            color,
        }
    }

    pub fn is_literal(&self) -> bool {
        self.flags.placeholder_kind().is_none()
    }

    pub fn is_colored(&self) -> bool {
        self.flags.contains(SegmentFlags::COLORED)
    }

    pub fn placeholder_kind(&self) -> Option<PlaceholderKind> {
        self.flags.placeholder_kind()
    }
}
