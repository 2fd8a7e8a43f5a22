//! Data model shared by the parser and the renderer

pub mod color;
pub mod label;
pub mod segment;
pub mod session;

pub use color::{parse_hex_color, to_hex};
pub use label::{FontFamily, LabelFont, TextAlignment};
pub use segment::{PlaceholderKind, SegmentFlags, TextSegment};
pub use session::{format_duration, SessionDataProvider, SessionField, SessionSnapshot};
