//! Now-playing label engine.
//!
//! A label template such as `"{*artist} - {song:#ff8800} [{time}/{length}]"` is parsed
//! once into styled [`models::TextSegment`]s bound to a session. The
//! [`display::FormattedTextRenderer`] keeps those segments live as the session
//! changes and measures and draws them onto any embedded-graphics target.

pub mod config;
pub mod display;
pub mod models;
pub mod text;
pub mod utils;
