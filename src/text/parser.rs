use embedded_graphics::pixelcolor::Rgb888;
use log::debug;

use crate::models::color::parse_hex_color;
use crate::models::segment::{PlaceholderKind, SegmentFlags, TextSegment};
use crate::models::session::SessionDataProvider;

/// Text shown in place of a placeholder whose body could not be understood.
pub const INVALID_FORMAT_TEXT: &str = "<invalid format>";

const BOLD_SIGIL: char = '*';
const ITALIC_SIGIL: char = '&';
const UNDERLINE_SIGIL: char = '_';
const COLOR_SEPARATOR: char = ':';

/// The parsed contents of a `{...}` run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaceholderSpec {
    /// Style bits only (BOLD, ITALIC, UNDERLINE)
    pub style: SegmentFlags,
    pub kind: PlaceholderKind,
    /// Explicit color, `None` when absent or malformed
    pub color: Option<Rgb888>,
}

impl PlaceholderSpec {
    pub fn flags(&self) -> SegmentFlags {
        let mut flags = self.style | self.kind.flag();
        if self.color.is_some() {
            flags |= SegmentFlags::COLORED;
        }
        flags
    }

    /// Build the segment for this placeholder with the session's current value.
    pub fn to_segment(&self, default_color: Rgb888, session: &dyn SessionDataProvider) -> TextSegment {
        TextSegment {
            text: self.kind.value(session),
            flags: self.flags(),
            color: self.color.unwrap_or(default_color),
        }
    }
}

/// Parse a placeholder body (the text between the braces).
///
/// Grammar: `sigil* tag (":" color)?`. Returns `None` when there is no recognised tag.
pub fn parse_placeholder(body: &str) -> Option<PlaceholderSpec> {
    let mut style = SegmentFlags::NORMAL;
    let mut rest = body;

    while let Some(c) = rest.chars().next() {
        let flag = match c {
            BOLD_SIGIL => SegmentFlags::BOLD,
            ITALIC_SIGIL => SegmentFlags::ITALIC,
            UNDERLINE_SIGIL => SegmentFlags::UNDERLINE,
            _ => break,
        };
        style |= flag;
        rest = &rest[c.len_utf8()..];
    }

    let (tag, color_spec) = match rest.split_once(COLOR_SEPARATOR) {
        Some((tag, color_spec)) => (tag, Some(color_spec)),
        None => (rest, None),
    };

    let kind = PlaceholderKind::from_tag(tag)?;

    // Only the first color piece counts; anything after another separator is ignored.
    let color = color_spec.and_then(|spec| {
        let first = spec.split(COLOR_SEPARATOR).next().unwrap_or(spec);
        match parse_hex_color(first) {
            Ok(color) => Some(color),
            Err(e) => {
                debug!("Ignoring color in placeholder '{{{}}}': {}", body, e);
                None
            }
        }
    });

    Some(PlaceholderSpec { style, kind, color })
}

/// Parse a label template into segments bound to `session`.
///
/// Literal runs become `NORMAL` segments, `{...}` runs become placeholder segments
/// carrying the current session value. A placeholder that never closes is kept as
/// literal text and an unrecognised one becomes [`INVALID_FORMAT_TEXT`].
pub fn parse(
    format: &str,
    default_color: Rgb888,
    session: &dyn SessionDataProvider,
) -> Vec<TextSegment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        if c != '{' {
            literal.push(c);
            continue;
        }

        flush_literal(&mut literal, &mut segments, default_color);

        let mut body = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            if c == '}' {
                closed = true;
                break;
            }
            body.push(c);
        }

        if closed {
            segments.push(placeholder_segment(&body, default_color, session));
        } else {
            // Ran off the end: the brace and what followed are plain text.
            let mut text = String::with_capacity(body.len() + 1);
            text.push('{');
            text.push_str(&body);
            segments.push(TextSegment::literal(text, default_color));
        }
    }

    flush_literal(&mut literal, &mut segments, default_color);

    debug!("Parsed format '{}' into {} segment(s)", format, segments.len());
    segments
}

fn flush_literal(literal: &mut String, segments: &mut Vec<TextSegment>, color: Rgb888) {
    if !literal.is_empty() {
        segments.push(TextSegment::literal(std::mem::take(literal), color));
    }
}

fn placeholder_segment(
    body: &str,
    default_color: Rgb888,
    session: &dyn SessionDataProvider,
) -> TextSegment {
    match parse_placeholder(body) {
        Some(spec) => spec.to_segment(default_color, session),
        None => {
            debug!("Invalid placeholder '{{{}}}'", body);
            TextSegment::literal(INVALID_FORMAT_TEXT, default_color)
        }
    }
}
