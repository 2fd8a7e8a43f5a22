//! Selection of monospaced bitmap faces for label segments.
//!
//! Each size tier offers a regular face and, where the font set has one, a bold
//! and an italic face. Styles without a dedicated face fall back to the regular
//! face; bold is then synthesised by the renderer.

use embedded_graphics::mono_font::{ascii, iso_8859_1, MonoFont};

use crate::models::label::{FontFamily, LabelFont};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SizeTier {
    Px10,
    Px13,
    Px14,
    Px15,
    Px18,
    Px20,
}

impl SizeTier {
    fn for_size(size: u32) -> Self {
        match size {
            0..=11 => SizeTier::Px10,
            12..=13 => SizeTier::Px13,
            14 => SizeTier::Px14,
            15..=16 => SizeTier::Px15,
            17..=18 => SizeTier::Px18,
            _ => SizeTier::Px20,
        }
    }
}

/// Concrete face used to draw a segment.
#[derive(Clone, Copy)]
pub struct FontFace {
    pub font: &'static MonoFont<'static>,
    /// Bold was requested but the tier has no bold face
    pub synthetic_bold: bool,
}

impl FontFace {
    /// Horizontal advance of `text` in pixels.
    pub fn advance(&self, text: &str) -> i32 {
        let chars = text.chars().count() as i32;
        if chars == 0 {
            return 0;
        }
        let width = self.font.character_size.width as i32;
        let spacing = self.font.character_spacing as i32;
        let extra = if self.synthetic_bold { 1 } else { 0 };
        chars * (width + spacing) + extra
    }

    pub fn line_height(&self) -> i32 {
        self.font.character_size.height as i32
    }
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("character_size", &self.font.character_size)
            .field("synthetic_bold", &self.synthetic_bold)
            .finish()
    }
}

/// Pick the face for a label font and segment style.
pub fn select_face(font: LabelFont, bold: bool, italic: bool) -> FontFace {
    let tier = SizeTier::for_size(font.size);
    let regular = regular_face(font.family, tier);
    let bold_face = bold_face(font.family, tier);
    let italic_face = italic_face(font.family, tier);

    match (bold, italic) {
        (false, false) => FontFace {
            font: regular,
            synthetic_bold: false,
        },
        (true, false) => match bold_face {
            Some(face) => FontFace {
                font: face,
                synthetic_bold: false,
            },
            None => FontFace {
                font: regular,
                synthetic_bold: true,
            },
        },
        (false, true) => FontFace {
            font: italic_face.unwrap_or(regular),
            synthetic_bold: false,
        },
        // No bold italic faces exist; keep the slant and thicken it
        (true, true) => match (italic_face, bold_face) {
            (Some(face), _) => FontFace {
                font: face,
                synthetic_bold: true,
            },
            (None, Some(face)) => FontFace {
                font: face,
                synthetic_bold: false,
            },
            (None, None) => FontFace {
                font: regular,
                synthetic_bold: true,
            },
        },
    }
}

fn regular_face(family: FontFamily, tier: SizeTier) -> &'static MonoFont<'static> {
    match (family, tier) {
        (FontFamily::Ascii, SizeTier::Px10) => &ascii::FONT_6X10,
        (FontFamily::Ascii, SizeTier::Px13) => &ascii::FONT_6X13,
        (FontFamily::Ascii, SizeTier::Px14) => &ascii::FONT_7X14,
        (FontFamily::Ascii, SizeTier::Px15) => &ascii::FONT_9X15,
        (FontFamily::Ascii, SizeTier::Px18) => &ascii::FONT_9X18,
        (FontFamily::Ascii, SizeTier::Px20) => &ascii::FONT_10X20,
        (FontFamily::Latin1, SizeTier::Px10) => &iso_8859_1::FONT_6X10,
        (FontFamily::Latin1, SizeTier::Px13) => &iso_8859_1::FONT_6X13,
        (FontFamily::Latin1, SizeTier::Px14) => &iso_8859_1::FONT_7X14,
        (FontFamily::Latin1, SizeTier::Px15) => &iso_8859_1::FONT_9X15,
        (FontFamily::Latin1, SizeTier::Px18) => &iso_8859_1::FONT_9X18,
        (FontFamily::Latin1, SizeTier::Px20) => &iso_8859_1::FONT_10X20,
    }
}

fn bold_face(family: FontFamily, tier: SizeTier) -> Option<&'static MonoFont<'static>> {
    match (family, tier) {
        (FontFamily::Ascii, SizeTier::Px13) => Some(&ascii::FONT_6X13_BOLD),
        (FontFamily::Ascii, SizeTier::Px14) => Some(&ascii::FONT_7X14_BOLD),
        (FontFamily::Ascii, SizeTier::Px15) => Some(&ascii::FONT_9X15_BOLD),
        (FontFamily::Ascii, SizeTier::Px18) => Some(&ascii::FONT_9X18_BOLD),
        (FontFamily::Latin1, SizeTier::Px13) => Some(&iso_8859_1::FONT_6X13_BOLD),
        (FontFamily::Latin1, SizeTier::Px14) => Some(&iso_8859_1::FONT_7X14_BOLD),
        (FontFamily::Latin1, SizeTier::Px15) => Some(&iso_8859_1::FONT_9X15_BOLD),
        (FontFamily::Latin1, SizeTier::Px18) => Some(&iso_8859_1::FONT_9X18_BOLD),
        _ => None,
    }
}

fn italic_face(family: FontFamily, tier: SizeTier) -> Option<&'static MonoFont<'static>> {
    match (family, tier) {
        (FontFamily::Ascii, SizeTier::Px13) => Some(&ascii::FONT_6X13_ITALIC),
        (FontFamily::Latin1, SizeTier::Px13) => Some(&iso_8859_1::FONT_6X13_ITALIC),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::geometry::Size;

    fn font(size: u32) -> LabelFont {
        LabelFont {
            family: FontFamily::Latin1,
            size,
        }
    }

    #[test]
    fn test_size_tiers() {
        assert_eq!(select_face(font(8), false, false).font.character_size, Size::new(6, 10));
        assert_eq!(select_face(font(13), false, false).font.character_size, Size::new(6, 13));
        assert_eq!(select_face(font(14), false, false).font.character_size, Size::new(7, 14));
        assert_eq!(select_face(font(16), false, false).font.character_size, Size::new(9, 15));
        assert_eq!(select_face(font(18), false, false).font.character_size, Size::new(9, 18));
        assert_eq!(select_face(font(40), false, false).font.character_size, Size::new(10, 20));
    }

    #[test]
    fn test_bold_synthesised_when_missing() {
        assert!(!select_face(font(13), true, false).synthetic_bold);
        assert!(select_face(font(10), true, false).synthetic_bold);
        assert!(select_face(font(20), true, false).synthetic_bold);
    }

    #[test]
    fn test_advance_includes_synthetic_bold() {
        let regular = select_face(font(10), false, false);
        let bold = select_face(font(10), true, false);
        assert_eq!(regular.advance("abc"), 18);
        assert_eq!(bold.advance("abc"), 19);
        assert_eq!(bold.advance(""), 0);
    }

    #[test]
    fn test_italic_keeps_metrics() {
        let italic = select_face(font(13), false, true);
        assert_eq!(italic.advance("abcd"), 24);
        assert_eq!(italic.line_height(), 13);
    }
}
