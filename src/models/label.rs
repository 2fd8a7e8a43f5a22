use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    Left,
    Center,
    Right,
}

impl Default for TextAlignment {
    fn default() -> Self {
        TextAlignment::Left
    }
}

impl FromStr for TextAlignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(TextAlignment::Left),
            "center" | "centre" => Ok(TextAlignment::Center),
            "right" => Ok(TextAlignment::Right),
            other => Err(format!(
                "Invalid alignment '{}'. Must be 'left', 'center' or 'right'",
                other
            )),
        }
    }
}

/// Character set of the bitmap faces used to draw a label.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    Ascii,
    /// ISO 8859-1, covers accented Latin characters common in track metadata.
    Latin1,
}

impl Default for FontFamily {
    fn default() -> Self {
        FontFamily::Latin1
    }
}

impl FromStr for FontFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ascii" => Ok(FontFamily::Ascii),
            "latin1" | "iso-8859-1" | "iso_8859_1" => Ok(FontFamily::Latin1),
            other => Err(format!(
                "Invalid font family '{}'. Must be 'ascii' or 'latin1'",
                other
            )),
        }
    }
}

pub const MIN_FONT_SIZE: u32 = 6;
pub const MAX_FONT_SIZE: u32 = 64;

fn default_font_size() -> u32 {
    13
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct LabelFont {
    #[serde(default)]
    pub family: FontFamily,
    /// Requested line height in pixels
    #[serde(default = "default_font_size")]
    pub size: u32,
}

impl Default for LabelFont {
    fn default() -> Self {
        Self {
            family: FontFamily::default(),
            size: default_font_size(),
        }
    }
}
