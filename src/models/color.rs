use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

/// Parse a hex color in `#RRGGBB` or `#AARRGGBB` form.
///
/// Alpha is flattened against a black background by scaling each channel.
pub fn parse_hex_color(value: &str) -> Result<Rgb888, String> {
    let digits = value
        .strip_prefix('#')
        .ok_or_else(|| format!("Color '{}' must start with '#'", value))?;

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Color '{}' contains non-hex characters", value));
    }

    let channel = |index: usize| -> u8 {
        // Every character is an ASCII hex digit at this point
        u8::from_str_radix(&digits[index * 2..index * 2 + 2], 16).unwrap_or(0)
    };

    match digits.len() {
        6 => Ok(Rgb888::new(channel(0), channel(1), channel(2))),
        8 => {
            let alpha = channel(0) as f32 / 255.0;
            let scale = |c: u8| (c as f32 * alpha).round() as u8;
            Ok(Rgb888::new(
                scale(channel(1)),
                scale(channel(2)),
                scale(channel(3)),
            ))
        }
        len => Err(format!(
            "Color '{}' has {} hex digits, expected 6 (#RRGGBB) or 8 (#AARRGGBB)",
            value, len
        )),
    }
}

/// Format a color as `#rrggbb`.
pub fn to_hex(color: Rgb888) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_hex_color("#ff00ff"), Ok(Rgb888::new(255, 0, 255)));
        assert_eq!(parse_hex_color("#1A2b3C"), Ok(Rgb888::new(0x1a, 0x2b, 0x3c)));
    }

    #[test]
    fn test_parse_argb_flattens_alpha() {
        assert_eq!(parse_hex_color("#ffff0000"), Ok(Rgb888::new(255, 0, 0)));
        assert_eq!(parse_hex_color("#00ffffff"), Ok(Rgb888::new(0, 0, 0)));
        assert_eq!(parse_hex_color("#80ff0000"), Ok(Rgb888::new(128, 0, 0)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_hex_color("ff00ff").is_err());
        assert!(parse_hex_color("#ff00f").is_err());
        assert!(parse_hex_color("#gg00ff").is_err());
        assert!(parse_hex_color("#ff00ffextra").is_err());
        assert!(parse_hex_color("#").is_err());
        assert!(parse_hex_color("#ff00ff\u{e9}").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(Rgb888::new(255, 0, 171)), "#ff00ab");
    }
}
