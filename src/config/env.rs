//! Environment variable handling

/// Environment variables for label configuration
#[derive(Debug, Default, Clone)]
pub struct EnvVars {
    pub format: Option<String>,
    pub color: Option<String>,
    pub background: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<u32>,
    pub alignment: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub scroll: Option<bool>,
    pub scroll_speed: Option<f32>,
    pub session: Option<String>,
    pub advance: Option<u32>,
    pub output: Option<String>,
}

/// Load configuration from environment variables
pub fn load_env_vars() -> EnvVars {
    load_env_vars_from(|key| std::env::var(key).ok())
}

/// Load configuration through an arbitrary variable lookup
pub fn load_env_vars_from<F>(lookup: F) -> EnvVars
where
    F: Fn(&str) -> Option<String>,
{
    let mut env = EnvVars::default();

    // Template and colors
    env.format = lookup("LABEL_FORMAT");
    env.color = lookup("LABEL_COLOR");
    env.background = lookup("LABEL_BACKGROUND");

    // Font
    env.font_family = lookup("LABEL_FONT_FAMILY");
    if let Some(value) = lookup("LABEL_FONT_SIZE") {
        if let Ok(size) = value.parse() {
            env.font_size = Some(size);
        }
    }

    // Layout
    env.alignment = lookup("LABEL_ALIGNMENT");

    if let Some(value) = lookup("LABEL_WIDTH") {
        if let Ok(width) = value.parse() {
            env.width = Some(width);
        }
    }

    if let Some(value) = lookup("LABEL_HEIGHT") {
        if let Ok(height) = value.parse() {
            env.height = Some(height);
        }
    }

    if let Some(value) = lookup("LABEL_SCROLL") {
        env.scroll = parse_flag(&value);
    }

    if let Some(value) = lookup("LABEL_SCROLL_SPEED") {
        if let Ok(speed) = value.parse() {
            env.scroll_speed = Some(speed);
        }
    }

    // Session and output
    env.session = lookup("LABEL_SESSION");

    if let Some(value) = lookup("LABEL_ADVANCE") {
        if let Ok(seconds) = value.parse() {
            env.advance = Some(seconds);
        }
    }

    env.output = lookup("LABEL_OUTPUT");

    env
}

// Accepts true/false as well as numeric values (0/1)
fn parse_flag(value: &str) -> Option<bool> {
    if let Ok(enabled) = value.parse::<bool>() {
        Some(enabled)
    } else if let Ok(enabled) = value.parse::<u8>() {
        Some(enabled != 0)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_reads_label_variables() {
        let env = load_env_vars_from(lookup(&[
            ("LABEL_FORMAT", "{song}"),
            ("LABEL_FONT_SIZE", "18"),
            ("LABEL_WIDTH", "320"),
            ("LABEL_SCROLL", "1"),
            ("LABEL_SCROLL_SPEED", "12.5"),
        ]));
        assert_eq!(env.format.as_deref(), Some("{song}"));
        assert_eq!(env.font_size, Some(18));
        assert_eq!(env.width, Some(320));
        assert_eq!(env.scroll, Some(true));
        assert_eq!(env.scroll_speed, Some(12.5));
        assert_eq!(env.output, None);
    }

    #[test]
    fn test_unparseable_numbers_are_ignored() {
        let env = load_env_vars_from(lookup(&[
            ("LABEL_FONT_SIZE", "large"),
            ("LABEL_SCROLL", "maybe"),
        ]));
        assert_eq!(env.font_size, None);
        assert_eq!(env.scroll, None);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("false"), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("yes"), None);
    }
}
