//! Label configuration structure and methods

use super::{CliArgs, EnvVars};
use crate::display::renderer::RenderContext;
use crate::models::color::parse_hex_color;
use crate::models::label::{FontFamily, LabelFont, TextAlignment, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::models::session::SessionSnapshot;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use log::info;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const MAX_LABEL_WIDTH: i32 = 4096;
pub const MAX_LABEL_HEIGHT: i32 = 512;

/// Configuration structure that stores all label settings
#[derive(Clone, Debug)]
pub struct LabelConfig {
    pub format: String,
    pub color: String,
    pub background: String,
    pub font_family: String,
    pub font_size: u32,
    pub alignment: String,
    pub width: i32,
    pub height: i32,
    pub scroll: bool,
    pub scroll_speed: f32,

    // Session source
    pub session_file: Option<PathBuf>,
    pub artist: Option<String>,
    pub song: Option<String>,
    pub album: Option<String>,
    pub progress: Option<u64>,
    pub length: Option<u64>,

    pub advance: u32,
    pub output: PathBuf,
}

impl LabelConfig {
    /// Create a new configuration by combining CLI arguments and environment variables
    pub fn new(cli_args: CliArgs, env_vars: EnvVars) -> Self {
        // Apply settings from CLI args, then override with environment variables if present
        let format = env_vars.format.unwrap_or(cli_args.format);
        let color = env_vars.color.unwrap_or(cli_args.color);
        let background = env_vars.background.unwrap_or(cli_args.background);

        let font_family = env_vars.font_family.unwrap_or(cli_args.font_family);
        let font_size = env_vars.font_size.unwrap_or(cli_args.font_size);

        let alignment = env_vars.alignment.unwrap_or(cli_args.alignment);
        let width = env_vars.width.unwrap_or(cli_args.width);
        let height = env_vars.height.unwrap_or(cli_args.height);
        let scroll = env_vars.scroll.unwrap_or(cli_args.scroll);
        let scroll_speed = env_vars.scroll_speed.unwrap_or(cli_args.scroll_speed);

        let session_file = env_vars.session.or(cli_args.session).map(PathBuf::from);
        let advance = env_vars.advance.unwrap_or(cli_args.advance);
        let output = PathBuf::from(env_vars.output.unwrap_or(cli_args.output));

        info!(
            "Label: {}x{} px, font {} {}px, align {}, scroll {}",
            width, height, font_family, font_size, alignment, scroll
        );

        Self {
            format,
            color,
            background,
            font_family,
            font_size,
            alignment,
            width,
            height,
            scroll,
            scroll_speed,
            session_file,
            artist: cli_args.artist,
            song: cli_args.song,
            album: cli_args.album,
            progress: cli_args.progress,
            length: cli_args.length,
            advance,
            output,
        }
    }

    /// Default text color. Falls back to white if the value does not parse.
    pub fn default_color(&self) -> Rgb888 {
        parse_hex_color(&self.color).unwrap_or(Rgb888::WHITE)
    }

    /// Background as an RGB triple. Falls back to black if the value does not parse.
    pub fn background_rgb(&self) -> [u8; 3] {
        let color = parse_hex_color(&self.background).unwrap_or(Rgb888::BLACK);
        [color.r(), color.g(), color.b()]
    }

    pub fn font(&self) -> LabelFont {
        LabelFont {
            family: self.font_family.parse().unwrap_or_default(),
            size: self.font_size,
        }
    }

    pub fn render_context(&self) -> RenderContext {
        let alignment: TextAlignment = self.alignment.parse().unwrap_or_default();
        let ctx = RenderContext::new(self.width, self.height, alignment);
        if self.scroll {
            ctx.with_scrolling(self.scroll_speed)
        } else {
            ctx
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output
    }

    /// Session snapshot from the session file (if any) with CLI overrides applied
    pub fn initial_session(&self) -> Result<SessionSnapshot, String> {
        let mut session = match &self.session_file {
            Some(path) => SessionSnapshot::load(path)?,
            None => SessionSnapshot::default(),
        };

        if let Some(artist) = &self.artist {
            session.artist = artist.clone();
        }
        if let Some(song) = &self.song {
            session.song_name = song.clone();
        }
        if let Some(album) = &self.album {
            session.album_name = album.clone();
        }
        if let Some(progress) = self.progress {
            session.song_progress = Duration::from_secs(progress);
        }
        if let Some(length) = self.length {
            session.song_length = Duration::from_secs(length);
        }

        Ok(session)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Err(e) = parse_hex_color(&self.color) {
            errors.push(format!("Invalid text color: {}", e));
        }

        if let Err(e) = parse_hex_color(&self.background) {
            errors.push(format!("Invalid background color: {}", e));
        }

        if let Err(e) = self.font_family.parse::<FontFamily>() {
            errors.push(e);
        }

        if self.font_size < MIN_FONT_SIZE || self.font_size > MAX_FONT_SIZE {
            errors.push(format!(
                "Font size must be between {} and {}",
                MIN_FONT_SIZE, MAX_FONT_SIZE
            ));
        }

        if let Err(e) = self.alignment.parse::<TextAlignment>() {
            errors.push(e);
        }

        if self.width <= 0 || self.width > MAX_LABEL_WIDTH {
            errors.push(format!("Label width must be between 1 and {}", MAX_LABEL_WIDTH));
        }

        if self.height <= 0 || self.height > MAX_LABEL_HEIGHT {
            errors.push(format!("Label height must be between 1 and {}", MAX_LABEL_HEIGHT));
        }

        if !self.scroll_speed.is_finite() || self.scroll_speed <= 0.0 {
            errors.push("Scroll speed must be a positive number".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
