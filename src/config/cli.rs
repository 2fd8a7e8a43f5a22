//! Command-line argument parsing

/// Command-line arguments for the label renderer
#[derive(argh::FromArgs, Debug, Clone)]
/// AudioBand label renderer
///
/// Renders a now-playing label template such as "{*artist} - {song:#ff8800}" to a PNG file.
pub struct CliArgs {
    #[argh(option, short = 'f', default = "String::from(\"{artist} - {song}\")")]
    /// label template. Placeholders: {artist} {song} {album} {time} {remaining} {length};
    /// prefix with * (bold), & (italic), _ (underline); suffix :#RRGGBB for a color.
    /// Default: "{artist} - {song}"
    pub format: String,

    #[argh(option, short = 'c', default = "String::from(\"#ffffff\")")]
    /// default text color as #RRGGBB or #AARRGGBB. Default: "#ffffff"
    pub color: String,

    #[argh(option, default = "String::from(\"#000000\")")]
    /// background color as #RRGGBB. Default: "#000000"
    pub background: String,

    #[argh(option, default = "String::from(\"latin1\")")]
    /// font character set: "ascii" or "latin1". Default: "latin1"
    pub font_family: String,

    #[argh(option, short = 's', default = "13")]
    /// font size in pixels (6-64). Default: 13
    pub font_size: u32,

    #[argh(option, short = 'a', default = "String::from(\"left\")")]
    /// text alignment: "left", "center" or "right". Default: "left"
    pub alignment: String,

    #[argh(option, short = 'w', default = "240")]
    /// label width in pixels. Default: 240
    pub width: i32,

    #[argh(option, default = "20")]
    /// label height in pixels. Default: 20
    pub height: i32,

    #[argh(switch)]
    /// scroll text that does not fit the label. Default: false
    pub scroll: bool,

    #[argh(option, default = "30.0")]
    /// scroll speed in pixels per second. Default: 30
    pub scroll_speed: f32,

    #[argh(option)]
    /// path of a JSON session snapshot
    /// (artist, song_name, album_name, song_progress_ms, song_length_ms)
    pub session: Option<String>,

    #[argh(option)]
    /// artist name, overrides the session file
    pub artist: Option<String>,

    #[argh(option)]
    /// song name, overrides the session file
    pub song: Option<String>,

    #[argh(option)]
    /// album name, overrides the session file
    pub album: Option<String>,

    #[argh(option)]
    /// elapsed time in seconds, overrides the session file
    pub progress: Option<u64>,

    #[argh(option)]
    /// song length in seconds, overrides the session file
    pub length: Option<u64>,

    #[argh(option, default = "0")]
    /// simulate this many seconds of playback before rendering. Default: 0
    pub advance: u32,

    #[argh(option, short = 'o', default = "String::from(\"label.png\")")]
    /// output PNG path. Default: "label.png"
    pub output: String,
}

impl CliArgs {
    /// Parse CLI arguments
    pub fn parse() -> Self {
        argh::from_env()
    }
}
