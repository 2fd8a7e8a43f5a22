use audioband_label::config::init_config;
use audioband_label::display::{FormattedTextRenderer, ImageCanvas, Renderer};
use audioband_label::models::{to_hex, SessionField};
use audioband_label::utils::logging::init_logger;
use log::{debug, error, info};
use std::time::Duration;

fn main() {
    init_logger();

    info!("Starting AudioBand label renderer");

    // Initialize configuration
    let config = init_config();

    // Validate configuration
    if let Err(errors) = config.validate() {
        for error in errors {
            error!("{}", error);
        }
        std::process::exit(1);
    }

    let mut session = match config.initial_session() {
        Ok(session) => session,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let default_color = config.default_color();
    info!(
        "Rendering format '{}' in {} for '{}' - '{}'",
        config.format,
        to_hex(default_color),
        session.artist,
        session.song_name
    );

    let mut renderer = FormattedTextRenderer::new(
        &config.format,
        &session,
        default_color,
        config.font(),
        config.render_context(),
    );

    // Simulate playback one second at a time, the way a session host would
    // report progress changes
    for tick in 0..config.advance {
        session.song_progress += Duration::from_secs(1);
        renderer.on_session_changed(SessionField::SongProgress, &session);
        renderer.update(1.0);
        debug!("Tick {}: '{}'", tick + 1, renderer.plain_text());
    }

    let size = renderer.measure();
    info!(
        "Label text: '{}' ({}x{} px, {} segment(s))",
        renderer.plain_text(),
        size.width,
        size.height,
        renderer.segments().len()
    );

    let mut canvas = ImageCanvas::new(
        config.width as u32,
        config.height as u32,
        config.background_rgb(),
    );
    renderer.render(&mut canvas);

    if let Err(e) = canvas.save_png(config.output_path()) {
        error!("{}", e);
        std::process::exit(1);
    }
}
