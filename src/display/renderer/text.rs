use crate::display::canvas::LabelCanvas;
use crate::display::fonts::{select_face, FontFace};
use crate::display::graphics::embedded_graphics_support::EmbeddedGraphicsCanvas;
use crate::display::renderer::{RenderContext, Renderer};
use crate::models::label::LabelFont;
use crate::models::segment::{single_line, PlaceholderKind, SegmentFlags, TextSegment};
use crate::models::session::{SessionDataProvider, SessionField, SessionSnapshot};
use crate::text::parse;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::Drawable;
use log::{debug, trace};
use std::time::Duration;

/// Keeps a parsed label template live against a changing session.
///
/// Field changes only rewrite the text of the segments bound to that field;
/// the template is parsed again only through [`FormattedTextRenderer::reparse`].
pub struct FormattedTextRenderer {
    /// Template the current segments were parsed from
    format: String,

    segments: Vec<TextSegment>,

    /// Session values the placeholders are bound to
    session: SessionSnapshot,

    /// Color of every segment without an explicit color
    default_color: Rgb888,

    font: LabelFont,

    ctx: RenderContext,

    /// Width of the text in pixels
    text_width: i32,

    /// Current scroll position
    scroll_position: i32,

    /// Timing accumulator for scroll animation
    accumulated_time: f32,

    /// Counter for completed scroll cycles
    completed_scrolls: u32,
}

impl FormattedTextRenderer {
    pub fn new(
        format: &str,
        session: &dyn SessionDataProvider,
        default_color: Rgb888,
        font: LabelFont,
        ctx: RenderContext,
    ) -> Self {
        let session = SessionSnapshot::from_provider(session);
        let segments = parse(format, default_color, &session);

        let mut renderer = Self {
            format: format.to_string(),
            segments,
            session,
            default_color,
            font,
            ctx,
            text_width: 0,
            scroll_position: 0,
            accumulated_time: 0.0,
            completed_scrolls: 0,
        };
        renderer.refresh_metrics();

        debug!(
            "FormattedTextRenderer::new - format: '{}', segments: {}, width: {}, scroll: {}",
            renderer.format,
            renderer.segments.len(),
            renderer.text_width,
            renderer.ctx.scroll
        );

        renderer
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn segments(&self) -> &[TextSegment] {
        &self.segments
    }

    pub fn session(&self) -> &SessionSnapshot {
        &self.session
    }

    pub fn default_color(&self) -> Rgb888 {
        self.default_color
    }

    pub fn font(&self) -> LabelFont {
        self.font
    }

    pub fn scroll_position(&self) -> i32 {
        self.scroll_position
    }

    pub fn completed_scrolls(&self) -> u32 {
        self.completed_scrolls
    }

    /// The label text as currently displayed, without styling.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Replace the text of every segment bound to `kind`.
    ///
    /// This does not touch the bound session values; use the `set_*` methods or
    /// [`Self::on_session_changed`] to keep a later [`Self::reparse`] consistent.
    pub fn set_field(&mut self, kind: PlaceholderKind, text: &str) {
        let text = single_line(text.to_string());
        let flag = kind.flag();
        let mut updated = 0;
        for segment in self.segments.iter_mut() {
            if segment.flags.contains(flag) && segment.text != text {
                segment.text.clear();
                segment.text.push_str(&text);
                updated += 1;
            }
        }
        trace!("Set {:?} to '{}' in {} segment(s)", kind, text, updated);

        if updated > 0 {
            self.refresh_metrics();
        }
    }

    /// Recolor every segment that has no explicit color of its own.
    pub fn set_default_color(&mut self, color: Rgb888) {
        self.default_color = color;
        for segment in self.segments.iter_mut() {
            if !segment.flags.contains(SegmentFlags::COLORED) {
                segment.color = color;
            }
        }
    }

    /// Discard the segments and parse a new template against the bound values.
    pub fn reparse(&mut self, format: &str) {
        self.format = format.to_string();
        self.segments = parse(format, self.default_color, &self.session);
        self.refresh_metrics();
        debug!("Reparsed label format '{}'", self.format);
    }

    pub fn set_font(&mut self, font: LabelFont) {
        self.font = font;
        self.refresh_metrics();
    }

    pub fn set_artist(&mut self, artist: &str) {
        self.session.artist = artist.to_string();
        self.propagate(SessionField::Artist);
    }

    pub fn set_song_name(&mut self, song_name: &str) {
        self.session.song_name = song_name.to_string();
        self.propagate(SessionField::SongName);
    }

    pub fn set_album_name(&mut self, album_name: &str) {
        self.session.album_name = album_name.to_string();
        self.propagate(SessionField::AlbumName);
    }

    pub fn set_song_progress(&mut self, progress: Duration) {
        self.session.song_progress = progress;
        self.propagate(SessionField::SongProgress);
    }

    pub fn set_song_length(&mut self, length: Duration) {
        self.session.song_length = length;
        self.propagate(SessionField::SongLength);
    }

    /// Apply a change notification for `field`, reading the new value from `session`.
    pub fn on_session_changed(&mut self, field: SessionField, session: &dyn SessionDataProvider) {
        match field {
            SessionField::Artist => self.set_artist(session.artist()),
            SessionField::SongName => self.set_song_name(session.song_name()),
            SessionField::AlbumName => self.set_album_name(session.album_name()),
            SessionField::SongProgress => self.set_song_progress(session.song_progress()),
            SessionField::SongLength => self.set_song_length(session.song_length()),
        }
    }

    /// Total size of the label text: summed advances, tallest line height.
    pub fn measure(&self) -> Size {
        let mut width = 0;
        let mut height = 0;
        for segment in &self.segments {
            let face = self.face_for(segment);
            width += face.advance(&segment.text);
            height = height.max(face.line_height());
        }
        Size::new(width as u32, height as u32)
    }

    /// Draw the segments left to right with their top-left corner at `origin`.
    pub fn draw<D>(&self, target: &mut D, origin: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let mut x = origin.x;
        for segment in &self.segments {
            let face = self.face_for(segment);
            if !segment.text.is_empty() {
                let mut builder = MonoTextStyleBuilder::new()
                    .font(face.font)
                    .text_color(segment.color);
                if segment.flags.contains(SegmentFlags::UNDERLINE) {
                    builder = builder.underline();
                }
                let style = builder.build();

                Text::with_baseline(&segment.text, Point::new(x, origin.y), style, Baseline::Top)
                    .draw(target)?;

                if face.synthetic_bold {
                    // Draw text twice with a 1px offset to create a bold effect
                    Text::with_baseline(
                        &segment.text,
                        Point::new(x + 1, origin.y),
                        style,
                        Baseline::Top,
                    )
                    .draw(target)?;
                }
            }
            x += face.advance(&segment.text);
        }
        Ok(())
    }

    /// True when the text is wider than the label and scrolling is enabled.
    pub fn is_scrolling(&self) -> bool {
        self.ctx.scroll && self.text_width > self.ctx.label_width
    }

    fn face_for(&self, segment: &TextSegment) -> FontFace {
        select_face(
            self.font,
            segment.flags.contains(SegmentFlags::BOLD),
            segment.flags.contains(SegmentFlags::ITALIC),
        )
    }

    fn propagate(&mut self, field: SessionField) {
        for kind in field.placeholders() {
            let text = kind.value(&self.session);
            self.set_field(*kind, &text);
        }
    }

    fn refresh_metrics(&mut self) {
        self.text_width = self.measure().width as i32;

        // Text that fits again starts from its resting position
        if !self.is_scrolling() {
            self.scroll_position = 0;
            self.accumulated_time = 0.0;
        }
    }
}

impl Renderer for FormattedTextRenderer {
    fn update(&mut self, dt: f32) {
        if !self.is_scrolling() {
            return;
        }

        self.accumulated_time += dt;
        let pixels_to_move = (self.accumulated_time * self.ctx.scroll_speed) as i32;

        if pixels_to_move > 0 {
            self.scroll_position = self.scroll_position.saturating_sub(pixels_to_move);
            self.accumulated_time = 0.0;

            // Re-enter from the right once the text has fully left the label
            if self.scroll_position < -self.text_width {
                self.scroll_position = self.ctx.label_width;
                self.completed_scrolls += 1;
            }
        }
    }

    fn render(&self, canvas: &mut dyn LabelCanvas) {
        let mut eg_canvas = EmbeddedGraphicsCanvas::new(canvas);

        let size = self.measure();
        let x = if self.is_scrolling() {
            self.scroll_position
        } else {
            self.ctx.aligned_x(size.width as i32)
        };
        let y = self.ctx.centered_y(size.height as i32);

        // The canvas adapter cannot fail
        if let Err(never) = self.draw(&mut eg_canvas, Point::new(x, y)) {
            match never {}
        }
    }

    fn reset(&mut self) {
        self.scroll_position = 0;
        self.completed_scrolls = 0;
        self.accumulated_time = 0.0;
    }

    fn update_context(&mut self, ctx: RenderContext) {
        self.ctx = ctx;
        self.refresh_metrics();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::canvas::ImageCanvas;
    use crate::models::label::{FontFamily, TextAlignment};
    use crate::text::INVALID_FORMAT_TEXT;
    use embedded_graphics::pixelcolor::RgbColor;

    fn session() -> SessionSnapshot {
        SessionSnapshot {
            artist: "123".to_string(),
            song_name: "MM".to_string(),
            album_name: "Geogaddi".to_string(),
            song_progress: Duration::from_secs(30),
            song_length: Duration::from_secs(90),
        }
    }

    fn font13() -> LabelFont {
        LabelFont {
            family: FontFamily::Ascii,
            size: 13,
        }
    }

    fn renderer(format: &str) -> FormattedTextRenderer {
        FormattedTextRenderer::new(
            format,
            &session(),
            Rgb888::WHITE,
            font13(),
            RenderContext::new(200, 20, TextAlignment::Left),
        )
    }

    fn lit_pixels(canvas: &ImageCanvas, columns: std::ops::Range<u32>) -> Vec<[u8; 3]> {
        let (_, height) = canvas.size();
        let mut lit = Vec::new();
        for x in columns {
            for y in 0..height as u32 {
                if let Some(pixel) = canvas.pixel(x, y) {
                    if pixel != [0, 0, 0] {
                        lit.push(pixel);
                    }
                }
            }
        }
        lit
    }

    #[test]
    fn test_set_field_updates_only_matching_segments() {
        let mut r = renderer("{artist} - {song} / {*artist:#ff0000}");
        r.set_field(PlaceholderKind::Artist, "X");

        let texts: Vec<&str> = r.segments().iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["X", " - ", "MM", " / ", "X"]);
        assert_eq!(r.segments()[4].color, Rgb888::RED);
    }

    #[test]
    fn test_progress_change_updates_time_and_remaining() {
        let mut r = renderer("{time} of {length} ({remaining} left)");
        assert_eq!(r.plain_text(), "0:30 of 1:30 (1:00 left)");

        let mut later = session();
        later.song_progress = Duration::from_secs(85);
        r.on_session_changed(SessionField::SongProgress, &later);
        assert_eq!(r.plain_text(), "1:25 of 1:30 (0:05 left)");

        r.set_song_length(Duration::from_secs(3600));
        assert_eq!(r.plain_text(), "1:25 of 1:00:00 (58:35 left)");
    }

    #[test]
    fn test_default_color_skips_colored_segments() {
        let mut r = renderer("a{artist}{song:#00ff00}{nope}");
        r.set_default_color(Rgb888::BLUE);

        let colors: Vec<Rgb888> = r.segments().iter().map(|s| s.color).collect();
        assert_eq!(colors, vec![Rgb888::BLUE, Rgb888::BLUE, Rgb888::GREEN, Rgb888::BLUE]);
        assert_eq!(r.segments()[3].text, INVALID_FORMAT_TEXT);
        assert_eq!(r.default_color(), Rgb888::BLUE);
    }

    #[test]
    fn test_reparse_uses_current_values_and_color() {
        let mut r = renderer("{artist}");
        r.set_artist("Autechre");
        r.set_default_color(Rgb888::YELLOW);
        r.reparse("{album} by {artist}");

        assert_eq!(r.format(), "{album} by {artist}");
        assert_eq!(r.plain_text(), "Geogaddi by Autechre");
        assert!(r.segments().iter().all(|s| s.color == Rgb888::YELLOW));
    }

    #[test]
    fn test_measure_sums_segment_advances() {
        let r = renderer("{artist} x");
        // "123" + " x" at 6px per character
        assert_eq!(r.measure(), Size::new(30, 13));
        assert_eq!(r.measure(), r.measure());
    }

    #[test]
    fn test_measure_empty_and_synthetic_bold() {
        assert_eq!(renderer("").measure(), Size::zero());

        let mut r = renderer("{*artist}");
        r.set_font(LabelFont {
            family: FontFamily::Ascii,
            size: 10,
        });
        assert_eq!(r.measure(), Size::new(19, 10));
    }

    #[test]
    fn test_draw_uses_segment_colors_in_order() {
        let r = renderer("{song:#ff0000}{song:#0000ff}");
        let mut canvas = ImageCanvas::new(40, 13, [0, 0, 0]);
        {
            let mut target = EmbeddedGraphicsCanvas::new(&mut canvas);
            r.draw(&mut target, Point::zero()).unwrap();
        }

        let first = lit_pixels(&canvas, 0..12);
        let second = lit_pixels(&canvas, 12..24);
        assert!(!first.is_empty());
        assert!(first.iter().all(|p| *p == [255, 0, 0]));
        assert!(!second.is_empty());
        assert!(second.iter().all(|p| *p == [0, 0, 255]));
        assert!(lit_pixels(&canvas, 24..40).is_empty());
    }

    #[test]
    fn test_underline_adds_pixels() {
        let plain = renderer("{song}");
        let underlined = renderer("{_song}");
        let mut a = ImageCanvas::new(20, 13, [0, 0, 0]);
        let mut b = ImageCanvas::new(20, 13, [0, 0, 0]);
        plain.render(&mut a);
        underlined.render(&mut b);
        assert!(lit_pixels(&b, 0..20).len() > lit_pixels(&a, 0..20).len());
    }

    #[test]
    fn test_render_right_aligned() {
        let r = FormattedTextRenderer::new(
            "{song}",
            &session(),
            Rgb888::WHITE,
            font13(),
            RenderContext::new(100, 13, TextAlignment::Right),
        );
        let mut canvas = ImageCanvas::new(100, 13, [0, 0, 0]);
        r.render(&mut canvas);
        assert!(lit_pixels(&canvas, 0..88).is_empty());
        assert!(!lit_pixels(&canvas, 88..100).is_empty());
    }

    #[test]
    fn test_scrolls_only_when_text_overflows() {
        let ctx = RenderContext::new(20, 13, TextAlignment::Left).with_scrolling(10.0);
        let mut r = FormattedTextRenderer::new("{album}", &session(), Rgb888::WHITE, font13(), ctx);
        // "Geogaddi" is 48px wide
        assert!(r.is_scrolling());

        r.update(1.0);
        assert_eq!(r.scroll_position(), -10);

        for _ in 0..3 {
            r.update(1.0);
        }
        assert_eq!(r.scroll_position(), -40);
        assert_eq!(r.completed_scrolls(), 0);

        // Sub-pixel steps accumulate until a whole pixel is due
        r.update(0.04);
        assert_eq!(r.scroll_position(), -40);
        r.update(0.5);
        assert_eq!(r.scroll_position(), -45);
        r.update(0.5);
        assert_eq!(r.scroll_position(), 20);
        assert_eq!(r.completed_scrolls(), 1);

        r.set_album_name("A");
        assert!(!r.is_scrolling());
        assert_eq!(r.scroll_position(), 0);
        r.update(1.0);
        assert_eq!(r.scroll_position(), 0);
    }

    #[test]
    fn test_long_frame_wraps_without_overflow() {
        let ctx = RenderContext::new(20, 13, TextAlignment::Left).with_scrolling(30.0);
        let mut r = FormattedTextRenderer::new("{album}", &session(), Rgb888::WHITE, font13(), ctx);

        r.update(0.1);
        assert_eq!(r.scroll_position(), -3);

        r.update(1e12);
        assert_eq!(r.scroll_position(), 20);
        assert_eq!(r.completed_scrolls(), 1);
    }

    #[test]
    fn test_line_break_in_value_keeps_measure_and_draw_in_step() {
        let mut broken = session();
        broken.song_name = "A\nB".to_string();
        let mut r = FormattedTextRenderer::new(
            "{song}|",
            &broken,
            Rgb888::WHITE,
            font13(),
            RenderContext::new(40, 30, TextAlignment::Left),
        );
        assert_eq!(r.plain_text(), "A B|");
        assert_eq!(r.measure(), Size::new(24, 13));

        r.set_song_name("C\r\nD");
        assert_eq!(r.plain_text(), "C  D|");
        r.set_field(PlaceholderKind::Song, "A\nB");
        assert_eq!(r.plain_text(), "A B|");
        let size = r.measure();
        assert_eq!(size, Size::new(24, 13));

        let mut canvas = ImageCanvas::new(40, 30, [0, 0, 0]);
        {
            let mut target = EmbeddedGraphicsCanvas::new(&mut canvas);
            r.draw(&mut target, Point::zero()).unwrap();
        }
        assert!(!lit_pixels(&canvas, 0..size.width).is_empty());
        assert!(lit_pixels(&canvas, size.width..40).is_empty());
        for x in 0..40 {
            for y in size.height..30 {
                assert_eq!(canvas.pixel(x, y), Some([0, 0, 0]), "lit at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_reset_restores_scroll_state() {
        let ctx = RenderContext::new(10, 13, TextAlignment::Left).with_scrolling(5.0);
        let mut r = FormattedTextRenderer::new("{album}", &session(), Rgb888::WHITE, font13(), ctx);
        r.update(2.0);
        assert_eq!(r.scroll_position(), -10);
        r.reset();
        assert_eq!(r.scroll_position(), 0);

        r.update_context(RenderContext::new(200, 13, TextAlignment::Center));
        assert!(!r.is_scrolling());
    }
}
