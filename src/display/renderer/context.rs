use crate::models::label::TextAlignment;

/// Label geometry and layout options shared with the renderer
#[derive(Clone, Debug, PartialEq)]
pub struct RenderContext {
    /// Label width in pixels
    pub label_width: i32,

    /// Label height in pixels
    pub label_height: i32,

    pub alignment: TextAlignment,

    /// Scroll text that is wider than the label
    pub scroll: bool,

    /// Scroll speed in pixels per second
    pub scroll_speed: f32,
}

impl RenderContext {
    pub fn new(label_width: i32, label_height: i32, alignment: TextAlignment) -> Self {
        Self {
            label_width,
            label_height,
            alignment,
            scroll: false,
            scroll_speed: 30.0,
        }
    }

    pub fn with_scrolling(mut self, scroll_speed: f32) -> Self {
        self.scroll = true;
        self.scroll_speed = scroll_speed;
        self
    }

    /// Left edge of text of the given width for the configured alignment
    pub fn aligned_x(&self, text_width: i32) -> i32 {
        match self.alignment {
            TextAlignment::Left => 0,
            TextAlignment::Center => (self.label_width - text_width) / 2,
            TextAlignment::Right => self.label_width - text_width,
        }
    }

    /// Top edge of vertically centered text
    pub fn centered_y(&self, text_height: i32) -> i32 {
        (self.label_height - text_height) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_offsets() {
        let mut ctx = RenderContext::new(100, 20, TextAlignment::Left);
        assert_eq!(ctx.aligned_x(40), 0);
        ctx.alignment = TextAlignment::Center;
        assert_eq!(ctx.aligned_x(40), 30);
        ctx.alignment = TextAlignment::Right;
        assert_eq!(ctx.aligned_x(40), 60);
        assert_eq!(ctx.centered_y(13), 3);
    }
}
