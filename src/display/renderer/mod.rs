mod context;
mod text;

pub use context::RenderContext;
pub use text::FormattedTextRenderer;

use crate::display::canvas::LabelCanvas;

/// Frame-driven interface a host uses to animate and paint a label
pub trait Renderer: Send {
    /// Update renderer state based on elapsed time
    fn update(&mut self, dt: f32);

    /// Render the label onto the provided canvas
    fn render(&self, canvas: &mut dyn LabelCanvas);

    /// Reset the animation state
    fn reset(&mut self);

    /// Update the renderer's context without re-parsing the template
    fn update_context(&mut self, ctx: RenderContext);
}
