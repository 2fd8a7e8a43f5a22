//! Drawing labels onto pixel surfaces

pub mod canvas;
pub mod fonts;
pub mod graphics;
pub mod renderer;

pub use canvas::{ImageCanvas, LabelCanvas};
pub use renderer::{FormattedTextRenderer, RenderContext, Renderer};
