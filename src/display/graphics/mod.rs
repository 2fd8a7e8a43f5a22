pub mod embedded_graphics_support;
