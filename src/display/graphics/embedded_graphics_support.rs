use crate::display::canvas::LabelCanvas;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::{Rgb888, RgbColor},
    Pixel,
};

/// Lets embedded-graphics primitives draw onto any [`LabelCanvas`].
pub struct EmbeddedGraphicsCanvas<'a> {
    canvas: &'a mut dyn LabelCanvas,
}

impl<'a> EmbeddedGraphicsCanvas<'a> {
    pub fn new(canvas: &'a mut dyn LabelCanvas) -> Self {
        Self { canvas }
    }
}

impl<'a> DrawTarget for EmbeddedGraphicsCanvas<'a> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels.into_iter() {
            // Negative coordinates happen while scrolling off the left edge
            if point.x >= 0 && point.y >= 0 {
                self.canvas
                    .set_pixel(point.x as usize, point.y as usize, color.r(), color.g(), color.b());
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.canvas.fill(color.r(), color.g(), color.b());
        Ok(())
    }
}

impl<'a> OriginDimensions for EmbeddedGraphicsCanvas<'a> {
    fn size(&self) -> Size {
        let (width, height) = self.canvas.size();
        Size::new(width.max(0) as u32, height.max(0) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::canvas::ImageCanvas;
    use embedded_graphics_core::geometry::Point;

    #[test]
    fn test_negative_pixels_are_skipped() {
        let mut image = ImageCanvas::new(2, 2, [0, 0, 0]);
        {
            let mut target = EmbeddedGraphicsCanvas::new(&mut image);
            let pixels = [
                Pixel(Point::new(-1, 0), Rgb888::WHITE),
                Pixel(Point::new(1, 1), Rgb888::RED),
            ];
            target.draw_iter(pixels).unwrap();
            assert_eq!(target.size(), Size::new(2, 2));
        }
        assert_eq!(image.pixel(0, 0), Some([0, 0, 0]));
        assert_eq!(image.pixel(1, 1), Some([255, 0, 0]));
    }

    #[test]
    fn test_clear_fills_canvas() {
        let mut image = ImageCanvas::new(2, 1, [0, 0, 0]);
        EmbeddedGraphicsCanvas::new(&mut image)
            .clear(Rgb888::BLUE)
            .unwrap();
        assert_eq!(image.pixel(1, 0), Some([0, 0, 255]));
    }
}
