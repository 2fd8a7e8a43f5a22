use image::{ImageFormat, Rgb, RgbImage};
use log::info;
use std::fmt::Debug;
use std::io::Cursor;
use std::path::Path;

/// Pixel surface a label is drawn onto.
pub trait LabelCanvas: Debug {
    /// Out-of-bounds coordinates are ignored.
    fn set_pixel(&mut self, x: usize, y: usize, r: u8, g: u8, b: u8);
    fn fill(&mut self, r: u8, g: u8, b: u8);
    fn size(&self) -> (i32, i32); // (width, height)
}

/// Canvas backed by an in-memory RGB image.
#[derive(Debug, Clone)]
pub struct ImageCanvas {
    image: RgbImage,
}

impl ImageCanvas {
    pub fn new(width: u32, height: u32, [r, g, b]: [u8; 3]) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Rgb([r, g, b])),
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x < self.image.width() && y < self.image.height() {
            Some(self.image.get_pixel(x, y).0)
        } else {
            None
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn to_png_bytes(&self) -> Result<Vec<u8>, String> {
        let mut cursor = Cursor::new(Vec::new());
        self.image
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| format!("Failed to encode PNG: {}", e))?;
        Ok(cursor.into_inner())
    }

    pub fn save_png(&self, path: &Path) -> Result<(), String> {
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| format!("Failed to write PNG to {:?}: {}", path, e))?;
        info!(
            "Label saved to: {:?} ({}x{})",
            path,
            self.image.width(),
            self.image.height()
        );
        Ok(())
    }
}

impl LabelCanvas for ImageCanvas {
    fn set_pixel(&mut self, x: usize, y: usize, r: u8, g: u8, b: u8) {
        if x < self.image.width() as usize && y < self.image.height() as usize {
            self.image.put_pixel(x as u32, y as u32, Rgb([r, g, b]));
        }
    }

    fn fill(&mut self, r: u8, g: u8, b: u8) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgb([r, g, b]);
        }
    }

    fn size(&self) -> (i32, i32) {
        (self.image.width() as i32, self.image.height() as i32)
    }
}
