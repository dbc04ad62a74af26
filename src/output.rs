use crate::material::Color;

/// Anything a renderer can write finished pixels into.
pub trait PixelSink {
    fn set_pixel(&mut self, x: u32, y: u32, color: Color);
}

impl PixelSink for image::RgbImage {
    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.put_pixel(x, y, color.into());
    }
}

/// A plain in-memory framebuffer, row-major from the top-left pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::black(); width as usize * height as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }
}

impl PixelSink for Framebuffer {
    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let i = (y * self.width + x) as usize;
        self.pixels[i] = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framebuffer_starts_black() {
        let mut fb = Framebuffer::new(3, 2);
        assert!(fb.pixels.iter().all(|c| *c == Color::black()));

        fb.set_pixel(2, 1, Color::white());
        assert_eq!(fb.get(2, 1), Color::white());
        assert_eq!(fb.pixels[5], Color::white());
    }

    #[test]
    fn test_rgb_image_sink() {
        let mut img = image::RgbImage::new(2, 2);
        img.set_pixel(1, 0, Color::new(1, 2, 3));
        assert_eq!(*img.get_pixel(1, 0), image::Rgb([1, 2, 3]));
    }
}
