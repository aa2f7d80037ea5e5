//! Downsized grayscale source for conversion.
//!
//! `BaseImage` copies what it needs out of a decoded image: the source is
//! fitted inside the requested width/height ceiling (shrinking only), reduced
//! with an area filter, then converted to 8-bit luminance.

use crate::{Result, TextartError};
use image::{imageops, DynamicImage, GrayImage};

#[derive(Debug, Clone)]
pub struct BaseImage {
    image: GrayImage,
}

impl BaseImage {
    /// Process `image` to fit within `max_width × max_height`.
    /// A `None` ceiling defaults to the source's own dimension.
    pub fn new(image: &DynamicImage, max_width: Option<i64>, max_height: Option<i64>) -> Result<Self> {
        let (src_w, src_h) = (image.width(), image.height());
        if src_w == 0 || src_h == 0 {
            return Err(TextartError::InvalidArgument(format!(
                "source image has no pixels ({src_w}x{src_h})"
            )));
        }

        let max_width = max_width.unwrap_or(src_w as i64);
        let max_height = max_height.unwrap_or(src_h as i64);
        if max_width < 0 {
            return Err(TextartError::InvalidArgument(format!(
                "expected max_width to be non-negative, got {max_width}"
            )));
        }
        if max_height < 0 {
            return Err(TextartError::InvalidArgument(format!(
                "expected max_height to be non-negative, got {max_height}"
            )));
        }

        let (width, height) = fit_dimensions(src_w, src_h, max_width as u64, max_height as u64);
        log::debug!("fitting {src_w}x{src_h} into {max_width}x{max_height} -> {width}x{height}");

        let rgba = image.to_rgba8();
        let resized = if (width, height) == (src_w, src_h) {
            rgba
        } else {
            imageops::thumbnail(&rgba, width, height)
        };
        let image = DynamicImage::ImageRgba8(resized).to_luma8();
        Ok(Self { image })
    }

    /// Brightness of pixel (x, y) in [0, 1].
    pub fn value_at(&self, x: u32, y: u32) -> Result<f32> {
        let (width, height) = self.image.dimensions();
        if x >= width || y >= height {
            return Err(TextartError::IndexOutOfRange { x, y, width, height });
        }
        Ok(self.image.get_pixel(x, y).0[0] as f32 / 255.0)
    }

    pub fn get_width(&self) -> u32 {
        self.image.width()
    }

    pub fn get_height(&self) -> u32 {
        self.image.height()
    }

    pub fn get_size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Row-major brightness values, top-left to bottom-right.
    pub fn pixels(&self) -> Pixels<'_> {
        Pixels { image: &self.image, index: 0 }
    }

    pub fn as_gray(&self) -> &GrayImage {
        &self.image
    }
}

impl<'a> IntoIterator for &'a BaseImage {
    type Item = f32;
    type IntoIter = Pixels<'a>;

    fn into_iter(self) -> Pixels<'a> {
        self.pixels()
    }
}

/// Iterator over a [`BaseImage`] in row-major order.
#[derive(Debug, Clone)]
pub struct Pixels<'a> {
    image: &'a GrayImage,
    index: u64,
}

impl Pixels<'_> {
    fn total(&self) -> u64 {
        self.image.width() as u64 * self.image.height() as u64
    }
}

impl Iterator for Pixels<'_> {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.index >= self.total() {
            return None;
        }
        let width = self.image.width() as u64;
        let (x, y) = ((self.index % width) as u32, (self.index / width) as u32);
        self.index += 1;
        Some(self.image.get_pixel(x, y).0[0] as f32 / 255.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total() - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pixels<'_> {}

/// Two-stage aspect-preserving fit: width first, then height.
/// Never scales up and never yields a zero dimension.
fn fit_dimensions(src_w: u32, src_h: u32, max_w: u64, max_h: u64) -> (u32, u32) {
    let (mut width, mut height) = (src_w as u64, src_h as u64);

    if width > max_w {
        height = (max_w as f64 * height as f64 / width as f64).round() as u64;
        width = max_w;
    }

    if height > max_h {
        width = (max_h as f64 * width as f64 / height as f64).round() as u64;
        height = max_h;
    }

    (width.max(1) as u32, height.max(1) as u32)
}
