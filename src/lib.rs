//! Image to text art converter using brightness palettes.

pub mod base_image;
pub mod factory;
pub mod loader;
pub mod palette;
pub mod text_image;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use base_image::{BaseImage, Pixels};
pub use factory::PaletteFactory;
pub use palette::Palette;
pub use text_image::TextImage;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextartError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Pixel ({x}, {y}) is out of range for a {width}x{height} image")]
    IndexOutOfRange { x: u32, y: u32, width: u32, height: u32 },
    #[error("Palette not found: {0}")]
    KeyNotFound(String),
    #[error("A file was not selected or does not exist: {0}")]
    FileNotFound(PathBuf),
    #[error("The file could not be recognized as an image: {0}")]
    UnrecognizedImage(PathBuf),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Palette file error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TextartError {
    /// Message suitable for showing to an end user.
    pub fn user_message(&self) -> String {
        format!("[ERROR] {self}")
    }
}

pub type Result<T> = std::result::Result<T, TextartError>;

/// Conversion pipeline: fit and grayscale, map through a palette, format.
#[derive(Debug, Clone)]
pub struct Converter {
    max_width: Option<i64>,
    max_height: Option<i64>,
    stretch: (u32, u32),
    reversed: bool,
}

impl Default for Converter {
    fn default() -> Self {
        Self { max_width: None, max_height: None, stretch: (1, 1), reversed: false }
    }
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_width(mut self, max_width: Option<i64>) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn with_max_height(mut self, max_height: Option<i64>) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn with_stretch(mut self, x: u32, y: u32) -> Self {
        self.stretch = (x, y);
        self
    }

    /// Convert with a reversed copy of the palette. The caller's palette is untouched.
    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    pub fn text_image(&self, image: &image::DynamicImage, palette: &Palette) -> Result<TextImage> {
        let base = BaseImage::new(image, self.max_width, self.max_height)?;
        if self.reversed {
            let mut palette = palette.clone();
            palette.reverse();
            TextImage::new(&base, &palette)
        } else {
            TextImage::new(&base, palette)
        }
    }

    pub fn convert(&self, image: &image::DynamicImage, palette: &Palette) -> Result<String> {
        let text = self.text_image(image, palette)?;
        log::debug!(
            "converted to {}x{} characters with palette {:?}, stretch {:?}",
            text.get_width(),
            text.get_height(),
            palette.to_string(),
            self.stretch
        );
        text.format(self.stretch)
    }
}
