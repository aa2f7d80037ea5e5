//! Immutable character grid built from a [`BaseImage`] and a [`Palette`].

use crate::{BaseImage, Palette, Result, TextartError};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextImage {
    lines: Vec<String>,
    width: u32,
    height: u32,
}

impl TextImage {
    pub fn new(base_image: &BaseImage, palette: &Palette) -> Result<Self> {
        let (width, height) = base_image.get_size();
        let mut pixels = base_image.pixels();

        let mut lines = Vec::with_capacity(height as usize);
        for y in 0..height {
            let line = pixels
                .by_ref()
                .take(width as usize)
                .map(|v| palette.get(v))
                .collect::<Result<String>>()?;
            log::trace!("row {y}: {line}");
            lines.push(line);
        }

        Ok(Self { lines, width, height })
    }

    pub fn get_width(&self) -> u32 {
        self.width
    }

    pub fn get_height(&self) -> u32 {
        self.height
    }

    pub fn get_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Characters in row-major order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.lines.iter().flat_map(|line| line.chars())
    }

    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render with every character repeated `x` times and every line `y` times.
    /// `(1, 1)` gives the same text as `to_string()`.
    pub fn format(&self, (x_stretch, y_stretch): (u32, u32)) -> Result<String> {
        if x_stretch == 0 || y_stretch == 0 {
            return Err(TextartError::InvalidArgument(format!(
                "stretch factors must be at least 1, got ({x_stretch}, {y_stretch})"
            )));
        }

        let (x, y) = (x_stretch as usize, y_stretch as usize);
        let mut out = String::with_capacity(self.len() * x * y + self.lines.len() * y);
        for line in &self.lines {
            let stretched: String = line
                .chars()
                .flat_map(|c| std::iter::repeat(c).take(x))
                .collect();
            for _ in 0..y {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(&stretched);
            }
        }
        Ok(out)
    }
}

impl fmt::Display for TextImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}
