//! File-backed collaborators: palette documents and image files.

use crate::{PaletteFactory, Result, TextartError};
use image::{DynamicImage, ImageError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_PALETTES: &str = include_str!("../assets/defaultpalettes.json");

/// Flat JSON object of palette name -> pattern string.
#[derive(Deserialize)]
#[serde(transparent)]
struct PaletteDocument {
    palettes: BTreeMap<String, String>,
}

/// Parse a palette document. Entries are registered in name order.
pub fn parse_palettes(json: &str) -> Result<PaletteFactory> {
    let doc: PaletteDocument = serde_json::from_str(json)?;
    Ok(doc.palettes.into_iter().collect())
}

pub fn read_palette_file(path: impl AsRef<Path>) -> Result<PaletteFactory> {
    let path = path.as_ref();
    let factory = parse_palettes(&std::fs::read_to_string(path)?)?;
    log::debug!("loaded {} palettes from {}", factory.len(), path.display());
    Ok(factory)
}

/// Palettes bundled with the crate.
pub fn default_palettes() -> Result<PaletteFactory> {
    parse_palettes(DEFAULT_PALETTES)
}

/// Decode an image file into memory. The file is closed before returning.
pub fn read_image_file(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TextartError::FileNotFound(path.to_path_buf()));
    }

    match image::open(path) {
        Ok(image) => {
            log::debug!("decoded {} ({}x{})", path.display(), image.width(), image.height());
            Ok(image)
        }
        Err(ImageError::Unsupported(_) | ImageError::Decoding(_)) => {
            Err(TextartError::UnrecognizedImage(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palettes() {
        let factory = default_palettes().unwrap();
        for name in ["standard", "blocks", "minimal", "detailed"] {
            assert!(factory.get_palette(name).is_ok(), "missing {name}");
        }
        assert_eq!(factory.pattern("blocks"), Some(" ░▒▓█"));
    }

    #[test]
    fn test_parse_rejects_non_strings() {
        assert!(matches!(
            parse_palettes(r#"{"a": "xy", "b": 3}"#),
            Err(TextartError::Json(_))
        ));
        assert!(parse_palettes("[]").is_err());
    }

    #[test]
    fn test_parse_order() {
        let factory = parse_palettes(r#"{"zeta": "z", "alpha": "a"}"#).unwrap();
        assert_eq!(factory.names().collect::<Vec<_>>(), vec!["alpha", "zeta"]);
    }
}
