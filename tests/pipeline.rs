//! End-to-end tests for the image -> text conversion pipeline.

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use textart::{loader, BaseImage, Converter, Palette, PaletteFactory, TextImage, TextartError};

/// Horizontal gradient, dark on the left.
fn gradient(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, _| {
        Luma([(x * 255 / (width - 1)) as u8])
    }))
}

#[test]
fn test_gradient_spans_palette() {
    let palette: Palette = " .:#".parse().unwrap();
    let base = BaseImage::new(&gradient(64, 8), Some(16), None).unwrap();
    assert_eq!(base.get_size(), (16, 2));

    let text = TextImage::new(&base, &palette).unwrap();
    for line in text.lines() {
        assert!(line.starts_with(' '));
        assert!(line.ends_with('#'));
    }
}

#[test]
fn test_text_matches_base_dimensions() {
    let palette: Palette = "ab".parse().unwrap();
    for (w, h, mw, mh) in [(200, 100, 50, 50), (1000, 1, 10, 10), (3, 9, 9, 3), (1, 1, 0, 0)] {
        let img = DynamicImage::ImageLuma8(GrayImage::new(w, h));
        let base = BaseImage::new(&img, Some(mw), Some(mh)).unwrap();
        let text = TextImage::new(&base, &palette).unwrap();
        assert_eq!(text.get_size(), base.get_size());
        assert!(base.get_width() >= 1 && base.get_height() >= 1);
        assert_eq!(text.len(), (base.get_width() * base.get_height()) as usize);
    }
}

#[test]
fn test_converter_with_stretch_and_reverse() {
    let img = DynamicImage::ImageRgb8(RgbImage::from_fn(2, 1, |x, _| {
        if x == 0 { Rgb([0, 0, 0]) } else { Rgb([255, 255, 255]) }
    }));
    let palette: Palette = "ab".parse().unwrap();

    let plain = Converter::new().convert(&img, &palette).unwrap();
    assert_eq!(plain, "ab");

    let stretched = Converter::new().with_stretch(2, 2).convert(&img, &palette).unwrap();
    assert_eq!(stretched, "aabb\naabb");

    let reversed = Converter::new().with_reversed(true).convert(&img, &palette).unwrap();
    assert_eq!(reversed, "ba");
    assert!(!palette.is_reversed());
}

#[test]
fn test_converter_propagates_errors() {
    let img = gradient(4, 4);
    let palette: Palette = "ab".parse().unwrap();
    assert!(matches!(
        Converter::new().with_max_width(Some(-3)).convert(&img, &palette),
        Err(TextartError::InvalidArgument(_))
    ));
    assert!(matches!(
        Converter::new().with_stretch(0, 1).convert(&img, &palette),
        Err(TextartError::InvalidArgument(_))
    ));
}

#[test]
fn test_factory_palettes_are_fresh() {
    let factory: PaletteFactory = loader::default_palettes().unwrap();
    let mut first = factory.get_palette("standard").unwrap();
    first.reverse();
    let second = factory.get_palette("standard").unwrap();
    assert!(!second.is_reversed());
    assert_ne!(first.to_string(), second.to_string());
}

#[test]
fn test_chars_row_major() {
    let img = DynamicImage::ImageLuma8(GrayImage::from_fn(2, 2, |x, y| {
        Luma([if (x + y) % 2 == 0 { 0 } else { 255 }])
    }));
    let base = BaseImage::new(&img, None, None).unwrap();
    let text = TextImage::new(&base, &".#".parse().unwrap()).unwrap();
    assert_eq!(text.chars().collect::<String>(), ".##.");
    assert_eq!(text.to_string(), ".#\n#.");
}
