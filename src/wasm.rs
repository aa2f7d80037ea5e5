//! WebAssembly bindings for textart

use crate::{loader, Converter, PaletteFactory, TextartError};
use image::DynamicImage;
use wasm_bindgen::prelude::*;

fn to_js(err: TextartError) -> JsValue {
    JsValue::from_str(&err.user_message())
}

#[wasm_bindgen]
pub struct WasmConverter {
    factory: PaletteFactory,
    max_width: Option<i64>,
    max_height: Option<i64>,
    stretch: (u32, u32),
    reversed: bool,
}

#[wasm_bindgen]
impl WasmConverter {
    /// Create a converter from a JSON palette document.
    /// An empty string selects the built-in palettes.
    #[wasm_bindgen(constructor)]
    pub fn new(palettes_json: &str) -> Result<WasmConverter, JsValue> {
        let factory = if palettes_json.trim().is_empty() {
            loader::default_palettes()
        } else {
            loader::parse_palettes(palettes_json)
        }
        .map_err(to_js)?;

        Ok(WasmConverter {
            factory,
            max_width: None,
            max_height: None,
            stretch: (1, 1),
            reversed: false,
        })
    }

    #[wasm_bindgen]
    pub fn set_max_width(&mut self, max_width: Option<i32>) {
        self.max_width = max_width.map(i64::from);
    }

    #[wasm_bindgen]
    pub fn set_max_height(&mut self, max_height: Option<i32>) {
        self.max_height = max_height.map(i64::from);
    }

    #[wasm_bindgen]
    pub fn set_stretch(&mut self, x: u32, y: u32) {
        self.stretch = (x, y);
    }

    #[wasm_bindgen]
    pub fn set_reversed(&mut self, enabled: bool) {
        self.reversed = enabled;
    }

    #[wasm_bindgen]
    pub fn register_palette(&mut self, name: &str, pattern: &str) {
        self.factory.register_pattern(name, pattern);
    }

    #[wasm_bindgen]
    pub fn palette_names(&self) -> js_sys::Array {
        self.factory.names().map(JsValue::from_str).collect()
    }

    /// Convert RGBA pixel data and return `{ text, width, height }`
    #[wasm_bindgen]
    pub fn convert(
        &self,
        image_data: &[u8],
        width: u32,
        height: u32,
        palette: &str,
    ) -> Result<js_sys::Object, JsValue> {
        let img = image::RgbaImage::from_raw(width, height, image_data.to_vec())
            .ok_or_else(|| JsValue::from_str("Invalid image dimensions"))?;
        let dynamic_img = DynamicImage::ImageRgba8(img);

        let palette = self.factory.get_palette(palette).map_err(to_js)?;
        let converter = Converter::new()
            .with_max_width(self.max_width)
            .with_max_height(self.max_height)
            .with_reversed(self.reversed);

        let text_image = converter.text_image(&dynamic_img, &palette).map_err(to_js)?;
        let text = text_image.format(self.stretch).map_err(to_js)?;

        web_sys::console::log_1(
            &format!(
                "textart: {}x{} -> {}x{} characters",
                width,
                height,
                text_image.get_width(),
                text_image.get_height()
            )
            .into(),
        );

        let result = js_sys::Object::new();
        js_sys::Reflect::set(&result, &"text".into(), &text.into())?;
        js_sys::Reflect::set(&result, &"width".into(), &text_image.get_width().into())?;
        js_sys::Reflect::set(&result, &"height".into(), &text_image.get_height().into())?;

        Ok(result)
    }
}
