//! WebAssembly bindings for color-fader.
//!
//! Exposes the parser, the gradient builder and the string formatters to
//! JavaScript.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { css_color_to_rgba, fade_colors } from 'color-fader';
//!
//! await init();
//!
//! const red = css_color_to_rgba('hsl(0, 100%, 50%)'); // { r: 255, g: 0, b: 0, a: 1 }
//!
//! // Gradient stops may be CSS strings or { r, g, b, a } objects.
//! const hex = fade_colors(['#ff0000', { r: 0, g: 0, b: 255, a: 1 }], 10, 'hex');
//! ```

use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::*;

use crate::color::{channel, RawColor, Rgba};
use crate::error::Error;
use crate::fade::{fade_colors_signed, FadeOptions, OutputFormat};
use crate::parse::parse_color;

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    // Nothing to set up; the named-color table initializes on first use.
}

fn to_js(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// RGBA color as seen from JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsRgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0.0-1.0).
    pub a: f64,
}

impl From<Rgba> for JsRgba {
    fn from(color: Rgba) -> Self {
        Self { r: color.r, g: color.g, b: color.b, a: color.a }
    }
}

impl From<JsRgba> for Rgba {
    fn from(color: JsRgba) -> Self {
        Self::new(color.r, color.g, color.b, color.a)
    }
}

/// Parse a CSS color string.
///
/// # Errors
///
/// Throws the parser's error message for unsupported or malformed input.
#[wasm_bindgen]
pub fn css_color_to_rgba(text: &str) -> Result<JsRgba, JsValue> {
    parse_color(text).map(JsRgba::from).map_err(to_js)
}

/// Build a gradient of `output_size` colors.
///
/// `colors` holds CSS strings and/or `{ r, g, b, a }` objects. With `format`
/// set to `"hex"` or `"rgba"` the result is an array of strings, otherwise an
/// array of color objects.
///
/// # Errors
///
/// Throws on an empty list, a non-positive size, an unknown format, or any
/// stop that fails to parse.
#[wasm_bindgen]
pub fn fade_colors(colors: Array, output_size: i32, format: Option<String>) -> Result<Array, JsValue> {
    let raw = colors.iter().map(|value| raw_color(&value)).collect::<Result<Vec<_>, _>>()?;
    let gradient = fade_colors_signed(&raw, i64::from(output_size)).map_err(to_js)?;

    let options = match format.as_deref() {
        None => return Ok(gradient.into_iter().map(|c| JsValue::from(JsRgba::from(c))).collect()),
        Some("hex") => FadeOptions::new(),
        Some("rgba") => FadeOptions::new().format(OutputFormat::Rgba),
        Some(other) => return Err(JsValue::from_str(&format!("Unknown output format: {other}"))),
    };

    Ok(gradient.iter().map(|c| JsValue::from_str(&options.render(c))).collect())
}

fn raw_color(value: &JsValue) -> Result<RawColor, JsValue> {
    if let Some(text) = value.as_string() {
        return Ok(RawColor::Named(text));
    }

    let field = |name: &str| -> Result<f64, JsValue> {
        Reflect::get(value, &JsValue::from_str(name))?
            .as_f64()
            .ok_or_else(|| JsValue::from_str(&format!("Color object is missing numeric '{name}'")))
    };
    let alpha = Reflect::get(value, &JsValue::from_str("a"))?.as_f64().unwrap_or(1.0);

    Ok(RawColor::Resolved(Rgba::new(
        channel(field("r")?),
        channel(field("g")?),
        channel(field("b")?),
        alpha.clamp(0.0, 1.0),
    )))
}

/// Format a color as `#rrggbb` or `#rrggbbaa`.
#[wasm_bindgen]
pub fn rgba_to_hex_string(color: &JsRgba) -> String {
    Rgba::from(*color).to_hex_string()
}

/// Format a color as `rgba(r, g, b, a)`.
#[wasm_bindgen]
pub fn rgba_to_rgba_string(color: &JsRgba) -> String {
    Rgba::from(*color).to_rgba_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_rgba_from_rgba() {
        let js = JsRgba::from(Rgba::new(18, 52, 86, 0.5));
        assert_eq!(js, JsRgba { r: 18, g: 52, b: 86, a: 0.5 });
    }

    #[test]
    fn test_rgba_from_js_rgba() {
        let color = Rgba::from(JsRgba { r: 255, g: 128, b: 0, a: 0.25 });
        assert_eq!(color, Rgba::new(255, 128, 0, 0.25));
        assert_eq!(Rgba::from(JsRgba::from(Rgba::BLUE)), Rgba::BLUE);
    }

    #[test]
    fn test_css_color_to_rgba() {
        let js = css_color_to_rgba("hsl(120, 100%, 50%)").unwrap();
        assert_eq!(js, JsRgba::from(Rgba::GREEN));
    }

    #[test]
    fn test_rgba_to_hex_string() {
        assert_eq!(rgba_to_hex_string(&JsRgba::from(Rgba::RED)), "#ff0000");
        let translucent = JsRgba { r: 0, g: 0, b: 255, a: 0.5 };
        assert_eq!(rgba_to_hex_string(&translucent), "#0000ff80");
    }

    #[test]
    fn test_rgba_to_rgba_string() {
        let translucent = JsRgba { r: 255, g: 0, b: 0, a: 0.5 };
        assert_eq!(rgba_to_rgba_string(&translucent), "rgba(255, 0, 0, 0.5)");
        assert_eq!(rgba_to_rgba_string(&JsRgba::from(Rgba::WHITE)), "rgba(255, 255, 255, 1)");
    }
}
