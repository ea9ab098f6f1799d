//! # color-fader
//!
//! CSS color parsing and evenly distributed multi-stop color gradients.
//!
//! Turns CSS color strings (hex, `rgb()`, `hsl()`, named keywords) or
//! ready-made [`Rgba`] values into gradients of any length, without a CSS
//! engine.
//!
//! ## Quick Start
//!
//! ```rust
//! use color_fader::prelude::*;
//!
//! let red = parse_color("rgb(255 0 0)")?;
//! assert_eq!(red, Rgba::RED);
//!
//! let stops = [RawColor::from("#ff0000"), RawColor::from("lime"), RawColor::from("blue")];
//! let gradient = fade_colors(&stops, 5)?;
//! assert_eq!(gradient[2], Rgba::GREEN);
//! assert_eq!(gradient[4].to_hex_string(), "#0000ff");
//! # Ok::<(), color_fader::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Rgba`], [`RawColor`] and
//!   [`FadeOptions`]
//! - `wasm`: JavaScript bindings via `wasm-bindgen`
//!
//! ## Logging
//!
//! Parsing and fading emit `tracing` events at `trace` and `debug` level.
//! The library never installs a subscriber.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in color code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::float_cmp)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types, HSL conversion and string formatting.
pub mod color;

/// Multi-stop gradient interpolation.
pub mod fade;

/// CSS named-color table.
pub mod named;

/// CSS color string parsing.
pub mod parse;

/// WebAssembly bindings for browser usage.
#[cfg(feature = "wasm")]
#[cfg_attr(docsrs, doc(cfg(feature = "wasm")))]
pub mod wasm;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for color-fader operations.
pub mod error;

pub use color::{Hsla, RawColor, Rgba};
pub use error::{Error, Result, Syntax};
pub use fade::{
    fade_colors, fade_colors_formatted, fade_colors_signed, ColorStops, FadeOptions, OutputFormat,
};
pub use parse::parse_color;

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use color_fader::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Hsla, RawColor, Rgba};
    pub use crate::error::{Error, Result};
    pub use crate::fade::{fade_colors, fade_colors_formatted, FadeOptions, OutputFormat};
    pub use crate::parse::parse_color;
}
