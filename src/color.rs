//! Color types and color space conversions.
//!
//! Provides the canonical [`Rgba`] value, the [`Hsla`] model used by the
//! `hsl()` syntax, and [`RawColor`], the input accepted by the gradient
//! functions. Also hosts the string formatting inverse of the parser.

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parse::parse_color;

/// RGBA color with 8-bit color channels and a real-valued alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0.0-1.0, 1.0 = fully opaque).
    pub a: f64,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque green (`#00ff00`, the CSS `lime`).
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 1.0).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Linear interpolation between two colors.
    ///
    /// `t` is clamped to `[0, 1]`. Color channels are rounded to the nearest
    /// integer (ties away from zero); alpha is left unrounded and is exact at
    /// both ends of the interval.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |start: u8, end: u8| {
            let start = f64::from(start);
            channel(start + (f64::from(end) - start) * t)
        };

        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            // Weighted form, so alpha is exactly self.a at t = 0 and other.a at t = 1.
            self.a * (1.0 - t) + other.a * t,
        )
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when alpha is not 1.
    ///
    /// The alpha byte is `round(a * 255)` clamped to `[0, 255]`.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let mut hex = format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b);
        if (self.a - 1.0).abs() > f64::EPSILON {
            hex.push_str(&format!("{:02x}", channel(self.a * 255.0)));
        }
        hex
    }

    /// Format as `rgba(r, g, b, a)` with alpha printed as stored.
    #[must_use]
    pub fn to_rgba_string(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

/// Round to the nearest integer and clamp into a color channel.
pub(crate) fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// HSLA color with floating-point components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsla {
    /// Hue in degrees. Values outside 0-360 wrap.
    pub h: f64,
    /// Saturation (0.0-1.0).
    pub s: f64,
    /// Lightness (0.0-1.0).
    pub l: f64,
    /// Alpha (0.0-1.0).
    pub a: f64,
}

impl Hsla {
    /// Create a new HSLA color.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Create an opaque HSL color (alpha = 1.0).
    #[must_use]
    pub const fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self::new(h, s, l, 1.0)
    }

    /// Convert to RGBA.
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        let h = self.h / 360.0;
        let s = self.s;
        let l = self.l;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 {
                l * (1.0 + s)
            } else {
                l + s - l * s
            };
            let p = 2.0 * l - q;

            (
                hue_to_rgb(p, q, h + 1.0 / 3.0),
                hue_to_rgb(p, q, h),
                hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        Rgba::new(channel(r * 255.0), channel(g * 255.0), channel(b * 255.0), self.a)
    }
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl From<Hsla> for Rgba {
    fn from(hsla: Hsla) -> Self {
        hsla.to_rgba()
    }
}

/// A gradient stop as supplied by the caller: either a CSS color string
/// still to be parsed, or an already resolved [`Rgba`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum RawColor {
    /// CSS color string (hex, functional or named).
    Named(String),
    /// Color value that needs no parsing.
    Resolved(Rgba),
}

impl RawColor {
    /// Resolve to an [`Rgba`], parsing the string form if needed.
    ///
    /// # Errors
    ///
    /// Propagates any parse failure of a [`RawColor::Named`] string.
    pub fn resolve(&self) -> Result<Rgba> {
        match self {
            Self::Named(text) => parse_color(text),
            Self::Resolved(rgba) => Ok(*rgba),
        }
    }
}

impl From<&str> for RawColor {
    fn from(text: &str) -> Self {
        Self::Named(text.to_string())
    }
}

impl From<String> for RawColor {
    fn from(text: String) -> Self {
        Self::Named(text)
    }
}

impl From<Rgba> for RawColor {
    fn from(rgba: Rgba) -> Self {
        Self::Resolved(rgba)
    }
}
