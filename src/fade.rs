//! Multi-stop gradient interpolation.
//!
//! A list of stops is spread over an arbitrary number of output points.
//! Each output index is mapped proportionally onto the segments between
//! consecutive stops, instead of handing every segment a fixed integer share
//! of points, so the first and last outputs are exactly the first and last
//! stops and uneven splits are distributed evenly along the gradient.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{RawColor, Rgba};
use crate::error::{Error, Result};

/// Resolved gradient stops, ready to be sampled at any output size.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStops {
    stops: Vec<Rgba>,
}

impl ColorStops {
    /// Resolve every stop, parsing string inputs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `colors` is empty, or the first parse
    /// error encountered among the string stops.
    pub fn new(colors: &[RawColor]) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::EmptyInput);
        }

        let stops = colors.iter().map(RawColor::resolve).collect::<Result<Vec<_>>>()?;
        Ok(Self { stops })
    }

    /// The resolved stops, in input order.
    #[must_use]
    pub fn stops(&self) -> &[Rgba] {
        &self.stops
    }

    /// Produce `output_size` evenly distributed colors along the stops.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if `output_size` is zero.
    pub fn fade(&self, output_size: usize) -> Result<Vec<Rgba>> {
        if output_size == 0 {
            debug!(requested = 0, "rejecting gradient with no output points");
            return Err(Error::InvalidSize { requested: 0 });
        }

        let first = self.stops[0];
        if output_size == 1 {
            return Ok(vec![first]);
        }
        if self.stops.len() == 1 {
            return Ok(vec![first; output_size]);
        }

        let segments = self.stops.len() - 1;
        let steps_per_segment = (output_size - 1) as f64 / segments as f64;
        debug!(stops = self.stops.len(), output_size, steps_per_segment, "fading colors");

        // index * segments / (size - 1) is index / steps_per_segment, but lands
        // exactly on every stop that falls on an output index.
        let last_index = (output_size - 1) as f64;
        Ok((0..output_size)
            .map(|index| self.point(index as f64 * segments as f64 / last_index))
            .collect())
    }

    /// Color at a position measured in segments from the first stop.
    fn point(&self, position: f64) -> Rgba {
        let last_segment = self.stops.len() - 2;
        // The final point lands in the last segment, never past it.
        let segment = (position.floor() as usize).min(last_segment);
        let t = (position - segment as f64).min(1.0);

        self.stops[segment].lerp(self.stops[segment + 1], t)
    }
}

/// Build a gradient of `output_size` colors through `colors`.
///
/// String stops are parsed with [`parse_color`](crate::parse_color); stops
/// given as [`Rgba`] are used as-is. The first and last output colors always
/// equal the first and last stops.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for an empty list, [`Error::InvalidSize`]
/// for a zero size, or the parse error of the first malformed stop.
///
/// # Example
///
/// ```
/// use color_fader::{fade_colors, RawColor, Rgba};
///
/// let stops = [RawColor::from("#ff0000"), RawColor::from("#0f0"), RawColor::from(Rgba::BLUE)];
/// let gradient = fade_colors(&stops, 9).unwrap();
///
/// assert_eq!(gradient.len(), 9);
/// assert_eq!(gradient[0], Rgba::RED);
/// assert_eq!(gradient[4], Rgba::GREEN);
/// assert_eq!(gradient[8], Rgba::BLUE);
/// ```
pub fn fade_colors(colors: &[RawColor], output_size: usize) -> Result<Vec<Rgba>> {
    ColorStops::new(colors)?.fade(output_size)
}

/// [`fade_colors`] for callers holding a signed size.
///
/// # Errors
///
/// As [`fade_colors`]; any `output_size <= 0` yields [`Error::InvalidSize`]
/// carrying the requested value. An empty color list is reported first.
pub fn fade_colors_signed(colors: &[RawColor], output_size: i64) -> Result<Vec<Rgba>> {
    let stops = ColorStops::new(colors)?;
    match usize::try_from(output_size) {
        Ok(size) if size > 0 => stops.fade(size),
        _ => {
            debug!(requested = output_size, "rejecting gradient with non-positive size");
            Err(Error::InvalidSize { requested: output_size })
        }
    }
}

/// String representation produced by [`fade_colors_formatted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum OutputFormat {
    /// `#rrggbb`, with an alpha byte appended for translucent colors.
    #[default]
    Hex,
    /// `rgba(r, g, b, a)`.
    Rgba,
}

/// Options for string-valued gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct FadeOptions {
    /// Output string format.
    pub format: OutputFormat,
    /// Keep the leading `#` on hex strings.
    pub hash_prefix: bool,
}

impl Default for FadeOptions {
    fn default() -> Self {
        Self { format: OutputFormat::Hex, hash_prefix: true }
    }
}

impl FadeOptions {
    /// Create default options (`#`-prefixed hex).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format.
    #[must_use]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set whether hex strings keep their `#`.
    #[must_use]
    pub fn hash_prefix(mut self, hash_prefix: bool) -> Self {
        self.hash_prefix = hash_prefix;
        self
    }

    /// Format one color according to these options.
    #[must_use]
    pub fn render(&self, color: &Rgba) -> String {
        match self.format {
            OutputFormat::Rgba => color.to_rgba_string(),
            OutputFormat::Hex => {
                let hex = color.to_hex_string();
                match hex.strip_prefix('#') {
                    Some(bare) if !self.hash_prefix => bare.to_string(),
                    _ => hex,
                }
            }
        }
    }
}

/// [`fade_colors`], with every output color rendered as a string.
///
/// # Errors
///
/// As [`fade_colors`].
///
/// # Example
///
/// ```
/// use color_fader::{fade_colors_formatted, FadeOptions, RawColor};
///
/// let stops = [RawColor::from("red"), RawColor::from("blue")];
/// let hex = fade_colors_formatted(&stops, 3, &FadeOptions::new()).unwrap();
/// assert_eq!(hex, ["#ff0000", "#800080", "#0000ff"]);
/// ```
pub fn fade_colors_formatted(
    colors: &[RawColor],
    output_size: usize,
    options: &FadeOptions,
) -> Result<Vec<String>> {
    let gradient = fade_colors(colors, output_size)?;
    Ok(gradient.iter().map(|color| options.render(color)).collect())
}
