//! CSS color string parsing.
//!
//! Accepts the hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), functional
//! (`rgb()`, `rgba()`, `hsl()`, `hsla()`) and named-keyword syntaxes,
//! case-insensitively and ignoring surrounding whitespace. Functional
//! arguments may be separated by commas, spaces or a slash, so both the
//! legacy `rgba(255, 0, 0, 0.5)` and the modern `rgb(255 0 0 / 50%)` forms
//! are understood.

use tracing::trace;

use crate::color::{channel, Hsla, Rgba};
use crate::error::{Error, Result, Syntax};
use crate::named;

/// Syntax family of a normalized color string, decided once before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorKind {
    Hex,
    Rgb,
    Hsl,
    /// Keyword found in the named table, carrying its hex form.
    Named(&'static str),
}

impl ColorKind {
    fn classify(normalized: &str) -> Option<Self> {
        if normalized.starts_with('#') {
            Some(Self::Hex)
        } else if normalized.starts_with("rgb") {
            Some(Self::Rgb)
        } else if normalized.starts_with("hsl") {
            Some(Self::Hsl)
        } else {
            named::lookup(normalized).map(Self::Named)
        }
    }

    fn syntax(self) -> Syntax {
        match self {
            Self::Hex | Self::Named(_) => Syntax::Hex,
            Self::Rgb => Syntax::Rgb,
            Self::Hsl => Syntax::Hsl,
        }
    }
}

/// Parse a CSS color string into an [`Rgba`].
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] when the input matches no known
/// syntax, and [`Error::InvalidFormat`] when it starts like a hex, `rgb` or
/// `hsl` color but its body is malformed (wrong digit count, non-hex digit,
/// missing parentheses, wrong number of components, non-numeric component).
///
/// # Example
///
/// ```
/// use color_fader::{parse_color, Rgba};
///
/// assert_eq!(parse_color("#f00").unwrap(), Rgba::RED);
/// assert_eq!(parse_color("rgb(0 0 255 / 50%)").unwrap(), Rgba::BLUE.with_alpha(0.5));
/// assert_eq!(parse_color("hsl(120, 100%, 50%)").unwrap(), Rgba::GREEN);
/// assert_eq!(parse_color("RebeccaPurple").unwrap(), Rgba::rgb(102, 51, 153));
/// ```
pub fn parse_color(input: &str) -> Result<Rgba> {
    let normalized = input.trim().to_lowercase();
    let kind = ColorKind::classify(&normalized)
        .ok_or_else(|| Error::UnsupportedFormat(input.to_string()))?;
    trace!(input, ?kind, "classified color string");

    let parsed = match kind {
        ColorKind::Hex => parse_hex(&normalized),
        ColorKind::Rgb => parse_rgb(&normalized),
        ColorKind::Hsl => parse_hsl(&normalized),
        ColorKind::Named(hex) => parse_hex(hex),
    };

    parsed.ok_or_else(|| Error::invalid(kind.syntax(), input))
}

fn parse_hex(text: &str) -> Option<Rgba> {
    let digits = text.strip_prefix('#')?;
    // from_str_radix tolerates a leading sign, so reject anything else first.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let bytes: Vec<u8> = match digits.len() {
        3 | 4 => digits
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8 * 0x11))
            .collect::<Option<_>>()?,
        6 | 8 => (0..digits.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).ok())
            .collect::<Option<_>>()?,
        _ => return None,
    };

    let alpha = bytes.get(3).map_or(1.0, |&a| f64::from(a) / 255.0);
    Some(Rgba::new(bytes[0], bytes[1], bytes[2], alpha))
}

fn parse_rgb(text: &str) -> Option<Rgba> {
    let args = function_args(text, &["rgb", "rgba"])?;

    let mut channels = [0u8; 3];
    for (slot, token) in channels.iter_mut().zip(&args) {
        *slot = channel(Component::parse(token)?.scaled(255.0));
    }

    Some(Rgba::new(channels[0], channels[1], channels[2], alpha(args.get(3).copied())?))
}

fn parse_hsl(text: &str) -> Option<Rgba> {
    let args = function_args(text, &["hsl", "hsla"])?;

    let hue = args[0].strip_suffix("deg").unwrap_or(args[0]);
    let hue = number(hue)?;
    let saturation = Component::parse(args[1])?.percent();
    let lightness = Component::parse(args[2])?.percent();

    Some(Hsla::new(hue, saturation, lightness, alpha(args.get(3).copied())?).to_rgba())
}

/// Alpha from an optional 4th component, defaulting to fully opaque.
fn alpha(token: Option<&str>) -> Option<f64> {
    match token {
        Some(token) => Some(Component::parse(token)?.scaled(1.0).clamp(0.0, 1.0)),
        None => Some(1.0),
    }
}

/// Split the argument list of `name(...)` into 3 or 4 components.
fn function_args<'a>(text: &'a str, names: &[&str]) -> Option<Vec<&'a str>> {
    let open = text.find('(')?;
    if !names.contains(&text[..open].trim_end()) {
        return None;
    }
    let close = open + text[open..].find(')')?;
    if !text[close + 1..].trim().is_empty() {
        return None;
    }

    let args: Vec<&str> = text[open + 1..close]
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect();

    matches!(args.len(), 3 | 4).then_some(args)
}

/// A functional-notation argument: a bare number or a percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Component {
    Number(f64),
    Percentage(f64),
}

impl Component {
    fn parse(token: &str) -> Option<Self> {
        match token.strip_suffix('%') {
            Some(value) => number(value).map(Self::Percentage),
            None => number(token).map(Self::Number),
        }
    }

    /// Bare numbers pass through; percentages map onto `0..=max`.
    fn scaled(self, max: f64) -> f64 {
        match self {
            Self::Number(value) => value,
            Self::Percentage(value) => value / 100.0 * max,
        }
    }

    /// Saturation and lightness read as percentages with or without `%`.
    fn percent(self) -> f64 {
        match self {
            Self::Number(value) | Self::Percentage(value) => value / 100.0,
        }
    }
}

fn number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn prop_hex_string_round_trips(
            r in any::<u8>(),
            g in any::<u8>(),
            b in any::<u8>(),
            alpha in any::<u8>()
        ) {
            let color = Rgba::new(r, g, b, f64::from(alpha) / 255.0);
            prop_assert_eq!(parse_color(&color.to_hex_string()).unwrap(), color);
        }

        #[test]
        fn prop_rgb_channels_always_in_range(
            r in -1000.0f64..1000.0,
            g in -1000.0f64..1000.0,
            b in -1000.0f64..1000.0,
            a in -5.0f64..5.0
        ) {
            let color = parse_color(&format!("rgba({r}, {g}, {b}, {a})")).unwrap();
            prop_assert!((0.0..=1.0).contains(&color.a));
        }

        #[test]
        fn prop_hsl_never_fails_for_numeric_input(
            h in -720.0f64..720.0,
            s in 0.0f64..100.0,
            l in 0.0f64..100.0
        ) {
            let css = format!("hsl({h}, {s}%, {l}%)");
            prop_assert!(parse_color(&css).is_ok());
        }

        #[test]
        fn prop_parser_never_panics(input in "\\PC{0,24}") {
            let _ = parse_color(&input);
        }
    }
}
