//! Error types for color-fader operations.

use std::fmt;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Color string syntax families recognized by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syntax {
    /// `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`.
    Hex,
    /// `rgb(...)` / `rgba(...)`.
    Rgb,
    /// `hsl(...)` / `hsla(...)`.
    Hsl,
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hex => "hex",
            Self::Rgb => "RGB",
            Self::Hsl => "HSL",
        })
    }
}

/// Errors that can occur while parsing colors or building gradients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Gradient requested from an empty list of colors.
    #[error("Colors array cannot be empty")]
    EmptyInput,

    /// Gradient requested with a non-positive output size.
    #[error("Output size must be greater than 0, got {requested}")]
    InvalidSize {
        /// The size the caller asked for.
        requested: i64,
    },

    /// The string matches none of the known color syntaxes.
    #[error("Unsupported color format: {0}")]
    UnsupportedFormat(String),

    /// The string starts like a known syntax but its body is malformed.
    #[error("Invalid {syntax} color format: {input}")]
    InvalidFormat {
        /// Syntax family the input was classified as.
        syntax: Syntax,
        /// Offending input, as supplied by the caller.
        input: String,
    },
}

impl Error {
    pub(crate) fn invalid(syntax: Syntax, input: &str) -> Self {
        Self::InvalidFormat { syntax, input: input.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::EmptyInput.to_string(), "Colors array cannot be empty");
        let err = Error::InvalidSize { requested: -10 };
        assert!(err.to_string().contains("Output size must be greater than 0"));
        assert!(err.to_string().contains("-10"));
    }

    #[test]
    fn test_unsupported_format_carries_input() {
        let err = Error::UnsupportedFormat("cmyk(0, 0, 0, 0)".to_string());
        assert_eq!(err.to_string(), "Unsupported color format: cmyk(0, 0, 0, 0)");
    }

    #[test]
    fn test_invalid_format_names_syntax() {
        assert_eq!(Error::invalid(Syntax::Hex, "#ff").to_string(), "Invalid hex color format: #ff");
        assert_eq!(
            Error::invalid(Syntax::Rgb, "rgb(255, 0)").to_string(),
            "Invalid RGB color format: rgb(255, 0)"
        );
        assert_eq!(Error::invalid(Syntax::Hsl, "hsl(").to_string(), "Invalid HSL color format: hsl(");
    }
}
