// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use miette::Diagnostic;

/// Type alias to make it easy to work with [`core::result::Result`] and [`PaintError`].
pub type PaintResult<T> = core::result::Result<T, PaintError>;

/// Everything that can go wrong in this crate. The color codec and the ANSI painters
/// are total functions, so only gradient construction and rendering can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum PaintError {
    /// A hex color string did not match `#?RRGGBB`.
    #[error("Invalid hex color: {hex:?}")]
    #[diagnostic(
        code(r3bl_ansi_paint::color::invalid_hex),
        help("Use 6 hex digits with an optional leading `#`, eg: `#ff5347`")
    )]
    InvalidColor { hex: String },

    /// A gradient needs at least two color stops.
    #[error("Gradient requires at least 2 colors, got {count}")]
    #[diagnostic(code(r3bl_ansi_paint::gradient::insufficient_stops))]
    InsufficientStops { count: usize },

    /// The renderer was handed a value it can't classify.
    #[error("Can't paint a value of kind {type_name:?}")]
    #[diagnostic(
        code(r3bl_ansi_paint::paint::unsupported_kind),
        help("Convert the value into one of the supported `PaintValue` variants")
    )]
    UnsupportedKind { type_name: String },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_display() {
        let it = PaintError::InvalidColor {
            hex: "#ff00".to_string(),
        };
        assert_eq!(it.to_string(), r##"Invalid hex color: "#ff00""##);

        let it = PaintError::InsufficientStops { count: 1 };
        assert_eq!(it.to_string(), "Gradient requires at least 2 colors, got 1");
    }

    #[test]
    fn test_diagnostic_code() {
        let it = PaintError::UnsupportedKind {
            type_name: "symbol".to_string(),
        };
        let code = it.code().map(|it| it.to_string());
        assert_eq!(
            code.as_deref(),
            Some("r3bl_ansi_paint::paint::unsupported_kind")
        );
    }
}
