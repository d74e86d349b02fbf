// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumCount, EnumIter, EnumString};

use crate::SgrCode;

/// Named text styles. Each maps to a fixed SGR code and a matching reset code.
///
/// The name round trips through [`std::str::FromStr`] and [`std::fmt::Display`], eg:
/// `"bold".parse::<StyleCode>()`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
)]
#[strum(serialize_all = "lowercase")]
pub enum StyleCode {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    Inverse,
    Hidden,
    Strikethrough,
}

impl StyleCode {
    /// The numeric SGR code.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            StyleCode::Reset => 0,
            StyleCode::Bold => 1,
            StyleCode::Dim => 2,
            StyleCode::Italic => 3,
            StyleCode::Underline => 4,
            StyleCode::Inverse => 7,
            StyleCode::Hidden => 8,
            StyleCode::Strikethrough => 9,
        }
    }

    #[must_use]
    pub fn start_sgr(self) -> SgrCode {
        match self {
            StyleCode::Reset => SgrCode::Reset,
            StyleCode::Bold => SgrCode::Bold,
            StyleCode::Dim => SgrCode::Dim,
            StyleCode::Italic => SgrCode::Italic,
            StyleCode::Underline => SgrCode::Underline,
            StyleCode::Inverse => SgrCode::Invert,
            StyleCode::Hidden => SgrCode::Hidden,
            StyleCode::Strikethrough => SgrCode::Strikethrough,
        }
    }

    /// Bold and dim share "normal intensity". Everything else is `code + 20`, except
    /// reset which is its own reset.
    #[must_use]
    pub fn reset_sgr(self) -> SgrCode {
        match self {
            StyleCode::Reset => SgrCode::Reset,
            StyleCode::Bold | StyleCode::Dim => SgrCode::ResetIntensity,
            StyleCode::Italic => SgrCode::ResetItalic,
            StyleCode::Underline => SgrCode::ResetUnderline,
            StyleCode::Inverse => SgrCode::ResetInvert,
            StyleCode::Hidden => SgrCode::ResetHidden,
            StyleCode::Strikethrough => SgrCode::ResetStrikethrough,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use strum::{EnumCount, IntoEnumIterator};

    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!(StyleCode::from_str("bold"), Ok(StyleCode::Bold));
        assert_eq!(
            StyleCode::from_str("strikethrough"),
            Ok(StyleCode::Strikethrough)
        );
        assert!(StyleCode::from_str("blink").is_err());
        assert_eq!(StyleCode::Inverse.to_string(), "inverse");
    }

    #[test]
    fn test_start_sgr_matches_code() {
        assert_eq!(StyleCode::COUNT, 8);
        for style in StyleCode::iter() {
            assert_eq!(
                style.start_sgr().to_string(),
                format!("\x1b[{}m", style.code())
            );
        }
    }

    #[test]
    fn test_reset_sgr() {
        for style in StyleCode::iter() {
            let expected = match style.code() {
                0 => "\x1b[0m".to_string(),
                1 | 2 => "\x1b[22m".to_string(),
                code => format!("\x1b[2{code}m"),
            };
            assert_eq!(style.reset_sgr().to_string(), expected);
        }
    }
}
