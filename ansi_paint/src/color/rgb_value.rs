// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation.

use crate::{PaintError, PaintResult, SgrCode, hex_to_rgb};

/// Represents a color in RGB (24-bit truecolor) format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<RgbValue> for (u8, u8, u8) {
    fn from(value: RgbValue) -> Self { (value.red, value.green, value.blue) }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// # Errors
    ///
    /// Returns [`PaintError::InvalidColor`] if the input string is not a valid hex
    /// color.
    pub fn try_from_hex_color(input: &str) -> PaintResult<RgbValue> {
        hex_to_rgb(input).ok_or_else(|| PaintError::InvalidColor {
            hex: input.to_string(),
        })
    }

    /// The SGR sequence that starts painting the foreground in this color.
    #[must_use]
    pub fn fg_sgr(self) -> SgrCode {
        SgrCode::ForegroundRGB(self.red, self.green, self.blue)
    }
}
