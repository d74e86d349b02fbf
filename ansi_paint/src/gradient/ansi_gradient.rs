// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

use crate::{CLEAR, PaintError, PaintResult, RgbValue, SgrCode};

pub mod gradient_sizing {
    use super::{RgbValue, SmallVec};

    /// Most gradients have 2 or 3 stops, this leaves room to spare before spilling to
    /// the heap.
    pub const MAX_INLINE_STOPS: usize = 8;
    pub type InlineVecStops = SmallVec<[RgbValue; MAX_INLINE_STOPS]>;
}

/// Multi-stop linear gradient that maps a position in `[0, 1]` to a truecolor
/// foreground start sequence.
///
/// All the stops are validated when the gradient is built, so sampling it can't fail.
/// Sampling never appends a reset sequence, callers are responsible for that.
///
/// # Example
///
/// ```
/// use r3bl_ansi_paint::{AnsiGradient, CLEAR};
///
/// let sunset = AnsiGradient::try_new(&["#00e1ff", "#e67e22", "#f1c40f"]).unwrap();
/// println!("{}blue{CLEAR}", sunset.at(0.0));
/// println!("{}orange{CLEAR}", sunset.at(0.5));
/// println!("{}", sunset.paint_text("Simple gradient text."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiGradient {
    stops: gradient_sizing::InlineVecStops,
}

impl AnsiGradient {
    /// # Errors
    ///
    /// - [`PaintError::InsufficientStops`] if fewer than 2 colors are given.
    /// - [`PaintError::InvalidColor`] for the first hex color that doesn't parse.
    pub fn try_new(hex_colors: &[&str]) -> PaintResult<Self> {
        if hex_colors.len() < 2 {
            return Err(PaintError::InsufficientStops {
                count: hex_colors.len(),
            });
        }

        let stops = hex_colors
            .iter()
            .map(|hex| RgbValue::try_from_hex_color(hex))
            .collect::<PaintResult<gradient_sizing::InlineVecStops>>()?;

        Ok(Self { stops })
    }

    /// # Errors
    ///
    /// [`PaintError::InsufficientStops`] if fewer than 2 colors are given.
    pub fn try_from_rgb(colors: &[RgbValue]) -> PaintResult<Self> {
        if colors.len() < 2 {
            return Err(PaintError::InsufficientStops {
                count: colors.len(),
            });
        }
        Ok(Self {
            stops: colors.iter().copied().collect(),
        })
    }

    #[must_use]
    pub fn stops(&self) -> &[RgbValue] { &self.stops }

    /// The interpolated color at `position`, which is clamped to `[0, 1]`. `NaN` is
    /// treated as `0`.
    #[must_use]
    pub fn color_at(&self, position: f64) -> RgbValue {
        let position = if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, 1.0)
        };

        let last_index = self.stops.len() - 1;

        #[allow(clippy::cast_precision_loss)]
        let segment = position * last_index as f64;
        let index_f = segment.floor();
        let fraction = segment - index_f;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = index_f as usize;

        if index >= last_index {
            return self.stops[last_index];
        }

        let start = self.stops[index];
        let end = self.stops[index + 1];

        RgbValue {
            red: lerp_channel(start.red, end.red, fraction),
            green: lerp_channel(start.green, end.green, fraction),
            blue: lerp_channel(start.blue, end.blue, fraction),
        }
    }

    /// The foreground start sequence for the color at `position`. No reset is
    /// appended.
    #[must_use]
    pub fn at(&self, position: f64) -> String { self.sgr_at(position).to_string() }

    #[must_use]
    pub fn sgr_at(&self, position: f64) -> SgrCode { self.color_at(position).fg_sgr() }

    /// Paint each code point of `text` with its own sample of the gradient, from the
    /// first stop at the first char to the last stop at the last char. A single reset
    /// sequence is appended at the very end.
    #[must_use]
    pub fn paint_text(&self, text: &str) -> String {
        let count = text.chars().count();
        if count == 0 {
            return String::new();
        }

        let mut acc = String::with_capacity(text.len() * 20 + CLEAR.len());
        for (index, ch) in text.chars().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let position = if count == 1 {
                0.0
            } else {
                index as f64 / (count - 1) as f64
            };
            acc.push_str(&self.sgr_at(position).to_small_str());
            acc.push(ch);
        }
        acc.push_str(CLEAR);
        acc
    }
}

/// Linear interpolation between two channel values, rounded to the nearest integer
/// (halves round up).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(start: u8, end: u8, fraction: f64) -> u8 {
    let start = f64::from(start);
    let end = f64::from(end);
    (start + (end - start) * fraction + 0.5)
        .floor()
        .clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn red_to_blue() -> AnsiGradient {
        AnsiGradient::try_new(&["#ff0000", "#0000ff"]).unwrap()
    }

    #[test]
    fn test_endpoints() {
        let it = red_to_blue();
        assert_eq!(it.at(0.0), "\x1b[38;2;255;0;0m");
        assert_eq!(it.at(1.0), "\x1b[38;2;0;0;255m");
    }

    #[test_case(-1.0, "\x1b[38;2;255;0;0m" ; "below zero")]
    #[test_case(2.5, "\x1b[38;2;0;0;255m" ; "above one")]
    #[test_case(f64::NAN, "\x1b[38;2;255;0;0m" ; "nan")]
    #[test_case(f64::INFINITY, "\x1b[38;2;0;0;255m" ; "infinity")]
    fn test_position_is_clamped(position: f64, expected: &str) {
        assert_eq!(red_to_blue().at(position), expected);
    }

    #[test]
    fn test_midpoint_rounds_to_nearest() {
        // 255 * 0.5 = 127.5 rounds up.
        assert_eq!(red_to_blue().at(0.5), "\x1b[38;2;128;0;128m");
    }

    #[test]
    fn test_three_stops() {
        let it = AnsiGradient::try_new(&["#000000", "#ffffff", "#000000"]).unwrap();
        assert_eq!(it.color_at(0.5), RgbValue::from_u8(255, 255, 255));
        assert_eq!(it.color_at(0.25), RgbValue::from_u8(128, 128, 128));
        assert_eq!(it.color_at(1.0), RgbValue::from_u8(0, 0, 0));
    }

    #[test]
    fn test_insufficient_stops() {
        assert_eq!(
            AnsiGradient::try_new(&[]),
            Err(PaintError::InsufficientStops { count: 0 })
        );
        assert_eq!(
            AnsiGradient::try_new(&["#ffffff"]),
            Err(PaintError::InsufficientStops { count: 1 })
        );
        assert_eq!(
            AnsiGradient::try_from_rgb(&[RgbValue::from_u8(0, 0, 0)]),
            Err(PaintError::InsufficientStops { count: 1 })
        );
    }

    #[test]
    fn test_invalid_stop_fails_at_construction() {
        assert_eq!(
            AnsiGradient::try_new(&["#ffffff", "#nope!!"]),
            Err(PaintError::InvalidColor {
                hex: "#nope!!".to_string()
            })
        );
    }

    #[test]
    fn test_paint_text() {
        let it = red_to_blue();
        assert_eq!(
            it.paint_text("abc"),
            "\x1b[38;2;255;0;0ma\x1b[38;2;128;0;128mb\x1b[38;2;0;0;255mc\x1b[0m"
        );
    }

    #[test]
    fn test_paint_text_counts_code_points() {
        let it = red_to_blue();
        let painted = it.paint_text("■é");
        assert_eq!(
            painted,
            "\x1b[38;2;255;0;0m■\x1b[38;2;0;0;255mé\x1b[0m"
        );
    }

    #[test]
    fn test_paint_text_edge_cases() {
        let it = red_to_blue();
        assert_eq!(it.paint_text(""), "");
        assert_eq!(it.paint_text("x"), "\x1b[38;2;255;0;0mx\x1b[0m");
    }
}
