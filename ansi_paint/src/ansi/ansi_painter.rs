// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Write as _};

use crate::{ColorSupport, DetectColorSupport, EnvColorSupport, RgbValue, SgrCode,
            StyleCode, hex_to_rgb, palette};

/// What an [`AnsiPainter`] puts around the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brush {
    /// 24-bit foreground color, closed by a full reset.
    Foreground(RgbValue),
    /// Named style, closed by the style's own reset code.
    Style(StyleCode),
    /// Paints nothing. Used when a hex color fails to parse.
    Plain,
}

impl Brush {
    #[must_use]
    pub fn start_sgr(self) -> Option<SgrCode> {
        match self {
            Brush::Foreground(color) => Some(color.fg_sgr()),
            Brush::Style(style) => Some(style.start_sgr()),
            Brush::Plain => None,
        }
    }

    #[must_use]
    pub fn reset_sgr(self) -> Option<SgrCode> {
        match self {
            Brush::Foreground(_) => Some(SgrCode::Reset),
            Brush::Style(style) => Some(style.reset_sgr()),
            Brush::Plain => None,
        }
    }
}

/// Wraps text in the start and reset sequences of its [`Brush`].
///
/// - When the text is empty, only the start sequence is returned. This is handy for
///   switching the color of everything that follows.
/// - When the detector says [`ColorSupport::NoColor`], the text is returned unchanged.
///
/// # Example
///
/// ```
/// use r3bl_ansi_paint::{ansi_hex, ColorSupport};
///
/// let red = ansi_hex("#ff0000").with_detector(ColorSupport::Truecolor);
/// assert_eq!(red.paint("hi"), "\x1b[38;2;255;0;0mhi\x1b[0m");
/// assert_eq!(red.paint(""), "\x1b[38;2;255;0;0m");
///
/// let plain = red.with_detector(ColorSupport::NoColor);
/// assert_eq!(plain.paint("hi"), "hi");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsiPainter<D = EnvColorSupport> {
    pub brush: Brush,
    pub detector: D,
}

impl AnsiPainter {
    #[must_use]
    pub fn new(brush: Brush) -> Self {
        Self {
            brush,
            detector: EnvColorSupport::default(),
        }
    }
}

impl<D: DetectColorSupport> AnsiPainter<D> {
    /// Swap out how color support is detected, keeping the brush.
    #[must_use]
    pub fn with_detector<T: DetectColorSupport>(self, detector: T) -> AnsiPainter<T> {
        AnsiPainter {
            brush: self.brush,
            detector,
        }
    }

    #[must_use]
    pub fn paint(&self, text: impl AsRef<str>) -> String {
        let text = text.as_ref();

        let (Some(start), Some(reset)) = (self.brush.start_sgr(), self.brush.reset_sgr())
        else {
            return text.to_string();
        };

        match self.detector.detect() {
            ColorSupport::NoColor => text.to_string(),
            ColorSupport::Truecolor => {
                if text.is_empty() {
                    return start.to_string();
                }
                let mut acc = String::with_capacity(text.len() + 32);
                acc.push_str(&start.to_small_str());
                acc.push_str(text);
                acc.push_str(&reset.to_small_str());
                acc
            }
        }
    }

    /// Concatenate all the args (w/out a delimiter) and paint the result.
    #[must_use]
    pub fn paint_args(&self, args: &[&dyn Display]) -> String {
        let mut acc = String::new();
        for arg in args {
            // Writing into a String can't fail.
            _ = write!(acc, "{arg}");
        }
        self.paint(acc)
    }
}

/// Creates a truecolor (24-bit RGB) painter from a hex color. An invalid hex color
/// yields a painter that leaves text unchanged.
#[must_use]
pub fn ansi_hex(hex_color: &str) -> AnsiPainter {
    match hex_to_rgb(hex_color) {
        Some(color) => ansi_rgb(color),
        None => AnsiPainter::new(Brush::Plain),
    }
}

#[must_use]
pub fn ansi_rgb(color: impl Into<RgbValue>) -> AnsiPainter {
    AnsiPainter::new(Brush::Foreground(color.into()))
}

#[must_use]
pub fn ansi_style(style: StyleCode) -> AnsiPainter { AnsiPainter::new(Brush::Style(style)) }

/// Shorthands that paint w/ the fixed [`palette`] and detect color support from the
/// environment on every call.
pub mod mini {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    macro_rules! fg_shorthand {
        ($($(#[$meta:meta])* $name:ident => $color:expr),* $(,)?) => {
            $(
                $(#[$meta])*
                #[must_use]
                pub fn $name(text: impl AsRef<str>) -> String { ansi_rgb($color).paint(text) }
            )*
        };
    }

    macro_rules! style_shorthand {
        ($($(#[$meta:meta])* $name:ident => $style:expr),* $(,)?) => {
            $(
                $(#[$meta])*
                #[must_use]
                pub fn $name(text: impl AsRef<str>) -> String { ansi_style($style).paint(text) }
            )*
        };
    }

    fg_shorthand! {
        red => palette::RED,
        green => palette::GREEN,
        blue => palette::BLUE,
        yellow => palette::YELLOW,
        magenta => palette::MAGENTA,
        cyan => palette::CYAN,
        orange => palette::ORANGE,
        purple => palette::PURPLE,
        gray => palette::GRAY,
    }

    style_shorthand! {
        dim => StyleCode::Dim,
        bold => StyleCode::Bold,
        italic => StyleCode::Italic,
        underline => StyleCode::Underline,
        inverse => StyleCode::Inverse,
        strikethrough => StyleCode::Strikethrough,
        /// With empty text this is the reset code that clears all styles.
        clear => StyleCode::Reset,
    }
}
