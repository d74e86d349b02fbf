// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;

pub mod sgr_sizing {
    /// Big enough to hold the longest SGR sequence, `ESC[38;2;255;255;255m`, without
    /// spilling to the heap.
    pub const DEFAULT_SGR_STORAGE_SIZE: usize = 24;
}

pub type InlineSgrString = SmallString<[u8; sgr_sizing::DEFAULT_SGR_STORAGE_SIZE]>;

/// Resets the terminal color and style.
pub const CLEAR: &str = "\x1b[0m";

/// The subset of SGR (Select Graphic Rendition) codes that this crate emits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    Invert,
    Hidden,
    Strikethrough,
    /// Normal intensity, turns off both bold and dim.
    ResetIntensity,
    ResetItalic,
    ResetUnderline,
    ResetInvert,
    ResetHidden,
    ResetStrikethrough,
    ForegroundRGB(u8, u8, u8),
}

pub mod sgr_code_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset                  => write!(f, "{CSI}0{SGR}"),
                SgrCode::Bold                   => write!(f, "{CSI}1{SGR}"),
                SgrCode::Dim                    => write!(f, "{CSI}2{SGR}"),
                SgrCode::Italic                 => write!(f, "{CSI}3{SGR}"),
                SgrCode::Underline              => write!(f, "{CSI}4{SGR}"),
                SgrCode::Invert                 => write!(f, "{CSI}7{SGR}"),
                SgrCode::Hidden                 => write!(f, "{CSI}8{SGR}"),
                SgrCode::Strikethrough          => write!(f, "{CSI}9{SGR}"),
                SgrCode::ResetIntensity         => write!(f, "{CSI}22{SGR}"),
                SgrCode::ResetItalic            => write!(f, "{CSI}23{SGR}"),
                SgrCode::ResetUnderline         => write!(f, "{CSI}24{SGR}"),
                SgrCode::ResetInvert            => write!(f, "{CSI}27{SGR}"),
                SgrCode::ResetHidden            => write!(f, "{CSI}28{SGR}"),
                SgrCode::ResetStrikethrough     => write!(f, "{CSI}29{SGR}"),
                SgrCode::ForegroundRGB(r, g, b) => write!(f, "{CSI}38;2;{r};{g};{b}{SGR}"),
            }
        }
    }

    impl SgrCode {
        /// This is different than the [Display] trait implementation, because it
        /// doesn't allocate a new [String], but instead allocates an inline buffer on
        /// the stack.
        #[must_use]
        pub fn to_small_str(self) -> InlineSgrString {
            use std::fmt::Write as _;
            let mut acc = InlineSgrString::new();
            // Writing into a SmallString can't fail.
            _ = write!(acc, "{self}");
            acc
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::SgrCode;

    #[test_case(SgrCode::Reset, "\x1b[0m" ; "reset")]
    #[test_case(SgrCode::Bold, "\x1b[1m" ; "bold")]
    #[test_case(SgrCode::Dim, "\x1b[2m" ; "dim")]
    #[test_case(SgrCode::Italic, "\x1b[3m" ; "italic")]
    #[test_case(SgrCode::Underline, "\x1b[4m" ; "underline")]
    #[test_case(SgrCode::Invert, "\x1b[7m" ; "invert")]
    #[test_case(SgrCode::Hidden, "\x1b[8m" ; "hidden")]
    #[test_case(SgrCode::Strikethrough, "\x1b[9m" ; "strikethrough")]
    #[test_case(SgrCode::ResetIntensity, "\x1b[22m" ; "reset intensity")]
    #[test_case(SgrCode::ResetStrikethrough, "\x1b[29m" ; "reset strikethrough")]
    fn test_style_codes(sgr_code: SgrCode, expected: &str) {
        assert_eq!(sgr_code.to_string(), expected);
    }

    #[test]
    fn fg_color_rgb() {
        let sgr_code = SgrCode::ForegroundRGB(175, 215, 135);
        assert_eq!(sgr_code.to_string(), "\x1b[38;2;175;215;135m");
    }

    #[test]
    fn small_str_matches_display() {
        let sgr_code = SgrCode::ForegroundRGB(255, 255, 255);
        let small = sgr_code.to_small_str();
        assert_eq!(small.as_str(), sgr_code.to_string());
        assert!(!small.spilled());
    }
}
