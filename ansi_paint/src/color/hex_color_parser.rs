// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbValue`]
//! struct. The hex color string has the format `#RRGGBB` or `RRGGBB`, eg: `#FF0000` or
//! `ff0000` for red. Digits are case-insensitive.

use nom::{IResult, Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::{all_consuming, map_res, opt}};

use crate::RgbValue;

/// Parse function that generates an [`RgbValue`] struct from a valid hex color string.
/// The whole input must be consumed, so trailing garbage is an error.
///
/// # Errors
///
/// Returns a [`nom::Err`] if the input doesn't match `^#?[0-9a-fA-F]{6}$`.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbValue> {
    let (input, (_, red, green, blue)) = all_consuming((
        opt(tag("#")),
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
    ))
    .parse(input)?;
    Ok((input, RgbValue { red, green, blue }))
}

/// Converts a hex color string into an [`RgbValue`]. Any input that isn't exactly 6 hex
/// digits (w/ an optional leading `#`) yields [`None`], never a partial color.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Option<RgbValue> {
    parse_hex_color(hex).ok().map(|(_, color)| color)
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    /// This function is used by [`map_res`] and it returns a [Result], not [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// This function is used by [`take_while_m_n`] and as long as it returns `true`
    /// items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(
            take_while_m_n(2, 2, match_is_hex_digit),
            parse_str_to_hex_num,
        )
        .parse(input)
    }
}
