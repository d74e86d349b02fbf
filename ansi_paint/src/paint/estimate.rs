// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rough estimate of how wide a value would be if it were printed on one line. It
//! counts what `JSON.stringify` would print for each scalar (in UTF-16 code units, the
//! way a JS console measures strings) and ignores all styling. Separators are
//! approximated by one char per array element and two per object entry.

use crate::{PaintValue, json_number_text};

/// - Array: one per element, plus the size of each element.
/// - Object: two per entry, plus the quoted key and the size of each value.
/// - Scalar: the length of its JSON text (`undefined` and functions have none).
#[must_use]
pub fn estimate_size(value: &PaintValue) -> usize {
    match value {
        PaintValue::Array(items) => {
            items.len() + items.iter().map(estimate_size).sum::<usize>()
        }
        PaintValue::Object(map) => {
            2 * map.len()
                + map
                    .iter()
                    .map(|(key, value)| json_string_len(key) + estimate_size(value))
                    .sum::<usize>()
        }
        PaintValue::Null | PaintValue::Bool(true) => 4,
        PaintValue::Bool(false) => 5,
        PaintValue::Number(number) => json_number_text(*number).len(),
        PaintValue::String(it) => json_string_len(it),
        PaintValue::Undefined | PaintValue::Function(_) | PaintValue::Opaque { .. } => 0,
    }
}

/// Length of the quoted and escaped JSON string, in UTF-16 code units.
#[must_use]
pub fn json_string_len(text: &str) -> usize {
    serde_json::to_string(text).map_or(text.len() + 2, |it| it.encode_utf16().count())
}
