// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color codec: hex strings to [`RgbValue`], and the fixed named palette.

// Attach.
pub mod hex_color_parser;
pub mod palette;
pub mod rgb_value;

// Re-export.
pub use hex_color_parser::*;
pub use rgb_value::*;
