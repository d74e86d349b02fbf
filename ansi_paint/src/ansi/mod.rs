// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI formatter: SGR codes, named styles, color support detection, and the painters
//! that wrap text in those sequences.

// Attach.
pub mod ansi_painter;
pub mod detect_color_support;
pub mod sgr_code;
pub mod style_code;

// Re-export.
pub use ansi_painter::*;
pub use detect_color_support::*;
pub use sgr_code::*;
pub use style_code::*;
