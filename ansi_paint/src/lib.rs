// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_ansi_paint
//!
//! Paint text for terminals that understand ANSI truecolor (24-bit) escape sequences.
//!
//! 1. Colors & styles: [`ansi_hex()`], [`ansi_rgb()`], [`ansi_style()`], and the
//!    shorthands in [`mini`] that use the fixed [`palette`].
//! 2. Gradients: [`AnsiGradient`] samples a multi stop RGB gradient, and can paint each
//!    character of a string w/ its own color.
//! 3. Pretty printer: [`paint()`] turns a [`PaintValue`] tree (think JSON plus
//!    `undefined` and functions) into colorized text, printing each array and object on a
//!    single line when it fits into [`RenderOptions::print_width`] and on many lines when
//!    it doesn't.
//! 4. Logging: [`log()`] and [`logger()`] print any number of values w/ a prefix and a
//!    delimiter to stdout, stderr, or a function you provide.
//!
//! Color support is detected from the environment (`NO_COLOR`, `TERM`, `COLORTERM`,
//! `CLICOLOR`, CI, and whether the output is a terminal). You can override it per call
//! by passing a [`ColorSupport`].
//!
//! # Example
//!
//! ```
//! use r3bl_ansi_paint::{AnsiGradient, ColorSupport, LogOptions, log, mini, paint_array,
//!                       paint_object};
//!
//! println!("{}", mini::red("red text"));
//!
//! let gradient = AnsiGradient::try_new(&["#ff0000", "#0000ff"]).unwrap();
//! println!("{}", gradient.paint_text("Hello, world!"));
//!
//! let value = paint_object! { "a" => 1, "b" => paint_array![1, 2] };
//! log(&["value:".into(), value], &LogOptions::from(ColorSupport::Truecolor));
//! ```
//!
//! # Overriding the layout
//!
//! A container can carry the reserved `"__inline__"` or `"__multiline__"` element (or
//! object key) to force its own layout. See [`layout`] for the details.

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod ansi;
pub mod color;
pub mod common;
pub mod gradient;
pub mod log_sink;
pub mod paint;

// Re-export.
pub use ansi::*;
pub use color::*;
pub use common::*;
pub use gradient::*;
pub use log_sink::*;
pub use paint::*;
