// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Log sink: prints any number of [`crate::PaintValue`]s on one prefixed line (or a few),
//! to stdout, stderr, or a function of your choosing.
//!
//! ```text
//! log(args, options)
//!   ├─ no args          ─▶ prefix
//!   ├─ one String       ─▶ prefix + line, for each line
//!   └─ anything else    ─▶ prefix + paint(arg_1) + delimiter + paint(arg_2) ...
//!                            └─ on error: tracing::error! + plain Debug dump
//! ```

// Attach.
pub mod log_api;
pub mod log_options;
pub mod log_output;

// Re-export.
pub use log_api::*;
pub use log_options::*;
pub use log_output::*;
