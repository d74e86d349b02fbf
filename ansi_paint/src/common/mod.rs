// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod decl_macros;
pub mod paint_error;

// Re-export.
pub use paint_error::*;
