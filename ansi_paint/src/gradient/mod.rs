// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod ansi_gradient;

// Re-export.
pub use ansi_gradient::*;
