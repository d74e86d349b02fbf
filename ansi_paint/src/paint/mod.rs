// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The pretty printer. It turns a [`PaintValue`] tree into a colorized string, deciding
//! for every array and object whether it fits on one line.
//!
//! ```text
//! PaintValue ─▶ layout::resolve_inline ─▶ render ─▶ String
//!                  │                          │
//!                  ├─ per-call force          └─ AnsiPainter per scalar
//!                  ├─ `__inline__` / `__multiline__` markers
//!                  └─ estimate::estimate_size vs print_width
//! ```

// Attach.
pub mod estimate;
pub mod js_number;
pub mod layout;
pub mod paint_value;
pub mod render;
pub mod render_options;

// Re-export.
pub use estimate::*;
pub use js_number::*;
pub use layout::*;
pub use paint_value::*;
pub use render::*;
pub use render_options::*;
