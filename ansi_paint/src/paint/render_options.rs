// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ColorSupport;

pub const DEFAULT_PRINT_WIDTH: usize = 60;

/// Options for [`crate::paint()`].
///
/// ```
/// use r3bl_ansi_paint::{ColorSupport, RenderOptions};
///
/// let options = RenderOptions::default()
///     .with_inline(false)
///     .with_prefix("| ")
///     .with_color_support(ColorSupport::NoColor);
/// assert_eq!(options.print_width, 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// - `Some(true)`: force single line containers.
    /// - `Some(false)`: force multiline containers.
    /// - `None`: use the `__inline__` / `__multiline__` markers, then the size
    ///   heuristic.
    pub inline: Option<bool>,
    /// Prepended to every line after the first of a multiline container.
    pub prefix: String,
    /// Containers whose estimated size is above this are printed multiline (unless
    /// forced otherwise).
    pub print_width: usize,
    /// `None` detects color support from the environment at the start of each render.
    pub color_support: Option<ColorSupport>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            inline: None,
            prefix: String::new(),
            print_width: DEFAULT_PRINT_WIDTH,
            color_support: None,
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn with_inline(mut self, inline: impl Into<Option<bool>>) -> Self {
        self.inline = inline.into();
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_print_width(mut self, print_width: usize) -> Self {
        self.print_width = print_width;
        self
    }

    #[must_use]
    pub fn with_color_support(mut self, color_support: ColorSupport) -> Self {
        self.color_support = Some(color_support);
        self
    }
}

impl From<ColorSupport> for RenderOptions {
    fn from(color_support: ColorSupport) -> Self {
        Self::default().with_color_support(color_support)
    }
}
