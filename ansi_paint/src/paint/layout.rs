// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decides whether a container is printed on one line or many.
//!
//! # Override markers
//!
//! The reserved object key / array element [`INLINE_MARKER`] forces its container onto
//! one line, and [`MULTILINE_MARKER`] forces it onto many. This is a compatibility quirk
//! where the marker travels inside normal data, and it is limited on purpose:
//!
//! - Only the container that directly holds the marker is affected. Nested containers
//!   decide for themselves.
//! - The marker is never printed.
//! - For an object key, a boolean value flips the meaning, eg: `__inline__: false`
//!   forces multiline. Any other value keeps the default meaning.
//! - When both markers are present, the last one wins.

use crate::{PaintValue, estimate_size};

pub const INLINE_MARKER: &str = "__inline__";
pub const MULTILINE_MARKER: &str = "__multiline__";

/// Is this array element a marker (and hence skipped when printing)?
#[must_use]
pub fn is_marker_element(item: &PaintValue) -> bool {
    matches!(item, PaintValue::String(it) if is_marker_key(it))
}

/// Is this object key a marker (and hence skipped when printing)?
#[must_use]
pub fn is_marker_key(key: &str) -> bool { key == INLINE_MARKER || key == MULTILINE_MARKER }

/// Returns `Some(true)` for inline, `Some(false)` for multiline, or `None` if the
/// container carries no marker at its own level.
#[must_use]
pub fn find_override_marker(value: &PaintValue) -> Option<bool> {
    match value {
        PaintValue::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                PaintValue::String(it) if it == INLINE_MARKER => Some(true),
                PaintValue::String(it) if it == MULTILINE_MARKER => Some(false),
                _ => None,
            })
            .last(),
        PaintValue::Object(map) => map
            .iter()
            .filter_map(|(key, value)| {
                let flag = match value {
                    PaintValue::Bool(it) => *it,
                    _ => true,
                };
                match key.as_str() {
                    INLINE_MARKER => Some(flag),
                    MULTILINE_MARKER => Some(!flag),
                    _ => None,
                }
            })
            .last(),
        _ => None,
    }
}

/// Where a container sits in the tree being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nesting {
    /// The value passed to [`crate::paint()`].
    Root,
    Nested,
}

/// Precedence, highest first:
///
/// | [`Nesting::Root`]      | [`Nesting::Nested`]    |
/// | ---------------------- | ---------------------- |
/// | per-call `force`       | marker                 |
/// | marker                 | per-call `force`       |
/// | size <= `print_width`  | size <= `print_width`  |
#[must_use]
pub fn resolve_inline(
    value: &PaintValue,
    force: Option<bool>,
    nesting: Nesting,
    print_width: usize,
) -> bool {
    let marker = find_override_marker(value);

    let decided = match nesting {
        Nesting::Root => force.or(marker),
        Nesting::Nested => marker.or(force),
    };

    if let Some(inline) = decided {
        tracing::trace!(?nesting, ?force, ?marker, inline, "layout decided explicitly");
        return inline;
    }

    let size = estimate_size(value);
    let inline = size <= print_width;
    tracing::trace!(?nesting, size, print_width, inline, "layout decided by size");
    inline
}
