// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorSupport, DetectColorSupport, EnvColorSupport, Nesting, PaintError,
            PaintObject, PaintResult, PaintValue, RenderOptions, is_marker_element,
            is_marker_key, ok, resolve_inline};

/// Shown instead of a function whose source is too long to print.
pub const FUNCTION_PLACEHOLDER: &str = "[Function]";

const INDENT: &str = "  ";

/// Render `value` into a colorized string.
///
/// - Strings at the top level are printed raw, strings inside containers are quoted.
/// - Each array and object is printed on one line or many, see [`crate::layout`].
///
/// # Errors
///
/// [`PaintError::UnsupportedKind`] if the tree contains a [`PaintValue::Opaque`].
///
/// # Example
///
/// ```
/// use r3bl_ansi_paint::{paint, paint_array, paint_object, ColorSupport, RenderOptions};
///
/// let value = paint_object! { "a" => 1, "b" => paint_array![1, 2] };
/// let options = RenderOptions::from(ColorSupport::NoColor);
///
/// let it = paint(&value, &options.clone().with_inline(true)).unwrap();
/// assert_eq!(it, "{ a: 1, b: [1, 2] }");
///
/// let it = paint(&value, &options.with_inline(false)).unwrap();
/// assert_eq!(it, "{\n  a: 1,\n  b: [\n    1,\n    2\n  ]\n}");
/// ```
pub fn paint(value: &PaintValue, options: &RenderOptions) -> PaintResult<String> {
    ok!(paint_lines(value, options)?.join("\n"))
}

/// Same as [`paint()`], but each line of a multiline container comes back on its own.
/// Only the layout breaks lines, a `\n` inside a string stays in its line.
///
/// # Errors
///
/// See [`paint()`].
///
/// # Example
///
/// ```
/// use r3bl_ansi_paint::{paint_array, paint_lines, ColorSupport, RenderOptions};
///
/// let options = RenderOptions::from(ColorSupport::NoColor);
///
/// let it = paint_lines(&paint_array!["a\nb"], &options).unwrap();
/// assert_eq!(it, vec!["['a\nb']"]);
///
/// let it = paint_lines(&paint_array!["a\nb"], &options.with_inline(false)).unwrap();
/// assert_eq!(it, vec!["[", "  'a\nb'", "]"]);
/// ```
pub fn paint_lines(value: &PaintValue, options: &RenderOptions) -> PaintResult<Vec<String>> {
    let color_support = options
        .color_support
        .unwrap_or_else(|| EnvColorSupport::default().detect());

    let renderer = Renderer {
        options,
        styles: ValueStyles { color_support },
    };

    let mut acc = PaintedLines::default();
    renderer.render_value(value, Frame::ROOT, &mut acc)?;
    ok!(acc.into_lines())
}

/// Same as [`paint()`].
///
/// # Errors
///
/// See [`paint()`].
pub fn render(value: &PaintValue, options: &RenderOptions) -> PaintResult<String> {
    paint(value, options)
}

/// Render output, split where the multiline layout starts a new line.
#[derive(Debug, Default)]
struct PaintedLines {
    done: Vec<String>,
    current: String,
}

impl PaintedLines {
    fn push_str(&mut self, text: &str) { self.current.push_str(text); }

    fn push(&mut self, ch: char) { self.current.push(ch); }

    fn break_line(&mut self) { self.done.push(std::mem::take(&mut self.current)); }

    fn into_lines(mut self) -> Vec<String> {
        self.done.push(self.current);
        self.done
    }
}

/// The per-level state that changes as the renderer descends into containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    /// Entries of a multiline container at this level are indented this many times.
    indent: usize,
    wrap_string: bool,
    nesting: Nesting,
}

impl Frame {
    const ROOT: Frame = Frame {
        indent: 1,
        wrap_string: false,
        nesting: Nesting::Root,
    };

    fn child(self) -> Frame {
        Frame {
            indent: self.indent + 1,
            wrap_string: true,
            nesting: Nesting::Nested,
        }
    }
}

#[derive(Debug)]
struct Renderer<'a> {
    options: &'a RenderOptions,
    styles: ValueStyles,
}

impl Renderer<'_> {
    fn render_value(
        &self,
        value: &PaintValue,
        frame: Frame,
        acc: &mut PaintedLines,
    ) -> PaintResult<()> {
        let styles = &self.styles;
        match value {
            PaintValue::Null => acc.push_str(&styles.absent("null")),
            PaintValue::Undefined => acc.push_str(&styles.absent("undefined")),
            PaintValue::Bool(it) => acc.push_str(&styles.boolean(*it)),
            PaintValue::Number(it) => acc.push_str(&styles.number(*it)),
            PaintValue::String(it) => {
                if frame.wrap_string {
                    acc.push_str(&styles.quoted_string(it));
                } else {
                    acc.push_str(it);
                }
            }
            PaintValue::Function(source) => {
                let source = source.replace('\n', "");
                if source.chars().count() < self.options.print_width {
                    acc.push_str(&styles.function(&source));
                } else {
                    acc.push_str(&styles.function(FUNCTION_PLACEHOLDER));
                }
            }
            PaintValue::Array(items) => self.render_array(value, items, frame, acc)?,
            PaintValue::Object(map) => self.render_object(value, map, frame, acc)?,
            PaintValue::Opaque { type_name } => {
                return Err(PaintError::UnsupportedKind {
                    type_name: type_name.clone(),
                });
            }
        }
        ok!()
    }

    fn is_inline(&self, value: &PaintValue, frame: Frame) -> bool {
        resolve_inline(
            value,
            self.options.inline,
            frame.nesting,
            self.options.print_width,
        )
    }

    /// Starts a new line of a multiline container: prefix, then indent.
    fn push_line_start(&self, indent: usize, acc: &mut PaintedLines) {
        acc.break_line();
        acc.push_str(&self.options.prefix);
        acc.push_str(&INDENT.repeat(indent));
    }

    fn render_array(
        &self,
        value: &PaintValue,
        items: &[PaintValue],
        frame: Frame,
        acc: &mut PaintedLines,
    ) -> PaintResult<()> {
        let entries = items
            .iter()
            .filter(|it| !is_marker_element(it))
            .collect::<Vec<_>>();

        if entries.is_empty() {
            acc.push_str("[]");
            return ok!();
        }

        let inline = self.is_inline(value, frame);
        let child = frame.child();

        acc.push('[');
        for (index, item) in entries.into_iter().enumerate() {
            if index > 0 {
                acc.push_str(if inline { ", " } else { "," });
            }
            if !inline {
                self.push_line_start(frame.indent, acc);
            }
            self.render_value(item, child, acc)?;
        }
        if !inline {
            self.push_line_start(frame.indent - 1, acc);
        }
        acc.push(']');

        ok!()
    }

    fn render_object(
        &self,
        value: &PaintValue,
        map: &PaintObject,
        frame: Frame,
        acc: &mut PaintedLines,
    ) -> PaintResult<()> {
        let entries = map
            .iter()
            .filter(|(key, _)| !is_marker_key(key))
            .collect::<Vec<_>>();

        if entries.is_empty() {
            acc.push_str("{}");
            return ok!();
        }

        let inline = self.is_inline(value, frame);
        let child = frame.child();

        acc.push_str(if inline { "{ " } else { "{" });
        for (index, (key, value)) in entries.into_iter().enumerate() {
            if index > 0 {
                acc.push_str(if inline { ", " } else { "," });
            }
            if !inline {
                self.push_line_start(frame.indent, acc);
            }
            acc.push_str(&self.styles.key(key));
            acc.push_str(": ");
            self.render_value(value, child, acc)?;
        }
        if inline {
            acc.push_str(" }");
        } else {
            self.push_line_start(frame.indent - 1, acc);
            acc.push('}');
        }

        ok!()
    }
}

/// The color of each kind of value. Color support is resolved once per render call.
#[derive(Debug, Clone, Copy)]
struct ValueStyles {
    color_support: ColorSupport,
}

mod value_styles_impl {
    use super::ValueStyles;
    use crate::{AnsiPainter, Brush, RgbValue, StyleCode, js_number_text, palette};

    /// Unlike [`AnsiPainter::paint()`], empty text stays empty here, so that no style
    /// leaks into what follows.
    impl ValueStyles {
        fn fg(self, color: RgbValue, text: &str) -> String {
            if text.is_empty() {
                return String::new();
            }
            AnsiPainter::new(Brush::Foreground(color))
                .with_detector(self.color_support)
                .paint(text)
        }

        fn style(self, style: StyleCode, text: &str) -> String {
            if text.is_empty() {
                return String::new();
            }
            AnsiPainter::new(Brush::Style(style))
                .with_detector(self.color_support)
                .paint(text)
        }

        pub(super) fn absent(self, token: &str) -> String {
            self.style(StyleCode::Italic, &self.fg(palette::GRAY, token))
        }

        pub(super) fn boolean(self, value: bool) -> String {
            self.fg(palette::YELLOW, if value { "true" } else { "false" })
        }

        pub(super) fn number(self, value: f64) -> String {
            self.fg(palette::PURPLE, &js_number_text(value))
        }

        pub(super) fn quoted_string(self, value: &str) -> String {
            let quote = self.style(StyleCode::Dim, &self.fg(palette::GREEN, "'"));
            format!("{quote}{}{quote}", self.fg(palette::GREEN, value))
        }

        pub(super) fn function(self, source: &str) -> String {
            self.fg(palette::ORANGE, source)
        }

        pub(super) fn key(self, key: &str) -> String { self.style(StyleCode::Dim, key) }
    }
}
