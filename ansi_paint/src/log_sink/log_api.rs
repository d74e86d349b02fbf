// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AnsiPainter, Brush, ColorSupport, DetectColorSupport, EnvColorSupport,
            LogOptions, LogOutput, PaintResult, PaintValue, RenderOptions, StyleCode, ok,
            paint_lines, palette};

/// Label in front of the lines written by [`log_error()`].
pub const ERROR_LABEL: &str = "ERROR ";

/// Print `args` as a single line (unless a container is printed multiline).
///
/// - No args: emits just the prefix.
/// - A single [`PaintValue::String`]: emits each of its lines w/ the prefix in front,
///   and no colors.
/// - Anything else: paints each arg w/ [`crate::paint()`], joins them w/ the delimiter, and
///   emits the result w/ the prefix in front.
///
/// Painting never takes the log call down. If it fails, the error is reported via
/// [`tracing::error!`] and a plain dump of `args` is emitted instead.
///
/// ```
/// use r3bl_ansi_paint::{log, paint_object, ColorSupport, LogOptions, LogOutput};
///
/// let options = LogOptions::from(LogOutput::Stderr)
///     .with_prefix("┤ ")
///     .with_color_support(ColorSupport::NoColor);
/// log(&["status:".into(), paint_object! { "ok" => true }], &options);
/// ```
pub fn log(args: &[PaintValue], options: &LogOptions) {
    let output = &options.output;
    let prefix = options.prefix.as_str();

    match args {
        [] => output.write_line(prefix),
        [PaintValue::String(text)] => {
            for line in text.split('\n') {
                output.write_line(&format!("{prefix}{line}"));
            }
        }
        _ => match paint_args(args, options) {
            Ok(lines) => {
                if options.reprefix_lines {
                    for line in lines {
                        output.write_line(&format!("{prefix}{line}"));
                    }
                } else {
                    output.write_line(&format!("{prefix}{}", lines.join("\n")));
                }
            }
            Err(error) => {
                let kinds = args.iter().map(PaintValue::kind_name).collect::<Vec<_>>();
                tracing::error!(?error, ?kinds, "Failed to paint log args");
                output.write_line(&format!("{prefix}{}", fallback_dump(args)));
            }
        },
    }
}

/// Paint each arg and join them w/ the delimiter. The result is split into the lines
/// that the multiline layout produced, a `\n` inside a string doesn't split. Color
/// support is resolved once, for the stream the lines are headed to.
fn paint_args(args: &[PaintValue], options: &LogOptions) -> PaintResult<Vec<String>> {
    let render_options = RenderOptions::from(options)
        .with_color_support(resolve_color_support(options));

    let mut acc = vec![String::new()];
    for (index, arg) in args.iter().enumerate() {
        let mut lines = paint_lines(arg, &render_options)?.into_iter();
        if let Some(last) = acc.last_mut() {
            if index > 0 {
                last.push_str(&options.delimiter);
            }
            if let Some(first) = lines.next() {
                last.push_str(&first);
            }
        }
        acc.extend(lines);
    }

    ok!(acc)
}

fn resolve_color_support(options: &LogOptions) -> ColorSupport {
    options
        .color_support
        .unwrap_or_else(|| EnvColorSupport::new(options.output.stream()).detect())
}

/// The [`Debug`] form of `args` w/ any ANSI escape sequences removed from the strings
/// inside.
#[must_use]
pub fn fallback_dump(args: &[PaintValue]) -> String {
    let plain = args.iter().map(strip_ansi).collect::<Vec<_>>();
    format!("{plain:?}")
}

fn strip_ansi(value: &PaintValue) -> PaintValue {
    match value {
        PaintValue::String(it) => PaintValue::String(strip_ansi_escapes::strip_str(it)),
        PaintValue::Function(it) => PaintValue::Function(strip_ansi_escapes::strip_str(it)),
        PaintValue::Array(items) => PaintValue::Array(items.iter().map(strip_ansi).collect()),
        PaintValue::Object(map) => PaintValue::Object(
            map.iter()
                .map(|(key, value)| (strip_ansi_escapes::strip_str(key), strip_ansi(value)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// A [`log()`] w/ its options bound, so that it can be reused.
///
/// ```
/// use r3bl_ansi_paint::{logger, paint_array, LogOptions};
///
/// let l = logger(LogOptions::default().with_prefix("| "));
/// l.log(&[]);
/// l.log(&["Hello, world!".into()]);
/// l.log(&["items:".into(), paint_array![1, 2, 3]]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Logger {
    pub options: LogOptions,
}

#[must_use]
pub fn logger(options: impl Into<LogOptions>) -> Logger {
    Logger {
        options: options.into(),
    }
}

impl Logger {
    pub fn log(&self, args: &[PaintValue]) { log(args, &self.options); }

    /// Emit `count` lines that only hold the prefix.
    pub fn newlines(&self, count: usize) {
        for _ in 0..count {
            log(&[], &self.options);
        }
    }

    /// Emit a red bold [`ERROR_LABEL`] line, then `args`.
    pub fn error(&self, args: &[PaintValue]) {
        let color_support = resolve_color_support(&self.options);
        let label = AnsiPainter::new(Brush::Foreground(palette::RED))
            .with_detector(color_support)
            .paint(
                AnsiPainter::new(Brush::Style(StyleCode::Bold))
                    .with_detector(color_support)
                    .paint(ERROR_LABEL),
            );
        log(&[label.into()], &self.options);
        log(args, &self.options);
    }
}

/// Emit `count` empty lines on stdout.
pub fn log_newlines(count: usize) { logger(LogOutput::Stdout).newlines(count); }

/// Emit a red bold [`ERROR_LABEL`] line, then `args`, on stderr.
pub fn log_error(args: &[PaintValue]) { logger(LogOutput::Stderr).error(args); }

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{paint_array, paint_object};

    fn capture(options: LogOptions) -> (Logger, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let output = {
            let lines = lines.clone();
            LogOutput::custom(move |line| lines.lock().unwrap().push(line.to_string()))
        };
        (logger(options.with_output(output)), lines)
    }

    fn plain() -> LogOptions { LogOptions::from(ColorSupport::NoColor) }

    #[test]
    fn test_no_args_emits_prefix() {
        let (l, lines) = capture(plain().with_prefix("┤ "));
        l.log(&[]);
        assert_eq!(*lines.lock().unwrap(), vec!["┤ "]);
    }

    #[test]
    fn test_single_string_is_split() {
        let (l, lines) = capture(plain().with_prefix("> "));
        l.log(&["line1\nline2".into()]);
        assert_eq!(*lines.lock().unwrap(), vec!["> line1", "> line2"]);
    }

    #[test]
    fn test_single_string_is_never_colored() {
        let (l, lines) = capture(LogOptions::from(ColorSupport::Truecolor));
        l.log(&["hello".into()]);
        assert_eq!(*lines.lock().unwrap(), vec!["hello"]);
    }

    #[test]
    fn test_many_args_joined() {
        let (l, lines) = capture(plain().with_prefix("| "));
        l.log(&["count:".into(), 3.into(), paint_array![1, "a"]]);
        assert_eq!(*lines.lock().unwrap(), vec!["| count: 3 [1, 'a']"]);

        let (l, lines) = capture(plain().with_delimiter(""));
        l.log(&["a".into(), "b".into()]);
        assert_eq!(*lines.lock().unwrap(), vec!["ab"]);
    }

    #[test]
    fn test_multiline_render_is_one_call() {
        let (l, lines) = capture(plain().with_prefix("| ").with_inline(false));
        l.log(&["obj".into(), paint_object! { "a" => 1 }]);
        assert_eq!(*lines.lock().unwrap(), vec!["| obj {\n|   a: 1\n| }"]);
    }

    #[test]
    fn test_reprefix_lines() {
        let (l, lines) = capture(
            plain()
                .with_prefix("| ")
                .with_inline(false)
                .with_reprefix_lines(true),
        );
        l.log(&["obj".into(), paint_object! { "a" => 1 }]);
        assert_eq!(*lines.lock().unwrap(), vec!["| obj {", "|   a: 1", "| }"]);
    }

    #[test]
    fn test_reprefix_lines_keeps_string_newlines() {
        let (l, lines) = capture(plain().with_prefix("| ").with_reprefix_lines(true));
        l.log(&[paint_array!["a\nb"], 1.into()]);
        assert_eq!(*lines.lock().unwrap(), vec!["| ['a\nb'] 1"]);

        let (l, lines) = capture(
            plain()
                .with_prefix("| ")
                .with_inline(false)
                .with_reprefix_lines(true),
        );
        l.log(&[paint_array!["a\nb"], 1.into()]);
        assert_eq!(*lines.lock().unwrap(), vec!["| [", "|   'a\nb'", "| ] 1"]);
    }

    /// Collects everything the fmt subscriber writes.
    #[derive(Clone, Default)]
    struct CapturedEvents(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedEvents {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
    }

    #[test]
    fn test_render_failure_is_reported() {
        let events = CapturedEvents::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer({
                let events = events.clone();
                move || events.clone()
            })
            .with_ansi(false)
            .finish();

        let (l, lines) = capture(plain());
        tracing::subscriber::with_default(subscriber, || {
            l.log(&[1.into(), PaintValue::opaque("symbol")]);
        });

        let report = String::from_utf8(events.0.lock().unwrap().clone()).unwrap();
        assert!(report.contains("ERROR"), "{report}");
        assert!(report.contains("UnsupportedKind"), "{report}");
        assert!(report.contains(r#"kinds=["number", "symbol"]"#), "{report}");

        // The call itself still emits the fallback dump.
        assert_eq!(lines.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_render_failure_falls_back() {
        let (l, lines) = capture(plain().with_prefix("! "));
        l.log(&["\x1b[1mbold\x1b[22m".into(), PaintValue::opaque("symbol")]);

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0],
            r#"! [String("bold"), Opaque { type_name: "symbol" }]"#
        );
    }

    #[test]
    fn test_newlines() {
        let (l, lines) = capture(plain().with_prefix("┤"));
        l.newlines(3);
        assert_eq!(*lines.lock().unwrap(), vec!["┤", "┤", "┤"]);

        l.newlines(0);
        assert_eq!(lines.lock().unwrap().len(), 3);
    }

    #[test]
    fn test_error_label() {
        let (l, lines) = capture(LogOptions::from(ColorSupport::Truecolor));
        l.error(&["disk".into(), "full".into()]);
        assert_eq!(
            *lines.lock().unwrap(),
            vec![
                "\x1b[38;2;255;83;71m\x1b[1mERROR \x1b[22m\x1b[0m".to_string(),
                "disk full".to_string(),
            ]
        );
    }
}
