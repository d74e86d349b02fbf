// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Drive the public API end to end, capturing output lines w/ [`LogOutput::Custom`].

use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use r3bl_ansi_paint::{AnsiGradient, ColorSupport, LogOptions, LogOutput, PaintValue,
                      RenderOptions, callable, log, paint, paint_array, paint_object};

type Lines = Arc<Mutex<Vec<String>>>;

fn capture(options: LogOptions) -> (LogOptions, Lines) {
    let lines = Lines::default();
    let output = {
        let lines = lines.clone();
        LogOutput::custom(move |line| lines.lock().unwrap().push(line.to_string()))
    };
    (options.with_output(output), lines)
}

fn taken(lines: &Lines) -> Vec<String> { std::mem::take(&mut *lines.lock().unwrap()) }

#[test]
fn test_log_empty_and_multiline_string() {
    let (options, lines) = capture(
        LogOptions::default()
            .with_prefix("┤ ")
            .with_color_support(ColorSupport::Truecolor),
    );

    log(&[], &options);
    assert_eq!(taken(&lines), vec!["┤ "]);

    log(&["line1\nline2".into()], &options);
    assert_eq!(taken(&lines), vec!["┤ line1", "┤ line2"]);
}

#[test]
fn test_log_mixed_args_plain() {
    let (options, lines) = capture(LogOptions::from(ColorSupport::NoColor));

    log(
        &[
            "Something went wrong:".into(),
            paint_object! { "code" => 420, "ok" => false, "cause" => PaintValue::Null },
        ],
        &options,
    );
    assert_eq!(
        taken(&lines),
        vec!["Something went wrong: { code: 420, ok: false, cause: null }"]
    );
}

#[test]
fn test_log_mixed_args_colored() {
    let (options, lines) = capture(LogOptions::from(ColorSupport::Truecolor));

    log(&["n =".into(), 7.into()], &options);
    assert_eq!(taken(&lines), vec!["n = \x1b[38;2;149;66;231m7\x1b[0m"]);
}

#[test]
fn test_unsupported_kind_does_not_fail_the_call() {
    let (options, lines) = capture(LogOptions::from(ColorSupport::NoColor));

    log(&[paint_array![1, PaintValue::opaque("bigint")]], &options);

    let lines = taken(&lines);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Opaque"), "{lines:?}");
}

#[test]
fn test_paint_json_value() {
    let json = serde_json::json!({
        "name": "r3bl",
        "tags": ["tui", "cli"],
        "nested": { "deep": [1.5, null] },
    });

    let it = paint(
        &json.into(),
        &RenderOptions::from(ColorSupport::NoColor).with_inline(true),
    )
    .unwrap();

    assert_eq!(
        it,
        "{ name: 'r3bl', tags: ['tui', 'cli'], nested: { deep: [1.5, null] } }"
    );
}

#[test]
fn test_paint_function_is_never_called() {
    let it = paint(
        &paint_array![callable!(|| unreachable!())],
        &RenderOptions::from(ColorSupport::NoColor),
    )
    .unwrap();

    assert!(it.starts_with("[||"), "{it}");
    assert!(it.contains("unreachable"), "{it}");
}

#[test]
fn test_gradient_text_ends_with_reset() {
    let gradient = AnsiGradient::try_new(&["#ff0000", "#0000ff"]).unwrap();
    let it = gradient.paint_text("ab");

    assert_eq!(it, "\x1b[38;2;255;0;0ma\x1b[38;2;0;0;255mb\x1b[0m");
    assert_eq!(strip_ansi_escapes::strip_str(&it), "ab");
}
