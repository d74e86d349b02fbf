// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run with: `cargo run --example demo`. Set `NO_COLOR=1` to see the plain output.

use r3bl_ansi_paint::{AnsiGradient, CLEAR, LogOptions, LogOutput, Logger, PaintValue,
                      RenderOptions, ansi_rgb, callable, log_error, log_newlines, logger,
                      mini::{blue, bold, clear, cyan, dim, green, italic, red},
                      paint, paint_array, paint_log, paint_object, palette};

fn main() -> miette::Result<()> {
    // Render failures in the log sink are reported via tracing.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let title = logger(LogOptions::default().with_prefix(dim("\n\n# ")));
    let t = |text: &str| title.log(&[bold(text).into(), "\n".into()]);

    gradients(&t)?;
    minis(&t);
    loggers(&t);
    paint_directly(&t)?;

    Ok(())
}

fn gradients(t: &impl Fn(&str)) -> miette::Result<()> {
    let gradient = AnsiGradient::try_new(&["#38b2db", "#5959b5", "#e84067"])?;

    t("gradient string");
    paint_log!(gradient.paint_text("Simple gradient text."));

    t("gradient stops");
    let fade = format!(
        "{}■■■■■■■■■■■■\n{}■■■■■■■■■■■■\n{}■■■■■■■■■■■■{CLEAR}",
        gradient.at(0.5),
        gradient.at(0.0),
        gradient.at(0.9),
    );
    paint_log!(fade);

    Ok(())
}

fn minis(t: &impl Fn(&str)) {
    t("minis");

    paint_log!(red("red"));
    paint_log!(green("green"));
    paint_log!(blue("blue"));

    paint_log!(dim("dimmed"));
    paint_log!(bold("bold"));
    paint_log!(italic("italic"));

    log_newlines(2);
    // An empty string switches the color for everything that follows.
    paint_log!(red(""), "red", green(""), "green", blue(""), "blue", clear(""));
    paint_log!(green(""), "hello ", blue(""), format!("world{}!", clear("")));
}

fn loggers(t: &impl Fn(&str)) {
    t("logger()");
    let err = logger(LogOptions::default().with_prefix(red("| ")));
    err.log(&[format!("{} {}", red(">"), red(bold("ERROR"))).into()]);
    err.log(&[
        "Something went wrong:".into(),
        paint_object! { "code" => 420, "cause" => "¯\\_(ツ)_/¯", "ok" => false },
    ]);

    let sample = || {
        paint_object! {
            "foo" => true,
            "bar" => paint_array![1, "two", paint_object! { "three" => callable!(|| 3) }],
        }
    };

    t("print_width");
    let l = logger(LogOptions::default());
    l.log(&[sample()]);

    t("inline");
    let l = logger(LogOptions::default().with_inline(true));
    l.log(&[sample()]);

    t("inline overrides");
    let l = Logger::default();
    l.log(&[paint_object! {
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "nested" => paint_object! {
            "__inline__" => true,
            "one" => 1, "two" => 2, "three" => 3, "four" => 4,
            "five" => 5, "six" => 6, "seven" => 7,
        },
    }]);

    t("inline overrides 2");
    l.log(&[paint_array![true, 1, "two", callable!(|| 3), "__multiline__"]]);

    t("delimiter");
    let l = logger(LogOptions::default().with_delimiter(cyan(" · ")));
    l.log(&[true.into(), 1.into(), "two".into(), callable!(|| 3)]);

    t("output");
    let l = logger(LogOutput::Stderr);
    l.log(&["E-gad!".into()]);
    log_error(&["disk is".into(), "full".into()]);

    t("prefix");
    let l = logger(
        LogOptions::default()
            .with_prefix(cyan("⌇ "))
            .with_delimiter("")
            .with_reprefix_lines(true),
    );
    l.log(&["# ".into(), bold("Header").into()]);
    l.log(&[]);
    l.log(&[dim("<p>").into(), italic("Hello, world!").into(), dim("</p>").into()]);
    l.log(&[paint_object! { "__multiline__" => true, "each" => "line", "is" => "prefixed" }]);

    t("unsupported kind");
    l.log(&["symbol:".into(), PaintValue::opaque("symbol")]);
}

fn paint_directly(t: &impl Fn(&str)) -> miette::Result<()> {
    t("paint()");
    let value = paint_object! {
        "string" => "hello",
        "number" => 42,
        "boolean" => true,
        "null" => PaintValue::Null,
        "undefined" => PaintValue::Undefined,
        "function" => callable!(|name: &str| format!("hi {name}")),
        "array" => paint_array![1, 2, 3],
        "nested" => paint_object! { "deep" => paint_object! { "deeper" => "value" } },
    };
    println!("{}", paint(&value, &RenderOptions::default())?);

    t("palette");
    println!("{}", ansi_rgb(palette::ORANGE).paint("orange"));
    println!("{}", ansi_rgb(palette::PURPLE).paint("purple"));

    Ok(())
}
