// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Numbers are printed the way a JavaScript console prints them, since that's what
//! people expect to see next to `null` and `undefined`.

/// Default decimal text form of a number: `1`, `-0.5`, `NaN`, `Infinity`, `1e+21`,
/// `1e-7`. Negative zero prints as `0`.
#[must_use]
pub fn js_number_text(number: f64) -> String {
    if number.is_nan() {
        return "NaN".to_string();
    }

    if number.is_infinite() {
        return if number > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    if number == 0.0 {
        return "0".to_string();
    }

    let abs = number.abs();
    if !(1e-6..1e21).contains(&abs) {
        let it = format!("{number:e}");
        return match it.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => it,
        };
    }

    format!("{number}")
}

/// What `JSON.stringify` would print: non-finite numbers become `null`.
#[must_use]
pub fn json_number_text(number: f64) -> String {
    if number.is_finite() {
        js_number_text(number)
    } else {
        "null".to_string()
    }
}
