// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just syntactic
/// sugar that helps having to write `Ok(())` repeatedly.
///
/// ```
/// use r3bl_ansi_paint::{ok, PaintResult};
///
/// fn it_works() -> PaintResult<()> { ok!() }
/// fn it_also_works() -> PaintResult<u8> { ok!(42) }
/// ```
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Build a [`crate::PaintValue::Array`] from a list of expressions, each of which is
/// converted with [`Into<PaintValue>`].
///
/// ```
/// use r3bl_ansi_paint::{paint_array, PaintValue};
///
/// let it = paint_array![1, "two", true];
/// assert!(matches!(it, PaintValue::Array(ref items) if items.len() == 3));
/// ```
#[macro_export]
macro_rules! paint_array {
    ($($item:expr),* $(,)?) => {
        $crate::PaintValue::Array(vec![$($crate::PaintValue::from($item)),*])
    };
}

/// Build a [`crate::PaintValue::Object`] whose keys keep their insertion order.
///
/// ```
/// use r3bl_ansi_paint::{paint_array, paint_object, PaintValue};
///
/// let it = paint_object! { "a" => 1, "b" => paint_array![1, 2] };
/// assert!(matches!(it, PaintValue::Object(ref map) if map.len() == 2));
/// ```
#[macro_export]
macro_rules! paint_object {
    ($($key:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut map = $crate::PaintObject::new();
        $(map.insert(::std::string::String::from($key), $crate::PaintValue::from($value));)*
        $crate::PaintValue::Object(map)
    }};
}

/// Capture the source text of an expression (usually a closure) as a
/// [`crate::PaintValue::Function`]. The expression itself is type checked but never
/// called.
///
/// ```
/// use r3bl_ansi_paint::{callable, PaintValue};
///
/// let it = callable!(|x: u8| x + 1);
/// assert!(matches!(it, PaintValue::Function(_)));
/// ```
#[macro_export]
macro_rules! callable {
    ($it:expr) => {{
        let _ = &$it;
        $crate::PaintValue::Function(::std::string::String::from(stringify!($it)))
    }};
}

/// Log any number of values (each converted with [`Into<PaintValue>`]) to stdout using
/// the default [`crate::LogOptions`].
///
/// ```
/// use r3bl_ansi_paint::{paint_log, paint_object};
///
/// paint_log!("Something went wrong:", paint_object! { "code" => 420, "ok" => false });
/// ```
#[macro_export]
macro_rules! paint_log {
    ($($arg:expr),* $(,)?) => {
        $crate::log(
            &[$($crate::PaintValue::from($arg)),*],
            &$crate::LogOptions::default(),
        )
    };
}
