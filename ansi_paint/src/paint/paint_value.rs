// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use ordermap::OrderMap;

/// Keys keep their insertion order, which is also the order they're printed in.
pub type PaintObject = OrderMap<String, PaintValue>;

/// Every kind of value the pretty printer knows how to render. Host values are
/// classified into exactly one of these variants before rendering.
///
/// The tree is owned, so a cyclic graph can't be built and rendering always
/// terminates.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintValue {
    Null,
    Undefined,
    Bool(bool),
    Number(f64),
    String(String),
    /// The source text of a callable. See [`crate::callable!`].
    Function(String),
    Array(Vec<PaintValue>),
    Object(PaintObject),
    /// A host value that doesn't fit any other variant. Rendering it fails with
    /// [`crate::PaintError::UnsupportedKind`].
    Opaque { type_name: String },
}

impl PaintValue {
    #[must_use]
    pub fn opaque(type_name: impl Into<String>) -> Self {
        Self::Opaque {
            type_name: type_name.into(),
        }
    }

    #[must_use]
    pub fn function(source: impl Into<String>) -> Self { Self::Function(source.into()) }

    /// Short name of the variant, eg: `"boolean"`, or the type name of an opaque value.
    #[must_use]
    pub fn kind_name(&self) -> &str {
        match self {
            PaintValue::Null => "null",
            PaintValue::Undefined => "undefined",
            PaintValue::Bool(_) => "boolean",
            PaintValue::Number(_) => "number",
            PaintValue::String(_) => "string",
            PaintValue::Function(_) => "function",
            PaintValue::Array(_) => "array",
            PaintValue::Object(_) => "object",
            PaintValue::Opaque { type_name } => type_name,
        }
    }
}

mod convert_into_paint_value {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl From<bool> for PaintValue {
        fn from(value: bool) -> Self { PaintValue::Bool(value) }
    }

    impl From<f64> for PaintValue {
        fn from(value: f64) -> Self { PaintValue::Number(value) }
    }

    impl From<f32> for PaintValue {
        fn from(value: f32) -> Self { PaintValue::Number(f64::from(value)) }
    }

    macro_rules! impl_from_lossless_int {
        ($($ty:ty),*) => {
            $(
                impl From<$ty> for PaintValue {
                    fn from(value: $ty) -> Self { PaintValue::Number(f64::from(value)) }
                }
            )*
        };
    }

    impl_from_lossless_int!(i8, i16, i32, u8, u16, u32);

    /// Numbers are `f64`, just like they are in the console, so very large integers
    /// lose precision.
    macro_rules! impl_from_wide_int {
        ($($ty:ty),*) => {
            $(
                impl From<$ty> for PaintValue {
                    #[allow(clippy::cast_precision_loss)]
                    fn from(value: $ty) -> Self { PaintValue::Number(value as f64) }
                }
            )*
        };
    }

    impl_from_wide_int!(i64, u64, isize, usize);

    impl From<&str> for PaintValue {
        fn from(value: &str) -> Self { PaintValue::String(value.to_string()) }
    }

    impl From<String> for PaintValue {
        fn from(value: String) -> Self { PaintValue::String(value) }
    }

    impl From<&String> for PaintValue {
        fn from(value: &String) -> Self { PaintValue::String(value.clone()) }
    }

    impl From<char> for PaintValue {
        fn from(value: char) -> Self { PaintValue::String(value.to_string()) }
    }

    impl From<()> for PaintValue {
        fn from((): ()) -> Self { PaintValue::Undefined }
    }

    impl<T: Into<PaintValue>> From<Option<T>> for PaintValue {
        fn from(value: Option<T>) -> Self {
            match value {
                Some(it) => it.into(),
                None => PaintValue::Null,
            }
        }
    }

    impl<T: Into<PaintValue>> From<Vec<T>> for PaintValue {
        fn from(value: Vec<T>) -> Self {
            PaintValue::Array(value.into_iter().map(Into::into).collect())
        }
    }

    impl From<PaintObject> for PaintValue {
        fn from(value: PaintObject) -> Self { PaintValue::Object(value) }
    }

    impl<T: Into<PaintValue>> FromIterator<T> for PaintValue {
        fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
            PaintValue::Array(iter.into_iter().map(Into::into).collect())
        }
    }

    /// `serde_json` is built w/ `preserve_order`, so object keys keep the order they
    /// were parsed in.
    impl From<serde_json::Value> for PaintValue {
        fn from(value: serde_json::Value) -> Self {
            use serde_json::Value;
            match value {
                Value::Null => PaintValue::Null,
                Value::Bool(it) => PaintValue::Bool(it),
                Value::Number(it) => PaintValue::Number(it.as_f64().unwrap_or(f64::NAN)),
                Value::String(it) => PaintValue::String(it),
                Value::Array(it) => it.into_iter().collect(),
                Value::Object(it) => PaintValue::Object(
                    it.into_iter().map(|(key, value)| (key, value.into())).collect(),
                ),
            }
        }
    }
}
