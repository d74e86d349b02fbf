// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          io::Write as _,
          sync::Arc};

use crate::Stream;

/// Boxed function that receives one output line (w/out the trailing newline) per call.
pub type LineWriterFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Where the lines produced by [`crate::log()`] go.
#[derive(Clone, Default)]
pub enum LogOutput {
    #[default]
    Stdout,
    Stderr,
    /// Eg: capture lines in tests, or hand them to another logging system.
    Custom(LineWriterFn),
}

impl LogOutput {
    #[must_use]
    pub fn custom(it: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(it))
    }

    /// The stream whose terminal decides color support. [`LogOutput::Custom`] goes by
    /// stdout.
    #[must_use]
    pub fn stream(&self) -> Stream {
        match self {
            LogOutput::Stderr => Stream::Stderr,
            LogOutput::Stdout | LogOutput::Custom(_) => Stream::Stdout,
        }
    }

    /// Write a single line. Errors writing to stdout / stderr (eg: a closed pipe) are
    /// ignored.
    pub fn write_line(&self, line: &str) {
        match self {
            LogOutput::Stdout => {
                _ = writeln!(std::io::stdout().lock(), "{line}");
            }
            LogOutput::Stderr => {
                _ = writeln!(std::io::stderr().lock(), "{line}");
            }
            LogOutput::Custom(it) => it(line),
        }
    }
}

impl Debug for LogOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogOutput::Stdout => write!(f, "Stdout"),
            LogOutput::Stderr => write!(f, "Stderr"),
            LogOutput::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}
