// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorSupport, DEFAULT_PRINT_WIDTH, LogOutput, RenderOptions};

pub const DEFAULT_DELIMITER: &str = " ";

/// Options for [`crate::log()`] and [`crate::logger()`]. Anything that converts into
/// this type can be passed to [`crate::logger()`], eg:
///
/// ```
/// use r3bl_ansi_paint::{logger, LogOptions, LogOutput};
///
/// let to_stderr = logger(LogOutput::Stderr);
/// let prefixed = logger(LogOptions::default().with_prefix("┤ ").with_inline(true));
/// ```
#[derive(Debug, Clone)]
pub struct LogOptions {
    pub output: LogOutput,
    /// Prepended to every emitted line.
    pub prefix: String,
    /// Placed between the painted args.
    pub delimiter: String,
    /// See [`RenderOptions::inline`].
    pub inline: Option<bool>,
    pub print_width: usize,
    /// When `true`, every physical line of a multiline render is emitted as its own line
    /// with the prefix in front. Otherwise the whole render is emitted in one call, and
    /// the prefix only shows up in front of the first line and the container entries.
    pub reprefix_lines: bool,
    /// `None` detects color support from the environment.
    pub color_support: Option<ColorSupport>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            output: LogOutput::default(),
            prefix: String::new(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            inline: None,
            print_width: DEFAULT_PRINT_WIDTH,
            reprefix_lines: false,
            color_support: None,
        }
    }
}

impl LogOptions {
    #[must_use]
    pub fn with_output(mut self, output: LogOutput) -> Self {
        self.output = output;
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    #[must_use]
    pub fn with_inline(mut self, inline: impl Into<Option<bool>>) -> Self {
        self.inline = inline.into();
        self
    }

    #[must_use]
    pub fn with_print_width(mut self, print_width: usize) -> Self {
        self.print_width = print_width;
        self
    }

    #[must_use]
    pub fn with_reprefix_lines(mut self, reprefix_lines: bool) -> Self {
        self.reprefix_lines = reprefix_lines;
        self
    }

    #[must_use]
    pub fn with_color_support(mut self, color_support: ColorSupport) -> Self {
        self.color_support = Some(color_support);
        self
    }
}

mod convert_into_log_options {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl From<LogOutput> for LogOptions {
        fn from(output: LogOutput) -> Self { Self::default().with_output(output) }
    }

    impl From<ColorSupport> for LogOptions {
        fn from(color_support: ColorSupport) -> Self {
            Self::default().with_color_support(color_support)
        }
    }

    impl From<&LogOptions> for RenderOptions {
        /// With [`LogOptions::reprefix_lines`] the prefix is added afterwards, per line,
        /// so it is left out of the render.
        fn from(it: &LogOptions) -> Self {
            Self {
                inline: it.inline,
                prefix: if it.reprefix_lines {
                    String::new()
                } else {
                    it.prefix.clone()
                },
                print_width: it.print_width,
                color_support: it.color_support,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let it = LogOptions::default();
        assert_eq!(it.prefix, "");
        assert_eq!(it.delimiter, " ");
        assert_eq!(it.inline, None);
        assert_eq!(it.print_width, 60);
        assert!(!it.reprefix_lines);
        assert!(matches!(it.output, LogOutput::Stdout));
    }

    #[test]
    fn test_into_render_options() {
        let options = LogOptions::default()
            .with_prefix("> ")
            .with_inline(false)
            .with_print_width(10)
            .with_color_support(ColorSupport::NoColor);

        assert_eq!(
            RenderOptions::from(&options),
            RenderOptions::default()
                .with_prefix("> ")
                .with_inline(false)
                .with_print_width(10)
                .with_color_support(ColorSupport::NoColor)
        );

        let options = options.with_reprefix_lines(true);
        assert_eq!(RenderOptions::from(&options).prefix, "");
    }

    #[test]
    fn test_from_output() {
        let it = LogOptions::from(LogOutput::Stderr);
        assert!(matches!(it.output, LogOutput::Stderr));
        assert_eq!(it.delimiter, DEFAULT_DELIMITER);
    }
}
