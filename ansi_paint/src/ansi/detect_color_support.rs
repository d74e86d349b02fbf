// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{env, io::IsTerminal};

/// The result of the color support check. This crate only emits 24-bit truecolor
/// sequences, so the check is binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSupport {
    Truecolor,
    NoColor,
}

/// Capability that answers "can the output target render ANSI?". Painters ask it on
/// every call and never cache the answer, since the environment can change between
/// calls.
///
/// - Pass a [`ColorSupport`] value to get a fixed answer (handy in tests).
/// - Pass [`EnvColorSupport`] to examine the environment each time.
pub trait DetectColorSupport {
    fn detect(&self) -> ColorSupport;
}

impl DetectColorSupport for ColorSupport {
    fn detect(&self) -> ColorSupport { *self }
}

/// The stream to check for color support.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

/// Examines the environment variables and the tty-ness of [`Self::stream`] on every
/// call to [`DetectColorSupport::detect`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnvColorSupport {
    pub stream: Stream,
}

impl EnvColorSupport {
    #[must_use]
    pub fn new(stream: Stream) -> Self { Self { stream } }
}

impl DetectColorSupport for EnvColorSupport {
    fn detect(&self) -> ColorSupport {
        examine_term_descriptor(&TermDescriptor::capture(self.stream))
    }
}

/// Snapshot of everything in the ambient environment that affects color support. This
/// is captured fresh by [`EnvColorSupport`] and then handed to the pure predicate
/// [`examine_term_descriptor`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TermDescriptor {
    pub no_color: Option<String>,
    pub term: Option<String>,
    pub colorterm: Option<String>,
    pub clicolor: Option<String>,
    pub clicolor_force: Option<String>,
    pub ignore_is_terminal: Option<String>,
    pub is_a_tty: bool,
    pub is_ci: bool,
    pub is_windows: bool,
}

impl TermDescriptor {
    #[must_use]
    pub fn capture(stream: Stream) -> Self {
        Self {
            no_color: env::var("NO_COLOR").ok(),
            term: env::var("TERM").ok(),
            colorterm: env::var("COLORTERM").ok(),
            clicolor: env::var("CLICOLOR").ok(),
            clicolor_force: env::var("CLICOLOR_FORCE").ok(),
            ignore_is_terminal: env::var("IGNORE_IS_TERMINAL").ok(),
            is_a_tty: helpers::is_a_tty(stream),
            is_ci: is_ci::uncached(),
            is_windows: env::consts::OS == "windows",
        }
    }
}

/// Determine whether color is supported heuristically. This is a pure function of the
/// given descriptor.
#[must_use]
pub fn examine_term_descriptor(it: &TermDescriptor) -> ColorSupport {
    if helpers::is_set_and_not_zero(it.clicolor_force.as_deref()) {
        return ColorSupport::Truecolor;
    }

    if helpers::is_set_and_not_zero(it.no_color.as_deref())
        || it.term.as_deref() == Some("dumb")
        || !(it.is_a_tty || helpers::is_set_and_not_zero(it.ignore_is_terminal.as_deref()))
    {
        return ColorSupport::NoColor;
    }

    if it.is_windows
        || it.colorterm.is_some()
        || it.term.as_deref().is_some_and(helpers::check_ansi_color)
        || helpers::is_set_and_not_zero(it.clicolor.as_deref())
        || it.is_ci
    {
        return ColorSupport::Truecolor;
    }

    ColorSupport::NoColor
}

mod helpers {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    pub fn is_a_tty(stream: Stream) -> bool {
        match stream {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        }
    }

    pub fn is_set_and_not_zero(value: Option<&str>) -> bool {
        matches!(value, Some(it) if it != "0")
    }

    pub fn check_ansi_color(term: &str) -> bool {
        term.starts_with("screen")
            || term.starts_with("xterm")
            || term.starts_with("vt100")
            || term.starts_with("vt220")
            || term.starts_with("rxvt")
            || term.contains("color")
            || term.contains("ansi")
            || term.contains("cygwin")
            || term.contains("linux")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tty_xterm() -> TermDescriptor {
        TermDescriptor {
            term: Some("xterm-256color".to_string()),
            is_a_tty: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_fixed_color_support() {
        assert_eq!(ColorSupport::Truecolor.detect(), ColorSupport::Truecolor);
        assert_eq!(ColorSupport::NoColor.detect(), ColorSupport::NoColor);
    }

    #[test]
    fn test_tty_xterm_is_truecolor() {
        assert_eq!(examine_term_descriptor(&tty_xterm()), ColorSupport::Truecolor);
    }

    #[test]
    fn test_no_color() {
        let it = TermDescriptor {
            no_color: Some("1".to_string()),
            ..tty_xterm()
        };
        assert_eq!(examine_term_descriptor(&it), ColorSupport::NoColor);

        // `NO_COLOR=0` doesn't count.
        let it = TermDescriptor {
            no_color: Some("0".to_string()),
            ..tty_xterm()
        };
        assert_eq!(examine_term_descriptor(&it), ColorSupport::Truecolor);
    }

    #[test]
    fn test_dumb_term() {
        let it = TermDescriptor {
            term: Some("dumb".to_string()),
            ..tty_xterm()
        };
        assert_eq!(examine_term_descriptor(&it), ColorSupport::NoColor);
    }

    #[test]
    fn test_not_a_tty() {
        let it = TermDescriptor {
            is_a_tty: false,
            ..tty_xterm()
        };
        assert_eq!(examine_term_descriptor(&it), ColorSupport::NoColor);

        let it = TermDescriptor {
            is_a_tty: false,
            ignore_is_terminal: Some("1".to_string()),
            ..tty_xterm()
        };
        assert_eq!(examine_term_descriptor(&it), ColorSupport::Truecolor);
    }

    #[test]
    fn test_clicolor_force_wins() {
        let it = TermDescriptor {
            clicolor_force: Some("1".to_string()),
            no_color: Some("1".to_string()),
            ..Default::default()
        };
        assert_eq!(examine_term_descriptor(&it), ColorSupport::Truecolor);
    }

    #[test]
    fn test_unknown_term_on_tty() {
        let it = TermDescriptor {
            term: Some("mystery".to_string()),
            is_a_tty: true,
            ..Default::default()
        };
        assert_eq!(examine_term_descriptor(&it), ColorSupport::NoColor);

        let it = TermDescriptor {
            colorterm: Some("truecolor".to_string()),
            ..it
        };
        assert_eq!(examine_term_descriptor(&it), ColorSupport::Truecolor);
    }
}
