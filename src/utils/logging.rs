// utils/logging.rs

//! # Logging Utility Module
//!
//! Sets up the `env_logger` backend for the `log` facade and provides
//! [`DebugLog`], a switchable writer for `DEBUG:` lines.
//!
//! A `DebugLog` is an ordinary value owned by whoever composes the
//! application; pass it by reference to the code that needs it.
//!
//! ## Example Usage
//! ```rust
//! use dbtools::utils::logging::DebugLog;
//!
//! let debug_log = DebugLog::new(Vec::new());
//! debug_log.log(true);
//! debug_log.log("connecting");
//! debug_log.log(false);
//! debug_log.log("not written");
//! assert_eq!(debug_log.into_inner(), b"DEBUG: connecting\n");
//! ```

use std::borrow::Cow;
use std::fmt::Display;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use log::LevelFilter;

/// Sets the logger level based on the provided argument.
pub fn initialize_logger(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info, // Default to Info if unrecognized
    };

    env_logger::Builder::new().filter(None, level).init();
}

/// Something passed to [`DebugLog::log`].
#[derive(Debug, Clone, PartialEq)]
pub enum DebugEntry<'a> {
    /// Turns debug output on or off.
    Toggle(bool),
    /// Turns debug output on when positive, off otherwise.
    Level(i64),
    /// Text to write when debug output is on.
    Text(Cow<'a, str>),
}

impl From<bool> for DebugEntry<'_> {
    fn from(on: bool) -> Self {
        DebugEntry::Toggle(on)
    }
}

macro_rules! impl_level_entry {
    ($($t:ty),*) => {
        $(impl From<$t> for DebugEntry<'_> {
            fn from(level: $t) -> Self {
                DebugEntry::Level(i64::from(level))
            }
        })*
    };
}

impl_level_entry!(i8, i16, i32, i64, u8, u16, u32);

impl<'a> From<&'a str> for DebugEntry<'a> {
    fn from(text: &'a str) -> Self {
        DebugEntry::Text(Cow::Borrowed(text))
    }
}

impl From<String> for DebugEntry<'_> {
    fn from(text: String) -> Self {
        DebugEntry::Text(Cow::Owned(text))
    }
}

impl<'a> From<&'a String> for DebugEntry<'a> {
    fn from(text: &'a String) -> Self {
        DebugEntry::Text(Cow::Borrowed(text.as_str()))
    }
}

/// Writes `DEBUG:` lines to a sink while switched on.
pub struct DebugLog<W: Write = io::Stderr> {
    enabled: AtomicBool,
    sink: Mutex<W>,
}

impl DebugLog<io::Stderr> {
    /// A debug log writing to standard error, initially off.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl Default for DebugLog<io::Stderr> {
    fn default() -> Self {
        Self::stderr()
    }
}

impl<W: Write> DebugLog<W> {
    /// A debug log writing to `sink`, initially off.
    pub fn new(sink: W) -> Self {
        Self {
            enabled: AtomicBool::new(false),
            sink: Mutex::new(sink),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn set_enabled(&self, on: bool) {
        self.enabled.store(on, Ordering::Relaxed);
    }

    /// Handles one entry. Never fails; write errors are dropped.
    ///
    /// Integer levels only switch output on or off. Graded levels are not
    /// supported.
    pub fn log<'a>(&self, entry: impl Into<DebugEntry<'a>>) {
        match entry.into() {
            DebugEntry::Toggle(on) => self.set_enabled(on),
            DebugEntry::Level(level) => self.set_enabled(level > 0),
            DebugEntry::Text(text) => self.write_line(&text),
        }
    }

    /// Logs any displayable value as text.
    pub fn log_value(&self, value: impl Display) {
        self.write_line(&value.to_string());
    }

    fn write_line(&self, text: &str) {
        if !self.is_enabled() || text.trim().is_empty() {
            return;
        }

        let mut sink = match self.sink.lock() {
            Ok(sink) => sink,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = match text.strip_prefix('\n') {
            Some(rest) => writeln!(sink, "\nDEBUG: {}", rest),
            None => writeln!(sink, "DEBUG: {}", text),
        };
        let _ = sink.flush();
    }

    /// Consumes the log and returns its sink.
    pub fn into_inner(self) -> W {
        match self.sink.into_inner() {
            Ok(sink) => sink,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(debug_log: DebugLog<Vec<u8>>) -> String {
        String::from_utf8(debug_log.into_inner()).unwrap()
    }

    #[test]
    fn test_starts_disabled() {
        let debug_log = DebugLog::new(Vec::new());
        debug_log.log("hidden");

        assert!(!debug_log.is_enabled());
        assert_eq!(output(debug_log), "");
    }

    #[test]
    fn test_toggle_on_writes_prefixed_line() {
        let debug_log = DebugLog::new(Vec::new());
        debug_log.log(true);
        debug_log.log("hello");

        assert!(output(debug_log).contains("DEBUG: hello"));
    }

    #[test]
    fn test_toggle_off_suppresses_until_reenabled() {
        let debug_log = DebugLog::new(Vec::new());
        debug_log.log(false);
        debug_log.log("one");
        debug_log.log(String::from("two"));
        debug_log.log(true);
        debug_log.log("three");

        assert_eq!(output(debug_log), "DEBUG: three\n");
    }

    #[test]
    fn test_integer_levels_are_on_off() {
        let debug_log = DebugLog::new(Vec::new());
        debug_log.log(3i32);
        assert!(debug_log.is_enabled());
        debug_log.log(0i32);
        assert!(!debug_log.is_enabled());
        debug_log.log(1u8);
        assert!(debug_log.is_enabled());
        debug_log.log(-2i64);
        assert!(!debug_log.is_enabled());
    }

    #[test]
    fn test_blank_text_is_not_written() {
        let debug_log = DebugLog::new(Vec::new());
        debug_log.log(true);
        debug_log.log("");
        debug_log.log("   \n");

        assert_eq!(output(debug_log), "");
    }

    #[test]
    fn test_leading_newline_comes_before_prefix() {
        let debug_log = DebugLog::new(Vec::new());
        debug_log.log(true);
        debug_log.log("\nsection");

        assert_eq!(output(debug_log), "\nDEBUG: section\n");
    }

    #[test]
    fn test_log_value_formats_non_text() {
        let debug_log = DebugLog::new(Vec::new());
        debug_log.log(true);
        debug_log.log_value(42.5);

        assert_eq!(output(debug_log), "DEBUG: 42.5\n");
    }
}
