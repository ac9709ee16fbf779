// utils/display.rs

//! # Display Utility Module
//!
//! ANSI escape codes for colored and underlined terminal text, plus the
//! `print_*` macros the CLI uses for color-coded output.
//!
//! ## Example Usage
//! ```rust
//! use dbtools::utils::display::TextColor;
//!
//! println!("{}", TextColor::paint("disk almost full", TextColor::WARN));
//! println!("{}ok{}", TextColor::OK, TextColor::OFF);
//! ```

/// Escape codes for special text formats and colors.
///
/// Bold, italic and strike-through are left out because several terminals
/// (the Windows PyCharm console among them) do not render them.
pub struct TextColor;

impl TextColor {
    pub const ON: &'static str = "";
    pub const VIOLET: &'static str = "\x1b[95m";
    pub const CYAN: &'static str = "\x1b[36m";
    pub const BLUE: &'static str = "\x1b[94m";
    pub const GREEN: &'static str = "\x1b[92m";
    pub const YELLOW: &'static str = "\x1b[93m";
    pub const RED: &'static str = "\x1b[31m";

    pub const UNDERLINE: &'static str = "\x1b[4m";

    pub const WARN: &'static str = Self::YELLOW;
    pub const FAIL: &'static str = Self::RED;
    pub const INFO: &'static str = Self::GREEN;
    pub const OK: &'static str = Self::GREEN;
    pub const NOTE: &'static str = Self::CYAN;
    pub const ALERT: &'static str = Self::WARN;
    pub const ERROR: &'static str = Self::FAIL;

    /// Resets all attributes.
    pub const OFF: &'static str = "\x1b[0m";

    /// Wraps `text` in `code` followed by [`TextColor::OFF`].
    pub fn paint(text: &str, code: &str) -> String {
        format!("{}{}{}", code, text, Self::OFF)
    }
}

#[macro_export]
macro_rules! print_info {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        println!("{}", format!($($arg)*).blue())
    }};
}

#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        eprintln!("{}", format!($($arg)*).red())
    }};
}

#[macro_export]
macro_rules! print_success {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        println!("{}", format!($($arg)*).green())
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_match_base_colors() {
        assert_eq!(TextColor::WARN, TextColor::YELLOW);
        assert_eq!(TextColor::ALERT, TextColor::YELLOW);
        assert_eq!(TextColor::FAIL, TextColor::RED);
        assert_eq!(TextColor::ERROR, TextColor::RED);
        assert_eq!(TextColor::OK, TextColor::GREEN);
        assert_eq!(TextColor::NOTE, TextColor::CYAN);
    }

    #[test]
    fn test_paint_resets_after_text() {
        assert_eq!(TextColor::paint("hi", TextColor::RED), "\x1b[31mhi\x1b[0m");
        assert_eq!(TextColor::paint("plain", TextColor::ON), "plain\x1b[0m");
    }
}
