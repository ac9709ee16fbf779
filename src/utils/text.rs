// utils/text.rs

//! # Text Utility Module
//!
//! Case-insensitive comparison that tolerates accented and composed
//! characters, plus substitution of placeholder values with a default.
//!
//! ## Example Usage
//! ```rust
//! use dbtools::utils::text::{clean_value, nocase_compare};
//!
//! assert!(nocase_compare(Some("café"), Some("CAFE\u{301}")));
//! assert_eq!(clean_value(Some("NULL"), "N/A"), "N/A");
//! ```

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::app::NO_MATCH_ROW_ID;

/// Values that may carry text for [`nocase_compare`].
///
/// Non-text values only ever compare equal through `PartialEq`.
pub trait NocaseText {
    fn as_text(&self) -> Option<&str> {
        None
    }
}

impl NocaseText for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl NocaseText for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl NocaseText for Cow<'_, str> {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: NocaseText + ?Sized> NocaseText for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

macro_rules! impl_non_text {
    ($($t:ty),*) => {
        $(impl NocaseText for $t {})*
    };
}

impl_non_text!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Case-folded, then compatibility-decomposed form used for comparison.
fn fold(text: &str) -> String {
    caseless::default_case_fold_str(text).nfkd().collect()
}

/// Compares two optional values, ignoring case and Unicode composition for text.
///
/// Equal values are always equal. Two absent values are equal; an absent
/// value never equals a present one.
pub fn nocase_compare<T>(a: Option<T>, b: Option<T>) -> bool
where
    T: NocaseText + PartialEq,
{
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a == b
                || match (a.as_text(), b.as_text()) {
                    (Some(x), Some(y)) => fold(x) == fold(y),
                    _ => false,
                }
        }
        _ => false,
    }
}

/// Returns `default` when `value` is absent or holds a placeholder.
///
/// Placeholders are the `"No Match Row Id"` sentinel and any spelling of
/// `"null"`.
pub fn clean_value<T>(value: Option<T>, default: T) -> T
where
    T: NocaseText + PartialEq,
{
    match value {
        Some(v) if !is_placeholder(&v) => v,
        _ => default,
    }
}

fn is_placeholder<T: NocaseText + ?Sized>(value: &T) -> bool {
    match value.as_text() {
        Some(text) => text == NO_MATCH_ROW_ID || nocase_compare(Some(text), Some("null")),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_values_are_equal() {
        assert!(nocase_compare(Some("abc"), Some("abc")));
        assert!(nocase_compare(Some(42), Some(42)));
        assert!(!nocase_compare(Some(42), Some(43)));
        assert!(nocase_compare(Some(true), Some(true)));
    }

    #[test]
    fn test_case_is_ignored() {
        assert!(nocase_compare(Some("Hello"), Some("hELLO")));
        assert!(nocase_compare(
            Some("NULL".to_string()),
            Some("null".to_string())
        ));
    }

    #[test]
    fn test_composed_and_decomposed_forms_match() {
        // precomposed U+00E9 vs "e" + combining acute accent
        assert!(nocase_compare(Some("café"), Some("CAFE\u{301}")));
        assert!(nocase_compare(Some("CAFÉ"), Some("cafe\u{301}")));
        assert!(nocase_compare(Some("café"), Some("CAFÉ")));
        assert!(!nocase_compare(Some("café"), Some("cafe")));
    }

    #[test]
    fn test_sharp_s_folds_to_double_s() {
        assert!(nocase_compare(Some("straße"), Some("STRASSE")));
        assert!(nocase_compare(Some("STRASSE"), Some("strasse")));
    }

    #[test]
    fn test_final_sigma_matches_sigma() {
        assert!(nocase_compare(Some("οδοσ"), Some("οδος")));
        assert!(nocase_compare(Some("ΟΔΟΣ"), Some("οδος")));
    }

    #[test]
    fn test_compatibility_forms_match() {
        // U+FB01 LATIN SMALL LIGATURE FI
        assert!(nocase_compare(Some("\u{FB01}le"), Some("FILE")));
    }

    #[test]
    fn test_absent_values() {
        assert!(!nocase_compare(None, Some("null")));
        assert!(!nocase_compare(Some("null"), None));
        assert!(nocase_compare::<&str>(None, None));
    }

    #[test]
    fn test_clean_value_substitutes_placeholders() {
        assert_eq!(clean_value(Some("No Match Row Id"), "N/A"), "N/A");
        assert_eq!(clean_value(Some("NULL"), "N/A"), "N/A");
        assert_eq!(clean_value(Some("Null"), "N/A"), "N/A");
        assert_eq!(clean_value(None, "N/A"), "N/A");
    }

    #[test]
    fn test_clean_value_keeps_real_values() {
        assert_eq!(clean_value(Some("ok"), "N/A"), "ok");
        assert_eq!(clean_value(Some("no match row id"), "N/A"), "no match row id");
        assert_eq!(clean_value(Some(String::from("x")), String::from("d")), "x");
        assert_eq!(clean_value(Some(0), 7), 0);
        assert_eq!(clean_value(None, 7), 7);
    }
}
