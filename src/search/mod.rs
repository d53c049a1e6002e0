//! Search ranking
//!
//! The one piece of real decision logic in the system: score stored names
//! against the query with a partial-ratio fuzzy measure, keep the top few if
//! the best is confident enough, otherwise tell the caller to fall back to a
//! plain substring scan.

pub mod fuzzy;
pub mod ranking;

use unicode_normalization::UnicodeNormalization;

/// Normalize text the way the catalog stores it: NFKC, trimmed, lower-cased.
/// Applied to names at write time and to queries before matching, so the two
/// sides always compare in the same form.
pub fn normalize(text: &str) -> String {
    text.nfkc().collect::<String>().trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize("  Phone Charger "), "phone charger");
    }

    #[test]
    fn test_normalize_nfkc() {
        // Fullwidth latin compatibility forms fold to ASCII
        assert_eq!(normalize("ｌａｐｔｏｐ"), "laptop");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize("   "), "");
    }
}
