//! Partial-ratio fuzzy scoring
//!
//! Thin wrappers over the rapidfuzz scorers, on a 0-100 scale. `ratio` is
//! normalized indel similarity (edits are insertions and deletions only);
//! `partial_ratio` is the best `ratio` of the shorter string against the
//! windows of the longer one, so a query that appears verbatim inside a name
//! scores 100.

use rapidfuzz::fuzz;

/// Similarity of two strings on a 0-100 scale.
///
/// Two empty strings are identical (100); one empty string shares nothing
/// with a non-empty one (0).
pub fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 100.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    // rapidfuzz returns a 0-1 similarity; this module's contract is 0-100.
    fuzz::ratio(a.chars(), b.chars()) * 100.0
}

/// Best `ratio` between the shorter string and any contiguous window of the
/// longer string with the shorter's length.
///
/// An empty side scores 0 against a non-empty one; empty queries are served
/// by the ranker's substring fallback instead.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 100.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    // rapidfuzz 0.5 exposes no `partial_ratio`; scan the same-length windows
    // of the longer string ourselves, scoring each with `fuzz::ratio`.
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (short, long) = if a_chars.len() <= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };
    long.windows(short.len())
        .map(|window| fuzz::ratio(short.iter().copied(), window.iter().copied()) * 100.0)
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_identical() {
        assert_eq!(ratio("stapler", "stapler"), 100.0);
    }

    #[test]
    fn test_ratio_disjoint() {
        assert_eq!(ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_ratio_partial_overlap() {
        // Indel distance 2 over combined length 8 -> 75
        assert_eq!(ratio("abcd", "abxd"), 75.0);
    }

    #[test]
    fn test_ratio_empty() {
        assert_eq!(ratio("", ""), 100.0);
        assert_eq!(ratio("", "abc"), 0.0);
        assert_eq!(ratio("abc", ""), 0.0);
    }

    #[test]
    fn test_partial_ratio_substring_scores_100() {
        assert_eq!(partial_ratio("charger", "phone charger"), 100.0);
        assert_eq!(partial_ratio("phone charger", "charger"), 100.0);
    }

    #[test]
    fn test_partial_ratio_no_overlap() {
        assert_eq!(partial_ratio("zzz", "stapler"), 0.0);
    }

    #[test]
    fn test_partial_ratio_close_match() {
        // "chargr" against the best window of "phone charger" keeps five of
        // six characters
        let score = partial_ratio("chargr", "phone charger");
        assert!(score >= 70.0, "score was {}", score);
        assert!(score < 100.0);
    }

    #[test]
    fn test_partial_ratio_empty_query_is_zero() {
        assert_eq!(partial_ratio("", "stapler"), 0.0);
        assert_eq!(partial_ratio("", ""), 100.0);
    }

    #[test]
    fn test_partial_ratio_symmetric() {
        let a = partial_ratio("pasport", "passport");
        let b = partial_ratio("passport", "pasport");
        assert_eq!(a, b);
    }

    #[test]
    fn test_partial_ratio_unicode() {
        assert_eq!(partial_ratio("café", "café au lait"), 100.0);
    }

    #[test]
    fn test_single_transposition_stays_high() {
        // "hte" -> "the": one deletion plus one insertion over length 6
        assert!(partial_ratio("hte keys", "the keys") >= 70.0);
    }
}
