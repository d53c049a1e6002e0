//! Ranking policy
//!
//! Given the normalized query and every stored name, decide between the
//! fuzzy-ranked result set and the substring-scan fallback.

use super::fuzzy::partial_ratio;

/// Minimum best-of-top-K score for the fuzzy results to be trusted.
pub const SCORE_THRESHOLD: f64 = 70.0;

/// How many fuzzy candidates are kept.
pub const TOP_K: usize = 3;

/// Score assigned to every hit on the substring fallback path. Not comparable
/// to the fuzzy scores; kept asymmetric on purpose.
pub const FALLBACK_SCORE: f64 = 100.0;

/// A ranked candidate: the stored name and its fuzzy score.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedName {
    pub name: String,
    pub score: f64,
}

/// Outcome of ranking a query against the catalog's names.
#[derive(Debug, Clone, PartialEq)]
pub enum RankOutcome {
    /// The best fuzzy candidate cleared the threshold; all top-K candidates
    /// are returned with their own scores, even the weak ones.
    Ranked(Vec<RankedName>),
    /// No confident fuzzy match; the caller should run the substring scan.
    Fallback,
}

/// Rank every candidate name against the query.
///
/// Candidates are scored with `partial_ratio` and the top K kept. Ties break
/// deterministically: the sort is stable, so equal scores keep their
/// insertion order. If even the best of the kept candidates is below the
/// threshold the fuzzy results are discarded wholesale.
pub fn rank(query: &str, names: &[String]) -> RankOutcome {
    let mut scored: Vec<RankedName> = names
        .iter()
        .map(|name| RankedName {
            name: name.clone(),
            score: partial_ratio(query, name),
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(TOP_K);

    match scored.first() {
        Some(best) if best.score >= SCORE_THRESHOLD => RankOutcome::Ranked(scored),
        _ => RankOutcome::Fallback,
    }
}
