//! Fuzzy subsequence matching and ranking for jump-to-file style searches.
//!
//! The [`SmithWatermanMatcher`](fuzzy_matcher::smith_waterman::SmithWatermanMatcher)
//! scores one pattern against one candidate and reports the matched
//! character positions; the [`FuzzyEngine`](engine::fuzzy::FuzzyEngine) runs
//! it over a candidate list and returns a stable, total ranking.
//!
//! ```
//! use jumpfuzz::{find_match, rank};
//!
//! let m = find_match("fm", "fuzzy_match.ts", true, false).unwrap();
//! assert_eq!(m.positions, Some(vec![0, 6]));
//!
//! let ranked = rank("ab", &["acb", "ab", "xyz"], false);
//! assert_eq!(ranked[0].text, "ab");
//! assert_eq!(ranked.len(), 2);
//! ```

#[macro_use]
extern crate log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod engine;
pub mod fuzzy_matcher;
pub mod item;

pub use crate::engine::fuzzy::{FuzzyEngine, FuzzyEngineBuilder, RankedMatch};
pub use crate::fuzzy_matcher::smith_waterman::SmithWatermanMatcher;
pub use crate::fuzzy_matcher::{FuzzyMatcher, MatchIndices, MatchResult, ScoreType};
pub use crate::item::{Rank, RankBuilder, RankCriteria};

/// Case policy for comparisons. There is no "smart" variant: whoever builds
/// the query decides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseMatching {
    /// `a` only matches `a`.
    Respect,
    /// ASCII letters match regardless of case.
    #[default]
    Ignore,
}

impl From<bool> for CaseMatching {
    /// `true` means case-sensitive.
    fn from(case_sensitive: bool) -> Self {
        if case_sensitive {
            CaseMatching::Respect
        } else {
            CaseMatching::Ignore
        }
    }
}

/// Match `pattern` against `text`.
///
/// Returns `None` when `pattern` is not an ordered subsequence of `text`.
/// `positions` is only computed when `compute_positions` is set; `start` and
/// `end` always are.
pub fn find_match(pattern: &str, text: &str, compute_positions: bool, case_sensitive: bool) -> Option<MatchResult> {
    SmithWatermanMatcher::new(case_sensitive.into()).match_result(text, pattern, compute_positions)
}

/// Rank `candidates` against `query`, best first, dropping non-matches.
pub fn rank<'a, S: AsRef<str>>(query: &str, candidates: &'a [S], case_sensitive: bool) -> Vec<RankedMatch<'a>> {
    FuzzyEngine::builder()
        .query(query)
        .case(case_sensitive.into())
        .build()
        .rank(candidates)
}
