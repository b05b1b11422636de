//! Fuzzy matching primitives: the matcher trait and its result types.

pub mod smith_waterman;
#[cfg(test)]
pub(crate) mod util;

/// Score of a match. Higher is better; only meaningful for ordering.
pub type ScoreType = i64;
/// Character (not byte) index into a choice string.
pub type IndexType = usize;
/// Matched character indices, strictly increasing.
pub type MatchIndices = Vec<IndexType>;

/// Outcome of matching one pattern against one text.
///
/// `start..end` is the half-open span from the leftmost to the rightmost
/// matched character. When `positions` is present it holds exactly one index
/// per pattern character, with `start == positions[0]` and
/// `end == positions.last() + 1`. An empty pattern yields a zero score, an
/// empty span at 0 and, when requested, empty positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResult {
    pub score: ScoreType,
    pub start: usize,
    pub end: usize,
    pub positions: Option<MatchIndices>,
}

impl MatchResult {
    /// Width of the matched span.
    pub fn span(&self) -> usize {
        self.end - self.start
    }
}

pub trait FuzzyMatcher: Send + Sync {
    /// Score `pattern` against `choice`, or `None` if it is not a subsequence.
    fn fuzzy_match(&self, choice: &str, pattern: &str) -> Option<ScoreType>;

    /// Score plus the half-open span of the best alignment.
    fn fuzzy_match_range(&self, choice: &str, pattern: &str) -> Option<(ScoreType, usize, usize)>;

    /// Score plus the index of every matched character.
    fn fuzzy_indices(&self, choice: &str, pattern: &str) -> Option<(ScoreType, MatchIndices)>;

    /// Full [`MatchResult`]; `positions` is only filled when asked for.
    fn match_result(&self, choice: &str, pattern: &str, compute_positions: bool) -> Option<MatchResult> {
        if !compute_positions {
            let (score, start, end) = self.fuzzy_match_range(choice, pattern)?;
            return Some(MatchResult {
                score,
                start,
                end,
                positions: None,
            });
        }
        let (score, positions) = self.fuzzy_indices(choice, pattern)?;
        let (start, end) = match (positions.first(), positions.last()) {
            (Some(&first), Some(&last)) => (first, last + 1),
            _ => (0, 0),
        };
        Some(MatchResult {
            score,
            start,
            end,
            positions: Some(positions),
        })
    }
}
