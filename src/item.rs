//! Rank keys used to order matched candidates.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::fuzzy_matcher::ScoreType;

/// Maximum number of tiebreak criteria a rank key holds.
const MAX_CRITERIA: usize = 5;

/// One sort criterion. Plain variants sort "better first" (higher score,
/// tighter span, earlier begin/end, shorter text); `Neg*` variants reverse
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankCriteria {
    Score,
    Span,
    Begin,
    End,
    Length,
    NegScore,
    NegSpan,
    NegBegin,
    NegEnd,
    NegLength,
}

impl FromStr for RankCriteria {
    type Err = String;

    /// Accepts `score`, `span`, `begin`, `end`, `length`, each optionally
    /// prefixed with `-` to reverse it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use RankCriteria::*;
        let criteria = match s.trim() {
            "score" => Score,
            "span" => Span,
            "begin" => Begin,
            "end" => End,
            "length" => Length,
            "-score" => NegScore,
            "-span" => NegSpan,
            "-begin" => NegBegin,
            "-end" => NegEnd,
            "-length" => NegLength,
            other => return Err(format!("unknown tiebreak criteria: {other:?}")),
        };
        Ok(criteria)
    }
}

/// Everything the ranking knows about one match, plus its precomputed key.
///
/// Ranks compare by key, then by `index`, so the order is total and equal
/// keys keep the candidates' input order.
#[derive(Debug, Clone, Copy)]
pub struct Rank {
    pub score: ScoreType,
    pub begin: usize,
    pub end: usize,
    pub length: usize,
    pub index: usize,
    key: [i64; MAX_CRITERIA],
}

impl PartialEq for Rank {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rank {}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key).then(self.index.cmp(&other.index))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Builds [`Rank`]s from match data according to a list of criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankBuilder {
    criteria: Vec<RankCriteria>,
}

impl Default for RankBuilder {
    /// Score descending, then tighter span first.
    fn default() -> Self {
        Self {
            criteria: vec![RankCriteria::Score, RankCriteria::Span],
        }
    }
}

impl RankBuilder {
    /// Keep the first occurrence of each criteria, up to the key capacity.
    pub fn new(criteria: Vec<RankCriteria>) -> Self {
        let mut deduped: Vec<RankCriteria> = Vec::with_capacity(MAX_CRITERIA);
        for c in criteria {
            if deduped.contains(&c) {
                continue;
            }
            if deduped.len() == MAX_CRITERIA {
                warn!("ignoring tiebreak criteria beyond the first {MAX_CRITERIA}");
                break;
            }
            deduped.push(c);
        }
        Self { criteria: deduped }
    }

    pub fn criteria(&self) -> &[RankCriteria] {
        &self.criteria
    }

    /// `begin..end` is the half-open matched span, `length` the candidate's
    /// length in characters, `index` its position in the input.
    pub fn build_rank(&self, score: ScoreType, begin: usize, end: usize, length: usize, index: usize) -> Rank {
        let span = end.saturating_sub(begin) as i64;
        let mut key = [0i64; MAX_CRITERIA];
        for (slot, criteria) in key.iter_mut().zip(&self.criteria) {
            *slot = match criteria {
                RankCriteria::Score => -score,
                RankCriteria::Span => span,
                RankCriteria::Begin => begin as i64,
                RankCriteria::End => end as i64,
                RankCriteria::Length => length as i64,
                RankCriteria::NegScore => score,
                RankCriteria::NegSpan => -span,
                RankCriteria::NegBegin => -(begin as i64),
                RankCriteria::NegEnd => -(end as i64),
                RankCriteria::NegLength => -(length as i64),
            };
        }
        Rank {
            score,
            begin,
            end,
            length,
            index,
            key,
        }
    }
}
