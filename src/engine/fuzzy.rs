use std::fmt::{Display, Error, Formatter};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::CaseMatching;
use crate::fuzzy_matcher::smith_waterman::SmithWatermanMatcher;
use crate::fuzzy_matcher::{FuzzyMatcher, MatchResult};
use crate::item::{Rank, RankBuilder};

//------------------------------------------------------------------------------
// Fuzzy engine
#[derive(Default)]
pub struct FuzzyEngineBuilder {
    query: String,
    case: CaseMatching,
    rank_builder: Arc<RankBuilder>,
    /// When true, only the matched span is computed, not every matched
    /// position (useful when nothing is highlighted).
    filter_mode: bool,
}

impl FuzzyEngineBuilder {
    pub fn query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    pub fn case(mut self, case: CaseMatching) -> Self {
        self.case = case;
        self
    }

    pub fn rank_builder(mut self, rank_builder: Arc<RankBuilder>) -> Self {
        self.rank_builder = rank_builder;
        self
    }

    pub fn filter_mode(mut self, filter_mode: bool) -> Self {
        self.filter_mode = filter_mode;
        self
    }

    pub fn build(self) -> FuzzyEngine {
        debug!(
            "Initialized fuzzy engine (case: {:?}, tiebreak: {:?}, filter_mode: {})",
            self.case,
            self.rank_builder.criteria(),
            self.filter_mode
        );
        FuzzyEngine {
            matcher: Box::new(SmithWatermanMatcher::new(self.case)),
            query: self.query,
            rank_builder: self.rank_builder,
            filter_mode: self.filter_mode,
        }
    }
}

/// A candidate that matched, with its rank and match details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedMatch<'a> {
    pub text: &'a str,
    pub rank: Rank,
    pub result: MatchResult,
}

/// The fuzzy matching engine: one query against many candidates.
///
/// Every call is independent: nothing from a previous query or candidate
/// list is remembered apart from the matcher's scratch buffers.
pub struct FuzzyEngine {
    query: String,
    matcher: Box<dyn FuzzyMatcher>,
    rank_builder: Arc<RankBuilder>,
    filter_mode: bool,
}

impl FuzzyEngine {
    /// Returns a default builder for chaining
    pub fn builder() -> FuzzyEngineBuilder {
        FuzzyEngineBuilder::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Match the query against a single candidate.
    pub fn match_item(&self, text: &str) -> Option<MatchResult> {
        self.matcher.match_result(text, &self.query, !self.filter_mode)
    }

    fn rank_item<'a>(&self, index: usize, text: &'a str) -> Option<RankedMatch<'a>> {
        let result = self.match_item(text)?;
        let length = text.chars().count();
        let rank = self
            .rank_builder
            .build_rank(result.score, result.start, result.end, length, index);
        Some(RankedMatch { text, rank, result })
    }

    /// Match every candidate and return the matches best first.
    ///
    /// Ties on every criteria keep the input order, so a list that does not
    /// change between keystrokes does not reshuffle.
    pub fn rank<'a, S: AsRef<str>>(&self, candidates: &'a [S]) -> Vec<RankedMatch<'a>> {
        let mut ranked: Vec<RankedMatch<'a>> = candidates
            .iter()
            .enumerate()
            .filter_map(|(index, c)| self.rank_item(index, c.as_ref()))
            .collect();
        // The input index is part of the rank, so the order is already total.
        ranked.sort_unstable_by(|a, b| a.rank.cmp(&b.rank));
        trace!("{self}: {} of {} candidates matched", ranked.len(), candidates.len());
        ranked
    }

    /// Same result as [`rank`](Self::rank), scoring candidates on the rayon
    /// thread pool.
    #[cfg(feature = "parallel")]
    pub fn par_rank<'a, S: AsRef<str> + Sync>(&self, candidates: &'a [S]) -> Vec<RankedMatch<'a>> {
        let mut ranked: Vec<RankedMatch<'a>> = candidates
            .par_iter()
            .enumerate()
            .filter_map(|(index, c)| self.rank_item(index, c.as_ref()))
            .collect();
        ranked.par_sort_unstable_by(|a, b| a.rank.cmp(&b.rank));
        trace!("{self}: {} of {} candidates matched", ranked.len(), candidates.len());
        ranked
    }
}

impl Display for FuzzyEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Fuzzy: {})", self.query)
    }
}
