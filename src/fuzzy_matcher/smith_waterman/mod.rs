//! Smith-Waterman fuzzy matching algorithm.
//!
//! A semi-global alignment of the pattern against the choice string: every
//! pattern character must be matched, in order, but the alignment may start
//! and end anywhere in the choice. Skipped choice characters cost an affine
//! gap penalty; matched characters earn a base score plus a bonus that
//! depends on their character class and that of their predecessor.
//!
//! ## Key design choices
//!
//! - **Feasibility first**: a greedy forward scan rejects non-subsequences
//!   before any DP work, and doubles as the lower edge of the band.
//! - **Exact runs**: consecutive matches are scored against the bonus of the
//!   run's first character. Each cell keeps its run-head score, and the best
//!   run per head bonus rolls along the diagonal, so the optimum is exact
//!   and the fill stays O(n·m).
//! - **Row-range banding**: row `i` only computes the columns between the
//!   earliest and latest positions pattern char `i` can take in any complete
//!   alignment.
//! - **Per-thread scratch**: the matrix and helper buffers live in
//!   `ThreadLocal`s, so one matcher can be shared across worker threads and
//!   reused on every keystroke without reallocating.

mod algo;
mod atom;
mod banding;
mod bonus;
mod constants;
mod matrix;
mod prefilter;
#[cfg(test)]
mod tests;

use std::cell::RefCell;

use thread_local::ThreadLocal;

use self::algo::{fill, traceback_begin, traceback_indices};
use self::atom::Atom;
use self::banding::Band;
use self::bonus::precompute_bonuses;
use self::matrix::SWMatrix;
use self::prefilter::first_match_cols;
use crate::CaseMatching;
use crate::fuzzy_matcher::{FuzzyMatcher, MatchIndices, ScoreType};

type Score = i32;

/// How much of the alignment the caller wants back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Trace {
    /// Score only.
    None,
    /// Score, first and last matched columns.
    Range,
    /// Score and every matched column.
    Indices,
}

/// What a single alignment produced, in character indices.
enum Aligned {
    Score(Score),
    Range(Score, usize, usize),
    Indices(Score, MatchIndices),
}

#[derive(Default, Debug)]
struct Scratch {
    matrix: SWMatrix,
    bonuses: Vec<Score>,
    band: Band,
}

/// Smith-Waterman fuzzy matcher with affine gap penalties and
/// class-transition bonuses.
#[derive(Debug, Default)]
pub struct SmithWatermanMatcher {
    pub(crate) case: CaseMatching,
    scratch: ThreadLocal<RefCell<Scratch>>,
    #[allow(clippy::type_complexity)]
    char_buf: ThreadLocal<RefCell<(Vec<char>, Vec<char>)>>,
}

impl SmithWatermanMatcher {
    /// Create a new `SmithWatermanMatcher` with the given case policy.
    pub fn new(case: CaseMatching) -> Self {
        Self {
            case,
            ..Default::default()
        }
    }

    pub fn respect_case(mut self) -> Self {
        self.case = CaseMatching::Respect;
        self
    }

    pub fn ignore_case(mut self) -> Self {
        self.case = CaseMatching::Ignore;
        self
    }

    /// Run the alignment over slices of atoms.
    fn align<C: Atom>(&self, cho: &[C], pat: &[C], trace: Trace) -> Option<Aligned> {
        let respect_case = self.case == CaseMatching::Respect;
        let mut scratch = self.scratch.get_or(|| RefCell::new(Scratch::default())).borrow_mut();
        let Scratch { matrix, bonuses, band } = &mut *scratch;

        if !first_match_cols(pat, cho, respect_case, &mut band.lo) {
            return None;
        }
        if !band.compute_hi(pat, cho, respect_case) {
            return None;
        }
        precompute_bonuses(cho, bonuses);

        let (score, best_j) = fill(matrix, pat, cho, bonuses, band, respect_case)?;
        let n = pat.len();
        let aligned = match trace {
            Trace::None => Aligned::Score(score),
            Trace::Range => Aligned::Range(score, traceback_begin(matrix, n, best_j), best_j + 1),
            Trace::Indices => Aligned::Indices(score, traceback_indices(matrix, n, best_j)),
        };
        Some(aligned)
    }

    fn run(&self, choice: &str, pattern: &str, trace: Trace) -> Option<Aligned> {
        if pattern.is_empty() {
            return Some(match trace {
                Trace::None => Aligned::Score(0),
                Trace::Range => Aligned::Range(0, 0, 0),
                Trace::Indices => Aligned::Indices(0, MatchIndices::new()),
            });
        }

        // Fast path for ASCII matching
        if choice.is_ascii() && pattern.is_ascii() {
            if pattern.len() > choice.len() {
                return None;
            }
            return self.align(choice.as_bytes(), pattern.as_bytes(), trace);
        }

        let mut bufs = self
            .char_buf
            .get_or(|| RefCell::new((Vec::new(), Vec::new())))
            .borrow_mut();
        let (ref mut pat_buf, ref mut cho_buf) = *bufs;
        pat_buf.clear();
        pat_buf.extend(pattern.chars());
        cho_buf.clear();
        cho_buf.extend(choice.chars());
        if pat_buf.len() > cho_buf.len() {
            return None;
        }
        self.align(cho_buf, pat_buf, trace)
    }
}

// ---------------------------------------------------------------------------
// FuzzyMatcher trait implementation
// ---------------------------------------------------------------------------

impl FuzzyMatcher for SmithWatermanMatcher {
    fn fuzzy_match(&self, choice: &str, pattern: &str) -> Option<ScoreType> {
        match self.run(choice, pattern, Trace::None)? {
            Aligned::Score(s) | Aligned::Range(s, ..) | Aligned::Indices(s, _) => Some(s as ScoreType),
        }
    }

    fn fuzzy_match_range(&self, choice: &str, pattern: &str) -> Option<(ScoreType, usize, usize)> {
        match self.run(choice, pattern, Trace::Range)? {
            Aligned::Range(s, begin, end) => Some((s as ScoreType, begin, end)),
            _ => None,
        }
    }

    fn fuzzy_indices(&self, choice: &str, pattern: &str) -> Option<(ScoreType, MatchIndices)> {
        match self.run(choice, pattern, Trace::Indices)? {
            Aligned::Indices(s, indices) => Some((s as ScoreType, indices)),
            _ => None,
        }
    }
}
