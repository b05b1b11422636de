//! The alignment itself: matrix fill, selection and traceback

use crate::fuzzy_matcher::{IndexType, MatchIndices};

use super::banding::Band;
use super::constants::*;
use super::matrix::{CELL_UNREACHABLE, Cell, NO_COL, RUNS_NONE, Runs, SWMatrix, run_slot};
use super::{Atom, Score};

/// Score of a match at column `j`, before any consecutive bonus.
#[inline(always)]
fn match_score(bonuses: &[Score], j: usize) -> Score {
    let multiplier = if j == 0 { BONUS_FIRST_CHAR_MULTIPLIER } else { 1 };
    SCORE_MATCH + bonuses[j] * multiplier
}

/// Runs ending at `(i, j)`, given that `cho[j]` matches `pat[i]`, and the
/// best of them with its length.
///
/// A run of length `k` has its head at `(i - k, j - k)`, entered through a
/// gap (or as the first pattern char). Every character after the head earns
/// its own class bonus plus `max(BONUS_CONSECUTIVE, head bonus)`. That
/// per-char bonus takes only a handful of values, so the best run for each
/// of them is carried along the diagonal and extended in constant time.
#[inline]
fn extend_runs(buf: &SWMatrix, bonuses: &[Score], i: usize, j: usize) -> (Runs, Option<(Score, u32)>) {
    let mut runs = RUNS_NONE;
    let diag = buf.get(i - 1, j - 1);
    if !diag.reachable() {
        return (runs, None);
    }
    let prev = buf.prev_runs(j - 1);
    let head_slot = run_slot(bonuses[j - 1]);
    let step = SCORE_MATCH + bonuses[j];

    let mut best: Option<(Score, u32)> = None;
    for (slot, run) in runs.iter_mut().enumerate() {
        let per_char = BONUS_CONSECUTIVE + slot as Score;
        let (prev_score, prev_len) = prev[slot];
        let mut cand = (prev_score > UNREACHABLE).then_some((prev_score + step + per_char, prev_len + 1));
        if slot == head_slot && diag.start > UNREACHABLE {
            let fresh = diag.start + step + per_char;
            // Longest run wins ties.
            if cand.is_none_or(|(s, _)| fresh > s) {
                cand = Some((fresh, 1));
            }
        }
        let Some((score, len)) = cand else {
            continue;
        };
        *run = (score, len);
        if best.is_none_or(|(s, l)| score > s || (score == s && len > l)) {
            best = Some((score, len));
        }
    }
    (runs, best)
}

/// Fill the matrix row by row, each row restricted to its band.
///
/// Returns the best score of the last row and its column (leftmost on ties),
/// or `None` when no complete alignment exists.
pub(super) fn fill<C: Atom>(
    buf: &mut SWMatrix,
    pat: &[C],
    cho: &[C],
    bonuses: &[Score],
    band: &Band,
    respect_case: bool,
) -> Option<(Score, usize)> {
    let n = pat.len();
    let col_off = band.lo[0];
    let cols = band.hi[n - 1] - col_off + 1;
    buf.reset(n, col_off, cols);

    // Row 0: every match is a run head.
    let (lo, hi) = band.row(0);
    for j in lo..=hi {
        if pat[0].eq(cho[j], respect_case) {
            let s = match_score(bonuses, j);
            buf.set(
                0,
                j,
                Cell {
                    score: s,
                    start: s,
                    gap_src: NO_COL,
                    run: 0,
                },
            );
            buf.set_runs(j, RUNS_NONE);
        }
    }
    buf.next_row();

    for i in 1..n {
        let pi = pat[i];
        let (prev_lo, _) = band.row(i - 1);
        let (lo, hi) = band.row(i);

        // Best previous-row alignment that leaves at least one column
        // unmatched before `j`, already charged for the gap.
        let mut gap = UNREACHABLE;
        let mut gap_src = NO_COL;

        for j in (prev_lo + 1)..=hi {
            if gap > UNREACHABLE {
                gap += SCORE_GAP_EXTENSION;
            }
            if j >= prev_lo + 2 {
                let src = buf.get(i - 1, j - 2);
                // Nearest source wins ties.
                if src.reachable() && src.score + SCORE_GAP_START >= gap {
                    gap = src.score + SCORE_GAP_START;
                    gap_src = (j - 2) as u32;
                }
            }

            if j < lo || !pi.eq(cho[j], respect_case) {
                continue;
            }

            let mut cell = CELL_UNREACHABLE;
            if gap > UNREACHABLE {
                let s = gap + match_score(bonuses, j);
                cell = Cell {
                    score: s,
                    start: s,
                    gap_src,
                    run: 0,
                };
            }
            let (runs, best_run) = extend_runs(buf, bonuses, i, j);
            buf.set_runs(j, runs);
            // A run beats a gap entry of equal score.
            if let Some((s, run)) = best_run
                && s >= cell.score
            {
                cell.score = s;
                cell.run = run;
            }
            if cell.reachable() {
                buf.set(i, j, cell);
            }
        }
        buf.next_row();
    }

    let (lo, hi) = band.row(n - 1);
    let mut best: Option<(Score, usize)> = None;
    for j in lo..=hi {
        let c = buf.get(n - 1, j);
        if c.reachable() && best.is_none_or(|(s, _)| c.score > s) {
            best = Some((c.score, j));
        }
    }
    best
}

/// Walk back from `(n - 1, best_j)`, calling `visit` with every matched
/// column from right to left.
fn traceback(buf: &SWMatrix, n: usize, best_j: usize, mut visit: impl FnMut(usize)) {
    let mut i = n - 1;
    let mut j = best_j;
    // Whether `(i, j)` must be read through its run-head score.
    let mut at_head = false;
    loop {
        let cell = buf.get(i, j);
        if !at_head && cell.run > 0 {
            let run = cell.run as usize;
            for t in 0..run {
                visit(j - t);
            }
            i -= run;
            j -= run;
            at_head = true;
            continue;
        }
        visit(j);
        if i == 0 {
            break;
        }
        debug_assert_ne!(cell.gap_src, NO_COL);
        j = cell.gap_src as usize;
        i -= 1;
        at_head = false;
    }
}

/// Matched columns in increasing order.
pub(super) fn traceback_indices(buf: &SWMatrix, n: usize, best_j: usize) -> MatchIndices {
    let mut indices: MatchIndices = Vec::with_capacity(n);
    traceback(buf, n, best_j, |j| indices.push(j as IndexType));
    // Traceback produces indices in reverse order.
    indices.reverse();
    indices
}

/// Leftmost matched column; cheaper than collecting every index.
pub(super) fn traceback_begin(buf: &SWMatrix, n: usize, best_j: usize) -> usize {
    let mut begin = best_j;
    traceback(buf, n, best_j, |j| begin = j);
    begin
}
