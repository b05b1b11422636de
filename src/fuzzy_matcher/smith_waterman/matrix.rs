//! Base structs for the matching algorithm: Cell & SWMatrix

use super::Score;
use super::constants::{BONUS_BOUNDARY_WHITE, BONUS_CONSECUTIVE, UNREACHABLE};

/// Marker for "no predecessor column".
pub(super) const NO_COL: u32 = u32::MAX;

/// One DP cell: the best alignment of `pat[..=i]` whose last match is `cho[j]`.
///
/// Two scores are kept because a consecutive run is scored against the bonus
/// of its first character: `start` is the best alignment in which `cho[j]`
/// begins a run (entered through a gap, or the first pattern char), `score`
/// is the best overall. `run > 0` means `score` comes from a run of that many
/// consecutive matches ending here, whose head is `(i - run, j - run)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) struct Cell {
    pub(super) score: Score,
    pub(super) start: Score,
    /// Column of the previous match on the `start` path.
    pub(super) gap_src: u32,
    pub(super) run: u32,
}

pub(super) const CELL_UNREACHABLE: Cell = Cell {
    score: UNREACHABLE,
    start: UNREACHABLE,
    gap_src: NO_COL,
    run: 0,
};

impl Cell {
    #[inline(always)]
    pub(super) fn reachable(self) -> bool {
        self.score > UNREACHABLE
    }
}

/// One slot per possible run bonus, `BONUS_CONSECUTIVE..=BONUS_BOUNDARY_WHITE`.
pub(super) const RUN_SLOTS: usize = (BONUS_BOUNDARY_WHITE - BONUS_CONSECUTIVE + 1) as usize;

/// Best consecutive run ending at a cell for each per-char run bonus:
/// `(score, length)`, `UNREACHABLE` when there is none.
pub(super) type Runs = [(Score, u32); RUN_SLOTS];

pub(super) const RUNS_NONE: Runs = [(UNREACHABLE, 0); RUN_SLOTS];

/// Slot of a run whose head has raw bonus `head_bonus`.
#[inline(always)]
pub(super) fn run_slot(head_bonus: Score) -> usize {
    (BONUS_CONSECUTIVE.max(head_bonus) - BONUS_CONSECUTIVE) as usize
}

/// Flat `rows * cols` matrix. Column 0 is text column `col_off`.
///
/// Run state is only ever read from the row above, so it is kept in two
/// rolling rows instead of per cell.
#[derive(Default, Debug)]
pub(super) struct SWMatrix {
    pub(super) data: Vec<Cell>,
    pub(super) cols: usize,
    pub(super) rows: usize,
    pub(super) col_off: usize,
    runs_prev: Vec<Runs>,
    runs_cur: Vec<Runs>,
}

impl SWMatrix {
    /// Resize for a new alignment and mark every used cell unreachable.
    /// The backing allocation only ever grows.
    pub(super) fn reset(&mut self, rows: usize, col_off: usize, cols: usize) {
        let needed = rows * cols;
        if needed > self.data.len() {
            self.data.resize(needed, CELL_UNREACHABLE);
        }
        self.data[..needed].fill(CELL_UNREACHABLE);
        // Run rows are only read behind a reachable cell, which always
        // writes its runs first, so stale entries need no clearing.
        if cols > self.runs_cur.len() {
            self.runs_prev.resize(cols, RUNS_NONE);
            self.runs_cur.resize(cols, RUNS_NONE);
        }
        self.rows = rows;
        self.cols = cols;
        self.col_off = col_off;
    }

    /// Cell for pattern row `i` and text column `j`; columns left of the
    /// stored window are unreachable.
    #[inline(always)]
    pub(super) fn get(&self, i: usize, j: usize) -> Cell {
        if j < self.col_off {
            return CELL_UNREACHABLE;
        }
        self.data[i * self.cols + (j - self.col_off)]
    }

    #[inline(always)]
    pub(super) fn set(&mut self, i: usize, j: usize, cell: Cell) {
        let idx = i * self.cols + (j - self.col_off);
        self.data[idx] = cell;
    }

    /// Runs ending at text column `j` of the previous row.
    #[inline(always)]
    pub(super) fn prev_runs(&self, j: usize) -> Runs {
        self.runs_prev[j - self.col_off]
    }

    #[inline(always)]
    pub(super) fn set_runs(&mut self, j: usize, runs: Runs) {
        let idx = j - self.col_off;
        self.runs_cur[idx] = runs;
    }

    /// Make the row just filled the previous row.
    #[inline(always)]
    pub(super) fn next_row(&mut self) {
        std::mem::swap(&mut self.runs_prev, &mut self.runs_cur);
    }
}
