//! Per-row column bands that bound the DP to reachable cells

use super::Atom;

/// Per-row column bounds (inclusive, 0-indexed) of cells that can lie on a
/// complete alignment.
///
/// `lo` comes from the greedy forward scan: pattern char `i` can never sit
/// left of where the greedy scan put it. `hi` is the mirror image, scanning
/// from the end of the choice.
#[derive(Default, Debug)]
pub(super) struct Band {
    pub(super) lo: Vec<usize>,
    pub(super) hi: Vec<usize>,
}

impl Band {
    /// Fill `hi` given an already computed `lo`. Returns `false` if the
    /// backward scan fails, which cannot happen once the forward scan
    /// succeeded.
    pub(super) fn compute_hi<C: Atom>(&mut self, pat: &[C], cho: &[C], respect_case: bool) -> bool {
        let n = pat.len();
        self.hi.clear();
        self.hi.resize(n, 0);
        let mut end = cho.len();
        for i in (0..n).rev() {
            match cho[..end].iter().rposition(|&c| pat[i].eq(c, respect_case)) {
                Some(pos) => {
                    self.hi[i] = pos;
                    end = pos;
                }
                None => return false,
            }
        }
        true
    }

    #[inline(always)]
    pub(super) fn row(&self, i: usize) -> (usize, usize) {
        (self.lo[i], self.hi[i])
    }
}
