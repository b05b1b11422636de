//! Feasibility check running before the DP

use super::Atom;

/// Greedy forward scan: is `pat` an ordered subsequence of `cho`?
///
/// On success `first` holds, for every pattern character, the earliest
/// column at which it can be matched in any alignment. On failure the DP is
/// skipped entirely; acceptance is decided here and nowhere else.
pub(super) fn first_match_cols<C: Atom>(pat: &[C], cho: &[C], respect_case: bool, first: &mut Vec<usize>) -> bool {
    first.clear();
    let mut start = 0usize;
    for &p in pat {
        match p.find_first_in(&cho[start..], respect_case) {
            Some(pos) => {
                first.push(start + pos);
                start += pos + 1;
            }
            None => return false,
        }
    }
    true
}

/// Boolean form of [`first_match_cols`] without recording columns.
#[cfg(test)]
pub(super) fn is_subsequence<C: Atom>(pat: &[C], cho: &[C], respect_case: bool) -> bool {
    let mut rest = cho.iter();
    pat.iter().all(|&p| rest.any(|&c| p.eq(c, respect_case)))
}
