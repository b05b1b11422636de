//! Character classes and the per-position bonus table.

use super::Score;
use super::atom::Atom;
use super::constants::*;

/// Class of a single character, as far as bonuses are concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum CharClass {
    Whitespace,
    NonWord,
    Delimiter,
    Lower,
    Upper,
    Number,
}

impl CharClass {
    #[inline(always)]
    fn is_word(self) -> bool {
        matches!(self, CharClass::Lower | CharClass::Upper | CharClass::Number)
    }

    #[inline(always)]
    fn is_letter(self) -> bool {
        matches!(self, CharClass::Lower | CharClass::Upper)
    }
}

/// Bonus earned by matching a character of class `cur` preceded by one of
/// class `prev`. Only the highest-precedence rule applies.
#[inline]
pub(super) fn bonus_for(prev: CharClass, cur: CharClass) -> Score {
    if cur.is_word() {
        match prev {
            CharClass::Whitespace => return BONUS_BOUNDARY_WHITE,
            CharClass::Delimiter => return BONUS_BOUNDARY_DELIMITER,
            CharClass::NonWord => return BONUS_BOUNDARY,
            _ => {}
        }
        let camel = prev == CharClass::Lower && cur == CharClass::Upper;
        let digit_after_letter = prev.is_letter() && cur == CharClass::Number;
        return if camel || digit_after_letter { BONUS_CAMEL123 } else { 0 };
    }
    match cur {
        CharClass::Whitespace => BONUS_BOUNDARY_WHITE,
        _ => BONUS_NON_WORD,
    }
}

/// Bonus for `cur` given its predecessor; the start of the text behaves as
/// if preceded by whitespace.
#[inline]
pub(super) fn classify<C: Atom>(prev: Option<C>, cur: C) -> Score {
    let prev = prev.map_or(CharClass::Whitespace, |c| c.class());
    bonus_for(prev, cur.class())
}

/// Fill `buf` with the class bonus of every position of `cho`.
///
/// The values are raw class bonuses: the first-char multiplier is applied by
/// the DP, which also needs the raw value when the character heads a
/// consecutive run.
pub(super) fn precompute_bonuses<C: Atom>(cho: &[C], buf: &mut Vec<Score>) {
    buf.clear();
    let Some(&first) = cho.first() else {
        return;
    };
    buf.push(classify(None, first));
    buf.extend(cho.windows(2).map(|w| classify(Some(w[0]), w[1])));
}
