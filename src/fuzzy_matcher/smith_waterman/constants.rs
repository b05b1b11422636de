// ---------------------------------------------------------------------------
// Scoring constants
// ---------------------------------------------------------------------------
use super::Score;

/// Points awarded for each matched character.
pub(super) const SCORE_MATCH: Score = 16;

/// Cost of the first skipped character between two matched characters.
pub(super) const SCORE_GAP_START: Score = -3;

/// Cost of each further skipped character in the same gap.
pub(super) const SCORE_GAP_EXTENSION: Score = -1;

/// Word character right after a non-word character.
pub(super) const BONUS_BOUNDARY: Score = 8;

/// Word character right after whitespace (or at the start of the text).
pub(super) const BONUS_BOUNDARY_WHITE: Score = 10;

/// Word character right after one of the `DELIMITERS`.
pub(super) const BONUS_BOUNDARY_DELIMITER: Score = 9;

/// The matched character is itself a non-word character.
pub(super) const BONUS_NON_WORD: Score = 8;

/// lowerUpper or letter-to-digit transition.
pub(super) const BONUS_CAMEL123: Score = 7;

/// Minimum bonus for a character matched right after the previous one.
pub(super) const BONUS_CONSECUTIVE: Score = 4;

/// Applied to the bonus of a match at text index 0.
pub(super) const BONUS_FIRST_CHAR_MULTIPLIER: Score = 2;

/// Path and identifier separators that rank a following word start between
/// whitespace and plain non-word characters.
pub(super) const DELIMITERS: &[u8] = b"/\\,:;|.";

/// Score of a cell no alignment can reach.
pub(super) const UNREACHABLE: Score = Score::MIN / 2;
