use proptest::prelude::*;

use super::bonus::precompute_bonuses;
use super::constants::*;
use super::prefilter::is_subsequence;
use super::*;
use crate::fuzzy_matcher::{FuzzyMatcher, MatchResult};

fn matcher() -> SmithWatermanMatcher {
    SmithWatermanMatcher::default()
}

fn matcher_case() -> SmithWatermanMatcher {
    SmithWatermanMatcher::default().respect_case()
}

fn score(choice: &str, pattern: &str) -> Option<i64> {
    matcher().fuzzy_match(choice, pattern)
}

fn indices(choice: &str, pattern: &str) -> Option<MatchIndices> {
    matcher().fuzzy_indices(choice, pattern).map(|(_, v)| v)
}

// ----- Basic matching -----

#[test]
fn empty_pattern_always_matches() {
    assert_eq!(score("anything", ""), Some(0));
    assert_eq!(score("", ""), Some(0));
    let res = matcher().match_result("anything", "", true).unwrap();
    assert_eq!(
        res,
        MatchResult {
            score: 0,
            start: 0,
            end: 0,
            positions: Some(vec![]),
        }
    );
    let res = matcher().match_result("anything", "", false).unwrap();
    assert_eq!((res.score, res.start, res.end, res.positions), (0, 0, 0, None));
}

#[test]
fn empty_choice_never_matches() {
    assert!(score("", "a").is_none());
}

#[test]
fn longer_pattern_never_matches() {
    assert!(score("abc", "abcd").is_none());
    assert!(score("é", "éé").is_none());
}

#[test]
fn no_match_returns_none() {
    assert!(score("abc", "xyz").is_none());
    assert!(score("abc", "cba").is_none());
}

#[test]
fn subsequence_match() {
    assert!(score("axbycz", "abc").is_some());
    assert_eq!(indices("axbycz", "abc").unwrap(), vec![0, 2, 4]);
}

#[test]
fn exact_match_is_fully_consecutive() {
    assert_eq!(indices("hello", "hello").unwrap(), vec![0, 1, 2, 3, 4]);
    // 36 for the doubled word start, then 16 + max(4, 10) per character.
    assert_eq!(matcher_case().fuzzy_match("abc", "abc"), Some(88));
}

#[test]
fn long_patterns_are_not_truncated() {
    let choice = "a".repeat(50);
    let pattern = "a".repeat(40);
    let idx = indices(&choice, &pattern).unwrap();
    assert_eq!(idx, (0..40).collect::<Vec<_>>());
}

#[test]
fn long_gaps_give_negative_scores_not_misses() {
    let choice = format!("a{}b", "x".repeat(100));
    // 36 for `a`, -3 - 99 for the gap, 16 for `b`.
    assert_eq!(score(&choice, "ab"), Some(-50));
}

// ----- Case sensitivity -----

#[test]
fn case_sensitivity_flag() {
    assert!(matcher().fuzzy_match("README.md", "readme").is_some());
    assert!(matcher_case().fuzzy_match("README.md", "readme").is_none());
    assert!(matcher_case().fuzzy_match("README.md", "README").is_some());
    let relaxed = SmithWatermanMatcher::new(CaseMatching::Respect).ignore_case();
    assert!(relaxed.fuzzy_match("README.md", "readme").is_some());
}

#[test]
fn uppercase_pattern_does_not_imply_case_sensitivity() {
    assert!(matcher().fuzzy_match("readme.md", "README").is_some());
}

#[test]
fn positions_index_the_original_text() {
    assert_eq!(indices("FooBar", "fb").unwrap(), vec![0, 3]);
}

// ----- Scoring -----

#[test]
fn concrete_path_scenario() {
    let res = matcher().match_result("fuzzy_match.ts", "fm", true).unwrap();
    assert_eq!(res.start, 0);
    assert_eq!(res.end, 7);
    assert_eq!(res.positions, Some(vec![0, 6]));
    // `f`: 16 + 10 * 2; gap of 5: -3 - 4; `m` after `_`: 16 + 8.
    assert_eq!(res.score, 53);
}

#[test]
fn delimiter_boundary_beats_no_boundary() {
    let boundary = matcher_case().fuzzy_match("xy_ab", "ab").unwrap();
    let plain = matcher_case().fuzzy_match("xyzab", "ab").unwrap();
    assert_eq!((boundary, plain), (48, 36));
}

#[test]
fn consecutive_beats_gap_with_boundary() {
    let contiguous = matcher_case().fuzzy_match("ab", "ab").unwrap();
    let scattered = matcher_case().fuzzy_match("a_b", "ab").unwrap();
    assert_eq!((contiguous, scattered), (62, 57));
}

#[test]
fn boundary_ranks() {
    let white = score("x ab", "a").unwrap();
    let delimiter = score("x/ab", "a").unwrap();
    let plain = score("x_ab", "a").unwrap();
    let camel = score("xAb", "a").unwrap();
    let none = score("xab", "a").unwrap();
    assert!(white > delimiter && delimiter > plain && plain > camel && camel > none);
}

#[test]
fn start_of_string_bonus() {
    let at_start = score("abc", "a").unwrap();
    let at_mid = score(" abc", "a").unwrap();
    assert!(at_start > at_mid, "start={at_start} should beat mid={at_mid}");
}

#[test]
fn fewer_gaps_beats_more_gaps() {
    let one_gap = score("abxc", "abc").unwrap();
    let two_gaps = score("axbxc", "abc").unwrap();
    assert!(one_gap > two_gaps, "one_gap={one_gap} should beat two_gaps={two_gaps}");
}

#[test]
fn word_start_bonus() {
    let boundary = score("src/reader.rs", "reader").unwrap();
    let stitched = score("src/tui/header.rs", "reader").unwrap();
    assert!(
        boundary > stitched,
        "word-boundary={boundary} should beat stitched={stitched}"
    );
}

#[test]
fn camel_case_bonus() {
    let camel = score("FooBar", "fb").unwrap();
    let flat = score("foobar", "fb").unwrap();
    assert_eq!((camel, flat), (55, 48));
}

#[test]
fn digit_after_letter_bonus() {
    assert!(score("abc2", "2").unwrap() > score("ab12", "2").unwrap());
}

// ----- Alignment choice -----

#[test]
fn repeated_chars_pick_leftmost_best() {
    let res = matcher().match_result("banana", "aa", true).unwrap();
    assert_eq!(res.positions, Some(vec![1, 3]));
    assert_eq!(res.score, 29);
}

#[test]
fn later_consecutive_run_beats_long_gap() {
    let choice = format!("a{}ab", "x".repeat(20));
    let res = matcher().match_result(&choice, "ab", true).unwrap();
    assert_eq!(res.positions, Some(vec![21, 22]));
    assert_eq!(res.score, 36);
}

#[test]
fn early_word_start_beats_short_gap() {
    assert_eq!(indices("a_xab", "ab").unwrap(), vec![0, 4]);
}

#[test]
fn long_run_of_repeated_chars() {
    let pattern = "a".repeat(300);
    let res = matcher().match_result(&"a".repeat(3000), &pattern, true).unwrap();
    // Start-of-text head, then every char earns the head's bonus.
    assert_eq!(res.score, 36 + 26 * 299);
    assert_eq!(res.positions, Some((0..300).collect()));
}

#[test]
fn repeated_chars_cost_like_distinct_chars() {
    use std::time::{Duration, Instant};

    fn best_of_3(choice: &str, pattern: &str) -> Duration {
        let m = matcher();
        (0..3)
            .map(|_| {
                let t = Instant::now();
                assert!(m.fuzzy_indices(choice, pattern).is_some());
                t.elapsed()
            })
            .min()
            .unwrap()
    }

    let pattern = "a".repeat(300);
    // Every cell continues a run here, and none does there.
    let runs = best_of_3(&"a".repeat(3000), &pattern);
    let gaps = best_of_3(&"ab".repeat(1500), &pattern);
    assert!(runs < gaps * 20 + Duration::from_millis(50), "runs {runs:?}, gaps {gaps:?}");
}

// ----- Ordering sanity -----

#[test]
fn ordering_ab() {
    use crate::fuzzy_matcher::util::assert_order;
    assert_order(&matcher(), "ab", &["ab", "aoo_boo", "acb"]);
}

#[test]
fn ordering_print() {
    use crate::fuzzy_matcher::util::assert_order;
    assert_order(&matcher(), "print", &["printf", "sprintf"]);
}

// ----- Score-only vs range vs indices consistency -----

#[test]
fn range_consistent_with_indices() {
    let cases = [
        ("hello", "hello"),
        ("axbycz", "abc"),
        ("src/reader.rs", "reader"),
        ("FooBar", "fb"),
        ("dist-workspace.toml", "tst"),
        ("banana", "aa"),
    ];
    let m = matcher();
    for (choice, pattern) in cases {
        let only = m.fuzzy_match(choice, pattern);
        let (rs, rb, re) = m.fuzzy_match_range(choice, pattern).unwrap();
        let (fs, fidx) = m.fuzzy_indices(choice, pattern).unwrap();
        assert_eq!(only, Some(fs), "score-only mismatch for ({choice}, {pattern})");
        assert_eq!(rs, fs, "score mismatch for ({choice}, {pattern})");
        assert_eq!(rb, fidx[0], "begin mismatch for ({choice}, {pattern})");
        assert_eq!(re, fidx[fidx.len() - 1] + 1, "end mismatch for ({choice}, {pattern})");
    }
}

// ----- Non-ASCII fallback -----

#[test]
fn non_ascii_matching() {
    let m = matcher();
    assert!(m.fuzzy_match("café", "café").is_some());
    assert!(m.fuzzy_match("naïve", "naive").is_none());
    // Folding is ASCII-only.
    assert!(m.fuzzy_match("É", "é").is_none());
    assert!(m.fuzzy_match("Éa", "éA").is_none());
    assert!(m.fuzzy_match("éA", "éa").is_some());
}

#[test]
fn non_ascii_positions_are_char_indices() {
    let (s, idx) = matcher().fuzzy_indices("ü/ab", "ab").unwrap();
    assert_eq!(idx, vec![2, 3]);
    assert_eq!(s, 50);
}

// Regression test: every valid subsequence must be accepted.
// grep '.*t.*e.*s.*t' should give the same results as the matcher with pattern 'test'.
#[test]
fn all_subsequences_must_match() {
    let m = matcher();
    let cases = [
        "audio/audio/bin/temp/usr/uploads/mnt/cache/media_3445258",
        "audio/audio/audio/docs/cache/temp/downloads/backup/shared/data_9591740",
        "audio/audio/audio/opt/media/sys/sys/backup/etc_744357",
        "audio/audio/audio/temp/shared/uploads/downloads/config/home/mnt_9037278",
        "audio/audio/opt/cache/usr/usr/var/temp_1579492",
    ];
    for choice in &cases {
        assert!(m.fuzzy_match(choice, "test").is_some(), "{choice:?}");
        assert!(m.fuzzy_indices(choice, "test").is_some(), "{choice:?}");
    }
}

#[test]
fn matcher_is_reusable_across_inputs() {
    let m = matcher();
    let first = m.fuzzy_indices("src/fuzzy_matcher/mod.rs", "fmm");
    // A shorter choice must not see stale cells from the previous run.
    assert!(m.fuzzy_indices("ab", "ba").is_none());
    assert_eq!(m.fuzzy_indices("src/fuzzy_matcher/mod.rs", "fmm"), first);
}

// ----- Exhaustive optimality -----

/// Score every way of placing `pat` in `cho` and keep the best, using the
/// same model as the DP.
fn brute_force(cho: &str, pat: &str, respect_case: bool) -> Option<i64> {
    fn go(
        cho: &[u8],
        pat: &[u8],
        bonuses: &[Score],
        respect_case: bool,
        placed: &mut Vec<usize>,
        best: &mut Option<i64>,
    ) {
        let i = placed.len();
        if i == pat.len() {
            let s = score_placement(placed, bonuses) as i64;
            if best.is_none_or(|b| s > b) {
                *best = Some(s);
            }
            return;
        }
        let from = placed.last().map_or(0, |&j| j + 1);
        for j in from..cho.len() {
            if pat[i].eq(cho[j], respect_case) {
                placed.push(j);
                go(cho, pat, bonuses, respect_case, placed, best);
                placed.pop();
            }
        }
    }

    fn score_placement(placed: &[usize], bonuses: &[Score]) -> Score {
        let mut total = 0;
        let mut head = 0;
        for (k, &j) in placed.iter().enumerate() {
            let mult = if j == 0 { BONUS_FIRST_CHAR_MULTIPLIER } else { 1 };
            total += SCORE_MATCH + bonuses[j] * mult;
            if k > 0 && placed[k - 1] + 1 == j {
                total += BONUS_CONSECUTIVE.max(bonuses[head]);
            } else {
                head = j;
                if k > 0 {
                    let gap = (j - placed[k - 1] - 1) as Score;
                    total += SCORE_GAP_START + SCORE_GAP_EXTENSION * (gap - 1);
                }
            }
        }
        total
    }

    if pat.is_empty() {
        return Some(0);
    }
    let mut bonuses = Vec::new();
    precompute_bonuses(cho.as_bytes(), &mut bonuses);
    let mut best = None;
    go(cho.as_bytes(), pat.as_bytes(), &bonuses, respect_case, &mut Vec::new(), &mut best);
    best
}

#[test]
fn brute_force_agrees_on_known_cases() {
    for (cho, pat) in [("banana", "aa"), ("a_b", "ab"), ("fuzzy_match.ts", "fm"), ("aXa_aa", "aaa")] {
        assert_eq!(matcher().fuzzy_match(cho, pat), brute_force(cho, pat, false), "({cho}, {pat})");
    }
}

proptest! {
    #[test]
    fn dp_score_is_optimal(cho in "[abAB_/ 1.]{0,10}", pat in "[abAB_1]{0,4}", respect in any::<bool>()) {
        let m = SmithWatermanMatcher::new(respect.into());
        prop_assert_eq!(m.fuzzy_match(&cho, &pat), brute_force(&cho, &pat, respect));
    }

    #[test]
    fn accepts_exactly_the_subsequences(cho in "[a-dA-D/_ ]{0,16}", pat in "[a-dA-D_]{0,5}", respect in any::<bool>()) {
        let m = SmithWatermanMatcher::new(respect.into());
        let expected = is_subsequence(pat.as_bytes(), cho.as_bytes(), respect);
        prop_assert_eq!(m.fuzzy_match(&cho, &pat).is_some(), expected);
    }

    #[test]
    fn positions_invariant(cho in "[a-cA-C/_. é]{0,16}", pat in "[a-cA-Cé]{1,5}") {
        let m = matcher();
        if let Some(res) = m.match_result(&cho, &pat, true) {
            let cho_chars: Vec<char> = cho.chars().collect();
            let pat_chars: Vec<char> = pat.chars().collect();
            let pos = res.positions.clone().unwrap();
            prop_assert_eq!(pos.len(), pat_chars.len());
            prop_assert!(pos.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(pos.iter().all(|&p| p < cho_chars.len()));
            for (&p, &c) in pos.iter().zip(&pat_chars) {
                prop_assert!(cho_chars[p].eq_ignore_ascii_case(&c));
            }
            prop_assert_eq!(res.start, pos[0]);
            prop_assert_eq!(res.end, pos[pos.len() - 1] + 1);
            let range = m.match_result(&cho, &pat, false).unwrap();
            prop_assert_eq!((range.score, range.start, range.end), (res.score, res.start, res.end));
        }
    }

    #[test]
    fn self_match_is_identity(text in "[a-zA-Z0-9_/. -]{1,24}") {
        let (_, idx) = matcher_case().fuzzy_indices(&text, &text).unwrap();
        prop_assert_eq!(idx, (0..text.len()).collect::<Vec<_>>());
    }

    #[test]
    fn deterministic(cho in "[a-c/_]{0,20}", pat in "[a-c]{0,4}") {
        let m = matcher();
        prop_assert_eq!(m.match_result(&cho, &pat, true), matcher().match_result(&cho, &pat, true));
        prop_assert_eq!(m.match_result(&cho, &pat, true), m.match_result(&cho, &pat, true));
    }
}
