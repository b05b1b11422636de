//! Test helpers shared by matcher tests.

use super::FuzzyMatcher;

/// Assert that `choices` are ranked by `matcher` in exactly the given order
/// (best first) for `pattern`.
pub(crate) fn assert_order(matcher: &dyn FuzzyMatcher, pattern: &str, choices: &[&str]) {
    let mut scored: Vec<(&str, i64)> = choices
        .iter()
        .map(|&c| {
            let score = matcher
                .fuzzy_match(c, pattern)
                .unwrap_or_else(|| panic!("{pattern:?} should match {c:?}"));
            (c, score)
        })
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    let got: Vec<&str> = scored.iter().map(|(c, _)| *c).collect();
    assert_eq!(got, choices, "unexpected order for {pattern:?}: {scored:?}");
}
