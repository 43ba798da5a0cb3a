//! Longest-first substring de-duplication of candidate matches.

use crate::config::{MIN_TARGET_MATCHES, RESULT_BUDGET, SUBSTANTIAL_MATCH_LEN};

/// Drop every candidate that is a literal substring of a longer surviving
/// candidate.
///
/// Candidates are ordered by descending character length (ties in a fixed
/// lexicographic order so the outcome never depends on discovery order) and
/// each one is checked only against the already-accepted candidates, which
/// are at least as long; the full candidate list is never cross-compared.
/// Once enough substantial matches are in and the next candidate would push
/// the assembled output past its budget, the filter stops admitting.
pub(crate) fn dedupe_contained(candidates: Vec<String>) -> Vec<String> {
    let mut measured: Vec<(usize, String)> = candidates
        .into_iter()
        .map(|candidate| (candidate.chars().count(), candidate))
        .collect();
    measured.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

    let mut accepted: Vec<String> = Vec::new();
    let mut accepted_len = 0usize;
    let mut substantial = 0usize;

    for (len, candidate) in measured {
        if substantial >= MIN_TARGET_MATCHES && accepted_len + len > RESULT_BUDGET {
            break;
        }
        if accepted.iter().any(|kept| kept.contains(&candidate)) {
            continue;
        }
        if len > SUBSTANTIAL_MATCH_LEN {
            substantial += 1;
        }
        accepted_len += len + 1;
        accepted.push(candidate);
    }

    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_contained_candidates_are_dropped() {
        let result = dedupe_contained(strings(&[
            "shared phrase",
            "the whole shared phrase here",
            "phrase",
        ]));
        assert_eq!(result, vec!["the whole shared phrase here"]);
    }

    #[test]
    fn test_distinct_candidates_all_survive() {
        let result = dedupe_contained(strings(&["first clause", "second clause longer"]));
        assert_eq!(result, vec!["second clause longer", "first clause"]);
    }

    #[test]
    fn test_longest_first_ordering() {
        let result = dedupe_contained(strings(&["bb", "dddd", "ccc"]));
        assert_eq!(result, vec!["dddd", "ccc", "bb"]);
    }

    #[test]
    fn test_equal_length_ties_are_order_independent() {
        let forward = dedupe_contained(strings(&["alpha one", "gamma two"]));
        let backward = dedupe_contained(strings(&["gamma two", "alpha one"]));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_duplicates_collapse() {
        let result = dedupe_contained(strings(&["same candidate", "same candidate"]));
        assert_eq!(result, vec!["same candidate"]);
    }

    #[test]
    fn test_budget_stops_weak_tail() {
        // Three substantial matches fill most of the budget; the weak tail
        // candidate is refused once the budget would overflow.
        let big = "x".repeat(99);
        let mid = "y".repeat(98);
        let low = "z".repeat(97);
        let result = dedupe_contained(strings(&[&big, &mid, &low, "tail candidate"]));
        assert_eq!(result, vec![big, mid, low]);
    }

    proptest! {
        #[test]
        fn prop_no_accepted_match_contains_another(
            candidates in proptest::collection::vec("[a-c]{1,12}", 0..24)
        ) {
            let accepted = dedupe_contained(candidates);
            for (i, a) in accepted.iter().enumerate() {
                for (j, b) in accepted.iter().enumerate() {
                    if i != j {
                        prop_assert!(!a.contains(b.as_str()));
                    }
                }
            }
        }

        #[test]
        fn prop_result_is_sorted_longest_first(
            candidates in proptest::collection::vec("[a-z ]{1,20}", 0..16)
        ) {
            let accepted = dedupe_contained(candidates);
            let lengths: Vec<usize> = accepted.iter().map(|s| s.chars().count()).collect();
            let mut sorted = lengths.clone();
            sorted.sort_unstable_by(|a, b| b.cmp(a));
            prop_assert_eq!(lengths, sorted);
        }
    }
}
