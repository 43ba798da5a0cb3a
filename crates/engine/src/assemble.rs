//! Final ordering, sparse-result top-up, and length budgeting.

use std::collections::{HashMap, HashSet};

use crate::config::{MIN_TARGET_MATCHES, RESULT_BUDGET};

/// Join accepted matches into the single display string.
///
/// Matches arrive longest-first from the containment filter and are kept in
/// that order. When the pipeline produced fewer than the target number of
/// matches, standalone common words that are not already covered by a match
/// are appended (longest first, readable casing) before the budget is
/// applied. Truncation drops whole trailing matches, never part of one.
pub(crate) fn assemble(
    matches: Vec<String>,
    common: &HashSet<String>,
    case_map: &HashMap<String, String>,
) -> String {
    let mut parts: Vec<String> = matches
        .into_iter()
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .collect();

    if parts.len() < MIN_TARGET_MATCHES && !common.is_empty() {
        top_up_with_words(&mut parts, common, case_map);
    }

    let mut result = String::new();
    let mut used = 0usize;
    for part in parts {
        let len = part.chars().count();
        let separator = usize::from(!result.is_empty());
        if used + separator + len > RESULT_BUDGET {
            break;
        }
        if separator == 1 {
            result.push(' ');
        }
        result.push_str(&part);
        used += separator + len;
    }
    result
}

/// Append standalone common words until the match count reaches its target.
/// A word already contained in a match (ignoring case) adds nothing and is
/// skipped.
fn top_up_with_words(
    parts: &mut Vec<String>,
    common: &HashSet<String>,
    case_map: &HashMap<String, String>,
) {
    let mut words: Vec<&str> = common.iter().map(String::as_str).collect();
    words.sort_unstable_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    for word in words {
        if parts.len() >= MIN_TARGET_MATCHES {
            break;
        }
        if parts.iter().any(|p| p.to_lowercase().contains(word)) {
            continue;
        }
        let display = case_map.get(word).cloned().unwrap_or_else(|| word.to_string());
        parts.push(display);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn no_words() -> (HashSet<String>, HashMap<String, String>) {
        (HashSet::new(), HashMap::new())
    }

    fn words(entries: &[(&str, &str)]) -> (HashSet<String>, HashMap<String, String>) {
        let common = entries.iter().map(|(w, _)| w.to_string()).collect();
        let case_map = entries
            .iter()
            .map(|(w, display)| (w.to_string(), display.to_string()))
            .collect();
        (common, case_map)
    }

    #[test]
    fn test_joins_with_single_space() {
        let (common, case_map) = no_words();
        let joined = assemble(
            vec!["longest match".to_string(), "short one".to_string()],
            &common,
            &case_map,
        );
        assert_eq!(joined, "longest match short one");
    }

    #[test]
    fn test_empty_matches_empty_result() {
        let (common, case_map) = no_words();
        assert_eq!(assemble(Vec::new(), &common, &case_map), "");
    }

    #[test]
    fn test_tops_up_sparse_results_with_common_words() {
        let (common, case_map) = words(&[("boilerplate", "Boilerplate"), ("pipeline", "pipeline")]);
        let joined = assemble(vec!["one shared phrase".to_string()], &common, &case_map);
        assert_eq!(joined, "one shared phrase Boilerplate pipeline");
    }

    #[test]
    fn test_words_covered_by_matches_are_not_repeated() {
        let (common, case_map) = words(&[("shared", "Shared")]);
        let joined = assemble(vec!["the Shared phrase".to_string()], &common, &case_map);
        assert_eq!(joined, "the Shared phrase");
    }

    #[test]
    fn test_budget_drops_whole_matches() {
        let (common, case_map) = no_words();
        let first = "a".repeat(290);
        let second = "b".repeat(20);
        let joined = assemble(vec![first.clone(), second], &common, &case_map);
        assert_eq!(joined, first);
    }

    #[test]
    fn test_matches_are_trimmed() {
        let (common, case_map) = no_words();
        let joined = assemble(vec!["hello ".to_string()], &common, &case_map);
        assert_eq!(joined, "hello");
    }
}
