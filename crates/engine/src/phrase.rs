//! Phrase candidate generation over sentence-sized word runs.

use std::collections::{HashMap, HashSet};

use crate::config::{MAX_PHRASE_LEN, MAX_WHITESPACE_RATIO, MIN_PHRASE_LEN};
use crate::normalize::{strip_token, InputText};

/// Share of whitespace characters in `text`. Empty text counts as 0.0.
pub(crate) fn whitespace_ratio(text: &str) -> f64 {
    let mut total = 0usize;
    let mut blank = 0usize;
    for c in text.chars() {
        total += 1;
        if c.is_whitespace() {
            blank += 1;
        }
    }
    if total == 0 {
        0.0
    } else {
        blank as f64 / total as f64
    }
}

/// Sentence-like units: split on terminal punctuation and line breaks.
fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(['.', '!', '?', '\n', '\r'])
}

/// Scan every sentence of every input for contiguous runs of common words
/// and collect the qualifying runs as candidate phrases.
///
/// A token whose stripped form is common extends the run even when it
/// carries trailing punctuation, and bare punctuation tokens are skipped
/// without breaking the run; runs never cross sentence boundaries.
/// Identical runs found in several inputs coalesce into one candidate.
pub(crate) fn collect_candidates(
    inputs: &[InputText],
    common: &HashSet<String>,
    case_map: &HashMap<String, String>,
) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates = Vec::new();
    if common.is_empty() {
        return candidates;
    }

    for input in inputs {
        for sentence in split_sentences(&input.original) {
            let mut run: Vec<String> = Vec::new();
            for token in sentence.split_whitespace() {
                let word = strip_token(token).to_lowercase();
                if word.is_empty() {
                    continue;
                }
                if common.contains(&word) {
                    run.push(word);
                } else {
                    close_run(&mut run, case_map, &mut seen, &mut candidates);
                }
            }
            close_run(&mut run, case_map, &mut seen, &mut candidates);
        }
    }

    log::trace!("collected {} phrase candidates", candidates.len());
    candidates
}

fn close_run(
    run: &mut Vec<String>,
    case_map: &HashMap<String, String>,
    seen: &mut HashSet<String>,
    candidates: &mut Vec<String>,
) {
    if run.is_empty() {
        return;
    }
    let key = run.join(" ");
    let display = run
        .iter()
        .map(|word| case_map.get(word).map(String::as_str).unwrap_or(word.as_str()))
        .collect::<Vec<_>>()
        .join(" ");
    run.clear();

    let len = display.chars().count();
    if len < MIN_PHRASE_LEN || len > MAX_PHRASE_LEN {
        return;
    }
    if whitespace_ratio(&display) > MAX_WHITESPACE_RATIO {
        return;
    }
    if seen.insert(key) {
        candidates.push(display);
    }
}
