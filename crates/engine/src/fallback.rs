//! Character-level matcher for inputs that share no whole words.

use unicode_segmentation::UnicodeSegmentation;

use crate::config::{
    MAX_PHRASE_LEN, MAX_WHITESPACE_RATIO, MIN_TARGET_MATCHES, MIN_WORD_LEN, RESULT_BUDGET,
    SUBSTANTIAL_MATCH_LEN,
};
use crate::normalize::InputText;
use crate::phrase::whitespace_ratio;

/// Find substrings common to every input, at character granularity.
///
/// Windows are cut on grapheme-cluster boundaries of the shortest input and
/// tried in decreasing length, so the longest shared runs are found first
/// and anything already covered by an accepted match is skipped outright.
/// Matches respect the maximum phrase length but not the minimum; shared
/// sub-word tokens (ids, numbers, symbols) are exactly what this path is
/// for.
pub(crate) fn char_level_matches(inputs: &[InputText]) -> Vec<String> {
    let Some(shortest) = inputs
        .iter()
        .min_by_key(|input| input.normalized.len())
    else {
        return Vec::new();
    };

    let graphemes: Vec<(usize, &str)> = shortest.normalized.grapheme_indices(true).collect();
    let upper = graphemes.len().min(MAX_PHRASE_LEN);

    let mut accepted: Vec<String> = Vec::new();
    let mut accepted_len = 0usize;
    let mut substantial = 0usize;

    for window_len in (MIN_WORD_LEN..=upper).rev() {
        if substantial >= MIN_TARGET_MATCHES && accepted_len + window_len > RESULT_BUDGET {
            break;
        }
        for start in 0..=(graphemes.len() - window_len) {
            let (byte_start, _) = graphemes[start];
            let (last_start, last) = graphemes[start + window_len - 1];
            let window = &shortest.normalized[byte_start..last_start + last.len()];

            if whitespace_ratio(window) > MAX_WHITESPACE_RATIO {
                continue;
            }
            if accepted.iter().any(|kept| kept.contains(window)) {
                continue;
            }
            if !inputs.iter().all(|input| input.normalized.contains(window)) {
                continue;
            }

            if window_len > SUBSTANTIAL_MATCH_LEN {
                substantial += 1;
            }
            accepted_len += window_len + 1;
            accepted.push(window.to_string());
        }
    }

    log::debug!("character fallback produced {} matches", accepted.len());
    accepted
}
