//! Incremental word-set intersection with early exit.

use std::collections::HashSet;

use crate::config::LARGE_INPUT_THRESHOLD;
use crate::normalize::InputText;

/// Compute the set of normalized words present in every input.
///
/// The fold retains into a single working set instead of rebuilding a set
/// per input, and stops as soon as the running intersection is empty. For
/// large input counts the fold seeds from the smallest word set, which
/// keeps the working set minimal from the start; intersection is
/// commutative, so the result never depends on the seed choice or on input
/// order.
pub(crate) fn common_words(inputs: &[InputText]) -> HashSet<String> {
    let Some(first) = inputs.first() else {
        return HashSet::new();
    };

    let seed = if inputs.len() >= LARGE_INPUT_THRESHOLD {
        inputs
            .iter()
            .map(|input| &input.word_set)
            .min_by_key(|set| set.len())
            .unwrap_or(&first.word_set)
    } else {
        &first.word_set
    };

    let mut common = seed.clone();
    for input in inputs {
        common.retain(|word| input.word_set.contains(word));
        if common.is_empty() {
            break;
        }
    }
    common
}
