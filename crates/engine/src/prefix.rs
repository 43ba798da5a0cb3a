//! Position-aligned common segments across labeled sequences.

use overlap_protocol::{LabeledSegment, SegmentBody};

use crate::extract::find_common_substrings;

/// Determine the labeled segments common to every sequence, by position.
///
/// Only segments present in every sequence at the same index and carrying
/// the same label are compared; their bodies are flattened and reduced with
/// [`find_common_substrings`]. A position survives only when the labels
/// agree everywhere and the reduced text is non-empty; mismatched or empty
/// positions are dropped, never raised. Sequences of differing lengths
/// truncate the comparison to the shortest one.
///
/// Zero sequences yield nothing; a single sequence is returned verbatim,
/// since there is nothing to compare against.
pub fn shared_prefix(sequences: &[Vec<LabeledSegment>]) -> Vec<LabeledSegment> {
    match sequences {
        [] => return Vec::new(),
        [only] => return only.clone(),
        _ => {}
    }

    let limit = sequences.iter().map(Vec::len).min().unwrap_or(0);
    let mut shared = Vec::new();

    for position in 0..limit {
        let label = &sequences[0][position].label;
        if !sequences.iter().all(|s| s[position].label == *label) {
            continue;
        }

        let bodies: Vec<Option<String>> = sequences
            .iter()
            .map(|s| Some(s[position].body.flattened()))
            .collect();
        let reduced = find_common_substrings(&bodies);
        if reduced.is_empty() {
            continue;
        }

        shared.push(LabeledSegment {
            label: label.clone(),
            body: SegmentBody::Text(reduced),
        });
    }

    log::debug!(
        "{} of {} aligned positions survived reduction",
        shared.len(),
        limit
    );
    shared
}
