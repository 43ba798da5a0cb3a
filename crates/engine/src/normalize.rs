//! Input filtering, case folding, and the word-case lookup.

use std::collections::{HashMap, HashSet};

use crate::config::{MIN_INPUT_LEN, MIN_WORD_LEN};

/// A single input prepared for comparison. Built fresh per engine call.
pub(crate) struct InputText {
    /// Trimmed original, casing preserved. Phrases are displayed from this.
    pub original: String,
    /// Case-folded form of `original`. All matching happens against this.
    pub normalized: String,
    /// Distinct normalized words eligible for intersection.
    pub word_set: HashSet<String>,
}

/// The filtered working set for one invocation.
pub(crate) struct WorkingSet {
    pub inputs: Vec<InputText>,
    /// Normalized word -> original-cased exemplar. Casing is cosmetic, so
    /// the exemplar is only used to make output readable; the smallest
    /// original form is kept so the choice does not depend on input order.
    pub case_map: HashMap<String, String>,
}

/// Strip leading and trailing punctuation from a whitespace-delimited token.
/// Interior characters (apostrophes, hyphens, digits) are left alone.
pub(crate) fn strip_token(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Filter and normalize raw inputs.
///
/// Absent entries and entries at most two characters long are dropped, not
/// errored; what remains is trimmed, case-folded, and tokenized.
pub(crate) fn prepare<S: AsRef<str>>(texts: &[Option<S>]) -> WorkingSet {
    let mut inputs = Vec::new();
    let mut case_map: HashMap<String, String> = HashMap::new();

    for text in texts.iter().flatten() {
        let original = text.as_ref().trim();
        if original.chars().count() < MIN_INPUT_LEN {
            continue;
        }
        let normalized = original.to_lowercase();

        let mut word_set = HashSet::new();
        for (raw, folded) in original.split_whitespace().zip(normalized.split_whitespace()) {
            let word = strip_token(folded);
            if word.chars().count() < MIN_WORD_LEN {
                continue;
            }
            word_set.insert(word.to_string());

            let exemplar = strip_token(raw);
            case_map
                .entry(word.to_string())
                .and_modify(|kept| {
                    if exemplar < kept.as_str() {
                        *kept = exemplar.to_string();
                    }
                })
                .or_insert_with(|| exemplar.to_string());
        }

        inputs.push(InputText {
            original: original.to_string(),
            normalized,
            word_set,
        });
    }

    WorkingSet { inputs, case_map }
}
