//! The shared-content extraction pipeline.

use crate::{assemble, containment, fallback, normalize, phrase, wordset};

/// Extract the content a set of texts has in common, as one display string.
///
/// Absent entries and entries too short to carry signal are dropped. With
/// nothing left the result is empty; with a single text left the result is
/// that text, trimmed, since the common content of one text is the text
/// itself.
/// Otherwise the word-based pipeline runs first, and only when it surfaces
/// nothing does the character-level fallback take over. An empty return
/// value means the texts genuinely share nothing beyond noise; it is never
/// an error.
///
/// # Example
///
/// ```
/// use overlap_engine::find_common_substrings;
///
/// let texts = [Some("hello world"), Some("hello universe"), Some("hello there")];
/// assert!(find_common_substrings(&texts).contains("hello"));
/// ```
pub fn find_common_substrings<S: AsRef<str>>(texts: &[Option<S>]) -> String {
    let working = normalize::prepare(texts);
    match working.inputs.as_slice() {
        [] => return String::new(),
        [only] => return only.original.clone(),
        _ => {}
    }

    let common = wordset::common_words(&working.inputs);
    log::debug!(
        "{} usable inputs share {} words",
        working.inputs.len(),
        common.len()
    );

    let candidates = phrase::collect_candidates(&working.inputs, &common, &working.case_map);
    let mut matches = containment::dedupe_contained(candidates);

    if matches.is_empty() {
        log::debug!("word pipeline found nothing, trying character windows");
        matches = containment::dedupe_contained(fallback::char_level_matches(&working.inputs));
    }

    assemble::assemble(matches, &common, &working.case_map)
}
