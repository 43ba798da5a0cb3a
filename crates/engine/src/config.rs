//! Fixed tuning constants for the extraction pipeline.
//!
//! These are deliberately not user-configurable; every caller gets the same
//! behavior and results stay comparable across invocations.

/// Inputs whose trimmed character count is below this are dropped as noise.
pub(crate) const MIN_INPUT_LEN: usize = 3;

/// Words shorter than this are excluded from the intersection computation.
/// They stay in the text itself, they just never seed a match on their own.
pub(crate) const MIN_WORD_LEN: usize = 3;

/// Lower bound on the character length of an accepted phrase candidate.
pub(crate) const MIN_PHRASE_LEN: usize = 12;

/// Upper bound on the character length of any match, on both the word path
/// and the character-level fallback path.
pub(crate) const MAX_PHRASE_LEN: usize = 120;

/// A candidate whose whitespace share exceeds this ratio is rejected as a
/// run of separators rather than real words.
pub(crate) const MAX_WHITESPACE_RATIO: f64 = 0.5;

/// At or above this many inputs the intersection fold seeds from the
/// smallest word set. Pure performance split; results are identical on both
/// sides of the threshold.
pub(crate) const LARGE_INPUT_THRESHOLD: usize = 10;

/// Sparse results are topped up with standalone common words until this many
/// matches are present.
pub(crate) const MIN_TARGET_MATCHES: usize = 3;

/// Matches longer than this count as substantial when deciding whether the
/// containment filter may stop admitting weaker candidates.
pub(crate) const SUBSTANTIAL_MATCH_LEN: usize = 15;

/// Upper bound on the assembled result string, in characters.
pub(crate) const RESULT_BUDGET: usize = 300;
