//! # Overlap Engine
//!
//! Approximate multi-sequence shared-content extraction: given several
//! free-form texts (prompt variants, instruction fragments, annotation
//! contexts), surface the phrases they all have in common so a UI can
//! highlight shared boilerplate against version-specific differences.
//!
//! ## Pipeline
//!
//! ```text
//! Raw texts
//!     │
//!     ├──> Normalizer (filter, trim, case-fold, word-case lookup)
//!     │
//!     ├──> Word-set intersection (incremental, early exit)
//!     │
//!     ├──> Phrase candidates (per-sentence common-word runs)
//!     │
//!     ├──> Containment filter (longest-first de-duplication)
//!     │
//!     ├──> Character fallback (only when the word path found nothing)
//!     │
//!     └──> Assembler (ordering, sparse top-up, length budget)
//! ```
//!
//! The engine never fails: degenerate input degrades to an empty result,
//! and an empty result is a correct "nothing shared" answer. Every call is
//! a pure, synchronous computation over its arguments, with no I/O and no
//! shared state to lock around.
//!
//! A positional companion, [`shared_prefix`], applies the same reduction to
//! ordered sequences of labeled segments, comparing only segments that sit
//! at the same index under the same label.

mod assemble;
mod config;
mod containment;
mod extract;
mod fallback;
mod normalize;
mod phrase;
mod prefix;
mod wordset;

pub use extract::find_common_substrings;
pub use prefix::shared_prefix;
