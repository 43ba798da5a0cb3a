//! Segment shapes shared between the extraction engine and its collaborators.
//!
//! The data-fetch layer hands over conversation-like sequences as loose JSON:
//! each entry carries a role label and a body that is either a flat string or
//! a list of part strings. This crate pins those shapes down as typed values
//! and provides the tolerant boundary parser that turns collaborator JSON
//! into them, skipping anything malformed instead of failing.

use serde::{Deserialize, Serialize};

/// Body of a labeled segment.
///
/// Collaborator JSON may supply either `"body": "..."` or
/// `"body": ["...", "..."]`; the untagged representation accepts both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SegmentBody {
    Text(String),
    Parts(Vec<String>),
}

impl SegmentBody {
    /// Reduce the body to a single flat string.
    ///
    /// Parts are joined with a single space so words on either side of a
    /// part boundary never fuse into one token.
    pub fn flattened(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Parts(parts) => parts.join(" "),
        }
    }

    /// True when the body carries no non-whitespace content.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Parts(parts) => parts.iter().all(|p| p.trim().is_empty()),
        }
    }
}

impl From<String> for SegmentBody {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for SegmentBody {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// One positioned entry of an ordered sequence: a role label plus a body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledSegment {
    pub label: String,
    pub body: SegmentBody,
}

impl LabeledSegment {
    pub fn new(label: impl Into<String>, body: impl Into<SegmentBody>) -> Self {
        Self {
            label: label.into(),
            body: body.into(),
        }
    }

    pub fn with_parts(label: impl Into<String>, parts: Vec<String>) -> Self {
        Self {
            label: label.into(),
            body: SegmentBody::Parts(parts),
        }
    }
}

/// Parse a collaborator-supplied JSON value into segments.
///
/// Entries that are not objects, lack a string `label`, or carry a body of
/// any other shape are skipped. A non-array value yields no segments.
pub fn parse_segments(value: &serde_json::Value) -> Vec<LabeledSegment> {
    let Some(entries) = value.as_array() else {
        log::debug!("segment payload is not an array, ignoring");
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| match serde_json::from_value(entry.clone()) {
            Ok(segment) => Some(segment),
            Err(err) => {
                log::debug!("skipping malformed segment entry: {err}");
                None
            }
        })
        .collect()
}
