//! Brief model and input validation.

use crate::length::ArticleLength;
use crate::tone::Tone;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback call to action used when the brief leaves the field blank.
pub const DEFAULT_CTA: &str = "Subscribe for more insights";

/// Validation failure for a brief. Exactly one is reported per call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("unknown tone: {0:?}")]
    UnknownTone(String),

    #[error("unknown article length: {0:?}")]
    UnknownLength(String),
}

/// Structured input describing the article to generate.
///
/// A brief is immutable once constructed; the engine is a pure function of
/// it, so identical briefs always produce identical output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brief {
    /// Broad theme of the article (required).
    pub topic: String,

    /// Keyword placed verbatim in the H1 and emphasized throughout (required).
    pub primary_keyword: String,

    /// Already-parsed secondary keywords, order preserved, duplicates kept.
    #[serde(default)]
    pub secondary_keywords: Vec<String>,

    /// Who the article addresses (required). Informs phrasing, not structure.
    pub target_audience: String,

    #[serde(default)]
    pub tone: Tone,

    #[serde(default)]
    pub length: ArticleLength,

    /// Closing call to action; blank falls back to [`DEFAULT_CTA`].
    #[serde(default)]
    pub call_to_action: String,
}

impl Brief {
    /// Check the required free-text fields. The surrounding form is expected
    /// to enforce this before calling, but empty fields are never accepted
    /// silently.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.topic.trim().is_empty() {
            return Err(ValidationError::MissingField("topic"));
        }
        if self.primary_keyword.trim().is_empty() {
            return Err(ValidationError::MissingField("primary_keyword"));
        }
        if self.target_audience.trim().is_empty() {
            return Err(ValidationError::MissingField("target_audience"));
        }
        Ok(())
    }

    /// Call to action with the blank-field fallback applied.
    pub fn effective_cta(&self) -> &str {
        let cta = self.call_to_action.trim();
        if cta.is_empty() {
            DEFAULT_CTA
        } else {
            cta
        }
    }
}

/// Split a raw keyword field on commas or newlines, trimming whitespace and
/// dropping empty entries. Callers run this before constructing a [`Brief`];
/// the engine only ever sees the parsed sequence.
pub fn parse_keyword_list(raw: &str) -> Vec<String> {
    raw.split(|c| c == ',' || c == '\n')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
