//! Recommendation card model

use crate::advice::parser::parse_recommendation;
use serde::{Deserialize, Serialize};

/// Structured decomposition of a raw recommendation text
///
/// Produced by [`parse_recommendation`]. The record is valid only when
/// `decision` is non-empty; an empty decision means the raw text had no
/// recognizable `Recommended Decision:` header and callers must fall
/// back to displaying the raw text verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecommendation {
    /// One clear, actionable recommendation
    pub decision: String,
    /// Supporting reasons, in source order
    pub reasons: Vec<String>,
    /// One realistic risk or limitation
    pub risks: String,
    /// Second-best option with short explanation
    pub alternative: String,
}

impl ParsedRecommendation {
    /// Whether the parse found a decision header
    pub fn is_structured(&self) -> bool {
        !self.decision.is_empty()
    }
}

/// Success payload of an advice request: structured card or raw fallback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advice {
    /// The response carried the expected four-header structure
    Structured(ParsedRecommendation),
    /// No decision header was found; the raw text is shown verbatim
    Unstructured(String),
}

impl Advice {
    /// Parse a raw model response into the display payload.
    ///
    /// A missing decision header is not an error — the user always sees
    /// something for any non-empty successful response.
    pub fn from_raw(text: impl Into<String>) -> Self {
        let text = text.into();
        let parsed = parse_recommendation(&text);
        if parsed.is_structured() {
            Advice::Structured(parsed)
        } else {
            Advice::Unstructured(text)
        }
    }
}
