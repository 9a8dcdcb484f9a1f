//! Recommendation response parsing.
//!
//! Extracts the structured card fields from a free-form advisor model
//! response. This is pure domain logic — no I/O, no session management,
//! just line-by-line text pattern matching.
//!
//! The advisor prompt mandates four literal English headers; matching is
//! prefix-based and case-sensitive on exactly those strings. Responses
//! that drift from the structure degrade gracefully: a missing decision
//! header yields an empty `decision`, which callers treat as "show the
//! raw text instead".

use crate::advice::recommendation::ParsedRecommendation;

/// Header introducing the single-line decision
pub const DECISION_HEADER: &str = "Recommended Decision:";

/// Header introducing the bulleted reason list (header line only)
pub const REASONS_HEADER: &str = "Why This Is Recommended:";

/// Header introducing the risk line (inline or on the next line)
pub const RISKS_HEADER: &str = "Risks & Trade-offs:";

/// Header introducing the single-line alternative
pub const ALTERNATIVE_HEADER: &str = "Alternative Option:";

/// Section the line scanner is currently inside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Decision,
    Reasons,
    Risks,
    Alternative,
    None,
}

/// Parse a raw recommendation text into its card fields.
///
/// Total and deterministic: any input (including the empty string)
/// produces a [`ParsedRecommendation`] without panicking. Whitespace-only
/// lines are discarded; unrecognized continuation lines are silently
/// dropped. Multi-line decision/risks/alternative content is unsupported.
pub fn parse_recommendation(text: &str) -> ParsedRecommendation {
    let mut result = ParsedRecommendation::default();
    let mut section = Section::None;

    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        if let Some(rest) = line.strip_prefix(DECISION_HEADER) {
            section = Section::Decision;
            result.decision = rest.trim().to_string();
        } else if line.starts_with(REASONS_HEADER) {
            // Header line only; reasons follow as bullets
            section = Section::Reasons;
        } else if let Some(rest) = line.strip_prefix(RISKS_HEADER) {
            section = Section::Risks;
            let rest = rest.trim();
            if !rest.is_empty() {
                result.risks = rest.to_string();
            }
        } else if let Some(rest) = line.strip_prefix(ALTERNATIVE_HEADER) {
            section = Section::Alternative;
            result.alternative = rest.trim().to_string();
        } else {
            match section {
                Section::Reasons => {
                    if let Some(rest) = line.trim().strip_prefix('-') {
                        result.reasons.push(rest.trim().to_string());
                    }
                }
                // Single-line sections: the first content line after the
                // header fills the field, later lines are dropped
                Section::Decision if result.decision.is_empty() => {
                    result.decision = line.trim().to_string();
                }
                Section::Risks if result.risks.is_empty() => {
                    result.risks = strip_leading_marker(line.trim()).trim().to_string();
                }
                Section::Alternative if result.alternative.is_empty() => {
                    result.alternative = line.trim().to_string();
                }
                _ => {}
            }
        }
    }

    result
}

/// Strip a single leading bullet marker character, if present.
///
/// Alphanumeric first characters are kept — the line is then taken as-is.
fn strip_leading_marker(line: &str) -> &str {
    let mut chars = line.chars();
    match chars.next() {
        Some(c) if !c.is_alphanumeric() => chars.as_str(),
        _ => line,
    }
}
