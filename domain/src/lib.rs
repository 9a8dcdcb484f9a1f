//! Domain layer for vyapar-sathi
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Advice Request
//!
//! The user's three-field submission (business type, situation, goal) that
//! gets turned into a single prompt for the advisor model.
//!
//! ## Recommendation Card
//!
//! The advisor model answers with a semi-structured text block. The parser
//! in [`advice::parser`] decomposes it into decision / reasons / risks /
//! alternative; when no decision header is found, the raw text is kept
//! verbatim for fallback display.

pub mod advice;
pub mod core;
pub mod prompt;
pub mod util;

// Re-export commonly used types
pub use advice::{
    parser::parse_recommendation,
    recommendation::{Advice, ParsedRecommendation},
    request::AdviceRequest,
};
pub use crate::core::error::DomainError;
pub use prompt::AdvisorPrompt;
