//! Advice subdomain: the request value object, the recommendation card
//! model, and the response parser.
//!
//! - [`request::AdviceRequest`] — the user's three-field submission
//! - [`recommendation::ParsedRecommendation`] — structured card fields
//! - [`parser::parse_recommendation`] — text-to-card decomposition

pub mod parser;
pub mod recommendation;
pub mod request;
