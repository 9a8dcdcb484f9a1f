//! Gemini REST adapter
//!
//! Implements AdviceGateway against the generativelanguage
//! `generateContent` endpoint.

pub mod gateway;
pub mod protocol;
