//! Prompt templates for the advisor flow

mod advisor;

pub use advisor::AdvisorPrompt;
