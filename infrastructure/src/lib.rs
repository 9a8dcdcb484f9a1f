//! Infrastructure layer for vyapar-sathi
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, FileConfig, GeminiConfig};
pub use gemini::gateway::GeminiAdviceGateway;
