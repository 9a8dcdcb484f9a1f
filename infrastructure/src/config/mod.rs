//! Configuration loading for vyapar-sathi

mod file_config;
mod loader;

pub use file_config::{FileConfig, GeminiConfig};
pub use loader::{ConfigError, ConfigLoader};
