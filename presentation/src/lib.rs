//! Presentation layer for vyapar-sathi
//!
//! This crate contains CLI definitions, the interactive input form,
//! output formatters, and the loading spinner.

pub mod cli;
pub mod input;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use input::form::InputForm;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::AdviceSpinner;
