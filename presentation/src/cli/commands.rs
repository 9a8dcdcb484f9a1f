//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the recommendation
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Formatted recommendation card
    Card,
    /// JSON output of the parsed (or raw) payload
    Json,
}

/// CLI arguments for vyapar-sathi
#[derive(Parser, Debug)]
#[command(name = "vyapar-sathi")]
#[command(
    author,
    version,
    about = "AI business decision advisor for small business owners in India"
)]
#[command(long_about = r#"
Vyapar Sathi asks an AI advisor for one clear, practical business decision.

Describe your business, the current situation, and your goal. The advisor
answers with a recommendation card: a decision, the reasoning behind it,
one realistic risk, and an alternative option. Write in English or in
Hinglish — the reply mirrors your style.

A Gemini API key is required: export GEMINI_API_KEY or set `api_key`
under [gemini] in sathi.toml.

Example:
  vyapar-sathi -b "Cafe" -s "Weekdays are empty, weekends are packed" -g "More weekday footfall"
  vyapar-sathi --example
  vyapar-sathi            (prompts for the three fields)
"#)]
pub struct Cli {
    /// What the business is, e.g. "Cafe" (prompted for when omitted)
    #[arg(short = 'b', long, value_name = "TEXT")]
    pub business_type: Option<String>,

    /// The current situation or problem (prompted for when omitted)
    #[arg(short = 's', long, value_name = "TEXT")]
    pub situation: Option<String>,

    /// The primary business goal (prompted for when omitted)
    #[arg(short = 'g', long, value_name = "TEXT")]
    pub goal: Option<String>,

    /// Fill all three fields with the canonical cafe example
    #[arg(long)]
    pub example: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "card")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the spinner and informational output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_flags() {
        let cli = Cli::parse_from([
            "vyapar-sathi",
            "-b",
            "Cafe",
            "-s",
            "Slow weekdays",
            "-g",
            "Footfall",
        ]);
        assert_eq!(cli.business_type.as_deref(), Some("Cafe"));
        assert_eq!(cli.situation.as_deref(), Some("Slow weekdays"));
        assert_eq!(cli.goal.as_deref(), Some("Footfall"));
        assert!(!cli.example);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["vyapar-sathi"]);
        assert!(cli.business_type.is_none());
        assert!(matches!(cli.output, OutputFormat::Card));
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }
}
