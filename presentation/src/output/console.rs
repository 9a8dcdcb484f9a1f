//! Console output formatter for the recommendation card

use colored::Colorize;
use vyapar_domain::{Advice, ParsedRecommendation};

/// Formats advice results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the success payload: structured card or raw fallback
    pub fn format_advice(advice: &Advice) -> String {
        match advice {
            Advice::Structured(parsed) => Self::format_card(parsed),
            Advice::Unstructured(raw) => Self::format_raw(raw),
        }
    }

    /// Format as JSON
    pub fn format_json(advice: &Advice) -> String {
        serde_json::to_string_pretty(advice).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format an error message block
    pub fn format_error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    /// The structured recommendation card
    fn format_card(parsed: &ParsedRecommendation) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Your Recommendation"));
        output.push('\n');

        output.push_str(&format!(
            "{}\n{}\n",
            "Recommended Decision".cyan().bold(),
            parsed.decision.bold()
        ));

        if !parsed.reasons.is_empty() {
            output.push_str(&Self::section_header("Why This Is Recommended"));
            for reason in &parsed.reasons {
                output.push_str(&format!("  {} {}\n", "v".green(), reason));
            }
        }

        if !parsed.risks.is_empty() {
            output.push_str(&Self::section_header("Risks & Trade-offs"));
            output.push_str(&format!("  {} {}\n", "!".yellow(), parsed.risks));
        }

        if !parsed.alternative.is_empty() {
            output.push_str(&Self::section_header("Alternative Option"));
            output.push_str(&format!("  {} {}\n", "*".magenta(), parsed.alternative));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Verbatim fallback when no decision header was found
    fn format_raw(raw: &str) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Your Recommendation"));
        output.push('\n');
        output.push_str(raw);
        output.push('\n');
        output.push_str(&Self::footer());
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", title.cyan().bold())
    }

    fn footer() -> String {
        format!(
            "\n{}\n{}\n",
            "=".repeat(60).cyan(),
            "AI-powered guidance only - not professional financial or legal advice.".dimmed()
        )
    }
}
