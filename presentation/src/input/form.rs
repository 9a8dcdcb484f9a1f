//! Interactive three-field input form
//!
//! Prompts on stdin for whichever fields were not supplied as CLI
//! flags. Input is taken as-is apart from the trailing newline — the
//! submit gate downstream checks exact emptiness, not trimmed
//! emptiness, matching the original form behavior.

use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Collects the three advice request fields
pub struct InputForm;

impl InputForm {
    /// Fill in missing fields by prompting on stdin.
    ///
    /// Fields already provided (as CLI flags) are passed through
    /// untouched and not prompted for.
    pub fn fill(
        business_type: Option<String>,
        situation: Option<String>,
        goal: Option<String>,
    ) -> io::Result<(String, String, String)> {
        let stdin = io::stdin();
        let mut lines = stdin.lock();

        let business_type = match business_type {
            Some(v) => v,
            None => Self::prompt(&mut lines, "Business type", "e.g. Cafe, Kirana store, Boutique")?,
        };
        let situation = match situation {
            Some(v) => v,
            None => Self::prompt(
                &mut lines,
                "Situation",
                "What is happening right now? What is the problem?",
            )?,
        };
        let goal = match goal {
            Some(v) => v,
            None => Self::prompt(&mut lines, "Goal", "What do you want to achieve?")?,
        };

        Ok((business_type, situation, goal))
    }

    fn prompt(lines: &mut impl BufRead, label: &str, hint: &str) -> io::Result<String> {
        print!("{} {} ", format!("{}:", label).cyan().bold(), format!("({})", hint).dimmed());
        io::stdout().flush()?;

        let mut line = String::new();
        lines.read_line(&mut line)?;
        Ok(strip_newline(line))
    }
}

/// Remove a single trailing newline (and carriage return), nothing else
fn strip_newline(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
