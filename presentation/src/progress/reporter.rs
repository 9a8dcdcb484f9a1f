//! Loading spinner shown while the advice request is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner for the Loading lifecycle state
///
/// Covers the only suspension point in the flow: the single outbound
/// advisor call. Cleared before the card or error is rendered.
pub struct AdviceSpinner {
    bar: ProgressBar,
}

impl AdviceSpinner {
    /// Start a ticking spinner on stderr
    pub fn start() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message("Analyzing your situation... This may take a moment.");
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// A spinner that draws nothing (for --quiet)
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Stop and erase the spinner
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_spinner_finishes_cleanly() {
        let spinner = AdviceSpinner::hidden();
        spinner.finish();
    }
}
