//! Advice request value object

use serde::{Deserialize, Serialize};

/// A business advice request (Value Object)
///
/// Carries the three pieces of free-text context the user supplies:
/// what the business is, what the current situation or problem looks
/// like, and what the user wants to achieve. All three must be
/// non-empty before a request goes out; there is no further validation
/// and no trimming — user text is passed through opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceRequest {
    pub business_type: String,
    pub situation: String,
    pub goal: String,
}

impl AdviceRequest {
    pub fn new(
        business_type: impl Into<String>,
        situation: impl Into<String>,
        goal: impl Into<String>,
    ) -> Self {
        Self {
            business_type: business_type.into(),
            situation: situation.into(),
            goal: goal.into(),
        }
    }

    /// All three fields are non-empty.
    ///
    /// Exact string emptiness — a field of only whitespace counts as
    /// filled, matching the submit gate of the original form.
    pub fn is_complete(&self) -> bool {
        !self.business_type.is_empty() && !self.situation.is_empty() && !self.goal.is_empty()
    }

    /// The canonical cafe example used by the "use an example" affordance.
    pub fn example() -> Self {
        Self::new(
            "Cafe",
            "Weekdays mein cafe almost khaali rehta hai. Weekend pe rush hota hai. \
             Discount dena chahiye ya kuch aur try karna chahiye?",
            "Increase weekday footfall",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_request() {
        let req = AdviceRequest::new("Cafe", "Slow weekdays", "More footfall");
        assert!(req.is_complete());
    }

    #[test]
    fn test_missing_field_is_incomplete() {
        assert!(!AdviceRequest::new("", "Slow weekdays", "More footfall").is_complete());
        assert!(!AdviceRequest::new("Cafe", "", "More footfall").is_complete());
        assert!(!AdviceRequest::new("Cafe", "Slow weekdays", "").is_complete());
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        // The gate is exact emptiness, not trimmed emptiness
        let req = AdviceRequest::new(" ", "Slow weekdays", "More footfall");
        assert!(req.is_complete());
    }

    #[test]
    fn test_example_is_complete() {
        assert!(AdviceRequest::example().is_complete());
    }
}
