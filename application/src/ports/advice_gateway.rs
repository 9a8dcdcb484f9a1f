//! Advice gateway port
//!
//! Defines the interface for requesting a recommendation from the
//! external text-generation service.

use async_trait::async_trait;
use thiserror::Error;
use vyapar_domain::AdviceRequest;

/// Generic message shown to the user for any gateway failure.
///
/// Transport failures and empty responses are deliberately collapsed
/// into one human-readable message; the distinction survives only in
/// diagnostic logging and in the [`GatewayError`] variant itself.
pub const GATEWAY_FAILURE_MESSAGE: &str =
    "Failed to get advice from the AI. Please check your connection and API key.";

/// Errors that can occur during an advice request
///
/// Kept as a tagged variant so a future retry policy could discriminate
/// retryable transport errors from non-retryable empty responses without
/// reshaping the controller.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Received an empty response from the model")]
    EmptyResponse,
}

impl GatewayError {
    /// The uniform user-facing message for this failure
    pub fn user_message(&self) -> &'static str {
        GATEWAY_FAILURE_MESSAGE
    }

    /// Whether a retry could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, GatewayError::Transport(_))
    }
}

/// Gateway for the advisor model
///
/// This port defines how the application layer requests advice.
/// Implementations (adapters) live in the infrastructure layer.
/// One call per submission; no retry, no caching, no streaming.
#[async_trait]
pub trait AdviceGateway: Send + Sync {
    /// Send the advice request and return the raw response text
    async fn request_advice(&self, request: &AdviceRequest) -> Result<String, GatewayError>;
}
