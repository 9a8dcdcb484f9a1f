//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Please fill out all fields to get advice.")]
    IncompleteRequest,
}
