//! Application layer for vyapar-sathi
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::advice_gateway::{AdviceGateway, GatewayError};
pub use use_cases::get_advice::{AdviceController, LifecycleState};
