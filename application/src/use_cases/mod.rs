//! Application use cases

pub mod get_advice;
