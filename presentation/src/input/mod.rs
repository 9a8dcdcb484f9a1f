//! Interactive input

pub mod form;
