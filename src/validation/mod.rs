//! Data validation for incoming records

pub mod data;

pub use data::{DataValidator, ValidationError, ValidationWarning};
