//! Core types and constants for observer/target geometry

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
