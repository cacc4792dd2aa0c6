//! Common API types

use crate::feeds::FeedError;
use crate::utils::ConfigError;
use thiserror::Error;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Configuration rejected before starting
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Feed failure surfaced to a direct caller
    #[error(transparent)]
    Feed(#[from] FeedError),
    /// Background work was requested outside a tokio runtime
    #[error("no tokio runtime available to run the tracker")]
    NoRuntime,
    /// Frame could not be serialized
    #[error("could not serialize frame: {0}")]
    Serialization(#[from] serde_json::Error),
}
