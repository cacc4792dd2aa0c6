//! Feed error types

use crate::processing::ParseError;
use thiserror::Error;

/// Failures while fetching a target record
#[derive(Debug, Error)]
pub enum FeedError {
    /// Network or I/O failure reaching the service
    #[error("transport error: {0}")]
    Transport(String),
    /// Service answered outside the 2xx range
    #[error("bad server response: status {status}")]
    BadStatus { status: u16 },
    /// Response body could not be decoded
    #[error("could not decode response: {0}")]
    Decode(#[from] ParseError),
    /// Record decoded but carries unusable values
    #[error("invalid record: {reason}")]
    InvalidRecord { reason: String },
    /// Source is offline
    #[error("source {source_name} is disconnected")]
    Disconnected { source_name: String },
    /// Scripted or recorded source has nothing left to deliver
    #[error("source exhausted")]
    Exhausted,
}

/// Result type for feed operations
pub type FeedResult<T> = Result<T, FeedError>;

impl FeedError {
    /// Whether retrying on the next poll is likely to succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            FeedError::Transport(_) | FeedError::BadStatus { .. } | FeedError::Disconnected { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(FeedError::Transport("timed out".to_string()).is_transient());
        assert!(FeedError::BadStatus { status: 503 }.is_transient());
        assert!(!FeedError::Exhausted.is_transient());
        assert!(!FeedError::InvalidRecord { reason: "nan".to_string() }.is_transient());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            FeedError::BadStatus { status: 500 }.to_string(),
            "bad server response: status 500"
        );
        assert_eq!(
            FeedError::Disconnected { source_name: "mock".to_string() }.to_string(),
            "source mock is disconnected"
        );
    }
}
