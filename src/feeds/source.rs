//! Target source trait

use crate::feeds::FeedResult;
use crate::processing::IssRecord;
use std::future::Future;

/// Boundary to whatever delivers target records (an HTTP client in production)
pub trait TargetSource: Send {
    /// Fetch the most recent record.
    /// Errors are reported to the tracker, which keeps polling regardless.
    fn fetch(&mut self) -> impl Future<Output = FeedResult<IssRecord>> + Send;

    /// Short name used in log lines
    fn name(&self) -> &str;
}
