//! Inputs from external collaborators
//!
//! Target records arrive through a [`TargetSource`] polled by the tracker;
//! observer location and heading arrive through sensor channels.

pub mod error;
pub mod source;
pub mod mock;
pub mod replay;
pub mod sensors;

pub use error::{FeedError, FeedResult};
pub use source::TargetSource;
pub use mock::MockTargetSource;
pub use replay::ReplaySource;
pub use sensors::{sensor_channel, SensorFeed, SensorPublisher};
