//! Runtime surface around the geometry core
//!
//! A [`Tracker`] polls the target source in the background, a
//! [`FrameCompositor`] turns the latest tracker and sensor state into a
//! renderable frame, and `formatting` provides the text readouts.

pub mod types;
pub mod tracker;
pub mod frame;
pub mod formatting;

pub use types::{ApiError, ApiResult};
pub use tracker::{Tracker, TrackerHandle, TrackerSnapshot};
pub use frame::{FrameCompositor, FrameOutput};
pub use formatting::{altitude_text, velocity_text, subpoint_text, frame_to_json};
