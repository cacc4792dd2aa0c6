//! Sky Tracking Geometry
//!
//! Projects an orbiting target (the ISS) into an AR scene around an observer
//! on the ground, and turns sky-object azimuths into compass rotations.
//! Around that core sit record decoding, a polling tracker with
//! last-known-good state, and sensor channels for observer location and
//! heading.

pub mod core;
pub mod algorithms;
pub mod processing;
pub mod validation;
pub mod utils;
pub mod feeds;
pub mod api;

// Re-export commonly used types
pub use crate::core::{
    BearingElevation, ObserverPosition, PointerAngle, SceneOffset, TargetPosition,
    DEFAULT_SCENE_RADIUS, EARTH_MEAN_RADIUS_KM, FALLBACK_SCENE_OFFSET,
};
pub use crate::algorithms::{pointer_rotation, rose_rotation, CompassReading, GeometryProjector};
pub use crate::processing::{IssRecord, VisibleBody};
pub use crate::feeds::{sensor_channel, FeedError, MockTargetSource, ReplaySource, SensorFeed, SensorPublisher, TargetSource};
pub use crate::api::{ApiError, ApiResult, FrameCompositor, FrameOutput, Tracker, TrackerHandle, TrackerSnapshot};
pub use crate::utils::{ConfigurationManager, LogLevel, TrackerConfig};
