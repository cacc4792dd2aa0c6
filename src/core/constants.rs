//! Physical constants and rendering defaults

use super::types::SceneOffset;

/// Mean Earth radius (km), spherical model used for surface distances
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0088;

/// Default distance of the AR marker from the viewer (scene units)
pub const DEFAULT_SCENE_RADIUS: f32 = 100.0;

/// Marker placement used while no observer fix or target record exists
pub const FALLBACK_SCENE_OFFSET: SceneOffset = SceneOffset::new(0.0, 0.0, -10.0);

/// Default target polling interval (milliseconds)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
