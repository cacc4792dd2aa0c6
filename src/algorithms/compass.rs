//! Compass widget rotations
//!
//! The rose is rotated by the negative device heading so north stays
//! pointing north; the needle is rotated by the target azimuth relative to
//! that heading. Neither value is wrapped into [0, 360): the drawing layer
//! accepts any signed angle.

use crate::core::PointerAngle;
use crate::processing::parser::VisibleBody;
use serde::{Deserialize, Serialize};

/// Needle rotation for a target azimuth; a missing heading counts as 0
pub fn pointer_rotation(target_azimuth_deg: f64, observer_heading_deg: Option<f64>) -> PointerAngle {
    target_azimuth_deg - observer_heading_deg.unwrap_or(0.0)
}

/// Rose rotation that keeps the printed north aligned with true north
pub fn rose_rotation(observer_heading_deg: Option<f64>) -> PointerAngle {
    -observer_heading_deg.unwrap_or(0.0)
}

/// Label for a cardinal or intercardinal tick, `None` for any other angle
pub fn compass_point_label(degrees: i32) -> Option<&'static str> {
    match degrees.rem_euclid(360) {
        0 => Some("N"),
        45 => Some("NE"),
        90 => Some("E"),
        135 => Some("SE"),
        180 => Some("S"),
        225 => Some("SW"),
        270 => Some("W"),
        315 => Some("NW"),
        _ => None,
    }
}

/// Everything the compass widget needs to draw one sky object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompassReading {
    pub name: String,
    /// Degrees above the horizon
    pub altitude_deg: f64,
    pub azimuth_deg: f64,
    pub rose_rotation_deg: PointerAngle,
    pub pointer_rotation_deg: PointerAngle,
}

impl CompassReading {
    pub fn for_body(body: &VisibleBody, heading_deg: Option<f64>) -> Self {
        Self {
            name: body.name.clone(),
            altitude_deg: body.altitude,
            azimuth_deg: body.azimuth,
            rose_rotation_deg: rose_rotation(heading_deg),
            pointer_rotation_deg: pointer_rotation(body.azimuth, heading_deg),
        }
    }

    pub fn is_above_horizon(&self) -> bool {
        self.altitude_deg > 0.0
    }
}
