//! Core data types for observer/target geometry

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Observer location on the Earth's surface, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl ObserverPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Tracked target: subpoint in degrees plus height above the surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetPosition {
    pub latitude: f64,
    pub longitude: f64,
    /// Straight-line height above the subpoint (kilometers)
    pub altitude_km: f64,
}

impl TargetPosition {
    pub fn new(latitude: f64, longitude: f64, altitude_km: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude_km,
        }
    }
}

/// Direction from observer to target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BearingElevation {
    /// Radians clockwise from true north, in (-pi, pi]
    pub bearing: f64,
    /// Radians above the local horizon
    pub elevation: f64,
}

impl BearingElevation {
    pub fn bearing_degrees(&self) -> f64 {
        self.bearing.to_degrees()
    }

    pub fn elevation_degrees(&self) -> f64 {
        self.elevation.to_degrees()
    }
}

/// Placement of a marker in AR scene space.
///
/// -z is straight ahead of a camera at the origin aligned to true north,
/// +y is up and +x is east.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneOffset {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl SceneOffset {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn to_vector(&self) -> Vector3<f32> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn magnitude(&self) -> f32 {
        self.to_vector().norm()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<SceneOffset> for Vector3<f32> {
    fn from(offset: SceneOffset) -> Self {
        offset.to_vector()
    }
}

/// Signed rotation in degrees for a 2D compass needle
pub type PointerAngle = f64;
