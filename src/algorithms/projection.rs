//! Observer-to-target projection for AR placement
//!
//! Converts an observer fix and a target subpoint/altitude into a bearing and
//! elevation, then into a distance-compressed scene offset. Real distances to
//! the ISS are hundreds of kilometers, so the marker is placed at a fixed
//! `scene_radius` along the true direction instead.
//!
//! Elevation uses `atan2(altitude_km, surface_distance_km)`: altitude and the
//! great-circle ground distance are treated as the legs of a right triangle.
//! This ignores Earth curvature and overestimates elevation for distant
//! targets. It is kept as-is because overlays built on it expect this
//! placement; do not use it where a true topocentric elevation is needed.

use crate::core::{
    BearingElevation, ObserverPosition, SceneOffset, TargetPosition, EARTH_MEAN_RADIUS_KM,
};

/// Stateless projector. Identical inputs always give identical outputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryProjector {
    /// Spherical Earth radius used for ground distance (km)
    earth_radius_km: f64,
}

impl Default for GeometryProjector {
    fn default() -> Self {
        Self {
            earth_radius_km: EARTH_MEAN_RADIUS_KM,
        }
    }
}

impl GeometryProjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different spherical Earth radius
    pub fn with_earth_radius(earth_radius_km: f64) -> Self {
        Self { earth_radius_km }
    }

    pub fn earth_radius_km(&self) -> f64 {
        self.earth_radius_km
    }

    /// Project a target into scene space around the observer.
    ///
    /// Defined for every numeric input; coincident observer and subpoint at
    /// zero altitude resolve to elevation `atan2(0, 0) == 0`.
    pub fn project_to_scene(
        &self,
        observer: &ObserverPosition,
        target_lat: f64,
        target_lon: f64,
        target_altitude_km: f64,
        scene_radius: f32,
    ) -> SceneOffset {
        let target = TargetPosition::new(target_lat, target_lon, target_altitude_km);
        let direction = self.bearing_elevation(observer, &target);
        self.scene_offset(&direction, scene_radius)
    }

    /// Project when either side may still be missing, returning `fallback` until both exist
    pub fn project_or_fallback(
        &self,
        observer: Option<&ObserverPosition>,
        target: Option<&TargetPosition>,
        scene_radius: f32,
        fallback: SceneOffset,
    ) -> SceneOffset {
        match (observer, target) {
            (Some(observer), Some(target)) => self.project_to_scene(
                observer,
                target.latitude,
                target.longitude,
                target.altitude_km,
                scene_radius,
            ),
            _ => fallback,
        }
    }

    /// Bearing and elevation from observer to target
    pub fn bearing_elevation(
        &self,
        observer: &ObserverPosition,
        target: &TargetPosition,
    ) -> BearingElevation {
        let distance_km = self.surface_distance_km(observer, target);

        BearingElevation {
            bearing: self.bearing(observer, target),
            elevation: self.elevation(target.altitude_km, distance_km),
        }
    }

    /// Initial great-circle bearing in radians, 0 = north, positive toward east
    pub fn bearing(&self, observer: &ObserverPosition, target: &TargetPosition) -> f64 {
        let observer_lat = observer.latitude.to_radians();
        let observer_lon = observer.longitude.to_radians();
        let target_lat = target.latitude.to_radians();
        let target_lon = target.longitude.to_radians();

        let d_lon = target_lon - observer_lon;
        let y = d_lon.sin() * target_lat.cos();
        let x = observer_lat.cos() * target_lat.sin()
            - observer_lat.sin() * target_lat.cos() * d_lon.cos();

        y.atan2(x)
    }

    /// Haversine ground distance between observer and target subpoint (km)
    pub fn surface_distance_km(&self, observer: &ObserverPosition, target: &TargetPosition) -> f64 {
        let lat1 = observer.latitude.to_radians();
        let lat2 = target.latitude.to_radians();
        let d_lat = (target.latitude - observer.latitude).to_radians();
        let d_lon = (target.longitude - observer.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        // Rounding can push `a` a hair past 1 for antipodal points
        let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

        self.earth_radius_km * c
    }

    /// Flat-triangle elevation angle in radians
    pub fn elevation(&self, altitude_km: f64, surface_distance_km: f64) -> f64 {
        altitude_km.atan2(surface_distance_km)
    }

    /// Place a direction on a sphere of `scene_radius` around the viewer
    pub fn scene_offset(&self, direction: &BearingElevation, scene_radius: f32) -> SceneOffset {
        let radius = scene_radius as f64;
        let (bearing, elevation) = (direction.bearing, direction.elevation);

        let x = radius * elevation.cos() * bearing.sin();
        let y = radius * elevation.sin();
        let z = -(radius * elevation.cos() * bearing.cos());

        SceneOffset::new(x as f32, y as f32, z as f32)
    }
}
