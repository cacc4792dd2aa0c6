//! Per-frame composition of tracker and sensor state
//!
//! Each frame reads the newest tracker snapshot and the newest sensor
//! values as they are at that moment. There is no barrier between the two
//! feeds: a frame may pair a one-second-old ISS position with a heading
//! that arrived a millisecond ago.

use crate::algorithms::{CompassReading, GeometryProjector};
use crate::api::formatting::{altitude_text, subpoint_text, velocity_text};
use crate::api::tracker::TrackerSnapshot;
use crate::core::{ObserverPosition, SceneOffset};
use crate::feeds::SensorFeed;
use crate::processing::VisibleBody;
use crate::utils::TrackerConfig;
use serde::{Deserialize, Serialize};

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameOutput {
    pub scene_offset: SceneOffset,
    /// True while the marker sits at the fallback placement
    pub used_fallback: bool,
    pub bearing_deg: Option<f64>,
    pub elevation_deg: Option<f64>,
    pub heading_deg: Option<f64>,
    pub altitude_text: String,
    pub velocity_text: String,
    pub subpoint_text: String,
    /// Latest tracker or sensor problem, for display
    pub status_message: Option<String>,
}

/// Builds frames from the latest tracker and sensor values
#[derive(Debug, Clone)]
pub struct FrameCompositor {
    projector: GeometryProjector,
    scene_radius: f32,
    fallback: SceneOffset,
}

impl Default for FrameCompositor {
    fn default() -> Self {
        Self::from_config(&TrackerConfig::default())
    }
}

impl FrameCompositor {
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self {
            projector: GeometryProjector::with_earth_radius(config.earth_radius_km),
            scene_radius: config.scene_radius,
            fallback: config.fallback_offset,
        }
    }

    /// Compose a frame from whatever the sensor feed holds right now
    pub fn compose(&self, snapshot: &TrackerSnapshot, sensors: &SensorFeed) -> FrameOutput {
        self.compose_values(
            snapshot,
            sensors.latest_location(),
            sensors.latest_heading(),
            sensors.latest_error(),
        )
    }

    pub fn compose_values(
        &self,
        snapshot: &TrackerSnapshot,
        observer: Option<ObserverPosition>,
        heading_deg: Option<f64>,
        sensor_error: Option<String>,
    ) -> FrameOutput {
        let record = snapshot.target.as_ref();
        let target = record.map(|r| r.target());

        let direction = match (observer.as_ref(), target.as_ref()) {
            (Some(observer), Some(target)) => Some(self.projector.bearing_elevation(observer, target)),
            _ => None,
        };
        let scene_offset = self.projector.project_or_fallback(
            observer.as_ref(),
            target.as_ref(),
            self.scene_radius,
            self.fallback,
        );

        // Feed errors win over sensor errors, matching the single status line
        let status_message = snapshot
            .error_message
            .clone()
            .or_else(|| sensor_error.map(|message| format!("GPS: {}", message)));

        FrameOutput {
            scene_offset,
            used_fallback: direction.is_none(),
            bearing_deg: direction.map(|d| d.bearing_degrees()),
            elevation_deg: direction.map(|d| d.elevation_degrees()),
            heading_deg,
            altitude_text: altitude_text(record),
            velocity_text: velocity_text(record),
            subpoint_text: subpoint_text(record),
            status_message,
        }
    }

    /// Compass readings for visible bodies, in the order given
    pub fn compass_readings(&self, bodies: &[VisibleBody], heading_deg: Option<f64>) -> Vec<CompassReading> {
        bodies
            .iter()
            .map(|body| CompassReading::for_body(body, heading_deg))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FALLBACK_SCENE_OFFSET;
    use crate::feeds::sensor_channel;
    use crate::processing::IssRecord;

    fn tracked(record: IssRecord) -> TrackerSnapshot {
        TrackerSnapshot {
            target: Some(record),
            successful_updates: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_fallback_without_observer_fix() {
        let compositor = FrameCompositor::default();
        let (_publisher, sensors) = sensor_channel();

        let frame = compositor.compose(&tracked(IssRecord::at(51.5, 0.0, 400.0)), &sensors);

        assert!(frame.used_fallback);
        assert_eq!(frame.scene_offset, FALLBACK_SCENE_OFFSET);
        assert_eq!(frame.bearing_deg, None);
        assert_eq!(frame.altitude_text, "400 km");
        assert_eq!(frame.subpoint_text, "51.50°N 0.00°E");
    }

    #[test]
    fn test_fallback_without_target() {
        let compositor = FrameCompositor::default();
        let (publisher, sensors) = sensor_channel();
        publisher.publish_location(ObserverPosition::new(40.0, -74.0));

        let frame = compositor.compose(&TrackerSnapshot::default(), &sensors);

        assert!(frame.used_fallback);
        assert_eq!(frame.scene_offset, FALLBACK_SCENE_OFFSET);
        assert_eq!(frame.altitude_text, "—");
    }

    #[test]
    fn test_projects_when_both_known() {
        let compositor = FrameCompositor::default();
        let (publisher, sensors) = sensor_channel();
        publisher.publish_location(ObserverPosition::new(40.0, -74.0));
        publisher.publish_heading(45.0);

        let frame = compositor.compose(&tracked(IssRecord::at(51.5, 0.0, 400.0)), &sensors);

        assert!(!frame.used_fallback);
        let bearing = frame.bearing_deg.unwrap();
        assert!(bearing > 0.0 && bearing < 90.0);
        assert!(frame.elevation_deg.unwrap() > 0.0);
        assert_eq!(frame.heading_deg, Some(45.0));
        assert!((frame.scene_offset.magnitude() - 100.0).abs() < 1e-3);
        assert_eq!(frame.status_message, None);
    }

    #[test]
    fn test_scene_radius_from_config() {
        let compositor = FrameCompositor::from_config(&TrackerConfig::default().with_scene_radius(50.0));
        let frame = compositor.compose_values(
            &tracked(IssRecord::at(10.0, 10.0, 400.0)),
            Some(ObserverPosition::new(0.0, 0.0)),
            None,
            None,
        );
        assert!((frame.scene_offset.magnitude() - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_status_message_priority() {
        let compositor = FrameCompositor::default();
        let mut snapshot = tracked(IssRecord::at(0.0, 0.0, 400.0));

        let frame = compositor.compose_values(&snapshot, None, None, Some("denied".to_string()));
        assert_eq!(frame.status_message.as_deref(), Some("GPS: denied"));

        snapshot.error_message = Some("bad server response: status 500".to_string());
        let frame = compositor.compose_values(&snapshot, None, None, Some("denied".to_string()));
        assert_eq!(frame.status_message.as_deref(), Some("bad server response: status 500"));
    }

    #[test]
    fn test_compass_readings_keep_order() {
        let compositor = FrameCompositor::default();
        let bodies = vec![
            VisibleBody {
                id: "moon".to_string(),
                kind: None,
                name: "Moon".to_string(),
                altitude: 40.0,
                azimuth: 200.0,
                magnitude: None,
                constellation: None,
            },
            VisibleBody {
                id: "saturn".to_string(),
                kind: None,
                name: "Saturn".to_string(),
                altitude: 5.0,
                azimuth: 90.0,
                magnitude: Some(0.6),
                constellation: None,
            },
        ];

        let readings = compositor.compass_readings(&bodies, None);
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].name, "Moon");
        assert_eq!(readings[0].pointer_rotation_deg, 200.0);
        assert_eq!(readings[1].pointer_rotation_deg, 90.0);
    }

    #[test]
    fn test_frame_serializes() {
        let compositor = FrameCompositor::default();
        let frame = compositor.compose_values(&TrackerSnapshot::default(), None, None, None);

        let json = crate::api::formatting::frame_to_json(&frame).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["used_fallback"], serde_json::Value::Bool(true));
        assert_eq!(value["scene_offset"]["z"], serde_json::json!(-10.0));
    }
}
