//! Observer location and heading channels
//!
//! Device sensors push values through a [`SensorPublisher`]; renderers hold
//! a [`SensorFeed`] and read whatever value is latest. Location and heading
//! are independent channels, so a reader may see a fresh heading next to an
//! older location.

use crate::core::ObserverPosition;
use crate::validation::DataValidator;
use log::{debug, warn};
use tokio::sync::watch;

/// Create a connected publisher/feed pair with no values yet
pub fn sensor_channel() -> (SensorPublisher, SensorFeed) {
    let (location_tx, location_rx) = watch::channel(None);
    let (heading_tx, heading_rx) = watch::channel(None);
    let (error_tx, error_rx) = watch::channel(None);

    (
        SensorPublisher {
            location: location_tx,
            heading: heading_tx,
            error: error_tx,
        },
        SensorFeed {
            location: location_rx,
            heading: heading_rx,
            error: error_rx,
        },
    )
}

/// Write side, owned by the sensor integration
#[derive(Debug)]
pub struct SensorPublisher {
    location: watch::Sender<Option<ObserverPosition>>,
    heading: watch::Sender<Option<f64>>,
    error: watch::Sender<Option<String>>,
}

impl SensorPublisher {
    /// A new fix also clears any earlier sensor error.
    /// Non-finite fixes are reported as errors and dropped.
    pub fn publish_location(&self, position: ObserverPosition) {
        match DataValidator::new().validate_observer(&position) {
            Ok(warnings) => {
                for warning in warnings {
                    warn!("accepting observer fix with {}", warning);
                }
            }
            Err(error) => {
                self.report_error(error.to_string());
                return;
            }
        }

        debug!("observer fix {:.4}, {:.4}", position.latitude, position.longitude);
        self.location.send_replace(Some(position));
        self.error.send_replace(None);
    }

    /// Heading in degrees from true north
    pub fn publish_heading(&self, heading_deg: f64) {
        self.heading.send_replace(Some(heading_deg));
    }

    /// Record a sensor failure; the last location stays in place
    pub fn report_error(&self, message: impl Into<String>) {
        let message = message.into();
        warn!("sensor error: {}", message);
        self.error.send_replace(Some(message));
    }

    /// Attach another reader
    pub fn subscribe(&self) -> SensorFeed {
        SensorFeed {
            location: self.location.subscribe(),
            heading: self.heading.subscribe(),
            error: self.error.subscribe(),
        }
    }
}

/// Read side; cheap to clone
#[derive(Debug, Clone)]
pub struct SensorFeed {
    location: watch::Receiver<Option<ObserverPosition>>,
    heading: watch::Receiver<Option<f64>>,
    error: watch::Receiver<Option<String>>,
}

impl SensorFeed {
    pub fn latest_location(&self) -> Option<ObserverPosition> {
        *self.location.borrow()
    }

    pub fn latest_heading(&self) -> Option<f64> {
        *self.heading.borrow()
    }

    pub fn latest_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    /// Wait until any channel changes.
    /// Returns `false` once the publisher is gone.
    pub async fn changed(&mut self) -> bool {
        tokio::select! {
            result = self.location.changed() => result.is_ok(),
            result = self.heading.changed() => result.is_ok(),
            result = self.error.changed() => result.is_ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_until_published() {
        let (_publisher, feed) = sensor_channel();

        assert_eq!(feed.latest_location(), None);
        assert_eq!(feed.latest_heading(), None);
        assert_eq!(feed.latest_error(), None);
    }

    #[test]
    fn test_latest_value_wins() {
        let (publisher, feed) = sensor_channel();

        publisher.publish_heading(10.0);
        publisher.publish_heading(20.0);
        publisher.publish_location(ObserverPosition::new(59.3, 18.0));

        assert_eq!(feed.latest_heading(), Some(20.0));
        assert_eq!(feed.latest_location(), Some(ObserverPosition::new(59.3, 18.0)));
    }

    #[test]
    fn test_error_keeps_location_until_next_fix() {
        let (publisher, feed) = sensor_channel();

        publisher.publish_location(ObserverPosition::new(1.0, 2.0));
        publisher.report_error("location unavailable");

        assert_eq!(feed.latest_error().as_deref(), Some("location unavailable"));
        assert_eq!(feed.latest_location(), Some(ObserverPosition::new(1.0, 2.0)));

        publisher.publish_location(ObserverPosition::new(3.0, 4.0));
        assert_eq!(feed.latest_error(), None);
    }

    #[test]
    fn test_non_finite_fix_dropped() {
        let (publisher, feed) = sensor_channel();

        publisher.publish_location(ObserverPosition::new(1.0, 2.0));
        publisher.publish_location(ObserverPosition::new(f64::NAN, 2.0));

        assert_eq!(feed.latest_location(), Some(ObserverPosition::new(1.0, 2.0)));
        assert_eq!(
            feed.latest_error().as_deref(),
            Some("observer latitude is not a finite number")
        );
    }

    #[tokio::test]
    async fn test_changed_wakes_on_heading() {
        let (publisher, mut feed) = sensor_channel();
        let extra = publisher.subscribe();

        publisher.publish_heading(90.0);
        assert!(feed.changed().await);
        assert_eq!(extra.latest_heading(), Some(90.0));

        drop(publisher);
        assert!(!feed.changed().await);
    }
}
