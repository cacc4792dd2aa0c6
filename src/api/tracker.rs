//! Polling tracker for the target position
//!
//! A background task fetches a fresh record every poll interval and
//! publishes a [`TrackerSnapshot`] over a watch channel. A failed fetch
//! never clears the last good record: it only sets the error message shown
//! to the user, and the loop keeps going until the handle is stopped.

use crate::api::types::{ApiError, ApiResult};
use crate::feeds::{FeedError, FeedResult, TargetSource};
use crate::processing::IssRecord;
use crate::utils::TrackerConfig;
use crate::validation::DataValidator;
use log::{debug, info, warn};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Last-known-good tracking state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerSnapshot {
    /// Most recent record that decoded and validated
    pub target: Option<IssRecord>,
    /// User-facing message for the latest failure, cleared on success
    pub error_message: Option<String>,
    pub successful_updates: u64,
    pub failed_updates: u64,
}

impl TrackerSnapshot {
    /// Fold one fetch result into the snapshot
    pub fn apply(&mut self, result: FeedResult<IssRecord>, validator: &DataValidator) {
        match result.and_then(|record| check_record(record, validator)) {
            Ok(record) => {
                self.target = Some(record);
                self.error_message = None;
                self.successful_updates += 1;
            }
            Err(error) => {
                if error.is_transient() {
                    debug!("target fetch failed: {}", error);
                } else {
                    warn!("target fetch failed: {}", error);
                }
                self.error_message = Some(error.to_string());
                self.failed_updates += 1;
            }
        }
    }

    pub fn total_updates(&self) -> u64 {
        self.successful_updates + self.failed_updates
    }
}

fn check_record(record: IssRecord, validator: &DataValidator) -> FeedResult<IssRecord> {
    let warnings = validator
        .validate_record(&record)
        .map_err(|e| FeedError::InvalidRecord { reason: e.to_string() })?;
    for warning in warnings {
        warn!("accepting target record with {}", warning);
    }
    Ok(record)
}

/// Configured tracker, not yet running
pub struct Tracker<S> {
    source: S,
    poll_interval: Duration,
    validator: DataValidator,
}

impl<S: TargetSource + 'static> Tracker<S> {
    pub fn new(source: S, config: &TrackerConfig) -> ApiResult<Self> {
        config.validate()?;
        Ok(Self {
            source,
            poll_interval: config.poll_interval(),
            validator: DataValidator::with_max_altitude(config.max_altitude_km),
        })
    }

    /// Fetch once and fold the result into `snapshot`
    pub async fn poll_once(&mut self, snapshot: &mut TrackerSnapshot) {
        let result = self.source.fetch().await;
        snapshot.apply(result, &self.validator);
    }

    /// Start polling on the current tokio runtime
    pub fn spawn(self) -> ApiResult<TrackerHandle> {
        let runtime = Handle::try_current().map_err(|_| ApiError::NoRuntime)?;
        let (tx, rx) = watch::channel(TrackerSnapshot::default());

        info!(
            "tracking target from {} every {} ms",
            self.source.name(),
            self.poll_interval.as_millis()
        );
        let task = runtime.spawn(self.run(tx));

        Ok(TrackerHandle {
            snapshots: rx,
            task: Some(task),
        })
    }

    async fn run(mut self, tx: watch::Sender<TrackerSnapshot>) {
        loop {
            let result = self.source.fetch().await;
            let validator = &self.validator;
            tx.send_modify(|snapshot| snapshot.apply(result, validator));

            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

/// Handle to a running tracker. Dropping it stops polling.
#[derive(Debug)]
pub struct TrackerHandle {
    snapshots: watch::Receiver<TrackerSnapshot>,
    task: Option<JoinHandle<()>>,
}

impl TrackerHandle {
    /// Latest state; values stay readable after `stop`
    pub fn snapshot(&self) -> TrackerSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver that wakes on every update
    pub fn subscribe(&self) -> watch::Receiver<TrackerSnapshot> {
        self.snapshots.clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Cancel polling. No further updates are published.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            info!("target tracking stopped");
        }
    }
}

impl Drop for TrackerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeds::MockTargetSource;

    fn fast_config() -> TrackerConfig {
        TrackerConfig::default().with_poll_interval_ms(5)
    }

    async fn wait_for_updates(rx: &mut watch::Receiver<TrackerSnapshot>, count: u64) -> TrackerSnapshot {
        tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                let snapshot = rx.borrow_and_update().clone();
                if snapshot.total_updates() >= count {
                    return snapshot;
                }
                rx.changed().await.expect("tracker task ended");
            }
        })
        .await
        .expect("timed out waiting for tracker")
    }

    #[test]
    fn test_apply_keeps_last_good_record() {
        let validator = DataValidator::new();
        let mut snapshot = TrackerSnapshot::default();

        snapshot.apply(Ok(IssRecord::at(10.0, 20.0, 410.0)), &validator);
        assert_eq!(snapshot.error_message, None);

        snapshot.apply(Err(FeedError::BadStatus { status: 503 }), &validator);
        assert_eq!(snapshot.target.as_ref().map(|r| r.latitude), Some(10.0));
        assert_eq!(snapshot.error_message.as_deref(), Some("bad server response: status 503"));

        snapshot.apply(Ok(IssRecord::at(11.0, 21.0, 411.0)), &validator);
        assert_eq!(snapshot.target.as_ref().map(|r| r.latitude), Some(11.0));
        assert_eq!(snapshot.error_message, None);
        assert_eq!(snapshot.successful_updates, 2);
        assert_eq!(snapshot.failed_updates, 1);
    }

    #[test]
    fn test_apply_rejects_non_finite_record() {
        let validator = DataValidator::new();
        let mut snapshot = TrackerSnapshot::default();

        snapshot.apply(Ok(IssRecord::at(10.0, 20.0, 410.0)), &validator);
        snapshot.apply(Ok(IssRecord::at(f64::NAN, 20.0, 410.0)), &validator);

        assert_eq!(snapshot.target.as_ref().map(|r| r.latitude), Some(10.0));
        assert!(snapshot.error_message.unwrap().starts_with("invalid record"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let source = MockTargetSource::new("mock");
        let config = TrackerConfig::default().with_poll_interval_ms(0);
        assert!(matches!(Tracker::new(source, &config), Err(ApiError::Config(_))));
    }

    #[test]
    fn test_spawn_without_runtime() {
        let tracker = Tracker::new(MockTargetSource::new("mock"), &fast_config()).unwrap();
        assert!(matches!(tracker.spawn(), Err(ApiError::NoRuntime)));
    }

    #[tokio::test]
    async fn test_poll_once() {
        let source = MockTargetSource::new("mock").with_records([IssRecord::at(1.0, 2.0, 400.0)]);
        let mut tracker = Tracker::new(source, &fast_config()).unwrap();
        let mut snapshot = TrackerSnapshot::default();

        tracker.poll_once(&mut snapshot).await;
        tracker.poll_once(&mut snapshot).await;

        assert_eq!(snapshot.successful_updates, 1);
        assert_eq!(snapshot.error_message.as_deref(), Some("source exhausted"));
        assert_eq!(snapshot.target.map(|r| r.altitude), Some(400.0));
    }

    #[tokio::test]
    async fn test_polling_survives_failures() {
        let mut source = MockTargetSource::new("mock");
        source.push_record(IssRecord::at(5.0, 6.0, 420.0));
        source.push_error(FeedError::Transport("connection reset".to_string()));

        let mut handle = Tracker::new(source, &fast_config()).unwrap().spawn().unwrap();
        let mut rx = handle.subscribe();

        // Keeps polling past the scripted error and into exhaustion
        let snapshot = wait_for_updates(&mut rx, 4).await;
        assert!(handle.is_running());
        assert_eq!(snapshot.successful_updates, 1);
        assert!(snapshot.failed_updates >= 3);
        assert_eq!(snapshot.target.as_ref().map(|r| r.latitude), Some(5.0));
        assert_eq!(snapshot.error_message.as_deref(), Some("source exhausted"));

        handle.stop();
        assert!(!handle.is_running());
    }

    #[tokio::test]
    async fn test_stop_halts_updates() {
        let source = MockTargetSource::new("mock").with_records((0..1000).map(|i| IssRecord::at(i as f64 * 0.01, 0.0, 400.0)));

        let mut handle = Tracker::new(source, &fast_config()).unwrap().spawn().unwrap();
        let mut rx = handle.subscribe();
        wait_for_updates(&mut rx, 2).await;

        handle.stop();
        let frozen = handle.snapshot();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(handle.snapshot(), frozen);
        assert!(frozen.target.is_some());

        // Idempotent
        handle.stop();
    }
}
