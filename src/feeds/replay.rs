//! Replay of recorded ISS positions

use crate::feeds::{FeedError, FeedResult, TargetSource};
use crate::processing::{parse_iss_records, IssRecord};
use log::info;
use std::fs;
use std::path::Path;

/// Cycles through recorded records, one per fetch
pub struct ReplaySource {
    records: Vec<IssRecord>,
    cursor: usize,
    looping: bool,
}

impl ReplaySource {
    pub fn new(records: Vec<IssRecord>) -> Self {
        Self {
            records,
            cursor: 0,
            looping: true,
        }
    }

    /// Load a JSON array of records
    pub fn from_file<P: AsRef<Path>>(path: P) -> FeedResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| FeedError::Transport(format!("reading {}: {}", path.display(), e)))?;
        let records = parse_iss_records(&content)?;
        info!("loaded {} replay records from {}", records.len(), path.display());
        Ok(Self::new(records))
    }

    /// Stop after the last record instead of wrapping around
    pub fn once(mut self) -> Self {
        self.looping = false;
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TargetSource for ReplaySource {
    async fn fetch(&mut self) -> FeedResult<IssRecord> {
        if self.records.is_empty() {
            return Err(FeedError::Exhausted);
        }
        if self.cursor >= self.records.len() {
            if !self.looping {
                return Err(FeedError::Exhausted);
            }
            self.cursor = 0;
        }

        let record = self.records[self.cursor].clone();
        self.cursor += 1;
        Ok(record)
    }

    fn name(&self) -> &str {
        "replay"
    }
}
