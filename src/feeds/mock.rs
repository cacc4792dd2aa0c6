//! Scripted target source for testing and development

use crate::feeds::{FeedError, FeedResult, TargetSource};
use crate::processing::IssRecord;
use std::collections::VecDeque;

/// Source that replays a queue of scripted results, one per fetch
pub struct MockTargetSource {
    name: String,
    script: VecDeque<FeedResult<IssRecord>>,
    connected: bool,
    fetch_count: u32,
}

impl MockTargetSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            script: VecDeque::new(),
            connected: true,
            fetch_count: 0,
        }
    }

    /// Queue a successful fetch
    pub fn push_record(&mut self, record: IssRecord) {
        self.script.push_back(Ok(record));
    }

    /// Queue a failed fetch
    pub fn push_error(&mut self, error: FeedError) {
        self.script.push_back(Err(error));
    }

    pub fn with_records(mut self, records: impl IntoIterator<Item = IssRecord>) -> Self {
        self.script.extend(records.into_iter().map(Ok));
        self
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    pub fn reconnect(&mut self) {
        self.connected = true;
    }

    pub fn fetch_count(&self) -> u32 {
        self.fetch_count
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl TargetSource for MockTargetSource {
    async fn fetch(&mut self) -> FeedResult<IssRecord> {
        self.fetch_count += 1;

        if !self.connected {
            return Err(FeedError::Disconnected {
                source_name: self.name.clone(),
            });
        }

        self.script.pop_front().unwrap_or(Err(FeedError::Exhausted))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
