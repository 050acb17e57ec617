//! Bounded, newest-first history of successful generations.

use crate::request::Resolution;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Cached outcome of one successful generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRecord {
    pub prompt: String,
    pub resolution: Resolution,
    pub image_url: Option<String>,
    /// Upstream response body, stored verbatim.
    pub raw_response: Value,
    /// RFC 3339 / ISO-8601 UTC timestamp with millisecond precision.
    pub timestamp: String,
}

impl GenerationRecord {
    pub fn new(
        prompt: impl Into<String>,
        resolution: Resolution,
        image_url: Option<String>,
        raw_response: Value,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            resolution,
            image_url,
            raw_response,
            timestamp: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Fixed-capacity store of generation records, newest first.
///
/// Index 0 is always the most recent record. Inserting past capacity evicts
/// the oldest. The store is owned by the server and shared by reference, so
/// separate instances never see each other's records.
#[derive(Debug)]
pub struct HistoryStore {
    capacity: usize,
    entries: RwLock<VecDeque<Arc<GenerationRecord>>>,
}

impl HistoryStore {
    /// Create an empty store holding at most `capacity` records.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: RwLock::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Prepend a record, evicting the oldest one if the store is full.
    pub async fn record(&self, record: GenerationRecord) -> Arc<GenerationRecord> {
        let record = Arc::new(record);
        let mut entries = self.entries.write().await;

        entries.push_front(Arc::clone(&record));
        while entries.len() > self.capacity {
            if let Some(evicted) = entries.pop_back() {
                debug!(prompt_len = evicted.prompt.len(), timestamp = %evicted.timestamp, "Evicted oldest generation");
            }
        }

        debug!(len = entries.len(), capacity = self.capacity, "Recorded generation");
        record
    }

    /// Snapshot of `(index, record)` pairs, newest first.
    ///
    /// The snapshot is independent of later inserts and can be iterated any
    /// number of times.
    pub async fn list(&self) -> Vec<(usize, Arc<GenerationRecord>)> {
        self.entries
            .read()
            .await
            .iter()
            .cloned()
            .enumerate()
            .collect()
    }

    /// Record at `index`, or `None` when out of bounds.
    pub async fn get(&self, index: usize) -> Option<Arc<GenerationRecord>> {
        self.entries.read().await.get(index).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
