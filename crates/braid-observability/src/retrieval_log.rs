//! Retrieval logging: query, weights used, per-side counts, citations, latency.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use braid_core::config::defaults::DEFAULT_RETRIEVAL_LOG_CAPACITY;
use braid_core::config::ObservabilityConfig;
use braid_core::models::{FusionReport, QueryClass, WeightPair};
use braid_core::traits::IRetrievalSink;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single retrieval log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalLogEntry {
    pub query_id: Uuid,
    pub query: String,
    pub query_class: QueryClass,
    pub weights: WeightPair,
    pub dense_count: usize,
    pub sparse_count: usize,
    pub merged_count: usize,
    pub overlap_count: usize,
    pub result_count: usize,
    /// Document ids in rank order.
    pub citations: Vec<String>,
    pub latency: Duration,
    pub timestamp_epoch_ms: i64,
}

impl RetrievalLogEntry {
    /// Create a new entry with a fresh id and the timestamp set to now.
    pub fn from_report(query: impl Into<String>, report: &FusionReport, latency: Duration) -> Self {
        Self {
            query_id: Uuid::new_v4(),
            query: query.into(),
            query_class: report.query_class,
            weights: report.weights,
            dense_count: report.counts.dense,
            sparse_count: report.counts.sparse,
            merged_count: report.counts.merged,
            overlap_count: report.counts.overlap,
            result_count: report.items.len(),
            citations: report.citations().into_iter().map(String::from).collect(),
            latency,
            timestamp_epoch_ms: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Bounded, append-only retrieval log. Oldest entries are dropped first.
#[derive(Debug)]
pub struct RetrievalLog {
    entries: Mutex<VecDeque<RetrievalLogEntry>>,
    max_entries: usize,
}

impl RetrievalLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_RETRIEVAL_LOG_CAPACITY)
    }

    /// Create with a custom capacity.
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            max_entries,
        }
    }

    /// Sized by `observability.retrieval_log_capacity`.
    pub fn from_config(config: &ObservabilityConfig) -> Self {
        Self::with_capacity(config.retrieval_log_capacity)
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<RetrievalLogEntry>> {
        // A panic while holding the lock cannot leave the deque half-written.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Record an entry.
    pub fn push(&self, entry: RetrievalLogEntry) {
        tracing::debug!(
            event = "retrieval_logged",
            query_id = %entry.query_id,
            query = %entry.query,
            query_class = ?entry.query_class,
            latency_ms = entry.latency.as_millis() as u64,
            result_count = entry.result_count,
            "retrieval logged"
        );

        if self.max_entries == 0 {
            return;
        }
        let mut entries = self.lock();
        entries.push_back(entry);
        while entries.len() > self.max_entries {
            entries.pop_front();
        }
    }

    /// Snapshot of all entries, oldest first.
    pub fn entries(&self) -> Vec<RetrievalLogEntry> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Average latency across all logged retrievals.
    pub fn avg_latency(&self) -> Duration {
        let entries = self.lock();
        if entries.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = entries.iter().map(|e| e.latency).sum();
        total / entries.len() as u32
    }

    /// Share of merged candidates that both searches returned, averaged over
    /// entries that had any candidates.
    pub fn overlap_ratio(&self) -> f64 {
        let entries = self.lock();
        let (sum, n) = entries
            .iter()
            .filter(|e| e.merged_count > 0)
            .fold((0.0, 0usize), |(sum, n), e| {
                (sum + e.overlap_count as f64 / e.merged_count as f64, n + 1)
            });
        if n == 0 {
            0.0
        } else {
            sum / n as f64
        }
    }

    /// How often each document was cited across all entries.
    pub fn citation_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for entry in self.lock().iter() {
            for doc in &entry.citations {
                *counts.entry(doc.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Serialize all entries as JSON lines.
    pub fn to_json_lines(&self) -> serde_json::Result<String> {
        let mut out = String::new();
        for entry in self.lock().iter() {
            out.push_str(&serde_json::to_string(entry)?);
            out.push('\n');
        }
        Ok(out)
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Default for RetrievalLog {
    fn default() -> Self {
        Self::new()
    }
}

impl IRetrievalSink for RetrievalLog {
    fn record(&self, query: &str, report: &FusionReport, latency: Duration) {
        self.push(RetrievalLogEntry::from_report(query, report, latency));
    }
}
