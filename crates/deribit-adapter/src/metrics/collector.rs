/*
[INPUT]:  Checkpoints from operation start/stop brackets
[OUTPUT]: Bounded latency history and running min/max/total/count aggregates
[POS]:    Metrics layer - the one shared-state subsystem of the crate
[UPDATE]: When history capacity or aggregate fields change
*/

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

/// Oldest records are evicted once the history grows past this
const HISTORY_CAPACITY: usize = 1000;

/// One recorded latency sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatencyRecord {
    pub operation: String,
    pub duration_ms: f64,
    pub timestamp: DateTime<Utc>,
}

/// Running aggregate for one operation name
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperationStats {
    pub min_ms: f64,
    pub max_ms: f64,
    pub total_ms: f64,
    pub count: u64,
}

impl Default for OperationStats {
    fn default() -> Self {
        Self {
            min_ms: f64::INFINITY,
            max_ms: 0.0,
            total_ms: 0.0,
            count: 0,
        }
    }
}

impl OperationStats {
    /// Mean duration, or 0 when nothing has been recorded
    pub fn average_ms(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_ms / self.count as f64
        }
    }

    fn fold(&mut self, duration_ms: f64) {
        self.min_ms = self.min_ms.min(duration_ms);
        self.max_ms = self.max_ms.max(duration_ms);
        self.total_ms += duration_ms;
        self.count += 1;
    }
}

/// Opaque timestamp handle returned by `start`, consumed by `stop`
#[derive(Debug)]
pub struct Checkpoint {
    started: Instant,
}

#[derive(Debug, Default)]
struct MetricsInner {
    history: VecDeque<LatencyRecord>,
    stats: HashMap<String, OperationStats>,
}

/// Thread-safe bounded-history latency recorder.
///
/// Constructed once at process start and injected wherever operations are
/// timed. All mutating and reading calls go through one mutex guarding the
/// history and the aggregate map together; no call blocks while holding it.
#[derive(Debug, Default)]
pub struct MetricsCollector {
    inner: Mutex<MetricsInner>,
    detailed_logging: AtomicBool,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture a monotonic checkpoint for a round trip about to start
    pub fn start(&self) -> Checkpoint {
        Checkpoint {
            started: Instant::now(),
        }
    }

    /// Like `start`, announcing the operation when detailed logging is on
    pub fn start_labeled(&self, label: &str) -> Checkpoint {
        if self.detailed_logging.load(Ordering::Relaxed) {
            info!(operation = label, "operation started");
        }
        self.start()
    }

    /// Close a checkpoint, record the sample, and return the elapsed milliseconds
    pub fn stop(&self, checkpoint: Checkpoint, operation: &str) -> f64 {
        let duration_ms = checkpoint.started.elapsed().as_secs_f64() * 1000.0;
        self.record(operation, duration_ms);
        duration_ms
    }

    /// Record one sample directly.
    ///
    /// Appends to the bounded history (oldest evicted first past capacity)
    /// and folds the duration into the operation's running aggregate.
    pub fn record(&self, operation: &str, duration_ms: f64) {
        let stats = {
            let mut inner = self.lock();
            inner.history.push_back(LatencyRecord {
                operation: operation.to_string(),
                duration_ms,
                timestamp: Utc::now(),
            });
            if inner.history.len() > HISTORY_CAPACITY {
                inner.history.pop_front();
            }
            let entry = inner.stats.entry(operation.to_string()).or_default();
            entry.fold(duration_ms);
            *entry
        };

        if self.detailed_logging.load(Ordering::Relaxed) {
            info!(
                operation,
                duration_ms,
                average_ms = stats.average_ms(),
                min_ms = stats.min_ms,
                max_ms = stats.max_ms,
                count = stats.count,
                "operation completed"
            );
        }
    }

    /// Mean duration for an operation, 0 if it was never recorded
    pub fn average(&self, operation: &str) -> f64 {
        self.lock()
            .stats
            .get(operation)
            .map(OperationStats::average_ms)
            .unwrap_or(0.0)
    }

    /// Running aggregate for an operation, if it has ever been recorded
    pub fn stats(&self, operation: &str) -> Option<OperationStats> {
        self.lock().stats.get(operation).copied()
    }

    /// Averages for every operation seen since the last reset
    pub fn snapshot(&self) -> HashMap<String, f64> {
        self.lock()
            .stats
            .iter()
            .map(|(operation, stats)| (operation.clone(), stats.average_ms()))
            .collect()
    }

    /// Copy of the bounded history, oldest first
    pub fn history(&self) -> Vec<LatencyRecord> {
        self.lock().history.iter().cloned().collect()
    }

    pub fn history_len(&self) -> usize {
        self.lock().history.len()
    }

    /// Clear history and all aggregates in one step
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.history.clear();
        inner.stats.clear();
    }

    /// Toggle the reporting side channel; recorded data is unaffected
    pub fn set_detailed_logging(&self, enabled: bool) {
        self.detailed_logging.store(enabled, Ordering::Relaxed);
    }

    pub fn detailed_logging(&self) -> bool {
        self.detailed_logging.load(Ordering::Relaxed)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MetricsInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
