//! Caller-owned memoization of analysis results.
//!
//! Analysis holds no state of its own. Callers that re-analyze the same
//! snapshot repeatedly (e.g., on every UI refresh) can keep an
//! [`AnalysisCache`], keyed by snapshot fingerprint and the options that
//! affect the result.

use std::collections::HashMap;
use tracing::debug;

use super::{analyze_snapshot, AnalysisOptions, ConflictReport};
use crate::models::ScheduleSnapshot;

/// Reports keyed by `(snapshot fingerprint, result-affecting options)`.
#[derive(Debug, Clone, Default)]
pub struct AnalysisCache {
    entries: HashMap<String, ConflictReport>,
}

impl AnalysisCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached report, analyzing on a miss.
    pub fn get_or_analyze(
        &mut self,
        snapshot: &ScheduleSnapshot,
        options: &AnalysisOptions,
    ) -> &ConflictReport {
        let key = format!("{}|{}", snapshot.fingerprint(), options.result_key());
        if self.entries.contains_key(&key) {
            debug!(key = %key, "analysis cache hit");
        } else {
            debug!(key = %key, "analysis cache miss");
        }
        self.entries
            .entry(key)
            .or_insert_with(|| analyze_snapshot(snapshot, options))
    }

    /// Number of cached reports.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached report.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
