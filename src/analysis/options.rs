//! Analysis options.

use serde::{Deserialize, Serialize};

use crate::detection::CapacityThresholds;
use crate::error::Result;

/// Caller-supplied analysis settings.
///
/// Deserializes with defaults for any missing field, so `{}` is a valid
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Keep only critical findings.
    pub critical_only: bool,
    /// Run the four detectors on the rayon thread pool.
    ///
    /// Results are identical to a sequential run.
    pub parallel: bool,
    /// Over-allocation thresholds.
    pub capacity: CapacityThresholds,
}

impl AnalysisOptions {
    /// Default options: every severity, sequential, 100% / 150% thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps only critical findings.
    pub fn critical_only(mut self) -> Self {
        self.critical_only = true;
        self
    }

    /// Runs detectors in parallel.
    pub fn with_parallel(mut self) -> Self {
        self.parallel = true;
        self
    }

    /// Sets the over-allocation thresholds.
    pub fn with_capacity_thresholds(mut self, thresholds: CapacityThresholds) -> Self {
        self.capacity = thresholds;
        self
    }

    /// Parses options from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Key of the settings that change the result. `parallel` is excluded.
    pub(crate) fn result_key(&self) -> String {
        format!(
            "critical_only={};warn>{};crit>{}",
            self.critical_only, self.capacity.warning_above_pct, self.capacity.critical_above_pct
        )
    }
}
