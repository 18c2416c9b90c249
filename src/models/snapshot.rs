//! Immutable analysis input.
//!
//! A snapshot bundles the tasks, resources, and dependencies captured
//! from the external stores at one point in time. Analysis never mutates
//! it, so one snapshot can be shared across concurrent callers.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;

use super::{Dependency, Resource, Task};
use crate::error::{Error, Result};

/// Tasks, resources, and dependencies analyzed together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    /// Scheduled tasks.
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Resource directory.
    #[serde(default)]
    pub resources: Vec<Resource>,
    /// Dependency edges.
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl ScheduleSnapshot {
    /// Creates a snapshot from its three streams.
    pub fn new(tasks: Vec<Task>, resources: Vec<Resource>, dependencies: Vec<Dependency>) -> Self {
        Self {
            tasks,
            resources,
            dependencies,
        }
    }

    /// Parses a snapshot from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON snapshot file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json_str(&text)
    }

    /// SHA-256 over the JSON encoding, as lowercase hex.
    ///
    /// Equal snapshots yield equal fingerprints; any edit to a task,
    /// resource, or edge changes it.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        // Serializing plain data with string keys cannot fail.
        if let Ok(bytes) = serde_json::to_vec(self) {
            hasher.update(&bytes);
        }
        format!("{:x}", hasher.finalize())
    }

    /// Looks up a task by id.
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Looks up a resource by id.
    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// Whether there is nothing to analyze.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.dependencies.is_empty()
    }
}
