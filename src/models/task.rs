//! Scheduled task model.
//!
//! A task is a unit of work that has already been placed on the calendar
//! by an external scheduler. The conflict engine only reads tasks.
//!
//! # Time Representation
//! Intervals are half-open: `[start, end)`. A task ending exactly when
//! another begins does not overlap it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task with a materialized time slot and resource assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Human-readable title.
    #[serde(default)]
    pub title: String,
    /// Inclusive start instant.
    pub start: DateTime<Utc>,
    /// Exclusive end instant.
    pub end: DateTime<Utc>,
    /// Planned effort in hours.
    #[serde(default)]
    pub duration_hours: f64,
    /// Resources this task is assigned to (zero or more).
    #[serde(default)]
    pub assigned_resource_ids: Vec<String>,
}

impl Task {
    /// Creates a task occupying `[start, end)`.
    pub fn new(id: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            start,
            end,
            duration_hours: 0.0,
            assigned_resource_ids: Vec::new(),
        }
    }

    /// Sets the task title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the planned effort in hours.
    pub fn with_duration_hours(mut self, hours: f64) -> Self {
        self.duration_hours = hours;
        self
    }

    /// Assigns a resource.
    pub fn with_resource(mut self, resource_id: impl Into<String>) -> Self {
        self.assigned_resource_ids.push(resource_id.into());
        self
    }

    /// Replaces the resource assignments.
    pub fn with_resources(mut self, resource_ids: Vec<String>) -> Self {
        self.assigned_resource_ids = resource_ids;
        self
    }

    /// Whether the interval is empty or reversed.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start >= self.end
    }

    /// Half-open interval overlap test.
    ///
    /// Symmetric. Degenerate intervals never overlap anything,
    /// including themselves.
    pub fn overlaps(&self, other: &Task) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        other.start < self.end && self.start < other.end
    }

    /// Hours this task commits against its resources.
    ///
    /// Negative or non-finite durations count as zero.
    pub fn committed_hours(&self) -> f64 {
        if self.duration_hours.is_finite() && self.duration_hours > 0.0 {
            self.duration_hours
        } else {
            0.0
        }
    }

    /// Whether the task is assigned to the given resource.
    pub fn is_assigned_to(&self, resource_id: &str) -> bool {
        self.assigned_resource_ids.iter().any(|r| r == resource_id)
    }

    /// Display label: the title, or the id when untitled.
    pub fn label(&self) -> &str {
        if self.title.is_empty() {
            &self.id
        } else {
            &self.title
        }
    }
}

#[cfg(test)]
pub(crate) fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    use chrono::TimeZone;
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single().unwrap()
}
