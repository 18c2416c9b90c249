//! Resource model.
//!
//! Resources are the people, teams, or equipment tasks are assigned to.
//! Each carries a free-form type tag and a capacity in hours over the
//! analysis horizon.

use serde::{Deserialize, Serialize};

/// A resource tasks can be assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Free-form classification (e.g., "developer", "designer", "rig").
    #[serde(default, rename = "type")]
    pub resource_type: String,
    /// Available hours over the analysis horizon.
    #[serde(default)]
    pub capacity_hours: f64,
}

impl Resource {
    /// Creates a resource with the given type tag and zero capacity.
    pub fn new(id: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            resource_type: resource_type.into(),
            capacity_hours: 0.0,
        }
    }

    /// Sets the resource name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the capacity in hours.
    pub fn with_capacity_hours(mut self, hours: f64) -> Self {
        self.capacity_hours = hours;
        self
    }

    /// Capacity usable for utilization math.
    ///
    /// Negative or non-finite capacities are treated as zero.
    pub fn effective_capacity(&self) -> f64 {
        if self.capacity_hours.is_finite() && self.capacity_hours > 0.0 {
            self.capacity_hours
        } else {
            0.0
        }
    }

    /// Display label: the name, or the id when unnamed.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}
