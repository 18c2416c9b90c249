//! Capacity accounting per resource.
//!
//! Sums the committed hours of every task assigned to a resource and
//! compares them with the resource's capacity over the analysis horizon.
//!
//! | Utilization | Result |
//! |-------------|--------|
//! | ≤ 100% | no conflict |
//! | > 100%, ≤ 150% | warning |
//! | > 150% | critical |
//!
//! A capacity of zero (or below) yields 0% utilization.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::group_by_resource;
use crate::models::{Conflict, Resource, Severity, Task};

/// Utilization thresholds, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapacityThresholds {
    /// Utilization strictly above this is over-allocated.
    pub warning_above_pct: f64,
    /// Utilization strictly above this is critical.
    pub critical_above_pct: f64,
}

impl Default for CapacityThresholds {
    fn default() -> Self {
        Self {
            warning_above_pct: 100.0,
            critical_above_pct: 150.0,
        }
    }
}

impl CapacityThresholds {
    /// Classifies a utilization percentage. `None` = within capacity.
    pub fn classify(&self, utilization_pct: f64) -> Option<Severity> {
        if utilization_pct > self.critical_above_pct {
            Some(Severity::Critical)
        } else if utilization_pct > self.warning_above_pct {
            Some(Severity::Warning)
        } else {
            None
        }
    }
}

/// Committed work on one resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceLoad {
    /// Resource identifier.
    pub resource_id: String,
    /// Sum of committed hours of assigned tasks.
    pub committed_hours: f64,
    /// Effective capacity in hours.
    pub capacity_hours: f64,
    /// `committed / capacity * 100`, or 0 when capacity is zero.
    pub utilization_pct: f64,
    /// Contributing tasks, in input order.
    pub task_ids: Vec<String>,
}

impl ResourceLoad {
    fn compute(resource: &Resource, group: &[&Task]) -> Self {
        let committed_hours: f64 = group.iter().map(|t| t.committed_hours()).sum();
        let capacity_hours = resource.effective_capacity();
        let utilization_pct = if capacity_hours > 0.0 {
            committed_hours / capacity_hours * 100.0
        } else {
            0.0
        };

        Self {
            resource_id: resource.id.clone(),
            committed_hours,
            capacity_hours,
            utilization_pct,
            task_ids: group.iter().map(|t| t.id.clone()).collect(),
        }
    }
}

/// Computes the load of every resource, over-allocated or not.
pub fn resource_loads(tasks: &[Task], resources: &[Resource]) -> Vec<ResourceLoad> {
    group_by_resource(tasks, resources)
        .into_iter()
        .map(|(resource, group)| ResourceLoad::compute(resource, &group))
        .collect()
}

/// Finds resources whose utilization exceeds the warning threshold.
///
/// Emits one `resource_overallocation` conflict per resource, listing
/// every contributing task.
pub fn detect_overallocations(
    tasks: &[Task],
    resources: &[Resource],
    thresholds: &CapacityThresholds,
) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for (resource, group) in group_by_resource(tasks, resources) {
        let load = ResourceLoad::compute(resource, &group);
        if let Some(severity) = thresholds.classify(load.utilization_pct) {
            conflicts.push(Conflict::resource_overallocation(
                resource,
                load.task_ids,
                load.committed_hours,
                load.utilization_pct,
                severity,
            ));
        }
    }

    debug!(count = conflicts.len(), "capacity accounting finished");
    conflicts
}
