//! Conflict detectors.
//!
//! Four independent, pure detectors over borrowed input slices. None
//! depends on another's output, none mutates its input, and malformed
//! data is skipped rather than reported as an error.
//!
//! | Detector | Finds | Cost |
//! |----------|-------|------|
//! | [`detect_overlaps`] | double-booked resources | O(Σ k²) over resource groups |
//! | [`detect_overallocations`] | committed hours > capacity | O(R + Σ k) |
//! | [`detect_dependency_violations`] | broken precedence relations | O(T + E) |
//! | [`detect_cycles`] | directed dependency cycles | O(V + E) |
//!
//! Output order follows input order (resources, then tasks within a
//! resource, then dependency edges), so identical inputs produce
//! identical reports.

mod capacity;
mod cycles;
mod overlap;
mod precedence;

pub use capacity::{detect_overallocations, resource_loads, CapacityThresholds, ResourceLoad};
pub use cycles::{detect_cycles, find_cycles};
pub use overlap::detect_overlaps;
pub use precedence::detect_dependency_violations;

use crate::models::{Resource, Task};

/// Groups tasks by assigned resource, in resource input order.
///
/// Tasks keep input order within a group, and each task appears at most
/// once per group even if it lists the resource twice. Assignments to
/// unknown resources are dropped.
pub(crate) fn group_by_resource<'a>(
    tasks: &'a [Task],
    resources: &'a [Resource],
) -> Vec<(&'a Resource, Vec<&'a Task>)> {
    resources
        .iter()
        .map(|resource| {
            let group = tasks
                .iter()
                .filter(|t| t.is_assigned_to(&resource.id))
                .collect();
            (resource, group)
        })
        .collect()
}
