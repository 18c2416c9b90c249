//! Interval overlap detection per resource.
//!
//! # Algorithm
//! For each resource, compare every unordered pair of its tasks with the
//! half-open overlap test `b.start < a.end && a.start < b.end`.
//!
//! # Complexity
//! O(k²) per resource group of size k, so the total cost is the sum of
//! squared group sizes rather than the square of the global task count.
//! Resource groups are small in practice, which makes the pairwise scan
//! cheaper than maintaining a global interval tree.

use tracing::debug;

use super::group_by_resource;
use crate::models::{Conflict, Resource, Task};

/// Finds every pair of tasks that share a resource and overlap in time.
///
/// Emits one critical `resource_overlap` conflict per colliding pair per
/// resource. A task assigned to several resources is checked in each
/// resource's group independently.
pub fn detect_overlaps(tasks: &[Task], resources: &[Resource]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for (resource, group) in group_by_resource(tasks, resources) {
        for (i, first) in group.iter().enumerate() {
            for second in &group[i + 1..] {
                if first.overlaps(second) {
                    conflicts.push(Conflict::resource_overlap(resource, first, second));
                }
            }
        }
    }

    debug!(count = conflicts.len(), "resource overlap detection finished");
    conflicts
}
