//! Conflict aggregation.
//!
//! # Algorithm
//! 1. When debug logging is enabled, log degraded input (validation
//!    findings never stop analysis).
//! 2. Run the four detectors, sequentially or on the rayon pool.
//! 3. Concatenate in detector order: overlaps, over-allocations,
//!    dependency violations, cycles.
//! 4. Drop repeated ids (first occurrence wins). Findings of different
//!    types are never merged.
//! 5. Apply the critical-only filter.
//! 6. Stable-sort by severity, critical first.

use std::collections::HashSet;
use tracing::{debug, info, Level};

use super::{AnalysisOptions, ConflictReport};
use crate::detection::{
    detect_cycles, detect_dependency_violations, detect_overallocations, detect_overlaps,
};
use crate::models::{Conflict, Dependency, Resource, ScheduleSnapshot, Task};
use crate::validation::validate_input;

/// Computes every scheduling conflict in a task/resource/dependency snapshot.
///
/// Pure: inputs are only read, and identical inputs always yield the same
/// conflicts with the same ids in the same order.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use u_conflicts::analysis::{analyze, AnalysisOptions};
/// use u_conflicts::models::{ConflictType, Resource, Task};
///
/// let at = |d: u32| Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap();
/// let tasks = vec![
///     Task::new("T1", at(1), at(10)).with_resource("R1"),
///     Task::new("T2", at(5), at(15)).with_resource("R1"),
/// ];
/// let resources = vec![Resource::new("R1", "developer").with_capacity_hours(160.0)];
///
/// let conflicts = analyze(&tasks, &resources, &[], &AnalysisOptions::default());
/// assert_eq!(conflicts.len(), 1);
/// assert_eq!(conflicts[0].conflict_type(), ConflictType::ResourceOverlap);
/// assert_eq!(conflicts[0].affected_tasks, vec!["T1", "T2"]);
/// ```
pub fn analyze(
    tasks: &[Task],
    resources: &[Resource],
    dependencies: &[Dependency],
    options: &AnalysisOptions,
) -> Vec<Conflict> {
    if tracing::enabled!(Level::DEBUG) {
        if let Err(issues) = validate_input(tasks, resources, dependencies) {
            for issue in &issues {
                debug!(kind = ?issue.kind, "degraded input: {}", issue.message);
            }
        }
    }

    let (overlaps, overallocations, violations, cycles) = if options.parallel {
        let ((overlaps, overallocations), (violations, cycles)) = rayon::join(
            || {
                rayon::join(
                    || detect_overlaps(tasks, resources),
                    || detect_overallocations(tasks, resources, &options.capacity),
                )
            },
            || {
                rayon::join(
                    || detect_dependency_violations(tasks, dependencies),
                    || detect_cycles(tasks, dependencies),
                )
            },
        );
        (overlaps, overallocations, violations, cycles)
    } else {
        (
            detect_overlaps(tasks, resources),
            detect_overallocations(tasks, resources, &options.capacity),
            detect_dependency_violations(tasks, dependencies),
            detect_cycles(tasks, dependencies),
        )
    };

    let mut seen = HashSet::new();
    let mut conflicts: Vec<Conflict> = overlaps
        .into_iter()
        .chain(overallocations)
        .chain(violations)
        .chain(cycles)
        .filter(|c| seen.insert(c.id.clone()))
        .filter(|c| !options.critical_only || c.is_critical())
        .collect();
    conflicts.sort_by_key(|c| c.severity);

    info!(
        tasks = tasks.len(),
        resources = resources.len(),
        dependencies = dependencies.len(),
        conflicts = conflicts.len(),
        critical_only = options.critical_only,
        "schedule conflict analysis finished"
    );
    conflicts
}

/// Analyzes a snapshot and returns findings with their counts.
pub fn analyze_snapshot(snapshot: &ScheduleSnapshot, options: &AnalysisOptions) -> ConflictReport {
    ConflictReport::new(analyze(
        &snapshot.tasks,
        &snapshot.resources,
        &snapshot.dependencies,
        options,
    ))
}
