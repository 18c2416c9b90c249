//! Dependency constraint checking.
//!
//! Validates each dependency edge against the scheduled times of its two
//! endpoints, using the relation table on [`DependencyKind`].
//!
//! [`DependencyKind`]: crate::models::DependencyKind

use std::collections::HashMap;
use tracing::debug;

use crate::models::{Conflict, Dependency, Task};

/// Finds dependency edges whose relation is broken by the schedule.
///
/// Emits one critical `dependency_violation` per broken edge. Edges with
/// an endpoint missing from `tasks` are skipped.
pub fn detect_dependency_violations(tasks: &[Task], dependencies: &[Dependency]) -> Vec<Conflict> {
    let by_id: HashMap<&str, &Task> = tasks.iter().map(|t| (t.id.as_str(), t)).collect();
    let mut conflicts = Vec::new();
    let mut skipped = 0usize;

    for dep in dependencies {
        let (Some(from), Some(to)) = (
            by_id.get(dep.from_task_id.as_str()),
            by_id.get(dep.to_task_id.as_str()),
        ) else {
            skipped += 1;
            continue;
        };

        if dep.kind.is_violated(from, to) {
            conflicts.push(Conflict::dependency_violation(from, to, dep.kind));
        }
    }

    debug!(
        count = conflicts.len(),
        skipped, "dependency constraint check finished"
    );
    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task::day;
    use crate::models::{ConflictType, DependencyKind, Severity};

    fn t(id: &str, start: u32, end: u32) -> Task {
        Task::new(id, day(2024, 1, start), day(2024, 1, end))
    }

    #[test]
    fn test_finish_to_start_violation() {
        let tasks = vec![t("T1", 1, 10), t("T2", 8, 20)];
        let deps = vec![Dependency::finish_to_start("T1", "T2")];

        let conflicts = detect_dependency_violations(&tasks, &deps);
        assert_eq!(conflicts.len(), 1);
        let c = &conflicts[0];
        assert_eq!(c.conflict_type(), ConflictType::DependencyViolation);
        assert_eq!(c.severity, Severity::Critical);
        assert_eq!(c.affected_tasks, vec!["T1", "T2"]);
        assert!(c.description.contains("finish-to-start"));
        assert!(c.description.contains("'T2' starts at 2024-01-08"));
    }

    #[test]
    fn test_satisfied_edges_are_clean() {
        let tasks = vec![t("T1", 1, 10), t("T2", 10, 20)];
        let deps = vec![
            Dependency::finish_to_start("T1", "T2"),
            Dependency::new("T1", "T2", DependencyKind::StartToStart),
            Dependency::new("T1", "T2", DependencyKind::FinishToFinish),
            Dependency::new("T1", "T2", DependencyKind::StartToFinish),
        ];
        assert!(detect_dependency_violations(&tasks, &deps).is_empty());
    }

    #[test]
    fn test_each_kind_reports_own_boundary() {
        // T2 sits entirely before T1: every relation from T1 to T2 breaks
        let tasks = vec![t("T1", 10, 20), t("T2", 1, 5)];
        let deps = vec![
            Dependency::finish_to_start("T1", "T2"),
            Dependency::new("T1", "T2", DependencyKind::StartToStart),
            Dependency::new("T1", "T2", DependencyKind::FinishToFinish),
            Dependency::new("T1", "T2", DependencyKind::StartToFinish),
        ];
        let conflicts = detect_dependency_violations(&tasks, &deps);
        assert_eq!(conflicts.len(), 4);

        let ids: std::collections::HashSet<&str> =
            conflicts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 4);
        assert!(conflicts[2].description.contains("'T2' finishes at"));
        assert!(conflicts[3].description.contains("'T1' starts at"));
    }

    #[test]
    fn test_dangling_endpoints_skipped() {
        let tasks = vec![t("T1", 1, 10)];
        let deps = vec![
            Dependency::finish_to_start("T1", "MISSING"),
            Dependency::finish_to_start("MISSING", "T1"),
        ];
        assert!(detect_dependency_violations(&tasks, &deps).is_empty());
    }

    #[test]
    fn test_duplicate_edges_share_id() {
        let tasks = vec![t("T1", 1, 10), t("T2", 8, 20)];
        let deps = vec![
            Dependency::finish_to_start("T1", "T2"),
            Dependency::finish_to_start("T1", "T2"),
        ];
        let conflicts = detect_dependency_violations(&tasks, &deps);
        assert_eq!(conflicts.len(), 2);
        assert_eq!(conflicts[0].id, conflicts[1].id);
    }
}
