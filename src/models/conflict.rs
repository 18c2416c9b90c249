//! Conflict (finding) model.
//!
//! A conflict is an immutable finding produced by one detector. The four
//! kinds share a common envelope ([`Conflict`]) and carry kind-specific
//! data in [`ConflictDetail`].
//!
//! # Identity
//! Every conflict id is derived from its type and the sorted entity ids
//! that cause it, so re-analyzing an unchanged schedule yields the same
//! ids and the same inconsistency is never reported twice.
//!
//! Ids are free-form, so each one is written length-prefixed
//! (`<byte length>:<id>`) before joining. `A` + `B+C` and `A+B` + `C`
//! therefore stay distinct (`1:A+3:B+C` vs `3:A+B+1:C`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DependencyKind, Resource, Task};

/// Severity of a conflict. Orders critical first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The schedule cannot be executed as planned.
    Critical,
    /// The schedule is at risk.
    Warning,
    /// Informational only.
    Info,
}

/// Conflict classification (wire tag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictType {
    /// Two tasks use the same resource at the same time.
    ResourceOverlap,
    /// A resource is committed beyond its capacity.
    ResourceOverallocation,
    /// Scheduled times break a dependency relation.
    DependencyViolation,
    /// Dependencies form a directed cycle.
    CircularDependency,
}

/// Kind-specific data of a conflict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ConflictDetail {
    /// Two tasks collide on one resource during `[overlap_start, overlap_end)`.
    ResourceOverlap {
        resource_id: String,
        first_task_id: String,
        second_task_id: String,
        overlap_start: DateTime<Utc>,
        overlap_end: DateTime<Utc>,
    },
    /// Committed hours exceed capacity.
    ResourceOverallocation {
        resource_id: String,
        committed_hours: f64,
        capacity_hours: f64,
        utilization_pct: f64,
    },
    /// A dependency edge whose relation does not hold.
    DependencyViolation {
        from_task_id: String,
        to_task_id: String,
        kind: DependencyKind,
    },
    /// A directed cycle, in discovery order.
    CircularDependency { cycle: Vec<String> },
}

/// A detected scheduling inconsistency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    /// Deterministic identity (see [`Conflict::make_id`]).
    pub id: String,
    /// Severity ranking.
    pub severity: Severity,
    /// Short summary.
    pub title: String,
    /// Description naming the concrete entities involved.
    pub description: String,
    /// Implicated task ids.
    pub affected_tasks: Vec<String>,
    /// Implicated resource ids (empty when none).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub affected_resources: Vec<String>,
    /// Remediation hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Kind-specific data; serialized inline with its `type` tag.
    #[serde(flatten)]
    pub detail: ConflictDetail,
}

impl Severity {
    /// All severities, most severe first.
    pub const ALL: [Severity; 3] = [Severity::Critical, Severity::Warning, Severity::Info];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConflictType {
    /// All conflict types, in detector order.
    pub const ALL: [ConflictType; 4] = [
        ConflictType::ResourceOverlap,
        ConflictType::ResourceOverallocation,
        ConflictType::DependencyViolation,
        ConflictType::CircularDependency,
    ];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResourceOverlap => "resource_overlap",
            Self::ResourceOverallocation => "resource_overallocation",
            Self::DependencyViolation => "dependency_violation",
            Self::CircularDependency => "circular_dependency",
        }
    }
}

impl fmt::Display for ConflictType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConflictDetail {
    /// The type tag of this detail.
    pub fn conflict_type(&self) -> ConflictType {
        match self {
            Self::ResourceOverlap { .. } => ConflictType::ResourceOverlap,
            Self::ResourceOverallocation { .. } => ConflictType::ResourceOverallocation,
            Self::DependencyViolation { .. } => ConflictType::DependencyViolation,
            Self::CircularDependency { .. } => ConflictType::CircularDependency,
        }
    }
}

/// Length-prefixed form of one id: `<byte length>:<id>`.
pub(crate) fn encode_id(id: &str) -> String {
    format!("{}:{}", id.len(), id)
}

/// Order-independent key over a set of ids.
///
/// Ids are sorted, length-prefixed, and joined with `+`; distinct id
/// sets never share a key whatever characters the ids contain.
pub(crate) fn canonical_key(ids: &[&str]) -> String {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.iter()
        .map(|id| encode_id(id))
        .collect::<Vec<_>>()
        .join("+")
}

impl Conflict {
    /// Builds a deterministic id from a type and a cause key.
    pub fn make_id(conflict_type: ConflictType, key: &str) -> String {
        format!("{}:{}", conflict_type.as_str(), key)
    }

    /// The type tag of this conflict.
    #[inline]
    pub fn conflict_type(&self) -> ConflictType {
        self.detail.conflict_type()
    }

    /// Whether this conflict is critical.
    #[inline]
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }

    /// Creates a resource overlap conflict. Always critical.
    ///
    /// The caller guarantees `first` and `second` overlap.
    pub fn resource_overlap(resource: &Resource, first: &Task, second: &Task) -> Self {
        let overlap_start = first.start.max(second.start);
        let overlap_end = first.end.min(second.end);
        let key = format!(
            "{}@{}",
            canonical_key(&[first.id.as_str(), second.id.as_str()]),
            encode_id(&resource.id)
        );

        Self {
            id: Self::make_id(ConflictType::ResourceOverlap, &key),
            severity: Severity::Critical,
            title: format!("Resource double-booked: {}", resource.label()),
            description: format!(
                "'{}' and '{}' are both assigned to '{}' and overlap from {} to {}",
                first.label(),
                second.label(),
                resource.label(),
                overlap_start.format("%Y-%m-%d %H:%M"),
                overlap_end.format("%Y-%m-%d %H:%M"),
            ),
            affected_tasks: vec![first.id.clone(), second.id.clone()],
            affected_resources: vec![resource.id.clone()],
            suggestion: Some(format!(
                "Reschedule one of the tasks or assign another resource in place of '{}'",
                resource.label()
            )),
            detail: ConflictDetail::ResourceOverlap {
                resource_id: resource.id.clone(),
                first_task_id: first.id.clone(),
                second_task_id: second.id.clone(),
                overlap_start,
                overlap_end,
            },
        }
    }

    /// Creates a resource over-allocation conflict.
    pub fn resource_overallocation(
        resource: &Resource,
        task_ids: Vec<String>,
        committed_hours: f64,
        utilization_pct: f64,
        severity: Severity,
    ) -> Self {
        let capacity_hours = resource.effective_capacity();

        Self {
            id: Self::make_id(ConflictType::ResourceOverallocation, &encode_id(&resource.id)),
            severity,
            title: format!("Resource over-allocated: {}", resource.label()),
            description: format!(
                "'{}' is committed to {:.1}h against a capacity of {:.1}h ({}% utilization) across {} task(s)",
                resource.label(),
                committed_hours,
                capacity_hours,
                utilization_pct.round() as i64,
                task_ids.len(),
            ),
            affected_tasks: task_ids,
            affected_resources: vec![resource.id.clone()],
            suggestion: Some(format!(
                "Reduce the work assigned to '{}' by {:.1}h or increase its capacity",
                resource.label(),
                committed_hours - capacity_hours
            )),
            detail: ConflictDetail::ResourceOverallocation {
                resource_id: resource.id.clone(),
                committed_hours,
                capacity_hours,
                utilization_pct,
            },
        }
    }

    /// Creates a dependency violation conflict. Always critical.
    pub fn dependency_violation(from: &Task, to: &Task, kind: DependencyKind) -> Self {
        let key = format!(
            "{}>{}/{}",
            encode_id(&from.id),
            encode_id(&to.id),
            kind.as_str()
        );

        Self {
            id: Self::make_id(ConflictType::DependencyViolation, &key),
            severity: Severity::Critical,
            title: format!("Dependency violated: {} ({})", to.label(), kind),
            description: format!(
                "{} dependency from '{}' to '{}' is broken: {}",
                kind,
                from.label(),
                to.label(),
                kind.violated_boundary(from, to),
            ),
            affected_tasks: vec![from.id.clone(), to.id.clone()],
            affected_resources: Vec::new(),
            suggestion: Some(format!(
                "Move '{}' later or '{}' earlier so the {} relation holds",
                to.label(),
                from.label(),
                kind
            )),
            detail: ConflictDetail::DependencyViolation {
                from_task_id: from.id.clone(),
                to_task_id: to.id.clone(),
                kind,
            },
        }
    }

    /// Creates a circular dependency conflict. Always critical.
    ///
    /// `cycle` holds the members in discovery order; `labels` the matching
    /// display labels.
    pub fn circular_dependency(cycle: Vec<String>, labels: &[&str]) -> Self {
        let ids: Vec<&str> = cycle.iter().map(String::as_str).collect();
        let mut chain: Vec<&str> = labels.to_vec();
        if let Some(&first) = labels.first() {
            chain.push(first);
        }

        Self {
            id: Self::make_id(ConflictType::CircularDependency, &canonical_key(&ids)),
            severity: Severity::Critical,
            title: format!("Circular dependency among {} task(s)", cycle.len()),
            description: format!("Dependency chain loops back on itself: {}", chain.join(" → ")),
            affected_tasks: cycle.clone(),
            affected_resources: Vec::new(),
            suggestion: Some("Remove or reverse one dependency in the chain".to_string()),
            detail: ConflictDetail::CircularDependency { cycle },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task::day;

    fn r1() -> Resource {
        Resource::new("R1", "developer")
            .with_name("Alice")
            .with_capacity_hours(160.0)
    }

    #[test]
    fn test_overlap_factory() {
        let a = Task::new("T1", day(2024, 1, 1), day(2024, 1, 10)).with_title("Design");
        let b = Task::new("T2", day(2024, 1, 5), day(2024, 1, 15)).with_title("Build");

        let c = Conflict::resource_overlap(&r1(), &a, &b);
        assert_eq!(c.conflict_type(), ConflictType::ResourceOverlap);
        assert_eq!(c.severity, Severity::Critical);
        assert_eq!(c.affected_tasks, vec!["T1", "T2"]);
        assert_eq!(c.affected_resources, vec!["R1"]);
        assert!(c.description.contains("'Design'"));
        assert!(c.description.contains("'Alice'"));
        assert!(c.description.contains("2024-01-05"));
        assert_eq!(c.id, "resource_overlap:2:T1+2:T2@2:R1");
    }

    #[test]
    fn test_overlap_id_is_order_independent() {
        let a = Task::new("T1", day(2024, 1, 1), day(2024, 1, 10));
        let b = Task::new("T2", day(2024, 1, 5), day(2024, 1, 15));
        assert_eq!(
            Conflict::resource_overlap(&r1(), &a, &b).id,
            Conflict::resource_overlap(&r1(), &b, &a).id
        );
    }

    #[test]
    fn test_ids_with_separator_characters_stay_distinct() {
        let span = |id: &str| Task::new(id, day(2024, 1, 1), day(2024, 1, 10));

        let left = Conflict::resource_overlap(&r1(), &span("A"), &span("B+C"));
        let right = Conflict::resource_overlap(&r1(), &span("A+B"), &span("C"));
        assert_ne!(left.id, right.id);

        let r_at = Resource::new("R1@X", "developer");
        let scoped = Conflict::resource_overlap(&r_at, &span("A"), &span("B"));
        let shifted = Conflict::resource_overlap(&r1(), &span("A"), &span("B@R1"));
        assert_ne!(scoped.id, shifted.id);

        let kind = DependencyKind::FinishToStart;
        let first = Conflict::dependency_violation(&span("A>B"), &span("C"), kind);
        let second = Conflict::dependency_violation(&span("A"), &span("B>C"), kind);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_canonical_key() {
        assert_eq!(canonical_key(&["b", "a"]), "1:a+1:b");
        assert_ne!(canonical_key(&["A", "B,C"]), canonical_key(&["A,B", "C"]));
        assert_ne!(canonical_key(&["A", "B+C"]), canonical_key(&["A+B", "C"]));
        assert_eq!(encode_id(""), "0:");
    }

    #[test]
    fn test_overallocation_factory() {
        let c = Conflict::resource_overallocation(
            &r1(),
            vec!["T1".into(), "T2".into()],
            200.0,
            125.0,
            Severity::Warning,
        );
        assert_eq!(c.id, "resource_overallocation:2:R1");
        assert!(c.description.contains("125%"));
        assert!(c.description.contains("200.0h"));
        assert!(c.description.contains("160.0h"));
    }

    #[test]
    fn test_cycle_factory_chain() {
        let c = Conflict::circular_dependency(
            vec!["T2".into(), "T3".into(), "T1".into()],
            &["B", "C", "A"],
        );
        assert_eq!(c.id, "circular_dependency:2:T1+2:T2+2:T3");
        assert!(c.description.ends_with("B → C → A → B"));
        assert_eq!(c.affected_tasks, vec!["T2", "T3", "T1"]);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical < Severity::Warning);
        assert!(Severity::Warning < Severity::Info);
        assert_eq!(Severity::Critical.to_string(), "critical");
    }

    #[test]
    fn test_conflict_serializes_flat_type_tag() {
        let a = Task::new("T1", day(2024, 1, 1), day(2024, 1, 10));
        let b = Task::new("T2", day(2024, 1, 5), day(2024, 1, 15));
        let c = Conflict::dependency_violation(&a, &b, DependencyKind::FinishToStart);

        let value = serde_json::to_value(&c).unwrap();
        assert_eq!(value["type"], "dependency_violation");
        assert_eq!(value["severity"], "critical");
        assert_eq!(value["kind"], "finish-to-start");
        assert_eq!(value["affectedTasks"][1], "T2");
        assert!(value.get("affectedResources").is_none());

        let back: Conflict = serde_json::from_value(value).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_detail_fields_are_camel_case() {
        let a = Task::new("T1", day(2024, 1, 1), day(2024, 1, 10));
        let b = Task::new("T2", day(2024, 1, 5), day(2024, 1, 15));

        let overlap = serde_json::to_value(Conflict::resource_overlap(&r1(), &a, &b)).unwrap();
        assert_eq!(overlap["type"], "resource_overlap");
        assert_eq!(overlap["firstTaskId"], "T1");
        assert_eq!(overlap["resourceId"], "R1");
        assert!(overlap.get("overlapStart").is_some());
        assert!(overlap.get("first_task_id").is_none());

        let load = Conflict::resource_overallocation(
            &r1(),
            vec!["T1".into()],
            200.0,
            125.0,
            Severity::Warning,
        );
        let value = serde_json::to_value(&load).unwrap();
        assert_eq!(value["utilizationPct"], 125.0);
        assert_eq!(value["capacityHours"], 160.0);

        let back: Conflict = serde_json::from_value(value).unwrap();
        assert_eq!(back, load);
    }
}
