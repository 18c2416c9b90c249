//! Conflict counts for reporting.
//!
//! | Count | Definition |
//! |-------|-----------|
//! | total | Number of findings |
//! | by_type | Findings per conflict type (every type present) |
//! | by_severity | Findings per severity (every severity present) |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Conflict, ConflictType, Severity};

/// Derived counts over a (possibly filtered) result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictSummary {
    /// Number of findings.
    pub total: usize,
    /// Findings per type.
    pub by_type: BTreeMap<ConflictType, usize>,
    /// Findings per severity.
    pub by_severity: BTreeMap<Severity, usize>,
}

impl ConflictSummary {
    /// Counts findings by type and severity.
    pub fn from_conflicts(conflicts: &[Conflict]) -> Self {
        let mut by_type: BTreeMap<ConflictType, usize> =
            ConflictType::ALL.iter().map(|&t| (t, 0)).collect();
        let mut by_severity: BTreeMap<Severity, usize> =
            Severity::ALL.iter().map(|&s| (s, 0)).collect();

        for c in conflicts {
            *by_type.entry(c.conflict_type()).or_insert(0) += 1;
            *by_severity.entry(c.severity).or_insert(0) += 1;
        }

        Self {
            total: conflicts.len(),
            by_type,
            by_severity,
        }
    }

    /// Count for one type.
    pub fn count_of_type(&self, conflict_type: ConflictType) -> usize {
        self.by_type.get(&conflict_type).copied().unwrap_or(0)
    }

    /// Count for one severity.
    pub fn count_of_severity(&self, severity: Severity) -> usize {
        self.by_severity.get(&severity).copied().unwrap_or(0)
    }

    /// Whether any finding is critical.
    pub fn has_critical(&self) -> bool {
        self.count_of_severity(Severity::Critical) > 0
    }
}

/// Findings plus their counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// Findings, critical first.
    pub conflicts: Vec<Conflict>,
    /// Counts over `conflicts`.
    pub summary: ConflictSummary,
}

impl ConflictReport {
    /// Wraps findings and computes their counts.
    pub fn new(conflicts: Vec<Conflict>) -> Self {
        let summary = ConflictSummary::from_conflicts(&conflicts);
        Self { conflicts, summary }
    }

    /// Whether the schedule is free of conflicts.
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Findings of one type.
    pub fn of_type(&self, conflict_type: ConflictType) -> impl Iterator<Item = &Conflict> {
        self.conflicts
            .iter()
            .filter(move |c| c.conflict_type() == conflict_type)
    }
}
