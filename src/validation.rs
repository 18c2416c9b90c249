//! Input diagnostics for analysis snapshots.
//!
//! Reports degraded-input conditions that the detectors tolerate by
//! omission. Findings here are informational: analysis still runs and
//! simply skips what it cannot use. Detects:
//! - Duplicate task or resource IDs
//! - Reversed task intervals
//! - Negative or non-finite durations and capacities
//! - Assignments to unknown resources
//! - Dependencies with unknown endpoints

use crate::models::{Dependency, Resource, ScheduleSnapshot, Task};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Finding category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of degraded input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A task ends before it starts.
    ReversedInterval,
    /// A task has a negative or non-finite duration.
    InvalidDuration,
    /// A resource has a negative or non-finite capacity.
    InvalidCapacity,
    /// A task is assigned to a resource that doesn't exist.
    InvalidResourceReference,
    /// A dependency references a task that doesn't exist.
    InvalidDependencyReference,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the three input streams of an analysis.
///
/// Checks:
/// 1. No duplicate resource IDs
/// 2. No invalid capacities
/// 3. No duplicate task IDs
/// 4. No reversed intervals or invalid durations
/// 5. All assignments point to existing resources
/// 6. All dependency endpoints point to existing tasks
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    tasks: &[Task],
    resources: &[Resource],
    dependencies: &[Dependency],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut resource_ids = HashSet::new();
    for r in resources {
        if !resource_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate resource ID: {}", r.id),
            ));
        }
        if !r.capacity_hours.is_finite() || r.capacity_hours < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCapacity,
                format!("Resource '{}' has capacity {}h", r.id, r.capacity_hours),
            ));
        }
    }

    let mut task_ids = HashSet::new();
    for task in tasks {
        if !task_ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }

        if task.end < task.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReversedInterval,
                format!(
                    "Task '{}' ends at {} before it starts at {}",
                    task.id, task.end, task.start
                ),
            ));
        }

        if !task.duration_hours.is_finite() || task.duration_hours < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!("Task '{}' has duration {}h", task.id, task.duration_hours),
            ));
        }

        for rid in &task.assigned_resource_ids {
            if !resource_ids.contains(rid.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidResourceReference,
                    format!("Task '{}' references unknown resource '{}'", task.id, rid),
                ));
            }
        }
    }

    for dep in dependencies {
        for endpoint in [&dep.from_task_id, &dep.to_task_id] {
            if !task_ids.contains(endpoint.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidDependencyReference,
                    format!(
                        "Dependency {} -> {} references unknown task '{}'",
                        dep.from_task_id, dep.to_task_id, endpoint
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a snapshot. See [`validate_input`].
pub fn validate_snapshot(snapshot: &ScheduleSnapshot) -> ValidationResult {
    validate_input(
        &snapshot.tasks,
        &snapshot.resources,
        &snapshot.dependencies,
    )
}
