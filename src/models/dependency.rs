//! Precedence relations between tasks.
//!
//! Four standard project-scheduling relation kinds relate a boundary
//! (start or finish) of the `from` task to a boundary of the `to` task.
//!
//! | Kind | Satisfied when |
//! |------|----------------|
//! | Finish-to-start | `to.start >= from.end` |
//! | Start-to-start | `to.start >= from.start` |
//! | Finish-to-finish | `to.end >= from.end` |
//! | Start-to-finish | `to.end >= from.start` |
//!
//! # Reference
//! PMI (2021), "PMBOK Guide", Precedence Diagramming Method

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Task;

/// Relation kind of a dependency edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyKind {
    /// `to` cannot start until `from` finishes.
    FinishToStart,
    /// `to` cannot start until `from` starts.
    StartToStart,
    /// `to` cannot finish until `from` finishes.
    FinishToFinish,
    /// `to` cannot finish until `from` starts.
    StartToFinish,
}

/// A directed dependency edge between two tasks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    /// Predecessor task.
    pub from_task_id: String,
    /// Successor task.
    pub to_task_id: String,
    /// Relation kind.
    pub kind: DependencyKind,
}

impl DependencyKind {
    /// Wire name (`finish-to-start`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FinishToStart => "finish-to-start",
            Self::StartToStart => "start-to-start",
            Self::FinishToFinish => "finish-to-finish",
            Self::StartToFinish => "start-to-finish",
        }
    }

    /// Whether the scheduled times of `from` and `to` break this relation.
    pub fn is_violated(&self, from: &Task, to: &Task) -> bool {
        match self {
            Self::FinishToStart => to.start < from.end,
            Self::StartToStart => to.start < from.start,
            Self::FinishToFinish => to.end < from.end,
            Self::StartToFinish => to.end < from.start,
        }
    }

    /// Sentence describing which boundary of `to` precedes which boundary of `from`.
    pub fn violated_boundary(&self, from: &Task, to: &Task) -> String {
        let (to_edge, to_at, from_edge, from_at) = match self {
            Self::FinishToStart => ("starts", to.start, "finishes", from.end),
            Self::StartToStart => ("starts", to.start, "starts", from.start),
            Self::FinishToFinish => ("finishes", to.end, "finishes", from.end),
            Self::StartToFinish => ("finishes", to.end, "starts", from.start),
        };
        format!(
            "'{}' {} at {} but '{}' {} at {}",
            to.label(),
            to_edge,
            to_at.format("%Y-%m-%d %H:%M"),
            from.label(),
            from_edge,
            from_at.format("%Y-%m-%d %H:%M"),
        )
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Dependency {
    /// Creates a dependency edge.
    pub fn new(
        from_task_id: impl Into<String>,
        to_task_id: impl Into<String>,
        kind: DependencyKind,
    ) -> Self {
        Self {
            from_task_id: from_task_id.into(),
            to_task_id: to_task_id.into(),
            kind,
        }
    }

    /// Creates a finish-to-start edge, the common case.
    pub fn finish_to_start(from_task_id: impl Into<String>, to_task_id: impl Into<String>) -> Self {
        Self::new(from_task_id, to_task_id, DependencyKind::FinishToStart)
    }

    /// Whether this edge points a task at itself.
    pub fn is_self_loop(&self) -> bool {
        self.from_task_id == self.to_task_id
    }
}
