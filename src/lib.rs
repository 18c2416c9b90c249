//! Schedule conflict detection for the U-Engine ecosystem.
//!
//! Given a materialized schedule (tasks with start/end times, the
//! resources they are assigned to, and the dependencies between them),
//! computes every scheduling inconsistency as typed, severity-ranked,
//! deduplicated findings with deterministic ids.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Resource`, `Dependency`,
//!   `ScheduleSnapshot`, `Conflict`, `Severity`
//! - **`detection`**: The four detectors (resource overlap, capacity,
//!   dependency constraints, cycles)
//! - **`analysis`**: The aggregating entry point `analyze`, options,
//!   summary counts, and a caller-owned cache
//! - **`validation`**: Degraded-input diagnostics
//!
//! # Scope
//!
//! The engine does not propose a corrected schedule, never mutates its
//! inputs, and performs no I/O during analysis. Resolving ids back to
//! display names for presentation is the caller's concern.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 22

pub mod analysis;
pub mod detection;
pub mod error;
pub mod models;
pub mod validation;

pub use analysis::{analyze, analyze_snapshot, AnalysisOptions, ConflictReport, ConflictSummary};
pub use error::{Error, Result};
pub use models::{Conflict, ConflictType, Severity};
