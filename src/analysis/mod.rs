//! Conflict aggregation and reporting.
//!
//! Runs every detector over one input snapshot and merges their findings
//! into a single deterministic report.
//!
//! # Usage
//!
//! ```
//! use u_conflicts::analysis::{analyze_snapshot, AnalysisOptions};
//! use u_conflicts::models::ScheduleSnapshot;
//!
//! let snapshot = ScheduleSnapshot::default();
//! let report = analyze_snapshot(&snapshot, &AnalysisOptions::new().critical_only());
//! assert!(report.is_clean());
//! assert_eq!(report.summary.total, 0);
//! ```
//!
//! # Statelessness
//!
//! `analyze` is a pure function of its inputs. Memoization, when wanted,
//! is an explicit [`AnalysisCache`] owned by the caller.

mod analyzer;
mod cache;
mod options;
mod summary;

pub use analyzer::{analyze, analyze_snapshot};
pub use cache::AnalysisCache;
pub use options::AnalysisOptions;
pub use summary::{ConflictReport, ConflictSummary};
