//! Conflict-analysis domain models.
//!
//! Input types (`Task`, `Resource`, `Dependency`, `ScheduleSnapshot`) are
//! plain data captured from external stores. Output types (`Conflict` and
//! its classifications) are immutable findings.
//!
//! # Domain Mappings
//!
//! | u-conflicts | Project Management | Manufacturing | Healthcare |
//! |-------------|--------------------|---------------|------------|
//! | Task | Work Item | Operation | Procedure |
//! | Resource | Team Member | Machine | Room/Doctor |
//! | Dependency | Predecessor Link | Routing Step | Care Pathway |
//! | Conflict | Schedule Issue | Infeasibility | Booking Clash |

mod conflict;
mod dependency;
mod resource;
mod snapshot;
pub(crate) mod task;

pub(crate) use conflict::canonical_key;
pub use conflict::{Conflict, ConflictDetail, ConflictType, Severity};
pub use dependency::{Dependency, DependencyKind};
pub use resource::Resource;
pub use snapshot::ScheduleSnapshot;
pub use task::Task;
