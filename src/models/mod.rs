//! Curriculum coverage domain models.
//!
//! Provides the data types for describing a coverage problem (which
//! subjects must be taught, which teachers are available) and its
//! solution (which teacher teaches what).
//!
//! # Domain Mappings
//!
//! | u-curriculum | Set cover | Staffing |
//! |--------------|-----------|----------|
//! | Subject | Element | Shift / Duty |
//! | Teacher | Subset | Employee |
//! | Schedule | Cover | Roster |

mod request;
mod schedule;
mod teacher;

pub use request::CoverRequest;
pub use schedule::{Schedule, Violation, ViolationType};
pub use teacher::Teacher;

/// Opaque subject identifier. Only equality and ordering are relied on.
pub type SubjectId = String;
