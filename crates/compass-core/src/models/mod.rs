//! Data models for the semester planning domain.
//!
//! This module contains the core domain models: catalog courses, the saved
//! semester mirror, and the in-session selection buffer. Display
//! implementations for these models live in [`crate::display::models`] to
//! keep data structures and presentation logic apart.
//!
//! # Ownership
//!
//! - [`CourseRef`] is immutable reference data owned by the catalog cache.
//! - [`SemesterRecord`] is a read-mostly mirror of the remote system of
//!   record; it is replaced wholesale after every successful save.
//! - [`SelectionEntry`] lives only inside the active planning session.

pub mod course;
pub mod selection;
pub mod semester;
pub mod summary;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use course::{CourseCategory, CourseRef, RawPrerequisite};
pub use selection::SelectionEntry;
pub use semester::{is_passing_grade, SavedCourse, SemesterRecord, SemesterStatus};
pub use summary::SemesterSummary;
