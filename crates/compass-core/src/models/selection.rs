//! Selection entry model for the active planning session.

use serde::{Deserialize, Serialize};

use super::CourseRef;

/// One course inside the active planning session's selection buffer.
///
/// Entries exist only for the lifetime of a Creating or Editing session:
/// created when a course is added, mutated when a grade is assigned, and
/// destroyed on removal, cancel, or successful save.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionEntry {
    /// Catalog reference data for the selected course
    pub course: CourseRef,

    /// Assigned grade; empty unless the semester is being recorded as
    /// completed. The value is stored even when the status later changes,
    /// but it is only persisted for completed semesters.
    #[serde(default)]
    pub grade: String,
}

impl SelectionEntry {
    /// Create a fresh entry with no grade assigned.
    pub fn new(course: CourseRef) -> Self {
        Self {
            course,
            grade: String::new(),
        }
    }
}
