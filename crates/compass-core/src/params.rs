//! Parameter structures for Compass operations
//!
//! Shared parameter structures passed between interface layers (CLI, future
//! front ends) and the core planner without framework-specific derives. The
//! CLI defines clap wrapper structs that convert into these types, keeping
//! argument-parsing concerns out of the core crate.

use serde::{Deserialize, Serialize};

use crate::models::SemesterStatus;

/// Parameters for creating a student-course record on the remote system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseRecordCreate {
    /// Student identifier
    pub student_id: String,
    /// Course code being recorded
    pub course_code: String,
    /// Semester the course belongs to
    pub semester_number: u32,
    /// Grade; empty unless the semester is completed
    pub grade: String,
    /// Remote status string (`"Planned"`, `"Current"`, `"Completed"`)
    pub status: String,
}

/// Parameters for updating an existing student-course record.
///
/// The record is addressed by student, course code, and semester number;
/// only the grade and status are mutable remotely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseRecordPatch {
    /// Grade; empty unless the semester is completed
    pub grade: String,
    /// Remote status string (`"Planned"`, `"Current"`, `"Completed"`)
    pub status: String,
}

/// Parameters for a save request issued against the active session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveRequest {
    /// Skip the bypassable policy checks (prerequisites, credit limit).
    ///
    /// Local validation (missing grades on a completed semester) still
    /// applies; it is never bypassable.
    #[serde(default)]
    pub override_policy: bool,
}

/// Grade assignment addressed by course code, used when recording a
/// completed semester.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradeAssignment {
    /// Course code within the current selection
    pub course_code: String,
    /// Grade to assign (e.g. `"A"`, `"B+"`, `"F"`)
    pub grade: String,
}

impl GradeAssignment {
    /// Parse a `CODE=GRADE` pair as passed on the command line.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when the pair is malformed or
    /// either side is empty.
    pub fn parse(pair: &str) -> crate::Result<Self> {
        let (code, grade) = pair.split_once('=').ok_or_else(|| {
            crate::PlannerError::invalid_input("grade")
                .with_reason(format!("Expected CODE=GRADE, got '{pair}'"))
        })?;
        let code = code.trim();
        let grade = grade.trim();
        if code.is_empty() || grade.is_empty() {
            return Err(crate::PlannerError::invalid_input("grade")
                .with_reason(format!("Expected CODE=GRADE, got '{pair}'")));
        }
        Ok(Self {
            course_code: code.to_uppercase(),
            grade: grade.to_string(),
        })
    }
}

/// Helper for mapping a session status to the persisted grade value.
///
/// Grades are only meaningful for completed semesters; anything else is
/// forced empty at persistence time.
pub fn persisted_grade(status: SemesterStatus, grade: &str) -> String {
    if status == SemesterStatus::Completed {
        grade.to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlannerError;

    #[test]
    fn test_grade_assignment_parse_valid() {
        let parsed = GradeAssignment::parse("mth101=B+").unwrap();
        assert_eq!(parsed.course_code, "MTH101");
        assert_eq!(parsed.grade, "B+");
    }

    #[test]
    fn test_grade_assignment_parse_missing_separator() {
        let result = GradeAssignment::parse("MTH101");
        assert!(matches!(
            result,
            Err(PlannerError::InvalidInput { ref field, .. }) if field == "grade"
        ));
    }

    #[test]
    fn test_grade_assignment_parse_empty_sides() {
        assert!(GradeAssignment::parse("=B").is_err());
        assert!(GradeAssignment::parse("MTH101=").is_err());
    }

    #[test]
    fn test_persisted_grade_forced_empty_unless_completed() {
        assert_eq!(persisted_grade(SemesterStatus::Completed, "A"), "A");
        assert_eq!(persisted_grade(SemesterStatus::Current, "A"), "");
        assert_eq!(persisted_grade(SemesterStatus::Planned, "A"), "");
    }
}
