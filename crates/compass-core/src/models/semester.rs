//! Semester record model and status enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::RawPrerequisite;

/// Type-safe enumeration of semester statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SemesterStatus {
    /// Semester is planned for the future
    #[default]
    Planned,

    /// Semester is currently in progress
    Current,

    /// Semester has finished and carries grades
    Completed,
}

impl FromStr for SemesterStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planned" => Ok(SemesterStatus::Planned),
            "current" => Ok(SemesterStatus::Current),
            "completed" => Ok(SemesterStatus::Completed),
            _ => Err(format!("Invalid semester status: {s}")),
        }
    }
}

impl SemesterStatus {
    /// Convert to the wire representation expected by the remote API.
    ///
    /// Anything that is not `Completed` or `Current` persists as `"Planned"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SemesterStatus::Planned => "Planned",
            SemesterStatus::Current => "Current",
            SemesterStatus::Completed => "Completed",
        }
    }
}

/// True when a grade counts as passing: non-empty and not a failing `"F"`.
pub fn is_passing_grade(grade: &str) -> bool {
    !grade.is_empty() && grade != "F"
}

/// A persisted student-course entry mirrored from the remote plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedCourse {
    /// Course code, unique within one semester record
    pub course_code: String,

    /// Course name as recorded remotely
    #[serde(default)]
    pub course_name: String,

    /// Grade; empty for planned or in-progress courses
    #[serde(default)]
    pub grade: String,

    /// Raw prerequisite field carried along for validation lookups
    #[serde(default)]
    pub prerequisite: Option<RawPrerequisite>,
}

impl SavedCourse {
    /// True when this entry satisfies a prerequisite on the given code.
    pub fn is_passing(&self) -> bool {
        is_passing_grade(&self.grade)
    }

    /// A course graded `"F"` may be added again in a later semester.
    pub fn is_retake_eligible(&self) -> bool {
        self.grade == "F"
    }
}

/// A semester as mirrored from the remote system of record.
///
/// The canonical copy lives remotely; this mirror is read-mostly and is only
/// ever replaced wholesale by a full refetch, never patched in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SemesterRecord {
    /// Semester number, positive and unique per student.
    /// Assigned sequentially: a new semester is always `max(existing) + 1`.
    pub number: u32,

    /// Status of the semester
    #[serde(default)]
    pub status: SemesterStatus,

    /// Persisted course entries; course codes are unique within one record
    #[serde(default)]
    pub courses: Vec<SavedCourse>,

    /// GPA as a decimal string (e.g. `"3.25"`), when the remote has one
    #[serde(default)]
    pub gpa: Option<String>,

    /// Total enrolled credit hours, when the remote summary has been fetched
    #[serde(default)]
    pub total_credits: Option<u32>,
}

impl SemesterRecord {
    /// Look up a persisted course entry by code.
    pub fn find_course(&self, course_code: &str) -> Option<&SavedCourse> {
        self.courses.iter().find(|c| c.course_code == course_code)
    }

    /// GPA parsed as a number, or `None` when absent or unparsable.
    pub fn gpa_value(&self) -> Option<f64> {
        self.gpa.as_deref().and_then(|g| g.trim().parse().ok())
    }
}
