//! Semester summary types and functionality.

use serde::{Deserialize, Serialize};

use super::{is_passing_grade, SemesterRecord, SemesterStatus};

/// Summary information about a semester with course statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterSummary {
    /// Semester number
    pub number: u32,
    /// Semester status
    pub status: SemesterStatus,
    /// Total number of courses in the semester
    pub total_courses: u32,
    /// Number of courses with a passing grade
    pub passed_courses: u32,
    /// GPA as a decimal string, when recorded
    pub gpa: Option<String>,
    /// Total enrolled credit hours, when known
    pub total_credits: Option<u32>,
}

impl From<&SemesterRecord> for SemesterSummary {
    fn from(record: &SemesterRecord) -> Self {
        let total_courses = record.courses.len() as u32;
        let passed_courses = record
            .courses
            .iter()
            .filter(|c| is_passing_grade(&c.grade))
            .count() as u32;

        Self {
            number: record.number,
            status: record.status,
            total_courses,
            passed_courses,
            gpa: record.gpa.clone(),
            total_credits: record.total_credits,
        }
    }
}
