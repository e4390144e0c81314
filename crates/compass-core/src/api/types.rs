//! Wire types for the remote REST API.
//!
//! The remote endpoints deliver flat rows and loose maps; these DTOs capture
//! the wire shapes and convert them into the domain models in
//! [`crate::models`]. Nothing outside the accessor layer touches them.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Deserialize;

use crate::models::{RawPrerequisite, SavedCourse, SemesterRecord, SemesterStatus};

/// One row of the student plan listing: a student-course record joined with
/// its course metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRow {
    pub course_code: String,
    pub semester_number: u32,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub course: Option<PlanRowCourse>,
}

/// Nested course metadata on a plan row.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRowCourse {
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub pre_requisite: Option<RawPrerequisite>,
}

/// Per-semester GPA response body.
#[derive(Debug, Clone, Deserialize)]
pub struct GpaResponse {
    pub gpa: String,
}

/// Per-semester credit limit response body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreditLimitResponse {
    pub max_limit: u32,
}

/// One row of the per-semester credit totals summary.
#[derive(Debug, Clone, Deserialize)]
pub struct CreditsSummaryRow {
    pub semester_number: u32,
    pub total_credits: u32,
}

/// Group flat plan rows into semester records, ascending by number.
///
/// The semester's status comes from its first row; rows within a semester
/// keep their listing order. GPA and credit totals are filled in separately
/// by the accessor.
pub fn group_plan_rows(rows: Vec<PlanRow>) -> Vec<SemesterRecord> {
    let mut by_semester: BTreeMap<u32, SemesterRecord> = BTreeMap::new();

    for row in rows {
        let record = by_semester
            .entry(row.semester_number)
            .or_insert_with(|| SemesterRecord {
                number: row.semester_number,
                status: SemesterStatus::from_str(&row.status).unwrap_or_default(),
                courses: Vec::new(),
                gpa: None,
                total_credits: None,
            });

        let (course_name, prerequisite) = match row.course {
            Some(course) => (course.course_name, course.pre_requisite),
            None => (String::new(), None),
        };

        record.courses.push(SavedCourse {
            course_code: row.course_code,
            course_name,
            grade: row.grade,
            prerequisite,
        });
    }

    by_semester.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(code: &str, semester: u32, status: &str, grade: &str) -> PlanRow {
        PlanRow {
            course_code: code.to_string(),
            semester_number: semester,
            status: status.to_string(),
            grade: grade.to_string(),
            course: Some(PlanRowCourse {
                course_name: format!("Course {code}"),
                pre_requisite: None,
            }),
        }
    }

    #[test]
    fn test_group_plan_rows_orders_by_semester() {
        let rows = vec![
            row("ENG210", 2, "Planned", ""),
            row("MTH101", 1, "Completed", "B"),
            row("CSC110", 2, "Planned", ""),
        ];
        let records = group_plan_rows(rows);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].number, 1);
        assert_eq!(records[0].status, SemesterStatus::Completed);
        assert_eq!(records[1].number, 2);
        assert_eq!(records[1].courses.len(), 2);
        // Listing order preserved within the semester.
        assert_eq!(records[1].courses[0].course_code, "ENG210");
    }

    #[test]
    fn test_group_plan_rows_unknown_status_defaults_to_planned() {
        let records = group_plan_rows(vec![row("MTH101", 1, "weird", "")]);
        assert_eq!(records[0].status, SemesterStatus::Planned);
    }

    #[test]
    fn test_plan_row_deserializes_with_missing_fields() {
        let json = r#"{"course_code": "MTH101", "semester_number": 1}"#;
        let parsed: PlanRow = serde_json::from_str(json).unwrap();
        assert!(parsed.grade.is_empty());
        assert!(parsed.course.is_none());
    }
}
