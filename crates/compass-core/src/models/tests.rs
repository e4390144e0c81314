use std::str::FromStr;

use super::*;

fn course(code: &str, credits: u32) -> CourseRef {
    CourseRef {
        code: code.to_string(),
        name: format!("Course {code}"),
        credit_hours: credits,
        prerequisite: None,
    }
}

#[test]
fn test_semester_status_from_str() {
    assert_eq!(
        SemesterStatus::from_str("planned").unwrap(),
        SemesterStatus::Planned
    );
    assert_eq!(
        SemesterStatus::from_str("Current").unwrap(),
        SemesterStatus::Current
    );
    assert_eq!(
        SemesterStatus::from_str("COMPLETED").unwrap(),
        SemesterStatus::Completed
    );
    assert!(SemesterStatus::from_str("finished").is_err());
}

#[test]
fn test_semester_status_as_str_roundtrip() {
    for status in [
        SemesterStatus::Planned,
        SemesterStatus::Current,
        SemesterStatus::Completed,
    ] {
        assert_eq!(SemesterStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_semester_status_default_is_planned() {
    assert_eq!(SemesterStatus::default(), SemesterStatus::Planned);
}

#[test]
fn test_passing_grade_rules() {
    assert!(is_passing_grade("A"));
    assert!(is_passing_grade("D-"));
    assert!(!is_passing_grade("F"));
    assert!(!is_passing_grade(""));
}

#[test]
fn test_saved_course_retake_eligibility() {
    let failed = SavedCourse {
        course_code: "MTH101".to_string(),
        course_name: "Calculus I".to_string(),
        grade: "F".to_string(),
        prerequisite: None,
    };
    assert!(failed.is_retake_eligible());
    assert!(!failed.is_passing());

    let passed = SavedCourse {
        grade: "B".to_string(),
        ..failed.clone()
    };
    assert!(!passed.is_retake_eligible());
    assert!(passed.is_passing());
}

#[test]
fn test_gpa_value_parses_decimal_string() {
    let record = SemesterRecord {
        number: 1,
        status: SemesterStatus::Completed,
        courses: vec![],
        gpa: Some("1.8".to_string()),
        total_credits: None,
    };
    assert_eq!(record.gpa_value(), Some(1.8));
}

#[test]
fn test_gpa_value_handles_missing_and_garbage() {
    let mut record = SemesterRecord {
        number: 1,
        status: SemesterStatus::Planned,
        courses: vec![],
        gpa: None,
        total_credits: None,
    };
    assert_eq!(record.gpa_value(), None);

    record.gpa = Some("n/a".to_string());
    assert_eq!(record.gpa_value(), None);

    record.gpa = Some(" 3.25 ".to_string());
    assert_eq!(record.gpa_value(), Some(3.25));
}

#[test]
fn test_find_course_by_code() {
    let record = SemesterRecord {
        number: 2,
        status: SemesterStatus::Planned,
        courses: vec![SavedCourse {
            course_code: "ENG210".to_string(),
            course_name: "Technical Writing".to_string(),
            grade: String::new(),
            prerequisite: None,
        }],
        gpa: None,
        total_credits: None,
    };
    assert!(record.find_course("ENG210").is_some());
    assert!(record.find_course("MTH101").is_none());
}

#[test]
fn test_selection_entry_starts_ungraded() {
    let entry = SelectionEntry::new(course("CSC200", 3));
    assert!(entry.grade.is_empty());
    assert_eq!(entry.course.code, "CSC200");
}

#[test]
fn test_course_category_from_str_aliases() {
    assert_eq!(
        CourseCategory::from_str("common").unwrap(),
        CourseCategory::CommonCourse
    );
    assert_eq!(
        CourseCategory::from_str("core_specialization").unwrap(),
        CourseCategory::CoreSpecialization
    );
    assert_eq!(CourseCategory::from_str("all").unwrap(), CourseCategory::All);
    assert!(CourseCategory::from_str("electives").is_err());
}

#[test]
fn test_raw_prerequisite_deserializes_both_shapes() {
    let single: RawPrerequisite = serde_json::from_str(r#""MTH101""#).unwrap();
    assert_eq!(single, RawPrerequisite::Code("MTH101".to_string()));

    let list: RawPrerequisite = serde_json::from_str(r#"["MTH101", "PHY102"]"#).unwrap();
    assert_eq!(
        list,
        RawPrerequisite::Codes(vec!["MTH101".to_string(), "PHY102".to_string()])
    );
}

#[test]
fn test_course_ref_wire_field_names() {
    let json = r#"{
        "course_code": "ENG210",
        "course_name": "Technical Writing",
        "credit_hours": 3,
        "pre_requisite": "MTH101"
    }"#;
    let parsed: CourseRef = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.code, "ENG210");
    assert_eq!(parsed.credit_hours, 3);
    assert_eq!(
        parsed.prerequisite,
        Some(RawPrerequisite::Code("MTH101".to_string()))
    );
}

#[test]
fn test_semester_summary_counts_passing_courses() {
    let record = SemesterRecord {
        number: 1,
        status: SemesterStatus::Completed,
        courses: vec![
            SavedCourse {
                course_code: "MTH101".to_string(),
                course_name: String::new(),
                grade: "B".to_string(),
                prerequisite: None,
            },
            SavedCourse {
                course_code: "PHY102".to_string(),
                course_name: String::new(),
                grade: "F".to_string(),
                prerequisite: None,
            },
        ],
        gpa: Some("2.1".to_string()),
        total_credits: Some(6),
    };

    let summary = SemesterSummary::from(&record);
    assert_eq!(summary.total_courses, 2);
    assert_eq!(summary.passed_courses, 1);
    assert_eq!(summary.total_credits, Some(6));
}
