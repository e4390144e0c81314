use super::session::{PlanningSession, SessionMode};
use crate::models::{
    CourseRef, SavedCourse, SelectionEntry, SemesterRecord, SemesterStatus,
};
use crate::PlannerError;

fn entry(code: &str) -> SelectionEntry {
    SelectionEntry::new(CourseRef {
        code: code.to_string(),
        name: format!("Course {code}"),
        credit_hours: 3,
        prerequisite: None,
    })
}

fn record(number: u32) -> SemesterRecord {
    SemesterRecord {
        number,
        status: SemesterStatus::Planned,
        courses: vec![SavedCourse {
            course_code: "MTH101".to_string(),
            course_name: String::new(),
            grade: String::new(),
            prerequisite: None,
        }],
        gpa: None,
        total_credits: None,
    }
}

#[test]
fn test_session_starts_listing() {
    let session = PlanningSession::default();
    assert_eq!(session.mode(), SessionMode::Listing);
    assert!(session.selection().is_empty());
    assert!(session.pending_violation().is_none());
}

#[test]
fn test_begin_create_resets_selection_and_status() {
    let mut session = PlanningSession::default();
    session.begin_create(3).unwrap();
    assert_eq!(session.mode(), SessionMode::Creating);
    assert_eq!(session.target_semester(), 3);
    assert_eq!(session.status(), SemesterStatus::Planned);
    assert!(session.selection().is_empty());
}

#[test]
fn test_begin_create_rejected_outside_listing() {
    let mut session = PlanningSession::default();
    session.begin_create(1).unwrap();
    let result = session.begin_create(2);
    assert!(matches!(
        result,
        Err(PlannerError::InvalidInput { ref field, .. }) if field == "mode"
    ));
}

#[test]
fn test_view_then_edit_seeds_original() {
    let mut session = PlanningSession::default();
    session.begin_view(2).unwrap();
    assert_eq!(session.mode(), SessionMode::Viewing);

    let original = record(2);
    session
        .begin_edit(original.clone(), vec![entry("MTH101")])
        .unwrap();
    assert_eq!(session.mode(), SessionMode::Editing);
    assert_eq!(session.target_semester(), 2);
    assert_eq!(session.editing_original(), Some(&original));
    assert_eq!(session.selection().len(), 1);
}

#[test]
fn test_edit_rejected_outside_viewing() {
    let mut session = PlanningSession::default();
    let result = session.begin_edit(record(1), vec![]);
    assert!(result.is_err());
}

#[test]
fn test_view_rejected_outside_listing() {
    let mut session = PlanningSession::default();
    session.begin_create(1).unwrap();
    assert!(session.begin_view(1).is_err());
}

#[test]
fn test_reset_returns_to_listing() {
    let mut session = PlanningSession::default();
    session.begin_create(1).unwrap();
    session.push_entry(entry("CSC110"));
    session.reset();
    assert_eq!(session.mode(), SessionMode::Listing);
    assert!(session.selection().is_empty());
    assert!(session.editing_original().is_none());
}

#[test]
fn test_set_status_requires_mutable_mode() {
    let mut session = PlanningSession::default();
    assert!(session.set_status(SemesterStatus::Completed).is_err());

    session.begin_create(1).unwrap();
    session.set_status(SemesterStatus::Completed).unwrap();
    assert_eq!(session.status(), SemesterStatus::Completed);
}

#[test]
fn test_remove_entry_by_code() {
    let mut session = PlanningSession::default();
    session.begin_create(1).unwrap();
    session.push_entry(entry("CSC110"));
    session.push_entry(entry("ENG210"));

    assert!(session.remove_entry("CSC110"));
    assert!(!session.remove_entry("CSC110"));
    assert_eq!(session.selection().len(), 1);
    assert_eq!(session.selection()[0].course.code, "ENG210");
}

#[test]
fn test_assign_grade_stores_value_regardless_of_status() {
    let mut session = PlanningSession::default();
    session.begin_create(1).unwrap();
    session.push_entry(entry("CSC110"));

    // Status is Planned; the value is stored anyway and only persistence
    // decides whether it is written out.
    assert!(session.assign_grade("CSC110", "A"));
    assert_eq!(session.selection()[0].grade, "A");
    assert!(!session.assign_grade("PHY102", "B"));
}

#[test]
fn test_mode_mutability() {
    assert!(SessionMode::Creating.is_mutable());
    assert!(SessionMode::Editing.is_mutable());
    assert!(!SessionMode::Listing.is_mutable());
    assert!(!SessionMode::Viewing.is_mutable());
}
