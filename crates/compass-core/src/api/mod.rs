//! Remote accessor layer: trait seams and the REST implementation.
//!
//! The planner consumes two narrow collaborator interfaces:
//!
//! - [`CatalogApi`]: read-only course pools and the flat credit map.
//! - [`PlanApi`]: the student's saved plan, per-semester figures, and the
//!   course-record mutations used by the save sequence.
//!
//! [`RestClient`] implements both against the remote REST API. Tests inject
//! in-memory implementations instead; the planner never knows the
//! difference. Transport failures surface as [`crate::PlannerError`] and are
//! the only errors this layer produces — policy belongs to the validation
//! engine.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CourseCategory, CourseRef, SemesterRecord};
use crate::params::{CourseRecordCreate, CourseRecordPatch};
use crate::report::ReportData;

pub mod rest;
pub mod types;

pub use rest::RestClient;

/// Read-only access to the course catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the course pool for a category, scoped to the student's program.
    async fn course_pool(
        &self,
        category: CourseCategory,
        student_id: &str,
    ) -> Result<Vec<CourseRef>>;

    /// Fetch the flat course-code to credit-hours map.
    async fn credit_map(&self) -> Result<HashMap<String, u32>>;
}

/// Access to the student's saved plan and the record mutations behind saves.
#[async_trait]
pub trait PlanApi: Send + Sync {
    /// Fetch the student's saved semester records, ascending by number.
    async fn student_plan(&self, student_id: &str) -> Result<Vec<SemesterRecord>>;

    /// Fetch one semester's GPA; `None` when the remote has none recorded.
    async fn semester_gpa(&self, student_id: &str, semester: u32) -> Result<Option<String>>;

    /// Fetch the authoritative credit limit for a semester, when the backend
    /// provides one. `None` falls back to the GPA-derived default.
    async fn semester_credit_limit(&self, student_id: &str, semester: u32)
        -> Result<Option<u32>>;

    /// Fetch per-semester total credit hours.
    async fn semester_credits_summary(&self, student_id: &str) -> Result<HashMap<u32, u32>>;

    /// Create a student-course record.
    async fn add_course_record(&self, record: &CourseRecordCreate) -> Result<()>;

    /// Update the grade/status of an existing student-course record.
    async fn update_course_record(
        &self,
        student_id: &str,
        course_code: &str,
        semester: u32,
        patch: &CourseRecordPatch,
    ) -> Result<()>;

    /// Delete one student-course record.
    async fn delete_course_record(
        &self,
        student_id: &str,
        course_code: &str,
        semester: u32,
    ) -> Result<()>;

    /// Delete a whole semester in one call (bulk variant).
    async fn delete_semester(&self, student_id: &str, semester: u32) -> Result<()>;

    /// Fetch the academic report payload.
    async fn report_data(&self, student_id: &str) -> Result<ReportData>;
}
