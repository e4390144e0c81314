//! Core library for the Compass semester-planning application.
//!
//! This crate provides the business logic for planning academic semesters
//! against a remote system of record: domain models, a pure validation
//! engine, REST accessors, and the planner state controller.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): catalog courses, the saved-semester mirror,
//!   and the in-session selection buffer.
//! - **Validation Engine** ([`validate`]): pure, synchronous policy checks —
//!   duplicate detection, prerequisite resolution, credit-limit computation.
//!   Policy outcomes are values, never errors, so they can be surfaced and
//!   explicitly overridden.
//! - **Accessors** ([`api`]): `CatalogApi`/`PlanApi` trait seams with a
//!   reqwest-backed [`api::RestClient`]; tests inject in-memory fakes.
//! - **Controller** ([`planner`]): owns the single [`PlanningSession`] per
//!   student and orchestrates fetch → validate → persist → refetch cycles.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use compass_core::{PlannerBuilder, SaveOutcome};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Build a planner for one student; this fetches the saved plan.
//! let mut planner = PlannerBuilder::new()
//!     .with_base_url("http://localhost:8080/api")
//!     .with_student_id("20210042")
//!     .build()
//!     .await?;
//!
//! // Start a new semester and add a course from the catalog.
//! let semester = planner.start_semester()?;
//! if let Some(course) = planner.lookup_course("ENG210").await? {
//!     let outcome = planner.add_course(course)?;
//!     println!("{outcome}");
//! }
//!
//! // Save; a policy violation blocks unless overridden.
//! match planner.save(false).await? {
//!     SaveOutcome::Blocked(violation) => println!("blocked: {violation}"),
//!     outcome => println!("{outcome}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod report;
pub mod validate;

// Re-export commonly used types
pub use api::{CatalogApi, PlanApi, RestClient};
pub use display::{OperationStatus, SelectionView, SemesterSummaries};
pub use error::{PlannerError, Result};
pub use models::{
    is_passing_grade, CourseCategory, CourseRef, RawPrerequisite, SavedCourse, SelectionEntry,
    SemesterRecord, SemesterStatus, SemesterSummary,
};
pub use params::{CourseRecordCreate, CourseRecordPatch, GradeAssignment, SaveRequest};
pub use planner::{Planner, PlannerBuilder, PlanningSession, SaveOutcome, SessionMode};
pub use report::{ReportData, ReportRenderer};
pub use validate::{
    classify_addition, credit_limit, credit_load, normalize_prerequisite, validate_save,
    AdditionOutcome, PolicyViolation, PrereqConflict,
};
