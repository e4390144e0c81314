//! High-level planner API: the controller that owns the planning session.
//!
//! The [`Planner`] is the central coordinator between user intents, the pure
//! validation engine, and the remote accessors:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Validation    │    │   Accessors     │
//! │ (user intents:  │───▶│ (validate::*,   │    │ (CatalogApi,    │
//! │  add, save, …)  │    │  pure, no I/O)  │    │  PlanApi)       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!          │                                            ▲
//!          └──────── fetch / persist / refetch ─────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: factory for [`Planner`] instances (REST or injected
//!   accessors)
//! - [`session`]: the `Listing/Creating/Viewing/Editing` state machine
//! - [`save`]: diff computation and the sequential save executor
//! - `handlers`: intent-level operations on the planner
//!
//! ## Design notes
//!
//! - The saved-semester mirror is only ever replaced wholesale by a full
//!   refetch after a successful save, never patched incrementally.
//! - Policy violations are returned as values and stored on the session;
//!   only transport failures use the error channel.
//! - All remote writes in a save are sequential; the reads at refresh time
//!   fan out concurrently because they populate disjoint state slices.

use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{CatalogApi, PlanApi};
use crate::models::SemesterRecord;

pub mod builder;
pub mod handlers;
pub mod save;
pub mod session;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;
pub use save::SaveOutcome;
pub use session::{PlanningSession, SessionMode};

/// Planner state controller for one student's planning session.
pub struct Planner {
    pub(crate) student_id: String,
    pub(crate) catalog: Arc<dyn CatalogApi>,
    pub(crate) repo: Arc<dyn PlanApi>,
    /// Read-mostly mirror of the remote plan, ascending by semester number
    pub(crate) semesters: Vec<SemesterRecord>,
    /// Flat course-code to credit-hours map
    pub(crate) credit_map: HashMap<String, u32>,
    pub(crate) session: PlanningSession,
}

impl Planner {
    /// Creates a new planner with the given accessors. State starts empty;
    /// the builder performs the initial refresh.
    pub(crate) fn new(
        student_id: String,
        catalog: Arc<dyn CatalogApi>,
        repo: Arc<dyn PlanApi>,
    ) -> Self {
        Self {
            student_id,
            catalog,
            repo,
            semesters: Vec::new(),
            credit_map: HashMap::new(),
            session: PlanningSession::default(),
        }
    }

    /// The student this planner belongs to.
    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// The saved-semester mirror.
    pub fn semesters(&self) -> &[SemesterRecord] {
        &self.semesters
    }

    /// The active planning session.
    pub fn session(&self) -> &PlanningSession {
        &self.session
    }

    /// The cached course-code to credit-hours map.
    pub fn credit_map(&self) -> &HashMap<String, u32> {
        &self.credit_map
    }
}
