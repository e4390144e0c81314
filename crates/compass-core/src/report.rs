//! Academic report payload and the renderer collaborator seam.
//!
//! Report rendering (PDF or otherwise) is owned by the consumer: the core
//! only fetches the payload and hands it to a [`ReportRenderer`]
//! implementation. Rendering failures never touch planning state.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::SemesterRecord;

/// Report payload fetched from the remote system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportData {
    /// Student identifier
    pub student_id: String,

    /// Student display name, when the remote provides one
    #[serde(default)]
    pub student_name: Option<String>,

    /// Full academic history grouped by semester
    #[serde(default)]
    pub semesters: Vec<SemesterRecord>,

    /// Cumulative GPA as a decimal string
    #[serde(default)]
    pub cumulative_gpa: Option<String>,
}

/// Collaborator seam for turning a [`ReportData`] payload into an artifact.
///
/// The CLI ships a plain-text implementation; a GUI front end would plug in
/// a PDF renderer here. Implementations must not mutate planner state.
pub trait ReportRenderer {
    /// Render the report payload.
    fn render(&self, data: &ReportData) -> Result<()>;
}
