//! Save reconciliation: diff computation and the sequential executor.
//!
//! Saving a session means reconciling the selection buffer against the
//! remote system of record. The reconciliation is computed up front as three
//! disjoint action lists (deletes, updates, adds) and then executed strictly
//! sequentially: later calls may depend on earlier ones succeeding, and
//! aborting at the first failure keeps error attribution unambiguous. There
//! is no transactional atomicity across the sequence; a failed save leaves
//! the session untouched so the user can retry.

use serde::{Deserialize, Serialize};

use super::session::SessionMode;
use crate::api::PlanApi;
use crate::error::Result;
use crate::models::{SelectionEntry, SemesterRecord, SemesterStatus};
use crate::params::{persisted_grade, CourseRecordCreate, CourseRecordPatch};
use crate::validate::PolicyViolation;

/// Result of a save attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The selection was empty; saving is a no-op, not an error
    NothingToSave,

    /// A bypassable policy violation blocked the save. The violation is also
    /// stored on the session; retry with an override to force-proceed.
    Blocked(PolicyViolation),

    /// Every remote call succeeded and the mirror was refetched
    Saved {
        semester: u32,
        added: usize,
        updated: usize,
        deleted: usize,
    },
}

/// The three disjoint action lists a save executes.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct SaveActions {
    /// Course codes to delete (present in the original, absent from the
    /// selection)
    pub deletes: Vec<String>,

    /// Records to update in place (present in both)
    pub updates: Vec<(String, CourseRecordPatch)>,

    /// Records to create (absent from the original)
    pub adds: Vec<CourseRecordCreate>,
}

impl SaveActions {
    /// Compute the action lists for the session.
    ///
    /// Creating mode issues adds only. Editing mode diffs the original
    /// snapshot against the selection by course code.
    pub(crate) fn plan(
        mode: SessionMode,
        editing_original: Option<&SemesterRecord>,
        selection: &[SelectionEntry],
        status: SemesterStatus,
        student_id: &str,
        semester: u32,
    ) -> Self {
        let status_str = status.as_str().to_string();
        let mut actions = Self::default();

        let original = match mode {
            SessionMode::Editing => editing_original,
            _ => None,
        };

        if let Some(original) = original {
            for course in &original.courses {
                let still_selected = selection
                    .iter()
                    .any(|e| e.course.code == course.course_code);
                if !still_selected {
                    actions.deletes.push(course.course_code.clone());
                }
            }
        }

        for entry in selection {
            let grade = persisted_grade(status, &entry.grade);
            let existed = original
                .map(|o| o.find_course(&entry.course.code).is_some())
                .unwrap_or(false);
            if existed {
                actions.updates.push((
                    entry.course.code.clone(),
                    CourseRecordPatch {
                        grade,
                        status: status_str.clone(),
                    },
                ));
            } else {
                actions.adds.push(CourseRecordCreate {
                    student_id: student_id.to_string(),
                    course_code: entry.course.code.clone(),
                    semester_number: semester,
                    grade,
                    status: status_str.clone(),
                });
            }
        }

        actions
    }

    /// Execute the lists in order: deletes, then updates, then adds.
    ///
    /// Every call is awaited before the next is issued. The first transport
    /// failure aborts the remaining calls and propagates.
    pub(crate) async fn execute(
        &self,
        repo: &dyn PlanApi,
        student_id: &str,
        semester: u32,
    ) -> Result<()> {
        for course_code in &self.deletes {
            repo.delete_course_record(student_id, course_code, semester)
                .await?;
        }
        for (course_code, patch) in &self.updates {
            repo.update_course_record(student_id, course_code, semester, patch)
                .await?;
        }
        for record in &self.adds {
            repo.add_course_record(record).await?;
        }
        Ok(())
    }
}
