//! Planning session state machine.
//!
//! A [`PlanningSession`] tracks what the user is doing with exactly one
//! semester at a time. The permitted transitions are:
//!
//! ```text
//! Listing ──start──▶ Creating ──save/cancel──▶ Listing
//! Listing ──view───▶ Viewing ──edit──▶ Editing ──save/cancel──▶ Listing
//! ```
//!
//! Any other transition is rejected with an input error. The session is pure
//! state: it never performs I/O, and the [`super::Planner`] is the only
//! owner.

use crate::error::{PlannerError, Result};
use crate::models::{SelectionEntry, SemesterRecord, SemesterStatus};
use crate::validate::PolicyViolation;

/// What the active planning session is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    /// Browsing the saved semester list; no selection buffer
    #[default]
    Listing,

    /// Assembling a brand-new semester
    Creating,

    /// Inspecting an existing semester read-only
    Viewing,

    /// Modifying an existing semester's course set
    Editing,
}

impl SessionMode {
    /// True for the two modes that own a mutable selection buffer.
    pub fn is_mutable(&self) -> bool {
        matches!(self, SessionMode::Creating | SessionMode::Editing)
    }
}

/// The single mutable planning session owned by a [`super::Planner`].
#[derive(Debug, Default)]
pub struct PlanningSession {
    mode: SessionMode,
    selection: Vec<SelectionEntry>,
    target_semester: u32,
    status: SemesterStatus,
    editing_original: Option<SemesterRecord>,
    pending_violation: Option<PolicyViolation>,
}

impl PlanningSession {
    /// Current session mode.
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// The selection buffer, in insertion order.
    pub fn selection(&self) -> &[SelectionEntry] {
        &self.selection
    }

    /// The semester number this session targets (0 while listing).
    pub fn target_semester(&self) -> u32 {
        self.target_semester
    }

    /// Status the target semester will be saved with.
    pub fn status(&self) -> SemesterStatus {
        self.status
    }

    /// Snapshot of the semester being edited, used to diff removed courses.
    pub fn editing_original(&self) -> Option<&SemesterRecord> {
        self.editing_original.as_ref()
    }

    /// The policy violation stored by the last blocked save, if any.
    pub fn pending_violation(&self) -> Option<&PolicyViolation> {
        self.pending_violation.as_ref()
    }

    fn reject_transition(&self, intent: &str) -> PlannerError {
        PlannerError::invalid_input("mode").with_reason(format!(
            "Cannot {intent} while the session is in {:?} mode",
            self.mode
        ))
    }

    /// `Listing → Creating`: begin assembling a new semester.
    pub(crate) fn begin_create(&mut self, next_number: u32) -> Result<()> {
        if self.mode != SessionMode::Listing {
            return Err(self.reject_transition("start a new semester"));
        }
        self.mode = SessionMode::Creating;
        self.selection.clear();
        self.target_semester = next_number;
        self.status = SemesterStatus::Planned;
        self.editing_original = None;
        self.pending_violation = None;
        Ok(())
    }

    /// `Listing → Viewing`: open an existing semester read-only.
    pub(crate) fn begin_view(&mut self, number: u32) -> Result<()> {
        if self.mode != SessionMode::Listing {
            return Err(self.reject_transition("view a semester"));
        }
        self.mode = SessionMode::Viewing;
        self.selection.clear();
        self.target_semester = number;
        self.pending_violation = None;
        Ok(())
    }

    /// `Viewing → Editing`: seed the selection from the viewed semester.
    pub(crate) fn begin_edit(
        &mut self,
        original: SemesterRecord,
        selection: Vec<SelectionEntry>,
    ) -> Result<()> {
        if self.mode != SessionMode::Viewing {
            return Err(self.reject_transition("edit a semester"));
        }
        self.mode = SessionMode::Editing;
        self.target_semester = original.number;
        self.status = original.status;
        self.selection = selection;
        self.editing_original = Some(original);
        self.pending_violation = None;
        Ok(())
    }

    /// Return to `Listing`, dropping all session state. Used by cancel and
    /// by the terminal success path of a save.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Change the status the semester will be saved with.
    pub(crate) fn set_status(&mut self, status: SemesterStatus) -> Result<()> {
        if !self.mode.is_mutable() {
            return Err(self.reject_transition("change the semester status"));
        }
        self.status = status;
        Ok(())
    }

    pub(crate) fn push_entry(&mut self, entry: SelectionEntry) {
        self.selection.push(entry);
    }

    /// Remove the matching entry; false when the code is not selected.
    pub(crate) fn remove_entry(&mut self, course_code: &str) -> bool {
        let before = self.selection.len();
        self.selection.retain(|e| e.course.code != course_code);
        self.selection.len() != before
    }

    /// Assign a grade to the matching entry; false when the code is not
    /// selected. The value is stored regardless of semester status.
    pub(crate) fn assign_grade(&mut self, course_code: &str, grade: &str) -> bool {
        match self
            .selection
            .iter_mut()
            .find(|e| e.course.code == course_code)
        {
            Some(entry) => {
                entry.grade = grade.to_string();
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_pending_violation(&mut self, violation: PolicyViolation) {
        self.pending_violation = Some(violation);
    }
}
