//! Intent-level operations on the Planner.
//!
//! These methods are the only place where engine results and transport
//! failures are mapped for consumers; presentation layers never interpret
//! raw errors themselves.

use log::{debug, info, warn};

use super::save::{SaveActions, SaveOutcome};
use super::Planner;
use crate::error::{PlannerError, Result};
use crate::models::{
    CourseCategory, CourseRef, SelectionEntry, SemesterRecord, SemesterStatus,
};
use crate::report::ReportRenderer;
use crate::validate::{classify_addition, validate_save, AdditionOutcome};

impl Planner {
    /// Refetch all canonical state from the remote system.
    ///
    /// The three independent reads fan out concurrently; they populate
    /// disjoint state slices and have no ordering dependency. Per-semester
    /// GPAs are then filled in, and the mirror is replaced wholesale.
    pub async fn refresh(&mut self) -> Result<()> {
        let (mut semesters, credit_map, credits_summary) = tokio::try_join!(
            self.repo.student_plan(&self.student_id),
            self.catalog.credit_map(),
            self.repo.semester_credits_summary(&self.student_id),
        )?;

        for record in &mut semesters {
            record.gpa = self.repo.semester_gpa(&self.student_id, record.number).await?;
            record.total_credits = credits_summary.get(&record.number).copied();
        }

        debug!(
            "Refreshed plan for student {}: {} semesters",
            self.student_id,
            semesters.len()
        );
        self.semesters = semesters;
        self.credit_map = credit_map;
        Ok(())
    }

    /// Fetch a catalog pool. Pass-through to the catalog accessor.
    pub async fn course_pool(&self, category: CourseCategory) -> Result<Vec<CourseRef>> {
        self.catalog.course_pool(category, &self.student_id).await
    }

    /// Look up one course in the full catalog pool by code.
    pub async fn lookup_course(&self, course_code: &str) -> Result<Option<CourseRef>> {
        let pool = self.course_pool(CourseCategory::All).await?;
        Ok(pool
            .into_iter()
            .find(|c| c.code.eq_ignore_ascii_case(course_code)))
    }

    /// Begin creating a new semester and return its number.
    ///
    /// Numbers are assigned sequentially: `max(existing) + 1`. The refetch
    /// after a save is the source of truth, so numbers are never reused
    /// locally even after a deletion.
    pub fn start_semester(&mut self) -> Result<u32> {
        let next = self.semesters.iter().map(|r| r.number).max().unwrap_or(0) + 1;
        self.session.begin_create(next)?;
        info!("Creating semester {next}");
        Ok(next)
    }

    /// Open an existing semester read-only.
    pub fn view_semester(&mut self, number: u32) -> Result<&SemesterRecord> {
        if self.semesters.iter().all(|r| r.number != number) {
            return Err(PlannerError::SemesterNotFound { number });
        }
        self.session.begin_view(number)?;
        // Re-borrow after the session mutation; existence checked above.
        self.semesters
            .iter()
            .find(|r| r.number == number)
            .ok_or(PlannerError::SemesterNotFound { number })
    }

    /// Switch the viewed semester into editing, seeding the selection from
    /// its persisted courses.
    pub fn edit_semester(&mut self) -> Result<()> {
        let number = self.session.target_semester();
        let original = self
            .semesters
            .iter()
            .find(|r| r.number == number)
            .cloned()
            .ok_or(PlannerError::SemesterNotFound { number })?;

        let selection = original
            .courses
            .iter()
            .map(|saved| SelectionEntry {
                course: CourseRef {
                    code: saved.course_code.clone(),
                    name: saved.course_name.clone(),
                    credit_hours: self
                        .credit_map
                        .get(&saved.course_code)
                        .copied()
                        .unwrap_or(0),
                    prerequisite: saved.prerequisite.clone(),
                },
                grade: saved.grade.clone(),
            })
            .collect();

        self.session.begin_edit(original, selection)
    }

    /// Cancel the session and return to listing. Always permitted.
    pub fn cancel(&mut self) {
        self.session.reset();
    }

    /// Change the status the target semester will be saved with.
    pub fn set_status(&mut self, status: SemesterStatus) -> Result<()> {
        self.session.set_status(status)
    }

    /// Attempt to add a course to the selection.
    ///
    /// Rejections leave the selection untouched. An accepted-with-notice
    /// outcome appends the course *and* reports its prerequisites; the
    /// notice is advisory and the authoritative check runs at save time.
    pub fn add_course(&mut self, course: CourseRef) -> Result<AdditionOutcome> {
        if !self.session.mode().is_mutable() {
            return Err(PlannerError::invalid_input("mode")
                .with_reason("Courses can only be added while creating or editing a semester"));
        }

        // The target semester's own record must not count as "planned
        // elsewhere" while it is being edited.
        let target = self.session.target_semester();
        let other_semesters: Vec<SemesterRecord> = self
            .semesters
            .iter()
            .filter(|r| r.number != target)
            .cloned()
            .collect();

        let outcome = classify_addition(&course, self.session.selection(), &other_semesters);
        if outcome.is_accepted() {
            self.session.push_entry(SelectionEntry::new(course));
        } else {
            debug!("Rejected addition: {outcome:?}");
        }
        Ok(outcome)
    }

    /// Remove a course from the selection.
    pub fn remove_course(&mut self, course_code: &str) -> Result<()> {
        if !self.session.mode().is_mutable() {
            return Err(PlannerError::invalid_input("mode")
                .with_reason("Courses can only be removed while creating or editing a semester"));
        }
        if !self.session.remove_entry(course_code) {
            return Err(PlannerError::invalid_input("course_code")
                .with_reason(format!("'{course_code}' is not in the current selection")));
        }
        Ok(())
    }

    /// Assign a grade to a selected course.
    ///
    /// The value is stored regardless of the semester status; it is only
    /// persisted when the semester is saved as completed.
    pub fn set_grade(&mut self, course_code: &str, grade: &str) -> Result<()> {
        if !self.session.mode().is_mutable() {
            return Err(PlannerError::invalid_input("mode")
                .with_reason("Grades can only be set while creating or editing a semester"));
        }
        if !self.session.assign_grade(course_code, grade) {
            return Err(PlannerError::invalid_input("course_code")
                .with_reason(format!("'{course_code}' is not in the current selection")));
        }
        Ok(())
    }

    /// Save the session to the remote system.
    ///
    /// With `override_policy` false the bypassable checks run first and a
    /// violation blocks the save (stored on the session, returned as
    /// [`SaveOutcome::Blocked`]). With `override_policy` true the policy
    /// checks are skipped entirely; the missing-grade check for completed
    /// semesters still applies and is never bypassable.
    ///
    /// Remote calls execute strictly sequentially. The first failure aborts
    /// the remaining calls and leaves the session in its current mode so the
    /// user can retry; on full success the mirror is refetched and the
    /// session returns to listing.
    pub async fn save(&mut self, override_policy: bool) -> Result<SaveOutcome> {
        let mode = self.session.mode();
        if !mode.is_mutable() {
            return Err(PlannerError::invalid_input("mode")
                .with_reason("Nothing to save: no semester is being created or edited"));
        }
        if self.session.selection().is_empty() {
            return Ok(SaveOutcome::NothingToSave);
        }

        let status = self.session.status();
        let semester = self.session.target_semester();

        if status == SemesterStatus::Completed {
            if let Some(entry) = self
                .session
                .selection()
                .iter()
                .find(|e| e.grade.is_empty())
            {
                return Err(PlannerError::MissingGrade {
                    course_code: entry.course.code.clone(),
                });
            }
        }

        if !override_policy {
            let backend_limit = self
                .repo
                .semester_credit_limit(&self.student_id, semester)
                .await?;
            if let Err(violation) = validate_save(
                self.session.selection(),
                &self.semesters,
                semester,
                backend_limit,
                &self.credit_map,
            ) {
                warn!("Save blocked: {violation:?}");
                self.session.set_pending_violation(violation.clone());
                return Ok(SaveOutcome::Blocked(violation));
            }
        }

        let actions = SaveActions::plan(
            mode,
            self.session.editing_original(),
            self.session.selection(),
            status,
            &self.student_id,
            semester,
        );
        let (added, updated, deleted) = (
            actions.adds.len(),
            actions.updates.len(),
            actions.deletes.len(),
        );

        // A failure here propagates without resetting the session.
        actions
            .execute(self.repo.as_ref(), &self.student_id, semester)
            .await?;

        info!(
            "Saved semester {semester}: {added} added, {updated} updated, {deleted} deleted"
        );
        self.refresh().await?;
        self.session.reset();

        Ok(SaveOutcome::Saved {
            semester,
            added,
            updated,
            deleted,
        })
    }

    /// Delete a whole semester remotely and refetch the mirror.
    pub async fn delete_semester(&mut self, number: u32) -> Result<()> {
        if self.semesters.iter().all(|r| r.number != number) {
            return Err(PlannerError::SemesterNotFound { number });
        }
        self.repo.delete_semester(&self.student_id, number).await?;
        self.refresh().await
    }

    /// Fetch the report payload and hand it to the renderer collaborator.
    ///
    /// Failures surface as errors and never touch planning state.
    pub async fn generate_report(&self, renderer: &dyn ReportRenderer) -> Result<()> {
        let data = self.repo.report_data(&self.student_id).await?;
        renderer.render(&data)
    }
}
