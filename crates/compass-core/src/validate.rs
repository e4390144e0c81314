//! Pure validation engine for the planning session.
//!
//! Everything in this module is synchronous and free of I/O: the functions
//! operate on the in-memory selection buffer and the saved-semester mirror.
//! Policy outcomes are reported as discriminated results, never through the
//! error channel, so callers can surface them and offer an explicit override.
//!
//! Two checks exist at two different times:
//!
//! - [`classify_addition`] runs when a course is added to the selection. Its
//!   prerequisite notice is advisory only and never blocks the add.
//! - [`validate_save`] runs at save time and is authoritative. Its violations
//!   block the save unless the caller re-invokes with an override.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{CourseRef, RawPrerequisite, SelectionEntry, SemesterRecord};

/// Literal tokens the catalog uses to mean "no prerequisite".
const NO_PREREQ_TOKENS: &[&str] = &["none", "-", "---", "undefined", "n/a", "", "[]"];

/// Credit ceiling applied when the prior semester's GPA is below 2.0.
const REDUCED_CREDIT_LIMIT: u32 = 11;

/// Default credit ceiling.
const DEFAULT_CREDIT_LIMIT: u32 = 15;

/// Credit hours assumed for a course missing from the credit map.
const DEFAULT_CREDIT_HOURS: u32 = 3;

/// Normalize the raw prerequisite field into an ordered list of codes.
///
/// Sentinel tokens (`"none"`, `"-"`, `"---"`, `"undefined"`, `"n/a"`, `""`,
/// `"[]"`, case-insensitive) mean no prerequisite. String values are split
/// on commas with each segment trimmed and uppercased; list values are
/// uppercased element-wise. An empty result collapses to `None`.
///
/// This is the only sanctioned way to read a prerequisite field; applying it
/// at every read boundary keeps comparisons free of case and whitespace
/// mismatches. The function is idempotent over its own output.
pub fn normalize_prerequisite(raw: Option<&RawPrerequisite>) -> Option<Vec<String>> {
    let codes: Vec<String> = match raw? {
        RawPrerequisite::Code(text) => {
            let trimmed = text.trim();
            if NO_PREREQ_TOKENS.contains(&trimmed.to_lowercase().as_str()) {
                return None;
            }
            trimmed
                .split(',')
                .map(|segment| segment.trim().to_uppercase())
                .filter(|segment| !segment.is_empty())
                .collect()
        }
        RawPrerequisite::Codes(list) => list
            .iter()
            .map(|code| code.trim().to_uppercase())
            .filter(|code| !code.is_empty())
            .collect(),
    };

    if codes.is_empty() {
        None
    } else {
        Some(codes)
    }
}

/// Result of attempting to add a course to the active selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum AdditionOutcome {
    /// The course may be added
    Accepted,

    /// The course may be added, but it has prerequisites the student should
    /// review. Advisory only; the authoritative check runs at save time.
    AcceptedWithNotice { prerequisites: Vec<String> },

    /// The course is already in the current selection
    DuplicateInSelection,

    /// The course sits ungraded in another saved semester
    AlreadyPlanned { semester: u32 },

    /// The course was already completed with a non-retakable grade
    AlreadyCompleted { semester: u32, grade: String },
}

impl AdditionOutcome {
    /// True for the two outcomes that permit appending the course.
    pub fn is_accepted(&self) -> bool {
        matches!(
            self,
            AdditionOutcome::Accepted | AdditionOutcome::AcceptedWithNotice { .. }
        )
    }
}

/// Classify an attempt to add `course` to the selection.
///
/// Rejections are local validation errors and are never bypassable. A saved
/// occurrence graded `"F"` is retake-eligible and does not reject the add.
pub fn classify_addition(
    course: &CourseRef,
    selection: &[SelectionEntry],
    saved: &[SemesterRecord],
) -> AdditionOutcome {
    if selection.iter().any(|entry| entry.course.code == course.code) {
        return AdditionOutcome::DuplicateInSelection;
    }

    for record in saved {
        let Some(existing) = record.find_course(&course.code) else {
            continue;
        };
        if existing.grade.is_empty() {
            return AdditionOutcome::AlreadyPlanned {
                semester: record.number,
            };
        }
        if !existing.is_retake_eligible() {
            return AdditionOutcome::AlreadyCompleted {
                semester: record.number,
                grade: existing.grade.clone(),
            };
        }
        // Graded "F": retake-eligible, keep scanning the other semesters.
    }

    match normalize_prerequisite(course.prerequisite.as_ref()) {
        Some(prerequisites) => AdditionOutcome::AcceptedWithNotice { prerequisites },
        None => AdditionOutcome::Accepted,
    }
}

/// How a prerequisite fails at save time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PrereqConflict {
    /// The prerequisite is being taken concurrently in the same target
    /// semester. Soft: possibly fine, but it needs an explicit override.
    SameSemester,

    /// No saved semester contains the prerequisite with a passing grade.
    NotSatisfied,
}

/// A bypassable policy violation detected by [`validate_save`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum PolicyViolation {
    /// A course in the selection has an unmet prerequisite
    Prerequisite {
        course_code: String,
        missing_code: String,
        conflict: PrereqConflict,
    },

    /// The selection exceeds the applicable credit ceiling
    CreditLimit { current: u32, max: u32 },
}

/// Sum the selection's credit hours.
///
/// The flat credit map is authoritative; a course absent from it falls back
/// to its catalog credit hours, and to 3 when those are unknown too.
pub fn credit_load(selection: &[SelectionEntry], credit_map: &HashMap<String, u32>) -> u32 {
    selection
        .iter()
        .map(|entry| {
            credit_map
                .get(&entry.course.code)
                .copied()
                .or(if entry.course.credit_hours > 0 {
                    Some(entry.course.credit_hours)
                } else {
                    None
                })
                .unwrap_or(DEFAULT_CREDIT_HOURS)
        })
        .sum()
}

/// Compute the credit ceiling for the target semester.
///
/// A backend-provided limit is authoritative when present. Otherwise the
/// limit derives from the immediately preceding semester's GPA: below 2.0
/// the ceiling drops to 11 credit hours, else 15. A missing or unparsable
/// prior GPA yields the default 15.
pub fn credit_limit(
    saved: &[SemesterRecord],
    target_semester: u32,
    backend_limit: Option<u32>,
) -> u32 {
    if let Some(limit) = backend_limit {
        return limit;
    }

    let prior_gpa = saved
        .iter()
        .find(|record| record.number + 1 == target_semester)
        .and_then(SemesterRecord::gpa_value);

    match prior_gpa {
        Some(gpa) if gpa < 2.0 => REDUCED_CREDIT_LIMIT,
        _ => DEFAULT_CREDIT_LIMIT,
    }
}

/// Run the authoritative save-time checks over the selection.
///
/// Prerequisites are checked first, in selection order, short-circuiting on
/// the first violation: a prerequisite found in the selection itself is a
/// [`PrereqConflict::SameSemester`] conflict; one with no passing saved
/// occurrence is [`PrereqConflict::NotSatisfied`]. The credit check runs only
/// after every prerequisite passes.
///
/// Both violation kinds are bypassable: callers may skip this function
/// entirely on an explicit override. That is deliberate warn-don't-block
/// policy, not an oversight.
pub fn validate_save(
    selection: &[SelectionEntry],
    saved: &[SemesterRecord],
    target_semester: u32,
    backend_limit: Option<u32>,
    credit_map: &HashMap<String, u32>,
) -> Result<(), PolicyViolation> {
    for entry in selection {
        let Some(prerequisites) = normalize_prerequisite(entry.course.prerequisite.as_ref())
        else {
            continue;
        };

        for code in prerequisites {
            let in_selection = selection
                .iter()
                .any(|other| other.course.code.eq_ignore_ascii_case(&code));
            if in_selection {
                return Err(PolicyViolation::Prerequisite {
                    course_code: entry.course.code.clone(),
                    missing_code: code,
                    conflict: PrereqConflict::SameSemester,
                });
            }

            let satisfied = saved.iter().any(|record| {
                record
                    .courses
                    .iter()
                    .any(|c| c.course_code.eq_ignore_ascii_case(&code) && c.is_passing())
            });
            if !satisfied {
                return Err(PolicyViolation::Prerequisite {
                    course_code: entry.course.code.clone(),
                    missing_code: code,
                    conflict: PrereqConflict::NotSatisfied,
                });
            }
        }
    }

    let current = credit_load(selection, credit_map);
    let max = credit_limit(saved, target_semester, backend_limit);
    if current > max {
        return Err(PolicyViolation::CreditLimit { current, max });
    }

    Ok(())
}
