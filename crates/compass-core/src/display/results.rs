//! Display implementations for engine results and operation outcomes.
//!
//! The validation engine hands back structured values; these formatters turn
//! them into user-facing markdown. This is the single vocabulary for policy
//! messages, so every front end phrases rejections and warnings the same way.

use std::fmt;

use crate::planner::SaveOutcome;
use crate::validate::{AdditionOutcome, PolicyViolation, PrereqConflict};

impl fmt::Display for AdditionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdditionOutcome::Accepted => write!(f, "Course added."),
            AdditionOutcome::AcceptedWithNotice { prerequisites } => write!(
                f,
                "Course added. Note: it requires {} — make sure the prerequisite is met before this semester.",
                prerequisites.join(", ")
            ),
            AdditionOutcome::DuplicateInSelection => {
                write!(f, "Course is already in the current selection.")
            }
            AdditionOutcome::AlreadyPlanned { semester } => write!(
                f,
                "Course is already planned in semester {semester}."
            ),
            AdditionOutcome::AlreadyCompleted { semester, grade } => write!(
                f,
                "Course was already completed in semester {semester} with grade {grade}."
            ),
        }
    }
}

impl fmt::Display for PolicyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyViolation::Prerequisite {
                course_code,
                missing_code,
                conflict,
            } => match conflict {
                PrereqConflict::SameSemester => write!(
                    f,
                    "**{course_code}** requires **{missing_code}**, which is selected for the same semester. Taking both concurrently needs approval."
                ),
                PrereqConflict::NotSatisfied => write!(
                    f,
                    "**{course_code}** requires **{missing_code}**, which has not been passed in any earlier semester."
                ),
            },
            PolicyViolation::CreditLimit { current, max } => write!(
                f,
                "Selected credits ({current}) exceed the limit of {max} for this semester."
            ),
        }
    }
}

impl fmt::Display for SaveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveOutcome::NothingToSave => write!(f, "Nothing to save: the selection is empty."),
            SaveOutcome::Blocked(violation) => {
                writeln!(f, "Save blocked:")?;
                writeln!(f)?;
                writeln!(f, "{violation}")?;
                write!(f, "Re-run with an override to proceed anyway.")
            }
            SaveOutcome::Saved {
                semester,
                added,
                updated,
                deleted,
            } => write!(
                f,
                "Saved semester {semester}: {added} added, {updated} updated, {deleted} deleted."
            ),
        }
    }
}

/// Status message for simple confirmations and failures.
pub struct OperationStatus {
    message: String,
    success: bool,
}

impl OperationStatus {
    /// Success confirmation.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Failure notice.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            write!(f, "✓ {}", self.message)
        } else {
            write!(f, "✗ {}", self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition_outcome_messages() {
        let notice = AdditionOutcome::AcceptedWithNotice {
            prerequisites: vec!["MTH101".to_string()],
        };
        assert!(format!("{notice}").contains("requires MTH101"));

        let dup = AdditionOutcome::DuplicateInSelection;
        assert!(format!("{dup}").contains("already in the current selection"));
    }

    #[test]
    fn test_credit_limit_message_carries_numbers() {
        let violation = PolicyViolation::CreditLimit {
            current: 12,
            max: 11,
        };
        let output = format!("{violation}");
        assert!(output.contains("12"));
        assert!(output.contains("11"));
    }

    #[test]
    fn test_blocked_save_suggests_override() {
        let outcome = SaveOutcome::Blocked(PolicyViolation::CreditLimit {
            current: 18,
            max: 15,
        });
        assert!(format!("{outcome}").contains("override"));
    }
}
