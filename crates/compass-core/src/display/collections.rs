//! Collection wrapper types for list display.

use std::fmt;

use crate::models::{SelectionEntry, SemesterSummary};

/// Wrapper for displaying a list of semester summaries as markdown.
pub struct SemesterSummaries(pub Vec<SemesterSummary>);

impl fmt::Display for SemesterSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No semesters saved yet.");
        }
        writeln!(f, "# Semesters")?;
        writeln!(f)?;
        for summary in &self.0 {
            writeln!(f, "- {summary}")?;
        }
        Ok(())
    }
}

/// Wrapper for displaying the current selection buffer.
pub struct SelectionView<'a>(pub &'a [SelectionEntry]);

impl fmt::Display for SelectionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "Selection is empty.");
        }
        for (index, entry) in self.0.iter().enumerate() {
            write!(f, "{}. {}", index + 1, entry.course)?;
            if !entry.grade.is_empty() {
                write!(f, " — grade {}", entry.grade)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
