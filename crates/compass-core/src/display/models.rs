//! Display implementations for domain models.

use std::fmt;

use crate::models::{CourseRef, SemesterRecord, SemesterSummary};
use crate::validate::normalize_prerequisite;

impl fmt::Display for SemesterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Semester {} ({})", self.number, self.status.as_str())?;
        writeln!(f)?;
        if let Some(gpa) = &self.gpa {
            writeln!(f, "**GPA:** {gpa}")?;
        }
        if let Some(credits) = self.total_credits {
            writeln!(f, "**Credits:** {credits}")?;
        }
        writeln!(f)?;
        if self.courses.is_empty() {
            writeln!(f, "No courses recorded.")?;
        } else {
            for course in &self.courses {
                let grade = if course.grade.is_empty() {
                    "—".to_string()
                } else {
                    course.grade.clone()
                };
                writeln!(
                    f,
                    "- **{}** {} ({grade})",
                    course.course_code, course.course_name
                )?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for SemesterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "**Semester {}** [{}] — {} courses",
            self.number,
            self.status.as_str(),
            self.total_courses
        )?;
        if let Some(credits) = self.total_credits {
            write!(f, ", {credits} credits")?;
        }
        if let Some(gpa) = &self.gpa {
            write!(f, ", GPA {gpa}")?;
        }
        Ok(())
    }
}

impl fmt::Display for CourseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**{}** {} ({} cr)", self.code, self.name, self.credit_hours)?;
        if let Some(prereqs) = normalize_prerequisite(self.prerequisite.as_ref()) {
            write!(f, " — requires {}", prereqs.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{CourseRef, RawPrerequisite, SavedCourse, SemesterRecord, SemesterStatus};

    #[test]
    fn test_semester_record_display_lists_courses() {
        let record = SemesterRecord {
            number: 1,
            status: SemesterStatus::Completed,
            courses: vec![SavedCourse {
                course_code: "MTH101".to_string(),
                course_name: "Calculus I".to_string(),
                grade: "B".to_string(),
                prerequisite: None,
            }],
            gpa: Some("3.0".to_string()),
            total_credits: Some(3),
        };
        let output = format!("{record}");
        assert!(output.contains("# Semester 1 (Completed)"));
        assert!(output.contains("**MTH101** Calculus I (B)"));
        assert!(output.contains("**GPA:** 3.0"));
    }

    #[test]
    fn test_course_ref_display_shows_normalized_prerequisites() {
        let course = CourseRef {
            code: "ENG210".to_string(),
            name: "Technical Writing".to_string(),
            credit_hours: 3,
            prerequisite: Some(RawPrerequisite::Code("mth101, phy102".to_string())),
        };
        let output = format!("{course}");
        assert!(output.contains("requires MTH101, PHY102"));
    }
}
