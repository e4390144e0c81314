//! Course catalog model definitions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Prerequisite field exactly as the remote catalog delivers it.
///
/// The backend is inconsistent about this field: sometimes a single
/// comma-separated string, sometimes an array of codes, sometimes a sentinel
/// like `"none"` or `"---"`. This type captures the raw shape; every consumer
/// must go through [`crate::validate::normalize_prerequisite`] instead of
/// comparing raw values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RawPrerequisite {
    /// Single code or comma-separated list, e.g. `"MTH101"` or `"MTH101, PHY102"`
    Code(String),
    /// Explicit list of codes
    Codes(Vec<String>),
}

/// Immutable reference data for one catalog course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseRef {
    /// Course code, unique within the catalog (e.g. `"ENG210"`)
    #[serde(rename = "course_code")]
    pub code: String,

    /// Human-readable course name
    #[serde(rename = "course_name")]
    pub name: String,

    /// Credit hours awarded by the course
    #[serde(default)]
    pub credit_hours: u32,

    /// Raw prerequisite field; read only through normalization
    #[serde(rename = "pre_requisite", default)]
    pub prerequisite: Option<RawPrerequisite>,
}

/// Catalog pool categories offered by the remote API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CourseCategory {
    NationalRequirement,
    UniversityRequirement,
    CommonCourse,
    CoreDiscipline,
    CoreSpecialization,
    /// The union of every pool
    #[default]
    All,
}

impl FromStr for CourseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "national" | "national_requirement" => Ok(CourseCategory::NationalRequirement),
            "university" | "university_requirement" => Ok(CourseCategory::UniversityRequirement),
            "common" | "common_course" => Ok(CourseCategory::CommonCourse),
            "discipline" | "core_discipline" => Ok(CourseCategory::CoreDiscipline),
            "specialization" | "core_specialization" => Ok(CourseCategory::CoreSpecialization),
            "all" => Ok(CourseCategory::All),
            _ => Err(format!("Invalid course category: {s}")),
        }
    }
}

impl CourseCategory {
    /// Convert to the query-string representation used by the remote API.
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseCategory::NationalRequirement => "national_requirement",
            CourseCategory::UniversityRequirement => "university_requirement",
            CourseCategory::CommonCourse => "common_course",
            CourseCategory::CoreDiscipline => "core_discipline",
            CourseCategory::CoreSpecialization => "core_specialization",
            CourseCategory::All => "all",
        }
    }
}
