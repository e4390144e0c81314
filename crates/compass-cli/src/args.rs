//! Command-line argument definitions using clap
//!
//! This module defines the complete CLI structure using clap's derive API,
//! implementing the parameter wrapper pattern: clap-specific argument structs
//! live here and convert into the framework-free parameter types from
//! `compass_core::params` before reaching the planner. CLI concerns (flags,
//! aliases, help text, env fallbacks) stay in this layer; the core types
//! remain interface-agnostic.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use compass_core::{CourseCategory, SaveRequest, SemesterStatus};

/// Main command-line interface for the Compass semester planner
///
/// Compass plans academic semesters against a university records API:
/// browsing the course catalog, assembling a semester's course selection,
/// validating it against prerequisite and credit-limit policy, and saving it
/// back to the remote system.
#[derive(Parser)]
#[command(version, about, name = "compass")]
pub struct Args {
    /// Base URL of the academic records API
    #[arg(
        long,
        global = true,
        env = "COMPASS_API_URL",
        default_value = "http://localhost:8080/api"
    )]
    pub base_url: String,

    /// Student identifier to operate on
    #[arg(long, global = true, env = "COMPASS_STUDENT_ID")]
    pub student: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Compass CLI
///
/// The CLI is organized into four command categories:
/// - `semester`: browse and manage saved semesters
/// - `plan`: create a new semester or edit an existing one
/// - `catalog`: browse the course catalog and credit-hour table
/// - `report`: generate the academic report
#[derive(Subcommand)]
pub enum Commands {
    /// Browse and manage saved semesters
    #[command(alias = "s")]
    Semester {
        #[command(subcommand)]
        command: SemesterCommands,
    },
    /// Create a new semester plan or edit an existing one
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Browse the course catalog
    #[command(alias = "c")]
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Generate the academic report
    Report(ReportArgs),
}

/// Generate the academic report
#[derive(ClapArgs)]
pub struct ReportArgs {
    /// Write the report to a file instead of the terminal
    #[arg(short, long, help = "Path to write the report to")]
    pub out: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum SemesterCommands {
    /// List all saved semesters
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show one semester's courses and figures
    #[command(alias = "s")]
    Show(ShowSemesterArgs),
    /// Delete a whole semester permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteSemesterArgs),
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create the next semester from a course selection
    #[command(alias = "c")]
    Create(PlanCreateArgs),
    /// Edit an existing semester's course set
    #[command(alias = "e")]
    Edit(PlanEditArgs),
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List catalog courses, optionally filtered by category
    #[command(aliases = ["l", "ls"])]
    List(CatalogListArgs),
    /// Show the course-code to credit-hours table
    Credits,
}

/// Show details of a saved semester
#[derive(ClapArgs)]
pub struct ShowSemesterArgs {
    /// Semester number to display
    #[arg(help = "Number of the saved semester to show")]
    pub number: u32,
}

/// Delete a saved semester permanently
#[derive(ClapArgs)]
pub struct DeleteSemesterArgs {
    /// Semester number to delete
    #[arg(help = "Number of the saved semester to permanently delete")]
    pub number: u32,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

/// Create a new semester plan
///
/// Courses are added in the order given; each addition is validated against
/// the selection and the saved plan before it is accepted. The save runs the
/// prerequisite and credit-limit checks unless --override is passed.
#[derive(ClapArgs)]
pub struct PlanCreateArgs {
    /// Course codes to select, in order
    #[arg(
        short,
        long = "course",
        value_delimiter = ',',
        required = true,
        help = "Course codes to select as comma-separated list"
    )]
    pub courses: Vec<String>,

    /// Status to save the semester with
    #[arg(short, long, value_enum, default_value_t = StatusArg::Planned)]
    pub status: StatusArg,

    /// Grades as CODE=GRADE pairs, required when saving as completed
    #[arg(short, long = "grade", help = "Grade assignment as CODE=GRADE")]
    pub grades: Vec<String>,

    /// Save even when a prerequisite or credit-limit policy is violated
    #[arg(long = "override")]
    pub override_policy: bool,
}

impl PlanCreateArgs {
    /// Convert the save-related flags to the core save parameters.
    pub fn save_request(&self) -> SaveRequest {
        SaveRequest {
            override_policy: self.override_policy,
        }
    }
}

/// Edit an existing semester's course set
///
/// The selection starts from the semester's saved courses; removals and
/// additions are applied in that order, and saving issues only the remote
/// calls the diff requires.
#[derive(ClapArgs)]
pub struct PlanEditArgs {
    /// Semester number to edit
    pub number: u32,

    /// Course codes to add
    #[arg(
        short,
        long = "add",
        value_delimiter = ',',
        help = "Course codes to add as comma-separated list"
    )]
    pub add: Vec<String>,

    /// Course codes to remove
    #[arg(
        short,
        long = "remove",
        value_delimiter = ',',
        help = "Course codes to remove as comma-separated list"
    )]
    pub remove: Vec<String>,

    /// New status for the semester
    #[arg(short, long, value_enum)]
    pub status: Option<StatusArg>,

    /// Grades as CODE=GRADE pairs, required when saving as completed
    #[arg(short, long = "grade", help = "Grade assignment as CODE=GRADE")]
    pub grades: Vec<String>,

    /// Save even when a prerequisite or credit-limit policy is violated
    #[arg(long = "override")]
    pub override_policy: bool,
}

impl PlanEditArgs {
    /// Convert the save-related flags to the core save parameters.
    pub fn save_request(&self) -> SaveRequest {
        SaveRequest {
            override_policy: self.override_policy,
        }
    }
}

/// List catalog courses
#[derive(ClapArgs)]
pub struct CatalogListArgs {
    /// Category to filter by
    #[arg(short, long, value_enum, default_value_t = CategoryArg::All)]
    pub category: CategoryArg,
}

/// Command-line argument representation of semester status values
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// The semester is planned for the future
    Planned,
    /// The semester is currently in progress
    Current,
    /// The semester is finished and graded
    Completed,
}

impl From<StatusArg> for SemesterStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::Planned => SemesterStatus::Planned,
            StatusArg::Current => SemesterStatus::Current,
            StatusArg::Completed => SemesterStatus::Completed,
        }
    }
}

/// Command-line argument representation of catalog categories
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    /// National requirement courses
    National,
    /// University requirement courses
    University,
    /// Common courses shared across programs
    Common,
    /// Core discipline courses
    Core,
    /// Core specialization courses
    Specialization,
    /// Every category
    All,
}

impl From<CategoryArg> for CourseCategory {
    fn from(val: CategoryArg) -> Self {
        match val {
            CategoryArg::National => CourseCategory::NationalRequirement,
            CategoryArg::University => CourseCategory::UniversityRequirement,
            CategoryArg::Common => CourseCategory::CommonCourse,
            CategoryArg::Core => CourseCategory::CoreDiscipline,
            CategoryArg::Specialization => CourseCategory::CoreSpecialization,
            CategoryArg::All => CourseCategory::All,
        }
    }
}
