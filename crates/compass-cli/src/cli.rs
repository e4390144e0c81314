//! Command handlers bridging parsed arguments to the planner
//!
//! Each handler drives one planner workflow: it converts the clap argument
//! structs into core parameter types, calls the planner, and renders the
//! resulting display values as markdown. Handlers never interpret policy
//! themselves; blocked saves and rejected additions arrive as displayable
//! outcomes from the core.

use anyhow::Result;
use compass_core::{
    GradeAssignment, OperationStatus, Planner, SaveRequest, SelectionView, SemesterSummaries,
    SemesterSummary,
};
use log::debug;

use crate::args::{
    CatalogCommands, CatalogListArgs, DeleteSemesterArgs, PlanCommands, PlanCreateArgs,
    PlanEditArgs, ReportArgs, SemesterCommands, ShowSemesterArgs,
};
use crate::renderer::{FileReportRenderer, MarkdownReportRenderer, TerminalRenderer};

/// Command executor holding the planner and the output renderer.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_semester_command(mut self, command: SemesterCommands) -> Result<()> {
        match command {
            SemesterCommands::List => self.list_semesters(),
            SemesterCommands::Show(args) => self.show_semester(&args),
            SemesterCommands::Delete(args) => self.delete_semester(&args).await,
        }
    }

    pub async fn handle_plan_command(mut self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => self.plan_create(args).await,
            PlanCommands::Edit(args) => self.plan_edit(args).await,
        }
    }

    pub async fn handle_catalog_command(self, command: CatalogCommands) -> Result<()> {
        match command {
            CatalogCommands::List(args) => self.list_catalog(&args).await,
            CatalogCommands::Credits => self.list_credits(),
        }
    }

    /// Default command: list the saved semesters.
    pub fn list_semesters(&self) -> Result<()> {
        let summaries = SemesterSummaries(
            self.planner
                .semesters()
                .iter()
                .map(SemesterSummary::from)
                .collect(),
        );
        self.renderer.render(&summaries.to_string())
    }

    fn show_semester(&mut self, args: &ShowSemesterArgs) -> Result<()> {
        let markdown = self.planner.view_semester(args.number)?.to_string();
        self.planner.cancel();
        self.renderer.render(&markdown)
    }

    async fn delete_semester(&mut self, args: &DeleteSemesterArgs) -> Result<()> {
        if !args.confirm {
            let status = OperationStatus::failure(format!(
                "Deleting semester {} requires --confirm",
                args.number
            ));
            return self.renderer.render(&status.to_string());
        }
        self.planner.delete_semester(args.number).await?;
        let status = OperationStatus::success(format!("Deleted semester {}", args.number));
        self.renderer.render(&status.to_string())
    }

    async fn plan_create(&mut self, args: PlanCreateArgs) -> Result<()> {
        let semester = self.planner.start_semester()?;
        self.renderer
            .render(&format!("# Planning semester {semester}\n\n"))?;

        self.add_courses(&args.courses).await?;
        self.planner.set_status(args.status.into())?;
        self.assign_grades(&args.grades)?;
        self.save_session(args.save_request()).await
    }

    async fn plan_edit(&mut self, args: PlanEditArgs) -> Result<()> {
        self.planner.view_semester(args.number)?;
        self.planner.edit_semester()?;
        self.renderer
            .render(&format!("# Editing semester {}\n\n", args.number))?;

        for code in &args.remove {
            match self.planner.remove_course(&code.to_uppercase()) {
                Ok(()) => debug!("Removed {code} from the selection"),
                Err(err) => {
                    let status = OperationStatus::failure(err.to_string());
                    self.renderer.render(&status.to_string())?;
                }
            }
        }
        self.add_courses(&args.add).await?;
        if let Some(status) = args.status {
            self.planner.set_status(status.into())?;
        }
        self.assign_grades(&args.grades)?;
        self.save_session(args.save_request()).await
    }

    /// Look up each code in the catalog and attempt the addition, rendering
    /// the outcome for every course.
    async fn add_courses(&mut self, codes: &[String]) -> Result<()> {
        for code in codes {
            let Some(course) = self.planner.lookup_course(code).await? else {
                let status =
                    OperationStatus::failure(format!("'{code}' is not in the course catalog"));
                self.renderer.render(&status.to_string())?;
                continue;
            };
            let outcome = self.planner.add_course(course)?;
            self.renderer.render(&format!("{outcome}\n"))?;
        }
        Ok(())
    }

    fn assign_grades(&mut self, pairs: &[String]) -> Result<()> {
        for pair in pairs {
            let assignment = GradeAssignment::parse(pair)?;
            self.planner
                .set_grade(&assignment.course_code, &assignment.grade)?;
        }
        Ok(())
    }

    /// Render the final selection and attempt the save.
    async fn save_session(&mut self, request: SaveRequest) -> Result<()> {
        let selection = SelectionView(self.planner.session().selection()).to_string();
        self.renderer.render(&selection)?;

        let outcome = self.planner.save(request.override_policy).await?;
        self.renderer.render(&format!("\n{outcome}\n"))
    }

    async fn list_catalog(&self, args: &CatalogListArgs) -> Result<()> {
        let pool = self.planner.course_pool(args.category.into()).await?;
        if pool.is_empty() {
            return self.renderer.render("No courses available.\n");
        }
        let mut markdown = String::from("# Course Catalog\n\n");
        for course in &pool {
            markdown.push_str(&format!("- {course}\n"));
        }
        self.renderer.render(&markdown)
    }

    fn list_credits(&self) -> Result<()> {
        let mut entries: Vec<(&String, &u32)> = self.planner.credit_map().iter().collect();
        entries.sort_by_key(|(code, _)| code.as_str());
        if entries.is_empty() {
            return self.renderer.render("No credit-hour data available.\n");
        }
        let mut markdown = String::from("# Credit Hours\n\n");
        for (code, hours) in entries {
            markdown.push_str(&format!("- **{code}**: {hours} credit hours\n"));
        }
        self.renderer.render(&markdown)
    }

    pub async fn generate_report(self, args: ReportArgs) -> Result<()> {
        match args.out {
            Some(path) => {
                let renderer = FileReportRenderer::new(path.clone());
                self.planner.generate_report(&renderer).await?;
                let status =
                    OperationStatus::success(format!("Report written to {}", path.display()));
                self.renderer.render(&status.to_string())
            }
            None => {
                let renderer = MarkdownReportRenderer::new(&self.renderer);
                self.planner.generate_report(&renderer).await?;
                Ok(())
            }
        }
    }
}
