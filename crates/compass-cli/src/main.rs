//! Compass CLI Application
//!
//! Command-line interface for the Compass semester planning tool.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use compass_core::PlannerBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        base_url,
        student,
        no_color,
        command,
    } = Args::parse();

    let student =
        student.context("A student id is required (--student or COMPASS_STUDENT_ID)")?;

    let planner = PlannerBuilder::new()
        .with_base_url(base_url)
        .with_student_id(student)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Compass started");

    match command {
        Some(Semester { command }) => {
            Cli::new(planner, renderer)
                .handle_semester_command(command)
                .await
        }
        Some(Plan { command }) => {
            Cli::new(planner, renderer)
                .handle_plan_command(command)
                .await
        }
        Some(Catalog { command }) => {
            Cli::new(planner, renderer)
                .handle_catalog_command(command)
                .await
        }
        Some(Report(args)) => Cli::new(planner, renderer).generate_report(args).await,
        None => Cli::new(planner, renderer).list_semesters(),
    }
}
