//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text, plus the
//! CLI's plain-text implementation of the core report renderer seam.

use std::path::PathBuf;

use anyhow::Result;
use compass_core::{PlannerError, ReportData, ReportRenderer};
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        // Configure termimad skin for better appearance
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Process line by line to show hash symbols for headers
            for line in markdown.lines() {
                if line.starts_with('#') {
                    print!("\x1b[34m{line}\x1b[0m");
                    println!();
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Format the academic report payload as markdown.
fn report_markdown(data: &ReportData) -> String {
    let mut markdown = String::new();
    match &data.student_name {
        Some(name) => {
            markdown.push_str(&format!(
                "# Academic Report: {name} ({})\n\n",
                data.student_id
            ));
        }
        None => {
            markdown.push_str(&format!("# Academic Report: {}\n\n", data.student_id));
        }
    }
    if let Some(gpa) = &data.cumulative_gpa {
        markdown.push_str(&format!("**Cumulative GPA:** {gpa}\n\n"));
    }
    if data.semesters.is_empty() {
        markdown.push_str("No semesters on record.\n");
    }
    for semester in &data.semesters {
        markdown.push_str(&format!("{semester}\n"));
    }
    markdown
}

/// Report renderer that formats the academic report as markdown and prints
/// it through the terminal renderer.
pub struct MarkdownReportRenderer<'a> {
    terminal: &'a TerminalRenderer,
}

impl<'a> MarkdownReportRenderer<'a> {
    pub fn new(terminal: &'a TerminalRenderer) -> Self {
        Self { terminal }
    }
}

impl ReportRenderer for MarkdownReportRenderer<'_> {
    fn render(&self, data: &ReportData) -> compass_core::Result<()> {
        self.terminal
            .render(&report_markdown(data))
            .map_err(|err| PlannerError::Configuration {
                message: format!("Failed to render report output: {err}"),
            })
    }
}

/// Report renderer that writes the markdown report to a file.
pub struct FileReportRenderer {
    path: PathBuf,
}

impl FileReportRenderer {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ReportRenderer for FileReportRenderer {
    fn render(&self, data: &ReportData) -> compass_core::Result<()> {
        std::fs::write(&self.path, report_markdown(data)).map_err(|err| {
            PlannerError::Configuration {
                message: format!("Failed to write report to {}: {err}", self.path.display()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_rich_renderer() {
        let renderer = TerminalRenderer::new(true);
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_report_format_includes_name_and_gpa() {
        let data = ReportData {
            student_id: "20210042".to_string(),
            student_name: Some("Jordan Reed".to_string()),
            semesters: vec![],
            cumulative_gpa: Some("3.42".to_string()),
        };
        let markdown = report_markdown(&data);
        assert!(markdown.contains("# Academic Report: Jordan Reed (20210042)"));
        assert!(markdown.contains("**Cumulative GPA:** 3.42"));
        assert!(markdown.contains("No semesters on record."));
    }
}
