//! Output formatting for CLI results.
//!
//! `--format json` prints compact JSON suited to piping into other tools;
//! `--format pretty` uses the human-readable renderers in [`pretty`].

pub mod json;
pub mod pretty;

use projectapi_core::project::Project;

use crate::cli::OutputFormat;

/// Render a single project in the requested format.
pub fn format_project(project: &Project, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(project),
        OutputFormat::Pretty => pretty::format_project(project),
    }
}

/// Render a list of projects in the requested format.
pub fn format_projects(projects: &[Project], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(&projects),
        OutputFormat::Pretty => pretty::format_projects(projects),
    }
}
