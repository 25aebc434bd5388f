//! Pretty output formatting.

use projectapi_core::project::Project;

/// Format a project for display.
pub fn format_project(project: &Project) -> String {
    let mut output = format!(
        "{}\n  ID: {}\n  Consultant: {}\n  Client: {}\n  Dates: {} to {}",
        project.name,
        project.id,
        project.consultant_id,
        project.client_id,
        project.start_date.format("%Y-%m-%d"),
        project.end_date.format("%Y-%m-%d"),
    );
    if !project.description.is_empty() {
        output.push_str(&format!("\n  Description: {}", project.description));
    }
    output
}

/// Format projects for display.
pub fn format_projects(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "No projects found.".to_string();
    }
    let mut output = format!("PROJECTS ({})\n", projects.len());
    output.push_str(&"-".repeat(40));
    for project in projects {
        output.push_str(&format!("\n{}", format_project(project)));
        output.push('\n');
    }
    output
}
