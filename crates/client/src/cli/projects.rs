//! Project CLI commands.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use projectapi_core::serde::parse_datetime;

/// Project management commands.
#[derive(Debug, Parser)]
pub struct ProjectsCommand {
    #[command(subcommand)]
    pub action: ProjectsAction,
}

/// Available project actions.
#[derive(Debug, Subcommand)]
pub enum ProjectsAction {
    /// List all projects.
    List,
    /// Create a new project.
    Create {
        /// Consultant reference.
        #[arg(long)]
        consultant_id: String,
        /// Client reference.
        #[arg(long)]
        client_id: String,
        /// Project name.
        #[arg(long)]
        name: String,
        /// Project description.
        #[arg(long, default_value = "")]
        description: String,
        /// Start date (YYYY-MM-DD or RFC 3339).
        #[arg(long, value_parser = parse_date_arg)]
        start_date: DateTime<Utc>,
        /// End date (YYYY-MM-DD or RFC 3339).
        #[arg(long, value_parser = parse_date_arg)]
        end_date: DateTime<Utc>,
    },
    /// Get project by ID.
    Get {
        /// Project ID.
        id: String,
    },
    /// Update a project. Omitted fields keep their stored value.
    Update {
        /// Project ID.
        id: String,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// New description.
        #[arg(long)]
        description: Option<String>,
        /// New start date.
        #[arg(long, value_parser = parse_date_arg)]
        start_date: Option<DateTime<Utc>>,
        /// New end date.
        #[arg(long, value_parser = parse_date_arg)]
        end_date: Option<DateTime<Utc>>,
    },
    /// Delete project by ID.
    Delete {
        /// Project ID.
        id: String,
    },
}

/// Parse a date argument into a UTC timestamp.
pub fn parse_date_arg(s: &str) -> Result<DateTime<Utc>, String> {
    parse_datetime(s).ok_or_else(|| format!("invalid date '{s}', expected YYYY-MM-DD or RFC 3339"))
}
