//! Mapping between [`Project`] and its stored row.
//!
//! Every project lives in the single `PROJECT` partition and is keyed by its
//! ID. The row carries a `version` used as the concurrency token for
//! conditional replaces.

use chrono::{DateTime, Utc};

use super::types::Project;

/// Partition key shared by every project row.
pub const PROJECT_PARTITION_KEY: &str = "PROJECT";

/// Version assigned to a freshly inserted row.
pub const INITIAL_VERSION: u64 = 1;

/// The stored representation of a [`Project`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRow {
    pub partition_key: String,
    /// Equal to the project ID.
    pub row_key: String,
    pub consultant_id: String,
    pub client_id: String,
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub version: u64,
}

impl ProjectRow {
    /// Maps a project to a new row in the project partition.
    pub fn from_project(project: &Project) -> Self {
        Self {
            partition_key: PROJECT_PARTITION_KEY.to_string(),
            row_key: project.id.clone(),
            consultant_id: project.consultant_id.clone(),
            client_id: project.client_id.clone(),
            name: project.name.clone(),
            description: project.description.clone(),
            start_date: project.start_date,
            end_date: project.end_date,
            version: INITIAL_VERSION,
        }
    }

    /// Carries an existing concurrency token onto this row.
    pub fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    /// Recovers the project, taking the ID from the row key.
    pub fn into_project(self) -> Project {
        Project {
            id: self.row_key,
            consultant_id: self.consultant_id,
            client_id: self.client_id,
            name: self.name,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    /// Borrowing variant of [`ProjectRow::into_project`].
    pub fn to_project(&self) -> Project {
        self.clone().into_project()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_project() -> Project {
        Project::new(
            "c1",
            "k1",
            "Alpha",
            "First engagement",
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_round_trip() {
        let project = sample_project();
        let row = ProjectRow::from_project(&project);
        assert_eq!(row.into_project(), project);
    }

    #[test]
    fn test_round_trip_with_empty_fields_and_reversed_dates() {
        let project = Project::new(
            "",
            "",
            "",
            "",
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        );
        let row = ProjectRow::from_project(&project);
        assert_eq!(row.to_project(), project);
    }

    #[test]
    fn test_row_keys() {
        let project = sample_project().with_id("abc123");
        let row = ProjectRow::from_project(&project);

        assert_eq!(row.partition_key, "PROJECT");
        assert_eq!(row.row_key, "abc123");
        assert_eq!(row.version, INITIAL_VERSION);
    }

    #[test]
    fn test_with_version_keeps_fields() {
        let project = sample_project();
        let row = ProjectRow::from_project(&project).with_version(7);

        assert_eq!(row.version, 7);
        assert_eq!(row.into_project(), project);
    }
}
