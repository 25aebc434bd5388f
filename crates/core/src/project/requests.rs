//! API request types for project operations.
//!
//! These types are shared between the server and client for type-safe API communication.
//! They are pure data types with no I/O.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::Project;
use crate::serde::{
    deserialize_datetime, deserialize_nullable_string, deserialize_optional_datetime,
    deserialize_optional_string,
};

/// Request payload for creating a new project.
///
/// The ID is not part of the payload: the server mints it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    #[serde(
        rename = "ConsultantID",
        alias = "consultantId",
        alias = "consultantID",
        default,
        deserialize_with = "deserialize_nullable_string"
    )]
    pub consultant_id: String,
    #[serde(
        rename = "ClientID",
        alias = "clientId",
        alias = "clientID",
        default,
        deserialize_with = "deserialize_nullable_string"
    )]
    pub client_id: String,
    #[serde(
        rename = "Name",
        alias = "name",
        default,
        deserialize_with = "deserialize_nullable_string"
    )]
    pub name: String,
    #[serde(
        rename = "Description",
        alias = "description",
        default,
        deserialize_with = "deserialize_nullable_string"
    )]
    pub description: String,
    #[serde(
        rename = "StartDate",
        alias = "startDate",
        deserialize_with = "deserialize_datetime"
    )]
    pub start_date: DateTime<Utc>,
    #[serde(
        rename = "EndDate",
        alias = "endDate",
        deserialize_with = "deserialize_datetime"
    )]
    pub end_date: DateTime<Utc>,
}

impl CreateProjectRequest {
    /// Convert into a Project, minting a fresh ID.
    pub fn into_project(self) -> Project {
        Project::new(
            self.consultant_id,
            self.client_id,
            self.name,
            self.description,
            self.start_date,
            self.end_date,
        )
    }
}

/// Request payload for a partial project update.
///
/// Only fields that are present overwrite the stored project. A string
/// field is present when it is neither null nor empty; a date is present
/// when it is not null. Consultant and client references cannot be
/// changed after creation, so they are not part of this payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(
        rename = "Name",
        alias = "name",
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        rename = "Description",
        alias = "description",
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        rename = "StartDate",
        alias = "startDate",
        default,
        deserialize_with = "deserialize_optional_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(
        rename = "EndDate",
        alias = "endDate",
        default,
        deserialize_with = "deserialize_optional_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<DateTime<Utc>>,
}

impl UpdateProjectRequest {
    /// Returns true if applying this update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    /// Applies the present fields to an existing project.
    pub fn apply_to(self, project: &mut Project) {
        if let Some(name) = self.name.filter(|n| !n.is_empty()) {
            project.name = name;
        }
        if let Some(description) = self.description.filter(|d| !d.is_empty()) {
            project.description = description;
        }
        if let Some(start_date) = self.start_date {
            project.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            project.end_date = end_date;
        }
    }
}
