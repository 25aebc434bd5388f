use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde::deserialize_datetime;

/// Mints a fresh project identifier.
///
/// A random 128-bit UUID rendered as 32 lowercase hex digits, no hyphens.
pub fn new_project_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// A consulting project.
///
/// `consultant_id` and `client_id` reference aggregates owned by other
/// services and are never interpreted here. No ordering between
/// `start_date` and `end_date` is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "ID", alias = "id")]
    pub id: String,
    #[serde(
        rename = "ConsultantID",
        alias = "consultantId",
        alias = "consultantID"
    )]
    pub consultant_id: String,
    #[serde(rename = "ClientID", alias = "clientId", alias = "clientID")]
    pub client_id: String,
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    #[serde(rename = "Description", alias = "description")]
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

impl Project {
    /// Creates a new project with a freshly minted ID.
    pub fn new(
        consultant_id: impl Into<String>,
        client_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: new_project_id(),
            consultant_id: consultant_id.into(),
            client_id: client_id.into(),
            name: name.into(),
            description: description.into(),
            start_date,
            end_date,
        }
    }

    /// Sets a specific ID for this project (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}
