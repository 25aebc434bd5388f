//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and project rows.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use projectapi_core::project::ProjectRow;
use projectapi_core::storage::RepositoryError;

use super::keys::{PK, SK, VERSION};

/// Convert a ProjectRow to DynamoDB item.
pub fn row_to_item(row: &ProjectRow) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert(PK.to_string(), AttributeValue::S(row.partition_key.clone()));
    item.insert(SK.to_string(), AttributeValue::S(row.row_key.clone()));

    // Data
    item.insert(
        "consultantId".to_string(),
        AttributeValue::S(row.consultant_id.clone()),
    );
    item.insert(
        "clientId".to_string(),
        AttributeValue::S(row.client_id.clone()),
    );
    item.insert("name".to_string(), AttributeValue::S(row.name.clone()));
    item.insert(
        "description".to_string(),
        AttributeValue::S(row.description.clone()),
    );
    item.insert(
        "startDate".to_string(),
        AttributeValue::S(row.start_date.to_rfc3339()),
    );
    item.insert(
        "endDate".to_string(),
        AttributeValue::S(row.end_date.to_rfc3339()),
    );
    item.insert(
        VERSION.to_string(),
        AttributeValue::N(row.version.to_string()),
    );

    item
}

/// Convert a DynamoDB item to ProjectRow.
pub fn item_to_row(item: &HashMap<String, AttributeValue>) -> Result<ProjectRow, RepositoryError> {
    Ok(ProjectRow {
        partition_key: get_string(item, PK)?,
        row_key: get_string(item, SK)?,
        consultant_id: get_string_or_empty(item, "consultantId"),
        client_id: get_string_or_empty(item, "clientId"),
        name: get_string_or_empty(item, "name"),
        description: get_string_or_empty(item, "description"),
        start_date: get_datetime(item, "startDate")?,
        end_date: get_datetime(item, "endDate")?,
        version: get_u64(item, VERSION)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a string attribute, defaulting to empty when absent.
fn get_string_or_empty(item: &HashMap<String, AttributeValue>, key: &str) -> String {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .unwrap_or_default()
}

/// Get a required numeric attribute.
fn get_u64(item: &HashMap<String, AttributeValue>, key: &str) -> Result<u64, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))?
        .parse()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e)))
}

/// Get a required datetime attribute (RFC 3339 format).
fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use projectapi_core::project::Project;

    fn sample_row() -> ProjectRow {
        let project = Project {
            id: "0f8fad5bd9cb469fa16570867728950e".to_string(),
            consultant_id: "c1".to_string(),
            client_id: "k1".to_string(),
            name: "Alpha".to_string(),
            description: "First engagement".to_string(),
            start_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        };
        ProjectRow::from_project(&project).with_version(3)
    }

    #[test]
    fn test_row_round_trip() {
        let row = sample_row();
        let item = row_to_item(&row);
        let parsed = item_to_row(&item).unwrap();

        assert_eq!(parsed, row);
    }

    #[test]
    fn test_item_has_correct_keys() {
        let item = row_to_item(&sample_row());

        assert_eq!(item.get("PK").unwrap().as_s().unwrap(), "PROJECT");
        assert_eq!(
            item.get("SK").unwrap().as_s().unwrap(),
            "0f8fad5bd9cb469fa16570867728950e"
        );
        assert_eq!(item.get("version").unwrap().as_n().unwrap(), "3");
        assert_eq!(
            item.get("startDate").unwrap().as_s().unwrap(),
            "2024-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn test_missing_optional_text_defaults_to_empty() {
        let mut item = row_to_item(&sample_row());
        item.remove("description");

        let parsed = item_to_row(&item).unwrap();
        assert_eq!(parsed.description, "");
    }

    #[test]
    fn test_missing_key_is_invalid_data() {
        let mut item = row_to_item(&sample_row());
        item.remove("SK");

        assert!(matches!(
            item_to_row(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_bad_version_is_invalid_data() {
        let mut item = row_to_item(&sample_row());
        item.insert("version".to_string(), AttributeValue::N("x".to_string()));

        assert!(matches!(
            item_to_row(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_get_string_missing_field() {
        let item = HashMap::new();
        assert!(get_string(&item, "missing").is_err());
    }
}
