//! DynamoDB key attributes for the project table.
//!
//! Pure functions; no side effects.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use projectapi_core::project::PROJECT_PARTITION_KEY;

/// Partition key attribute name.
pub const PK: &str = "PK";
/// Sort key attribute name.
pub const SK: &str = "SK";
/// Concurrency token attribute name.
pub const VERSION: &str = "version";

/// Largest sort key value DynamoDB accepts, in bytes.
pub const MAX_SORT_KEY_BYTES: usize = 1024;

/// Whether `id` can be stored as a sort key at all.
///
/// Callers treat IDs failing this check as absent.
pub fn is_valid_row_key(id: &str) -> bool {
    !id.is_empty() && id.len() <= MAX_SORT_KEY_BYTES
}

/// Decide whether a query should fetch another page.
///
/// DynamoDB signals the last page by omitting `LastEvaluatedKey`; an empty
/// map is treated the same way.
pub fn next_start_key(
    last_evaluated_key: Option<HashMap<String, AttributeValue>>,
) -> Option<HashMap<String, AttributeValue>> {
    last_evaluated_key.filter(|key| !key.is_empty())
}

/// Generate the primary key map for a project.
///
/// Pattern: `PK = PROJECT`, `SK = <project_id>`
pub fn project_key(project_id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            PK.to_string(),
            AttributeValue::S(PROJECT_PARTITION_KEY.to_string()),
        ),
        (SK.to_string(), AttributeValue::S(project_id.to_string())),
    ])
}
