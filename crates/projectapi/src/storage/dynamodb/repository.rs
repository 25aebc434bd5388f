//! DynamoDB repository implementation.
//!
//! Implements the repository trait from `projectapi_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValuesOnConditionCheckFailure};
use aws_sdk_dynamodb::Client;

use projectapi_core::project::{ProjectRow, PROJECT_PARTITION_KEY};
use projectapi_core::storage::{ProjectRepository, RepositoryError, Result};

use super::conversions::{item_to_row, row_to_item};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error, PutCondition,
};
use super::keys::{self, PK, VERSION};

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from a connection string and table name.
    ///
    /// The connection string, when present, overrides the DynamoDB endpoint
    /// (e.g. a local DynamoDB). Credentials and region come from the AWS SDK
    /// default chain.
    pub async fn connect(connection_string: Option<&str>, table_name: &str) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(endpoint) = connection_string {
            loader = loader.endpoint_url(endpoint);
        }
        let config = loader.load().await;

        tracing::info!(
            table = %table_name,
            endpoint = connection_string.unwrap_or("default"),
            "Connecting to DynamoDB"
        );

        Self::new(Client::new(&config), table_name)
    }
}

#[async_trait]
impl ProjectRepository for DynamoDbRepository {
    async fn get_project(&self, id: &str) -> Result<Option<ProjectRow>> {
        if !keys::is_valid_row_key(id) {
            tracing::debug!(id_len = id.len(), "Project ID cannot be a sort key, treating as absent");
            return Ok(None);
        }

        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::project_key(id)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_row(&item)?)),
            None => Ok(None),
        }
    }

    async fn list_projects(&self) -> Result<Vec<ProjectRow>> {
        let mut rows = Vec::new();
        let mut start_key = None;
        let mut pages = 0usize;

        loop {
            let result = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("#pk = :pk")
                .expression_attribute_names("#pk", PK)
                .expression_attribute_values(
                    ":pk",
                    AttributeValue::S(PROJECT_PARTITION_KEY.to_string()),
                )
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_query_error)?;

            pages += 1;
            for item in result.items.unwrap_or_default() {
                rows.push(item_to_row(&item)?);
            }

            start_key = keys::next_start_key(result.last_evaluated_key);
            if start_key.is_none() {
                break;
            }
        }

        tracing::debug!(count = rows.len(), pages, "Listed project partition");

        Ok(rows)
    }

    async fn create_project(&self, row: &ProjectRow) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(row_to_item(row)))
            .condition_expression("attribute_not_exists(#pk)")
            .expression_attribute_names("#pk", PK)
            .send()
            .await
            .map_err(|e| map_put_item_error(e, PutCondition::MustNotExist, row.row_key.clone()))?;

        Ok(())
    }

    async fn replace_project(&self, row: &ProjectRow) -> Result<ProjectRow> {
        let persisted = row.clone().with_version(row.version + 1);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(row_to_item(&persisted)))
            .condition_expression("attribute_exists(#pk) AND #version = :expected")
            .expression_attribute_names("#pk", PK)
            .expression_attribute_names("#version", VERSION)
            .expression_attribute_values(":expected", AttributeValue::N(row.version.to_string()))
            // Lets the error mapping tell a stale version from a deleted row.
            .return_values_on_condition_check_failure(ReturnValuesOnConditionCheckFailure::AllOld)
            .send()
            .await
            .map_err(|e| {
                map_put_item_error(e, PutCondition::MatchesVersion, row.row_key.clone())
            })?;

        Ok(persisted)
    }

    async fn delete_project(&self, id: &str) -> Result<()> {
        if !keys::is_valid_row_key(id) {
            return Err(RepositoryError::project_not_found(id));
        }

        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::project_key(id)))
            .condition_expression("attribute_exists(#pk)")
            .expression_attribute_names("#pk", PK)
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, id))?;

        Ok(())
    }
}
