//! DynamoDB `UserStore` implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use usertable_core::storage::{record_key, Record, Result, UserStore, KEY_ATTRIBUTE};

use super::conversions::{item_to_record, record_to_item};
use super::error::{map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error};
use crate::config::Config;

/// DynamoDB-backed user table.
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new store from application configuration.
    ///
    /// Uses the AWS SDK default credential chain. `aws_region` and
    /// `aws_endpoint_url` override what the chain would pick.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = &config.aws_region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &config.aws_endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let sdk_config = loader.load().await;

        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl UserStore for DynamoDbStore {
    async fn get_item(&self, email: &str) -> Result<Option<Record>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, AttributeValue::S(email.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_record(&item)?)),
            None => Ok(None),
        }
    }

    async fn scan(&self) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        let mut start_key = None;

        // A single Scan stops at 1 MB; follow LastEvaluatedKey to the end.
        loop {
            let result = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_scan_error)?;

            for item in result.items.unwrap_or_default() {
                records.push(item_to_record(&item)?);
            }

            start_key = result.last_evaluated_key;
            if start_key.is_none() {
                break;
            }
        }

        Ok(records)
    }

    async fn put_item(&self, record: Record) -> Result<()> {
        let key = record_key(&record)?.to_string();

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record_to_item(record)))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, key))?;

        Ok(())
    }

    async fn put_item_if_absent(&self, record: Record) -> Result<()> {
        let key = record_key(&record)?.to_string();

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record_to_item(record)))
            .condition_expression(format!("attribute_not_exists({KEY_ATTRIBUTE})"))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, key))?;

        Ok(())
    }

    async fn delete_item(&self, email: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, AttributeValue::S(email.to_string()))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
