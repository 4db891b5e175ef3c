//! Conversions between store records and DynamoDB items.
//!
//! Pure functions with no side effects. JSON strings map to `S`, numbers to
//! `N`, booleans to `BOOL`, null to `NULL`, arrays to `L` and objects to `M`.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Number, Value};

use usertable_core::storage::{Record, StoreError};

/// Convert a record to a DynamoDB item.
pub fn record_to_item(record: Record) -> HashMap<String, AttributeValue> {
    record
        .into_iter()
        .map(|(name, value)| (name, value_to_attribute(value)))
        .collect()
}

/// Convert a DynamoDB item to a record.
pub fn item_to_record(item: &HashMap<String, AttributeValue>) -> Result<Record, StoreError> {
    item.iter()
        .map(|(name, attribute)| {
            attribute_to_value(name, attribute).map(|value| (name.clone(), value))
        })
        .collect()
}

fn value_to_attribute(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(values) => {
            AttributeValue::L(values.into_iter().map(value_to_attribute).collect())
        }
        Value::Object(map) => AttributeValue::M(record_to_item(map)),
    }
}

fn attribute_to_value(name: &str, attribute: &AttributeValue) -> Result<Value, StoreError> {
    match attribute {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => serde_json::from_str::<Number>(n)
            .map(Value::Number)
            .map_err(|e| StoreError::InvalidItem(format!("Invalid number {}: {}", name, e))),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(values) => values
            .iter()
            .map(|v| attribute_to_value(name, v))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => item_to_record(map).map(Value::Object),
        other => Err(StoreError::InvalidItem(format!(
            "Unsupported attribute type for {}: {:?}",
            name, other
        ))),
    }
}
