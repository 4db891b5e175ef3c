//! Mapping between the wire [`User`] and the stored record.
//!
//! Stored attribute names are `email`, `firstName` and `lastName`. Missing
//! attributes decode as empty strings.

use serde::{Deserialize, Serialize};

use crate::storage::Record;

use super::User;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StoredUser {
    email: String,
    first_name: String,
    last_name: String,
}

impl From<&User> for StoredUser {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

impl From<StoredUser> for User {
    fn from(stored: StoredUser) -> Self {
        Self {
            email: stored.email,
            first_name: stored.first_name,
            last_name: stored.last_name,
        }
    }
}

/// Parses a raw request body into a [`User`].
///
/// Bodies that are not UTF-8 fail like any other malformed JSON.
pub fn decode_body(body: &[u8]) -> Result<User, serde_json::Error> {
    serde_json::from_slice(body)
}

/// Encodes a [`User`] into a store record.
pub fn user_to_record(user: &User) -> Result<Record, serde_json::Error> {
    match serde_json::to_value(StoredUser::from(user))? {
        serde_json::Value::Object(record) => Ok(record),
        other => Err(<serde_json::Error as serde::ser::Error>::custom(format!(
            "expected an object, got {other}"
        ))),
    }
}

/// Decodes a store record into a [`User`].
pub fn record_to_user(record: Record) -> Result<User, serde_json::Error> {
    serde_json::from_value::<StoredUser>(serde_json::Value::Object(record)).map(User::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_user() -> User {
        User::new("jane@example.com", "Jane", "Doe")
    }

    #[test]
    fn test_user_to_record_uses_stored_names() {
        let record = user_to_record(&sample_user()).unwrap();

        assert_eq!(
            serde_json::Value::Object(record),
            json!({
                "email": "jane@example.com",
                "firstName": "Jane",
                "lastName": "Doe",
            })
        );
    }

    #[test]
    fn test_record_to_user() {
        let record = json!({
            "email": "jane@example.com",
            "firstName": "Jane",
            "lastName": "Doe",
        });

        let user = record_to_user(record.as_object().unwrap().clone()).unwrap();

        assert_eq!(user, sample_user());
    }

    #[test]
    fn test_record_to_user_tolerates_missing_attributes() {
        let record = json!({"email": "jane@example.com"});

        let user = record_to_user(record.as_object().unwrap().clone()).unwrap();

        assert_eq!(user, User::new("jane@example.com", "", ""));
    }

    #[test]
    fn test_record_to_user_ignores_unknown_attributes() {
        let record = json!({"email": "jane@example.com", "createdAt": "2024-01-15"});

        let user = record_to_user(record.as_object().unwrap().clone()).unwrap();

        assert_eq!(user.email, "jane@example.com");
    }

    #[test]
    fn test_record_to_user_rejects_wrong_types() {
        let record = json!({"email": "jane@example.com", "firstName": 7});

        assert!(record_to_user(record.as_object().unwrap().clone()).is_err());
    }

    #[test]
    fn test_decode_body_rejects_malformed_json() {
        assert!(decode_body(b"{\"email\": ").is_err());
        assert!(decode_body(b"[]").is_err());
        assert!(decode_body(b"").is_err());
    }

    #[test]
    fn test_decode_body_rejects_invalid_utf8() {
        assert!(decode_body(&[b'{', 0xFF, 0xFE, b'}']).is_err());
        assert!(decode_body(b"{\"email\":\"jane@example.com\xFF\"}").is_err());
    }

    #[test]
    fn test_decode_body_reads_wire_names() {
        let user =
            decode_body(br#"{"email":"jane@example.com","firstname":"Jane","lastname":"Doe"}"#)
                .unwrap();

        assert_eq!(user, sample_user());
    }
}
