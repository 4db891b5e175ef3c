//! Shaping operation results into status codes and JSON bodies.

use serde::Serialize;

use crate::user::{user_error_to_status_code, UserError};

/// Body returned for unrecognized methods.
pub const METHOD_NOT_ALLOWED: &str = "method not allowed";

/// A status code and the serialized body to send with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl UserResponse {
    /// Serializes `value` as the body of a response with the given status.
    pub fn json<T: Serialize + ?Sized>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self { status, body },
            Err(e) => {
                tracing::error!(error = %e, "Response body could not be encoded");
                Self::error(&UserError::MarshalFailed)
            }
        }
    }

    /// A response with no body.
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }

    /// The `{"error": ...}` response for a failed operation.
    pub fn error(error: &UserError) -> Self {
        let message = error.to_string();
        let body = ErrorBody {
            error: Some(message.as_str()).filter(|m| !m.is_empty()),
        };

        Self {
            status: user_error_to_status_code(error),
            // A struct holding one optional string always encodes.
            body: serde_json::to_string(&body).unwrap_or_default(),
        }
    }

    /// The fixed 405 response.
    pub fn method_not_allowed() -> Self {
        Self::json(405, METHOD_NOT_ALLOWED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let response = UserResponse::error(&UserError::DoesNotExist);

        assert_eq!(response.status, 400);
        assert_eq!(response.body, r#"{"error":"user does not exist"}"#);
    }

    #[test]
    fn test_empty_error_message_is_omitted() {
        let body = ErrorBody { error: None };

        assert_eq!(serde_json::to_string(&body).unwrap(), "{}");
    }

    #[test]
    fn test_method_not_allowed_body() {
        let response = UserResponse::method_not_allowed();

        assert_eq!(response.status, 405);
        assert_eq!(response.body, "\"method not allowed\"");
    }

    #[test]
    fn test_empty_response() {
        assert_eq!(
            UserResponse::empty(200),
            UserResponse {
                status: 200,
                body: String::new()
            }
        );
    }
}
