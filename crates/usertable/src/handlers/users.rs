//! The single user endpoint.
//!
//! Translates the HTTP request into a transport-independent
//! [`UserRequest`], runs the dispatcher, and turns its [`UserResponse`]
//! back into HTTP.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
};

use usertable_core::dispatch::{dispatch, UserRequest, UserResponse};

use crate::state::AppState;

/// Any method on `/`.
pub async fn handle_request(
    State(state): State<AppState>,
    method: Method,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    let request = UserRequest {
        method: method.as_str().to_string(),
        query,
        body: body.to_vec(),
    };

    let response = dispatch(state.store.as_ref(), &request).await;

    tracing::debug!(method = %method, status = response.status, "Handled user request");

    into_http(response)
}

fn into_http(response: UserResponse) -> Response {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if response.body.is_empty() {
        return status.into_response();
    }

    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_http_sets_json_content_type() {
        let response = into_http(UserResponse {
            status: 201,
            body: "{}".to_string(),
        });

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_into_http_empty_body_has_no_content_type() {
        let response = into_http(UserResponse::empty(200));

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_into_http_invalid_status_is_500() {
        let response = into_http(UserResponse::empty(42));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
