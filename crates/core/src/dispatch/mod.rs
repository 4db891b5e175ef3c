//! Request dispatch.
//!
//! Routes a request to a user operation by method and shapes the outcome into
//! a [`UserResponse`]. Dispatch does no validation of its own.

mod response;
mod route;

use std::collections::HashMap;

pub use response::{UserResponse, METHOD_NOT_ALLOWED};
pub use route::{route, Route};

use crate::storage::UserStore;
use crate::user::{create_user, delete_user, fetch_user, fetch_users, update_user};

/// An inbound request, independent of the transport that delivered it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRequest {
    pub method: String,
    pub query: HashMap<String, String>,
    /// Raw body bytes; decoding is left to the operation.
    pub body: Vec<u8>,
}

impl UserRequest {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Self::default()
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }
}

/// Runs `request` against `store` and returns the response to send back.
pub async fn dispatch(store: &dyn UserStore, request: &UserRequest) -> UserResponse {
    let route = route(&request.method, &request.query);
    tracing::debug!(method = %request.method, route = ?route, "Dispatching request");

    let result = match route {
        Route::FetchOne { email } => fetch_user(store, &email)
            .await
            .map(|user| UserResponse::json(200, &user)),
        Route::FetchAll => fetch_users(store)
            .await
            .map(|users| UserResponse::json(200, &users)),
        Route::Create => create_user(store, &request.body)
            .await
            .map(|user| UserResponse::json(201, &user)),
        Route::Update => update_user(store, &request.body)
            .await
            .map(|user| UserResponse::json(200, &user)),
        Route::Delete { email } => delete_user(store, &email)
            .await
            .map(|()| UserResponse::empty(200)),
        Route::MethodNotAllowed => {
            tracing::warn!(method = %request.method, "Method not allowed");
            return UserResponse::method_not_allowed();
        }
    };

    result.unwrap_or_else(|e| UserResponse::error(&e))
}
