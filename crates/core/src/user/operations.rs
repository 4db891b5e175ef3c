//! The five user operations.
//!
//! Each operation takes the store explicitly and issues at most two store
//! calls. Store failure detail is logged here and collapsed into the fixed
//! [`UserError`] taxonomy.

use crate::storage::{StoreError, UserStore};

use super::codec::{decode_body, record_to_user, user_to_record};
use super::validation::is_valid_email;
use super::{User, UserError};

/// Fetches the user stored under `email`.
///
/// A missing key yields the zero-value [`User`], not an error.
pub async fn fetch_user(store: &dyn UserStore, email: &str) -> Result<User, UserError> {
    let record = store.get_item(email).await.map_err(|e| {
        tracing::error!(error = %e, email = %email, "GetItem failed");
        UserError::FetchFailed
    })?;

    match record {
        Some(record) => record_to_user(record).map_err(|e| {
            tracing::error!(error = %e, email = %email, "Stored user could not be decoded");
            UserError::FetchFailed
        }),
        None => Ok(User::default()),
    }
}

/// Fetches every stored user in store order.
pub async fn fetch_users(store: &dyn UserStore) -> Result<Vec<User>, UserError> {
    let records = store.scan().await.map_err(|e| {
        tracing::error!(error = %e, "Scan failed");
        UserError::FetchFailed
    })?;

    records
        .into_iter()
        .map(|record| {
            record_to_user(record).map_err(|e| {
                tracing::error!(error = %e, "Scanned user could not be decoded");
                UserError::FetchFailed
            })
        })
        .collect()
}

/// Creates a user from a JSON request body.
pub async fn create_user(store: &dyn UserStore, body: &[u8]) -> Result<User, UserError> {
    let user = decode_body(body).map_err(|e| {
        tracing::warn!(error = %e, "Rejected create: body is not a user");
        UserError::InvalidData
    })?;

    if !is_valid_email(&user.email) {
        tracing::warn!(email = %user.email, "Rejected create: invalid email");
        return Err(UserError::InvalidEmail);
    }

    if !fetch_user(store, &user.email).await?.is_empty() {
        tracing::warn!(email = %user.email, "Rejected create: user already exists");
        return Err(UserError::AlreadyExists);
    }

    let record = user_to_record(&user).map_err(|e| {
        tracing::error!(error = %e, email = %user.email, "User could not be encoded");
        UserError::MarshalFailed
    })?;

    // The read above only reports the common duplicate; the conditional put
    // is what keeps two concurrent creators from both succeeding.
    match store.put_item_if_absent(record).await {
        Ok(()) => {}
        Err(StoreError::ConditionFailed { .. }) => {
            tracing::warn!(email = %user.email, "Rejected create: lost race to concurrent create");
            return Err(UserError::AlreadyExists);
        }
        Err(e) => {
            tracing::error!(error = %e, email = %user.email, "PutItem failed");
            return Err(UserError::WriteFailed);
        }
    }

    tracing::info!(email = %user.email, "Created user");
    Ok(user)
}

/// Replaces an existing user with the JSON request body.
pub async fn update_user(store: &dyn UserStore, body: &[u8]) -> Result<User, UserError> {
    let user = decode_body(body).map_err(|e| {
        tracing::warn!(error = %e, "Rejected update: body is not a user");
        UserError::InvalidData
    })?;

    // The empty key is never stored.
    if user.email.is_empty() || fetch_user(store, &user.email).await?.is_empty() {
        tracing::warn!(email = %user.email, "Rejected update: user does not exist");
        return Err(UserError::DoesNotExist);
    }

    let record = user_to_record(&user).map_err(|e| {
        tracing::error!(error = %e, email = %user.email, "User could not be encoded");
        UserError::MarshalFailed
    })?;

    store.put_item(record).await.map_err(|e| {
        tracing::error!(error = %e, email = %user.email, "PutItem failed");
        UserError::WriteFailed
    })?;

    tracing::info!(email = %user.email, "Updated user");
    Ok(user)
}

/// Deletes the user stored under `email`. Missing keys are not an error.
pub async fn delete_user(store: &dyn UserStore, email: &str) -> Result<(), UserError> {
    store.delete_item(email).await.map_err(|e| {
        tracing::error!(error = %e, email = %email, "DeleteItem failed");
        UserError::DeleteFailed
    })?;

    tracing::info!(email = %email, "Deleted user");
    Ok(())
}
