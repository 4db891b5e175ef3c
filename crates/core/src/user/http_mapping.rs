//! Pure functions for mapping user operation errors to HTTP status codes.

use super::UserError;

/// Maps a [`UserError`] to an HTTP status code.
///
/// Every operation failure is reported as a client error (400), including
/// store failures. Callers tell them apart by message only.
///
/// # Examples
///
/// ```
/// use usertable_core::user::{UserError, user_error_to_status_code};
///
/// assert_eq!(user_error_to_status_code(&UserError::AlreadyExists), 400);
/// ```
pub fn user_error_to_status_code(error: &UserError) -> u16 {
    match error {
        UserError::InvalidData
        | UserError::InvalidEmail
        | UserError::FetchFailed
        | UserError::MarshalFailed
        | UserError::WriteFailed
        | UserError::DeleteFailed
        | UserError::AlreadyExists
        | UserError::DoesNotExist => 400,
    }
}
