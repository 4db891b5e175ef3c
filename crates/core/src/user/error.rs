use thiserror::Error;

/// Failures of a user operation.
///
/// The display strings are the messages returned to callers, so they stay
/// fixed and carry no detail about the underlying cause.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UserError {
    #[error("invalid user data")]
    InvalidData,
    #[error("invalid email")]
    InvalidEmail,
    #[error("failed to fetch record")]
    FetchFailed,
    #[error("could not marshal item")]
    MarshalFailed,
    #[error("could not put item")]
    WriteFailed,
    #[error("could not delete item")]
    DeleteFailed,
    #[error("user already exists")]
    AlreadyExists,
    #[error("user does not exist")]
    DoesNotExist,
}
