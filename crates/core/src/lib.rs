//! Functional core for the usertable service.
//!
//! - [`user`]: the `User` type, validation, the error taxonomy and the five operations.
//! - [`storage`]: the `UserStore` trait the operations run against.
//! - [`dispatch`]: method routing and response shaping.

pub mod dispatch;
pub mod storage;
pub mod user;
