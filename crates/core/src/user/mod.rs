mod codec;
mod error;
mod http_mapping;
mod operations;
mod types;
mod validation;

pub use codec::{decode_body, record_to_user, user_to_record};
pub use error::UserError;
pub use http_mapping::user_error_to_status_code;
pub use operations::{create_user, delete_user, fetch_user, fetch_users, update_user};
pub use types::User;
pub use validation::is_valid_email;
