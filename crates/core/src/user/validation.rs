use std::sync::LazyLock;

use regex::Regex;

/// Local part, `@`, then dot-separated DNS labels of up to 63 characters.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern must compile")
});

const MIN_EMAIL_LEN: usize = 3;
const MAX_EMAIL_LEN: usize = 254;

/// Checks that `email` is syntactically a valid address.
///
/// # Examples
///
/// ```
/// use usertable_core::user::is_valid_email;
///
/// assert!(is_valid_email("jane@example.com"));
/// assert!(!is_valid_email("jane.example.com"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    (MIN_EMAIL_LEN..=MAX_EMAIL_LEN).contains(&email.len()) && EMAIL_PATTERN.is_match(email)
}
