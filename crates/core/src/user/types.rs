use serde::{Deserialize, Serialize};

/// A user record as it travels over the wire.
///
/// `email` is the table key and must be present in request bodies. Name
/// fields default to empty strings when omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(default, rename = "firstname")]
    pub first_name: String,
    #[serde(default, rename = "lastname")]
    pub last_name: String,
}

impl User {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// True for the zero-value record returned when a key is not stored.
    pub fn is_empty(&self) -> bool {
        self.email.is_empty()
    }
}
