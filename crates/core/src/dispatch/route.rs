use std::collections::HashMap;

/// The operation a request resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    FetchOne { email: String },
    FetchAll,
    Create,
    Update,
    Delete { email: String },
    MethodNotAllowed,
}

/// Resolves a method and its query parameters to a [`Route`].
///
/// `GET` with a non-empty `email` parameter fetches one user, otherwise all.
/// `DELETE` without an `email` parameter targets the empty key.
pub fn route(method: &str, query: &HashMap<String, String>) -> Route {
    let email = query.get("email").map(String::as_str).unwrap_or_default();

    match method {
        "GET" if !email.is_empty() => Route::FetchOne {
            email: email.to_string(),
        },
        "GET" => Route::FetchAll,
        "POST" => Route::Create,
        "PUT" => Route::Update,
        "DELETE" => Route::Delete {
            email: email.to_string(),
        },
        _ => Route::MethodNotAllowed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_get_with_email_fetches_one() {
        assert_eq!(
            route("GET", &query(&[("email", "jane@example.com")])),
            Route::FetchOne {
                email: "jane@example.com".to_string()
            }
        );
    }

    #[test]
    fn test_get_without_email_fetches_all() {
        assert_eq!(route("GET", &query(&[])), Route::FetchAll);
    }

    #[test]
    fn test_get_with_empty_email_fetches_all() {
        assert_eq!(route("GET", &query(&[("email", "")])), Route::FetchAll);
    }

    #[test]
    fn test_get_ignores_other_parameters() {
        assert_eq!(route("GET", &query(&[("name", "jane")])), Route::FetchAll);
    }

    #[test]
    fn test_post_creates() {
        assert_eq!(route("POST", &query(&[])), Route::Create);
    }

    #[test]
    fn test_put_updates() {
        assert_eq!(
            route("PUT", &query(&[("email", "ignored@example.com")])),
            Route::Update
        );
    }

    #[test]
    fn test_delete_uses_email_parameter() {
        assert_eq!(
            route("DELETE", &query(&[("email", "jane@example.com")])),
            Route::Delete {
                email: "jane@example.com".to_string()
            }
        );
    }

    #[test]
    fn test_delete_without_email_targets_empty_key() {
        assert_eq!(
            route("DELETE", &query(&[])),
            Route::Delete {
                email: String::new()
            }
        );
    }

    #[test]
    fn test_other_methods_not_allowed() {
        for method in ["PATCH", "HEAD", "OPTIONS", "get", ""] {
            assert_eq!(route(method, &query(&[])), Route::MethodNotAllowed);
        }
    }
}
