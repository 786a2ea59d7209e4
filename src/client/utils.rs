//! Utility functions for the REST client.
//!
//! - URI joining for locator-provided base addresses
//! - Status code classification

use crate::error::Result;

/// Join a base address and an absolute path without doubling the slash.
///
/// Locator entries may or may not end in `/`; the path always starts with one.
///
/// # Examples
///
/// ```
/// use locator_rest_client::client::join_uri;
///
/// assert_eq!(join_uri("http://sdb:8080/", "/sessions/").unwrap(), "http://sdb:8080/sessions/");
/// assert_eq!(join_uri("https://public.example/sdb", "/sessions/").unwrap(), "https://public.example/sdb/sessions/");
/// ```
pub fn join_uri(base: &str, path: &str) -> Result<String> {
    let joined = format!("{}{}", base.trim_end_matches('/'), path);
    url::Url::parse(&joined)?;
    Ok(joined)
}

/// Check if status code is a success (2xx)
pub fn is_success_status(status: u16) -> bool {
    (200..=299).contains(&status)
}

/// Check if status code is a client error (4xx)
pub fn is_client_error_status(status: u16) -> bool {
    (400..=499).contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RestError;

    #[test]
    fn test_join_uri() {
        assert_eq!(
            join_uri("http://internal:8080", "/sessions/").unwrap(),
            "http://internal:8080/sessions/"
        );
        assert_eq!(
            join_uri("http://internal:8080///", "/services").unwrap(),
            "http://internal:8080/services"
        );
    }

    #[test]
    fn test_join_uri_rejects_relative_base() {
        assert!(matches!(
            join_uri("internal", "/sessions/"),
            Err(RestError::InvalidUri(_))
        ));
    }

    #[test]
    fn test_status_ranges() {
        assert!(is_success_status(200));
        assert!(is_success_status(299));
        assert!(!is_success_status(300));
        assert!(is_client_error_status(400));
        assert!(is_client_error_status(499));
        assert!(!is_client_error_status(500));
    }
}
