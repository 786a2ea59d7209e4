//! Error types for the locator REST client.
//!
//! Every failure a domain operation can produce surfaces as a [`RestError`].
//! Status-derived failures carry a [`ResponseError`] whose shape depends on the
//! role the client was built for:
//!
//! | Role | Presentation |
//! |------|--------------|
//! | External | [`ResponseError::Message`]: a diagnostic string with the request URI |
//! | Internal | [`ResponseError::Http`]: a structured [`HttpError`] for re-surfacing |

use std::fmt;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RestError>;

/// Errors produced by the client pipeline.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Connection, timeout or body read failure before a usable response existed.
    #[error("transport error for {uri}: {message}")]
    Transport {
        /// Request URI that failed
        uri: String,
        /// Underlying error text
        message: String,
    },

    /// The remote service rejected the request (4xx).
    #[error("client error: {0}")]
    ClientError(ResponseError),

    /// Anything that is neither 2xx nor 4xx, collapsed to a generic internal error.
    #[error("server error: {0}")]
    ServerError(ResponseError),

    /// The locator has no entry for the requested role.
    #[error("service not found: {0}")]
    ServiceNotFound(String),

    /// A resolved address or joined path is not a valid URI.
    #[error("invalid uri: {0}")]
    InvalidUri(String),

    /// A header name or value could not be encoded.
    #[error("invalid header: {0}")]
    Header(String),

    /// Response body is not the expected JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Process configuration is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl RestError {
    /// HTTP status carried by a status-derived error.
    ///
    /// Server errors always report 500; the upstream status is not preserved.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RestError::ClientError(e) | RestError::ServerError(e) => e.status_code(),
            _ => None,
        }
    }

    /// Whether the error was raised before any HTTP response existed.
    pub fn is_transport(&self) -> bool {
        matches!(self, RestError::Transport { .. })
    }
}

impl From<url::ParseError> for RestError {
    fn from(err: url::ParseError) -> Self {
        RestError::InvalidUri(err.to_string())
    }
}

/// A status failure as presented to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    /// Diagnostic text for external callers: `"{status} - {text} ({body}) {uri}"`.
    Message(String),
    /// Structured error for internal services to hand to their own HTTP layer.
    Http(HttpError),
}

impl ResponseError {
    /// Status code, if the presentation keeps one in structured form.
    ///
    /// Message presentations start with the status, so it is parsed back out.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ResponseError::Http(e) => Some(e.status_code),
            ResponseError::Message(m) => m.split(' ').next().and_then(|s| s.parse().ok()),
        }
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseError::Message(m) => f.write_str(m),
            ResponseError::Http(e) => fmt::Display::fmt(e, f),
        }
    }
}

/// HTTP error meant to be re-transmitted by an HTTP framework to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    /// Rest code, set to the upstream status text
    pub rest_code: String,
    /// Numeric HTTP status
    pub status_code: u16,
    /// Upstream body or generic message
    pub message: String,
}

impl HttpError {
    /// Status as an [`http::StatusCode`], falling back to 500 for invalid values.
    pub fn status(&self) -> http::StatusCode {
        http::StatusCode::from_u16(self.status_code)
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.status_code, self.rest_code, self.message)
    }
}

impl std::error::Error for HttpError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_from_http_presentation() {
        let err = RestError::ClientError(ResponseError::Http(HttpError {
            rest_code: "Not Found".to_string(),
            status_code: 404,
            message: "no such session".to_string(),
        }));
        assert_eq!(err.status_code(), Some(404));
    }

    #[test]
    fn test_status_code_from_message_presentation() {
        let err = RestError::ClientError(ResponseError::Message(
            "403 - Forbidden (denied) http://x/sessions/".to_string(),
        ));
        assert_eq!(err.status_code(), Some(403));
    }

    #[test]
    fn test_non_status_errors_have_no_code() {
        assert_eq!(RestError::ServiceNotFound("auth".into()).status_code(), None);
        assert!(RestError::Transport {
            uri: "http://x".into(),
            message: "refused".into()
        }
        .is_transport());
    }

    #[test]
    fn test_http_error_status_fallback() {
        let err = HttpError {
            rest_code: "weird".to_string(),
            status_code: 42,
            message: String::new(),
        };
        assert_eq!(err.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
