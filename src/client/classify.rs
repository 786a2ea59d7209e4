//! Response classification.
//!
//! | Status | Outcome |
//! |--------|---------|
//! | 200–299 | [`Outcome::Success`] with the body unchanged |
//! | 400–499 | [`FailureKind::ClientError`], status and body preserved |
//! | anything else | [`FailureKind::ServerError`], collapsed to 500 |

use crate::client::utils::{is_client_error_status, is_success_status};
use crate::types::{Failure, FailureKind, Outcome, RawResponse};

/// Message carried by every collapsed server error.
pub const SERVER_ERROR_MESSAGE: &str = "unable to retrieve resource";
/// Status reported for collapsed server errors.
pub const SERVER_ERROR_STATUS: u16 = 500;
/// Status text reported for collapsed server errors.
pub const SERVER_ERROR_TEXT: &str = "Internal Server Error";

/// Classify a raw response.
///
/// # Examples
///
/// ```
/// use locator_rest_client::client::classify;
/// use locator_rest_client::types::{Outcome, RawResponse};
///
/// let response = RawResponse {
///     status: 204,
///     status_text: "No Content".into(),
///     headers: Default::default(),
///     body: Default::default(),
///     request_uri: "http://sdb/sessions/1".into(),
/// };
/// assert!(classify(response).is_success());
/// ```
pub fn classify(response: RawResponse) -> Outcome {
    let status = response.status;

    if is_success_status(status) {
        tracing::debug!(status, uri = %response.request_uri, bytes = response.body.len(), "response");
        return Outcome::Success(response.body);
    }

    let body = response.body_text();

    if is_client_error_status(status) {
        tracing::debug!(
            status,
            status_text = %response.status_text,
            uri = %response.request_uri,
            body = %body,
            "client error"
        );
        return Outcome::Failure(Failure {
            kind: FailureKind::ClientError,
            status,
            status_text: response.status_text,
            message: body,
            request_uri: response.request_uri,
        });
    }

    tracing::error!(
        status,
        status_text = %response.status_text,
        uri = %response.request_uri,
        body = %body,
        "server error"
    );
    Outcome::Failure(Failure {
        kind: FailureKind::ServerError,
        status: SERVER_ERROR_STATUS,
        status_text: SERVER_ERROR_TEXT.to_string(),
        message: SERVER_ERROR_MESSAGE.to_string(),
        request_uri: response.request_uri,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn response(status: u16, body: &'static str) -> RawResponse {
        RawResponse {
            status,
            status_text: http::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or_default()
                .to_string(),
            headers: Default::default(),
            body: Bytes::from_static(body.as_bytes()),
            request_uri: "http://svc/sessions/".to_string(),
        }
    }

    #[test]
    fn test_success_range_returns_body_unchanged() {
        for status in [200, 201, 204, 206, 299] {
            match classify(response(status, "payload")) {
                Outcome::Success(body) => assert_eq!(body, Bytes::from_static(b"payload")),
                other => panic!("{} classified as {:?}", status, other),
            }
        }
    }

    #[test]
    fn test_client_error_range_keeps_status() {
        for status in [400, 401, 403, 404, 416, 499] {
            match classify(response(status, "bad")) {
                Outcome::Failure(f) => {
                    assert_eq!(f.kind, FailureKind::ClientError);
                    assert_eq!(f.status, status);
                    assert_eq!(f.message, "bad");
                }
                other => panic!("{} classified as {:?}", status, other),
            }
        }
    }

    #[test]
    fn test_everything_else_collapses_to_server_error() {
        for status in [100, 301, 304, 399, 500, 502, 503, 599] {
            match classify(response(status, "upstream detail")) {
                Outcome::Failure(f) => {
                    assert_eq!(f.kind, FailureKind::ServerError);
                    assert_eq!(f.status, SERVER_ERROR_STATUS);
                    assert_eq!(f.message, SERVER_ERROR_MESSAGE);
                    assert_eq!(f.request_uri, "http://svc/sessions/");
                }
                other => panic!("{} classified as {:?}", status, other),
            }
        }
    }
}
