//! Core types flowing through the request pipeline.
//!
//! - [`ClientRole`] / [`ClientIdentity`]: who is calling and through which addresses
//! - [`ServiceDescriptor`]: one locator entry
//! - [`RequestSpec`] / [`RawResponse`]: the executor's input and output
//! - [`Outcome`] / [`Failure`]: the classifier's verdict

use crate::config::{ServiceConfig, KEY_URL_INT_SERVICE_LOCATOR};
use crate::error::{HttpError, ResponseError, RestError, Result};
use bytes::Bytes;
use serde::Deserialize;
use std::collections::BTreeMap;

/// The caller's role, deciding which locator address is used and how errors look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientRole {
    /// Client-facing caller reaching services through their public addresses.
    External {
        /// Service locator base URL
        locator_url: String,
    },
    /// Service-to-service caller using internal addresses.
    Internal {
        /// Service locator base URL, taken from process configuration
        locator_url: String,
    },
}

impl ClientRole {
    /// External role with an explicitly supplied locator.
    pub fn external(locator_url: impl Into<String>) -> Self {
        ClientRole::External {
            locator_url: locator_url.into(),
        }
    }

    /// Internal role with its locator read from `url-int-service-locator`.
    pub fn internal_from_config(config: &ServiceConfig) -> Result<Self> {
        Ok(ClientRole::Internal {
            locator_url: config.get(KEY_URL_INT_SERVICE_LOCATOR)?,
        })
    }

    /// Locator base URL for this role.
    pub fn locator_url(&self) -> &str {
        match self {
            ClientRole::External { locator_url } | ClientRole::Internal { locator_url } => {
                locator_url
            }
        }
    }

    /// Whether this role is client-facing.
    pub fn is_external(&self) -> bool {
        matches!(self, ClientRole::External { .. })
    }
}

/// Immutable identity set at client construction.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    /// Caller role
    pub role: ClientRole,
    /// Session token used for `token:<secret>` Basic auth
    pub token: Option<String>,
}

impl std::fmt::Debug for ClientIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientIdentity")
            .field("role", &self.role)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// One entry of the locator's `/services` listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescriptor {
    /// Logical role, e.g. `"session-db"`
    pub role: String,
    /// Internal address
    #[serde(default)]
    pub uri: Option<String>,
    /// Public address
    #[serde(default)]
    pub public_uri: Option<String>,
}

impl ServiceDescriptor {
    /// Address matching the caller's role.
    pub fn address_for(&self, role: &ClientRole) -> Option<&str> {
        let address = if role.is_external() {
            self.public_uri.as_deref()
        } else {
            self.uri.as_deref()
        };
        address.filter(|a| !a.is_empty())
    }
}

/// HTTP method supported by the executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// DELETE
    Delete,
}

impl Method {
    /// Upper-case method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
            Method::Delete => http::Method::DELETE,
        }
    }
}

/// A request about to be executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// HTTP method
    pub method: Method,
    /// Absolute target URI
    pub uri: String,
    /// Request headers
    pub headers: BTreeMap<String, String>,
    /// Optional body
    pub body: Option<Bytes>,
}

impl RequestSpec {
    /// Create a request with no headers or body.
    pub fn new(method: Method, uri: impl Into<String>) -> Self {
        RequestSpec {
            method,
            uri: uri.into(),
            headers: BTreeMap::new(),
            body: None,
        }
    }

    /// Shorthand for a GET request.
    pub fn get(uri: impl Into<String>) -> Self {
        Self::new(Method::Get, uri)
    }

    /// Replace the header map.
    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Set one header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Response as it came off the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Status reason phrase
    pub status_text: String,
    /// Response headers (keys lowercase)
    pub headers: BTreeMap<String, String>,
    /// Response body
    pub body: Bytes,
    /// URI of the request that produced this response
    pub request_uri: String,
}

impl RawResponse {
    /// Body as text, lossily decoded.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Kind of a classified failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// 4xx
    ClientError,
    /// Everything else that is not 2xx
    ServerError,
}

/// A non-successful classified response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Failure kind
    pub kind: FailureKind,
    /// Status reported to the caller (500 for server errors)
    pub status: u16,
    /// Status reason phrase
    pub status_text: String,
    /// Body for client errors, a generic message for server errors
    pub message: String,
    /// URI of the failed request
    pub request_uri: String,
}

impl Failure {
    /// Present the failure the way the caller's role expects.
    pub fn into_error(self, role: &ClientRole) -> RestError {
        let presented = match role {
            ClientRole::External { .. } => ResponseError::Message(format!(
                "{} - {} ({}) {}",
                self.status, self.status_text, self.message, self.request_uri
            )),
            ClientRole::Internal { .. } => ResponseError::Http(HttpError {
                rest_code: self.status_text,
                status_code: self.status,
                message: self.message,
            }),
        };

        match self.kind {
            FailureKind::ClientError => RestError::ClientError(presented),
            FailureKind::ServerError => RestError::ServerError(presented),
        }
    }
}

/// Classifier verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 2xx with the body unchanged
    Success(Bytes),
    /// Anything else
    Failure(Failure),
}

impl Outcome {
    /// Unwrap into the payload or a role-presented error.
    pub fn into_result(self, role: &ClientRole) -> Result<Bytes> {
        match self {
            Outcome::Success(body) => Ok(body),
            Outcome::Failure(failure) => Err(failure.into_error(role)),
        }
    }

    /// Whether this is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}
