//! Header construction for authenticated and ranged requests.
//!
//! # Header Formats
//!
//! | Header | Format | Example |
//! |--------|--------|---------|
//! | Authorization | `Basic base64(principal:secret)` | `Basic dG9rZW46YWJjMTIz` |
//! | Range | `bytes=0-{max}` | `bytes=0-1024` |
//!
//! # Token Credentials
//!
//! Session tokens travel in the same Basic scheme as passwords, under the
//! sentinel principal [`TOKEN_PRINCIPAL`]. Servers read `token:<secret>` as a
//! bearer token, so the principal must stay exactly `"token"`.
//!
//! # Examples
//!
//! ```
//! use locator_rest_client::protocol::{basic_auth_header, token_auth_header, format_range};
//! use std::collections::BTreeMap;
//!
//! let headers = basic_auth_header("token", "abc123", BTreeMap::new());
//! assert_eq!(headers["Authorization"], "Basic dG9rZW46YWJjMTIz");
//!
//! let headers = token_auth_header("abc123", BTreeMap::new());
//! assert_eq!(headers["Authorization"], "Basic dG9rZW46YWJjMTIz");
//!
//! assert_eq!(format_range(1024), "bytes=0-1024");
//! ```

use super::constants::headers::AUTHORIZATION;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::collections::BTreeMap;

/// Principal name that marks the secret as a session token.
pub const TOKEN_PRINCIPAL: &str = "token";

/// Encode `principal:secret` as a Basic credential value.
///
/// # Examples
///
/// ```
/// use locator_rest_client::protocol::basic_credentials;
///
/// assert_eq!(basic_credentials("user", "pass"), "Basic dXNlcjpwYXNz");
/// ```
pub fn basic_credentials(principal: &str, secret: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", principal, secret)))
}

/// Set `Authorization: Basic ...` on `headers`, keeping every other header.
///
/// Any earlier `Authorization` value is replaced, so a request never carries
/// two credential forms.
pub fn basic_auth_header(
    principal: &str,
    secret: &str,
    mut headers: BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    headers.retain(|name, _| !name.eq_ignore_ascii_case(AUTHORIZATION));
    headers.insert(AUTHORIZATION.to_string(), basic_credentials(principal, secret));
    headers
}

/// Basic header carrying a session token.
#[inline]
pub fn token_auth_header(
    token: &str,
    headers: BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    basic_auth_header(TOKEN_PRINCIPAL, token, headers)
}

/// Format a `Range` value covering bytes `0..=max`.
///
/// `max == 0` yields `bytes=0-0`, which servers answer with 416; callers
/// short-circuit that case instead of sending it.
#[inline]
pub fn format_range(max: u64) -> String {
    format!("bytes=0-{}", max)
}

/// Names of the headers, without values, for logging.
pub fn header_names(headers: &BTreeMap<String, String>) -> String {
    headers.keys().cloned().collect::<Vec<_>>().join(", ")
}
