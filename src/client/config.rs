//! Client configuration.

/// Settings for the underlying HTTP client.
///
/// # Examples
///
/// ```
/// use locator_rest_client::client::ClientConfig;
///
/// let config = ClientConfig {
///     request_timeout_ms: 5_000,
///     ..Default::default()
/// };
/// assert!(config.enable_logging);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Whole-request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Connect timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Proxy for all requests; empty means none
    pub proxy_url: String,
    /// `User-Agent` header value
    pub user_agent: String,
    /// Emit per-request debug events
    pub enable_logging: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            request_timeout_ms: 30_000,
            connect_timeout_ms: 10_000,
            proxy_url: String::new(),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            enable_logging: true,
        }
    }
}
