//! REST client for locator-resolved services.
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── fetch     - RestClient and domain operations
//! ├── resolver  - service address lookup through the locator
//! ├── transport - HttpTransport trait and reqwest executor
//! ├── classify  - status code classification
//! ├── config    - client configuration
//! └── utils     - URI joining and status helpers
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`RestClient`] | Domain operations over the pipeline |
//! | [`HttpTransport`] | Single-attempt request executor |
//! | [`ReqwestTransport`] | `reqwest` implementation of [`HttpTransport`] |
//! | [`ClientConfig`] | Timeouts, proxy, user agent |
//!
//! # Examples
//!
//! ```
//! use locator_rest_client::client::{ClientConfig, RestClient};
//! use locator_rest_client::ClientRole;
//!
//! let config = ClientConfig {
//!     request_timeout_ms: 5_000,
//!     ..Default::default()
//! };
//! let client = RestClient::with_config(
//!     ClientRole::external("https://gateway.example/locator"),
//!     Some("session-token".to_string()),
//!     config,
//! )
//! .unwrap();
//! assert!(client.identity().role.is_external());
//! ```

mod classify;
mod config;
mod fetch;
mod resolver;
mod transport;
mod utils;

pub use classify::{classify, SERVER_ERROR_MESSAGE, SERVER_ERROR_STATUS, SERVER_ERROR_TEXT};
pub use config::ClientConfig;
pub use fetch::RestClient;
pub use resolver::{parse_descriptors, resolve_service_uri, select_service_uri};
pub use transport::{HttpTransport, ReqwestTransport};
pub use utils::*;
