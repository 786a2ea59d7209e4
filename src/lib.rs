#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Locator REST Client
//!
//! A client for a family of cooperating backend services (authentication,
//! session database, file broker) whose addresses are looked up at call time
//! from a service locator.
//!
//! ## Pipeline
//!
//! Every domain operation runs the same fixed chain, one network round trip per
//! step:
//!
//! 1. **Resolve** - `GET {locator}/services`, pick the entry for the role
//! 2. **Authenticate** - `Authorization: Basic base64(principal:secret)`
//! 3. **Execute** - one attempt, no retries
//! 4. **Classify** - 2xx success, 4xx client error, anything else a generic 500
//!
//! ## Caller Roles
//!
//! | Role | Address used | Error presentation |
//! |------|--------------|--------------------|
//! | [`ClientRole::External`] | `publicUri` | diagnostic message with the request URI |
//! | [`ClientRole::Internal`] | `uri` | structured [`HttpError`] |
//!
//! ## Usage
//!
//! ```ignore
//! use locator_rest_client::{ClientRole, RestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RestClient::new(
//!         ClientRole::external("https://gateway.example/servicelocator"),
//!         Some("my-session-token".to_string()),
//!     )?;
//!
//!     let sessions = client.list_sessions().await?;
//!     println!("{}", sessions);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - **[client]** - RestClient, resolver, transport, classifier
//! - **[types]** - Roles, descriptors, requests, responses, outcomes
//! - **[error]** - Error types and result handling
//! - **[protocol]** - Header helpers and wire constants
//! - **[config]** - Process-wide service configuration
//! - **[logging]** - Subscriber setup for binaries

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod protocol;
pub mod types;

pub use client::{ClientConfig, HttpTransport, ReqwestTransport, RestClient};
pub use config::ServiceConfig;
pub use error::{HttpError, ResponseError, RestError, Result};
pub use types::{ClientIdentity, ClientRole, Outcome, RawResponse, RequestSpec, ServiceDescriptor};
