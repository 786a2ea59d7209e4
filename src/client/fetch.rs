//! Main REST client and domain operations.
//!
//! Each operation is one fixed sequence: resolve the service through the
//! locator, build the target URI, attach credentials, execute, classify.
//!
//! # Examples
//!
//! ## Logging in as an external client
//!
//! ```ignore
//! use locator_rest_client::{ClientRole, RestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let anonymous = RestClient::new(ClientRole::external("https://gateway.example/locator"), None)?;
//!     let token = anonymous.issue_token("alice", "secret").await?;
//!
//!     let client = anonymous.with_token(token["tokenKey"].as_str().unwrap_or_default());
//!     for session in client.list_sessions().await?.as_array().into_iter().flatten() {
//!         println!("{}", session["name"]);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Internal service reading a file head
//!
//! ```ignore
//! use locator_rest_client::RestClient;
//!
//! let client = RestClient::internal(Some(service_token))?;
//! let head = client.get_file(&session_id, &dataset_id, 4096).await?;
//! ```

use crate::client::classify::classify;
use crate::client::config::ClientConfig;
use crate::client::resolver;
use crate::client::transport::{HttpTransport, ReqwestTransport};
use crate::client::utils::join_uri;
use crate::config::ServiceConfig;
use crate::error::Result;
use crate::protocol::constants::{headers, paths, roles, APPLICATION_JSON};
use crate::protocol::{basic_auth_header, format_range, token_auth_header};
use crate::types::{ClientIdentity, ClientRole, Method, RequestSpec};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Client for the locator-resolved auth, session-db and file-broker services.
///
/// Cheap to clone; the identity is fixed at construction.
#[derive(Clone)]
pub struct RestClient {
    transport: Arc<dyn HttpTransport>,
    identity: Arc<ClientIdentity>,
}

impl RestClient {
    /// Create a client with default configuration.
    pub fn new(role: ClientRole, token: Option<String>) -> Result<Self> {
        Self::with_config(role, token, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(role: ClientRole, token: Option<String>, config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(role, token, Arc::new(transport)))
    }

    /// Create a client over any transport.
    pub fn with_transport(
        role: ClientRole,
        token: Option<String>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        RestClient {
            transport,
            identity: Arc::new(ClientIdentity { role, token }),
        }
    }

    /// Internal service client, locator taken from the process configuration.
    pub fn internal(token: Option<String>) -> Result<Self> {
        let role = ClientRole::internal_from_config(&ServiceConfig::new())?;
        Self::new(role, token)
    }

    /// New client with the same role and transport, authenticated by `token`.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        RestClient {
            transport: Arc::clone(&self.transport),
            identity: Arc::new(ClientIdentity {
                role: self.identity.role.clone(),
                token: Some(token.into()),
            }),
        }
    }

    /// The identity this client was built with.
    pub fn identity(&self) -> &ClientIdentity {
        &self.identity
    }

    fn role(&self) -> &ClientRole {
        &self.identity.role
    }

    /// Resolve the base address of a service role.
    pub async fn resolve_service_uri(&self, role_name: &str) -> Result<String> {
        resolver::resolve_service_uri(self.transport.as_ref(), self.role(), role_name).await
    }

    /// Authentication service address.
    pub async fn auth_uri(&self) -> Result<String> {
        self.resolve_service_uri(roles::AUTH).await
    }

    /// Session database address.
    pub async fn session_db_uri(&self) -> Result<String> {
        self.resolve_service_uri(roles::SESSION_DB).await
    }

    /// File broker address.
    pub async fn file_broker_uri(&self) -> Result<String> {
        self.resolve_service_uri(roles::FILE_BROKER).await
    }

    /// Execute a request and classify the response.
    pub async fn call(&self, request: RequestSpec) -> Result<Bytes> {
        let response = self.transport.execute(request).await?;
        classify(response).into_result(self.role())
    }

    /// Token credentials when this client has a token, otherwise `base` unchanged.
    fn with_credentials(&self, base: BTreeMap<String, String>) -> BTreeMap<String, String> {
        match &self.identity.token {
            Some(token) => token_auth_header(token, base),
            None => base,
        }
    }

    /// GET `uri` with this client's credentials and parse the JSON reply.
    pub async fn get_json<T: DeserializeOwned>(&self, uri: String) -> Result<T> {
        let request = RequestSpec::get(uri).with_headers(self.with_credentials(BTreeMap::new()));
        let body = self.call(request).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Issue a session token for a username and password.
    pub async fn issue_token(&self, username: &str, password: &str) -> Result<Value> {
        let uri = join_uri(&self.auth_uri().await?, paths::TOKENS)?;
        let request = RequestSpec::new(Method::Post, uri)
            .with_headers(basic_auth_header(username, password, BTreeMap::new()));
        let body = self.call(request).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// All sessions visible to this token.
    pub async fn list_sessions(&self) -> Result<Value> {
        let uri = join_uri(&self.session_db_uri().await?, paths::SESSIONS)?;
        self.get_json(uri).await
    }

    /// One session.
    pub async fn get_session(&self, session_id: &str) -> Result<Value> {
        let uri = join_uri(&self.session_db_uri().await?, &session_path(session_id))?;
        self.get_json(uri).await
    }

    /// Create a session; returns the parsed reply, or `Null` for an empty body.
    pub async fn create_session<S: Serialize + ?Sized>(&self, session: &S) -> Result<Value> {
        let uri = join_uri(&self.session_db_uri().await?, paths::SESSIONS)?;
        let mut request_headers = self.with_credentials(BTreeMap::new());
        request_headers.insert(headers::CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());

        let request = RequestSpec::new(Method::Post, uri)
            .with_headers(request_headers)
            .with_body(serde_json::to_vec(session)?);
        let body = self.call(request).await?;

        if body.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&body)?)
    }

    /// Delete a session.
    pub async fn delete_session(&self, session_id: &str) -> Result<()> {
        let uri = join_uri(&self.session_db_uri().await?, &session_path(session_id))?;
        let request = RequestSpec::new(Method::Delete, uri)
            .with_headers(self.with_credentials(BTreeMap::new()));
        self.call(request).await?;
        Ok(())
    }

    /// Datasets of a session.
    pub async fn list_datasets(&self, session_id: &str) -> Result<Value> {
        let uri = join_uri(&self.session_db_uri().await?, &datasets_path(session_id))?;
        self.get_json(uri).await
    }

    /// One dataset of a session.
    pub async fn get_dataset(&self, session_id: &str, dataset_id: &str) -> Result<Value> {
        let path = format!("{}{}", datasets_path(session_id), dataset_id);
        let uri = join_uri(&self.session_db_uri().await?, &path)?;
        self.get_json(uri).await
    }

    /// First bytes of a dataset's file, up to `Range: bytes=0-{max_length}`.
    ///
    /// `max_length == 0` returns an empty payload without touching the network,
    /// because `bytes=0-0` is answered with 416.
    pub async fn get_file(&self, session_id: &str, dataset_id: &str, max_length: u64) -> Result<Bytes> {
        if max_length == 0 {
            return Ok(Bytes::new());
        }

        let path = format!("{}{}", datasets_path(session_id), dataset_id);
        let uri = join_uri(&self.file_broker_uri().await?, &path)?;

        let mut range = BTreeMap::new();
        range.insert(headers::RANGE.to_string(), format_range(max_length));

        let request = RequestSpec::get(uri).with_headers(self.with_credentials(range));
        self.call(request).await
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

fn session_path(session_id: &str) -> String {
    format!("{}{}", paths::SESSIONS, session_id)
}

fn datasets_path(session_id: &str) -> String {
    format!("{}{}{}", paths::SESSIONS, session_id, paths::DATASETS)
}
