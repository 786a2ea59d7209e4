//! HTTP call executor.
//!
//! [`HttpTransport`] is the seam between request composition and the network.
//! [`ReqwestTransport`] performs exactly one attempt per call; connection and
//! timeout failures come back as [`RestError::Transport`], never as a status.
//! Redirects are not followed; a 3xx is returned as is.

use crate::client::config::ClientConfig;
use crate::error::{RestError, Result};
use crate::protocol::header_names;
use crate::types::{RawResponse, RequestSpec};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::BTreeMap;
use std::time::Duration;

/// Executes a single HTTP request.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send `request` and return the raw response, whatever its status.
    async fn execute(&self, request: RequestSpec) -> Result<RawResponse>;
}

/// [`HttpTransport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    enable_logging: bool,
}

impl ReqwestTransport {
    /// Build a transport from client settings.
    ///
    /// # Errors
    ///
    /// [`RestError::Config`] if the proxy URL is invalid or the client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::none());

        if !config.proxy_url.is_empty() {
            let proxy = reqwest::Proxy::all(&config.proxy_url)
                .map_err(|e| RestError::Config(format!("invalid proxy url: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| RestError::Config(format!("failed to build http client: {}", e)))?;

        Ok(ReqwestTransport {
            client,
            enable_logging: config.enable_logging,
        })
    }

}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: RequestSpec) -> Result<RawResponse> {
        let url = url::Url::parse(&request.uri)?;

        if self.enable_logging {
            tracing::debug!(
                method = request.method.as_str(),
                uri = %request.uri,
                headers = %header_names(&request.headers),
                "sending request"
            );
        }

        let mut req_builder = self
            .client
            .request(request.method.into(), url)
            .headers(to_header_map(&request.headers)?);

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let response = req_builder.send().await.map_err(|e| RestError::Transport {
            uri: request.uri.clone(),
            message: e.to_string(),
        })?;

        let status = response.status();

        let mut headers = BTreeMap::new();
        for (k, v) in response.headers() {
            if let Ok(val) = v.to_str() {
                headers.insert(k.as_str().to_string(), val.to_string());
            }
        }

        let body = response.bytes().await.map_err(|e| RestError::Transport {
            uri: request.uri.clone(),
            message: e.to_string(),
        })?;

        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body,
            request_uri: request.uri,
        })
    }
}

fn to_header_map(headers: &BTreeMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| RestError::Header(format!("{}: {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| RestError::Header(format!("{}: {}", name, e)))?;
        map.insert(name, value);
    }
    Ok(map)
}
