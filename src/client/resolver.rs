//! Service address resolution through the locator.
//!
//! Every call performs a fresh, unauthenticated `GET {locator}/services`;
//! nothing is cached between calls.

use crate::client::classify::classify;
use crate::client::transport::HttpTransport;
use crate::client::utils::join_uri;
use crate::error::{RestError, Result};
use crate::protocol::constants::paths;
use crate::types::{ClientRole, RequestSpec, ServiceDescriptor};

/// Query the locator and return the address of `role_name` for this caller.
///
/// # Errors
///
/// - [`RestError::ServiceNotFound`] when no entry matches `role_name`
/// - status and transport errors from the locator call itself
pub async fn resolve_service_uri(
    transport: &dyn HttpTransport,
    role: &ClientRole,
    role_name: &str,
) -> Result<String> {
    let uri = join_uri(role.locator_url(), paths::SERVICES)?;
    let response = transport.execute(RequestSpec::get(uri)).await?;
    let body = classify(response).into_result(role)?;
    let entries: Vec<serde_json::Value> = serde_json::from_slice(&body)?;

    select_service_uri(&parse_descriptors(entries), role_name, role)
}

/// Keep the locator entries that parse as descriptors; others are skipped.
pub fn parse_descriptors(entries: Vec<serde_json::Value>) -> Vec<ServiceDescriptor> {
    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(descriptor) => Some(descriptor),
            Err(e) => {
                tracing::debug!(error = %e, "skipping locator entry");
                None
            }
        })
        .collect()
}

/// Pick the first descriptor for `role_name` and return the address for `role`.
///
/// External callers get the public address, internal callers the internal one.
/// A matching entry without the needed address counts as not found.
pub fn select_service_uri(
    services: &[ServiceDescriptor],
    role_name: &str,
    role: &ClientRole,
) -> Result<String> {
    let address = services
        .iter()
        .find(|s| s.role == role_name)
        .and_then(|s| s.address_for(role))
        .ok_or_else(|| RestError::ServiceNotFound(role_name.to_string()))?;

    tracing::debug!(service = role_name, address, external = role.is_external(), "resolved service");
    Ok(address.to_string())
}
