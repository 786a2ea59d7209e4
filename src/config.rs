//! Process-wide service configuration.
//!
//! Values are looked up in this order:
//!
//! 1. programmatic overrides set with [`ServiceConfig::set`]
//! 2. environment variables (`url-int-service-locator` → `URL_INT_SERVICE_LOCATOR`)
//! 3. built-in default templates
//!
//! Templates may reference `{{public-ip}}` and `{{bind-ip}}`, resolved from
//! programmatic variables, then `PUBLIC_IP` / `BIND_IP`, then built-in defaults.

use crate::error::{RestError, Result};
use std::collections::BTreeMap;

/// Internal service locator address.
pub const KEY_URL_INT_SERVICE_LOCATOR: &str = "url-int-service-locator";
/// Public service locator address.
pub const KEY_URL_EXT_SERVICE_LOCATOR: &str = "url-ext-service-locator";

const DEFAULTS: &[(&str, &str)] = &[
    (KEY_URL_INT_SERVICE_LOCATOR, "http://{{public-ip}}:8082/servicelocator"),
    (KEY_URL_EXT_SERVICE_LOCATOR, "http://{{public-ip}}:8082/servicelocator"),
];

const VARIABLE_DEFAULTS: &[(&str, &str)] = &[("public-ip", "127.0.0.1"), ("bind-ip", "0.0.0.0")];

/// Key/value configuration with environment overrides and templated defaults.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    overrides: BTreeMap<String, String>,
    variables: BTreeMap<String, String>,
    env: fn(&str) -> Option<String>,
}

impl ServiceConfig {
    /// Configuration backed by the process environment.
    pub fn new() -> Self {
        Self::with_env(|name| std::env::var(name).ok())
    }

    /// Configuration backed by a custom environment lookup.
    pub fn with_env(env: fn(&str) -> Option<String>) -> Self {
        ServiceConfig {
            overrides: BTreeMap::new(),
            variables: BTreeMap::new(),
            env,
        }
    }

    /// Override a key for this process.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.overrides.insert(key.into(), value.into());
    }

    /// Set a template variable such as `public-ip`.
    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Look up a key.
    ///
    /// # Errors
    ///
    /// [`RestError::Config`] if the key has no override, env var or default.
    pub fn get(&self, key: &str) -> Result<String> {
        if let Some(value) = self.overrides.get(key) {
            return Ok(value.clone());
        }

        if let Some(value) = (self.env)(&env_name(key)) {
            return Ok(value);
        }

        DEFAULTS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, template)| self.render(template))
            .ok_or_else(|| RestError::Config(format!("configuration key not found: {}", key)))
    }

    fn render(&self, template: &str) -> String {
        let mut rendered = template.to_string();
        for (name, default) in VARIABLE_DEFAULTS {
            let placeholder = format!("{{{{{}}}}}", name);
            if !rendered.contains(&placeholder) {
                continue;
            }
            let value = self
                .variables
                .get(*name)
                .cloned()
                .or_else(|| (self.env)(&env_name(name)))
                .unwrap_or_else(|| {
                    tracing::debug!(variable = name, default, "using default config variable");
                    default.to_string()
                });
            rendered = rendered.replace(&placeholder, &value);
        }
        rendered
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable name for a config key.
pub fn env_name(key: &str) -> String {
    key.to_uppercase().replace('-', "_")
}
