//! Client configuration resolved at compile time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend origin is baked into the WASM bundle from
//! `SPENDWISE_API_BASE_URL` so the same value drives REST calls and the
//! OAuth2 authorization redirect. The config is provided once through Leptos
//! context by `App`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_API_PREFIX: &str = "/api";
pub const PAYMENT_REDIRECT_DELAY_SECS: u64 = 3;

/// Backend location and view timing shared across the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash, e.g. `http://localhost:8080`.
    pub api_base_url: String,
    /// Path prefix of the REST API on the backend.
    pub api_prefix: String,
    /// How long the payment callback view waits before navigating on.
    pub payment_redirect_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_base_url(option_env!("SPENDWISE_API_BASE_URL"))
    }
}

impl ClientConfig {
    /// Build a config from an optional backend origin, trimming trailing slashes.
    pub fn from_base_url(raw: Option<&str>) -> Self {
        let base = raw
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self {
            api_base_url: base,
            api_prefix: DEFAULT_API_PREFIX.to_owned(),
            payment_redirect_delay: Duration::from_secs(PAYMENT_REDIRECT_DELAY_SECS),
        }
    }

    /// Absolute URL of a REST endpoint, e.g. `endpoint("/auth/login")`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.api_base_url, self.api_prefix, path)
    }
}
