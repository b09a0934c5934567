//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the resolved configuration and one pooled HTTP client used for
//! every upstream call.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, ConfigError};

const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build state around `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] when the HTTP client cannot
    /// be constructed.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ConfigError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config: Arc::new(config) })
    }
}
