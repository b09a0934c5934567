//! Server configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Every remote function gets a resolved upstream URL at startup. Lookup
//! order per service: `UPSTREAM_<SERVICE>` env var, then the
//! `ENDPOINTS_FILE` YAML map, then `{UPSTREAM_BASE_URL}/{function_id}` using
//! the deployed function id each service is known by.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::BTreeMap;
use std::time::Duration;

use client::net::api::Service;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://functions.poehali.dev";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A numeric variable held something that is not a number.
    #[error("invalid {var}: {value:?}")]
    InvalidNumber { var: String, value: String },

    /// The endpoints file could not be read.
    #[error("cannot read endpoints file {path}: {source}")]
    EndpointsRead { path: String, source: std::io::Error },

    /// The endpoints file is not a `service: url` map.
    #[error("cannot parse endpoints file {path}: {source}")]
    EndpointsParse { path: String, source: serde_yaml::Error },

    /// The endpoints file names a service the client never calls.
    #[error("unknown service in endpoints file: {0}")]
    UnknownService(String),

    /// The shared HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Resolved upstream URL keyed by service name.
    pub endpoints: BTreeMap<&'static str, String>,
    pub upstream_timeout: Duration,
    pub max_body_bytes: usize,
}

impl Config {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed numbers or an unreadable
    /// endpoints file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_var(&var, "PORT", DEFAULT_PORT)?;
        let timeout_secs = parse_var(&var, "UPSTREAM_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT_SECS)?;
        let max_body_bytes = parse_var(&var, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?;
        let base_url = var("UPSTREAM_BASE_URL").unwrap_or_else(|| DEFAULT_UPSTREAM_BASE_URL.to_owned());
        let base_url = base_url.trim_end_matches('/');

        let from_file = match var("ENDPOINTS_FILE").filter(|p| !p.trim().is_empty()) {
            Some(path) => read_endpoints_file(&path)?,
            None => BTreeMap::new(),
        };

        let endpoints = Service::ALL
            .into_iter()
            .map(|service| {
                let name = service.name();
                let url = var(&override_var(name))
                    .filter(|u| !u.trim().is_empty())
                    .or_else(|| from_file.get(name).cloned())
                    .unwrap_or_else(|| format!("{base_url}/{}", service.function_id()));
                (name, url)
            })
            .collect();

        Ok(Self { port, endpoints, upstream_timeout: Duration::from_secs(timeout_secs), max_body_bytes })
    }

    #[must_use]
    pub fn upstream_url(&self, service: &str) -> Option<&str> {
        self.endpoints.get(service).map(String::as_str)
    }
}

/// `admin-auth` -> `UPSTREAM_ADMIN_AUTH`.
#[must_use]
pub fn override_var(service: &str) -> String {
    format!("UPSTREAM_{}", service.to_ascii_uppercase().replace('-', "_"))
}

fn parse_var<T: std::str::FromStr>(var: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T, ConfigError> {
    match var(key).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidNumber { var: key.to_owned(), value: raw }),
        None => Ok(default),
    }
}

/// Parse a YAML `service: url` map, rejecting names no client call uses.
///
/// # Errors
///
/// Returns [`ConfigError::EndpointsParse`] or [`ConfigError::UnknownService`].
pub fn parse_endpoints(path: &str, yaml: &str) -> Result<BTreeMap<String, String>, ConfigError> {
    let map: BTreeMap<String, String> = serde_yaml::from_str(yaml)
        .map_err(|source| ConfigError::EndpointsParse { path: path.to_owned(), source })?;
    if let Some(unknown) = map.keys().find(|name| Service::from_name(name).is_none()) {
        return Err(ConfigError::UnknownService(unknown.clone()));
    }
    Ok(map)
}

fn read_endpoints_file(path: &str) -> Result<BTreeMap<String, String>, ConfigError> {
    let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::EndpointsRead { path: path.to_owned(), source })?;
    parse_endpoints(path, &yaml)
}
