//! Connection configuration for Qdrant transports.

use std::time::Duration;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};
use url::Url;

use crate::error::{Error, Result};

/// Default Qdrant host.
pub const DEFAULT_HOST: &str = "localhost";

/// Default Qdrant REST port.
pub const DEFAULT_PORT: u16 = 6333;

/// Default timeout for HTTP requests: 30 seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// URL scheme used to reach the Qdrant server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Scheme {
    /// Plain HTTP.
    #[default]
    Http,
    /// HTTP over TLS.
    Https,
}

/// Connection parameters for a Qdrant server.
///
/// Immutable once handed to a transport; every transport holds its own copy.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct ConnectionConfig {
    /// Qdrant server host
    #[cfg_attr(
        feature = "config",
        arg(long = "qdrant-host", env = "QDRANT_HOST", default_value = DEFAULT_HOST)
    )]
    #[serde(default = "default_host")]
    pub host: String,

    /// Qdrant REST port
    #[cfg_attr(
        feature = "config",
        arg(long = "qdrant-port", env = "QDRANT_PORT", default_value_t = DEFAULT_PORT)
    )]
    #[serde(default = "default_port")]
    pub port: u16,

    /// API key sent in the `api-key` header
    #[cfg_attr(
        feature = "config",
        arg(long = "qdrant-api-key", env = "QDRANT_API_KEY")
    )]
    #[serde(default)]
    pub api_key: Option<String>,

    /// HTTP request timeout in seconds
    #[cfg_attr(
        feature = "config",
        arg(long = "qdrant-timeout", env = "QDRANT_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)
    )]
    #[serde(default = "default_timeout_secs")]
    pub timeout: u64,

    /// URL scheme (http or https)
    #[cfg_attr(
        feature = "config",
        arg(long = "qdrant-scheme", env = "QDRANT_SCHEME", default_value = "http")
    )]
    #[serde(default)]
    pub scheme: Scheme,

    /// User-Agent header to send with requests
    #[cfg_attr(
        feature = "config",
        arg(long = "qdrant-user-agent", env = "QDRANT_USER_AGENT")
    )]
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_owned()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("scheme", &self.scheme)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_key: None,
            timeout: default_timeout_secs(),
            scheme: Scheme::default(),
            user_agent: None,
        }
    }
}

impl ConnectionConfig {
    /// Creates a configuration for the given host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the timeout in seconds.
    #[must_use]
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout = timeout_secs;
        self
    }

    /// Set the URL scheme.
    #[must_use]
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Set the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Returns the timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Returns the effective timeout, using default if zero.
    pub fn effective_timeout(&self) -> Duration {
        if self.timeout == 0 {
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        } else {
            self.timeout()
        }
    }

    /// Returns the effective user agent, using default if not set.
    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(Self::default_user_agent)
    }

    /// Returns the default user agent string.
    fn default_user_agent() -> String {
        format!("qdrant-rest/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Builds the base URL, `{scheme}://{host}:{port}`.
    ///
    /// # Errors
    ///
    /// Returns a network error if the host cannot form a valid URL.
    pub fn base_url(&self) -> Result<Url> {
        let raw = format!("{}://{}:{}", self.scheme, self.host, self.port);
        Url::parse(&raw).map_err(|e| {
            Error::network()
                .with_message(format!("Invalid Qdrant base URL '{raw}'"))
                .with_source(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConnectionConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 6333);
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.scheme, Scheme::Http);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ConnectionConfig::new("qdrant.internal", 7000)
            .with_api_key("secret")
            .with_timeout(5)
            .with_scheme(Scheme::Https)
            .with_user_agent("custom-agent/1.0");

        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout, 5);
        assert_eq!(config.effective_user_agent(), "custom-agent/1.0");
        assert_eq!(
            config.base_url().unwrap().as_str(),
            "https://qdrant.internal:7000/"
        );
    }

    #[test]
    fn test_effective_timeout_uses_default_when_zero() {
        let config = ConnectionConfig::default().with_timeout(0);
        assert_eq!(
            config.effective_timeout(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn test_effective_user_agent_uses_default_when_none() {
        let config = ConnectionConfig::default();
        assert!(config.effective_user_agent().starts_with("qdrant-rest/"));
    }

    #[test]
    fn test_invalid_host_is_network_error() {
        let config = ConnectionConfig::new("bad host", 6333);
        let error = config.base_url().unwrap_err();
        assert!(error.is_network());
        assert_eq!(error.status_code(), 0);
    }

    #[test]
    fn test_scheme_from_str() {
        assert_eq!(Scheme::from_str("http").unwrap(), Scheme::Http);
        assert_eq!(Scheme::from_str("HTTPS").unwrap(), Scheme::Https);
        assert!(Scheme::from_str("ftp").is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ConnectionConfig =
            serde_json::from_str(r#"{"host": "db", "api_key": "k"}"#).unwrap();
        assert_eq!(config.host, "db");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ConnectionConfig::default().with_api_key("top-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("top-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
