//! Client configuration.
//!
//! The only required inputs are the API key and the base64 secret. Everything
//! else has a default and only affects the default HTTP transport.

use crate::credentials::Credentials;
use crate::error::{ConfigurationError, Result};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Default API host.
pub const DEFAULT_ENDPOINT: &str = "https://api.turret.io";

/// Configuration for the Turret.IO client.
#[derive(Clone)]
pub struct TurretConfig {
    /// API key and secret.
    pub credentials: Credentials,

    /// Base URL that request paths are appended to.
    pub endpoint: Url,

    /// Connection timeout for the default transport.
    pub connect_timeout: Duration,

    /// Read timeout for the default transport.
    pub read_timeout: Duration,

    /// Maximum idle connections per host for the default transport.
    pub pool_max_idle_per_host: usize,

    /// User-Agent sent by the default transport.
    pub user_agent: String,
}

impl TurretConfig {
    /// Create a new configuration builder.
    pub fn builder() -> TurretConfigBuilder {
        TurretConfigBuilder::default()
    }

    /// Full URL for a request path.
    ///
    /// The path is appended verbatim, without percent-encoding, because the
    /// same text is part of the signature.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.endpoint.as_str().trim_end_matches('/'), path)
    }
}

impl fmt::Debug for TurretConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TurretConfig")
            .field("credentials", &self.credentials)
            .field("endpoint", &self.endpoint.as_str())
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .field("pool_max_idle_per_host", &self.pool_max_idle_per_host)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for [`TurretConfig`].
#[derive(Default)]
pub struct TurretConfigBuilder {
    key: Option<String>,
    secret: Option<String>,
    endpoint: Option<String>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    pool_max_idle_per_host: Option<usize>,
    user_agent: Option<String>,
}

impl TurretConfigBuilder {
    /// Set the API key and base64 secret.
    pub fn credentials(mut self, key: impl Into<String>, secret: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self.secret = Some(secret.into());
        self
    }

    /// Override the API endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the read timeout.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Set the maximum idle connections per host.
    pub fn pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = Some(max);
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the configuration.
    ///
    /// The secret is not decoded here; see [`Credentials::new`].
    pub fn build(self) -> Result<TurretConfig> {
        let key = self
            .key
            .filter(|k| !k.is_empty())
            .ok_or(ConfigurationError::MissingApiKey)?;
        let secret = self
            .secret
            .filter(|s| !s.is_empty())
            .ok_or(ConfigurationError::MissingSecret)?;

        let raw_endpoint = self
            .endpoint
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint =
            Url::parse(&raw_endpoint).map_err(|e| ConfigurationError::InvalidEndpoint {
                endpoint: raw_endpoint.clone(),
                message: e.to_string(),
            })?;

        Ok(TurretConfig {
            credentials: Credentials::new(key, secret),
            endpoint,
            connect_timeout: self.connect_timeout.unwrap_or(Duration::from_secs(5)),
            read_timeout: self.read_timeout.unwrap_or(Duration::from_secs(30)),
            pool_max_idle_per_host: self.pool_max_idle_per_host.unwrap_or(10),
            user_agent: self
                .user_agent
                .unwrap_or_else(|| format!("turret-io-rust/{}", env!("CARGO_PKG_VERSION"))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TurretError;

    #[test]
    fn test_builder_defaults() {
        let config = TurretConfig::builder()
            .credentials("k1", "c2VjcmV0")
            .build()
            .unwrap();

        assert_eq!(config.credentials.key(), "k1");
        assert_eq!(config.endpoint.as_str(), "https://api.turret.io/");
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.read_timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("turret-io-rust/"));
    }

    #[test]
    fn test_url_for_appends_path_verbatim() {
        let config = TurretConfig::builder()
            .credentials("k1", "c2VjcmV0")
            .build()
            .unwrap();
        assert_eq!(
            config.url_for("/latest/user/a@b.com"),
            "https://api.turret.io/latest/user/a@b.com"
        );

        let config = TurretConfig::builder()
            .credentials("k1", "c2VjcmV0")
            .endpoint("http://127.0.0.1:8080/")
            .build()
            .unwrap();
        assert_eq!(
            config.url_for("/latest/account"),
            "http://127.0.0.1:8080/latest/account"
        );
    }

    #[test]
    fn test_missing_credentials() {
        let err = TurretConfig::builder().build().unwrap_err();
        assert!(matches!(
            err,
            TurretError::Configuration(ConfigurationError::MissingApiKey)
        ));

        let err = TurretConfig::builder()
            .credentials("k1", "")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            TurretError::Configuration(ConfigurationError::MissingSecret)
        ));
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = TurretConfig::builder()
            .credentials("k1", "c2VjcmV0")
            .endpoint("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            TurretError::Configuration(ConfigurationError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_undecodable_secret_is_accepted_at_build() {
        let config = TurretConfig::builder()
            .credentials("k1", "not base64!")
            .build();
        assert!(config.is_ok());
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = TurretConfig::builder()
            .credentials("k1", "c2VjcmV0")
            .build()
            .unwrap();
        assert!(!format!("{:?}", config).contains("c2VjcmV0"));
    }
}
