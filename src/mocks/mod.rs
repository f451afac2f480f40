//! Mock implementations for testing.
//!
//! [`MockTransport`] records outgoing requests so tests can assert on the
//! exact method, URL, headers and body the client produced.

mod transport;

pub use transport::{MockResponse, MockResponseBuilder, MockTransport};

use crate::client::TurretClientImpl;
use crate::config::TurretConfig;
use crate::error::Result;
use crate::types::OptionMap;
use serde_json::Value;
use std::sync::Arc;

/// Test fixtures for Turret.IO operations.
pub struct TestFixtures;

impl TestFixtures {
    /// API key used by the fixtures.
    pub const API_KEY: &'static str = "k1";

    /// Base64 of `"secret"`.
    pub const SECRET: &'static str = "c2VjcmV0";

    /// Configuration with the fixture credentials and the default endpoint.
    pub fn config() -> Result<TurretConfig> {
        TurretConfig::builder()
            .credentials(Self::API_KEY, Self::SECRET)
            .build()
    }

    /// Client wired to the given mock transport.
    pub fn client(transport: Arc<MockTransport>) -> Result<TurretClientImpl> {
        Ok(TurretClientImpl::new(Self::config()?, transport))
    }

    /// Complete AWS option map.
    pub fn aws_options() -> OptionMap {
        Self::map(serde_json::json!({
            "aws_access_key": "a",
            "aws_secret_access_key": "b"
        }))
    }

    /// Complete SMTP option map.
    pub fn smtp_options() -> OptionMap {
        Self::map(serde_json::json!({
            "smtp_host": "smtp.example.com",
            "smtp_username": "mailer",
            "smtp_password": "hunter2"
        }))
    }

    /// Unwrap a JSON object into an option map; anything else is empty.
    pub fn map(value: Value) -> OptionMap {
        match value {
            Value::Object(map) => map,
            _ => OptionMap::new(),
        }
    }
}
