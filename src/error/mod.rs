//! Error types for the Turret.IO client.
//!
//! Errors are grouped by where they originate. Configuration, signing and
//! request errors are raised locally before anything is sent; network errors
//! come from the transport and are passed through untouched.
//!
//! A non-2xx answer from the API is not an error at this layer: the raw
//! [`HttpResponse`](crate::transport::HttpResponse) is handed back to the caller.

use crate::types::CredentialSet;
use thiserror::Error;

/// Top-level error type for the Turret.IO client.
#[derive(Debug, Error)]
pub enum TurretError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Request signing errors.
    #[error("Signing error: {0}")]
    Signing(#[from] SigningError),

    /// Local request validation and encoding errors.
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    /// Network and transport errors.
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),
}

impl TurretError {
    /// Returns true if the stored secret could not be decoded.
    pub fn is_invalid_secret(&self) -> bool {
        matches!(self, TurretError::Signing(SigningError::InvalidSecret { .. }))
    }

    /// Returns true if required outgoing-method credentials were missing.
    pub fn is_credentials_not_provided(&self) -> bool {
        matches!(
            self,
            TurretError::Request(RequestError::CredentialsNotProvided { .. })
        )
    }

    /// Returns true if the error came from the transport.
    pub fn is_network(&self) -> bool {
        matches!(self, TurretError::Network(_))
    }
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// No API key was supplied.
    #[error("Missing API key: an API key must be supplied at construction")]
    MissingApiKey,

    /// No secret was supplied.
    #[error("Missing secret: a base64 secret must be supplied at construction")]
    MissingSecret,

    /// The API endpoint could not be parsed.
    #[error("Invalid endpoint '{endpoint}': {message}")]
    InvalidEndpoint {
        /// The rejected endpoint.
        endpoint: String,
        /// Parser message.
        message: String,
    },

    /// The default HTTP client could not be constructed from the settings.
    #[error("Invalid HTTP client settings: {message}")]
    HttpClient {
        /// Builder message.
        message: String,
    },
}

/// Errors raised while signing a request.
#[derive(Debug, Error)]
pub enum SigningError {
    /// The secret is not valid base64.
    #[error("Invalid secret: {message}")]
    InvalidSecret {
        /// Decoder message. Never contains secret material.
        message: String,
    },
}

/// Local request errors, raised before any network call.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Credentials required by the chosen outgoing method are missing.
    #[error("{credential_set} credentials not provided (missing: {})", .missing.join(", "))]
    CredentialsNotProvided {
        /// Which credential set was incomplete.
        credential_set: CredentialSet,
        /// Option keys that were absent.
        missing: Vec<&'static str>,
    },

    /// The outgoing method name is not recognised.
    #[error("Unsupported outgoing method '{method}'")]
    UnsupportedOutgoingMethod {
        /// The rejected method name.
        method: String,
    },

    /// The request body could not be encoded as JSON.
    #[error("Failed to serialize request body: {message}")]
    Serialization {
        /// Encoder message.
        message: String,
    },

    /// A queued request envelope could not be read.
    #[error("Malformed queue payload: {message}")]
    MalformedQueuePayload {
        /// Decoder message.
        message: String,
    },
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        RequestError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Network-level errors reported by a transport.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Connection failed.
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Error message.
        message: String,
    },

    /// Request timed out.
    #[error("Request timed out: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// The response body could not be read.
    #[error("Failed to read response body: {message}")]
    Body {
        /// Error message.
        message: String,
    },
}

/// Result type alias for Turret.IO operations.
pub type Result<T, E = TurretError> = std::result::Result<T, E>;
