//! Turret.IO API Client
//!
//! Type-safe async client for the Turret.IO email marketing API.
//!
//! # Features
//!
//! - **Request Signing**: HMAC-SHA512 over path, body and time, sent in the
//!   `X-LS-Time`, `X-LS-Key` and `X-LS-Auth` headers
//! - **Resources**: Account, Targets (and legacy Segments), Target emails,
//!   Users
//! - **Queued Requests**: sign a user update now, replay the envelope later
//!   without the secret
//! - **Pluggable Transport**: any [`HttpTransport`]; `reqwest` by default
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use turret_io::TurretClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), turret_io::TurretError> {
//!     let client = turret_io::create_client("my-key", "bXktc2VjcmV0")?;
//!
//!     let response = client.targets().get("newsletter").await?;
//!     println!("{}: {}", response.status, response.text());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod mocks;
pub mod services;
pub mod signing;
pub mod transport;
pub mod types;

// Re-export main types at crate root
pub use client::{TurretClient, TurretClientBuilder, TurretClientImpl};
pub use config::TurretConfig;
pub use credentials::Credentials;
pub use error::{
    ConfigurationError, NetworkError, RequestError, Result, SigningError, TurretError,
};
pub use services::{AccountService, QueueService, TargetEmailService, TargetService, UserService};
pub use signing::{QueuePayload, RequestSigner, SignedRequest, Timestamp};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use types::{
    AccountSettings, CredentialSet, EmailContent, OptionMap, OutgoingMethod, RecipientGroup,
    UserRecord,
};

/// Create a client for the default endpoint from an API key and a base64
/// secret.
///
/// The secret is only decoded when a request is signed, so a malformed
/// secret surfaces as [`SigningError::InvalidSecret`] on the first call.
///
/// # Example
///
/// ```rust,no_run
/// let client = turret_io::create_client("my-key", "bXktc2VjcmV0")?;
/// # Ok::<(), turret_io::TurretError>(())
/// ```
pub fn create_client(
    key: impl Into<String>,
    secret: impl Into<String>,
) -> Result<impl TurretClient> {
    TurretClientBuilder::new().credentials(key, secret).build()
}

/// Create a client with explicit configuration.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use turret_io::TurretConfig;
///
/// let config = TurretConfig::builder()
///     .credentials("my-key", "bXktc2VjcmV0")
///     .endpoint("https://staging.turret.io")
///     .read_timeout(Duration::from_secs(10))
///     .build()?;
///
/// let client = turret_io::create_client_with_config(config)?;
/// # Ok::<(), turret_io::TurretError>(())
/// ```
pub fn create_client_with_config(config: TurretConfig) -> Result<impl TurretClient> {
    TurretClientBuilder::new().config(config).build()
}
