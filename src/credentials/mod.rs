//! API credentials.
//!
//! A Turret.IO identity is an opaque API key plus a base64-encoded shared
//! secret. The secret is kept encoded; it is decoded only for the duration of
//! a single HMAC computation and the decoded bytes are zeroed on drop.

use crate::error::SigningError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use zeroize::Zeroizing;

/// API key and shared secret.
#[derive(Clone)]
pub struct Credentials {
    key: String,
    secret: SecretString,
}

impl Credentials {
    /// Create credentials from an API key and a base64-encoded secret.
    ///
    /// The secret is not validated here. An undecodable secret surfaces as
    /// [`SigningError::InvalidSecret`] the first time a request is signed.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: SecretString::new(secret.into()),
        }
    }

    /// Get the API key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns true if either the key or the secret is empty.
    pub fn is_incomplete(&self) -> bool {
        self.key.is_empty() || self.secret.expose_secret().is_empty()
    }

    /// Decode the secret into raw HMAC key bytes.
    ///
    /// Uses the standard alphabet with padding.
    pub fn decode_secret(&self) -> Result<Zeroizing<Vec<u8>>, SigningError> {
        STANDARD
            .decode(self.secret.expose_secret().as_bytes())
            .map(Zeroizing::new)
            .map_err(|e| SigningError::InvalidSecret {
                message: e.to_string(),
            })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_secret() {
        let creds = Credentials::new("k1", "c2VjcmV0");
        assert_eq!(creds.key(), "k1");
        assert_eq!(creds.decode_secret().unwrap().as_slice(), b"secret");
    }

    #[test]
    fn test_invalid_secret() {
        let creds = Credentials::new("k1", "not base64!");
        let err = creds.decode_secret().unwrap_err();
        assert!(matches!(err, SigningError::InvalidSecret { .. }));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::new("k1", "c2VjcmV0");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("k1"));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("c2VjcmV0"));
    }

    #[test]
    fn test_is_incomplete() {
        assert!(Credentials::new("", "c2VjcmV0").is_incomplete());
        assert!(Credentials::new("k1", "").is_incomplete());
        assert!(!Credentials::new("k1", "c2VjcmV0").is_incomplete());
    }
}
