//! Turret.IO request signing.
//!
//! Every authenticated call carries an HMAC-SHA512 signature computed over a
//! string-to-sign built from the request path, the JSON body (if any) and the
//! request time:
//!
//! ```text
//! string_to_sign = uri || body || timestamp     (body present and non-empty)
//! string_to_sign = uri || timestamp             (otherwise)
//! signature      = base64(HMAC-SHA512(base64_decode(secret), string_to_sign))
//! ```
//!
//! The body used in the string-to-sign is the exact JSON text that is
//! transmitted (base64-encoded) on the wire, so client and server hash the
//! same bytes.
//!
//! Signatures are attached either as headers for direct dispatch
//! ([`SignedRequest`]) or packed into a [`QueuePayload`] that another process
//! can replay later without the secret.
//!
//! # Example
//!
//! ```
//! use turret_io::credentials::Credentials;
//! use turret_io::signing::{RequestSigner, Timestamp};
//!
//! let signer = RequestSigner::new(Credentials::new("k1", "c2VjcmV0"));
//! let signed = signer
//!     .sign("/latest/user/a@b.com", Timestamp::from_secs(1000), None)
//!     .unwrap();
//!
//! assert_eq!(signed.timestamp, "1000");
//! assert_eq!(signed.api_key, "k1");
//! ```

mod canonical;
mod queue;
mod signer;

pub use canonical::string_to_sign;
pub use queue::QueuePayload;
pub use signer::{encode_payload, RequestSigner, SignedRequest};

use crate::error::SigningError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use std::fmt;

type HmacSha512 = Hmac<Sha512>;

/// Header carrying the request time in Unix seconds.
pub const HEADER_TIME: &str = "X-LS-Time";

/// Header carrying the API key.
pub const HEADER_KEY: &str = "X-LS-Key";

/// Header carrying the base64 signature.
pub const HEADER_AUTH: &str = "X-LS-Auth";

/// Content-Type header name.
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";

/// Content type sent with every authenticated call.
pub const CONTENT_TYPE: &str = "text/json";

/// Request time in whole seconds since the Unix epoch.
///
/// Renders as a plain decimal integer: no sign, no leading zeros, no
/// fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Current wall-clock time.
    pub fn now() -> Self {
        // Clocks set before 1970 clamp to the epoch.
        Self(u64::try_from(Utc::now().timestamp()).unwrap_or(0))
    }

    /// Timestamp from explicit Unix seconds.
    pub fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Unix seconds.
    pub fn as_secs(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compute base64(HMAC-SHA512(key, data)).
pub fn hmac_sha512_base64(key: &[u8], data: &[u8]) -> Result<String, SigningError> {
    let mut mac = HmacSha512::new_from_slice(key).map_err(|e| SigningError::InvalidSecret {
        message: e.to_string(),
    })?;
    mac.update(data);
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
