//! Request signer.

use super::{
    hmac_sha512_base64, string_to_sign, QueuePayload, Timestamp, CONTENT_TYPE, HEADER_AUTH,
    HEADER_CONTENT_TYPE, HEADER_KEY, HEADER_TIME,
};
use crate::credentials::Credentials;
use crate::error::SigningError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::collections::HashMap;
use tracing::trace;

/// Authentication metadata for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// Request path, without the domain.
    pub uri: String,
    /// Request time in Unix seconds.
    pub timestamp: String,
    /// API key, verbatim.
    pub api_key: String,
    /// Base64 HMAC-SHA512 signature.
    pub signature: String,
    /// Always `text/json`.
    pub content_type: &'static str,
}

impl SignedRequest {
    /// The four headers every authenticated call must carry.
    pub fn headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::with_capacity(4);
        headers.insert(HEADER_TIME.to_string(), self.timestamp.clone());
        headers.insert(HEADER_KEY.to_string(), self.api_key.clone());
        headers.insert(HEADER_AUTH.to_string(), self.signature.clone());
        headers.insert(HEADER_CONTENT_TYPE.to_string(), self.content_type.to_string());
        headers
    }
}

/// Signs requests with one immutable key/secret pair.
///
/// The signer holds no other state, so a single instance can be shared by
/// every service and called from any number of tasks.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    /// Create a signer for the given credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// The API key sent in `X-LS-Key`.
    pub fn api_key(&self) -> &str {
        self.credentials.key()
    }

    /// Compute the signature for a path, time and optional JSON body.
    ///
    /// Pure: identical inputs always give the identical signature.
    ///
    /// # Errors
    ///
    /// [`SigningError::InvalidSecret`] if the secret is not valid base64.
    pub fn signature(
        &self,
        uri: &str,
        timestamp: Timestamp,
        body: Option<&str>,
    ) -> Result<String, SigningError> {
        let key = self.credentials.decode_secret()?;
        let message = string_to_sign(uri, timestamp, body);
        trace!(uri, %timestamp, len = message.len(), "computing request signature");
        hmac_sha512_base64(&key, message.as_bytes())
    }

    /// Sign a request for direct dispatch.
    pub fn sign(
        &self,
        uri: &str,
        timestamp: Timestamp,
        body: Option<&str>,
    ) -> Result<SignedRequest, SigningError> {
        let signature = self.signature(uri, timestamp, body)?;

        Ok(SignedRequest {
            uri: uri.to_string(),
            timestamp: timestamp.to_string(),
            api_key: self.api_key().to_string(),
            signature,
            content_type: CONTENT_TYPE,
        })
    }

    /// Sign a request without sending it, packing everything a replaying
    /// process needs into a [`QueuePayload`].
    pub fn queue_payload(
        &self,
        uri: &str,
        timestamp: Timestamp,
        body: &str,
    ) -> Result<QueuePayload, SigningError> {
        let signed = self.sign(uri, timestamp, Some(body))?;

        Ok(QueuePayload {
            api_key: signed.api_key,
            signature: signed.signature,
            time: signed.timestamp,
            url: signed.uri,
            payload: encode_payload(body),
        })
    }
}

/// Base64-encode a JSON body for the wire.
pub fn encode_payload(json: &str) -> String {
    STANDARD.encode(json.as_bytes())
}
