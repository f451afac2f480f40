//! Deferred request envelopes.

use super::{SignedRequest, CONTENT_TYPE};
use crate::error::RequestError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// A pre-signed request that can be handed to a queue or broker and replayed
/// later by any holder, without access to the secret.
///
/// `payload` is the base64 of the JSON body and is sent verbatim as the POST
/// body on replay; `url` is the request path without the domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuePayload {
    /// API key, verbatim.
    pub api_key: String,
    /// Base64 HMAC-SHA512 signature.
    pub signature: String,
    /// Signing time in Unix seconds.
    pub time: String,
    /// Request path.
    pub url: String,
    /// Base64 of the JSON body.
    pub payload: String,
}

impl QueuePayload {
    /// Serialize the envelope to JSON for a broker.
    pub fn to_json(&self) -> Result<String, RequestError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Read an envelope back from JSON.
    ///
    /// # Errors
    ///
    /// [`RequestError::MalformedQueuePayload`] if the JSON does not match the
    /// envelope shape or `url` is not an absolute path.
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        let payload: Self =
            serde_json::from_str(json).map_err(|e| RequestError::MalformedQueuePayload {
                message: e.to_string(),
            })?;
        payload.validate()?;
        Ok(payload)
    }

    /// Check that `url` is a path. Anything else would be appended to the
    /// endpoint host and could redirect the signed request elsewhere.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.url.starts_with('/') {
            Ok(())
        } else {
            Err(RequestError::MalformedQueuePayload {
                message: format!("url '{}' is not an absolute path", self.url),
            })
        }
    }

    /// Authentication metadata carried by the envelope, for replay.
    pub fn signed_request(&self) -> SignedRequest {
        SignedRequest {
            uri: self.url.clone(),
            timestamp: self.time.clone(),
            api_key: self.api_key.clone(),
            signature: self.signature.clone(),
            content_type: CONTENT_TYPE,
        }
    }

    /// Decode `payload` back into the JSON body bytes.
    pub fn decode_payload(&self) -> Result<Vec<u8>, RequestError> {
        STANDARD
            .decode(self.payload.as_bytes())
            .map_err(|e| RequestError::MalformedQueuePayload {
                message: e.to_string(),
            })
    }
}
