//! Replay of queued request envelopes.

use crate::config::TurretConfig;
use crate::error::Result;
use crate::signing::QueuePayload;
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use std::sync::Arc;
use tracing::{debug, warn};

/// Sends pre-signed [`QueuePayload`] envelopes.
///
/// Needs no credentials: the envelope already carries the key and the
/// signature, and the payload is sent exactly as it was signed.
#[derive(Clone)]
pub struct QueueService {
    config: Arc<TurretConfig>,
    transport: Arc<dyn HttpTransport>,
}

impl QueueService {
    /// Create a new queue service.
    pub fn new(config: Arc<TurretConfig>, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// POST a queued envelope.
    ///
    /// # Errors
    ///
    /// `MalformedQueuePayload` if the envelope's `url` is not a path; nothing
    /// is sent in that case.
    pub async fn dispatch(&self, payload: &QueuePayload) -> Result<HttpResponse> {
        payload.validate()?;
        let signed = payload.signed_request();
        let request = HttpRequest::new(HttpMethod::Post, self.config.url_for(&payload.url))
            .with_headers(signed.headers())
            .with_body(payload.payload.clone());

        debug!(uri = %payload.url, time = %payload.time, "replaying queued request");
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            warn!(uri = %payload.url, status = response.status, "queued request rejected");
        }

        Ok(response)
    }

    /// Parse an envelope from its JSON form and POST it.
    pub async fn dispatch_json(&self, json: &str) -> Result<HttpResponse> {
        let payload = QueuePayload::from_json(json)?;
        self.dispatch(&payload).await
    }
}

impl std::fmt::Debug for QueueService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueueService")
            .field("endpoint", &self.config.endpoint.as_str())
            .finish_non_exhaustive()
    }
}
