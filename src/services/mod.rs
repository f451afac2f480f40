//! Resource services for the Turret.IO API.
//!
//! Each service formats a path and a body for one resource family and hands
//! them to a shared [`Dispatcher`], which signs and sends the request. The
//! services differ only in path and body shape; signing is identical for all
//! of them.
//!
//! ```text
//! AccountService ─┐
//! TargetService ──┤
//! TargetEmailSvc ─┼──► Dispatcher ──► RequestSigner ──► HttpTransport
//! UserService ────┘
//! ```

pub mod account;
pub mod queue;
pub mod target;
pub mod target_email;
pub mod user;

pub use account::AccountService;
pub use queue::QueueService;
pub use target::TargetService;
pub use target_email::TargetEmailService;
pub use user::UserService;

use crate::config::TurretConfig;
use crate::error::{RequestError, Result};
use crate::signing::{encode_payload, QueuePayload, RequestSigner, Timestamp};
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Signs and sends requests on behalf of the resource services.
#[derive(Clone)]
pub struct Dispatcher {
    config: Arc<TurretConfig>,
    transport: Arc<dyn HttpTransport>,
    signer: Arc<RequestSigner>,
}

impl Dispatcher {
    /// Create a dispatcher.
    pub fn new(
        config: Arc<TurretConfig>,
        transport: Arc<dyn HttpTransport>,
        signer: Arc<RequestSigner>,
    ) -> Self {
        Self {
            config,
            transport,
            signer,
        }
    }

    /// Signed GET with no body.
    pub async fn get(&self, path: &str) -> Result<HttpResponse> {
        let timestamp = Timestamp::now();
        let signed = self.signer.sign(path, timestamp, None)?;

        let request = HttpRequest::new(HttpMethod::Get, self.config.url_for(path))
            .with_headers(signed.headers());

        self.send(request, path, timestamp).await
    }

    /// Signed POST; the body is sent as base64 of its JSON encoding.
    pub async fn post<T>(&self, path: &str, body: &T) -> Result<HttpResponse>
    where
        T: Serialize + ?Sized,
    {
        let json = encode_json(body)?;
        let timestamp = Timestamp::now();
        let signed = self.signer.sign(path, timestamp, Some(&json))?;

        let request = HttpRequest::new(HttpMethod::Post, self.config.url_for(path))
            .with_headers(signed.headers())
            .with_body(encode_payload(&json));

        self.send(request, path, timestamp).await
    }

    /// Sign a POST without sending it.
    pub fn queue<T>(&self, path: &str, body: &T) -> Result<QueuePayload>
    where
        T: Serialize + ?Sized,
    {
        let json = encode_json(body)?;
        let timestamp = Timestamp::now();
        let payload = self.signer.queue_payload(path, timestamp, &json)?;

        debug!(uri = path, %timestamp, "queue request signed");
        Ok(payload)
    }

    async fn send(
        &self,
        request: HttpRequest,
        path: &str,
        timestamp: Timestamp,
    ) -> Result<HttpResponse> {
        let method = request.method;
        debug!(%method, uri = path, %timestamp, "dispatching signed request");

        let response = self.transport.send(request).await?;

        if response.is_success() {
            debug!(%method, uri = path, status = response.status, "request completed");
        } else {
            warn!(%method, uri = path, status = response.status, "API returned non-success status");
        }

        Ok(response)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("endpoint", &self.config.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

fn encode_json<T: Serialize + ?Sized>(body: &T) -> Result<String, RequestError> {
    Ok(serde_json::to_string(body)?)
}
