//! Target and segment service.

use super::Dispatcher;
use crate::config::TurretConfig;
use crate::error::Result;
use crate::signing::RequestSigner;
use crate::transport::{HttpResponse, HttpTransport};
use crate::types::{RecipientGroup, TargetAttributes};
use serde_json::Value;
use std::sync::Arc;

/// Service for targets (or legacy segments).
#[derive(Debug, Clone)]
pub struct TargetService {
    group: RecipientGroup,
    dispatcher: Dispatcher,
}

impl TargetService {
    /// Create a new service for the given recipient group.
    pub fn new(
        group: RecipientGroup,
        config: Arc<TurretConfig>,
        transport: Arc<dyn HttpTransport>,
        signer: Arc<RequestSigner>,
    ) -> Self {
        Self {
            group,
            dispatcher: Dispatcher::new(config, transport, signer),
        }
    }

    /// The recipient group this service addresses.
    pub fn group(&self) -> RecipientGroup {
        self.group
    }

    /// Fetch a target by name.
    pub async fn get(&self, name: &str) -> Result<HttpResponse> {
        self.dispatcher.get(&self.group.path(name)).await
    }

    /// Create a target with the given attribute list.
    pub async fn create(
        &self,
        name: &str,
        attributes: Vec<Value>,
    ) -> Result<HttpResponse> {
        let body = TargetAttributes { attributes };
        self.dispatcher.post(&self.group.path(name), &body).await
    }

    /// Replace a target's attribute list.
    ///
    /// Same path and body as [`create`](Self::create); the server decides
    /// between insert and update.
    pub async fn update(
        &self,
        name: &str,
        attributes: Vec<Value>,
    ) -> Result<HttpResponse> {
        let body = TargetAttributes { attributes };
        self.dispatcher.post(&self.group.path(name), &body).await
    }
}
