//! User service.

use super::Dispatcher;
use crate::config::TurretConfig;
use crate::error::Result;
use crate::signing::{QueuePayload, RequestSigner};
use crate::transport::{HttpResponse, HttpTransport};
use crate::types::{OptionMap, UserRecord};
use std::sync::Arc;

const USER_PATH: &str = "/latest/user";

/// Service for user profile records.
#[derive(Debug, Clone)]
pub struct UserService {
    dispatcher: Dispatcher,
}

impl UserService {
    /// Create a new user service.
    pub fn new(
        config: Arc<TurretConfig>,
        transport: Arc<dyn HttpTransport>,
        signer: Arc<RequestSigner>,
    ) -> Self {
        Self {
            dispatcher: Dispatcher::new(config, transport, signer),
        }
    }

    /// Fetch a user by email address.
    pub async fn get(&self, email: &str) -> Result<HttpResponse> {
        self.dispatcher.get(&user_path(email)).await
    }

    /// Create or update a user.
    ///
    /// `properties` defaults to an empty map. Neither map is modified.
    pub async fn set(
        &self,
        email: &str,
        attributes: &OptionMap,
        properties: Option<&OptionMap>,
    ) -> Result<HttpResponse> {
        let record = UserRecord::new(attributes, properties);
        self.dispatcher.post(&user_path(email), &record).await
    }

    /// Build and sign the same request as [`set`](Self::set) without sending
    /// it. The returned envelope can be serialized with
    /// [`QueuePayload::to_json`] and replayed later by
    /// [`QueueService::dispatch`](super::QueueService::dispatch).
    pub fn queue_set(
        &self,
        email: &str,
        attributes: &OptionMap,
        properties: Option<&OptionMap>,
    ) -> Result<QueuePayload> {
        let record = UserRecord::new(attributes, properties);
        self.dispatcher.queue(&user_path(email), &record)
    }
}

fn user_path(email: &str) -> String {
    format!("{}/{}", USER_PATH, email)
}
