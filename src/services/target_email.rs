//! Target and segment email service.

use super::Dispatcher;
use crate::config::TurretConfig;
use crate::error::Result;
use crate::signing::RequestSigner;
use crate::transport::{HttpResponse, HttpTransport};
use crate::types::{EmailContent, RecipientGroup, SendEmail, SendTestEmail};
use std::sync::Arc;

/// Service for the templated emails attached to a target (or segment).
#[derive(Debug, Clone)]
pub struct TargetEmailService {
    group: RecipientGroup,
    dispatcher: Dispatcher,
}

impl TargetEmailService {
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

    /// Fetch one email.
    pub async fn get(&self, target: &str, email_id: &str) -> Result<HttpResponse> {
        self.dispatcher
            .get(&self.group.email_path(target, email_id))
            .await
    }

    /// Create an email under a target.
    pub async fn create(
        &self,
        target: &str,
        content: &EmailContent,
    ) -> Result<HttpResponse> {
        self.dispatcher
            .post(&self.group.emails_path(target), content)
            .await
    }

    /// Update an existing email.
    pub async fn update(
        &self,
        target: &str,
        email_id: &str,
        content: &EmailContent,
    ) -> Result<HttpResponse> {
        self.dispatcher
            .post(&self.group.email_path(target, email_id), content)
            .await
    }

    /// Send the email to a single test recipient.
    pub async fn send_test(
        &self,
        target: &str,
        email_id: &str,
        email_from: &str,
        recipient: &str,
    ) -> Result<HttpResponse> {
        let path = format!("{}/sendTestEmail", self.group.email_path(target, email_id));
        let body = SendTestEmail {
            email_from: email_from.to_string(),
            recipient: recipient.to_string(),
        };
        self.dispatcher.post(&path, &body).await
    }

    /// Send the email to every member of the target.
    pub async fn send(
        &self,
        target: &str,
        email_id: &str,
        email_from: &str,
    ) -> Result<HttpResponse> {
        let path = format!("{}/sendEmail", self.group.email_path(target, email_id));
        let body = SendEmail {
            email_from: email_from.to_string(),
        };
        self.dispatcher.post(&path, &body).await
    }
}
