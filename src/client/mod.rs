//! Turret.IO client implementation.
//!
//! This module provides the main client interface and builder.

use crate::config::TurretConfig;
use crate::error::Result;
use crate::services::{
    AccountService, QueueService, TargetEmailService, TargetService, UserService,
};
use crate::signing::RequestSigner;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::RecipientGroup;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Turret.IO client trait.
pub trait TurretClient: Send + Sync {
    /// Get the account service.
    fn account(&self) -> &AccountService;

    /// Get the target service.
    fn targets(&self) -> &TargetService;

    /// Get the legacy segment service.
    fn segments(&self) -> &TargetService;

    /// Get the target email service.
    fn target_emails(&self) -> &TargetEmailService;

    /// Get the legacy segment email service.
    fn segment_emails(&self) -> &TargetEmailService;

    /// Get the user service.
    fn users(&self) -> &UserService;

    /// Get the queued-request service.
    fn queue(&self) -> &QueueService;

    /// Get the client configuration.
    fn config(&self) -> &TurretConfig;

    /// Get the request signer.
    fn signer(&self) -> &RequestSigner;
}

/// Turret.IO client implementation.
pub struct TurretClientImpl {
    config: Arc<TurretConfig>,
    transport: Arc<dyn HttpTransport>,
    signer: Arc<RequestSigner>,

    // Lazy-initialized services
    account: OnceCell<AccountService>,
    targets: OnceCell<TargetService>,
    segments: OnceCell<TargetService>,
    target_emails: OnceCell<TargetEmailService>,
    segment_emails: OnceCell<TargetEmailService>,
    users: OnceCell<UserService>,
    queue: OnceCell<QueueService>,
}

impl TurretClientImpl {
    /// Create a new client with the given configuration and transport.
    pub fn new(config: TurretConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let signer = Arc::new(RequestSigner::new(config.credentials.clone()));

        Self {
            config: Arc::new(config),
            transport,
            signer,
            account: OnceCell::new(),
            targets: OnceCell::new(),
            segments: OnceCell::new(),
            target_emails: OnceCell::new(),
            segment_emails: OnceCell::new(),
            users: OnceCell::new(),
            queue: OnceCell::new(),
        }
    }

    fn recipient_service(&self, group: RecipientGroup) -> TargetService {
        TargetService::new(
            group,
            self.config.clone(),
            self.transport.clone(),
            self.signer.clone(),
        )
    }

    fn email_service(&self, group: RecipientGroup) -> TargetEmailService {
        TargetEmailService::new(
            group,
            self.config.clone(),
            self.transport.clone(),
            self.signer.clone(),
        )
    }
}

impl TurretClient for TurretClientImpl {
    fn account(&self) -> &AccountService {
        self.account.get_or_init(|| {
            AccountService::new(
                self.config.clone(),
                self.transport.clone(),
                self.signer.clone(),
            )
        })
    }

    fn targets(&self) -> &TargetService {
        self.targets
            .get_or_init(|| self.recipient_service(RecipientGroup::Target))
    }

    fn segments(&self) -> &TargetService {
        self.segments
            .get_or_init(|| self.recipient_service(RecipientGroup::Segment))
    }

    fn target_emails(&self) -> &TargetEmailService {
        self.target_emails
            .get_or_init(|| self.email_service(RecipientGroup::Target))
    }

    fn segment_emails(&self) -> &TargetEmailService {
        self.segment_emails
            .get_or_init(|| self.email_service(RecipientGroup::Segment))
    }

    fn users(&self) -> &UserService {
        self.users.get_or_init(|| {
            UserService::new(
                self.config.clone(),
                self.transport.clone(),
                self.signer.clone(),
            )
        })
    }

    fn queue(&self) -> &QueueService {
        self.queue
            .get_or_init(|| QueueService::new(self.config.clone(), self.transport.clone()))
    }

    fn config(&self) -> &TurretConfig {
        &self.config
    }

    fn signer(&self) -> &RequestSigner {
        &self.signer
    }
}

impl std::fmt::Debug for TurretClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurretClientImpl")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builder for the Turret.IO client.
#[derive(Default)]
pub struct TurretClientBuilder {
    config: Option<TurretConfig>,
    credentials: Option<(String, String)>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl TurretClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the provided configuration.
    pub fn config(mut self, config: TurretConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use default configuration with the given API key and secret.
    ///
    /// Ignored when [`config`](Self::config) is also set.
    pub fn credentials(mut self, key: impl Into<String>, secret: impl Into<String>) -> Self {
        self.credentials = Some((key.into(), secret.into()));
        self
    }

    /// Use a custom HTTP transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Configuration errors if no usable key and secret were given, or if
    /// the HTTP client cannot be constructed.
    pub fn build(self) -> Result<TurretClientImpl> {
        let config = match (self.config, self.credentials) {
            (Some(config), _) => config,
            (None, Some((key, secret))) => {
                TurretConfig::builder().credentials(key, secret).build()?
            }
            (None, None) => TurretConfig::builder().build()?,
        };

        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let builder = ReqwestTransport::builder()
                    .connect_timeout(config.connect_timeout)
                    .read_timeout(config.read_timeout)
                    .pool_max_idle_per_host(config.pool_max_idle_per_host)
                    .user_agent(config.user_agent.clone());

                Arc::new(builder.build()?)
            }
        };

        Ok(TurretClientImpl::new(config, transport))
    }
}
