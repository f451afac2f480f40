//! Account service.

use super::Dispatcher;
use crate::config::TurretConfig;
use crate::error::Result;
use crate::signing::RequestSigner;
use crate::transport::{HttpResponse, HttpTransport};
use crate::types::{AccountSettings, OptionMap, OutgoingMethod};
use std::sync::Arc;

const ACCOUNT_PATH: &str = "/latest/account";
const ACCOUNT_ME_PATH: &str = "/latest/account/me";

/// Service for account configuration.
#[derive(Debug, Clone)]
pub struct AccountService {
    dispatcher: Dispatcher,
}

impl AccountService {
    /// Create a new account service.
    pub fn new(
        config: Arc<TurretConfig>,
        transport: Arc<dyn HttpTransport>,
        signer: Arc<RequestSigner>,
    ) -> Self {
        Self {
            dispatcher: Dispatcher::new(config, transport, signer),
        }
    }

    /// Fetch the account configuration.
    pub async fn get(&self) -> Result<HttpResponse> {
        self.dispatcher.get(ACCOUNT_PATH).await
    }

    /// Set the outgoing delivery method.
    ///
    /// Required credentials are checked before anything is signed or sent.
    ///
    /// # Errors
    ///
    /// `CredentialsNotProvided` when `aws` or `smtp` options are incomplete.
    pub async fn set(
        &self,
        method: OutgoingMethod,
        options: &OptionMap,
    ) -> Result<HttpResponse> {
        let settings = AccountSettings::new(method, options)?;
        self.dispatcher.post(ACCOUNT_ME_PATH, &settings).await
    }

    /// Same as [`set`](Self::set), with the method given by its wire name
    /// (`"turret.io"`, `"aws"` or `"smtp"`).
    pub async fn set_by_name(
        &self,
        method: &str,
        options: &OptionMap,
    ) -> Result<HttpResponse> {
        let method: OutgoingMethod = method.parse()?;
        self.set(method, options).await
    }
}
