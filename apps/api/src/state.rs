use std::sync::Arc;

use parking_lot::Mutex;

use crate::auth::{AccountStore, AuthError, OAuthService, TokenIssuer};
use crate::config::Config;
use crate::progress::ProgressLedger;
use crate::roadmap::Catalog;
use crate::storage::LocalStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    /// The same store the ledger writes to; dashboard extras live beside it.
    pub store: Arc<dyn LocalStore>,
    pub ledger: Arc<Mutex<ProgressLedger>>,
    pub accounts: Arc<AccountStore>,
    pub tokens: Arc<TokenIssuer>,
    pub oauth: Arc<OAuthService>,
}

impl AppState {
    /// Loads the ledger from `store` and wires the auth services from `config`.
    pub fn new(
        config: Config,
        catalog: Arc<Catalog>,
        store: Arc<dyn LocalStore>,
    ) -> Result<Self, AuthError> {
        let oauth = OAuthService::from_config(&config)?;
        Ok(Self::with_oauth(config, catalog, store, oauth))
    }

    pub fn with_oauth(
        config: Config,
        catalog: Arc<Catalog>,
        store: Arc<dyn LocalStore>,
        oauth: OAuthService,
    ) -> Self {
        let ledger = ProgressLedger::load(catalog.clone(), store.clone());
        Self {
            tokens: Arc::new(TokenIssuer::new(&config.jwt_secret)),
            config,
            catalog,
            store,
            ledger: Arc::new(Mutex::new(ledger)),
            accounts: Arc::new(AccountStore::new()),
            oauth: Arc::new(oauth),
        }
    }
}
