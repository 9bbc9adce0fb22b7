//! Admin dashboard context
//!
//! Carries the session store, the configured credentials, and the resource
//! table for one dashboard session.

use std::sync::Arc;
use thiserror::Error;

use common::{ClientConfig, SessionStore, StoreError, connect_session_store};

use crate::{
    credentials::{AdminCredentials, CredentialError},
    gate::{self, GateOutcome},
    repositories::ResourceTable,
    session::{AdminSession, Page, PageAccess},
    sidebar::SidebarState,
};

/// Error raised while building an admin context
#[derive(Error, Debug)]
pub enum AdminError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Credentials(#[from] CredentialError),
}

/// State for one admin dashboard session
pub struct AdminContext {
    store: Arc<dyn SessionStore>,
    credentials: AdminCredentials,
    pub table: ResourceTable,
}

impl AdminContext {
    pub fn new(
        store: Arc<dyn SessionStore>,
        credentials: AdminCredentials,
        table: ResourceTable,
    ) -> Self {
        Self {
            store,
            credentials,
            table,
        }
    }

    /// Build a context from configuration with the demo catalogue
    pub async fn from_config(config: &ClientConfig) -> Result<Self, AdminError> {
        let store = connect_session_store(config).await?;
        let credentials = AdminCredentials::from_config(config)?;
        Ok(Self::new(store, credentials, ResourceTable::with_mock_data()))
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    /// Attempt an admin login
    pub async fn login(&self, email: &str, password: &str) -> Result<GateOutcome, StoreError> {
        gate::login(self.store(), &self.credentials, email, password).await
    }

    /// Page-load login check
    pub async fn page_access(&self) -> Result<PageAccess, StoreError> {
        AdminSession::load(self.store()).await
    }

    pub async fn logout(&self) -> Result<Page, StoreError> {
        AdminSession::logout(self.store()).await
    }

    pub async fn sidebar(&self) -> Result<SidebarState, StoreError> {
        SidebarState::load(self.store()).await
    }
}
