//! Admin session state kept in the session store

use common::{SessionStore, StoreError};
use tracing::info;

/// Set to `"true"` after a successful admin login
pub const IS_LOGGED_IN_KEY: &str = "isLoggedIn";

/// Email of the logged-in admin, shown as display name
pub const ADMIN_EMAIL_KEY: &str = "adminEmail";

/// Display name used when the email key is missing
pub const FALLBACK_DISPLAY_NAME: &str = "Admin";

/// Admin pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Dashboard,
}

/// Result of the page-load login check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAccess {
    Granted { display_name: String },
    RedirectToLogin,
}

/// Reads and clears the admin login markers
pub struct AdminSession;

impl AdminSession {
    /// Page-load check: read both keys and decide whether to render
    pub async fn load(store: &dyn SessionStore) -> Result<PageAccess, StoreError> {
        let logged_in = store.get(IS_LOGGED_IN_KEY).await?;
        if logged_in.as_deref() != Some("true") {
            return Ok(PageAccess::RedirectToLogin);
        }

        let display_name = store
            .get(ADMIN_EMAIL_KEY)
            .await?
            .filter(|email| !email.is_empty())
            .unwrap_or_else(|| FALLBACK_DISPLAY_NAME.to_string());

        Ok(PageAccess::Granted { display_name })
    }

    /// Record a successful login
    ///
    /// The login flag is written last, so a failed write never leaves a
    /// session that [`AdminSession::load`] would grant.
    pub(crate) async fn persist(store: &dyn SessionStore, email: &str) -> Result<(), StoreError> {
        store.set(ADMIN_EMAIL_KEY, email).await?;
        store.set(IS_LOGGED_IN_KEY, "true").await?;
        Ok(())
    }

    /// Clear the login markers and return to the login page
    pub async fn logout(store: &dyn SessionStore) -> Result<Page, StoreError> {
        store.remove(IS_LOGGED_IN_KEY).await?;
        store.remove(ADMIN_EMAIL_KEY).await?;
        info!("Admin logged out");
        Ok(Page::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use common::InMemorySessionStore;

    /// Store whose writes to one key always fail
    struct FailingKeyStore {
        inner: InMemorySessionStore,
        failing_key: &'static str,
    }

    #[async_trait]
    impl SessionStore for FailingKeyStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if key == self.failing_key {
                return Err(StoreError::Configuration(format!("write to {key} refused")));
            }
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.inner.remove(key).await
        }
    }

    #[tokio::test]
    async fn test_empty_store_redirects() -> Result<(), StoreError> {
        let store = InMemorySessionStore::new();
        assert_eq!(
            AdminSession::load(&store).await?,
            PageAccess::RedirectToLogin
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_non_true_flag_redirects() -> Result<(), StoreError> {
        let store = InMemorySessionStore::new();
        store.set(IS_LOGGED_IN_KEY, "yes").await?;
        store.set(ADMIN_EMAIL_KEY, "admin@music.com").await?;
        assert_eq!(
            AdminSession::load(&store).await?,
            PageAccess::RedirectToLogin
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_email_falls_back() -> Result<(), StoreError> {
        let store = InMemorySessionStore::new();
        store.set(IS_LOGGED_IN_KEY, "true").await?;
        assert_eq!(
            AdminSession::load(&store).await?,
            PageAccess::Granted {
                display_name: FALLBACK_DISPLAY_NAME.to_string()
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_email_write_grants_nothing() -> Result<(), StoreError> {
        let store = FailingKeyStore {
            inner: InMemorySessionStore::new(),
            failing_key: ADMIN_EMAIL_KEY,
        };

        assert!(AdminSession::persist(&store, "admin@music.com").await.is_err());
        assert_eq!(
            AdminSession::load(&store).await?,
            PageAccess::RedirectToLogin
        );
        assert!(store.inner.is_empty().await);
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_flag_write_grants_nothing() -> Result<(), StoreError> {
        let store = FailingKeyStore {
            inner: InMemorySessionStore::new(),
            failing_key: IS_LOGGED_IN_KEY,
        };

        assert!(AdminSession::persist(&store, "admin@music.com").await.is_err());
        assert_eq!(
            AdminSession::load(&store).await?,
            PageAccess::RedirectToLogin
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_logout_clears_keys() -> Result<(), StoreError> {
        let store = InMemorySessionStore::new();
        AdminSession::persist(&store, "admin@music.com").await?;
        assert_eq!(
            AdminSession::load(&store).await?,
            PageAccess::Granted {
                display_name: "admin@music.com".to_string()
            }
        );

        assert_eq!(AdminSession::logout(&store).await?, Page::Login);
        assert!(store.is_empty().await);
        Ok(())
    }
}
