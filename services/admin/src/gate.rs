//! Admin login gate
//!
//! This check runs entirely on the client and is not a security boundary.
//! Any real deployment must verify credentials on the server.

use common::{SessionStore, StoreError};
use tracing::{info, warn};

use crate::{
    credentials::AdminCredentials,
    session::{AdminSession, Page},
    view::LoginView,
};

/// Result of a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Login accepted; go to the page
    Navigate(Page),
    /// Login refused; show the error element
    Rejected(LoginView),
}

/// Check a login attempt and record the session on success
///
/// Nothing is written to the store when the attempt is refused.
pub async fn login(
    store: &dyn SessionStore,
    credentials: &AdminCredentials,
    email: &str,
    password: &str,
) -> Result<GateOutcome, StoreError> {
    if !credentials.verify(email, password) {
        warn!("Admin login refused for: {}", email);
        return Ok(GateOutcome::Rejected(LoginView::rejected()));
    }

    AdminSession::persist(store, credentials.email()).await?;
    info!("Admin login accepted for: {}", credentials.email());
    Ok(GateOutcome::Navigate(Page::Dashboard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{ADMIN_EMAIL_KEY, IS_LOGGED_IN_KEY};
    use common::{ClientConfig, InMemorySessionStore};

    fn default_credentials() -> AdminCredentials {
        AdminCredentials::from_config(&ClientConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_default_pair_navigates_and_persists() -> Result<(), StoreError> {
        let store = InMemorySessionStore::new();
        let outcome = login(&store, &default_credentials(), "admin@music.com", "admin123").await?;

        assert_eq!(outcome, GateOutcome::Navigate(Page::Dashboard));
        assert_eq!(store.get(IS_LOGGED_IN_KEY).await?, Some("true".to_string()));
        assert_eq!(
            store.get(ADMIN_EMAIL_KEY).await?,
            Some("admin@music.com".to_string())
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_other_pairs_are_rejected_and_persist_nothing() -> Result<(), StoreError> {
        let credentials = default_credentials();
        for (email, password) in [
            ("admin@music.com", "wrong"),
            ("someone@music.com", "admin123"),
            ("", ""),
            ("ADMIN@music.com", "admin123"),
        ] {
            let store = InMemorySessionStore::new();
            let outcome = login(&store, &credentials, email, password).await?;

            match outcome {
                GateOutcome::Rejected(view) => assert!(view.error_visible),
                other => panic!("expected rejection for {email:?}, got {other:?}"),
            }
            assert!(store.is_empty().await);
        }
        Ok(())
    }
}
