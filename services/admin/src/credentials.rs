//! Admin credentials
//!
//! The admin password is held only as an argon2 PHC string. A plaintext
//! password from configuration is hashed once when credentials are built.

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use common::ClientConfig;
use thiserror::Error;
use tracing::info;

/// Error raised while building admin credentials
#[derive(Error, Debug)]
pub enum CredentialError {
    /// Neither a password nor a password hash was configured
    #[error("No admin password or password hash configured")]
    Missing,

    /// The configured hash is not a valid PHC string
    #[error("Invalid admin password hash: {0}")]
    InvalidHash(String),

    /// Hashing the configured password failed
    #[error("Failed to hash admin password: {0}")]
    Hashing(String),
}

/// Configured admin account
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    email: String,
    password_hash: String,
}

impl AdminCredentials {
    /// Build credentials from an email and a plaintext password
    pub fn from_plaintext(email: &str, password: &str) -> Result<Self, CredentialError> {
        let salt = SaltString::generate(&mut rand::thread_rng());
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| CredentialError::Hashing(e.to_string()))?
            .to_string();

        Ok(Self {
            email: email.trim().to_string(),
            password_hash,
        })
    }

    /// Build credentials from an email and an argon2 PHC string
    pub fn from_hash(email: &str, password_hash: &str) -> Result<Self, CredentialError> {
        PasswordHash::new(password_hash)
            .map_err(|e| CredentialError::InvalidHash(e.to_string()))?;

        Ok(Self {
            email: email.trim().to_string(),
            password_hash: password_hash.to_string(),
        })
    }

    /// Build credentials from configuration, preferring a configured hash
    pub fn from_config(config: &ClientConfig) -> Result<Self, CredentialError> {
        match (&config.admin_password_hash, &config.admin_password) {
            (Some(hash), _) => {
                info!("Using configured admin password hash");
                Self::from_hash(&config.admin_email, hash)
            }
            (None, Some(password)) => Self::from_plaintext(&config.admin_email, password),
            (None, None) => Err(CredentialError::Missing),
        }
    }

    /// Admin email
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Check a login attempt against the configured account
    pub fn verify(&self, email: &str, password: &str) -> bool {
        let password_ok = match PasswordHash::new(&self.password_hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        };

        password_ok && email.trim() == self.email
    }
}
