//! Client settings loaded from defaults and `MUSIC_*` environment variables

use config::{Config, Environment};
use serde::Deserialize;
use std::time::Duration;

use crate::error::ConfigError;

const DEFAULT_API_URL: &str = "http://localhost:8080";
/// Send-code cooldown length used when `MUSIC_COOLDOWN_SECONDS` is unset
pub const DEFAULT_COOLDOWN_SECONDS: u32 = 60;
const DEFAULT_ADMIN_EMAIL: &str = "admin@music.com";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Configuration shared by the registration and admin crates
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the remote API (e.g., "http://localhost:8080")
    pub api_url: String,
    /// Length of the verification-code cooldown in seconds
    pub cooldown_seconds: u32,
    /// Optional per-request timeout; unset means requests never time out
    pub request_timeout_seconds: Option<u64>,
    /// Session store URL; unset selects the in-memory store
    pub session_store_url: Option<String>,
    /// Admin account email
    pub admin_email: String,
    /// Plaintext admin password, hashed when credentials are built
    pub admin_password: Option<String>,
    /// Pre-hashed admin password (argon2 PHC string), preferred over `admin_password`
    pub admin_password_hash: Option<String>,
}

impl ClientConfig {
    /// Create a new ClientConfig from environment variables
    ///
    /// # Environment Variables
    /// - `MUSIC_API_URL`: API base URL (default: "http://localhost:8080")
    /// - `MUSIC_COOLDOWN_SECONDS`: send-code cooldown (default: 60)
    /// - `MUSIC_REQUEST_TIMEOUT_SECONDS`: request timeout (default: none)
    /// - `MUSIC_SESSION_STORE_URL`: `redis://...` for a durable store (default: in-memory)
    /// - `MUSIC_ADMIN_EMAIL`: admin email (default: "admin@music.com")
    /// - `MUSIC_ADMIN_PASSWORD` / `MUSIC_ADMIN_PASSWORD_HASH`: admin secret
    pub fn from_env() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            .set_default("cooldown_seconds", i64::from(DEFAULT_COOLDOWN_SECONDS))?
            .set_default("admin_email", DEFAULT_ADMIN_EMAIL)?
            .set_default("admin_password", DEFAULT_ADMIN_PASSWORD)?
            .add_source(Environment::with_prefix("MUSIC").try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "api_url",
                reason: "must not be empty".to_string(),
            });
        }

        if self.cooldown_seconds == 0 {
            return Err(ConfigError::Invalid {
                key: "cooldown_seconds",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Join an API path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Request timeout as a Duration, if configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            cooldown_seconds: DEFAULT_COOLDOWN_SECONDS,
            request_timeout_seconds: None,
            session_store_url: None,
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            admin_password: Some(DEFAULT_ADMIN_PASSWORD.to_string()),
            admin_password_hash: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 7] = [
        "MUSIC_API_URL",
        "MUSIC_COOLDOWN_SECONDS",
        "MUSIC_REQUEST_TIMEOUT_SECONDS",
        "MUSIC_SESSION_STORE_URL",
        "MUSIC_ADMIN_EMAIL",
        "MUSIC_ADMIN_PASSWORD",
        "MUSIC_ADMIN_PASSWORD_HASH",
    ];

    fn clear_env() {
        for var in VARS {
            // SAFETY: tests touching the environment are serialised
            unsafe { std::env::remove_var(var) };
        }
    }

    #[test]
    #[serial]
    fn test_client_config_defaults() {
        clear_env();
        let config = ClientConfig::from_env().expect("Failed to load client config");
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.cooldown_seconds, 60);
        assert_eq!(config.admin_email, "admin@music.com");
        assert!(config.session_store_url.is_none());
        assert!(config.request_timeout().is_none());
    }

    #[test]
    #[serial]
    fn test_client_config_from_env_overrides() {
        clear_env();
        unsafe {
            std::env::set_var("MUSIC_API_URL", "https://api.example.com/v1/");
            std::env::set_var("MUSIC_COOLDOWN_SECONDS", "30");
        }

        let config = ClientConfig::from_env().expect("Failed to load client config");
        assert_eq!(config.cooldown_seconds, 30);
        assert_eq!(
            config.endpoint("/register"),
            "https://api.example.com/v1/register"
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_defaults_restored_after_clearing_every_variable() {
        clear_env();
        unsafe {
            std::env::set_var("MUSIC_REQUEST_TIMEOUT_SECONDS", "5");
            std::env::set_var("MUSIC_ADMIN_PASSWORD", "s3cret-pass");
            std::env::set_var("MUSIC_ADMIN_PASSWORD_HASH", "stored-hash");
        }

        let config = ClientConfig::from_env().expect("Failed to load client config");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.admin_password.as_deref(), Some("s3cret-pass"));
        assert_eq!(config.admin_password_hash.as_deref(), Some("stored-hash"));

        clear_env();
        let config = ClientConfig::from_env().expect("Failed to load client config");
        assert!(config.request_timeout().is_none());
        assert_eq!(config.admin_password.as_deref(), Some("admin123"));
        assert!(config.admin_password_hash.is_none());
    }

    #[test]
    fn test_default_cooldown_comes_from_one_constant() {
        assert_eq!(
            ClientConfig::default().cooldown_seconds,
            DEFAULT_COOLDOWN_SECONDS
        );
    }

    #[test]
    #[serial]
    fn test_zero_cooldown_is_rejected() {
        clear_env();
        unsafe { std::env::set_var("MUSIC_COOLDOWN_SECONDS", "0") };

        let result = ClientConfig::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                key: "cooldown_seconds",
                ..
            })
        ));

        clear_env();
    }
}
