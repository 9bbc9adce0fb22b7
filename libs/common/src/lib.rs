//! Common library for the Music Portal client
//!
//! This crate provides shared functionality used across the registration
//! and admin crates, including configuration loading, error handling, and
//! the session key-value store that stands in for page-local storage.
//!
//! # Example
//!
//! ```rust,no_run
//! use common::{ClientConfig, connect_session_store};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::from_env()?;
//!     let store = connect_session_store(&config).await?;
//!     store.set("isLoggedIn", "true").await?;
//!     println!("Logged in: {:?}", store.get("isLoggedIn").await?);
//!     Ok(())
//! }
//! ```

pub mod settings;
pub mod error;
pub mod storage;

pub use settings::ClientConfig;
pub use error::{ConfigError, StoreError};
pub use storage::{InMemorySessionStore, RedisSessionStore, SessionStore, connect_session_store};
