//! Registration page context
//!
//! Holds the API handle and the send-code cooldown for one page session,
//! replacing module-level globals.

use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use common::ClientConfig;

use crate::{
    client::{HttpApiClient, RegistrationApi},
    cooldown::{Cooldown, SharedCooldown, run_countdown},
    error::{SendCodeError, SubmissionError},
    models::{ApiSuccess, RegistrationForm, SendEmailRequest},
    submission::submit_registration,
    validation::validate_email,
    view::SendButtonView,
};

/// State for one registration page session
#[derive(Clone)]
pub struct RegistrationContext {
    api: Arc<dyn RegistrationApi>,
    cooldown: SharedCooldown,
}

impl RegistrationContext {
    /// Create a context around any API implementation
    pub fn new(api: Arc<dyn RegistrationApi>, cooldown_seconds: u32) -> Self {
        Self {
            api,
            cooldown: Cooldown::new(cooldown_seconds).shared(),
        }
    }

    /// Create a context talking HTTP to the configured API
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn from_config(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let api = HttpApiClient::new(config)?;
        Ok(Self::new(Arc::new(api), config.cooldown_seconds))
    }

    /// Shared cooldown handle
    pub fn cooldown(&self) -> SharedCooldown {
        self.cooldown.clone()
    }

    /// Current state of the send control
    pub async fn send_button(&self) -> SendButtonView {
        self.cooldown.lock().await.view()
    }

    /// Send a verification code to `email`
    ///
    /// Rejected without a network call while a request is in flight, while
    /// the cooldown runs, or when the email is malformed. The send control is
    /// claimed before the request goes out, so overlapping calls send at most
    /// one code. A successful send starts the cooldown; the caller drives it
    /// with [`RegistrationContext::spawn_countdown`].
    pub async fn send_code(&self, email: &str) -> Result<ApiSuccess, SendCodeError> {
        let email = email.trim();
        validate_email(email)?;

        if let Err(e) = self.cooldown.lock().await.begin_send() {
            warn!("Send-code rejected: {}", e);
            return Err(e.into());
        }

        info!("Requesting verification code for: {}", email);
        let result = self
            .api
            .send_email(&SendEmailRequest {
                email: email.to_string(),
            })
            .await;

        let mut cooldown = self.cooldown.lock().await;
        match result {
            Ok(success) => {
                cooldown.start()?;
                Ok(success)
            }
            Err(failure) => {
                cooldown.abort_send();
                Err(failure.into())
            }
        }
    }

    /// Validate and submit the registration form
    pub async fn register(&self, form: &RegistrationForm) -> Result<ApiSuccess, SubmissionError> {
        submit_registration(self.api.as_ref(), form).await
    }

    /// Drive the cooldown on a background task until it is idle
    pub fn spawn_countdown<F>(&self, on_render: F) -> JoinHandle<()>
    where
        F: FnMut(&SendButtonView) + Send + 'static,
    {
        tokio::spawn(run_countdown(self.cooldown.clone(), on_render))
    }
}
