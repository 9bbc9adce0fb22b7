//! HTTP client for the registration API
//!
//! The [`RegistrationApi`] trait is the seam between the flows in this crate
//! and the remote service; [`HttpApiClient`] is the reqwest-backed adapter.

use async_trait::async_trait;
use common::ClientConfig;
use reqwest::Client;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::{
    error::RequestFailure,
    models::{ApiEnvelope, ApiSuccess, RegisterRequest, SendEmailRequest},
};

/// Message shown when a registration fails without a server message
pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed, please try again later";

/// Message shown when sending a code fails without a server message
pub const SEND_CODE_FAILED_MESSAGE: &str = "Failed to send verification code";

/// Remote operations used by the registration page
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// `POST /register`
    async fn register(&self, request: &RegisterRequest) -> Result<ApiSuccess, RequestFailure>;

    /// `POST /sendEmail`
    async fn send_email(&self, request: &SendEmailRequest) -> Result<ApiSuccess, RequestFailure>;
}

/// Reqwest-backed API client
#[derive(Clone)]
pub struct HttpApiClient {
    client: Client,
    config: ClientConfig,
}

impl HttpApiClient {
    /// Create a new client for the configured API
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config: config.clone(),
        })
    }

    /// POST a JSON body and interpret the response envelope
    async fn post_envelope<T: Serialize + Sync>(
        &self,
        path: &str,
        body: &T,
        fallback: &str,
    ) -> Result<ApiSuccess, RequestFailure> {
        let url = self.config.endpoint(path);
        info!("POST {}", url);

        let response = match self.client.post(&url).json(body).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Request to {} failed: {}", url, e);
                return Err(RequestFailure::from_server_message(None, fallback));
            }
        };

        let status = response.status();
        let envelope = match response.json::<ApiEnvelope>().await {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("Undecodable response body from {}: {}", url, e);
                ApiEnvelope::default()
            }
        };

        if status.is_success() && envelope.is_success() {
            Ok(ApiSuccess {
                message: envelope.msg,
            })
        } else {
            warn!(
                "Request to {} rejected: status={}, code={:?}",
                url, status, envelope.code
            );
            Err(RequestFailure::from_server_message(
                envelope.msg.as_deref(),
                fallback,
            ))
        }
    }
}

#[async_trait]
impl RegistrationApi for HttpApiClient {
    async fn register(&self, request: &RegisterRequest) -> Result<ApiSuccess, RequestFailure> {
        self.post_envelope("register", request, REGISTER_FAILED_MESSAGE)
            .await
    }

    async fn send_email(&self, request: &SendEmailRequest) -> Result<ApiSuccess, RequestFailure> {
        self.post_envelope("sendEmail", request, SEND_CODE_FAILED_MESSAGE)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_api_maps_to_generic_failure() {
        // Port 9 (discard) is not expected to serve HTTP
        let config = ClientConfig {
            api_url: "http://127.0.0.1:9".to_string(),
            request_timeout_seconds: Some(2),
            ..ClientConfig::default()
        };
        let client = HttpApiClient::new(&config).expect("client should build");

        let result = client
            .send_email(&SendEmailRequest {
                email: "ab@cd.com".to_string(),
            })
            .await;

        assert_eq!(
            result,
            Err(RequestFailure {
                message: SEND_CODE_FAILED_MESSAGE.to_string()
            })
        );
    }
}
