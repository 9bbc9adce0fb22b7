//! Scripted API double shared by unit tests

use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    client::RegistrationApi,
    error::RequestFailure,
    models::{ApiSuccess, RegisterRequest, SendEmailRequest},
};

/// API double that replays one scripted result and records calls
pub struct FakeApi {
    result: Result<ApiSuccess, RequestFailure>,
    delay: Option<Duration>,
    pub register_calls: AtomicUsize,
    pub send_calls: AtomicUsize,
    pub last_register: Mutex<Option<RegisterRequest>>,
}

impl FakeApi {
    pub fn succeeding() -> Self {
        Self::with_result(Ok(ApiSuccess {
            message: Some("ok".to_string()),
        }))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_result(Err(RequestFailure {
            message: message.to_string(),
        }))
    }

    fn with_result(result: Result<ApiSuccess, RequestFailure>) -> Self {
        Self {
            result,
            delay: None,
            register_calls: AtomicUsize::new(0),
            send_calls: AtomicUsize::new(0),
            last_register: Mutex::new(None),
        }
    }

    /// Hold every response for `delay` before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    async fn wait(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }

    pub fn register_count(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    pub fn send_count(&self) -> usize {
        self.send_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RegistrationApi for FakeApi {
    async fn register(&self, request: &RegisterRequest) -> Result<ApiSuccess, RequestFailure> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_register.lock().unwrap() = Some(request.clone());
        self.wait().await;
        self.result.clone()
    }

    async fn send_email(&self, _request: &SendEmailRequest) -> Result<ApiSuccess, RequestFailure> {
        self.send_calls.fetch_add(1, Ordering::SeqCst);
        self.wait().await;
        self.result.clone()
    }
}
