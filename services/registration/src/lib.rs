//! Registration flow for the Music Portal
//!
//! Field validation, registration submission, and the verification-code
//! sender with its resend cooldown. Every flow returns view models rather
//! than touching a rendering layer.

pub mod client;
pub mod context;
pub mod cooldown;
pub mod error;
pub mod models;
pub mod submission;
pub mod validation;
pub mod view;

#[cfg(test)]
mod test_support;

pub use client::{HttpApiClient, RegistrationApi};
pub use context::RegistrationContext;
pub use cooldown::{Cooldown, CooldownState, SharedCooldown, run_countdown};
pub use error::{
    CooldownError, Field, RequestFailure, SendCodeError, SubmissionError, ValidationError,
    ValidationKind,
};
pub use models::{ApiSuccess, RegisterRequest, RegistrationForm, SendEmailRequest};
pub use submission::{submit_registration, validate_form};
pub use view::{Banner, BannerKind, RegistrationView, SendButtonView};
