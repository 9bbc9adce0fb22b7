//! Error types for the registration flow

use std::fmt;
use thiserror::Error;

/// Form field a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Password,
    Email,
    Name,
    Role,
    Code,
}

impl Field {
    /// Form field name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Password => "password",
            Field::Email => "email",
            Field::Name => "name",
            Field::Role => "role",
            Field::Code => "code",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    EmptyField,
    TooShort,
    IllegalCharacter,
    BadFormat,
}

/// Client-side validation failure; never reaches the network
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Field,
    pub kind: ValidationKind,
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(field: Field, kind: ValidationKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}

/// Network error or non-success API response
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RequestFailure {
    pub message: String,
}

impl RequestFailure {
    /// Use the server message when it carries text, else the fallback
    pub fn from_server_message(msg: Option<&str>, fallback: &str) -> Self {
        let message = match msg.map(str::trim) {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => fallback.to_string(),
        };
        Self { message }
    }
}

/// Outcome of a failed registration submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Request(#[from] RequestFailure),
}

impl SubmissionError {
    /// Human-readable message for banners
    pub fn message(&self) -> &str {
        match self {
            SubmissionError::Validation(e) => &e.message,
            SubmissionError::Request(e) => &e.message,
        }
    }
}

/// Send attempt rejected by the cooldown timer
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownError {
    #[error("Please wait {remaining}s before requesting another code")]
    Active { remaining: u32 },

    #[error("A verification code request is already in progress")]
    InFlight,
}

/// Outcome of a failed send-code attempt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendCodeError {
    #[error("{0}")]
    Cooldown(#[from] CooldownError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Request(#[from] RequestFailure),
}
