//! View models for the registration page
//!
//! Each flow produces plain data describing what should be shown; any
//! rendering layer can map these onto its own widgets.

use crate::{
    error::{Field, SendCodeError, SubmissionError},
    models::ApiSuccess,
};

/// Message shown after a successful registration
pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration successful";

/// Message shown after a verification code was sent
pub const SEND_CODE_SUCCESS_MESSAGE: &str = "Verification code sent, please check your inbox";

/// Send-code control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendButtonView {
    pub enabled: bool,
    pub label: String,
}

/// Banner tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Page-level status banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            text: text.into(),
        }
    }
}

/// Inline message attached to one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMessage {
    pub field: Field,
    pub text: String,
}

/// What the registration page shows after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationView {
    pub banner: Banner,
    pub field_message: Option<FieldMessage>,
}

impl RegistrationView {
    /// Map a submission outcome to banner and inline message
    pub fn from_outcome(outcome: &Result<ApiSuccess, SubmissionError>) -> Self {
        match outcome {
            Ok(_) => Self {
                banner: Banner::success(REGISTER_SUCCESS_MESSAGE),
                field_message: None,
            },
            Err(SubmissionError::Validation(e)) => Self {
                banner: Banner::error(&e.message),
                field_message: Some(FieldMessage {
                    field: e.field,
                    text: e.message.clone(),
                }),
            },
            Err(SubmissionError::Request(e)) => Self {
                banner: Banner::error(&e.message),
                field_message: None,
            },
        }
    }

    /// Map a send-code outcome to banner and inline message
    pub fn from_send_outcome(outcome: &Result<ApiSuccess, SendCodeError>) -> Self {
        match outcome {
            Ok(_) => Self {
                banner: Banner::success(SEND_CODE_SUCCESS_MESSAGE),
                field_message: None,
            },
            Err(SendCodeError::Validation(e)) => Self {
                banner: Banner::error(&e.message),
                field_message: Some(FieldMessage {
                    field: e.field,
                    text: e.message.clone(),
                }),
            },
            Err(e) => Self {
                banner: Banner::error(e.to_string()),
                field_message: None,
            },
        }
    }
}
