//! Input validation utilities

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{Field, ValidationError, ValidationKind};

/// Minimum username length, in characters
pub const USERNAME_MIN_LEN: usize = 4;

/// Minimum password length, in characters
pub const PASSWORD_MIN_LEN: usize = 8;

/// Characters rejected in usernames: ASCII punctuation and symbols plus
/// full-width CJK punctuation. `-` and `_` stay allowed.
const USERNAME_DENYLIST: &str =
    r"[`~!@#$%^&*()+=|{}':;,\[\].<>/?\\\x22！￥…（）—【】‘’；：“”。，、？《》]";

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*@[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*(\.[A-Za-z0-9_]{2,3})+$";

/// Render-ready validity of a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStatus {
    pub valid: bool,
    pub message: String,
}

impl From<&Result<(), ValidationError>> for FieldStatus {
    fn from(result: &Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self {
                valid: true,
                message: String::new(),
            },
            Err(e) => Self {
                valid: false,
                message: e.message.clone(),
            },
        }
    }
}

fn username_denylist() -> &'static Regex {
    static DENYLIST_REGEX: OnceLock<Regex> = OnceLock::new();
    DENYLIST_REGEX.get_or_init(|| {
        Regex::new(USERNAME_DENYLIST).expect("Failed to compile username denylist regex")
    })
}

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("Failed to compile email regex"))
}

/// Validate username
///
/// Surrounding whitespace is ignored. A denylisted character is reported
/// even when the username is also too short.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(ValidationError::new(
            Field::Username,
            ValidationKind::EmptyField,
            "Username is required",
        ));
    }

    if username_denylist().is_match(username) {
        return Err(ValidationError::new(
            Field::Username,
            ValidationKind::IllegalCharacter,
            "Username must not contain special characters",
        ));
    }

    if username.chars().count() < USERNAME_MIN_LEN {
        return Err(ValidationError::new(
            Field::Username,
            ValidationKind::TooShort,
            format!(
                "Username must be at least {} characters long",
                USERNAME_MIN_LEN
            ),
        ));
    }

    Ok(())
}

/// Validate password
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::new(
            Field::Password,
            ValidationKind::EmptyField,
            "Password is required",
        ));
    }

    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(ValidationError::new(
            Field::Password,
            ValidationKind::TooShort,
            format!(
                "Password must be at least {} characters long",
                PASSWORD_MIN_LEN
            ),
        ));
    }

    Ok(())
}

/// Validate email, ignoring surrounding whitespace
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::new(
            Field::Email,
            ValidationKind::EmptyField,
            "Email is required",
        ));
    }

    if !email_regex().is_match(email) {
        return Err(ValidationError::new(
            Field::Email,
            ValidationKind::BadFormat,
            "Invalid email format",
        ));
    }

    Ok(())
}

/// Presence check for fields with no format rules
pub fn require_present(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let message = match field {
            Field::Name => "Name is required",
            Field::Role => "Role is required",
            Field::Code => "Verification code is required",
            Field::Username => "Username is required",
            Field::Password => "Password is required",
            Field::Email => "Email is required",
        };
        return Err(ValidationError::new(
            field,
            ValidationKind::EmptyField,
            message,
        ));
    }

    Ok(())
}
