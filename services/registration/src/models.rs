//! Registration models for form input and API payloads

use serde::{Deserialize, Deserializer, Serialize};

/// The only role a self-registered account may request
pub const PERMITTED_ROLE: &str = "user";

/// Envelope code the API uses for success
pub const SUCCESS_CODE: &str = "200";

/// Raw registration form input
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
    pub code: String,
    pub role: String,
}

/// Request body for `POST /register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
    pub code: String,
    pub role: String,
    pub phone: String,
    pub gender: String,
    pub avatar: String,
}

impl RegisterRequest {
    /// Build the wire body from a validated form
    ///
    /// The role is always [`PERMITTED_ROLE`]; whatever the form carried is
    /// discarded.
    pub fn from_form(form: &RegistrationForm) -> Self {
        Self {
            username: form.username.trim().to_string(),
            password: form.password.clone(),
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            code: form.code.trim().to_string(),
            role: PERMITTED_ROLE.to_string(),
            phone: String::new(),
            gender: String::new(),
            avatar: String::new(),
        }
    }
}

/// Request body for `POST /sendEmail`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEmailRequest {
    pub email: String,
}

/// Response envelope shared by every API endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default, deserialize_with = "code_as_text")]
    pub code: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl ApiEnvelope {
    /// Whether the envelope reports success
    pub fn is_success(&self) -> bool {
        self.code.as_deref() == Some(SUCCESS_CODE)
    }
}

/// Accept `"200"` and `200` alike
fn code_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Successful API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSuccess {
    pub message: Option<String>,
}
