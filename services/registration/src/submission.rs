//! Registration submission

use tracing::{info, warn};

use crate::{
    client::RegistrationApi,
    error::{Field, SubmissionError},
    models::{ApiSuccess, RegisterRequest, RegistrationForm},
    validation::{require_present, validate_email, validate_password, validate_username},
};

/// Run every client-side check in page order, stopping at the first failure
pub fn validate_form(form: &RegistrationForm) -> Result<(), SubmissionError> {
    validate_username(&form.username)?;
    validate_password(&form.password)?;
    validate_email(&form.email)?;
    require_present(Field::Name, &form.name)?;
    require_present(Field::Role, &form.role)?;
    require_present(Field::Code, &form.code)?;
    Ok(())
}

/// Validate the form and, when it passes, send exactly one registration request
pub async fn submit_registration(
    api: &dyn RegistrationApi,
    form: &RegistrationForm,
) -> Result<ApiSuccess, SubmissionError> {
    if let Err(e) = validate_form(form) {
        info!("Registration blocked by validation: {}", e);
        return Err(e);
    }

    let request = RegisterRequest::from_form(form);
    info!("Submitting registration for user: {}", request.username);

    match api.register(&request).await {
        Ok(success) => {
            info!("Registration succeeded for user: {}", request.username);
            Ok(success)
        }
        Err(failure) => {
            warn!(
                "Registration failed for user {}: {}",
                request.username, failure
            );
            Err(failure.into())
        }
    }
}
