//! Authentication route handlers.
//!
//! Login, signup, and logout. Failed logins re-render the form with an
//! inline error; failed signups re-render with the submitted values and
//! a list of validation errors.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::{clear_session, set_current_user};
use crate::models::CurrentUser;
use crate::services::auth::{AuthError, AuthService, Signup};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Signup form data.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub name: String,
    pub mobile_number: String,
    pub password: String,
    pub confirm_password: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Signup page template.
#[derive(Template, WebTemplate)]
#[template(path = "signup.html")]
pub struct SignupTemplate {
    pub errors: Vec<String>,
    pub username: String,
    pub email: String,
    pub name: String,
    pub mobile_number: String,
}

impl SignupTemplate {
    fn empty() -> Self {
        Self {
            errors: Vec::new(),
            username: String::new(),
            email: String::new(),
            name: String::new(),
            mobile_number: String::new(),
        }
    }

    fn from_form(form: &SignupForm, errors: Vec<String>) -> Self {
        Self {
            errors,
            username: form.username.clone(),
            email: form.email.clone(),
            name: form.name.clone(),
            mobile_number: form.mobile_number.clone(),
        }
    }
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate { error: None }
}

/// Handle login form submission.
#[instrument(skip_all, fields(username = %form.username))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let auth = AuthService::new(state.pool());

    match auth.login(&form.username, &form.password).await {
        Ok(user) => {
            let current_user = CurrentUser {
                id: user.id,
                username: user.username,
                admin: user.is_admin,
            };
            set_current_user(&session, &current_user).await?;

            Ok(Redirect::to("/").into_response())
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!("Login failed");
            Ok(LoginTemplate {
                error: Some("Invalid username or password".to_string()),
            }
            .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

// =============================================================================
// Signup Routes
// =============================================================================

/// Display the signup page.
pub async fn signup_page() -> impl IntoResponse {
    SignupTemplate::empty()
}

/// Handle signup form submission.
///
/// Validation failures re-render the form with the submitted values. A
/// successful signup logs the new account in and redirects to the
/// dashboard.
#[instrument(skip_all, fields(username = %form.username))]
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SignupForm>,
) -> Result<Response> {
    let mut errors = validate_signup(&form);
    if !errors.is_empty() {
        return Ok(SignupTemplate::from_form(&form, errors).into_response());
    }

    let auth = AuthService::new(state.pool());
    let result = auth
        .signup(Signup {
            username: form.username.trim(),
            email: form.email.trim(),
            name: form.name.trim(),
            mobile_number: form.mobile_number.trim(),
            password: &form.password,
        })
        .await;

    match result {
        Ok(user) => {
            let current_user = CurrentUser {
                id: user.id,
                username: user.username,
                admin: user.is_admin,
            };
            set_current_user(&session, &current_user).await?;

            Ok(Redirect::to("/").into_response())
        }
        Err(AuthError::UserAlreadyExists) => {
            errors.push("Username/email already exists. Choose a different one.".to_string());
            Ok(SignupTemplate::from_form(&form, errors).into_response())
        }
        Err(AuthError::InvalidEmail(_)) => {
            errors.push("Enter a valid email address.".to_string());
            Ok(SignupTemplate::from_form(&form, errors).into_response())
        }
        Err(AuthError::WeakPassword(msg)) => {
            errors.push(msg);
            Ok(SignupTemplate::from_form(&form, errors).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Field-presence checks before the auth service sees the form.
fn validate_signup(form: &SignupForm) -> Vec<String> {
    let mut errors = Vec::new();

    let required = [
        (form.username.trim(), "Username is required."),
        (form.email.trim(), "Email is required."),
        (form.name.trim(), "Full name is required."),
        (form.mobile_number.trim(), "Mobile number is required."),
        (&form.password, "Password is required."),
    ];
    for (value, message) in required {
        if value.is_empty() {
            errors.push(message.to_string());
        }
    }

    if form.password != form.confirm_password {
        errors.push("Passwords must match.".to_string());
    }

    errors
}

// =============================================================================
// Logout Route
// =============================================================================

/// Handle logout. Destroys the whole session, cart included.
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_session(&session).await {
        tracing::error!("Failed to clear session: {e}");
    }

    Redirect::to("/").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(password: &str, confirm: &str) -> SignupForm {
        SignupForm {
            username: "walter".to_string(),
            email: "walter@example.com".to_string(),
            name: "Walter Hartwell".to_string(),
            mobile_number: "0851234567".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_complete_form_passes() {
        assert!(validate_signup(&form("hunter2hunter2", "hunter2hunter2")).is_empty());
    }

    #[test]
    fn test_password_mismatch_flagged() {
        let errors = validate_signup(&form("hunter2hunter2", "different"));
        assert_eq!(errors, vec!["Passwords must match.".to_string()]);
    }

    #[test]
    fn test_missing_fields_flagged() {
        let mut f = form("hunter2hunter2", "hunter2hunter2");
        f.username = String::new();
        f.email = "   ".to_string();

        let errors = validate_signup(&f);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("Username"));
        assert!(errors[1].contains("Email"));
    }
}
