//! Authentication domain model

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Email shape accepted by the login form
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// Check an email address before sending it to the API
pub fn is_valid_email(email: &str) -> bool {
    Regex::new(EMAIL_PATTERN)
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}

/// Body of `POST users/login`
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Answer of `POST users/login`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub user_id: Option<u32>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Authentication as seen by the UI: a token is present or it is not
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthState {
    Anonymous,
    Authenticated,
}

impl AuthState {
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(t) if !t.is_empty() => AuthState::Authenticated,
            _ => AuthState::Anonymous,
        }
    }
}

/// The login/logout link in the page header
///
/// Built once from the token present at load time. Logging in or out
/// elsewhere does not change it until the page is reloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoginControl {
    state: AuthState,
}

impl LoginControl {
    pub fn new(token: Option<&str>) -> Self {
        Self {
            state: AuthState::from_token(token),
        }
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    pub fn label(&self) -> &'static str {
        match self.state {
            AuthState::Anonymous => "Login",
            AuthState::Authenticated => "Logout",
        }
    }
}

/// What clicking the login control did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthAction {
    /// Anonymous click: go to the login page
    NavigateToLogin,
    /// Token cleared; the page must be reloaded
    LoggedOut,
    /// Logout confirmation declined
    Cancelled,
}

/// Result of submitting the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LoginOutcome {
    LoggedIn,
    InvalidEmail,
    InvalidCredentials,
    NetworkError,
}

impl LoginOutcome {
    /// Message catalog key for this outcome
    pub fn message_key(&self) -> &'static str {
        match self {
            LoginOutcome::LoggedIn => "auth.loggedIn",
            LoginOutcome::InvalidEmail => "auth.invalidEmail",
            LoginOutcome::InvalidCredentials => "auth.loginError",
            LoginOutcome::NetworkError => "auth.networkError",
        }
    }
}
