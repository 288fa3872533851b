//! Auth service - login form submission and the login/logout control

use std::sync::Arc;

use anyhow::Result;

use crate::domain::auth::is_valid_email;
use crate::domain::result::Error;
use crate::domain::{AuthAction, AuthState, Credentials, LoginControl, LoginOutcome};
use crate::ports::{GalleryApi, SessionStore};

pub struct AuthService {
    api: Arc<dyn GalleryApi>,
    session: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(api: Arc<dyn GalleryApi>, session: Arc<dyn SessionStore>) -> Self {
        Self { api, session }
    }

    /// Submit the login form
    ///
    /// The email is trimmed and checked before any request. Any non-2xx
    /// answer, or a 2xx without a token, counts as bad credentials.
    pub fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Ok(LoginOutcome::InvalidEmail);
        }

        let response = match self.api.login(&Credentials::new(email, password)) {
            Ok(response) => response,
            Err(Error::Api { .. }) => return Ok(LoginOutcome::InvalidCredentials),
            Err(Error::Network(_)) => return Ok(LoginOutcome::NetworkError),
            Err(e) => return Err(e.into()),
        };

        match response.token.filter(|t| !t.is_empty()) {
            Some(token) => {
                self.session.set_token(&token)?;
                Ok(LoginOutcome::LoggedIn)
            }
            None => Ok(LoginOutcome::InvalidCredentials),
        }
    }

    /// Click on the login control
    ///
    /// Anonymous: go to the login form. Authenticated: clear the token
    /// (after confirmation when `confirm_required`); the caller reloads.
    pub fn click<F>(&self, control: &LoginControl, confirm_required: bool, confirm: F) -> Result<AuthAction>
    where
        F: FnOnce() -> bool,
    {
        match control.state() {
            AuthState::Anonymous => Ok(AuthAction::NavigateToLogin),
            AuthState::Authenticated => {
                if confirm_required && !confirm() {
                    return Ok(AuthAction::Cancelled);
                }
                self.session.clear()?;
                Ok(AuthAction::LoggedOut)
            }
        }
    }
}
