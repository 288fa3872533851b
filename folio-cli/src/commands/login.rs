//! Login command - submit credentials and store the session token

use std::io::Read;
use std::sync::Arc;

use anyhow::{Context, Result};
use dialoguer::{Input, Password};

use super::{get_folio_dir, get_logger, log_event};
use crate::output;
use folio_core::adapters::http::ApiClient;
use folio_core::adapters::session::FileSessionStore;
use folio_core::config::Config;
use folio_core::messages::{Language, Messages};
use folio_core::services::{AuthService, LogEvent};
use folio_core::LoginOutcome;

pub fn run(email: Option<String>, password: Option<String>) -> Result<()> {
    let folio_dir = get_folio_dir()?;
    std::fs::create_dir_all(&folio_dir)
        .with_context(|| format!("Failed to create folio directory: {:?}", folio_dir))?;

    let config = Config::load(&folio_dir)?;
    let messages = Messages::load(Language::detect(config.language.as_deref()));

    let email = match email {
        Some(email) => email,
        None => Input::<String>::new().with_prompt("Email").interact_text()?,
    };
    let password = match password {
        Some(password) => password,
        None if atty::isnt(atty::Stream::Stdin) => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read password from stdin")?;
            input.trim_end_matches(['\r', '\n']).to_string()
        }
        None => Password::new().with_prompt("Password").interact()?,
    };

    // The login page does not load the gallery
    let api = Arc::new(ApiClient::new_with_base_url(&config.api_base_url, config.timeout())?);
    let session = Arc::new(FileSessionStore::new(&folio_dir));
    let auth = AuthService::new(api, session);

    let outcome = auth.login(&email, &password)?;
    let logger = get_logger();
    match outcome {
        LoginOutcome::LoggedIn => {
            log_event(&logger, LogEvent::new("login_succeeded"));
            output::success(messages.message(outcome.message_key()));
            Ok(())
        }
        _ => {
            log_event(
                &logger,
                LogEvent::new("login_failed").with_error(format!("{:?}", outcome)),
            );
            anyhow::bail!("{}", messages.message(outcome.message_key()))
        }
    }
}
