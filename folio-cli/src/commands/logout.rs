//! Logout command - the login/logout control from the terminal

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use super::{get_context, get_logger, log_event};
use crate::output;
use folio_core::services::LogEvent;
use folio_core::AuthAction;

pub fn run(force: bool) -> Result<()> {
    let ctx = get_context()?;

    let prompt = ctx.messages.message("auth.logoutConfirm").to_string();
    let action = ctx.click_login_control(|| {
        force
            || Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()
                .unwrap_or(false)
    })?;

    match action {
        AuthAction::NavigateToLogin => {
            output::info("Not logged in. Run `folio login` to sign in.");
        }
        AuthAction::LoggedOut => {
            let logger = get_logger();
            log_event(&logger, LogEvent::new("logout"));
            drop(logger);

            let ctx = ctx.reload()?;
            output::success(ctx.messages.message("auth.loggedOut"));
            println!("{}", ctx.login_control().label().dimmed());
        }
        AuthAction::Cancelled => {
            println!("{}", "Cancelled.".dimmed());
        }
    }

    Ok(())
}
