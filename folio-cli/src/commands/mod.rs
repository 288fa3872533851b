//! CLI command implementations

pub mod categories;
pub mod delete;
pub mod login;
pub mod logout;
pub mod logs;
pub mod render;
pub mod status;
pub mod upload;
pub mod works;

use std::path::PathBuf;

use anyhow::{Context, Result};
use folio_core::services::{LogEvent, LoggingService};
use folio_core::FolioContext;

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let folio_dir = get_folio_dir().ok()?;
    LoggingService::new(&folio_dir, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Folio directory from FOLIO_DIR, or ~/.folio
pub fn get_folio_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("FOLIO_DIR") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".folio"))
        .context("Could not find home directory; set FOLIO_DIR")
}

/// Load the gallery the way opening the page does
pub fn get_context() -> Result<FolioContext> {
    let folio_dir = get_folio_dir()?;

    std::fs::create_dir_all(&folio_dir)
        .with_context(|| format!("Failed to create folio directory: {:?}", folio_dir))?;

    FolioContext::open(&folio_dir).context("Failed to load the gallery")
}

/// Bail with the localized "login required" text unless a token was loaded
pub fn require_session(ctx: &FolioContext) -> Result<()> {
    if !ctx.is_authenticated() {
        anyhow::bail!("{}", ctx.messages.message("auth.loginRequired"));
    }
    Ok(())
}
