//! Delete command - the trash button of the edit modal

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use super::{get_context, get_logger, log_event, require_session};
use crate::output;
use folio_core::services::LogEvent;
use folio_core::{DeleteOutcome, ModalEvent};

pub fn run(id: u32, force: bool) -> Result<()> {
    let mut ctx = get_context()?;
    require_session(&ctx)?;

    ctx.modal_event(ModalEvent::Open)?;

    let prompt = ctx.messages.message("delete.confirm").to_string();
    let outcome = ctx.delete_work(id, |work| {
        force
            || Confirm::new()
                .with_prompt(format!("{} ({})", prompt, work.title))
                .default(false)
                .interact()
                .unwrap_or(false)
    })?;

    let logger = get_logger();
    match outcome {
        DeleteOutcome::Deleted { ref work } => {
            log_event(&logger, LogEvent::new("work_deleted").with_work(work.id));
            output::success(&format!("{} ({})", outcome.alert(&ctx.messages), work.title));
        }
        DeleteOutcome::Cancelled => {
            println!("{}", outcome.alert(&ctx.messages).dimmed());
        }
        _ => {
            let alert = outcome.alert(&ctx.messages);
            log_event(
                &logger,
                LogEvent::new("delete_failed").with_work(id).with_error(alert.clone()),
            );
            drop(logger);
            output::warning(&alert);
            std::process::exit(1);
        }
    }

    Ok(())
}
