//! Upload command - the add-picture form

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use super::{get_context, get_logger, log_event, require_session};
use crate::output::{self, create_table, format_size};
use folio_core::services::LogEvent;
use folio_core::{ImageFile, ModalEvent, UploadOutcome, UploadRequest};

pub fn run(file: &Path, title: &str, category: &str, json: bool) -> Result<()> {
    let mut ctx = get_context()?;
    require_session(&ctx)?;

    // An unknown category goes through validation like an empty select
    let category_id = ctx.store().find_category(category).map(|c| c.id);
    let image = ImageFile::from_path(file)
        .with_context(|| format!("Failed to read image: {}", file.display()))?;
    let size = image.size();

    ctx.modal_event(ModalEvent::Open)?;
    ctx.modal_event(ModalEvent::AddPicture)?;

    let outcome = ctx.upload(UploadRequest {
        title: title.to_string(),
        category_id,
        file: Some(image),
    })?;

    let logger = get_logger();
    match outcome {
        UploadOutcome::Rejected { errors } => {
            for rule in errors.rules() {
                eprintln!("  {} {}", rule.field().as_str().bold(), ctx.messages.message(rule.message_key()).red());
            }
            log_event(
                &logger,
                LogEvent::new("upload_rejected").with_error(errors.to_string()),
            );
            anyhow::bail!("Upload rejected")
        }
        UploadOutcome::Created { work } => {
            log_event(&logger, LogEvent::new("work_uploaded").with_work(work.id));

            if json {
                println!("{}", serde_json::to_string_pretty(&work)?);
                return Ok(());
            }

            output::success(ctx.messages.message("upload.success"));
            let mut table = create_table();
            table.add_row(vec!["ID".to_string(), work.id.to_string()]);
            table.add_row(vec!["Title".to_string(), work.title.clone()]);
            table.add_row(vec![
                "Category".to_string(),
                work.category_name().unwrap_or("-").to_string(),
            ]);
            table.add_row(vec!["Image".to_string(), work.image_url.clone()]);
            table.add_row(vec!["Size".to_string(), format_size(size)]);
            println!("{}", table);
            Ok(())
        }
    }
}
