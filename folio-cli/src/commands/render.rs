//! Render command - write the gallery page as HTML

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use super::{get_context, require_session};
use crate::output;
use folio_core::ModalEvent;

/// Which modal view to render open
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModalView {
    /// Thumbnails with delete buttons
    Gallery,
    /// The add-picture form
    Add,
}

pub fn run(output_path: Option<&Path>, category: Option<&str>, modal: Option<ModalView>) -> Result<()> {
    let mut ctx = get_context()?;

    if let Some(category) = category {
        ctx.select_category(category)
            .ok_or_else(|| anyhow::anyhow!("Unknown category: {}", category))?;
    }

    if let Some(view) = modal {
        require_session(&ctx)?;
        ctx.modal_event(ModalEvent::Open)?;
        if let ModalView::Add = view {
            ctx.modal_event(ModalEvent::AddPicture)?;
        }
    }

    let html = ctx.to_html().into_string();
    match output_path {
        Some(path) => {
            std::fs::write(path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            output::success(&format!("Wrote {}", path.display()));
        }
        None => println!("{}", html),
    }

    Ok(())
}
