//! Works command - the gallery as a table

use anyhow::{anyhow, Result};
use colored::Colorize;

use super::get_context;
use crate::output::create_table;
use folio_core::{Work, ALL_CATEGORIES};

pub fn run(category: Option<&str>, json: bool) -> Result<()> {
    let mut ctx = get_context()?;
    let category = category.unwrap_or(ALL_CATEGORIES);
    let shown = ctx
        .select_category(category)
        .ok_or_else(|| anyhow!("Unknown category: {}", category))?;

    // What the page renders, in gallery order
    let works: Vec<&Work> = ctx
        .gallery()
        .figures()
        .iter()
        .filter_map(|figure| ctx.store().work(figure.work_id))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&works)?);
        return Ok(());
    }

    if works.is_empty() {
        println!("{}", ctx.messages.message("gallery.empty").dimmed());
        return Ok(());
    }

    let mut table = create_table();
    table.set_header(vec!["ID", "Title", "Category", "Image"]);
    for work in &works {
        table.add_row(vec![
            work.id.to_string(),
            work.title.clone(),
            work.category_name().unwrap_or("-").to_string(),
            work.image_url.clone(),
        ]);
    }

    println!("{}", ctx.messages.message("gallery.title").bold());
    println!("{}", table);
    println!("{}", format!("{} of {} works", shown, ctx.store().len()).dimmed());

    Ok(())
}
