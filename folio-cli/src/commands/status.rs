//! Status command - API, session and gallery summary

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::get_context;
use crate::output::create_table;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusSummary {
    api_base_url: String,
    language: String,
    authenticated: bool,
    login_control: String,
    total_works: usize,
    total_categories: usize,
}

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;

    let status = StatusSummary {
        api_base_url: ctx.config.api_base_url.clone(),
        language: ctx.messages.language().to_string(),
        authenticated: ctx.is_authenticated(),
        login_control: ctx.login_control().label().to_string(),
        total_works: ctx.store().len(),
        total_categories: ctx.store().categories().len(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}", "Gallery Status".bold());
    println!();

    let mut table = create_table();
    table.add_row(vec!["API", status.api_base_url.as_str()]);
    table.add_row(vec!["Language", status.language.as_str()]);
    let session = if status.authenticated {
        "logged in (edit mode)".green().to_string()
    } else {
        "anonymous".dimmed().to_string()
    };
    table.add_row(vec!["Session".to_string(), session]);
    table.add_row(vec!["Login control", status.login_control.as_str()]);
    table.add_row(vec!["Works".to_string(), status.total_works.to_string()]);
    table.add_row(vec!["Categories".to_string(), status.total_categories.to_string()]);

    println!("{}", table);

    Ok(())
}
