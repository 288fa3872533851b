//! Folio CLI - the portfolio gallery in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_core::services::LogEvent;

mod commands;
mod output;

use commands::{categories, delete, login, logout, logs, render, status, upload, works};

/// Folio - browse and edit a portfolio gallery
#[derive(Parser)]
#[command(name = "folio", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show API, session and gallery summary
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List works, optionally filtered by category name
    Works {
        /// Category name ("tous" or "all" for every work)
        #[arg(long, short)]
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Log in and store the session token
    Login {
        /// Account email
        #[arg(long, short)]
        email: Option<String>,
        /// Password (read from stdin when piped, prompted otherwise)
        #[arg(long, short)]
        password: Option<String>,
    },

    /// Log out (clears the session token)
    Logout {
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// Add a work to the gallery
    Upload {
        /// Image file (jpg or png, 4 MB max)
        file: PathBuf,
        /// Work title
        #[arg(long, short)]
        title: String,
        /// Category id or name
        #[arg(long, short)]
        category: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a work
    Delete {
        /// Work id
        id: u32,
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// Write the gallery page as HTML
    Render {
        /// Output file (stdout if omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Show only this category
        #[arg(long, short)]
        category: Option<String>,
        /// Open the edit modal on this view
        #[arg(long, value_enum)]
        modal: Option<render::ModalView>,
    },

    /// View and manage the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Status { .. } => "status",
            Commands::Works { .. } => "works",
            Commands::Categories { .. } => "categories",
            Commands::Login { .. } => "login",
            Commands::Logout { .. } => "logout",
            Commands::Upload { .. } => "upload",
            Commands::Delete { .. } => "delete",
            Commands::Render { .. } => "render",
            Commands::Logs { .. } => "logs",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Released before the command runs; commands open their own logger
    {
        let logger = commands::get_logger();
        commands::log_event(
            &logger,
            LogEvent::new("command_executed").with_command(cli.command.name()),
        );
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Status { json } => status::run(json),
        Commands::Works { category, json } => works::run(category.as_deref(), json),
        Commands::Categories { json } => categories::run(json),
        Commands::Login { email, password } => login::run(email, password),
        Commands::Logout { force } => logout::run(force),
        Commands::Upload {
            file,
            title,
            category,
            json,
        } => upload::run(&file, &title, &category, json),
        Commands::Delete { id, force } => delete::run(id, force),
        Commands::Render {
            output,
            category,
            modal,
        } => render::run(output.as_deref(), category.as_deref(), modal),
        Commands::Logs { command } => logs::run(command),
    }
}
