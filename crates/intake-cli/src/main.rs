//! Intake CLI Application
//!
//! Command-line front end for filling in multi-step intake forms and
//! managing their saved drafts.

mod args;
mod cli;
mod renderer;
mod session;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use intake_core::DraftsBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        form,
        command,
    } = Args::parse();

    let drafts = DraftsBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize draft storage")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Intake started");

    let cli = Cli::new(drafts, renderer, form);
    match command {
        Some(Fill) => cli.fill().await,
        Some(Show) => cli.show_answers().await,
        Some(Answer(args)) => cli.answer(args).await,
        Some(Draft { command }) => cli.handle_draft_command(command).await,
        Some(Steps) | None => cli.list_steps().await,
    }
}
