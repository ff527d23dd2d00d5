use std::path::PathBuf;

use clap::{Parser, Subcommand};
use intake_core::FAMILY_LAW_FORM;

use crate::cli::{AnswerArgs, DraftCommands};

/// Fill in and manage intake forms from the terminal
///
/// Intake walks through a multi-step questionnaire whose later steps depend
/// on earlier answers. Progress is kept as a draft in a local SQLite database
/// and only changes when explicitly saved.
#[derive(Parser)]
#[command(version, about, name = "intake")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/intake/drafts.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Identifier of the form; drafts are stored per form
    #[arg(long, global = true, default_value = FAMILY_LAW_FORM)]
    pub form: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Intake CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Fill in the form interactively, one step at a time
    #[command(alias = "f")]
    Fill,
    /// List the steps visible for the saved answers
    Steps,
    /// Show the saved answers
    Show,
    /// Set one answer in the saved draft
    #[command(alias = "a")]
    Answer(AnswerArgs),
    /// Manage saved drafts
    #[command(alias = "d")]
    Draft {
        #[command(subcommand)]
        command: DraftCommands,
    },
}
