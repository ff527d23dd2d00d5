//! Command handlers and their clap argument types.
//!
//! Each handler opens the form or the draft database through
//! [`intake_core::Drafts`], performs one operation and renders the markdown
//! result with the [`TerminalRenderer`].

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use intake_core::{
    models::FieldSpec, AnswerSheet, Drafts, IntakeForm, OperationStatus, SqliteDraftStore,
    StepCatalog, StepList,
};
use tokio::task;

use crate::{renderer::TerminalRenderer, session::FillSession};

/// Set a single answer in the saved draft
///
/// Opens the stored draft for the current form, replaces the answer at KEY
/// and saves the draft again. Only scalar answers can be set this way; use
/// `fill` to edit repeatable groups such as children or assets.
#[derive(Args)]
pub struct AnswerArgs {
    #[arg(help = "Question key, e.g. full-name or other-lawyer")]
    pub key: String,
    #[arg(help = "New value; an empty string clears the answer text")]
    pub value: String,
}

/// Arguments naming a stored draft
#[derive(Args)]
pub struct DraftFormArgs {
    #[arg(help = "Form identifier the draft was saved under")]
    pub form: String,
}

#[derive(Subcommand)]
pub enum DraftCommands {
    /// List saved drafts
    #[command(alias = "l")]
    List,
    /// Show a saved draft and its answers
    #[command(alias = "s")]
    Show(DraftFormArgs),
    /// Delete a saved draft
    Clear(DraftFormArgs),
}

/// Dispatches CLI commands against the draft database.
pub struct Cli {
    drafts: Drafts,
    renderer: TerminalRenderer,
    form_id: String,
}

impl Cli {
    pub fn new(drafts: Drafts, renderer: TerminalRenderer, form_id: String) -> Self {
        Self {
            drafts,
            renderer,
            form_id,
        }
    }

    async fn open_form(&self) -> Result<IntakeForm<SqliteDraftStore>> {
        self.drafts
            .open_form(&self.form_id, StepCatalog::family_law())
            .await
            .with_context(|| format!("Failed to open form '{}'", self.form_id))
    }

    /// Runs the interactive session on stdin until `quit` or end of input.
    pub async fn fill(self) -> Result<()> {
        let form = self.open_form().await?;
        let renderer = self.renderer;

        task::spawn_blocking(move || {
            let stdin = std::io::stdin();
            FillSession::new(form, &renderer).run(stdin.lock())
        })
        .await
        .context("Interactive session failed")?
    }

    /// Lists the steps visible for the saved answers.
    pub async fn list_steps(&self) -> Result<()> {
        let form = self.open_form().await?;
        self.renderer
            .render_display(&StepList::new(form.visible_steps()))
    }

    /// Shows the saved answers grouped by step.
    pub async fn show_answers(&self) -> Result<()> {
        let form = self.open_form().await?;
        self.renderer.render_display(&AnswerSheet {
            catalog: form.catalog(),
            answers: form.answers(),
        })
    }

    /// Sets one answer and saves the draft.
    pub async fn answer(&self, args: AnswerArgs) -> Result<()> {
        let mut form = self.open_form().await?;
        let AnswerArgs { key, value } = args;

        if form.catalog().field(&key).is_some_and(FieldSpec::is_repeatable) {
            bail!("`{key}` is a repeatable group; use `intake fill` to edit its records");
        }

        let (form_id, key) = task::spawn_blocking(move || {
            form.set_answer(key.clone(), value);
            form.save_draft().map(|()| (form.form_id().to_string(), key))
        })
        .await
        .context("Draft task failed")?
        .context("Failed to save draft")?;

        self.renderer.render_display(&OperationStatus::success(format!(
            "Saved `{key}` to the draft of '{form_id}'"
        )))
    }

    pub async fn handle_draft_command(&self, command: DraftCommands) -> Result<()> {
        match command {
            DraftCommands::List => {
                let drafts = self
                    .drafts
                    .list_drafts()
                    .await
                    .context("Failed to list drafts")?;
                self.renderer.render_display(&drafts)
            }
            DraftCommands::Show(DraftFormArgs { form }) => {
                let record = self
                    .drafts
                    .get_draft(&form)
                    .await
                    .context("Failed to read draft")?;
                let Some(record) = record else {
                    return self.renderer.render_display(&OperationStatus::failure(
                        format!("No draft found for form '{form}'"),
                    ));
                };

                self.renderer.render_display(&record)?;
                if let Ok(answers) = record.answers() {
                    let catalog = StepCatalog::family_law();
                    self.renderer.render("\n")?;
                    self.renderer.render_display(&AnswerSheet {
                        catalog: &catalog,
                        answers: &answers,
                    })?;
                }
                Ok(())
            }
            DraftCommands::Clear(DraftFormArgs { form }) => {
                let deleted = self
                    .drafts
                    .delete_draft(&form)
                    .await
                    .context("Failed to delete draft")?;
                let status = if deleted {
                    OperationStatus::success(format!("Cleared the draft of '{form}'"))
                } else {
                    OperationStatus::failure(format!("No draft found for form '{form}'"))
                };
                self.renderer.render_display(&status)
            }
        }
    }
}
