//! Interactive, line-driven form session.
//!
//! Each input line is one [`FormCommand`]. Record and step numbers are
//! 1-based, as shown on screen. Errors are reported and the session carries
//! on; it ends on `quit` or end of input. Nothing is saved unless `save` is
//! entered.

use std::{collections::BTreeMap, io::BufRead, str::FromStr};

use anyhow::{Context, Result};
use intake_core::{
    AnswerSheet, DraftStore, IntakeForm, Navigation, OperationStatus, StepList,
};
use log::debug;

use crate::renderer::TerminalRenderer;

const HELP: &str = "\
# Commands

- `next` / `n`: go to the next step (submits on the last step)
- `back` / `b`: go to the previous step
- `jump <step>`: go to a step by number
- `set <key> <value>`: answer a question
- `add <group>`: add a record to a repeatable group
- `edit <group> <record> <field> <value>`: answer a question of a record
- `remove <group> <record>`: remove a record (the first one stays)
- `save`: save a draft of your answers
- `submit`: submit the form
- `show`: show all answers
- `steps`: list the steps
- `quit` / `q`: leave without saving
";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Next,
    Back,
    Jump(usize),
    Set { key: String, value: String },
    Add(String),
    Edit {
        group: String,
        record: usize,
        field: String,
        value: String,
    },
    Remove { group: String, record: usize },
    Save,
    Submit,
    Show,
    Steps,
    Help,
    Quit,
}

fn one_based(word: Option<&str>, what: &str) -> Result<usize, String> {
    let word = word.ok_or_else(|| format!("missing {what} number"))?;
    match word.parse::<usize>() {
        Ok(0) => Err(format!("{what} numbers start at 1")),
        Ok(n) => Ok(n - 1),
        Err(_) => Err(format!("'{word}' is not a {what} number")),
    }
}

fn required<'a>(word: Option<&'a str>, what: &str) -> Result<&'a str, String> {
    word.ok_or_else(|| format!("missing {what}"))
}

impl FromStr for FormCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or("empty command")?.to_lowercase();

        let parsed = match command.as_str() {
            "next" | "n" => FormCommand::Next,
            "back" | "b" | "previous" => FormCommand::Back,
            "jump" | "j" => FormCommand::Jump(one_based(words.next(), "step")?),
            "set" => {
                let key = required(words.next(), "question key")?.to_string();
                let value = words.collect::<Vec<_>>().join(" ");
                return Ok(FormCommand::Set { key, value });
            }
            "add" => FormCommand::Add(required(words.next(), "group")?.to_string()),
            "edit" => {
                let group = required(words.next(), "group")?.to_string();
                let record = one_based(words.next(), "record")?;
                let field = required(words.next(), "field")?.to_string();
                let value = words.collect::<Vec<_>>().join(" ");
                return Ok(FormCommand::Edit {
                    group,
                    record,
                    field,
                    value,
                });
            }
            "remove" | "rm" => FormCommand::Remove {
                group: required(words.next(), "group")?.to_string(),
                record: one_based(words.next(), "record")?,
            },
            "save" => FormCommand::Save,
            "submit" => FormCommand::Submit,
            "show" => FormCommand::Show,
            "steps" => FormCommand::Steps,
            "help" | "?" => FormCommand::Help,
            "quit" | "q" | "exit" => FormCommand::Quit,
            other => return Err(format!("unknown command '{other}', try `help`")),
        };

        match words.next() {
            Some(extra) => Err(format!("unexpected '{extra}' after `{command}`")),
            None => Ok(parsed),
        }
    }
}

/// Drives an [`IntakeForm`] from text commands.
pub struct FillSession<'r, S> {
    form: IntakeForm<S>,
    renderer: &'r TerminalRenderer,
}

impl<'r, S: DraftStore> FillSession<'r, S> {
    pub fn new(form: IntakeForm<S>, renderer: &'r TerminalRenderer) -> Self {
        Self { form, renderer }
    }

    /// Shows the current step, then executes commands read from `input`.
    pub fn run<R: BufRead>(mut self, input: R) -> Result<()> {
        self.render_view()?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match line.parse::<FormCommand>() {
                Ok(FormCommand::Quit) => break,
                Ok(command) => {
                    debug!("Executing {command:?}");
                    if let Err(e) = self.execute(command) {
                        self.render_status(OperationStatus::failure(e.to_string()))?;
                    }
                }
                Err(message) => self.render_status(OperationStatus::failure(message))?,
            }
        }
        Ok(())
    }

    fn execute(&mut self, command: FormCommand) -> intake_core::Result<()> {
        match command {
            FormCommand::Next => {
                let navigation = self.form.go_next();
                self.after_navigation(navigation, "Already submitted.");
            }
            FormCommand::Back => {
                let navigation = self.form.go_previous();
                let message = if self.form.is_submitted() {
                    "Already submitted."
                } else {
                    "Already on the first step."
                };
                self.after_navigation(navigation, message);
            }
            FormCommand::Jump(index) => {
                let navigation = self.form.jump_to(index)?;
                self.after_navigation(navigation, "Already on that step.");
            }
            FormCommand::Set { key, value } => {
                self.form.set_answer(key, value);
                self.print_view();
            }
            FormCommand::Add(group) => {
                self.form.add_list_item(&group, BTreeMap::new())?;
                self.print_view();
            }
            FormCommand::Edit {
                group,
                record,
                field,
                value,
            } => {
                self.form.set_list_item(&group, record, [(field, value)])?;
                self.print_view();
            }
            FormCommand::Remove { group, record } => {
                if self.form.remove_list_item(&group, record)? {
                    self.print_view();
                } else {
                    self.print_status(OperationStatus::failure(
                        "The first record of a group cannot be removed",
                    ));
                }
            }
            FormCommand::Save => {
                self.form.save_draft()?;
                self.print_status(OperationStatus::success("Draft saved"));
            }
            FormCommand::Submit => {
                let navigation = self.form.submit();
                self.after_navigation(navigation, "Already submitted.");
            }
            FormCommand::Show => self.print(&AnswerSheet {
                catalog: self.form.catalog(),
                answers: self.form.answers(),
            }),
            FormCommand::Steps => {
                let list = StepList::new(self.form.visible_steps());
                let list = if self.form.is_submitted() {
                    list
                } else {
                    list.with_current(self.form.position())
                };
                self.print(&list);
            }
            FormCommand::Help => self.print(&HELP),
            FormCommand::Quit => {}
        }
        Ok(())
    }

    fn after_navigation(&self, navigation: Navigation, unchanged: &str) {
        if navigation.scrolls_to_top() {
            self.print_view();
        } else {
            self.print_status(OperationStatus::failure(unchanged));
        }
    }

    fn render_view(&self) -> Result<()> {
        self.renderer.render_display(&self.form.view())
    }

    fn render_status(&self, status: OperationStatus) -> Result<()> {
        self.renderer.render_display(&status)
    }

    // Render failures inside a command are logged, not fatal.
    fn print(&self, value: &impl std::fmt::Display) {
        if let Err(e) = self.renderer.render_display(value) {
            log::warn!("Failed to render output: {e}");
        }
    }

    fn print_view(&self) {
        self.renderer.render("\n").ok();
        self.print(&self.form.view());
    }

    fn print_status(&self, status: OperationStatus) {
        self.print(&status);
    }
}
