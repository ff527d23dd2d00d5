//! Core library for multi-step intake forms.
//!
//! This crate implements the controller behind a conditionally branching
//! questionnaire such as a family-law client intake: which steps are visible
//! for the current answers, where the user is, how repeatable groups
//! (children, assets, liabilities) are edited, how drafts are saved and
//! restored, and the one-way submission gate.
//!
//! # Layers
//!
//! - [`models`]: answers, step definitions and draft records
//! - [`catalog`]: the ordered step catalog and the visibility filter
//! - [`answers`]: the answer store and its repeatable-group operations
//! - [`form`]: the [`IntakeForm`] session tying it all together
//! - [`draft`]: the [`DraftStore`] capability, its backends and the async
//!   [`Drafts`] administration service
//! - [`display`]: markdown rendering for terminals
//!
//! # Quick Start
//!
//! ```rust
//! use intake_core::{FormView, IntakeForm, MemoryDraftStore, Navigation, StepCatalog};
//!
//! # fn main() -> intake_core::Result<()> {
//! let mut form = IntakeForm::open(
//!     "family-law-intake",
//!     StepCatalog::family_law(),
//!     MemoryDraftStore::new(),
//! )?;
//!
//! form.set_answer("full-name", "Jane Doe");
//! assert_eq!(form.go_next(), Navigation::Moved { from: 0, to: 1 });
//! form.save_draft()?;
//!
//! if let FormView::Step(view) = form.view() {
//!     println!("{view}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod answers;
pub mod catalog;
pub mod display;
pub mod draft;
pub mod error;
pub mod form;
pub mod models;

// Re-export commonly used types
pub use answers::AnswerStore;
pub use catalog::{visible_steps, StepCatalog, FAMILY_LAW_FORM};
pub use display::{AnswerSheet, DraftSummaries, OperationStatus, StepList};
pub use draft::{DraftStore, Drafts, DraftsBuilder, MemoryDraftStore, SqliteDraftStore};
pub use error::{IntakeError, Result};
pub use form::{FormView, IntakeForm, Navigation, StepView};
pub use models::{AnswerValue, Answers, DraftRecord, DraftSummary, StepDefinition, SubRecord};
