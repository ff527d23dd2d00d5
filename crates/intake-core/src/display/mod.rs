//! Markdown formatting for form views, answers and drafts.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! wrappers in this module add context such as a current-step marker or the
//! grouping of answers by step. Everything renders as markdown, which the CLI
//! passes to its terminal renderer.
//!
//! - [`collections`]: `DraftSummaries`, `StepList`
//! - [`views`]: `FormView`/`StepView` rendering and `AnswerSheet`
//! - [`status`]: `OperationStatus` confirmation lines
//! - [`datetime`]: `LocalDateTime`
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use intake_core::{display::StepList, StepCatalog};
//! use intake_core::models::Answers;
//!
//! let catalog = StepCatalog::family_law();
//! let list = StepList::new(catalog.visible(&Answers::new())).with_current(0);
//! assert!(list.to_string().contains("1. ➤ About You (`introduction`)"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;
pub mod views;

pub use collections::{DraftSummaries, StepList};
pub use datetime::LocalDateTime;
pub use status::OperationStatus;
pub use views::AnswerSheet;
