//! Data models for intake forms.
//!
//! This module contains the domain types shared by the form controller, the
//! draft stores and the display layer. Display implementations live in
//! [`crate::display::models`] so that the data definitions stay free of
//! presentation concerns.
//!
//! - [`answer`]: answer values and repeatable sub-records
//! - [`step`]: step definitions, visibility conditions and field specs
//! - [`draft`]: stored draft records and the draft key format
//!
//! # Examples
//!
//! ```rust
//! use intake_core::models::{AnswerValue, Answers, StepDefinition};
//!
//! let lawyer = StepDefinition::new("lawyer", "Their Lawyer").shown_when("other-lawyer", "Yes");
//!
//! let mut answers = Answers::new();
//! assert!(!lawyer.is_visible(&answers));
//!
//! answers.insert("other-lawyer".to_string(), AnswerValue::from("Yes"));
//! assert!(lawyer.is_visible(&answers));
//! ```

pub mod answer;
pub mod draft;
pub mod step;

#[cfg(test)]
mod tests;

pub use answer::{AnswerValue, Answers, SubRecord};
pub use draft::{draft_key, form_id_from_key, DraftRecord, DraftSummary, DRAFT_KEY_PREFIX};
pub use step::{FieldKind, FieldSpec, StepCondition, StepDefinition};
