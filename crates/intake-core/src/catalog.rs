//! Step catalog and visibility filter.
//!
//! A [`StepCatalog`] is the fixed, ordered list of steps a form can show. The
//! steps actually presented are derived from it on demand by
//! [`visible_steps`], which keeps every unconditional step and every
//! conditional step whose condition holds, in catalog order.

use std::collections::HashSet;

use crate::{
    error::{IntakeError, Result},
    models::{Answers, FieldSpec, StepDefinition},
};

/// Form identifier of the built-in family-law intake.
pub const FAMILY_LAW_FORM: &str = "family-law-intake";

/// Returns the steps visible for `answers`, in their original order.
///
/// Steps with unmet conditions are skipped silently.
///
/// ```rust
/// use intake_core::{catalog::visible_steps, models::{AnswerValue, Answers, StepDefinition}};
///
/// let steps = vec![
///     StepDefinition::new("otherside", "The Other Party"),
///     StepDefinition::new("lawyer", "Their Lawyer").shown_when("other-lawyer", "Yes"),
///     StepDefinition::new("relationship", "Your Relationship"),
/// ];
///
/// let mut answers = Answers::new();
/// let ids: Vec<_> = visible_steps(&steps, &answers).iter().map(|s| s.id.as_str()).collect();
/// assert_eq!(ids, ["otherside", "relationship"]);
///
/// answers.insert("other-lawyer".into(), AnswerValue::from("Yes"));
/// let ids: Vec<_> = visible_steps(&steps, &answers).iter().map(|s| s.id.as_str()).collect();
/// assert_eq!(ids, ["otherside", "lawyer", "relationship"]);
/// ```
pub fn visible_steps<'a>(steps: &'a [StepDefinition], answers: &Answers) -> Vec<&'a StepDefinition> {
    steps.iter().filter(|step| step.is_visible(answers)).collect()
}

/// Ordered, validated collection of step definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct StepCatalog {
    steps: Vec<StepDefinition>,
}

impl StepCatalog {
    /// Builds a catalog from steps in presentation order.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidCatalog` if the list is empty, contains a
    /// duplicate step id, or has no unconditional step.
    pub fn new(steps: Vec<StepDefinition>) -> Result<Self> {
        if steps.is_empty() {
            return Err(IntakeError::invalid_catalog("catalog has no steps"));
        }

        let mut seen = HashSet::new();
        for step in &steps {
            if !seen.insert(step.id.as_str()) {
                return Err(IntakeError::invalid_catalog(format!(
                    "duplicate step id '{}'",
                    step.id
                )));
            }
        }

        if steps.iter().all(|step| step.condition.is_some()) {
            return Err(IntakeError::invalid_catalog(
                "at least one step must be unconditional",
            ));
        }

        Ok(Self { steps })
    }

    /// All steps, including hidden ones.
    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    /// Steps visible for the given answers.
    pub fn visible(&self, answers: &Answers) -> Vec<&StepDefinition> {
        visible_steps(&self.steps, answers)
    }

    /// Catalog position of a step id.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|step| step.id == id)
    }

    /// Looks up a step by id.
    pub fn get(&self, id: &str) -> Option<&StepDefinition> {
        self.steps.iter().find(|step| step.id == id)
    }

    /// Finds the question asked under answer key `key`, on any step.
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.steps
            .iter()
            .flat_map(|step| &step.fields)
            .find(|field| field.key == key)
    }

    /// Number of steps, including hidden ones.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a validated catalog.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The family-law intake questionnaire.
    pub fn family_law() -> Self {
        Self {
            steps: family_law_steps(),
        }
    }
}

fn other_party_fields() -> [FieldSpec; 4] {
    [
        FieldSpec::text("other-name", "Their full name"),
        FieldSpec::date("other-date-of-birth", "Their date of birth"),
        FieldSpec::text("other-address", "Their current address"),
        FieldSpec::text("other-phone", "Their phone number"),
    ]
}

#[allow(clippy::too_many_lines)]
fn family_law_steps() -> Vec<StepDefinition> {
    let introduction = StepDefinition::new("introduction", "About You")
        .field(FieldSpec::text("full-name", "Full name"))
        .field(FieldSpec::date("date-of-birth", "Date of birth"))
        .field(FieldSpec::text("address", "Current address"))
        .field(FieldSpec::text("phone", "Phone number"))
        .field(FieldSpec::text("email", "Email address"));

    let otherside = other_party_fields()
        .into_iter()
        .fold(
            StepDefinition::new("otherside", "The Other Party"),
            StepDefinition::field,
        )
        .field(FieldSpec::choice(
            "other-lawyer",
            "Does the other party have a lawyer?",
            &["Yes", "No", "Unsure"],
        ));

    vec![
        introduction,
        otherside,
        StepDefinition::new("lawyer", "The Other Party's Lawyer")
            .shown_when("other-lawyer", "Yes")
            .field(FieldSpec::text("other-lawyer-name", "Lawyer's name"))
            .field(FieldSpec::text("other-lawyer-firm", "Firm"))
            .field(FieldSpec::text("other-lawyer-contact", "Email or phone")),
        StepDefinition::new("relationship", "Your Relationship")
            .field(FieldSpec::date("relationship-start", "When did the relationship start?"))
            .field(FieldSpec::date("cohabitation-start", "When did you start living together?")),
        StepDefinition::new("marriage", "Marriage")
            .field(FieldSpec::yes_no("married", "Are you married to the other party?"))
            .field(FieldSpec::date("marriage-date", "Date of marriage"))
            .field(FieldSpec::text("marriage-place", "Place of marriage")),
        StepDefinition::new("separation", "Separation")
            .shown_when("married", "Yes")
            .field(FieldSpec::yes_no("separated", "Have you separated?"))
            .field(FieldSpec::date("separation-date", "Date of separation"))
            .field(FieldSpec::yes_no("same-roof", "Are you separated under one roof?")),
        StepDefinition::new("divorce", "Divorce")
            .shown_when("separated", "Yes")
            .field(FieldSpec::yes_no("divorce-applied", "Has a divorce application been filed?"))
            .field(FieldSpec::date("divorce-order-date", "Date of divorce order")),
        StepDefinition::new("living", "Living Arrangements")
            .field(FieldSpec::text("living-arrangements", "Where are you living now?"))
            .field(FieldSpec::text("living-with", "Who lives with you?"))
            .field(FieldSpec::yes_no("has-children", "Do you have children with the other party?")),
        StepDefinition::new("children", "Children")
            .shown_when("has-children", "Yes")
            .field(FieldSpec::repeat(
                "children",
                "Children",
                vec![
                    FieldSpec::text("name", "Child's name"),
                    FieldSpec::date("date-of-birth", "Date of birth"),
                    FieldSpec::text("lives-with", "Lives with"),
                ],
            ))
            .field(FieldSpec::text("parenting-arrangements", "Current parenting arrangements")),
        StepDefinition::new("financial", "Financial Circumstances")
            .field(FieldSpec::text("income", "Your annual income"))
            .field(FieldSpec::text("other-income", "The other party's annual income"))
            .field(FieldSpec::repeat(
                "assets",
                "Assets",
                vec![
                    FieldSpec::text("description", "Description"),
                    FieldSpec::text("value", "Estimated value"),
                    FieldSpec::choice("owner", "Owned by", &["Me", "Other party", "Joint"]),
                ],
            ))
            .field(FieldSpec::repeat(
                "liabilities",
                "Liabilities",
                vec![
                    FieldSpec::text("description", "Description"),
                    FieldSpec::text("amount", "Amount owing"),
                    FieldSpec::choice("owner", "Owed by", &["Me", "Other party", "Joint"]),
                ],
            )),
        StepDefinition::new("court", "Court and Dispute Resolution")
            .field(FieldSpec::yes_no("existing-orders", "Are there existing court orders?"))
            .field(FieldSpec::yes_no("court-proceedings", "Are court proceedings underway?"))
            .field(FieldSpec::yes_no("undertaken-mediation", "Have you attended mediation?")),
        StepDefinition::new("mediation", "Mediation")
            .shown_when("undertaken-mediation", "Yes")
            .field(FieldSpec::date("mediation-date", "Date of mediation"))
            .field(FieldSpec::text("mediator", "Mediator or service"))
            .field(FieldSpec::text("mediation-outcome", "Outcome")),
        StepDefinition::new("court2", "Court Details")
            .field(FieldSpec::text("court-name", "Court"))
            .field(FieldSpec::text("file-number", "File number"))
            .field(FieldSpec::date("next-court-date", "Next court date")),
        StepDefinition::new("violence", "Family Violence")
            .field(FieldSpec::yes_no("family-violence", "Has there been family violence?"))
            .field(FieldSpec::yes_no("protection-order", "Is there a protection order in place?"))
            .field(FieldSpec::text("safety-concerns", "Current safety concerns")),
        StepDefinition::new("health", "Your Health")
            .field(FieldSpec::yes_no("health-issues", "Do you have health issues we should know about?"))
            .field(FieldSpec::text("health-details", "Details")),
        StepDefinition::new("health-other", "The Other Party's Health")
            .field(FieldSpec::yes_no("other-health-issues", "Does the other party have health issues?"))
            .field(FieldSpec::text("other-health-details", "Details")),
        StepDefinition::new("legal-advice", "Previous Legal Advice")
            .field(FieldSpec::yes_no("prior-advice", "Have you had legal advice about this matter?"))
            .field(FieldSpec::text("prior-lawyer", "Who advised you?")),
        StepDefinition::new("priorities", "Your Priorities")
            .field(FieldSpec::text("priorities", "What matters most to you?"))
            .field(FieldSpec::text("desired-outcome", "What outcome are you hoping for?")),
        StepDefinition::new("final", "Anything Else")
            .field(FieldSpec::text("additional-info", "Anything else we should know?"))
            .field(FieldSpec::yes_no("consent", "Do you consent to us storing this information?")),
    ]
}
