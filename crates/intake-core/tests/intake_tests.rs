use std::collections::BTreeMap;

use intake_core::{
    visible_steps, AnswerValue, Answers, FormView, IntakeForm, MemoryDraftStore, Navigation,
    StepCatalog, FAMILY_LAW_FORM,
};

fn ids(form: &IntakeForm<MemoryDraftStore>) -> Vec<String> {
    form.visible_steps().iter().map(|s| s.id.clone()).collect()
}

#[test]
fn test_lawyer_step_end_to_end() {
    let mut form = IntakeForm::open(FAMILY_LAW_FORM, StepCatalog::family_law(), MemoryDraftStore::new())
        .expect("Failed to open form");

    form.set_answer("full-name", "Jane Doe");
    form.set_answer("other-lawyer", "Yes");

    let visible = ids(&form);
    let otherside = visible.iter().position(|id| id == "otherside").unwrap();
    assert_eq!(visible[otherside + 1], "lawyer");

    form.set_answer("other-lawyer", "No");
    assert!(!ids(&form).iter().any(|id| id == "lawyer"));
}

#[test]
fn test_visibility_examples() {
    let catalog = StepCatalog::family_law();
    let has_lawyer = |answers: &Answers| {
        visible_steps(catalog.steps(), answers)
            .iter()
            .any(|step| step.id == "lawyer")
    };

    let mut answers = Answers::new();
    assert!(!has_lawyer(&answers));

    answers.insert("other-lawyer".to_string(), AnswerValue::from("No"));
    assert!(!has_lawyer(&answers));

    answers.insert("other-lawyer".to_string(), AnswerValue::from("Yes"));
    assert!(has_lawyer(&answers));
}

#[test]
#[allow(clippy::too_many_lines)]
fn test_complete_intake_walkthrough() {
    let mut form = IntakeForm::open(FAMILY_LAW_FORM, StepCatalog::family_law(), MemoryDraftStore::new())
        .expect("Failed to open form");

    form.set_answer("full-name", "Jane Doe");
    form.go_next();
    form.set_answer("other-name", "John Doe");
    form.set_answer("other-lawyer", "Unsure");
    assert_eq!(form.go_next(), Navigation::Moved { from: 1, to: 2 });
    assert_eq!(form.current_step().id, "relationship");

    form.go_next();
    form.set_answer("married", "Yes");
    form.go_next();
    assert_eq!(form.current_step().id, "separation");
    form.set_answer("separated", "Yes");
    form.go_next();
    assert_eq!(form.current_step().id, "divorce");

    form.go_next();
    form.set_answer("has-children", "Yes");
    form.go_next();
    assert_eq!(form.current_step().id, "children");
    form.set_list_item("children", 0, [("name", "Sam")]).unwrap();
    form.add_list_item("children", BTreeMap::from([("name".to_string(), "Alex".to_string())]))
        .unwrap();

    form.go_next();
    assert_eq!(form.current_step().id, "financial");
    form.set_list_item("assets", 0, [("description", "House"), ("owner", "Joint")])
        .unwrap();

    form.save_draft().expect("Failed to save draft");

    while !form.is_submitted() {
        form.go_next();
    }
    assert!(matches!(form.view(), FormView::Submitted { .. }));

    let children = form.answer_store().records("children").unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[1].field("name"), Some("Alex"));

    let restored = IntakeForm::open(FAMILY_LAW_FORM, StepCatalog::family_law(), form.into_store())
        .expect("Failed to reopen");
    assert_eq!(restored.answer_store().records("children").unwrap().len(), 2);
    assert!(!restored.is_submitted());
}
