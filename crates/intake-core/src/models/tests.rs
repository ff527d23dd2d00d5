#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;
    use serde_json::json;

    use crate::models::{
        draft_key, form_id_from_key, AnswerValue, Answers, DraftRecord, FieldKind, FieldSpec,
        StepCondition, StepDefinition, SubRecord,
    };

    fn answers_with(key: &str, value: AnswerValue) -> Answers {
        let mut answers = Answers::new();
        answers.insert(key.to_string(), value);
        answers
    }

    #[test]
    fn test_scalar_serializes_as_plain_string() {
        let answers = answers_with("full-name", AnswerValue::from("Jane Doe"));
        let value = serde_json::to_value(&answers).unwrap();
        assert_eq!(value, json!({ "full-name": "Jane Doe" }));
    }

    #[test]
    fn test_records_serialize_flat_with_id() {
        let child = SubRecord::new("r1")
            .with_field("name", "Sam")
            .with_field("date-of-birth", "2015-04-02");
        let answers = answers_with("children", AnswerValue::from(vec![child]));

        let value = serde_json::to_value(&answers).unwrap();
        assert_eq!(
            value,
            json!({ "children": [{ "id": "r1", "name": "Sam", "date-of-birth": "2015-04-02" }] })
        );
    }

    #[test]
    fn test_browser_shaped_draft_deserializes() {
        let raw = r#"{
            "full-name": "Jane Doe",
            "married": "Yes",
            "assets": [{"id": "1700000000000", "description": "House", "value": "650000"}]
        }"#;
        let answers: Answers = serde_json::from_str(raw).unwrap();

        assert_eq!(answers["full-name"].as_scalar(), Some("Jane Doe"));
        let assets = answers["assets"].as_records().unwrap();
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].id, "1700000000000");
        assert_eq!(assets[0].field("description"), Some("House"));
        assert!(!assets[0].fields.contains_key("id"));
    }

    #[test]
    fn test_non_string_values_are_rejected() {
        let raw = r#"{"has-children": true}"#;
        assert!(serde_json::from_str::<Answers>(raw).is_err());
    }

    #[test]
    fn test_condition_requires_exact_scalar_match() {
        let condition = StepCondition::new("married", "Yes");

        assert!(condition.is_met(&answers_with("married", AnswerValue::from("Yes"))));
        assert!(!condition.is_met(&answers_with("married", AnswerValue::from("yes"))));
        assert!(!condition.is_met(&answers_with("married", AnswerValue::from("No"))));
        assert!(!condition.is_met(&Answers::new()));
        assert!(!condition.is_met(&answers_with(
            "married",
            AnswerValue::from(vec![SubRecord::new("Yes")])
        )));
    }

    #[test]
    fn test_unconditional_step_always_visible() {
        let step = StepDefinition::new("introduction", "About You");
        assert!(step.is_visible(&Answers::new()));
    }

    #[test]
    fn test_repeatable_keys() {
        let step = StepDefinition::new("financial", "Finances")
            .field(FieldSpec::text("income", "Income"))
            .field(FieldSpec::repeat("assets", "Assets", vec![]))
            .field(FieldSpec::repeat("liabilities", "Liabilities", vec![]));

        let keys: Vec<&str> = step.repeatable_keys().collect();
        assert_eq!(keys, vec!["assets", "liabilities"]);
    }

    #[test]
    fn test_yes_no_field_options() {
        let field = FieldSpec::yes_no("married", "Are you married?");
        assert_eq!(
            field.kind,
            FieldKind::Choice {
                options: vec!["Yes".to_string(), "No".to_string()]
            }
        );
        assert!(!field.is_repeatable());
    }

    #[test]
    fn test_draft_key_format() {
        let key = draft_key("family-law-intake");
        assert_eq!(key, "intake-form-family-law-intake");
        assert_eq!(form_id_from_key(&key), Some("family-law-intake"));
        assert_eq!(form_id_from_key("something-else"), None);
    }

    #[test]
    fn test_draft_record_answers() {
        let record = DraftRecord {
            form_id: "family-law-intake".to_string(),
            blob: r#"{"full-name":"Jane Doe"}"#.to_string(),
            saved_at: Timestamp::from_second(1640995200).unwrap(),
        };
        let answers = record.answers().unwrap();
        assert_eq!(answers["full-name"].as_scalar(), Some("Jane Doe"));

        let corrupt = DraftRecord {
            blob: "{not json".to_string(),
            ..record
        };
        assert!(corrupt.answers().is_err());
    }
}
