//! Form decoding into task details and patches.

use crate::form::FormFields;
use crate::task::domain::{Field, TaskDetails, TaskDomainError, TaskPatch};
use crate::test_support::utc;
use rstest::rstest;

#[test]
fn missing_keys_are_unset_and_blank_keys_are_null() {
    let form = FormFields::new().with("title", "Write spec").with("description", "");

    let patch = TaskPatch::from_form(&form).expect("form decodes");

    assert_eq!(patch.title, Field::Value("Write spec".to_owned()));
    assert_eq!(patch.description, Field::Null);
    assert!(patch.start_time.is_unset());
    assert!(patch.rank.is_unset());
}

#[test]
fn typed_fields_are_parsed() {
    let form: FormFields = [
        ("startTime", "2025-04-07T09:30:00Z"),
        ("duration", "30"),
        ("completed", "on"),
        ("hidden", "false"),
        ("rank", "0"),
    ]
    .into_iter()
    .collect();

    let details = TaskDetails::from_form(&form).expect("form decodes");

    assert_eq!(details.start_time, Some(utc(2025, 4, 7, 9, 30)));
    assert_eq!(details.duration_minutes, Some(30));
    assert_eq!(details.completed, Some(true));
    assert_eq!(details.hidden, Some(false));
    assert_eq!(details.rank, Some(0));
    assert_eq!(details.title, None);
}

#[rstest]
#[case("duration", "half an hour")]
#[case("startTime", "tomorrow")]
#[case("completed", "maybe")]
#[case("projectId", "garden")]
fn malformed_values_name_their_field(#[case] key: &str, #[case] value: &str) {
    let form = FormFields::new().with(key, value);

    let result = TaskPatch::from_form(&form);

    assert!(matches!(
        result,
        Err(TaskDomainError::Field(ref err)) if err.field == key && err.value == value
    ));
}

#[test]
fn negative_duration_in_a_form_is_rejected() {
    let form = FormFields::new().with("duration", "-15");

    assert_eq!(
        TaskPatch::from_form(&form),
        Err(TaskDomainError::NegativeDuration(-15))
    );
}
