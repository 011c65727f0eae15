use super::*;

fn filled_form() -> ContactFormState {
    let mut form = ContactFormState::default();
    form.set_field(Field::Name, "Alice".to_owned());
    form.set_field(Field::Email, "a@b.com".to_owned());
    form.set_field(Field::Subject, "bug".to_owned());
    form.set_field(Field::Message, "it broke".to_owned());
    form
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_form_is_empty_and_editing() {
    let form = ContactFormState::default();
    assert_eq!(form.fields, ContactFields::default());
    assert_eq!(form.status, SubmitStatus::Editing);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn submit_with_empty_field_errors_and_retains_values() {
    let mut form = ContactFormState::default();
    form.set_field(Field::Name, "Alice".to_owned());
    form.set_field(Field::Subject, "feedback".to_owned());
    form.set_field(Field::Message, "hi".to_owned());

    form.submit();

    assert_eq!(form.status, SubmitStatus::Error);
    assert_eq!(form.fields.name, "Alice");
    assert_eq!(form.fields.email, "");
    assert_eq!(form.fields.subject, "feedback");
    assert_eq!(form.fields.message, "hi");
}

#[test]
fn submit_with_all_fields_empty_errors() {
    let mut form = ContactFormState::default();
    form.submit();
    assert_eq!(form.status, SubmitStatus::Error);
}

#[test]
fn whitespace_only_field_passes_validation() {
    // Emptiness is an empty-string check only; no trimming happens.
    let mut form = filled_form();
    form.set_field(Field::Message, "   ".to_owned());

    form.submit();

    assert_eq!(form.status, SubmitStatus::Acknowledged);
}

// =============================================================
// Acknowledgment cycle
// =============================================================

#[test]
fn successful_submit_acknowledges_and_clears_fields_immediately() {
    let mut form = filled_form();

    form.submit();

    assert_eq!(form.status, SubmitStatus::Acknowledged);
    assert_eq!(form.fields, ContactFields::default());
}

#[test]
fn submit_during_acknowledgment_window_fails_validation() {
    let mut form = filled_form();
    form.submit();
    assert_eq!(form.status, SubmitStatus::Acknowledged);

    // Fields are already empty, so a second submit can only error.
    form.submit();
    assert_eq!(form.status, SubmitStatus::Error);
}

#[test]
fn acknowledge_elapsed_returns_to_editing() {
    let mut form = filled_form();
    form.submit();

    form.acknowledge_elapsed();

    assert_eq!(form.status, SubmitStatus::Editing);
}

#[test]
fn acknowledge_elapsed_is_a_noop_outside_the_window() {
    let mut form = ContactFormState::default();
    form.submit();
    assert_eq!(form.status, SubmitStatus::Error);

    form.acknowledge_elapsed();
    assert_eq!(form.status, SubmitStatus::Error);

    let mut editing = ContactFormState::default();
    editing.acknowledge_elapsed();
    assert_eq!(editing.status, SubmitStatus::Editing);
}

// =============================================================
// Error clearing on edit
// =============================================================

#[test]
fn editing_any_field_clears_the_error() {
    for field in [Field::Name, Field::Email, Field::Subject, Field::Message] {
        let mut form = ContactFormState::default();
        form.set_field(Field::Name, "Alice".to_owned());
        form.submit();
        assert_eq!(form.status, SubmitStatus::Error);

        form.set_field(field, "x".to_owned());
        assert_eq!(form.status, SubmitStatus::Editing, "field {field:?}");
    }
}

#[test]
fn clearing_the_error_keeps_other_field_values() {
    let mut form = ContactFormState::default();
    form.set_field(Field::Name, "Alice".to_owned());
    form.set_field(Field::Message, "hello".to_owned());
    form.submit();
    assert_eq!(form.status, SubmitStatus::Error);

    form.set_field(Field::Email, "a@b.com".to_owned());

    assert_eq!(form.status, SubmitStatus::Editing);
    assert_eq!(form.fields.name, "Alice");
    assert_eq!(form.fields.message, "hello");
    assert_eq!(form.fields.email, "a@b.com");
}

#[test]
fn the_edit_value_lands_even_while_clearing_an_error() {
    let mut form = ContactFormState::default();
    form.submit();
    assert_eq!(form.status, SubmitStatus::Error);

    form.set_field(Field::Name, "A".to_owned());

    assert_eq!(form.fields.name, "A");
    assert_eq!(form.status, SubmitStatus::Editing);
}

// =============================================================
// Subject selection
// =============================================================

#[test]
fn selecting_a_subject_stores_its_canonical_value() {
    let mut form = ContactFormState::default();
    form.select_subject(Subject::from_value("bug"));
    assert_eq!(form.fields.subject, "bug");
}

#[test]
fn selecting_the_placeholder_clears_the_subject() {
    let mut form = filled_form();
    form.select_subject(Subject::from_value(""));

    assert_eq!(form.fields.subject, "");
    form.submit();
    assert_eq!(form.status, SubmitStatus::Error);
}

#[test]
fn non_enumerated_subject_value_cannot_pass_validation() {
    let mut form = filled_form();
    form.select_subject(Subject::from_value("other"));

    form.submit();
    assert_eq!(form.status, SubmitStatus::Error);
}

#[test]
fn selecting_a_subject_clears_a_standing_error() {
    let mut form = ContactFormState::default();
    form.submit();
    assert_eq!(form.status, SubmitStatus::Error);

    form.select_subject(Some(Subject::Feedback));

    assert_eq!(form.status, SubmitStatus::Editing);
    assert_eq!(form.fields.subject, "feedback");
}

// =============================================================
// Subjects
// =============================================================

#[test]
fn subject_values_round_trip() {
    for subject in Subject::ALL {
        assert_eq!(Subject::from_value(subject.value()), Some(subject));
    }
}

#[test]
fn placeholder_value_is_not_a_valid_subject() {
    assert_eq!(Subject::from_value(""), None);
    assert_eq!(Subject::from_value("other"), None);
}
