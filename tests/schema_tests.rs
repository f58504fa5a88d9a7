use bankdash_core::signup::{Field, FieldValue, Schema, SignupRecord, SignupStep};

fn valid_record() -> SignupRecord {
    let mut record = SignupRecord::default();
    for (field, value) in [
        (Field::Name, "Alice"),
        (Field::Email, "alice@bank.example"),
        (Field::DateOfBirth, "1990-06-15"),
        (Field::Username, "alice90"),
        (Field::Password, "longenough"),
        (Field::PermanentAddress, "1 Main St"),
        (Field::PresentAddress, "2 Side St"),
        (Field::PostalCode, "1000-001"),
        (Field::City, "Lisbon"),
        (Field::Country, "Portugal"),
        (Field::Currency, "EUR"),
        (Field::TimeZone, "UTC"),
    ] {
        record.set(field, FieldValue::text(value));
    }
    record
}

#[test]
fn full_schema_accepts_a_complete_record() {
    assert!(Schema::signup().validate_all(&valid_record()).is_ok());
}

#[test]
fn identity_messages_match_the_product_copy() {
    let record = SignupRecord::default();
    let errors = Schema::signup()
        .validate_subset(&record, SignupStep::Identity.fields())
        .unwrap_err();

    assert_eq!(
        errors.get(Field::Name),
        Some("Full Name must be at least 2 characters.")
    );
    assert_eq!(errors.get(Field::Email), Some("Invalid email address."));
    assert_eq!(errors.get(Field::DateOfBirth), Some("Use YYYY-MM-DD format."));
    assert_eq!(
        errors.get(Field::Username),
        Some("Username must be at least 3 characters.")
    );
    assert_eq!(
        errors.get(Field::Password),
        Some("Password must be at least 8 characters.")
    );
    assert_eq!(errors.get(Field::ProfilePicture), None);
}

#[test]
fn required_field_messages_carry_the_field_label() {
    let record = SignupRecord::default();
    let errors = Schema::signup()
        .validate_subset(&record, SignupStep::Address.fields())
        .unwrap_err();

    assert_eq!(
        errors.get(Field::PermanentAddress),
        Some("Permanent address is required.")
    );
    assert_eq!(errors.get(Field::PostalCode), Some("Postal code is required."));
    assert_eq!(errors.get(Field::Country), Some("Country is required."));
}

#[test]
fn step_subsets_do_not_leak_into_each_other() {
    // Only the identity fields are filled; validating the identity subset
    // must ignore the still-empty address and preference fields.
    let mut record = SignupRecord::default();
    for (field, value) in [
        (Field::Name, "Alice"),
        (Field::Email, "alice@bank.example"),
        (Field::DateOfBirth, "1990-06-15"),
        (Field::Username, "alice90"),
        (Field::Password, "longenough"),
    ] {
        record.set(field, FieldValue::text(value));
    }

    assert!(Schema::signup()
        .validate_subset(&record, SignupStep::Identity.fields())
        .is_ok());
    assert!(Schema::signup()
        .validate_subset(&record, SignupStep::Address.fields())
        .is_err());
}

#[test]
fn preference_selectors_are_required_but_toggles_are_not() {
    let mut record = valid_record();
    record.set(Field::Currency, FieldValue::text(""));
    let errors = Schema::signup()
        .validate_subset(&record, SignupStep::Preferences.fields())
        .unwrap_err();
    assert_eq!(errors.get(Field::Currency), Some("Currency is required."));
    assert_eq!(errors.len(), 1);

    // Toggles stay at their defaults and never appear in a subset.
    assert!(!SignupStep::Preferences
        .fields()
        .iter()
        .any(|field| field.is_toggle()));
}

#[test]
fn whitespace_only_values_do_not_satisfy_required_fields() {
    let mut record = valid_record();
    record.set(Field::City, FieldValue::text("   "));
    let errors = Schema::signup().validate_all(&record).unwrap_err();
    assert_eq!(errors.get(Field::City), Some("City is required."));
}

#[test]
fn first_message_is_deterministic_in_field_order() {
    let errors = Schema::signup()
        .validate_all(&SignupRecord::default())
        .unwrap_err();
    // Field order follows the wire order, so the name message comes first.
    assert_eq!(
        errors.first_message(),
        Some("Full Name must be at least 2 characters.")
    );
}
