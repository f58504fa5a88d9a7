//! Field validation rules for the signup record.
//!
//! The schema mirrors the registration form contract: one rule per validated
//! field, checked either as a fixed per-step subset or as the full record
//! right before submission.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;

use super::field::Field;
use super::record::SignupRecord;

type ValidatorCallback = dyn Fn(&str) -> Result<(), String> + Send + Sync;
type SharedValidatorCallback = Arc<ValidatorCallback>;

/// Built-in validation rules.
#[derive(Clone)]
pub enum Validator {
    /// Always passes; used for optional fields such as the profile picture.
    Any,
    NonEmpty,
    MinLength(usize),
    Email,
    /// `YYYY-MM-DD` date that is not in the future relative to the local clock.
    PastDate,
    Custom(SharedValidatorCallback),
}

impl Validator {
    fn check(&self, label: &str, value: &str) -> Result<(), String> {
        match self {
            Validator::Any => Ok(()),
            Validator::NonEmpty => {
                if value.trim().is_empty() {
                    Err(format!("{label} is required."))
                } else {
                    Ok(())
                }
            }
            Validator::MinLength(min) => {
                if value.trim().chars().count() < *min {
                    Err(format!("{label} must be at least {min} characters."))
                } else {
                    Ok(())
                }
            }
            Validator::Email => {
                if is_email_shaped(value.trim()) {
                    Ok(())
                } else {
                    Err("Invalid email address.".into())
                }
            }
            Validator::PastDate => match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
                Err(_) => Err("Use YYYY-MM-DD format.".into()),
                Ok(date) if date > Local::now().date_naive() => {
                    Err("Date of birth cannot be in the future.".into())
                }
                Ok(_) => Ok(()),
            },
            Validator::Custom(func) => func(value),
        }
    }
}

fn is_email_shaped(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !value.chars().any(char::is_whitespace)
        && !domain.contains('@')
}

/// Per-field error messages produced by a validation attempt.
///
/// Fields absent from the map are either valid or not yet validated. Entries
/// iterate in wire order, so `first_message` is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn first_message(&self) -> Option<&str> {
        self.0.values().next().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub(crate) fn insert(&mut self, field: Field, message: String) {
        self.0.insert(field, message);
    }

    pub(crate) fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

/// Validation rules for every non-toggle field of the signup record.
#[derive(Clone)]
pub struct Schema {
    rules: BTreeMap<Field, Validator>,
}

static SIGNUP_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    let mut rules = BTreeMap::new();
    rules.insert(Field::Name, Validator::MinLength(2));
    rules.insert(Field::Email, Validator::Email);
    rules.insert(Field::DateOfBirth, Validator::PastDate);
    rules.insert(Field::Username, Validator::MinLength(3));
    rules.insert(Field::Password, Validator::MinLength(8));
    rules.insert(Field::PermanentAddress, Validator::NonEmpty);
    rules.insert(Field::PresentAddress, Validator::NonEmpty);
    rules.insert(Field::PostalCode, Validator::NonEmpty);
    rules.insert(Field::City, Validator::NonEmpty);
    rules.insert(Field::Country, Validator::NonEmpty);
    rules.insert(Field::ProfilePicture, Validator::Any);
    rules.insert(Field::Currency, Validator::NonEmpty);
    rules.insert(Field::TimeZone, Validator::NonEmpty);
    Schema { rules }
});

impl Schema {
    /// The registration form schema.
    pub fn signup() -> Schema {
        SIGNUP_SCHEMA.clone()
    }

    /// Checks a single field; `Ok(())` when the field carries no rule.
    pub fn validate_field(&self, record: &SignupRecord, field: Field) -> Result<(), String> {
        match self.rules.get(&field) {
            Some(rule) => rule.check(field.label(), &record.text(field)),
            None => Ok(()),
        }
    }

    /// Checks exactly the given subset, collecting one message per failing field.
    pub fn validate_subset(
        &self,
        record: &SignupRecord,
        fields: &[Field],
    ) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for field in fields {
            if let Err(message) = self.validate_field(record, *field) {
                errors.insert(*field, message);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Checks the full record against every rule.
    pub fn validate_all(&self, record: &SignupRecord) -> Result<(), ValidationErrors> {
        let fields: Vec<Field> = self.rules.keys().copied().collect();
        self.validate_subset(record, &fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_email_shaped("a@b.com"));
        assert!(is_email_shaped("first.last@bank.example.org"));
        assert!(!is_email_shaped("plainaddress"));
        assert!(!is_email_shaped("@b.com"));
        assert!(!is_email_shaped("a@"));
        assert!(!is_email_shaped("a@nodot"));
        assert!(!is_email_shaped("a b@b.com"));
        assert!(!is_email_shaped("a@.com"));
    }

    #[test]
    fn min_length_counts_characters_not_bytes() {
        let rule = Validator::MinLength(2);
        assert!(rule.check("Full Name", "Åe").is_ok());
        assert_eq!(
            rule.check("Full Name", "A").unwrap_err(),
            "Full Name must be at least 2 characters."
        );
    }

    #[test]
    fn past_date_accepts_today_and_rejects_tomorrow() {
        let today = Local::now().date_naive();
        let tomorrow = today + chrono::Days::new(1);
        let rule = Validator::PastDate;
        assert!(rule.check("Date of Birth", &today.to_string()).is_ok());
        assert_eq!(
            rule.check("Date of Birth", &tomorrow.to_string()).unwrap_err(),
            "Date of birth cannot be in the future."
        );
        assert_eq!(
            rule.check("Date of Birth", "not-a-date").unwrap_err(),
            "Use YYYY-MM-DD format."
        );
    }

    #[test]
    fn custom_rule_is_honored() {
        let rule = Validator::Custom(Arc::new(|value| {
            if value.contains(' ') {
                Err("No spaces allowed.".into())
            } else {
                Ok(())
            }
        }));
        assert!(rule.check("Username", "alx").is_ok());
        assert!(rule.check("Username", "a lx").is_err());
    }

    #[test]
    fn empty_profile_picture_is_valid() {
        let record = SignupRecord::default();
        assert!(Schema::signup()
            .validate_field(&record, Field::ProfilePicture)
            .is_ok());
    }
}
