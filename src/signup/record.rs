use chrono::{NaiveDate, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::field::Field;

/// Value assigned to a record field through the dot-addressed setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Toggle(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }
}

/// Preference group collected on the final wizard step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preference {
    pub currency: String,
    pub time_zone: String,
    pub sent_or_receive_digital_currency: bool,
    pub receive_merchant_order: bool,
    pub account_recommendations: bool,
    pub two_factor_authentication: bool,
}

/// The aggregate signup payload collected across all wizard steps.
///
/// Serializes to the exact JSON shape the registration endpoint expects;
/// `date_of_birth` stays in `YYYY-MM-DD` form as entered and is normalized to
/// an ISO-8601 instant only when the wire body is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRecord {
    pub name: String,
    pub email: String,
    pub date_of_birth: String,
    pub username: String,
    pub password: String,
    pub permanent_address: String,
    pub present_address: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub profile_picture: String,
    #[serde(default)]
    pub preference: Preference,
}

impl SignupRecord {
    /// Text content of a field; toggles report their boolean as `true`/`false`.
    pub fn text(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.clone(),
            Field::Email => self.email.clone(),
            Field::DateOfBirth => self.date_of_birth.clone(),
            Field::Username => self.username.clone(),
            Field::Password => self.password.clone(),
            Field::PermanentAddress => self.permanent_address.clone(),
            Field::PresentAddress => self.present_address.clone(),
            Field::PostalCode => self.postal_code.clone(),
            Field::City => self.city.clone(),
            Field::Country => self.country.clone(),
            Field::ProfilePicture => self.profile_picture.clone(),
            Field::Currency => self.preference.currency.clone(),
            Field::TimeZone => self.preference.time_zone.clone(),
            Field::SentOrReceiveDigitalCurrency => self
                .preference
                .sent_or_receive_digital_currency
                .to_string(),
            Field::ReceiveMerchantOrder => self.preference.receive_merchant_order.to_string(),
            Field::AccountRecommendations => self.preference.account_recommendations.to_string(),
            Field::TwoFactorAuthentication => {
                self.preference.two_factor_authentication.to_string()
            }
        }
    }

    /// Assigns `value` to `field`. A kind mismatch (toggle value on a text
    /// field or vice versa) leaves the record untouched and returns `false`.
    pub fn set(&mut self, field: Field, value: FieldValue) -> bool {
        match (field, value) {
            (Field::Name, FieldValue::Text(v)) => self.name = v,
            (Field::Email, FieldValue::Text(v)) => self.email = v,
            (Field::DateOfBirth, FieldValue::Text(v)) => self.date_of_birth = v,
            (Field::Username, FieldValue::Text(v)) => self.username = v,
            (Field::Password, FieldValue::Text(v)) => self.password = v,
            (Field::PermanentAddress, FieldValue::Text(v)) => self.permanent_address = v,
            (Field::PresentAddress, FieldValue::Text(v)) => self.present_address = v,
            (Field::PostalCode, FieldValue::Text(v)) => self.postal_code = v,
            (Field::City, FieldValue::Text(v)) => self.city = v,
            (Field::Country, FieldValue::Text(v)) => self.country = v,
            (Field::ProfilePicture, FieldValue::Text(v)) => self.profile_picture = v,
            (Field::Currency, FieldValue::Text(v)) => self.preference.currency = v,
            (Field::TimeZone, FieldValue::Text(v)) => self.preference.time_zone = v,
            (Field::SentOrReceiveDigitalCurrency, FieldValue::Toggle(v)) => {
                self.preference.sent_or_receive_digital_currency = v
            }
            (Field::ReceiveMerchantOrder, FieldValue::Toggle(v)) => {
                self.preference.receive_merchant_order = v
            }
            (Field::AccountRecommendations, FieldValue::Toggle(v)) => {
                self.preference.account_recommendations = v
            }
            (Field::TwoFactorAuthentication, FieldValue::Toggle(v)) => {
                self.preference.two_factor_authentication = v
            }
            (field, value) => {
                tracing::warn!(field = %field, ?value, "Ignoring mismatched field assignment");
                return false;
            }
        }
        true
    }

    /// Parsed date of birth, when the stored string is a valid `YYYY-MM-DD`.
    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_of_birth.trim(), "%Y-%m-%d").ok()
    }

    /// Date of birth as an ISO-8601 instant at UTC midnight, the form the
    /// registration endpoint stores.
    pub fn date_of_birth_iso(&self) -> Option<String> {
        self.date_of_birth().and_then(|date| {
            let midnight = date.and_hms_opt(0, 0, 0)?;
            Some(
                Utc.from_utc_datetime(&midnight)
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SignupRecord {
        SignupRecord {
            name: "Al".into(),
            email: "a@b.com".into(),
            date_of_birth: "2000-01-01".into(),
            username: "alx".into(),
            password: "longpass1".into(),
            permanent_address: "1 Main St".into(),
            present_address: "1 Main St".into(),
            postal_code: "1000".into(),
            city: "Lisbon".into(),
            country: "Portugal".into(),
            profile_picture: String::new(),
            preference: Preference {
                currency: "USD".into(),
                time_zone: "UTC".into(),
                two_factor_authentication: true,
                ..Preference::default()
            },
        }
    }

    #[test]
    fn serializes_to_wire_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["dateOfBirth"], "2000-01-01");
        assert_eq!(value["permanentAddress"], "1 Main St");
        assert_eq!(value["profilePicture"], "");
        assert_eq!(value["preference"]["timeZone"], "UTC");
        assert_eq!(value["preference"]["sentOrReceiveDigitalCurrency"], false);
        assert_eq!(value["preference"]["twoFactorAuthentication"], true);
    }

    #[test]
    fn dot_addressed_set_reaches_preference_group() {
        let mut record = SignupRecord::default();
        assert!(record.set(Field::Currency, FieldValue::text("EUR")));
        assert!(record.set(Field::TwoFactorAuthentication, FieldValue::Toggle(true)));
        assert_eq!(record.preference.currency, "EUR");
        assert!(record.preference.two_factor_authentication);
    }

    #[test]
    fn mismatched_assignment_is_ignored() {
        let mut record = SignupRecord::default();
        assert!(!record.set(Field::Name, FieldValue::Toggle(true)));
        assert!(!record.set(Field::ReceiveMerchantOrder, FieldValue::text("yes")));
        assert_eq!(record, SignupRecord::default());
    }

    #[test]
    fn date_of_birth_normalizes_to_iso_instant() {
        let record = sample();
        assert_eq!(
            record.date_of_birth_iso().unwrap(),
            "2000-01-01T00:00:00.000Z"
        );
        let mut bad = sample();
        bad.date_of_birth = "01/01/2000".into();
        assert!(bad.date_of_birth_iso().is_none());
    }
}
