use serde::{Deserialize, Serialize};

use super::field::Field;

/// The fixed, ordered steps of the signup wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SignupStep {
    Identity,
    Address,
    Preferences,
}

impl SignupStep {
    pub const FIRST: SignupStep = SignupStep::Identity;
    pub const LAST: SignupStep = SignupStep::Preferences;
    pub const COUNT: usize = 3;

    /// 1-based step number shown to the user.
    pub fn number(&self) -> usize {
        match self {
            SignupStep::Identity => 1,
            SignupStep::Address => 2,
            SignupStep::Preferences => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SignupStep::Identity => "Identity",
            SignupStep::Address => "Address",
            SignupStep::Preferences => "Preferences",
        }
    }

    /// Fields validated before leaving this step. The partition is fixed: a
    /// field owned by a later step is never checked earlier, even when filled
    /// in, and the preference toggles appear in no subset at all.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            SignupStep::Identity => &[
                Field::Name,
                Field::Email,
                Field::DateOfBirth,
                Field::Username,
                Field::Password,
                Field::ProfilePicture,
            ],
            SignupStep::Address => &[
                Field::PermanentAddress,
                Field::PresentAddress,
                Field::PostalCode,
                Field::City,
                Field::Country,
            ],
            SignupStep::Preferences => &[Field::Currency, Field::TimeZone],
        }
    }

    /// Next step, saturating at the last one.
    pub fn next(&self) -> SignupStep {
        match self {
            SignupStep::Identity => SignupStep::Address,
            SignupStep::Address | SignupStep::Preferences => SignupStep::Preferences,
        }
    }

    /// Previous step, saturating at the first one.
    pub fn back(&self) -> SignupStep {
        match self {
            SignupStep::Identity | SignupStep::Address => SignupStep::Identity,
            SignupStep::Preferences => SignupStep::Address,
        }
    }

    pub fn is_last(&self) -> bool {
        *self == SignupStep::LAST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_non_toggle_field_belongs_to_exactly_one_step() {
        for field in Field::ALL {
            let owners = [
                SignupStep::Identity,
                SignupStep::Address,
                SignupStep::Preferences,
            ]
            .iter()
            .filter(|step| step.fields().contains(&field))
            .count();
            if field.is_toggle() {
                assert_eq!(owners, 0, "{field} must not be validated");
            } else {
                assert_eq!(owners, 1, "{field} must belong to exactly one step");
            }
        }
    }

    #[test]
    fn navigation_saturates_at_both_ends() {
        assert_eq!(SignupStep::Identity.back(), SignupStep::Identity);
        assert_eq!(SignupStep::Preferences.next(), SignupStep::Preferences);
        assert_eq!(SignupStep::Identity.next(), SignupStep::Address);
        assert_eq!(SignupStep::Preferences.back(), SignupStep::Address);
    }
}
