use std::fmt;
use std::str::FromStr;

/// Addressable fields of a [`SignupRecord`](crate::signup::SignupRecord).
///
/// Preference fields use dot paths (`preference.currency`) so callers can
/// address the nested group the same way the wire format spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    DateOfBirth,
    Username,
    Password,
    PermanentAddress,
    PresentAddress,
    PostalCode,
    City,
    Country,
    ProfilePicture,
    Currency,
    TimeZone,
    SentOrReceiveDigitalCurrency,
    ReceiveMerchantOrder,
    AccountRecommendations,
    TwoFactorAuthentication,
}

impl Field {
    /// Every record field, in wire order.
    pub const ALL: [Field; 17] = [
        Field::Name,
        Field::Email,
        Field::DateOfBirth,
        Field::Username,
        Field::Password,
        Field::PermanentAddress,
        Field::PresentAddress,
        Field::PostalCode,
        Field::City,
        Field::Country,
        Field::ProfilePicture,
        Field::Currency,
        Field::TimeZone,
        Field::SentOrReceiveDigitalCurrency,
        Field::ReceiveMerchantOrder,
        Field::AccountRecommendations,
        Field::TwoFactorAuthentication,
    ];

    /// Dot-addressed path matching the serialized record shape.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::DateOfBirth => "dateOfBirth",
            Field::Username => "username",
            Field::Password => "password",
            Field::PermanentAddress => "permanentAddress",
            Field::PresentAddress => "presentAddress",
            Field::PostalCode => "postalCode",
            Field::City => "city",
            Field::Country => "country",
            Field::ProfilePicture => "profilePicture",
            Field::Currency => "preference.currency",
            Field::TimeZone => "preference.timeZone",
            Field::SentOrReceiveDigitalCurrency => "preference.sentOrReceiveDigitalCurrency",
            Field::ReceiveMerchantOrder => "preference.receiveMerchantOrder",
            Field::AccountRecommendations => "preference.accountRecommendations",
            Field::TwoFactorAuthentication => "preference.twoFactorAuthentication",
        }
    }

    /// Human-readable label used in prompts and validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email",
            Field::DateOfBirth => "Date of Birth",
            Field::Username => "Username",
            Field::Password => "Password",
            Field::PermanentAddress => "Permanent address",
            Field::PresentAddress => "Present address",
            Field::PostalCode => "Postal code",
            Field::City => "City",
            Field::Country => "Country",
            Field::ProfilePicture => "Profile picture",
            Field::Currency => "Currency",
            Field::TimeZone => "Time zone",
            Field::SentOrReceiveDigitalCurrency => "Send or Receive Digital Currency",
            Field::ReceiveMerchantOrder => "Receive Merchant Order",
            Field::AccountRecommendations => "Account Recommendations",
            Field::TwoFactorAuthentication => "Two-Factor Authentication",
        }
    }

    /// True for the four preference toggles, which are never validated.
    pub fn is_toggle(&self) -> bool {
        matches!(
            self,
            Field::SentOrReceiveDigitalCurrency
                | Field::ReceiveMerchantOrder
                | Field::AccountRecommendations
                | Field::TwoFactorAuthentication
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a dot path does not name a record field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field path: `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .find(|field| field.as_str() == path)
            .copied()
            .ok_or_else(|| UnknownField(path.to_string()))
    }
}
