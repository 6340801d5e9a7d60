//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, normalized
//! email, parseable phone numbers, canonical redemption codes) so that once a
//! value reaches the domain layer it can be treated as trusted.

use std::fmt::{Display, Formatter};

use phonenumber::{Mode, parse};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateEmail;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Phone number did not meet expected format.
    #[error("invalid phone number")]
    InvalidPhone,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Normalizes and validates an email string.
fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(HubId, "Unique identifier for a marketplace tenant.");
id_newtype!(ListingId, "Unique identifier for a directory listing.");
id_newtype!(CampaignId, "Unique identifier for an ad campaign.");
id_newtype!(OfferId, "Unique identifier for a coupon or voucher.");
id_newtype!(GiftCardId, "Unique identifier for a gift card.");
id_newtype!(OrderId, "Unique identifier for an order.");

/// Lower-cased and validated email address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_email(email)?;
        Ok(Self(normalized))
    }

    /// Borrow the email as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Email {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

/// Phone number parsed and stored in E.164 form.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Parses the input and normalizes it to E.164.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let raw = value.into();
        let parsed = parse(None, raw.trim()).map_err(|_| TypeConstraintError::InvalidPhone)?;
        Ok(Self(parsed.format().mode(Mode::E164).to_string()))
    }

    /// Borrow the number as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Phone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for Phone {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Canonical redemption code: trimmed, upper-cased, `A-Z0-9-` only.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Code(String);

impl Code {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let normalized = value.into().trim().to_uppercase();
        if normalized.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if !normalized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(TypeConstraintError::InvalidValue(format!(
                "code contains unsupported characters: {normalized}"
            )));
        }
        Ok(Self(normalized))
    }

    /// Borrow the code as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for Code {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Code {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_positive() {
        assert!(HubId::new(1).is_ok());
        assert_eq!(HubId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(ListingId::new(-5), Err(TypeConstraintError::NonPositiveId));
    }

    #[test]
    fn email_is_normalized() {
        let email = Email::new("  Owner@Example.COM ").expect("valid email");
        assert_eq!(email.as_str(), "owner@example.com");
        assert!(Email::new("not-an-email").is_err());
    }

    #[test]
    fn phone_is_normalized_to_e164() {
        let phone = Phone::new("+1 415 555 2671").expect("valid phone");
        assert_eq!(phone.as_str(), "+14155552671");
        assert!(Phone::new("call me maybe").is_err());
    }

    #[test]
    fn code_is_canonicalized() {
        let code = Code::new(" summer-10 ").expect("valid code");
        assert_eq!(code.as_str(), "SUMMER-10");
        assert!(Code::new("").is_err());
        assert!(Code::new("BAD CODE").is_err());
    }
}
