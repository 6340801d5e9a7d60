use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Email, Phone, TypeConstraintError};

/// Per-hub store settings shown on the public directory pages.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StoreProfile {
    pub id: i32,
    pub hub_id: i32,
    pub store_name: String,
    pub tagline: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub opening_hours: Option<String>,
    pub accepts_gift_cards: bool,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewStoreProfile {
    pub hub_id: i32,
    pub store_name: String,
    pub tagline: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub opening_hours: Option<String>,
    pub accepts_gift_cards: bool,
}

impl NewStoreProfile {
    /// Builds the upsert payload, validating contact details through the
    /// domain value objects.
    pub fn new(
        hub_id: i32,
        store_name: String,
        tagline: Option<String>,
        contact_email: Option<String>,
        contact_phone: Option<String>,
        address: Option<String>,
        opening_hours: Option<String>,
        accepts_gift_cards: bool,
    ) -> Result<Self, TypeConstraintError> {
        let store_name = store_name.trim().to_string();
        if store_name.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }

        let contact_email = contact_email
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(|s| Email::new(s).map(Email::into_inner))
            .transpose()?;
        let contact_phone = contact_phone
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(|s| Phone::new(s).map(Phone::into_inner))
            .transpose()?;

        Ok(Self {
            hub_id,
            store_name,
            tagline: tagline.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            contact_email,
            contact_phone,
            address: address.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            opening_hours: opening_hours
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            accepts_gift_cards,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_normalizes_contact_details() {
        let profile = NewStoreProfile::new(
            1,
            " Corner Bakery ".to_string(),
            Some("  ".to_string()),
            Some("Hello@Bakery.example".to_string()),
            Some("+1 415 555 2671".to_string()),
            None,
            Some("Mon-Fri 8-18".to_string()),
            true,
        )
        .expect("valid profile");

        assert_eq!(profile.store_name, "Corner Bakery");
        assert_eq!(profile.tagline, None);
        assert_eq!(profile.contact_email.as_deref(), Some("hello@bakery.example"));
        assert_eq!(profile.contact_phone.as_deref(), Some("+14155552671"));
    }

    #[test]
    fn profile_rejects_invalid_input() {
        assert_eq!(
            NewStoreProfile::new(1, "  ".to_string(), None, None, None, None, None, false)
                .unwrap_err(),
            TypeConstraintError::EmptyString
        );
        assert_eq!(
            NewStoreProfile::new(
                1,
                "Shop".to_string(),
                None,
                Some("nope".to_string()),
                None,
                None,
                None,
                false
            )
            .unwrap_err(),
            TypeConstraintError::InvalidEmail
        );
    }
}
