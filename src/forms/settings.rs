use serde::Deserialize;
use validator::Validate;

use crate::domain::store_profile::NewStoreProfile;
use crate::domain::types::TypeConstraintError;

#[derive(Deserialize, Validate)]
/// Form data for saving the hub's store profile.
pub struct SaveStoreProfileForm {
    #[validate(length(min = 1))]
    pub store_name: String,
    #[serde(default, deserialize_with = "crate::forms::de_opt_string")]
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "crate::forms::de_opt_string")]
    pub contact_email: Option<String>,
    #[serde(default, deserialize_with = "crate::forms::de_opt_string")]
    pub contact_phone: Option<String>,
    #[serde(default, deserialize_with = "crate::forms::de_opt_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "crate::forms::de_opt_string")]
    pub opening_hours: Option<String>,
    /// Checkbox; present when checked.
    pub accepts_gift_cards: Option<String>,
}

impl SaveStoreProfileForm {
    /// Contact details are validated by the domain value objects.
    pub fn into_new_profile(self, hub_id: i32) -> Result<NewStoreProfile, TypeConstraintError> {
        NewStoreProfile::new(
            hub_id,
            self.store_name,
            self.tagline,
            self.contact_email,
            self.contact_phone,
            self.address,
            self.opening_hours,
            self.accepts_gift_cards.is_some(),
        )
    }
}
