use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::store_profile::{
    NewStoreProfile as DomainNewStoreProfile, StoreProfile as DomainStoreProfile,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::store_profiles)]
/// Diesel model for [`crate::domain::store_profile::StoreProfile`].
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::store_profiles)]
/// Insertable/upsert form of [`StoreProfile`].
pub struct NewStoreProfile<'a> {
    pub hub_id: i32,
    pub store_name: &'a str,
    pub tagline: Option<&'a str>,
    pub contact_email: Option<&'a str>,
    pub contact_phone: Option<&'a str>,
    pub address: Option<&'a str>,
    pub opening_hours: Option<&'a str>,
    pub accepts_gift_cards: bool,
}

impl From<StoreProfile> for DomainStoreProfile {
    fn from(profile: StoreProfile) -> Self {
        Self {
            id: profile.id,
            hub_id: profile.hub_id,
            store_name: profile.store_name,
            tagline: profile.tagline,
            contact_email: profile.contact_email,
            contact_phone: profile.contact_phone,
            address: profile.address,
            opening_hours: profile.opening_hours,
            accepts_gift_cards: profile.accepts_gift_cards,
            updated_at: profile.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewStoreProfile> for NewStoreProfile<'a> {
    fn from(profile: &'a DomainNewStoreProfile) -> Self {
        Self {
            hub_id: profile.hub_id,
            store_name: profile.store_name.as_str(),
            tagline: profile.tagline.as_deref(),
            contact_email: profile.contact_email.as_deref(),
            contact_phone: profile.contact_phone.as_deref(),
            address: profile.address.as_deref(),
            opening_hours: profile.opening_hours.as_deref(),
            accepts_gift_cards: profile.accepts_gift_cards,
        }
    }
}
