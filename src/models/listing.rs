use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::listing::{
    Listing as DomainListing, NewListing as DomainNewListing, UpdateListing as DomainUpdateListing,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::listings)]
/// Diesel model for [`crate::domain::listing::Listing`].
pub struct Listing {
    pub id: i32,
    pub hub_id: i32,
    pub owner_email: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub city: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::listings)]
/// Insertable form of [`Listing`].
pub struct NewListing<'a> {
    pub hub_id: i32,
    pub owner_email: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub city: &'a str,
    pub address: &'a str,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::listings)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Listing`] record; cleared contact fields
/// persist as NULL.
pub struct UpdateListing<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub city: &'a str,
    pub address: &'a str,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub status: String,
}

impl From<Listing> for DomainListing {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id,
            hub_id: listing.hub_id,
            owner_email: listing.owner_email,
            title: listing.title,
            description: listing.description,
            category: listing.category,
            city: listing.city,
            address: listing.address,
            phone: listing.phone,
            email: listing.email,
            lat: listing.lat,
            lng: listing.lng,
            status: listing.status.into(),
            created_at: listing.created_at,
            updated_at: listing.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewListing> for NewListing<'a> {
    fn from(listing: &'a DomainNewListing) -> Self {
        Self {
            hub_id: listing.hub_id,
            owner_email: listing.owner_email.as_str(),
            title: listing.title.as_str(),
            description: listing.description.as_str(),
            category: listing.category.as_str(),
            city: listing.city.as_str(),
            address: listing.address.as_str(),
            phone: listing.phone.as_deref(),
            email: listing.email.as_deref(),
            lat: listing.lat,
            lng: listing.lng,
        }
    }
}

impl<'a> From<&'a DomainUpdateListing> for UpdateListing<'a> {
    fn from(listing: &'a DomainUpdateListing) -> Self {
        Self {
            title: listing.title.as_str(),
            description: listing.description.as_str(),
            category: listing.category.as_str(),
            city: listing.city.as_str(),
            address: listing.address.as_str(),
            phone: listing.phone.as_deref(),
            email: listing.email.as_deref(),
            lat: listing.lat,
            lng: listing.lng,
            status: listing.status.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::ListingStatus;
    use chrono::Utc;

    #[test]
    fn from_domain_new_creates_insertable() {
        let domain = DomainNewListing::new(
            1,
            "owner@example.com".to_string(),
            "Bakery".to_string(),
            "Bread".to_string(),
            "food".to_string(),
            "Springfield".to_string(),
            "1 Main St".to_string(),
        )
        .location(Some(1.5), Some(-2.5));

        let new: NewListing = (&domain).into();
        assert_eq!(new.hub_id, 1);
        assert_eq!(new.title, "Bakery");
        assert_eq!(new.lat, Some(1.5));
        assert_eq!(new.phone, None);
    }

    #[test]
    fn listing_into_domain_parses_status() {
        let now = Utc::now().naive_utc();
        let db = Listing {
            id: 7,
            hub_id: 2,
            owner_email: "owner@example.com".to_string(),
            title: "Bakery".to_string(),
            description: "Bread".to_string(),
            category: "food".to_string(),
            city: "Springfield".to_string(),
            address: "1 Main St".to_string(),
            phone: None,
            email: None,
            lat: None,
            lng: None,
            status: "Hidden".to_string(),
            created_at: now,
            updated_at: now,
        };
        let domain: DomainListing = db.into();
        assert_eq!(domain.id, 7);
        assert_eq!(domain.status, ListingStatus::Hidden);
    }
}
