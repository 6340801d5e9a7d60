use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::filters::Filterable;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
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
    /// Map coordinates, when the merchant provided them.
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub status: ListingStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum ListingStatus {
    Active,
    Hidden,
    Other(String),
}

impl ListingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ListingStatus::Active => "Active",
            ListingStatus::Hidden => "Hidden",
            ListingStatus::Other(s) => s,
        }
    }
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for ListingStatus {
    fn from(s: &str) -> Self {
        match s {
            "Active" => ListingStatus::Active,
            "Hidden" => ListingStatus::Hidden,
            _ => ListingStatus::Other(s.to_string()),
        }
    }
}

impl From<String> for ListingStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewListing {
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
}

impl NewListing {
    /// Normalizes merchant input; the description may carry limited HTML and
    /// is sanitized before it reaches storage.
    #[must_use]
    pub fn new(
        hub_id: i32,
        owner_email: String,
        title: String,
        description: String,
        category: String,
        city: String,
        address: String,
    ) -> Self {
        Self {
            hub_id,
            owner_email: owner_email.trim().to_lowercase(),
            title: title.trim().to_string(),
            description: ammonia::clean(description.trim()),
            category: category.trim().to_string(),
            city: city.trim().to_string(),
            address: address.trim().to_string(),
            phone: None,
            email: None,
            lat: None,
            lng: None,
        }
    }

    pub fn contact(mut self, phone: Option<String>, email: Option<String>) -> Self {
        self.phone = phone.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        self.email = email
            .map(|s| s.to_lowercase().trim().to_string())
            .filter(|s| !s.is_empty());
        self
    }

    pub fn location(mut self, lat: Option<f64>, lng: Option<f64>) -> Self {
        self.lat = lat;
        self.lng = lng;
        self
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateListing {
    pub title: String,
    pub description: String,
    pub category: String,
    pub city: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub status: ListingStatus,
}

impl UpdateListing {
    #[must_use]
    pub fn new(
        title: String,
        description: String,
        category: String,
        city: String,
        address: String,
        phone: Option<String>,
        email: Option<String>,
        lat: Option<f64>,
        lng: Option<f64>,
        status: ListingStatus,
    ) -> Self {
        Self {
            title: title.trim().to_string(),
            description: ammonia::clean(description.trim()),
            category: category.trim().to_string(),
            city: city.trim().to_string(),
            address: address.trim().to_string(),
            phone: phone.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            email: email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            lat,
            lng,
            status,
        }
    }
}

impl Filterable for Listing {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.description, &self.address, &self.city]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_listing_normalizes_input() {
        let listing = NewListing::new(
            1,
            "  Owner@Shop.example ".to_string(),
            " Corner Bakery ".to_string(),
            "<script>alert(1)</script><b>Fresh bread</b> daily".to_string(),
            "food".to_string(),
            " Springfield ".to_string(),
            "1 Main St".to_string(),
        )
        .contact(Some("  ".to_string()), Some("Hello@Shop.example".to_string()));

        assert_eq!(listing.owner_email, "owner@shop.example");
        assert_eq!(listing.title, "Corner Bakery");
        assert_eq!(listing.city, "Springfield");
        assert_eq!(listing.phone, None);
        assert_eq!(listing.email.as_deref(), Some("hello@shop.example"));
        assert!(!listing.description.contains("script"));
        assert!(listing.description.contains("<b>Fresh bread</b>"));
    }

    #[test]
    fn status_round_trips_through_text() {
        assert_eq!(ListingStatus::from("Active"), ListingStatus::Active);
        assert_eq!(ListingStatus::from("Hidden").as_str(), "Hidden");
        assert_eq!(
            ListingStatus::from("Archived"),
            ListingStatus::Other("Archived".to_string())
        );
    }
}
