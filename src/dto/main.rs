//! DTOs for the public homepage and directory pages.

use serde::Deserialize;

use crate::domain::listing::Listing;
use crate::domain::store_profile::StoreProfile;
use crate::filters::FilterCriteria;
use crate::pagination::Paginated;

/// Query parameters accepted by the homepage.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    /// Tenant override; the configured default hub is used when absent.
    pub hub: Option<i32>,
}

/// Data required to render the marketing homepage.
pub struct HomePageData {
    /// Most recently added active listings.
    pub featured: Vec<Listing>,
    pub categories: Vec<String>,
    pub store: Option<StoreProfile>,
}

/// Query parameters accepted by the public directory.
#[derive(Debug, Default, Deserialize)]
pub struct DirectoryQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub hub: Option<i32>,
    pub page: Option<usize>,
}

/// Data required to render the directory template.
pub struct DirectoryPageData {
    pub listings: Paginated<Listing>,
    /// Distinct categories for the filter select.
    pub categories: Vec<String>,
    /// Criteria echoed back into the form controls.
    pub criteria: FilterCriteria,
}
