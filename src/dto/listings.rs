//! DTOs for the merchant "my listings" page.

use serde::Deserialize;

use crate::domain::listing::Listing;
use crate::filters::FilterCriteria;
use crate::pagination::Paginated;

/// Query parameters accepted by the listings dashboard.
#[derive(Debug, Default, Deserialize)]
pub struct ListingsQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub page: Option<usize>,
}

/// Data required to render the listings dashboard template.
pub struct ListingsPageData {
    pub listings: Paginated<Listing>,
    pub categories: Vec<String>,
    pub criteria: FilterCriteria,
}
