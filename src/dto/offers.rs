//! DTOs for the coupons/vouchers page.

use serde::Deserialize;

use crate::domain::offer::Offer;
use crate::filters::FilterCriteria;
use crate::pagination::Paginated;

/// Query parameters accepted by the offers dashboard.
#[derive(Debug, Default, Deserialize)]
pub struct OffersQuery {
    pub q: Option<String>,
    /// Kind tab: `coupon`, `voucher` or `all`.
    pub kind: Option<String>,
    pub status: Option<String>,
    pub page: Option<usize>,
}

/// Data required to render the offers template.
pub struct OffersPageData {
    pub offers: Paginated<Offer>,
    pub criteria: FilterCriteria,
}
