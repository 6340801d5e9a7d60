//! DTOs for the gift cards page.

use serde::Deserialize;

use crate::domain::gift_card::GiftCard;
use crate::filters::FilterCriteria;
use crate::pagination::Paginated;

/// Query parameters accepted by the gift cards dashboard.
#[derive(Debug, Default, Deserialize)]
pub struct GiftCardsQuery {
    pub q: Option<String>,
    pub status: Option<String>,
    /// Balance window, in whole currency units.
    #[serde(default, deserialize_with = "crate::forms::de_opt_f64")]
    pub min_balance: Option<f64>,
    #[serde(default, deserialize_with = "crate::forms::de_opt_f64")]
    pub max_balance: Option<f64>,
    pub page: Option<usize>,
}

/// Data required to render the gift cards template.
pub struct GiftCardsPageData {
    pub gift_cards: Paginated<GiftCard>,
    pub criteria: FilterCriteria,
}
