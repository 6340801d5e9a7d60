//! DTOs for the ad campaigns page.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::campaign::Campaign;
use crate::filters::FilterCriteria;
use crate::pagination::Paginated;

/// Query parameters accepted by the campaigns dashboard.
#[derive(Debug, Default, Deserialize)]
pub struct CampaignsQuery {
    pub q: Option<String>,
    pub status: Option<String>,
    /// Start-date window over the campaign flight.
    #[serde(default, deserialize_with = "crate::forms::de_opt_date")]
    pub from: Option<NaiveDate>,
    #[serde(default, deserialize_with = "crate::forms::de_opt_date")]
    pub to: Option<NaiveDate>,
    pub page: Option<usize>,
}

/// Data required to render the campaigns template.
pub struct CampaignsPageData {
    pub campaigns: Paginated<Campaign>,
    pub criteria: FilterCriteria,
}
