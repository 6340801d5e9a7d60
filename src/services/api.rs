//! Services behind the JSON API endpoints.

use crate::domain::listing::Listing;
use crate::domain::types::HubId;
use crate::dto::api::ListingsApiQuery;
use crate::filters::FilterCriteria;
use crate::repository::{ListingListQuery, ListingReader};
use crate::services::ServiceResult;

/// Returns the full filtered directory batch for the map view; pagination is
/// the HTML directory's concern, the map wants every matching pin.
pub fn search_directory<R>(
    repo: &R,
    hub_id: i32,
    query: ListingsApiQuery,
) -> ServiceResult<Vec<Listing>>
where
    R: ListingReader + ?Sized,
{
    let hub_id = HubId::new(hub_id)?;

    let records = repo.list_listings(ListingListQuery::new(hub_id).published_only())?;

    let criteria = FilterCriteria::new()
        .text(query.query.unwrap_or_default())
        .category(query.category.unwrap_or_default());

    Ok(records
        .into_iter()
        .filter(|listing| criteria.matches(listing))
        .collect())
}
