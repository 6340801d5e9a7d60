//! Services behind the public homepage and directory pages.

use crate::domain::types::HubId;
use crate::dto::main::{DirectoryPageData, DirectoryQuery, HomePageData};
use crate::filters::FilterCriteria;
use crate::listview::ListState;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{ListingListQuery, ListingReader, StoreProfileReader};
use crate::services::ServiceResult;
use crate::services::listings::distinct_categories;

/// Listings shown on the homepage highlight strip.
const FEATURED_COUNT: usize = 6;

/// Loads the featured listings and store profile for the marketing homepage.
pub fn load_home_page<R>(repo: &R, hub_id: i32) -> ServiceResult<HomePageData>
where
    R: ListingReader + StoreProfileReader + ?Sized,
{
    let hub_id = HubId::new(hub_id)?;

    let records = repo.list_listings(ListingListQuery::new(hub_id).published_only())?;
    let categories = distinct_categories(&records);

    let mut featured = records;
    featured.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    featured.truncate(FEATURED_COUNT);

    let store = repo.get_store_profile(hub_id)?;

    Ok(HomePageData {
        featured,
        categories,
        store,
    })
}

/// Loads the filtered, paginated public directory.
pub fn load_directory_page<R>(
    repo: &R,
    hub_id: i32,
    query: DirectoryQuery,
) -> ServiceResult<DirectoryPageData>
where
    R: ListingReader + ?Sized,
{
    let hub_id = HubId::new(hub_id)?;

    let records = repo.list_listings(ListingListQuery::new(hub_id).published_only())?;
    let categories = distinct_categories(&records);

    let criteria = FilterCriteria::new()
        .text(query.q.unwrap_or_default())
        .category(query.category.unwrap_or_default());

    let mut state = ListState::new(criteria, query.page.unwrap_or(1));
    let listings = state.apply(records, DEFAULT_ITEMS_PER_PAGE);

    Ok(DirectoryPageData {
        listings,
        categories,
        criteria: state.criteria().clone(),
    })
}
