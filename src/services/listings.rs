//! Services coordinating the merchant listings dashboard.

use validator::Validate;

use crate::domain::listing::Listing;
use crate::domain::types::{HubId, ListingId};
use crate::dto::listings::{ListingsPageData, ListingsQuery};
use crate::filters::FilterCriteria;
use crate::forms::listings::{
    AddListingForm, DeleteListingForm, SaveListingForm, UploadListingsForm,
};
use crate::listview::ListState;
use crate::models::auth::{AuthenticatedUser, check_role};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{ListingListQuery, ListingReader, ListingWriter};
use crate::services::{ServiceError, ServiceResult, ensure_role};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

/// Distinct, sorted categories present in the batch, for the filter select.
pub(crate) fn distinct_categories(listings: &[Listing]) -> Vec<String> {
    let mut categories: Vec<String> = listings
        .iter()
        .map(|listing| listing.category.clone())
        .collect();
    categories.sort();
    categories.dedup();
    categories
}

/// Admins see the whole hub; merchants only their own listings.
fn scoped_query(user: &AuthenticatedUser) -> ServiceResult<ListingListQuery> {
    let hub_id = HubId::new(user.hub_id)?;
    let query = ListingListQuery::new(hub_id);
    if check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        Ok(query)
    } else {
        Ok(query.owner_email(&user.email))
    }
}

/// Only admins may touch listings they do not own.
fn ensure_owner(user: &AuthenticatedUser, owner_email: &str) -> ServiceResult<()> {
    if check_role(SERVICE_ADMIN_ROLE, &user.roles) || user.email.eq_ignore_ascii_case(owner_email)
    {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

/// Loads the filtered, paginated listings dashboard.
pub fn load_listings_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: ListingsQuery,
) -> ServiceResult<ListingsPageData>
where
    R: ListingReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let records = repo.list_listings(scoped_query(user)?)?;
    let categories = distinct_categories(&records);

    let criteria = FilterCriteria::new()
        .text(query.q.unwrap_or_default())
        .category(query.category.unwrap_or_default())
        .status(query.status.unwrap_or_default());

    let mut state = ListState::new(criteria, query.page.unwrap_or(1));
    let listings = state.apply(records, DEFAULT_ITEMS_PER_PAGE);

    Ok(ListingsPageData {
        listings,
        categories,
        criteria: state.criteria().clone(),
    })
}

/// Validates the add-listing form and persists the new listing.
pub fn add_listing<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddListingForm,
) -> ServiceResult<()>
where
    R: ListingWriter + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Invalid listing details".to_string()));
    }

    let new_listing = form.into_new_listing(user.hub_id, &user.email);

    repo.create_listings(&[new_listing]).map_err(|err| {
        log::error!("Failed to add a listing: {err}");
        err
    })?;

    Ok(())
}

/// Applies the save form to an existing listing after an ownership check.
pub fn save_listing<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveListingForm,
) -> ServiceResult<()>
where
    R: ListingReader + ListingWriter + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Invalid listing details".to_string()));
    }

    let hub_id = HubId::new(user.hub_id)?;
    let listing_id = ListingId::new(form.id)?;

    let listing = repo
        .get_listing_by_id(listing_id, hub_id)?
        .ok_or(ServiceError::NotFound)?;
    ensure_owner(user, &listing.owner_email)?;

    repo.update_listing(listing_id, &(&form).into())
        .map_err(|err| {
            log::error!("Failed to update listing: {err}");
            err
        })?;

    Ok(())
}

/// Removes a listing after an ownership check.
pub fn delete_listing<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: DeleteListingForm,
) -> ServiceResult<()>
where
    R: ListingReader + ListingWriter + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let hub_id = HubId::new(user.hub_id)?;
    let listing_id = ListingId::new(form.id)?;

    let listing = repo
        .get_listing_by_id(listing_id, hub_id)?
        .ok_or(ServiceError::NotFound)?;
    ensure_owner(user, &listing.owner_email)?;

    repo.delete_listing(listing_id).map_err(|err| {
        log::error!("Failed to delete listing: {err}");
        err
    })?;

    Ok(())
}

/// Parses the uploaded CSV and creates listings in bulk.
pub fn upload_listings<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &mut UploadListingsForm,
) -> ServiceResult<usize>
where
    R: ListingWriter + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let listings = form.parse(user.hub_id, &user.email).map_err(|err| {
        log::error!("Failed to parse listings: {err}");
        ServiceError::Form("Could not parse the uploaded CSV".to_string())
    })?;

    let created = repo.create_listings(&listings).map_err(|err| {
        log::error!("Failed to add listings: {err}");
        err
    })?;

    Ok(created)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::listing::ListingStatus;
    use crate::repository::mock::MockRepository;
    use chrono::Utc;

    fn admin_user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".to_string(),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            hub_id: 42,
            roles: vec![
                SERVICE_ACCESS_ROLE.to_string(),
                SERVICE_ADMIN_ROLE.to_string(),
            ],
            exp: 0,
        }
    }

    fn merchant_user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "2".to_string(),
            email: "merchant@example.com".to_string(),
            name: "Merchant".to_string(),
            hub_id: 42,
            roles: vec![SERVICE_ACCESS_ROLE.to_string()],
            exp: 0,
        }
    }

    fn listing(id: i32, title: &str, status: ListingStatus) -> Listing {
        let now = Utc::now().naive_utc();
        Listing {
            id,
            hub_id: 42,
            owner_email: "merchant@example.com".to_string(),
            title: title.to_string(),
            description: String::new(),
            category: "food".to_string(),
            city: "Springfield".to_string(),
            address: String::new(),
            phone: None,
            email: None,
            lat: None,
            lng: None,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn load_requires_access_role() {
        let repo = MockRepository::new();
        let user = AuthenticatedUser {
            roles: vec![],
            ..merchant_user()
        };

        let result = load_listings_page(&repo, &user, ListingsQuery::default());

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn merchants_only_see_their_own_listings() {
        let mut repo = MockRepository::new();
        repo.expect_list_listings()
            .withf(|query| query.owner_email.as_deref() == Some("merchant@example.com"))
            .times(1)
            .returning(|_| Ok(vec![]));

        load_listings_page(&repo, &merchant_user(), ListingsQuery::default())
            .expect("should load page");
    }

    #[test]
    fn admins_see_the_whole_hub() {
        let mut repo = MockRepository::new();
        repo.expect_list_listings()
            .withf(|query| query.owner_email.is_none() && query.hub_id.get() == 42)
            .times(1)
            .returning(|_| Ok(vec![]));

        load_listings_page(&repo, &admin_user(), ListingsQuery::default())
            .expect("should load page");
    }

    #[test]
    fn criteria_flow_through_the_pipeline() {
        let mut repo = MockRepository::new();
        repo.expect_list_listings().times(1).returning(|_| {
            Ok(vec![
                listing(1, "Modern Apartment", ListingStatus::Active),
                listing(2, "Cozy Cottage", ListingStatus::Active),
                listing(3, "Apartment Hotel", ListingStatus::Hidden),
            ])
        });

        let query = ListingsQuery {
            q: Some("apartment".to_string()),
            status: Some("Active".to_string()),
            ..ListingsQuery::default()
        };
        let data = load_listings_page(&repo, &admin_user(), query).expect("should load page");

        assert_eq!(data.listings.total_items, 1);
        assert_eq!(data.listings.items[0].id, 1);
        assert_eq!(data.categories, vec!["food"]);
    }

    #[test]
    fn merchants_cannot_touch_foreign_listings() {
        let mut repo = MockRepository::new();
        repo.expect_get_listing_by_id().times(1).returning(|id, _| {
            let mut listing = listing(id.get(), "Bakery", ListingStatus::Active);
            listing.owner_email = "someone-else@example.com".to_string();
            Ok(Some(listing))
        });
        repo.expect_delete_listing().times(0);

        let result = delete_listing(&repo, &merchant_user(), DeleteListingForm { id: 7 });

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }
}
