//! Repository traits and query objects over the Diesel-backed store.
//!
//! List reads return the full per-hub batch ordered by primary key; the
//! criteria filtering and pagination for the dashboard views happen in
//! process, in the shared filter pipeline. The only narrowing done in SQL is
//! tenancy and ownership scoping, which is access control rather than view
//! state.

use crate::{
    db::{DbConnection, DbPool},
    domain::{
        campaign::{Campaign, NewCampaign, UpdateCampaign},
        gift_card::{GiftCard, GiftCardStatus, NewGiftCard},
        listing::{Listing, NewListing, UpdateListing},
        loyalty::{LoyaltyProgram, NewLoyaltyProgram},
        offer::{NewOffer, Offer},
        order::{NewOrder, Order, OrderStatus},
        store_profile::{NewStoreProfile, StoreProfile},
        types::{CampaignId, GiftCardId, HubId, ListingId, OfferId, OrderId},
    },
    repository::errors::RepositoryResult,
};

pub mod campaign;
pub mod errors;
pub mod gift_card;
pub mod listing;
pub mod loyalty;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod offer;
pub mod order;
pub mod store_profile;

/// Shared Diesel-backed repository handed to the HTTP handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

#[derive(Debug, Clone)]
pub struct ListingListQuery {
    pub hub_id: HubId,
    pub owner_email: Option<String>,
    pub published_only: bool,
}

impl ListingListQuery {
    pub fn new(hub_id: HubId) -> Self {
        Self {
            hub_id,
            owner_email: None,
            published_only: false,
        }
    }

    /// Restricts the batch to one merchant's listings.
    pub fn owner_email(mut self, email: impl Into<String>) -> Self {
        self.owner_email = Some(email.into());
        self
    }

    /// Restricts the batch to publicly visible listings.
    pub fn published_only(mut self) -> Self {
        self.published_only = true;
        self
    }
}

pub trait ListingReader {
    fn get_listing_by_id(&self, id: ListingId, hub_id: HubId) -> RepositoryResult<Option<Listing>>;
    fn list_listings(&self, query: ListingListQuery) -> RepositoryResult<Vec<Listing>>;
}

pub trait ListingWriter {
    fn create_listings(&self, new_listings: &[NewListing]) -> RepositoryResult<usize>;
    fn update_listing(&self, id: ListingId, updates: &UpdateListing) -> RepositoryResult<Listing>;
    fn delete_listing(&self, id: ListingId) -> RepositoryResult<()>;
}

pub trait CampaignReader {
    fn get_campaign_by_id(&self, id: CampaignId, hub_id: HubId)
    -> RepositoryResult<Option<Campaign>>;
    fn list_campaigns(&self, hub_id: HubId) -> RepositoryResult<Vec<Campaign>>;
}

pub trait CampaignWriter {
    fn create_campaign(&self, new_campaign: &NewCampaign) -> RepositoryResult<Campaign>;
    fn update_campaign(
        &self,
        id: CampaignId,
        updates: &UpdateCampaign,
    ) -> RepositoryResult<Campaign>;
    fn delete_campaign(&self, id: CampaignId) -> RepositoryResult<()>;
}

pub trait OfferReader {
    fn get_offer_by_id(&self, id: OfferId, hub_id: HubId) -> RepositoryResult<Option<Offer>>;
    fn get_offer_by_code(&self, code: &str, hub_id: HubId) -> RepositoryResult<Option<Offer>>;
    fn list_offers(&self, hub_id: HubId) -> RepositoryResult<Vec<Offer>>;
}

pub trait OfferWriter {
    fn create_offer(&self, new_offer: &NewOffer) -> RepositoryResult<Offer>;
    fn set_offer_status(
        &self,
        id: OfferId,
        status: &crate::domain::offer::OfferStatus,
    ) -> RepositoryResult<Offer>;
    fn record_offer_redemption(&self, id: OfferId) -> RepositoryResult<Offer>;
    fn delete_offer(&self, id: OfferId) -> RepositoryResult<()>;
}

pub trait GiftCardReader {
    fn get_gift_card_by_id(&self, id: GiftCardId, hub_id: HubId)
    -> RepositoryResult<Option<GiftCard>>;
    fn get_gift_card_by_code(&self, code: &str, hub_id: HubId)
    -> RepositoryResult<Option<GiftCard>>;
    fn list_gift_cards(&self, hub_id: HubId) -> RepositoryResult<Vec<GiftCard>>;
}

pub trait GiftCardWriter {
    fn create_gift_card(&self, new_card: &NewGiftCard) -> RepositoryResult<GiftCard>;
    fn set_gift_card_state(
        &self,
        id: GiftCardId,
        balance_cents: i64,
        status: &GiftCardStatus,
    ) -> RepositoryResult<GiftCard>;
}

pub trait OrderReader {
    fn get_order_by_id(&self, id: OrderId, hub_id: HubId) -> RepositoryResult<Option<Order>>;
    fn list_orders(&self, hub_id: HubId) -> RepositoryResult<Vec<Order>>;
}

pub trait OrderWriter {
    fn create_orders(&self, new_orders: &[NewOrder]) -> RepositoryResult<usize>;
    fn set_order_status(&self, id: OrderId, status: &OrderStatus) -> RepositoryResult<Order>;
}

pub trait LoyaltyReader {
    fn get_loyalty_program(&self, hub_id: HubId) -> RepositoryResult<Option<LoyaltyProgram>>;
}

pub trait LoyaltyWriter {
    fn upsert_loyalty_program(
        &self,
        new_program: &NewLoyaltyProgram,
    ) -> RepositoryResult<LoyaltyProgram>;
}

pub trait StoreProfileReader {
    fn get_store_profile(&self, hub_id: HubId) -> RepositoryResult<Option<StoreProfile>>;
}

pub trait StoreProfileWriter {
    fn upsert_store_profile(&self, new_profile: &NewStoreProfile)
    -> RepositoryResult<StoreProfile>;
}
