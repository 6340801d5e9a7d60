//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::campaign::{Campaign, NewCampaign, UpdateCampaign};
use crate::domain::gift_card::{GiftCard, GiftCardStatus, NewGiftCard};
use crate::domain::listing::{Listing, NewListing, UpdateListing};
use crate::domain::loyalty::{LoyaltyProgram, NewLoyaltyProgram};
use crate::domain::offer::{NewOffer, Offer, OfferStatus};
use crate::domain::order::{NewOrder, Order, OrderStatus};
use crate::domain::store_profile::{NewStoreProfile, StoreProfile};
use crate::domain::types::{CampaignId, GiftCardId, HubId, ListingId, OfferId, OrderId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CampaignReader, CampaignWriter, GiftCardReader, GiftCardWriter, ListingListQuery,
    ListingReader, ListingWriter, LoyaltyReader, LoyaltyWriter, OfferReader, OfferWriter,
    OrderReader, OrderWriter, StoreProfileReader, StoreProfileWriter,
};

mock! {
    pub Repository {}

    impl ListingReader for Repository {
        fn get_listing_by_id(&self, id: ListingId, hub_id: HubId) -> RepositoryResult<Option<Listing>>;
        fn list_listings(&self, query: ListingListQuery) -> RepositoryResult<Vec<Listing>>;
    }

    impl ListingWriter for Repository {
        fn create_listings(&self, new_listings: &[NewListing]) -> RepositoryResult<usize>;
        fn update_listing(&self, id: ListingId, updates: &UpdateListing) -> RepositoryResult<Listing>;
        fn delete_listing(&self, id: ListingId) -> RepositoryResult<()>;
    }

    impl CampaignReader for Repository {
        fn get_campaign_by_id(&self, id: CampaignId, hub_id: HubId) -> RepositoryResult<Option<Campaign>>;
        fn list_campaigns(&self, hub_id: HubId) -> RepositoryResult<Vec<Campaign>>;
    }

    impl CampaignWriter for Repository {
        fn create_campaign(&self, new_campaign: &NewCampaign) -> RepositoryResult<Campaign>;
        fn update_campaign(&self, id: CampaignId, updates: &UpdateCampaign) -> RepositoryResult<Campaign>;
        fn delete_campaign(&self, id: CampaignId) -> RepositoryResult<()>;
    }

    impl OfferReader for Repository {
        fn get_offer_by_id(&self, id: OfferId, hub_id: HubId) -> RepositoryResult<Option<Offer>>;
        fn get_offer_by_code(&self, code: &str, hub_id: HubId) -> RepositoryResult<Option<Offer>>;
        fn list_offers(&self, hub_id: HubId) -> RepositoryResult<Vec<Offer>>;
    }

    impl OfferWriter for Repository {
        fn create_offer(&self, new_offer: &NewOffer) -> RepositoryResult<Offer>;
        fn set_offer_status(&self, id: OfferId, status: &OfferStatus) -> RepositoryResult<Offer>;
        fn record_offer_redemption(&self, id: OfferId) -> RepositoryResult<Offer>;
        fn delete_offer(&self, id: OfferId) -> RepositoryResult<()>;
    }

    impl GiftCardReader for Repository {
        fn get_gift_card_by_id(&self, id: GiftCardId, hub_id: HubId) -> RepositoryResult<Option<GiftCard>>;
        fn get_gift_card_by_code(&self, code: &str, hub_id: HubId) -> RepositoryResult<Option<GiftCard>>;
        fn list_gift_cards(&self, hub_id: HubId) -> RepositoryResult<Vec<GiftCard>>;
    }

    impl GiftCardWriter for Repository {
        fn create_gift_card(&self, new_card: &NewGiftCard) -> RepositoryResult<GiftCard>;
        fn set_gift_card_state(
            &self,
            id: GiftCardId,
            balance_cents: i64,
            status: &GiftCardStatus,
        ) -> RepositoryResult<GiftCard>;
    }

    impl OrderReader for Repository {
        fn get_order_by_id(&self, id: OrderId, hub_id: HubId) -> RepositoryResult<Option<Order>>;
        fn list_orders(&self, hub_id: HubId) -> RepositoryResult<Vec<Order>>;
    }

    impl OrderWriter for Repository {
        fn create_orders(&self, new_orders: &[NewOrder]) -> RepositoryResult<usize>;
        fn set_order_status(&self, id: OrderId, status: &OrderStatus) -> RepositoryResult<Order>;
    }

    impl LoyaltyReader for Repository {
        fn get_loyalty_program(&self, hub_id: HubId) -> RepositoryResult<Option<LoyaltyProgram>>;
    }

    impl LoyaltyWriter for Repository {
        fn upsert_loyalty_program(&self, new_program: &NewLoyaltyProgram) -> RepositoryResult<LoyaltyProgram>;
    }

    impl StoreProfileReader for Repository {
        fn get_store_profile(&self, hub_id: HubId) -> RepositoryResult<Option<StoreProfile>>;
    }

    impl StoreProfileWriter for Repository {
        fn upsert_store_profile(&self, new_profile: &NewStoreProfile) -> RepositoryResult<StoreProfile>;
    }
}
