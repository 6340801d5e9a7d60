//! Repository implementation for coupons and vouchers.

use diesel::prelude::*;

use crate::{
    domain::{
        offer::{NewOffer, Offer, OfferStatus},
        types::{HubId, OfferId},
    },
    models::offer::{NewOffer as DbNewOffer, Offer as DbOffer},
    repository::{
        DieselRepository, OfferReader, OfferWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl OfferReader for DieselRepository {
    fn get_offer_by_id(&self, id: OfferId, hub_id: HubId) -> RepositoryResult<Option<Offer>> {
        use crate::schema::offers;

        let mut conn = self.conn()?;
        let offer = offers::table
            .filter(offers::id.eq(id.get()))
            .filter(offers::hub_id.eq(hub_id.get()))
            .first::<DbOffer>(&mut conn)
            .optional()?;

        match offer {
            Some(offer) => Ok(Some(Offer::try_from(offer).map_err(RepositoryError::from)?)),
            None => Ok(None),
        }
    }

    fn get_offer_by_code(&self, code: &str, hub_id: HubId) -> RepositoryResult<Option<Offer>> {
        use crate::schema::offers;

        let mut conn = self.conn()?;
        let offer = offers::table
            .filter(offers::code.eq(code))
            .filter(offers::hub_id.eq(hub_id.get()))
            .first::<DbOffer>(&mut conn)
            .optional()?;

        match offer {
            Some(offer) => Ok(Some(Offer::try_from(offer).map_err(RepositoryError::from)?)),
            None => Ok(None),
        }
    }

    fn list_offers(&self, hub_id: HubId) -> RepositoryResult<Vec<Offer>> {
        use crate::schema::offers;

        let mut conn = self.conn()?;
        let items = offers::table
            .filter(offers::hub_id.eq(hub_id.get()))
            .order(offers::id.asc())
            .load::<DbOffer>(&mut conn)?;

        items
            .into_iter()
            .map(|offer| Offer::try_from(offer).map_err(RepositoryError::from))
            .collect()
    }
}

impl OfferWriter for DieselRepository {
    fn create_offer(&self, new_offer: &NewOffer) -> RepositoryResult<Offer> {
        use crate::schema::offers;

        let mut conn = self.conn()?;
        let insertable: DbNewOffer = new_offer.into();
        let created = diesel::insert_into(offers::table)
            .values(&insertable)
            .get_result::<DbOffer>(&mut conn)?;

        Offer::try_from(created).map_err(RepositoryError::from)
    }

    fn set_offer_status(&self, id: OfferId, status: &OfferStatus) -> RepositoryResult<Offer> {
        use crate::schema::offers;

        let mut conn = self.conn()?;
        let updated = diesel::update(offers::table.find(id.get()))
            .set(offers::status.eq(status.to_string()))
            .get_result::<DbOffer>(&mut conn)?;

        Offer::try_from(updated).map_err(RepositoryError::from)
    }

    fn record_offer_redemption(&self, id: OfferId) -> RepositoryResult<Offer> {
        use crate::schema::offers;

        let mut conn = self.conn()?;
        let updated = diesel::update(offers::table.find(id.get()))
            .set(offers::redemptions.eq(offers::redemptions + 1))
            .get_result::<DbOffer>(&mut conn)?;

        Offer::try_from(updated).map_err(RepositoryError::from)
    }

    fn delete_offer(&self, id: OfferId) -> RepositoryResult<()> {
        use crate::schema::offers;

        let mut conn = self.conn()?;
        diesel::delete(offers::table.find(id.get())).execute(&mut conn)?;
        Ok(())
    }
}
