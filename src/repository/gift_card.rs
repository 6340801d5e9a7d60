//! Repository implementation for gift cards.

use diesel::prelude::*;

use crate::{
    domain::{
        gift_card::{GiftCard, GiftCardStatus, NewGiftCard},
        types::{GiftCardId, HubId},
    },
    models::gift_card::{GiftCard as DbGiftCard, NewGiftCard as DbNewGiftCard},
    repository::{DieselRepository, GiftCardReader, GiftCardWriter, errors::RepositoryResult},
};

impl GiftCardReader for DieselRepository {
    fn get_gift_card_by_id(
        &self,
        id: GiftCardId,
        hub_id: HubId,
    ) -> RepositoryResult<Option<GiftCard>> {
        use crate::schema::gift_cards;

        let mut conn = self.conn()?;
        let card = gift_cards::table
            .filter(gift_cards::id.eq(id.get()))
            .filter(gift_cards::hub_id.eq(hub_id.get()))
            .first::<DbGiftCard>(&mut conn)
            .optional()?;

        Ok(card.map(Into::into))
    }

    fn get_gift_card_by_code(
        &self,
        code: &str,
        hub_id: HubId,
    ) -> RepositoryResult<Option<GiftCard>> {
        use crate::schema::gift_cards;

        let mut conn = self.conn()?;
        let card = gift_cards::table
            .filter(gift_cards::code.eq(code))
            .filter(gift_cards::hub_id.eq(hub_id.get()))
            .first::<DbGiftCard>(&mut conn)
            .optional()?;

        Ok(card.map(Into::into))
    }

    fn list_gift_cards(&self, hub_id: HubId) -> RepositoryResult<Vec<GiftCard>> {
        use crate::schema::gift_cards;

        let mut conn = self.conn()?;
        let items = gift_cards::table
            .filter(gift_cards::hub_id.eq(hub_id.get()))
            .order(gift_cards::id.asc())
            .load::<DbGiftCard>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl GiftCardWriter for DieselRepository {
    fn create_gift_card(&self, new_card: &NewGiftCard) -> RepositoryResult<GiftCard> {
        use crate::schema::gift_cards;

        let mut conn = self.conn()?;
        let insertable: DbNewGiftCard = new_card.into();
        let created = diesel::insert_into(gift_cards::table)
            .values(&insertable)
            .get_result::<DbGiftCard>(&mut conn)?;

        Ok(created.into())
    }

    fn set_gift_card_state(
        &self,
        id: GiftCardId,
        balance_cents: i64,
        status: &GiftCardStatus,
    ) -> RepositoryResult<GiftCard> {
        use crate::schema::gift_cards;

        let mut conn = self.conn()?;
        let updated = diesel::update(gift_cards::table.find(id.get()))
            .set((
                gift_cards::balance_cents.eq(balance_cents),
                gift_cards::status.eq(status.to_string()),
            ))
            .get_result::<DbGiftCard>(&mut conn)?;

        Ok(updated.into())
    }
}
