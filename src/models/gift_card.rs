use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::gift_card::{GiftCard as DomainGiftCard, NewGiftCard as DomainNewGiftCard};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::gift_cards)]
/// Diesel model for [`crate::domain::gift_card::GiftCard`].
pub struct GiftCard {
    pub id: i32,
    pub hub_id: i32,
    pub code: String,
    pub recipient_email: Option<String>,
    pub initial_cents: i64,
    pub balance_cents: i64,
    pub status: String,
    pub issued_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::gift_cards)]
/// Insertable form of [`GiftCard`]; the balance starts at the face value.
pub struct NewGiftCard<'a> {
    pub hub_id: i32,
    pub code: &'a str,
    pub recipient_email: Option<&'a str>,
    pub initial_cents: i64,
    pub balance_cents: i64,
    pub status: String,
}

impl From<GiftCard> for DomainGiftCard {
    fn from(card: GiftCard) -> Self {
        Self {
            id: card.id,
            hub_id: card.hub_id,
            code: card.code,
            recipient_email: card.recipient_email,
            initial_cents: card.initial_cents,
            balance_cents: card.balance_cents,
            status: card.status.into(),
            issued_at: card.issued_at,
        }
    }
}

impl<'a> From<&'a DomainNewGiftCard> for NewGiftCard<'a> {
    fn from(card: &'a DomainNewGiftCard) -> Self {
        Self {
            hub_id: card.hub_id,
            code: card.code.as_str(),
            recipient_email: card.recipient_email.as_deref(),
            initial_cents: card.initial_cents,
            balance_cents: card.initial_cents,
            status: crate::domain::gift_card::GiftCardStatus::Active.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_card_opens_with_full_balance() {
        let domain = DomainNewGiftCard::new(1, "gc-1".to_string(), None, 5_000);
        let new: NewGiftCard = (&domain).into();
        assert_eq!(new.code, "GC-1");
        assert_eq!(new.balance_cents, 5_000);
        assert_eq!(new.status, "Active");
    }
}
