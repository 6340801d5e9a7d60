use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::offer::{Discount, NewOffer as DomainNewOffer, Offer as DomainOffer};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::offers)]
/// Diesel model for [`crate::domain::offer::Offer`].
///
/// The discount is stored across two nullable columns; exactly one is
/// expected to be set, which is why the domain conversion is fallible.
pub struct Offer {
    pub id: i32,
    pub hub_id: i32,
    pub kind: String,
    pub code: String,
    pub title: String,
    pub discount_percent: Option<i32>,
    pub discount_cents: Option<i64>,
    pub status: String,
    pub valid_from: Option<NaiveDate>,
    pub valid_to: Option<NaiveDate>,
    pub max_redemptions: Option<i32>,
    pub redemptions: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::offers)]
/// Insertable form of [`Offer`].
pub struct NewOffer<'a> {
    pub hub_id: i32,
    pub kind: String,
    pub code: &'a str,
    pub title: &'a str,
    pub discount_percent: Option<i32>,
    pub discount_cents: Option<i64>,
    pub status: String,
    pub valid_from: Option<NaiveDate>,
    pub valid_to: Option<NaiveDate>,
    pub max_redemptions: Option<i32>,
}

impl TryFrom<Offer> for DomainOffer {
    type Error = TypeConstraintError;

    fn try_from(offer: Offer) -> Result<Self, Self::Error> {
        let discount = match (offer.discount_percent, offer.discount_cents) {
            (Some(percent), _) => Discount::Percent(percent),
            (None, Some(cents)) => Discount::Fixed(cents),
            (None, None) => {
                return Err(TypeConstraintError::InvalidValue(format!(
                    "offer {} has no discount",
                    offer.id
                )));
            }
        };

        Ok(Self {
            id: offer.id,
            hub_id: offer.hub_id,
            kind: offer.kind.into(),
            code: offer.code,
            title: offer.title,
            discount,
            status: offer.status.into(),
            valid_from: offer.valid_from,
            valid_to: offer.valid_to,
            max_redemptions: offer.max_redemptions,
            redemptions: offer.redemptions,
            created_at: offer.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewOffer> for NewOffer<'a> {
    fn from(offer: &'a DomainNewOffer) -> Self {
        let (discount_percent, discount_cents) = match offer.discount {
            Discount::Percent(percent) => (Some(percent), None),
            Discount::Fixed(cents) => (None, Some(cents)),
        };

        Self {
            hub_id: offer.hub_id,
            kind: offer.kind.to_string(),
            code: offer.code.as_str(),
            title: offer.title.as_str(),
            discount_percent,
            discount_cents,
            status: crate::domain::offer::OfferStatus::Active.to_string(),
            valid_from: offer.valid_from,
            valid_to: offer.valid_to,
            max_redemptions: offer.max_redemptions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::offer::{OfferKind, OfferStatus};
    use chrono::Utc;

    fn db_offer(percent: Option<i32>, cents: Option<i64>) -> Offer {
        Offer {
            id: 1,
            hub_id: 1,
            kind: "Coupon".to_string(),
            code: "TEN".to_string(),
            title: "10% off".to_string(),
            discount_percent: percent,
            discount_cents: cents,
            status: "Active".to_string(),
            valid_from: None,
            valid_to: None,
            max_redemptions: None,
            redemptions: 0,
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn discount_columns_fold_into_the_enum() {
        let percent = DomainOffer::try_from(db_offer(Some(10), None)).unwrap();
        assert_eq!(percent.discount, Discount::Percent(10));
        assert_eq!(percent.kind, OfferKind::Coupon);
        assert_eq!(percent.status, OfferStatus::Active);

        let fixed = DomainOffer::try_from(db_offer(None, Some(500))).unwrap();
        assert_eq!(fixed.discount, Discount::Fixed(500));
    }

    #[test]
    fn missing_discount_is_rejected() {
        assert!(DomainOffer::try_from(db_offer(None, None)).is_err());
    }

    #[test]
    fn new_offer_splits_the_discount() {
        let domain = DomainNewOffer::new(
            1,
            OfferKind::Voucher,
            "GIFT".to_string(),
            "Gift".to_string(),
            Discount::Fixed(1_000),
            None,
            None,
            Some(5),
        );
        let new: NewOffer = (&domain).into();
        assert_eq!(new.discount_percent, None);
        assert_eq!(new.discount_cents, Some(1_000));
        assert_eq!(new.status, "Active");
    }
}
