use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::offer::{Discount, NewOffer, OfferKind};
use crate::forms::{FormError, to_cents};

#[derive(Deserialize, Validate)]
#[validate(schema(function = "validate_discount"))]
/// Form data for creating a coupon or voucher.
pub struct AddOfferForm {
    #[validate(length(min = 1))]
    pub title: String,
    pub kind: String,
    /// Redemption code; generated when omitted.
    #[serde(default, deserialize_with = "crate::forms::de_opt_string")]
    pub code: Option<String>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default, deserialize_with = "crate::forms::de_opt_i32")]
    pub discount_percent: Option<i32>,
    /// Fixed discount in whole currency units.
    #[validate(range(min = 0.01))]
    #[serde(default, deserialize_with = "crate::forms::de_opt_f64")]
    pub discount_amount: Option<f64>,
    #[serde(default, deserialize_with = "crate::forms::de_opt_date")]
    pub valid_from: Option<NaiveDate>,
    #[serde(default, deserialize_with = "crate::forms::de_opt_date")]
    pub valid_to: Option<NaiveDate>,
    #[serde(default, deserialize_with = "crate::forms::de_opt_i32")]
    pub max_redemptions: Option<i32>,
}

/// Exactly one discount field must be provided.
fn validate_discount(form: &AddOfferForm) -> Result<(), ValidationError> {
    match (form.discount_percent, form.discount_amount) {
        (Some(_), None) | (None, Some(_)) => Ok(()),
        _ => Err(ValidationError::new("discount")),
    }
}

impl AddOfferForm {
    pub fn discount(&self) -> Result<Discount, FormError> {
        match (self.discount_percent, self.discount_amount) {
            (Some(percent), None) => Ok(Discount::Percent(percent)),
            (None, Some(amount)) => Ok(Discount::Fixed(to_cents(amount))),
            _ => Err(FormError::InvalidDiscount),
        }
    }

    /// Builds the [`NewOffer`] with the final code already decided.
    pub fn into_new_offer(self, hub_id: i32, code: String) -> Result<NewOffer, FormError> {
        let discount = self.discount()?;
        Ok(NewOffer::new(
            hub_id,
            OfferKind::from(self.kind.as_str()),
            code,
            self.title,
            discount,
            self.valid_from,
            self.valid_to,
            self.max_redemptions,
        ))
    }
}

#[derive(Deserialize)]
/// Form data for enabling/disabling an offer.
pub struct ToggleOfferForm {
    pub id: i32,
}

#[derive(Deserialize, Validate)]
/// Form data for redeeming an offer at the counter.
pub struct RedeemOfferForm {
    #[validate(length(min = 1))]
    pub code: String,
}

#[derive(Deserialize)]
/// Form data for deleting an offer.
pub struct DeleteOfferForm {
    pub id: i32,
}
