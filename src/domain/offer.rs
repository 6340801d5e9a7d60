use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::filters::Filterable;

/// A coupon or voucher redeemable against a purchase.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    pub id: i32,
    pub hub_id: i32,
    pub kind: OfferKind,
    pub code: String,
    pub title: String,
    pub discount: Discount,
    pub status: OfferStatus,
    pub valid_from: Option<NaiveDate>,
    pub valid_to: Option<NaiveDate>,
    /// Unlimited when `None`.
    pub max_redemptions: Option<i32>,
    pub redemptions: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum OfferKind {
    Coupon,
    Voucher,
    Other(String),
}

impl OfferKind {
    pub fn as_str(&self) -> &str {
        match self {
            OfferKind::Coupon => "Coupon",
            OfferKind::Voucher => "Voucher",
            OfferKind::Other(s) => s,
        }
    }
}

impl std::fmt::Display for OfferKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for OfferKind {
    fn from(s: &str) -> Self {
        match s {
            "Coupon" => OfferKind::Coupon,
            "Voucher" => OfferKind::Voucher,
            _ => OfferKind::Other(s.to_string()),
        }
    }
}

impl From<String> for OfferKind {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum OfferStatus {
    Active,
    Disabled,
    Other(String),
}

impl OfferStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OfferStatus::Active => "Active",
            OfferStatus::Disabled => "Disabled",
            OfferStatus::Other(s) => s,
        }
    }
}

impl std::fmt::Display for OfferStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for OfferStatus {
    fn from(s: &str) -> Self {
        match s {
            "Active" => OfferStatus::Active,
            "Disabled" => OfferStatus::Disabled,
            _ => OfferStatus::Other(s.to_string()),
        }
    }
}

impl From<String> for OfferStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

/// Discount applied at redemption; percentage or fixed amount.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub enum Discount {
    Percent(i32),
    Fixed(i64),
}

impl Discount {
    /// Cents taken off a subtotal; a fixed discount never exceeds it.
    pub fn cents_off(&self, subtotal_cents: i64) -> i64 {
        match *self {
            Discount::Percent(percent) => {
                subtotal_cents * i64::from(percent.clamp(0, 100)) / 100
            }
            Discount::Fixed(cents) => cents.clamp(0, subtotal_cents),
        }
    }
}

impl Offer {
    /// Whether the offer can be redeemed on the given day.
    pub fn is_live(&self, today: NaiveDate) -> bool {
        self.status == OfferStatus::Active
            && self.valid_from.is_none_or(|from| today >= from)
            && self.valid_to.is_none_or(|to| today <= to)
            && self
                .max_redemptions
                .is_none_or(|cap| self.redemptions < cap)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewOffer {
    pub hub_id: i32,
    pub kind: OfferKind,
    pub code: String,
    pub title: String,
    pub discount: Discount,
    pub valid_from: Option<NaiveDate>,
    pub valid_to: Option<NaiveDate>,
    pub max_redemptions: Option<i32>,
}

impl NewOffer {
    #[must_use]
    pub fn new(
        hub_id: i32,
        kind: OfferKind,
        code: String,
        title: String,
        discount: Discount,
        valid_from: Option<NaiveDate>,
        valid_to: Option<NaiveDate>,
        max_redemptions: Option<i32>,
    ) -> Self {
        Self {
            hub_id,
            kind,
            code: code.trim().to_uppercase(),
            title: title.trim().to_string(),
            discount,
            valid_from,
            valid_to,
            max_redemptions: max_redemptions.filter(|cap| *cap > 0),
        }
    }
}

impl Filterable for Offer {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.code]
    }

    fn category(&self) -> Option<&str> {
        Some(self.kind.as_str())
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn date(&self) -> Option<NaiveDate> {
        self.valid_to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("valid date literal")
    }

    fn offer() -> Offer {
        Offer {
            id: 1,
            hub_id: 1,
            kind: OfferKind::Coupon,
            code: "SUMMER-10".to_string(),
            title: "10% off".to_string(),
            discount: Discount::Percent(10),
            status: OfferStatus::Active,
            valid_from: Some(date("2026-06-01")),
            valid_to: Some(date("2026-08-31")),
            max_redemptions: Some(2),
            redemptions: 0,
            created_at: date("2026-05-15").and_hms_opt(0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn liveness_honors_window_status_and_cap() {
        let offer = offer();
        assert!(offer.is_live(date("2026-07-01")));
        assert!(!offer.is_live(date("2026-05-31")));
        assert!(!offer.is_live(date("2026-09-01")));

        let mut disabled = offer.clone();
        disabled.status = OfferStatus::Disabled;
        assert!(!disabled.is_live(date("2026-07-01")));

        let mut capped = offer.clone();
        capped.redemptions = 2;
        assert!(!capped.is_live(date("2026-07-01")));

        let mut open = offer;
        open.valid_from = None;
        open.valid_to = None;
        open.max_redemptions = None;
        assert!(open.is_live(date("2030-01-01")));
    }

    #[test]
    fn percent_discount_is_proportional() {
        assert_eq!(Discount::Percent(10).cents_off(2_500), 250);
        assert_eq!(Discount::Percent(150).cents_off(1_000), 1_000);
    }

    #[test]
    fn fixed_discount_never_exceeds_subtotal() {
        assert_eq!(Discount::Fixed(500).cents_off(2_000), 500);
        assert_eq!(Discount::Fixed(5_000).cents_off(2_000), 2_000);
        assert_eq!(Discount::Fixed(-5).cents_off(2_000), 0);
    }

    #[test]
    fn new_offer_canonicalizes_code_and_cap() {
        let offer = NewOffer::new(
            1,
            OfferKind::Voucher,
            " welcome-5 ".to_string(),
            "Welcome".to_string(),
            Discount::Fixed(500),
            None,
            None,
            Some(0),
        );
        assert_eq!(offer.code, "WELCOME-5");
        assert_eq!(offer.max_redemptions, None);
    }
}
