use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filters::Filterable;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GiftCard {
    pub id: i32,
    pub hub_id: i32,
    pub code: String,
    pub recipient_email: Option<String>,
    pub initial_cents: i64,
    pub balance_cents: i64,
    pub status: GiftCardStatus,
    pub issued_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum GiftCardStatus {
    Active,
    Redeemed,
    Void,
    Other(String),
}

impl GiftCardStatus {
    pub fn as_str(&self) -> &str {
        match self {
            GiftCardStatus::Active => "Active",
            GiftCardStatus::Redeemed => "Redeemed",
            GiftCardStatus::Void => "Void",
            GiftCardStatus::Other(s) => s,
        }
    }
}

impl std::fmt::Display for GiftCardStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for GiftCardStatus {
    fn from(s: &str) -> Self {
        match s {
            "Active" => GiftCardStatus::Active,
            "Redeemed" => GiftCardStatus::Redeemed,
            "Void" => GiftCardStatus::Void,
            _ => GiftCardStatus::Other(s.to_string()),
        }
    }
}

impl From<String> for GiftCardStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

/// Why a debit was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RedemptionError {
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("gift card is not active")]
    NotActive,
    #[error("insufficient balance")]
    InsufficientBalance,
}

impl GiftCard {
    /// Returns the card state after debiting `amount_cents`. A card drained
    /// to zero flips to `Redeemed`.
    pub fn debit(&self, amount_cents: i64) -> Result<GiftCard, RedemptionError> {
        if amount_cents <= 0 {
            return Err(RedemptionError::NonPositiveAmount);
        }
        if self.status != GiftCardStatus::Active {
            return Err(RedemptionError::NotActive);
        }
        if amount_cents > self.balance_cents {
            return Err(RedemptionError::InsufficientBalance);
        }

        let balance_cents = self.balance_cents - amount_cents;
        let status = if balance_cents == 0 {
            GiftCardStatus::Redeemed
        } else {
            GiftCardStatus::Active
        };

        Ok(GiftCard {
            balance_cents,
            status,
            ..self.clone()
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewGiftCard {
    pub hub_id: i32,
    pub code: String,
    pub recipient_email: Option<String>,
    pub initial_cents: i64,
}

impl NewGiftCard {
    #[must_use]
    pub fn new(hub_id: i32, code: String, recipient_email: Option<String>, initial_cents: i64) -> Self {
        Self {
            hub_id,
            code: code.trim().to_uppercase(),
            recipient_email: recipient_email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            initial_cents: initial_cents.max(0),
        }
    }
}

impl Filterable for GiftCard {
    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.code.as_str()];
        if let Some(email) = &self.recipient_email {
            fields.push(email.as_str());
        }
        fields
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn amount(&self) -> Option<i64> {
        Some(self.balance_cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn card(balance: i64, status: GiftCardStatus) -> GiftCard {
        GiftCard {
            id: 1,
            hub_id: 1,
            code: "GC-TEST".to_string(),
            recipient_email: Some("friend@example.com".to_string()),
            initial_cents: 5_000,
            balance_cents: balance,
            status,
            issued_at: NaiveDate::from_ymd_opt(2026, 1, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn debit_reduces_balance() {
        let updated = card(5_000, GiftCardStatus::Active).debit(1_500).unwrap();
        assert_eq!(updated.balance_cents, 3_500);
        assert_eq!(updated.status, GiftCardStatus::Active);
    }

    #[test]
    fn draining_the_card_marks_it_redeemed() {
        let updated = card(1_500, GiftCardStatus::Active).debit(1_500).unwrap();
        assert_eq!(updated.balance_cents, 0);
        assert_eq!(updated.status, GiftCardStatus::Redeemed);
    }

    #[test]
    fn debit_rejects_overdraft_and_bad_states() {
        assert_eq!(
            card(1_000, GiftCardStatus::Active).debit(1_001),
            Err(RedemptionError::InsufficientBalance)
        );
        assert_eq!(
            card(1_000, GiftCardStatus::Void).debit(100),
            Err(RedemptionError::NotActive)
        );
        assert_eq!(
            card(1_000, GiftCardStatus::Active).debit(0),
            Err(RedemptionError::NonPositiveAmount)
        );
    }
}
