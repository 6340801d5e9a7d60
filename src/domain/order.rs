use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::filters::Filterable;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: i32,
    pub hub_id: i32,
    pub number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub total_cents: i64,
    pub status: OrderStatus,
    pub placed_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum OrderStatus {
    Pending,
    Paid,
    Fulfilled,
    Cancelled,
    Refunded,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Paid => "Paid",
            OrderStatus::Fulfilled => "Fulfilled",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Refunded => "Refunded",
            OrderStatus::Other(s) => s,
        }
    }

    /// Allowed state machine: Pending → Paid | Cancelled, Paid → Fulfilled |
    /// Refunded, Fulfilled → Refunded. Cancelled and Refunded are terminal.
    pub fn can_transition_to(&self, next: &OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Paid)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::Paid, OrderStatus::Fulfilled)
                | (OrderStatus::Paid, OrderStatus::Refunded)
                | (OrderStatus::Fulfilled, OrderStatus::Refunded)
        )
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for OrderStatus {
    fn from(s: &str) -> Self {
        match s {
            "Pending" => OrderStatus::Pending,
            "Paid" => OrderStatus::Paid,
            "Fulfilled" => OrderStatus::Fulfilled,
            "Cancelled" => OrderStatus::Cancelled,
            "Refunded" => OrderStatus::Refunded,
            _ => OrderStatus::Other(s.to_string()),
        }
    }
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewOrder {
    pub hub_id: i32,
    pub number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub total_cents: i64,
    pub placed_at: NaiveDateTime,
}

impl NewOrder {
    #[must_use]
    pub fn new(
        hub_id: i32,
        number: String,
        customer_name: String,
        customer_email: String,
        total_cents: i64,
        placed_at: NaiveDateTime,
    ) -> Self {
        Self {
            hub_id,
            number: number.trim().to_uppercase(),
            customer_name: customer_name.trim().to_string(),
            customer_email: customer_email.to_lowercase().trim().to_string(),
            total_cents: total_cents.max(0),
            placed_at,
        }
    }
}

impl Filterable for Order {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.number, &self.customer_name, &self.customer_email]
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.placed_at.date())
    }

    fn amount(&self) -> Option<i64> {
        Some(self.total_cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_follow_the_state_machine() {
        assert!(OrderStatus::Pending.can_transition_to(&OrderStatus::Paid));
        assert!(OrderStatus::Pending.can_transition_to(&OrderStatus::Cancelled));
        assert!(OrderStatus::Paid.can_transition_to(&OrderStatus::Fulfilled));
        assert!(OrderStatus::Fulfilled.can_transition_to(&OrderStatus::Refunded));

        assert!(!OrderStatus::Pending.can_transition_to(&OrderStatus::Fulfilled));
        assert!(!OrderStatus::Cancelled.can_transition_to(&OrderStatus::Paid));
        assert!(!OrderStatus::Refunded.can_transition_to(&OrderStatus::Pending));
        assert!(!OrderStatus::Paid.can_transition_to(&OrderStatus::Paid));
    }

    #[test]
    fn new_order_normalizes_fields() {
        let order = NewOrder::new(
            1,
            " ord-1009 ".to_string(),
            " Jane Doe ".to_string(),
            "Jane@Example.com".to_string(),
            -50,
            chrono::NaiveDate::from_ymd_opt(2026, 2, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        );
        assert_eq!(order.number, "ORD-1009");
        assert_eq!(order.customer_email, "jane@example.com");
        assert_eq!(order.total_cents, 0);
    }
}
