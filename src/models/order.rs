use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{NewOrder as DomainNewOrder, Order as DomainOrder};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::orders)]
/// Diesel model for [`crate::domain::order::Order`].
pub struct Order {
    pub id: i32,
    pub hub_id: i32,
    pub number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub total_cents: i64,
    pub status: String,
    pub placed_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
/// Insertable form of [`Order`]; incoming orders start as pending.
pub struct NewOrder<'a> {
    pub hub_id: i32,
    pub number: &'a str,
    pub customer_name: &'a str,
    pub customer_email: &'a str,
    pub total_cents: i64,
    pub status: String,
    pub placed_at: NaiveDateTime,
}

impl From<Order> for DomainOrder {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            hub_id: order.hub_id,
            number: order.number,
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            total_cents: order.total_cents,
            status: order.status.into(),
            placed_at: order.placed_at,
        }
    }
}

impl<'a> From<&'a DomainNewOrder> for NewOrder<'a> {
    fn from(order: &'a DomainNewOrder) -> Self {
        Self {
            hub_id: order.hub_id,
            number: order.number.as_str(),
            customer_name: order.customer_name.as_str(),
            customer_email: order.customer_email.as_str(),
            total_cents: order.total_cents,
            status: crate::domain::order::OrderStatus::Pending.to_string(),
            placed_at: order.placed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderStatus;
    use chrono::Utc;

    #[test]
    fn new_orders_are_pending() {
        let domain = DomainNewOrder::new(
            1,
            "ORD-1".to_string(),
            "Jane".to_string(),
            "jane@example.com".to_string(),
            2_500,
            Utc::now().naive_utc(),
        );
        let new: NewOrder = (&domain).into();
        assert_eq!(new.status, "Pending");
    }

    #[test]
    fn order_into_domain_parses_status() {
        let db = Order {
            id: 1,
            hub_id: 1,
            number: "ORD-1".to_string(),
            customer_name: "Jane".to_string(),
            customer_email: "jane@example.com".to_string(),
            total_cents: 2_500,
            status: "Paid".to_string(),
            placed_at: Utc::now().naive_utc(),
        };
        let domain: DomainOrder = db.into();
        assert_eq!(domain.status, OrderStatus::Paid);
    }
}
