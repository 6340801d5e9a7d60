//! Repository implementation for orders.

use diesel::prelude::*;

use crate::{
    domain::{
        order::{NewOrder, Order, OrderStatus},
        types::{HubId, OrderId},
    },
    models::order::{NewOrder as DbNewOrder, Order as DbOrder},
    repository::{DieselRepository, OrderReader, OrderWriter, errors::RepositoryResult},
};

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: OrderId, hub_id: HubId) -> RepositoryResult<Option<Order>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let order = orders::table
            .filter(orders::id.eq(id.get()))
            .filter(orders::hub_id.eq(hub_id.get()))
            .first::<DbOrder>(&mut conn)
            .optional()?;

        Ok(order.map(Into::into))
    }

    fn list_orders(&self, hub_id: HubId) -> RepositoryResult<Vec<Order>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let items = orders::table
            .filter(orders::hub_id.eq(hub_id.get()))
            .order(orders::id.asc())
            .load::<DbOrder>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl OrderWriter for DieselRepository {
    fn create_orders(&self, new_orders: &[NewOrder]) -> RepositoryResult<usize> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewOrder> = new_orders.iter().map(Into::into).collect();
        let affected = diesel::insert_into(orders::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn set_order_status(&self, id: OrderId, status: &OrderStatus) -> RepositoryResult<Order> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let updated = diesel::update(orders::table.find(id.get()))
            .set(orders::status.eq(status.to_string()))
            .get_result::<DbOrder>(&mut conn)?;

        Ok(updated.into())
    }
}
