//! Services coordinating the orders dashboard.

use validator::Validate;

use crate::domain::order::{Order, OrderStatus};
use crate::domain::types::{HubId, OrderId};
use crate::dto::orders::{OrdersPageData, OrdersQuery, StatusTab};
use crate::filters::FilterCriteria;
use crate::forms::orders::UpdateOrderStatusForm;
use crate::forms::to_cents;
use crate::listview::ListState;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{OrderReader, OrderWriter};
use crate::services::{ServiceError, ServiceResult, ensure_role};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

/// Tab order shown above the orders table.
const TAB_STATUSES: [OrderStatus; 5] = [
    OrderStatus::Pending,
    OrderStatus::Paid,
    OrderStatus::Fulfilled,
    OrderStatus::Cancelled,
    OrderStatus::Refunded,
];

/// Status tabs are counted over the whole batch, before criteria narrow it,
/// so switching tabs always shows live totals.
fn status_tabs(orders: &[Order]) -> Vec<StatusTab> {
    let mut tabs = vec![StatusTab {
        label: "all".to_string(),
        count: orders.len(),
    }];
    for status in &TAB_STATUSES {
        tabs.push(StatusTab {
            label: status.to_string(),
            count: orders.iter().filter(|o| &o.status == status).count(),
        });
    }
    tabs
}

/// Loads the filtered, paginated orders dashboard with its status tabs.
pub fn load_orders_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: OrdersQuery,
) -> ServiceResult<OrdersPageData>
where
    R: OrderReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let records = repo.list_orders(HubId::new(user.hub_id)?)?;
    let tabs = status_tabs(&records);

    let criteria = FilterCriteria::new()
        .text(query.q.unwrap_or_default())
        .status(query.status.unwrap_or_default())
        .date_between(query.from, query.to)
        .amount_between(query.min_total.map(to_cents), query.max_total.map(to_cents));

    let mut state = ListState::new(criteria, query.page.unwrap_or(1));
    let orders = state.apply(records, DEFAULT_ITEMS_PER_PAGE);

    Ok(OrdersPageData {
        orders,
        criteria: state.criteria().clone(),
        tabs,
    })
}

/// Moves an order to a new status, enforcing the transition rules.
pub fn update_order_status<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: UpdateOrderStatusForm,
) -> ServiceResult<()>
where
    R: OrderReader + OrderWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Invalid order status".to_string()));
    }

    let next = OrderStatus::from(form.status.as_str());
    if matches!(next, OrderStatus::Other(_)) {
        return Err(ServiceError::Form(format!(
            "Unknown order status: {}",
            form.status
        )));
    }

    let hub_id = HubId::new(user.hub_id)?;
    let order_id = OrderId::new(form.id)?;

    let order = repo
        .get_order_by_id(order_id, hub_id)?
        .ok_or(ServiceError::NotFound)?;

    if !order.status.can_transition_to(&next) {
        return Err(ServiceError::Form(format!(
            "Order {} cannot move from {} to {}",
            order.number, order.status, next
        )));
    }

    repo.set_order_status(order_id, &next).map_err(|err| {
        log::error!("Failed to update order status: {err}");
        err
    })?;

    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;
    use chrono::Utc;

    fn admin_user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".to_string(),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            hub_id: 42,
            roles: vec![
                SERVICE_ACCESS_ROLE.to_string(),
                SERVICE_ADMIN_ROLE.to_string(),
            ],
            exp: 0,
        }
    }

    fn order(id: i32, status: OrderStatus) -> Order {
        Order {
            id,
            hub_id: 42,
            number: format!("ORD-{id}"),
            customer_name: "Jane".to_string(),
            customer_email: "jane@example.com".to_string(),
            total_cents: 2_000,
            status,
            placed_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn tabs_count_the_whole_batch() {
        let mut repo = MockRepository::new();
        repo.expect_list_orders().times(1).returning(|_| {
            Ok(vec![
                order(1, OrderStatus::Pending),
                order(2, OrderStatus::Pending),
                order(3, OrderStatus::Paid),
            ])
        });

        let query = OrdersQuery {
            status: Some("Paid".to_string()),
            ..OrdersQuery::default()
        };
        let data = load_orders_page(&repo, &admin_user(), query).expect("should load page");

        // The view is narrowed to the tab, the counts are not.
        assert_eq!(data.orders.total_items, 1);
        assert_eq!(data.tabs[0], StatusTab { label: "all".to_string(), count: 3 });
        assert_eq!(
            data.tabs[1],
            StatusTab {
                label: "Pending".to_string(),
                count: 2
            }
        );
    }

    #[test]
    fn illegal_transitions_are_rejected() {
        let mut repo = MockRepository::new();
        repo.expect_get_order_by_id()
            .times(1)
            .returning(|_, _| Ok(Some(order(1, OrderStatus::Pending))));
        repo.expect_set_order_status().times(0);

        let result = update_order_status(
            &repo,
            &admin_user(),
            UpdateOrderStatusForm {
                id: 1,
                status: "Fulfilled".to_string(),
            },
        );

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn legal_transitions_are_persisted() {
        let mut repo = MockRepository::new();
        repo.expect_get_order_by_id()
            .times(1)
            .returning(|_, _| Ok(Some(order(1, OrderStatus::Pending))));
        repo.expect_set_order_status()
            .withf(|id, status| id.get() == 1 && *status == OrderStatus::Paid)
            .times(1)
            .returning(|id, status| Ok(order(id.get(), status.clone())));

        update_order_status(
            &repo,
            &admin_user(),
            UpdateOrderStatusForm {
                id: 1,
                status: "Paid".to_string(),
            },
        )
        .expect("should update status");
    }
}
