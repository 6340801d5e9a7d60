//! DTOs for the orders page.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::order::Order;
use crate::filters::FilterCriteria;
use crate::pagination::Paginated;

/// Query parameters accepted by the orders dashboard.
#[derive(Debug, Default, Deserialize)]
pub struct OrdersQuery {
    pub q: Option<String>,
    /// Status tab; `all` shows every order.
    pub status: Option<String>,
    #[serde(default, deserialize_with = "crate::forms::de_opt_date")]
    pub from: Option<NaiveDate>,
    #[serde(default, deserialize_with = "crate::forms::de_opt_date")]
    pub to: Option<NaiveDate>,
    /// Total window, in whole currency units.
    #[serde(default, deserialize_with = "crate::forms::de_opt_f64")]
    pub min_total: Option<f64>,
    #[serde(default, deserialize_with = "crate::forms::de_opt_f64")]
    pub max_total: Option<f64>,
    pub page: Option<usize>,
}

/// One status tab with its order count over the whole batch.
#[derive(Debug, Serialize, PartialEq)]
pub struct StatusTab {
    pub label: String,
    pub count: usize,
}

/// Data required to render the orders template.
pub struct OrdersPageData {
    pub orders: Paginated<Order>,
    pub criteria: FilterCriteria,
    pub tabs: Vec<StatusTab>,
}
