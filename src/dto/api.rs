//! DTOs exposed by the marketplace API endpoints.

use serde::Deserialize;

/// Query parameters accepted by the `/api/v1/listings` endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListingsApiQuery {
    /// Optional free-form search string applied to the directory batch.
    pub query: Option<String>,
    /// Optional category constraint.
    pub category: Option<String>,
    /// Tenant override; the configured default hub is used when absent.
    pub hub: Option<i32>,
}
