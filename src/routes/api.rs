use actix_web::{HttpResponse, Responder, get, web};
use log::error;

use crate::dto::api::ListingsApiQuery;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::services::api as api_service;

/// Public search endpoint feeding the directory map view.
#[get("/v1/listings")]
pub async fn api_v1_listings(
    params: web::Query<ListingsApiQuery>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let query = params.into_inner();
    let hub_id = query.hub.unwrap_or(server_config.default_hub_id);

    match api_service::search_directory(repo.get_ref(), hub_id, query) {
        Ok(listings) => HttpResponse::Ok().json(listings),
        Err(err) => {
            error!("Failed to search listings: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
