use actix_cors::Cors;
use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::http::StatusCode;
use actix_web::middleware::{Compress, ErrorHandlers, Logger};
use actix_web::{App, HttpServer, web};
use tera::Tera;

use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};

use crate::db::establish_connection_pool;
use crate::middleware::redirect_unauthorized;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::api::api_v1_listings;
use crate::routes::campaigns::{add_campaign, delete_campaign, save_campaign, show_campaigns};
use crate::routes::gift_cards::{
    issue_gift_card, redeem_gift_card, show_gift_cards, void_gift_card,
};
use crate::routes::listings::{
    add_listing, delete_listing, listings_upload, save_listing, show_listings,
};
use crate::routes::loyalty::{save_loyalty, show_loyalty};
use crate::routes::main::{logout, not_assigned, show_directory, show_home};
use crate::routes::offers::{add_offer, delete_offer, redeem_offer, show_offers, toggle_offer};
use crate::routes::orders::{show_orders, update_order_status};
use crate::routes::settings::{save_settings, show_settings};

pub mod db;
pub mod domain;
pub mod dto;
pub mod filters;
pub mod forms;
pub mod listview;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Role required to enter the merchant dashboard.
pub const SERVICE_ACCESS_ROLE: &str = "market";
/// Role allowed to manage every record in the hub.
pub const SERVICE_ADMIN_ROLE: &str = "market_admin";

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(Compress::default())
            .wrap(Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_home)
            .service(show_directory)
            .service(not_assigned)
            .service(web::scope("/api").service(api_v1_listings))
            .service(
                web::scope("")
                    .wrap(
                        ErrorHandlers::new()
                            .handler(StatusCode::UNAUTHORIZED, redirect_unauthorized),
                    )
                    .service(show_listings)
                    .service(add_listing)
                    .service(save_listing)
                    .service(delete_listing)
                    .service(listings_upload)
                    .service(show_campaigns)
                    .service(add_campaign)
                    .service(save_campaign)
                    .service(delete_campaign)
                    .service(show_offers)
                    .service(add_offer)
                    .service(toggle_offer)
                    .service(redeem_offer)
                    .service(delete_offer)
                    .service(show_gift_cards)
                    .service(issue_gift_card)
                    .service(redeem_gift_card)
                    .service(void_gift_card)
                    .service(show_orders)
                    .service(update_order_status)
                    .service(show_loyalty)
                    .service(save_loyalty)
                    .service(show_settings)
                    .service(save_settings)
                    .service(logout),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
