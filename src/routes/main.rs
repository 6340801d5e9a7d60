use actix_identity::Identity;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::dto::main::{DirectoryQuery, HomeQuery};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, public_context, redirect, render_template};
use crate::services::main as main_service;

#[get("/")]
pub async fn show_home(
    params: web::Query<HomeQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let hub_id = params.into_inner().hub.unwrap_or(server_config.default_hub_id);

    match main_service::load_home_page(repo.get_ref(), hub_id) {
        Ok(data) => {
            let mut context =
                public_context(&flash_messages, "home", &server_config.auth_service_url);
            context.insert("featured", &data.featured);
            context.insert("categories", &data.categories);
            context.insert("store", &data.store);

            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load home page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/directory")]
pub async fn show_directory(
    params: web::Query<DirectoryQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = params.into_inner();
    let hub_id = query.hub.unwrap_or(server_config.default_hub_id);

    match main_service::load_directory_page(repo.get_ref(), hub_id, query) {
        Ok(data) => {
            let mut context =
                public_context(&flash_messages, "directory", &server_config.auth_service_url);
            context.insert("listings", &data.listings);
            context.insert("categories", &data.categories);
            context.insert("criteria", &data.criteria);

            render_template(&tera, "main/directory.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load directory: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/na")]
pub async fn not_assigned(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(
        &flash_messages,
        &user,
        "home",
        &server_config.auth_service_url,
    );

    render_template(&tera, "main/not_assigned.html", &context)
}

#[post("/logout")]
pub async fn logout(user: Identity) -> impl Responder {
    user.logout();
    redirect("/")
}
