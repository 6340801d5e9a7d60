use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::settings::SaveStoreProfileForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, settings as settings_service};

#[get("/settings")]
pub async fn show_settings(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match settings_service::load_settings_page(repo.get_ref(), &user) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "settings",
                &server_config.auth_service_url,
            );
            context.insert("profile", &data.profile);

            render_template(&tera, "settings/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to load settings: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/settings/save")]
pub async fn save_settings(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveStoreProfileForm>,
) -> impl Responder {
    match settings_service::save_store_profile(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Store profile saved.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::Form(message) | ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to save store profile: {err}");
            FlashMessage::error("Could not save the store profile.").send();
        }
    }
    redirect("/settings")
}
