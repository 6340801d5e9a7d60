use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::loyalty::SaveLoyaltyForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, loyalty as loyalty_service};

#[get("/loyalty")]
pub async fn show_loyalty(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match loyalty_service::load_loyalty_page(repo.get_ref(), &user) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "loyalty",
                &server_config.auth_service_url,
            );
            context.insert("program", &data.program);

            render_template(&tera, "loyalty/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to load loyalty program: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/loyalty/save")]
pub async fn save_loyalty(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveLoyaltyForm>,
) -> impl Responder {
    match loyalty_service::save_loyalty_program(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Loyalty program saved.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to save loyalty program: {err}");
            FlashMessage::error("Could not save the loyalty program.").send();
        }
    }
    redirect("/loyalty")
}
