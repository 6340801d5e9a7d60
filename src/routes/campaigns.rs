use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::campaigns::CampaignsQuery;
use crate::forms::campaigns::{AddCampaignForm, DeleteCampaignForm, SaveCampaignForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, campaigns as campaigns_service};

#[get("/campaigns")]
pub async fn show_campaigns(
    params: web::Query<CampaignsQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match campaigns_service::load_campaigns_page(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "campaigns",
                &server_config.auth_service_url,
            );
            context.insert("campaigns", &data.campaigns);
            context.insert("criteria", &data.criteria);

            render_template(&tera, "campaigns/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to list campaigns: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/campaigns/add")]
pub async fn add_campaign(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddCampaignForm>,
) -> impl Responder {
    match campaigns_service::add_campaign(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Campaign created.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to add a campaign: {err}");
            FlashMessage::error("Could not create the campaign.").send();
        }
    }
    redirect("/campaigns")
}

#[post("/campaigns/save")]
pub async fn save_campaign(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveCampaignForm>,
) -> impl Responder {
    match campaigns_service::save_campaign(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Campaign updated.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Campaign not found.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to update campaign: {err}");
            FlashMessage::error("Could not update the campaign.").send();
        }
    }
    redirect("/campaigns")
}

#[post("/campaigns/delete")]
pub async fn delete_campaign(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<DeleteCampaignForm>,
) -> impl Responder {
    match campaigns_service::delete_campaign(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Campaign deleted.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Campaign not found.").send();
        }
        Err(err) => {
            log::error!("Failed to delete campaign: {err}");
            FlashMessage::error("Could not delete the campaign.").send();
        }
    }
    redirect("/campaigns")
}
