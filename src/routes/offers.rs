use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::offers::OffersQuery;
use crate::forms::offers::{AddOfferForm, DeleteOfferForm, RedeemOfferForm, ToggleOfferForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, offers as offers_service};

#[get("/offers")]
pub async fn show_offers(
    params: web::Query<OffersQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match offers_service::load_offers_page(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "offers",
                &server_config.auth_service_url,
            );
            context.insert("offers", &data.offers);
            context.insert("criteria", &data.criteria);

            render_template(&tera, "offers/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to list offers: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/offers/add")]
pub async fn add_offer(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddOfferForm>,
) -> impl Responder {
    match offers_service::add_offer(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Offer created.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::Form(message) | ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to add an offer: {err}");
            FlashMessage::error("Could not create the offer.").send();
        }
    }
    redirect("/offers")
}

#[post("/offers/toggle")]
pub async fn toggle_offer(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ToggleOfferForm>,
) -> impl Responder {
    match offers_service::toggle_offer(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Offer updated.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Offer not found.").send();
        }
        Err(err) => {
            log::error!("Failed to toggle offer: {err}");
            FlashMessage::error("Could not update the offer.").send();
        }
    }
    redirect("/offers")
}

#[post("/offers/redeem")]
pub async fn redeem_offer(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<RedeemOfferForm>,
) -> impl Responder {
    match offers_service::redeem_offer(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Offer redeemed.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("No offer with that code.").send();
        }
        Err(ServiceError::Form(message) | ServiceError::TypeConstraint(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to redeem offer: {err}");
            FlashMessage::error("Could not redeem the offer.").send();
        }
    }
    redirect("/offers")
}

#[post("/offers/delete")]
pub async fn delete_offer(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<DeleteOfferForm>,
) -> impl Responder {
    match offers_service::delete_offer(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Offer deleted.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Offer not found.").send();
        }
        Err(err) => {
            log::error!("Failed to delete offer: {err}");
            FlashMessage::error("Could not delete the offer.").send();
        }
    }
    redirect("/offers")
}
