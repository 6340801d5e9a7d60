use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::gift_cards::GiftCardsQuery;
use crate::forms::gift_cards::{IssueGiftCardForm, RedeemGiftCardForm, VoidGiftCardForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, gift_cards as gift_cards_service};

#[get("/gift-cards")]
pub async fn show_gift_cards(
    params: web::Query<GiftCardsQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match gift_cards_service::load_gift_cards_page(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "gift_cards",
                &server_config.auth_service_url,
            );
            context.insert("gift_cards", &data.gift_cards);
            context.insert("criteria", &data.criteria);

            render_template(&tera, "gift_cards/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to list gift cards: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/gift-cards/issue")]
pub async fn issue_gift_card(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<IssueGiftCardForm>,
) -> impl Responder {
    match gift_cards_service::issue_gift_card(repo.get_ref(), &user, form) {
        Ok(card) => {
            FlashMessage::success(format!("Gift card {} issued.", card.code)).send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to issue gift card: {err}");
            FlashMessage::error("Could not issue the gift card.").send();
        }
    }
    redirect("/gift-cards")
}

#[post("/gift-cards/redeem")]
pub async fn redeem_gift_card(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<RedeemGiftCardForm>,
) -> impl Responder {
    match gift_cards_service::redeem_gift_card(repo.get_ref(), &user, form) {
        Ok(card) => {
            FlashMessage::success(format!(
                "Redeemed; {:.2} remaining on {}.",
                card.balance_cents as f64 / 100.0,
                card.code
            ))
            .send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("No gift card with that code.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to redeem gift card: {err}");
            FlashMessage::error("Could not redeem the gift card.").send();
        }
    }
    redirect("/gift-cards")
}

#[post("/gift-cards/void")]
pub async fn void_gift_card(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<VoidGiftCardForm>,
) -> impl Responder {
    match gift_cards_service::void_gift_card(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Gift card voided.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Gift card not found.").send();
        }
        Err(err) => {
            log::error!("Failed to void gift card: {err}");
            FlashMessage::error("Could not void the gift card.").send();
        }
    }
    redirect("/gift-cards")
}
