use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::listings::ListingsQuery;
use crate::forms::listings::{
    AddListingForm, DeleteListingForm, SaveListingForm, UploadListingsForm,
};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, listings as listings_service};

#[get("/listings")]
pub async fn show_listings(
    params: web::Query<ListingsQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match listings_service::load_listings_page(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "listings",
                &server_config.auth_service_url,
            );
            context.insert("listings", &data.listings);
            context.insert("categories", &data.categories);
            context.insert("criteria", &data.criteria);

            render_template(&tera, "listings/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to list listings: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/listings/add")]
pub async fn add_listing(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddListingForm>,
) -> impl Responder {
    match listings_service::add_listing(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Listing added.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to add a listing: {err}");
            FlashMessage::error("Could not add the listing.").send();
        }
    }
    redirect("/listings")
}

#[post("/listings/save")]
pub async fn save_listing(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveListingForm>,
) -> impl Responder {
    match listings_service::save_listing(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Listing updated.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("This listing is not yours to edit.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Listing not found.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to update listing: {err}");
            FlashMessage::error("Could not update the listing.").send();
        }
    }
    redirect("/listings")
}

#[post("/listings/delete")]
pub async fn delete_listing(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<DeleteListingForm>,
) -> impl Responder {
    match listings_service::delete_listing(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Listing deleted.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("This listing is not yours to delete.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Listing not found.").send();
        }
        Err(err) => {
            log::error!("Failed to delete listing: {err}");
            FlashMessage::error("Could not delete the listing.").send();
        }
    }
    redirect("/listings")
}

#[post("/listings/upload")]
pub async fn listings_upload(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    MultipartForm(mut form): MultipartForm<UploadListingsForm>,
) -> impl Responder {
    match listings_service::upload_listings(repo.get_ref(), &user, &mut form) {
        Ok(created) => {
            FlashMessage::success(format!("{created} listings imported.")).send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to import listings: {err}");
            FlashMessage::error("Could not import the listings.").send();
        }
    }
    redirect("/listings")
}
