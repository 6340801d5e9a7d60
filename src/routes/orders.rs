use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::orders::OrdersQuery;
use crate::forms::orders::UpdateOrderStatusForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, orders as orders_service};

#[get("/orders")]
pub async fn show_orders(
    params: web::Query<OrdersQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match orders_service::load_orders_page(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "orders",
                &server_config.auth_service_url,
            );
            context.insert("orders", &data.orders);
            context.insert("criteria", &data.criteria);
            context.insert("tabs", &data.tabs);

            render_template(&tera, "orders/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to list orders: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/orders/status")]
pub async fn update_order_status(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<UpdateOrderStatusForm>,
) -> impl Responder {
    match orders_service::update_order_status(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Order updated.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Order not found.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to update order: {err}");
            FlashMessage::error("Could not update the order.").send();
        }
    }
    redirect("/orders")
}
