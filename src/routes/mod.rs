//! HTTP route handlers and the helpers shared between them.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::models::auth::AuthenticatedUser;

pub mod api;
pub mod campaigns;
pub mod gift_cards;
pub mod listings;
pub mod loyalty;
pub mod main;
pub mod offers;
pub mod orders;
pub mod settings;

/// 303 redirect to the given location.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Renders a Tera template or logs and answers 500.
pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template {name}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Maps flash levels onto the alert classes used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Template context shared by the public pages.
pub fn public_context(
    flash_messages: &IncomingFlashMessages,
    current_page: &str,
    home_url: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content().to_string(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context.insert("home_url", home_url);
    context
}

/// Template context shared by the dashboard pages.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: &AuthenticatedUser,
    current_page: &str,
    home_url: &str,
) -> Context {
    let mut context = public_context(flash_messages, current_page, home_url);
    context.insert("current_user", user);
    context
}
