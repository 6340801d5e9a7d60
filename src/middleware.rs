//! Response post-processing shared by the dashboard scope.

use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{Error, HttpResponse, web};

use crate::models::config::ServerConfig;

/// Turns a 401 into a redirect to the external auth service, so an expired
/// or missing identity cookie lands the user on the sign-in page instead of
/// a bare error.
pub fn redirect_unauthorized<B>(
    res: ServiceResponse<B>,
) -> Result<ErrorHandlerResponse<B>, Error> {
    let location = res
        .request()
        .app_data::<web::Data<ServerConfig>>()
        .map(|config| config.auth_service_url.clone())
        .unwrap_or_else(|| "/".to_string());

    let (req, _) = res.into_parts();
    let response = HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
        .map_into_right_body();

    Ok(ErrorHandlerResponse::Response(ServiceResponse::new(
        req, response,
    )))
}
