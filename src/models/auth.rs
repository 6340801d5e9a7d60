//! Authenticated user extracted from the identity cookie.
//!
//! Sign-in happens on the external auth service; it sets a JWT the
//! [`AuthenticatedUser`] extractor decodes on every dashboard request. A
//! missing or invalid token yields 401, which the unauthorized-redirect
//! handler turns into a redirect to the auth service.

use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::error::ErrorUnauthorized;
use actix_web::{Error, FromRequest, HttpRequest, dev::Payload, web};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::models::config::ServerConfig;

/// JWT claims issued by the auth service.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub hub_id: i32,
    pub roles: Vec<String>,
    pub exp: usize,
}

/// Whether the role list grants the given role.
pub fn check_role(role: &str, roles: &[String]) -> bool {
    roles.iter().any(|r| r == role)
}

impl AuthenticatedUser {
    pub fn from_token(token: &str, secret: &str) -> Option<Self> {
        decode::<AuthenticatedUser>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .ok()
    }

    /// Signs the claims; used by tests and the demo seeder.
    pub fn to_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let Some(config) = req.app_data::<web::Data<ServerConfig>>() else {
            return ready(Err(ErrorUnauthorized("server configuration missing")));
        };

        let identity = match Identity::from_request(req, payload).into_inner() {
            Ok(identity) => identity,
            Err(_) => return ready(Err(ErrorUnauthorized("not signed in"))),
        };

        match identity
            .id()
            .ok()
            .and_then(|token| Self::from_token(&token, &config.secret))
        {
            Some(user) => ready(Ok(user)),
            None => ready(Err(ErrorUnauthorized("invalid identity token"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".to_string(),
            email: "owner@example.com".to_string(),
            name: "Owner".to_string(),
            hub_id: 1,
            roles: vec!["market".to_string(), "market_admin".to_string()],
            exp: (chrono::Utc::now().timestamp() + 3_600) as usize,
        }
    }

    #[test]
    fn token_round_trip() {
        let user = user();
        let token = user.to_token("secret").expect("token should sign");
        let decoded = AuthenticatedUser::from_token(&token, "secret").expect("token should decode");
        assert_eq!(decoded.email, user.email);
        assert_eq!(decoded.hub_id, user.hub_id);
        assert_eq!(decoded.roles, user.roles);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = user().to_token("secret").expect("token should sign");
        assert!(AuthenticatedUser::from_token(&token, "other").is_none());
    }

    #[test]
    fn role_check_is_exact() {
        let roles = vec!["market".to_string()];
        assert!(check_role("market", &roles));
        assert!(!check_role("market_admin", &roles));
    }
}
