//! Services coordinating the loyalty program page.

use validator::Validate;

use crate::domain::types::HubId;
use crate::dto::loyalty::LoyaltyPageData;
use crate::forms::loyalty::SaveLoyaltyForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{LoyaltyReader, LoyaltyWriter};
use crate::services::{ServiceError, ServiceResult, ensure_role};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

/// Loads the hub's loyalty program, if configured.
pub fn load_loyalty_page<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<LoyaltyPageData>
where
    R: LoyaltyReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let program = repo.get_loyalty_program(HubId::new(user.hub_id)?)?;

    Ok(LoyaltyPageData { program })
}

/// Validates and upserts the hub's loyalty program.
pub fn save_loyalty_program<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveLoyaltyForm,
) -> ServiceResult<()>
where
    R: LoyaltyWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Invalid loyalty program".to_string()));
    }

    repo.upsert_loyalty_program(&form.into_new_program(user.hub_id))
        .map_err(|err| {
            log::error!("Failed to save loyalty program: {err}");
            err
        })?;

    Ok(())
}
