//! Services coordinating the store settings page.

use validator::Validate;

use crate::domain::types::HubId;
use crate::dto::settings::SettingsPageData;
use crate::forms::settings::SaveStoreProfileForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{StoreProfileReader, StoreProfileWriter};
use crate::services::{ServiceError, ServiceResult, ensure_role};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

/// Loads the hub's store profile, if saved.
pub fn load_settings_page<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<SettingsPageData>
where
    R: StoreProfileReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let profile = repo.get_store_profile(HubId::new(user.hub_id)?)?;

    Ok(SettingsPageData { profile })
}

/// Validates and upserts the hub's store profile.
pub fn save_store_profile<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveStoreProfileForm,
) -> ServiceResult<()>
where
    R: StoreProfileWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Invalid store profile".to_string()));
    }

    let new_profile = form.into_new_profile(user.hub_id)?;

    repo.upsert_store_profile(&new_profile).map_err(|err| {
        log::error!("Failed to save store profile: {err}");
        err
    })?;

    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn viewer_user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "2".to_string(),
            email: "viewer@example.com".to_string(),
            name: "Viewer".to_string(),
            hub_id: 42,
            roles: vec![SERVICE_ACCESS_ROLE.to_string()],
            exp: 0,
        }
    }

    #[test]
    fn saving_requires_the_admin_role() {
        let mut repo = MockRepository::new();
        repo.expect_upsert_store_profile().times(0);

        let form = SaveStoreProfileForm {
            store_name: "Shop".to_string(),
            tagline: None,
            contact_email: None,
            contact_phone: None,
            address: None,
            opening_hours: None,
            accepts_gift_cards: None,
        };

        let result = save_store_profile(&repo, &viewer_user(), form);

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn invalid_contact_email_degrades_to_a_type_error() {
        let mut repo = MockRepository::new();
        repo.expect_upsert_store_profile().times(0);

        let mut user = viewer_user();
        user.roles.push(SERVICE_ADMIN_ROLE.to_string());

        let form = SaveStoreProfileForm {
            store_name: "Shop".to_string(),
            tagline: None,
            contact_email: Some("not-an-email".to_string()),
            contact_phone: None,
            address: None,
            opening_hours: None,
            accepts_gift_cards: None,
        };

        let result = save_store_profile(&repo, &user, form);

        assert!(matches!(result, Err(ServiceError::TypeConstraint(_))));
    }
}
