//! DTOs for the store settings page.

use crate::domain::store_profile::StoreProfile;

/// Data required to render the settings template.
pub struct SettingsPageData {
    /// `None` until the hub saves its profile.
    pub profile: Option<StoreProfile>,
}
