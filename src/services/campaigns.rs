//! Services coordinating the ad campaigns dashboard.

use validator::Validate;

use crate::domain::types::{CampaignId, HubId};
use crate::dto::campaigns::{CampaignsPageData, CampaignsQuery};
use crate::filters::FilterCriteria;
use crate::forms::campaigns::{AddCampaignForm, DeleteCampaignForm, SaveCampaignForm};
use crate::listview::ListState;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{CampaignReader, CampaignWriter};
use crate::services::{ServiceError, ServiceResult, ensure_role};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

/// Loads the filtered, paginated campaigns dashboard.
pub fn load_campaigns_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: CampaignsQuery,
) -> ServiceResult<CampaignsPageData>
where
    R: CampaignReader + ?Sized,
{
    ensure_role(user, SERVICE_ACCESS_ROLE)?;

    let records = repo.list_campaigns(HubId::new(user.hub_id)?)?;

    let criteria = FilterCriteria::new()
        .text(query.q.unwrap_or_default())
        .status(query.status.unwrap_or_default())
        .date_between(query.from, query.to);

    let mut state = ListState::new(criteria, query.page.unwrap_or(1));
    let campaigns = state.apply(records, DEFAULT_ITEMS_PER_PAGE);

    Ok(CampaignsPageData {
        campaigns,
        criteria: state.criteria().clone(),
    })
}

/// Validates the add-campaign form and persists the draft campaign.
pub fn add_campaign<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddCampaignForm,
) -> ServiceResult<()>
where
    R: CampaignWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Invalid campaign details".to_string()));
    }

    repo.create_campaign(&form.into_new_campaign(user.hub_id))
        .map_err(|err| {
            log::error!("Failed to add a campaign: {err}");
            err
        })?;

    Ok(())
}

/// Applies the save form to an existing campaign.
pub fn save_campaign<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveCampaignForm,
) -> ServiceResult<()>
where
    R: CampaignReader + CampaignWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Invalid campaign details".to_string()));
    }

    let hub_id = HubId::new(user.hub_id)?;
    let campaign_id = CampaignId::new(form.id)?;

    repo.get_campaign_by_id(campaign_id, hub_id)?
        .ok_or(ServiceError::NotFound)?;

    repo.update_campaign(campaign_id, &(&form).into())
        .map_err(|err| {
            log::error!("Failed to update campaign: {err}");
            err
        })?;

    Ok(())
}

/// Removes a campaign.
pub fn delete_campaign<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: DeleteCampaignForm,
) -> ServiceResult<()>
where
    R: CampaignReader + CampaignWriter + ?Sized,
{
    ensure_role(user, SERVICE_ADMIN_ROLE)?;

    let hub_id = HubId::new(user.hub_id)?;
    let campaign_id = CampaignId::new(form.id)?;

    repo.get_campaign_by_id(campaign_id, hub_id)?
        .ok_or(ServiceError::NotFound)?;

    repo.delete_campaign(campaign_id).map_err(|err| {
        log::error!("Failed to delete campaign: {err}");
        err
    })?;

    Ok(())
}
