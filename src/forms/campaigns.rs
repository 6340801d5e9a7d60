use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::campaign::{CampaignStatus, NewCampaign, UpdateCampaign};
use crate::forms::to_cents;

#[derive(Deserialize, Validate)]
/// Form data for creating an ad campaign.
pub struct AddCampaignForm {
    #[validate(length(min = 1))]
    pub name: String,
    /// Budget in whole currency units.
    #[validate(range(min = 0.0))]
    pub budget: f64,
    pub starts_on: NaiveDate,
    #[serde(default, deserialize_with = "crate::forms::de_opt_date")]
    pub ends_on: Option<NaiveDate>,
}

impl AddCampaignForm {
    pub fn into_new_campaign(self, hub_id: i32) -> NewCampaign {
        NewCampaign::new(
            hub_id,
            self.name,
            to_cents(self.budget),
            self.starts_on,
            self.ends_on,
        )
    }
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing campaign.
pub struct SaveCampaignForm {
    pub id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    pub status: String,
    #[validate(range(min = 0.0))]
    pub budget: f64,
    pub starts_on: NaiveDate,
    #[serde(default, deserialize_with = "crate::forms::de_opt_date")]
    pub ends_on: Option<NaiveDate>,
}

impl From<&SaveCampaignForm> for UpdateCampaign {
    fn from(form: &SaveCampaignForm) -> Self {
        UpdateCampaign::new(
            form.name.clone(),
            CampaignStatus::from(form.status.as_str()),
            to_cents(form.budget),
            form.starts_on,
            form.ends_on,
        )
    }
}

#[derive(Deserialize)]
/// Form data for deleting a campaign.
pub struct DeleteCampaignForm {
    pub id: i32,
}
