use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::campaign::{
    Campaign as DomainCampaign, NewCampaign as DomainNewCampaign,
    UpdateCampaign as DomainUpdateCampaign,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::campaigns)]
/// Diesel model for [`crate::domain::campaign::Campaign`].
pub struct Campaign {
    pub id: i32,
    pub hub_id: i32,
    pub name: String,
    pub status: String,
    pub budget_cents: i64,
    pub spent_cents: i64,
    pub starts_on: NaiveDate,
    pub ends_on: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::campaigns)]
/// Insertable form of [`Campaign`]; new campaigns start as drafts.
pub struct NewCampaign<'a> {
    pub hub_id: i32,
    pub name: &'a str,
    pub status: String,
    pub budget_cents: i64,
    pub starts_on: NaiveDate,
    pub ends_on: Option<NaiveDate>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::campaigns)]
/// Data used when updating a [`Campaign`] record.
pub struct UpdateCampaign<'a> {
    pub name: &'a str,
    pub status: String,
    pub budget_cents: i64,
    pub starts_on: NaiveDate,
    pub ends_on: Option<Option<NaiveDate>>,
}

impl From<Campaign> for DomainCampaign {
    fn from(campaign: Campaign) -> Self {
        Self {
            id: campaign.id,
            hub_id: campaign.hub_id,
            name: campaign.name,
            status: campaign.status.into(),
            budget_cents: campaign.budget_cents,
            spent_cents: campaign.spent_cents,
            starts_on: campaign.starts_on,
            ends_on: campaign.ends_on,
            created_at: campaign.created_at,
            updated_at: campaign.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCampaign> for NewCampaign<'a> {
    fn from(campaign: &'a DomainNewCampaign) -> Self {
        Self {
            hub_id: campaign.hub_id,
            name: campaign.name.as_str(),
            status: crate::domain::campaign::CampaignStatus::Draft.to_string(),
            budget_cents: campaign.budget_cents,
            starts_on: campaign.starts_on,
            ends_on: campaign.ends_on,
        }
    }
}

impl<'a> From<&'a DomainUpdateCampaign> for UpdateCampaign<'a> {
    fn from(campaign: &'a DomainUpdateCampaign) -> Self {
        Self {
            name: campaign.name.as_str(),
            status: campaign.status.to_string(),
            budget_cents: campaign.budget_cents,
            starts_on: campaign.starts_on,
            // Always written, so clearing the end date persists.
            ends_on: Some(campaign.ends_on),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::campaign::CampaignStatus;

    #[test]
    fn new_campaigns_are_drafts() {
        let domain = DomainNewCampaign::new(
            1,
            "Launch".to_string(),
            10_000,
            NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            None,
        );
        let new: NewCampaign = (&domain).into();
        assert_eq!(new.status, "Draft");
        assert_eq!(new.ends_on, None);
    }

    #[test]
    fn update_clears_open_ended_flight() {
        let domain = DomainUpdateCampaign::new(
            "Launch".to_string(),
            CampaignStatus::Active,
            10_000,
            NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            None,
        );
        let update: UpdateCampaign = (&domain).into();
        assert_eq!(update.ends_on, Some(None));
        assert_eq!(update.status, "Active");
    }
}
