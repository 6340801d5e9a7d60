//! Repository implementation for ad campaigns.

use diesel::prelude::*;

use crate::{
    domain::{
        campaign::{Campaign, NewCampaign, UpdateCampaign},
        types::{CampaignId, HubId},
    },
    models::campaign::{
        Campaign as DbCampaign, NewCampaign as DbNewCampaign, UpdateCampaign as DbUpdateCampaign,
    },
    repository::{CampaignReader, CampaignWriter, DieselRepository, errors::RepositoryResult},
};

impl CampaignReader for DieselRepository {
    fn get_campaign_by_id(
        &self,
        id: CampaignId,
        hub_id: HubId,
    ) -> RepositoryResult<Option<Campaign>> {
        use crate::schema::campaigns;

        let mut conn = self.conn()?;
        let campaign = campaigns::table
            .filter(campaigns::id.eq(id.get()))
            .filter(campaigns::hub_id.eq(hub_id.get()))
            .first::<DbCampaign>(&mut conn)
            .optional()?;

        Ok(campaign.map(Into::into))
    }

    fn list_campaigns(&self, hub_id: HubId) -> RepositoryResult<Vec<Campaign>> {
        use crate::schema::campaigns;

        let mut conn = self.conn()?;
        let items = campaigns::table
            .filter(campaigns::hub_id.eq(hub_id.get()))
            .order(campaigns::id.asc())
            .load::<DbCampaign>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl CampaignWriter for DieselRepository {
    fn create_campaign(&self, new_campaign: &NewCampaign) -> RepositoryResult<Campaign> {
        use crate::schema::campaigns;

        let mut conn = self.conn()?;
        let insertable: DbNewCampaign = new_campaign.into();
        let created = diesel::insert_into(campaigns::table)
            .values(&insertable)
            .get_result::<DbCampaign>(&mut conn)?;

        Ok(created.into())
    }

    fn update_campaign(
        &self,
        id: CampaignId,
        updates: &UpdateCampaign,
    ) -> RepositoryResult<Campaign> {
        use crate::schema::campaigns;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateCampaign = updates.into();

        let updated = diesel::update(campaigns::table.find(id.get()))
            .set((&db_updates, campaigns::updated_at.eq(diesel::dsl::now)))
            .get_result::<DbCampaign>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_campaign(&self, id: CampaignId) -> RepositoryResult<()> {
        use crate::schema::campaigns;

        let mut conn = self.conn()?;
        diesel::delete(campaigns::table.find(id.get())).execute(&mut conn)?;
        Ok(())
    }
}
