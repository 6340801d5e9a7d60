//! Repository implementation for per-hub store settings.

use diesel::{prelude::*, upsert::excluded};

use crate::{
    domain::{
        store_profile::{NewStoreProfile, StoreProfile},
        types::HubId,
    },
    models::store_profile::{
        NewStoreProfile as DbNewStoreProfile, StoreProfile as DbStoreProfile,
    },
    repository::{DieselRepository, StoreProfileReader, StoreProfileWriter,
        errors::RepositoryResult},
};

impl StoreProfileReader for DieselRepository {
    fn get_store_profile(&self, hub_id: HubId) -> RepositoryResult<Option<StoreProfile>> {
        use crate::schema::store_profiles;

        let mut conn = self.conn()?;
        let profile = store_profiles::table
            .filter(store_profiles::hub_id.eq(hub_id.get()))
            .first::<DbStoreProfile>(&mut conn)
            .optional()?;

        Ok(profile.map(Into::into))
    }
}

impl StoreProfileWriter for DieselRepository {
    fn upsert_store_profile(
        &self,
        new_profile: &NewStoreProfile,
    ) -> RepositoryResult<StoreProfile> {
        use crate::schema::store_profiles;

        let mut conn = self.conn()?;
        let insertable: DbNewStoreProfile = new_profile.into();

        let profile = diesel::insert_into(store_profiles::table)
            .values(&insertable)
            .on_conflict(store_profiles::hub_id)
            .do_update()
            .set((
                store_profiles::store_name.eq(excluded(store_profiles::store_name)),
                store_profiles::tagline.eq(excluded(store_profiles::tagline)),
                store_profiles::contact_email.eq(excluded(store_profiles::contact_email)),
                store_profiles::contact_phone.eq(excluded(store_profiles::contact_phone)),
                store_profiles::address.eq(excluded(store_profiles::address)),
                store_profiles::opening_hours.eq(excluded(store_profiles::opening_hours)),
                store_profiles::accepts_gift_cards
                    .eq(excluded(store_profiles::accepts_gift_cards)),
                store_profiles::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<DbStoreProfile>(&mut conn)?;

        Ok(profile.into())
    }
}
