//! Repository implementation for the per-hub loyalty program.

use diesel::{prelude::*, upsert::excluded};

use crate::{
    domain::{
        loyalty::{LoyaltyProgram, NewLoyaltyProgram},
        types::HubId,
    },
    models::loyalty::{LoyaltyProgram as DbLoyaltyProgram, NewLoyaltyProgram as DbNewLoyaltyProgram},
    repository::{DieselRepository, LoyaltyReader, LoyaltyWriter, errors::RepositoryResult},
};

impl LoyaltyReader for DieselRepository {
    fn get_loyalty_program(&self, hub_id: HubId) -> RepositoryResult<Option<LoyaltyProgram>> {
        use crate::schema::loyalty_programs;

        let mut conn = self.conn()?;
        let program = loyalty_programs::table
            .filter(loyalty_programs::hub_id.eq(hub_id.get()))
            .first::<DbLoyaltyProgram>(&mut conn)
            .optional()?;

        Ok(program.map(Into::into))
    }
}

impl LoyaltyWriter for DieselRepository {
    fn upsert_loyalty_program(
        &self,
        new_program: &NewLoyaltyProgram,
    ) -> RepositoryResult<LoyaltyProgram> {
        use crate::schema::loyalty_programs;

        let mut conn = self.conn()?;
        let insertable: DbNewLoyaltyProgram = new_program.into();

        let program = diesel::insert_into(loyalty_programs::table)
            .values(&insertable)
            .on_conflict(loyalty_programs::hub_id)
            .do_update()
            .set((
                loyalty_programs::name.eq(excluded(loyalty_programs::name)),
                loyalty_programs::points_rate.eq(excluded(loyalty_programs::points_rate)),
                loyalty_programs::reward_threshold
                    .eq(excluded(loyalty_programs::reward_threshold)),
                loyalty_programs::reward_description
                    .eq(excluded(loyalty_programs::reward_description)),
                loyalty_programs::is_active.eq(excluded(loyalty_programs::is_active)),
                loyalty_programs::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<DbLoyaltyProgram>(&mut conn)?;

        Ok(program.into())
    }
}
