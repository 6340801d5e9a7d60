//! Repository implementation for directory listings.

use diesel::prelude::*;

use crate::{
    domain::{
        listing::{Listing, ListingStatus, NewListing, UpdateListing},
        types::{HubId, ListingId},
    },
    models::listing::{
        Listing as DbListing, NewListing as DbNewListing, UpdateListing as DbUpdateListing,
    },
    repository::{DieselRepository, ListingListQuery, ListingReader, ListingWriter,
        errors::RepositoryResult},
};

impl ListingReader for DieselRepository {
    fn get_listing_by_id(&self, id: ListingId, hub_id: HubId) -> RepositoryResult<Option<Listing>> {
        use crate::schema::listings;

        let mut conn = self.conn()?;
        let listing = listings::table
            .filter(listings::id.eq(id.get()))
            .filter(listings::hub_id.eq(hub_id.get()))
            .first::<DbListing>(&mut conn)
            .optional()?;

        Ok(listing.map(Into::into))
    }

    fn list_listings(&self, query: ListingListQuery) -> RepositoryResult<Vec<Listing>> {
        use crate::schema::listings;

        let mut conn = self.conn()?;

        let mut stmt = listings::table
            .filter(listings::hub_id.eq(query.hub_id.get()))
            .into_boxed();

        if let Some(owner_email) = &query.owner_email {
            stmt = stmt.filter(listings::owner_email.eq(owner_email.clone()));
        }
        if query.published_only {
            stmt = stmt.filter(listings::status.eq(ListingStatus::Active.to_string()));
        }

        let items = stmt
            .order(listings::id.asc())
            .load::<DbListing>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl ListingWriter for DieselRepository {
    fn create_listings(&self, new_listings: &[NewListing]) -> RepositoryResult<usize> {
        use crate::schema::listings;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewListing> = new_listings.iter().map(Into::into).collect();
        let affected = diesel::insert_into(listings::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn update_listing(&self, id: ListingId, updates: &UpdateListing) -> RepositoryResult<Listing> {
        use crate::schema::listings;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateListing = updates.into();

        let updated = diesel::update(listings::table.find(id.get()))
            .set((&db_updates, listings::updated_at.eq(diesel::dsl::now)))
            .get_result::<DbListing>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_listing(&self, id: ListingId) -> RepositoryResult<()> {
        use crate::schema::listings;

        let mut conn = self.conn()?;
        diesel::delete(listings::table.find(id.get())).execute(&mut conn)?;
        Ok(())
    }
}
