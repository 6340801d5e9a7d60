use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::loyalty::{
    LoyaltyProgram as DomainLoyaltyProgram, NewLoyaltyProgram as DomainNewLoyaltyProgram,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::loyalty_programs)]
/// Diesel model for [`crate::domain::loyalty::LoyaltyProgram`].
pub struct LoyaltyProgram {
    pub id: i32,
    pub hub_id: i32,
    pub name: String,
    pub points_rate: i32,
    pub reward_threshold: i32,
    pub reward_description: String,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::loyalty_programs)]
/// Insertable/upsert form of [`LoyaltyProgram`].
pub struct NewLoyaltyProgram<'a> {
    pub hub_id: i32,
    pub name: &'a str,
    pub points_rate: i32,
    pub reward_threshold: i32,
    pub reward_description: &'a str,
    pub is_active: bool,
}

impl From<LoyaltyProgram> for DomainLoyaltyProgram {
    fn from(program: LoyaltyProgram) -> Self {
        Self {
            id: program.id,
            hub_id: program.hub_id,
            name: program.name,
            points_rate: program.points_rate,
            reward_threshold: program.reward_threshold,
            reward_description: program.reward_description,
            is_active: program.is_active,
            updated_at: program.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewLoyaltyProgram> for NewLoyaltyProgram<'a> {
    fn from(program: &'a DomainNewLoyaltyProgram) -> Self {
        Self {
            hub_id: program.hub_id,
            name: program.name.as_str(),
            points_rate: program.points_rate,
            reward_threshold: program.reward_threshold,
            reward_description: program.reward_description.as_str(),
            is_active: program.is_active,
        }
    }
}
