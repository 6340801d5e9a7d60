use serde::Deserialize;
use validator::Validate;

use crate::domain::loyalty::NewLoyaltyProgram;

#[derive(Deserialize, Validate)]
/// Form data for saving the hub's loyalty program.
pub struct SaveLoyaltyForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0))]
    pub points_rate: i32,
    #[validate(range(min = 1))]
    pub reward_threshold: i32,
    pub reward_description: String,
    /// Checkbox; present when checked.
    pub is_active: Option<String>,
}

impl SaveLoyaltyForm {
    pub fn into_new_program(self, hub_id: i32) -> NewLoyaltyProgram {
        NewLoyaltyProgram::new(
            hub_id,
            self.name,
            self.points_rate,
            self.reward_threshold,
            self.reward_description,
            self.is_active.is_some(),
        )
    }
}
