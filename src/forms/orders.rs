use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
/// Form data for moving an order to a new status.
pub struct UpdateOrderStatusForm {
    pub id: i32,
    #[validate(length(min = 1))]
    pub status: String,
}
