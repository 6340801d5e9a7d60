use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
/// Form data for issuing a new gift card.
pub struct IssueGiftCardForm {
    #[validate(email)]
    #[serde(default, deserialize_with = "crate::forms::de_opt_string")]
    pub recipient_email: Option<String>,
    /// Face value in whole currency units.
    #[validate(range(min = 0.01))]
    pub amount: f64,
}

#[derive(Deserialize, Validate)]
/// Form data for redeeming part of a gift card balance.
pub struct RedeemGiftCardForm {
    #[validate(length(min = 1))]
    pub code: String,
    /// Amount to debit in whole currency units.
    #[validate(range(min = 0.01))]
    pub amount: f64,
}

#[derive(Deserialize)]
/// Form data for voiding a gift card.
pub struct VoidGiftCardForm {
    pub id: i32,
}
