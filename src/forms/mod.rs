//! Form definitions backing the marketplace routes.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use validator::ValidationErrors;

pub mod campaigns;
pub mod gift_cards;
pub mod listings;
pub mod loyalty;
pub mod offers;
pub mod orders;
pub mod settings;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid csv upload: {0}")]
    Csv(String),

    #[error("invalid discount")]
    InvalidDiscount,
}

/// Optional text inputs submit an empty string when left blank; fold that
/// to `None` so validators only run against real input.
pub(crate) fn de_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}

/// HTML date inputs submit an empty string when left blank.
pub(crate) fn de_opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// HTML number inputs submit an empty string when left blank.
pub(crate) fn de_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Integer twin of [`de_opt_f64`].
pub(crate) fn de_opt_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Whole-currency amount from a form, converted to cents.
pub(crate) fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "de_opt_date")]
        date: Option<NaiveDate>,
        #[serde(default, deserialize_with = "de_opt_f64")]
        amount: Option<f64>,
    }

    #[test]
    fn blank_optionals_deserialize_to_none() {
        let probe: Probe = serde_json::from_value(serde_json::json!({
            "date": "",
            "amount": " ",
        }))
        .expect("blank fields should parse");
        assert_eq!(probe.date, None);
        assert_eq!(probe.amount, None);

        let probe: Probe = serde_json::from_value(serde_json::json!({
            "date": "2026-03-01",
            "amount": "12.50",
        }))
        .expect("filled fields should parse");
        assert_eq!(probe.date, NaiveDate::from_ymd_opt(2026, 3, 1));
        assert_eq!(probe.amount, Some(12.5));
    }

    #[test]
    fn cents_conversion_rounds() {
        assert_eq!(to_cents(12.5), 1_250);
        assert_eq!(to_cents(0.015), 2);
    }
}
