use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::filters::Filterable;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    pub id: i32,
    pub hub_id: i32,
    pub name: String,
    pub status: CampaignStatus,
    pub budget_cents: i64,
    pub spent_cents: i64,
    pub starts_on: NaiveDate,
    /// Open-ended flight when `None`.
    pub ends_on: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum CampaignStatus {
    Draft,
    Active,
    Paused,
    Ended,
    Other(String),
}

impl CampaignStatus {
    pub fn as_str(&self) -> &str {
        match self {
            CampaignStatus::Draft => "Draft",
            CampaignStatus::Active => "Active",
            CampaignStatus::Paused => "Paused",
            CampaignStatus::Ended => "Ended",
            CampaignStatus::Other(s) => s,
        }
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for CampaignStatus {
    fn from(s: &str) -> Self {
        match s {
            "Draft" => CampaignStatus::Draft,
            "Active" => CampaignStatus::Active,
            "Paused" => CampaignStatus::Paused,
            "Ended" => CampaignStatus::Ended,
            _ => CampaignStatus::Other(s.to_string()),
        }
    }
}

impl From<String> for CampaignStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl Campaign {
    /// Whether the campaign is serving on the given day.
    pub fn is_running(&self, today: NaiveDate) -> bool {
        self.status == CampaignStatus::Active
            && today >= self.starts_on
            && self.ends_on.is_none_or(|ends_on| today <= ends_on)
            && self.spent_cents < self.budget_cents
    }

    pub fn remaining_budget_cents(&self) -> i64 {
        (self.budget_cents - self.spent_cents).max(0)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCampaign {
    pub hub_id: i32,
    pub name: String,
    pub budget_cents: i64,
    pub starts_on: NaiveDate,
    pub ends_on: Option<NaiveDate>,
}

impl NewCampaign {
    #[must_use]
    pub fn new(
        hub_id: i32,
        name: String,
        budget_cents: i64,
        starts_on: NaiveDate,
        ends_on: Option<NaiveDate>,
    ) -> Self {
        Self {
            hub_id,
            name: name.trim().to_string(),
            budget_cents: budget_cents.max(0),
            starts_on,
            ends_on,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateCampaign {
    pub name: String,
    pub status: CampaignStatus,
    pub budget_cents: i64,
    pub starts_on: NaiveDate,
    pub ends_on: Option<NaiveDate>,
}

impl UpdateCampaign {
    #[must_use]
    pub fn new(
        name: String,
        status: CampaignStatus,
        budget_cents: i64,
        starts_on: NaiveDate,
        ends_on: Option<NaiveDate>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            status,
            budget_cents: budget_cents.max(0),
            starts_on,
            ends_on,
        }
    }
}

impl Filterable for Campaign {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.starts_on)
    }

    fn amount(&self) -> Option<i64> {
        Some(self.budget_cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("valid date literal")
    }

    fn campaign() -> Campaign {
        Campaign {
            id: 1,
            hub_id: 1,
            name: "Spring promo".to_string(),
            status: CampaignStatus::Active,
            budget_cents: 50_000,
            spent_cents: 10_000,
            starts_on: date("2026-03-01"),
            ends_on: Some(date("2026-03-31")),
            created_at: date("2026-02-20").and_hms_opt(0, 0, 0).unwrap(),
            updated_at: date("2026-02-20").and_hms_opt(0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn running_requires_active_window_and_budget() {
        let campaign = campaign();
        assert!(campaign.is_running(date("2026-03-15")));
        assert!(!campaign.is_running(date("2026-04-01")));

        let mut paused = campaign.clone();
        paused.status = CampaignStatus::Paused;
        assert!(!paused.is_running(date("2026-03-15")));

        let mut exhausted = campaign.clone();
        exhausted.spent_cents = exhausted.budget_cents;
        assert!(!exhausted.is_running(date("2026-03-15")));

        let mut open_ended = campaign;
        open_ended.ends_on = None;
        assert!(open_ended.is_running(date("2027-01-01")));
    }

    #[test]
    fn remaining_budget_never_goes_negative() {
        let mut campaign = campaign();
        campaign.spent_cents = 60_000;
        assert_eq!(campaign.remaining_budget_cents(), 0);
    }

    #[test]
    fn new_campaign_clamps_negative_budget() {
        let campaign = NewCampaign::new(1, "  x  ".to_string(), -5, date("2026-01-01"), None);
        assert_eq!(campaign.budget_cents, 0);
        assert_eq!(campaign.name, "x");
    }
}
