use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Per-hub loyalty program; at most one exists per tenant.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoyaltyProgram {
    pub id: i32,
    pub hub_id: i32,
    pub name: String,
    /// Points earned per whole currency unit spent.
    pub points_rate: i32,
    /// Points needed to unlock the reward.
    pub reward_threshold: i32,
    pub reward_description: String,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

impl LoyaltyProgram {
    /// Points accrued for a purchase total, floored to whole points.
    pub fn points_for(&self, total_cents: i64) -> i64 {
        if !self.is_active || total_cents <= 0 {
            return 0;
        }
        total_cents * i64::from(self.points_rate.max(0)) / 100
    }

    /// Whether a running balance qualifies for the reward.
    pub fn reward_unlocked(&self, points_balance: i64) -> bool {
        self.is_active && points_balance >= i64::from(self.reward_threshold)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewLoyaltyProgram {
    pub hub_id: i32,
    pub name: String,
    pub points_rate: i32,
    pub reward_threshold: i32,
    pub reward_description: String,
    pub is_active: bool,
}

impl NewLoyaltyProgram {
    #[must_use]
    pub fn new(
        hub_id: i32,
        name: String,
        points_rate: i32,
        reward_threshold: i32,
        reward_description: String,
        is_active: bool,
    ) -> Self {
        Self {
            hub_id,
            name: name.trim().to_string(),
            points_rate: points_rate.max(0),
            reward_threshold: reward_threshold.max(0),
            reward_description: reward_description.trim().to_string(),
            is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn program(points_rate: i32, is_active: bool) -> LoyaltyProgram {
        LoyaltyProgram {
            id: 1,
            hub_id: 1,
            name: "Regulars".to_string(),
            points_rate,
            reward_threshold: 100,
            reward_description: "Free coffee".to_string(),
            is_active,
            updated_at: NaiveDate::from_ymd_opt(2026, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn points_accrue_per_currency_unit() {
        // 2 points per unit on a 12.50 purchase.
        assert_eq!(program(2, true).points_for(1_250), 25);
        assert_eq!(program(2, true).points_for(99), 1);
        assert_eq!(program(2, true).points_for(0), 0);
    }

    #[test]
    fn inactive_program_accrues_nothing() {
        assert_eq!(program(2, false).points_for(1_250), 0);
        assert!(!program(2, false).reward_unlocked(500));
    }

    #[test]
    fn reward_unlocks_at_threshold() {
        assert!(program(1, true).reward_unlocked(100));
        assert!(!program(1, true).reward_unlocked(99));
    }
}
