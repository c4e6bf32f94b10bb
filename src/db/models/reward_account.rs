//! Reward Account Model

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::serde_thing;

/// Loyalty tier, a pure function of the current point total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tier {
    #[default]
    Bronze,
    Silver,
    Gold,
}

impl Tier {
    /// Fixed thresholds: ≥500 Gold, ≥200 Silver, otherwise Bronze.
    pub fn for_points(points: i64) -> Self {
        if points >= 500 {
            Tier::Gold
        } else if points >= 200 {
            Tier::Silver
        } else {
            Tier::Bronze
        }
    }
}

/// Reward account document (collection `reward_account`), keyed by phone
/// number lookups. Auto-created on first access, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardAccount {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_thing::option"
    )]
    pub id: Option<Thing>,
    pub customer_phone: String,
    pub points: i64,
    pub tier: Tier,
}

impl RewardAccount {
    /// Fresh account: zero points, Bronze.
    pub fn new(customer_phone: String) -> Self {
        Self {
            id: None,
            customer_phone,
            points: 0,
            tier: Tier::Bronze,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_thresholds() {
        assert_eq!(Tier::for_points(0), Tier::Bronze);
        assert_eq!(Tier::for_points(199), Tier::Bronze);
        assert_eq!(Tier::for_points(200), Tier::Silver);
        assert_eq!(Tier::for_points(499), Tier::Silver);
        assert_eq!(Tier::for_points(500), Tier::Gold);
        assert_eq!(Tier::for_points(10_000), Tier::Gold);
    }
}
