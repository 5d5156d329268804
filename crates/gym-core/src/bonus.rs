//! Resolved perk bonus percentages.

use serde::{Deserialize, Serialize};

use crate::error::{GymResult, check_non_negative};
use crate::stat::{Stat, StatMap};

/// Bonus percentages per stat, already resolved by whatever reads perks.
///
/// `manual` aggregates every non-steadfast bonus (education, property,
/// company, book, ...) into one number per stat. `steadfast` holds the
/// faction steadfast bonus. A missing entry counts as `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerkBonuses {
    /// Manual / perk bonus percentage per stat.
    pub manual: StatMap<f64>,
    /// Faction steadfast bonus percentage per stat.
    pub steadfast: StatMap<f64>,
}

impl PerkBonuses {
    /// No bonuses at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the manual bonus percentage for `stat`.
    pub fn with_manual(mut self, stat: Stat, percent: f64) -> Self {
        self.manual[stat] = percent;
        self
    }

    /// Set the steadfast bonus percentage for `stat`.
    pub fn with_steadfast(mut self, stat: Stat, percent: f64) -> Self {
        self.steadfast[stat] = percent;
        self
    }

    /// Manual bonus percentage for `stat`.
    pub fn manual_for(&self, stat: Stat) -> f64 {
        self.manual[stat]
    }

    /// Steadfast bonus percentage for `stat`.
    pub fn steadfast_for(&self, stat: Stat) -> f64 {
        self.steadfast[stat]
    }

    /// Reject negative or non-finite percentages.
    pub fn validate(&self) -> GymResult<()> {
        for (stat, pct) in self.manual.iter() {
            check_non_negative(&format!("manual bonus ({stat})"), *pct)?;
        }
        for (stat, pct) in self.steadfast.iter() {
            check_non_negative(&format!("steadfast bonus ({stat})"), *pct)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_single_stat() {
        let bonuses = PerkBonuses::none()
            .with_manual(Stat::Speed, 4.0)
            .with_steadfast(Stat::Speed, 7.0);
        assert_eq!(bonuses.manual_for(Stat::Speed), 4.0);
        assert_eq!(bonuses.steadfast_for(Stat::Speed), 7.0);
        assert_eq!(bonuses.manual_for(Stat::Strength), 0.0);
    }

    #[test]
    fn validate_rejects_negative_percent() {
        let bonuses = PerkBonuses::none().with_steadfast(Stat::Defense, -2.0);
        let err = bonuses.validate().unwrap_err();
        assert!(err.to_string().contains("steadfast bonus (defense)"));
    }

    #[test]
    fn missing_categories_default_to_zero() {
        let bonuses: PerkBonuses = serde_json::from_str(r#"{"manual": {"spd": 4}}"#).unwrap();
        assert_eq!(bonuses.manual_for(Stat::Speed), 4.0);
        assert_eq!(bonuses.steadfast, StatMap::splat(0.0));
    }
}
