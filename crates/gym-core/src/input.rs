//! Validated training inputs and the plain profile record they come from.

use serde::{Deserialize, Serialize};

use crate::bonus::PerkBonuses;
use crate::error::{GymError, GymResult, check_count, check_non_negative};
use crate::gym::Gym;
use crate::registry::GymRegistry;
use crate::stat::{Stat, StatMap};

/// Everything needed to compute the gain of training one stat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingInput {
    /// The stat being trained.
    pub stat: Stat,
    /// Current value of that stat, before any diminishing returns.
    pub base_stat_value: f64,
    /// Current happiness.
    pub happiness: u32,
    /// Energy available for the session.
    pub energy_budget: u32,
    /// Where the training happens.
    pub gym: Gym,
    /// Resolved bonus percentages.
    pub bonuses: PerkBonuses,
}

impl TrainingInput {
    /// Build an input from raw upstream numbers.
    ///
    /// Negative or non-finite numbers are rejected with
    /// [`GymError::InvalidInput`]; happiness and energy are truncated to
    /// whole numbers.
    pub fn new(
        stat: Stat,
        base_stat_value: f64,
        happiness: f64,
        energy_budget: f64,
        gym: Gym,
        bonuses: PerkBonuses,
    ) -> GymResult<Self> {
        let input = Self {
            stat,
            base_stat_value: check_non_negative("stat", base_stat_value)?,
            happiness: check_count("happiness", happiness)?,
            energy_budget: check_count("energy", energy_budget)?,
            gym,
            bonuses,
        };
        input.validate()?;
        Ok(input)
    }

    /// Re-check an input that was constructed field by field.
    pub fn validate(&self) -> GymResult<()> {
        check_non_negative("stat", self.base_stat_value)?;
        self.gym.validate()?;
        self.bonuses.validate()
    }

    /// Copy of this input with a different happiness.
    pub fn with_happiness(&self, happiness: u32) -> Self {
        Self {
            happiness,
            ..self.clone()
        }
    }

    /// Copy of this input with a different base stat value.
    pub fn with_base_stat(&self, base_stat_value: f64) -> Self {
        Self {
            base_stat_value,
            ..self.clone()
        }
    }

    /// Whole actions the energy budget pays for at this gym.
    pub fn affordable_actions(&self) -> u32 {
        self.gym.actions_for(self.energy_budget)
    }
}

/// The flat record an outside store loads and saves.
///
/// Numbers are kept as raw `f64` the way upstream sources deliver them and
/// are only validated when turned into a [`TrainingInput`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingProfile {
    /// Current value of every stat.
    pub stats: StatMap<f64>,
    /// Current happiness.
    pub happiness: f64,
    /// Current energy.
    pub energy: f64,
    /// Resolved bonus percentages.
    pub bonuses: PerkBonuses,
    /// Name of the selected gym, if any.
    pub gym: Option<String>,
}

impl TrainingProfile {
    /// Parse a profile from JSON.
    pub fn from_json(json: &str) -> GymResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the profile to pretty JSON.
    pub fn to_json(&self) -> GymResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolve the selected gym against `registry`.
    pub fn selected_gym<'r>(&self, registry: &'r GymRegistry) -> GymResult<&'r Gym> {
        let name = self
            .gym
            .as_deref()
            .ok_or_else(|| GymError::invalid_input("gym", "is not set"))?;
        registry.lookup(name)
    }

    /// Validated whole-number happiness.
    pub fn happiness(&self) -> GymResult<u32> {
        check_count("happiness", self.happiness)
    }

    /// Validated whole-number energy.
    pub fn energy(&self) -> GymResult<u32> {
        check_count("energy", self.energy)
    }

    /// Validated stat values.
    pub fn base_stats(&self) -> GymResult<StatMap<f64>> {
        for (stat, value) in self.stats.iter() {
            check_non_negative(&format!("stat ({stat})"), *value)?;
        }
        Ok(self.stats)
    }

    /// Build the input for training `stat` at the profile's gym.
    pub fn training_input(&self, stat: Stat, registry: &GymRegistry) -> GymResult<TrainingInput> {
        let gym = self.selected_gym(registry)?.clone();
        TrainingInput::new(
            stat,
            self.stats[stat],
            self.happiness,
            self.energy,
            gym,
            self.bonuses,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn georges() -> Gym {
        GymRegistry::builtin().lookup("George's").unwrap().clone()
    }

    #[test]
    fn new_validates_counts() {
        let input = TrainingInput::new(
            Stat::Speed,
            1000.5,
            5100.0,
            150.0,
            georges(),
            PerkBonuses::none(),
        )
        .unwrap();
        assert_eq!(input.base_stat_value, 1000.5);
        assert_eq!(input.happiness, 5100);
        assert_eq!(input.energy_budget, 150);
        assert_eq!(input.affordable_actions(), 15);
    }

    #[test]
    fn new_rejects_fractional_counts() {
        for (happy, energy) in [(5100.7, 150.0), (5100.0, 150.5)] {
            let result =
                TrainingInput::new(Stat::Speed, 1000.0, happy, energy, georges(), PerkBonuses::none());
            assert!(matches!(result, Err(GymError::InvalidInput { .. })));
        }
    }

    #[test]
    fn new_rejects_negative_numbers() {
        for (stat, happy, energy) in [(-1.0, 0.0, 0.0), (0.0, -5.0, 0.0), (0.0, 0.0, -10.0)] {
            let result =
                TrainingInput::new(Stat::Strength, stat, happy, energy, georges(), PerkBonuses::none());
            assert!(matches!(result, Err(GymError::InvalidInput { .. })));
        }
    }

    #[test]
    fn new_rejects_nan_stat() {
        let result = TrainingInput::new(
            Stat::Strength,
            f64::NAN,
            0.0,
            0.0,
            georges(),
            PerkBonuses::none(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn with_helpers_copy() {
        let input =
            TrainingInput::new(Stat::Speed, 10.0, 100.0, 10.0, georges(), PerkBonuses::none())
                .unwrap();
        let tired = input.with_happiness(0);
        let stronger = input.with_base_stat(20.0);
        assert_eq!(tired.happiness, 0);
        assert_eq!(tired.base_stat_value, 10.0);
        assert_eq!(stronger.base_stat_value, 20.0);
        assert_eq!(stronger.happiness, 100);
    }

    #[test]
    fn profile_to_training_input() {
        let profile = TrainingProfile::from_json(
            r#"{
                "stats": {"speed": 303304576},
                "happiness": 5100,
                "energy": 400,
                "bonuses": {"manual": {"spd": 4}, "steadfast": {"spd": 7}},
                "gym": "George's"
            }"#,
        )
        .unwrap();
        let registry = GymRegistry::builtin();
        let input = profile.training_input(Stat::Speed, &registry).unwrap();
        assert_eq!(input.base_stat_value, 303_304_576.0);
        assert_eq!(input.happiness, 5100);
        assert_eq!(input.gym.name, "George's");
        assert_eq!(input.bonuses.steadfast_for(Stat::Speed), 7.0);
    }

    #[test]
    fn profile_without_gym_fails() {
        let profile = TrainingProfile::default();
        let err = profile
            .training_input(Stat::Strength, &GymRegistry::builtin())
            .unwrap_err();
        assert!(err.to_string().contains("gym is not set"));
    }

    #[test]
    fn profile_with_unknown_gym_fails() {
        let profile = TrainingProfile {
            gym: Some("Moon Base".to_string()),
            ..TrainingProfile::default()
        };
        assert!(matches!(
            profile.selected_gym(&GymRegistry::builtin()),
            Err(GymError::GymNotFound(_))
        ));
    }

    #[test]
    fn profile_json_roundtrip() {
        let profile = TrainingProfile {
            stats: StatMap::new(1.0, 2.0, 3.0, 4.0),
            happiness: 250.0,
            energy: 100.0,
            bonuses: PerkBonuses::none().with_manual(Stat::Strength, 2.0),
            gym: Some("Core".to_string()),
        };
        let json = profile.to_json().unwrap();
        assert_eq!(TrainingProfile::from_json(&json).unwrap(), profile);
    }
}
