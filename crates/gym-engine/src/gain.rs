//! Gain from a single training action.

use gym_core::{Gym, PerkBonuses, Stat, TrainingInput};

use crate::bonus::combined_factor;
use crate::config::EngineConfig;
use crate::happy::happy_multiplier;
use crate::stat_cap::StatCap;

/// Overall divisor of the gain formula.
const GAIN_DIVISOR: f64 = 200_000.0;

/// Coefficient and exponent of the raw happiness term.
const HAPPY_TERM_COEFFICIENT: f64 = 8.0;
const HAPPY_TERM_EXPONENT: f64 = 1.05;

/// Happiness at which the `A` term vanishes.
const HAPPY_CEILING: f64 = 99_999.0;

/// The parts of a training input that stay fixed across a session.
#[derive(Debug, Clone, Copy)]
pub struct GainContext<'a> {
    /// Stat being trained.
    pub stat: Stat,
    /// Gym trained at.
    pub gym: &'a Gym,
    /// Resolved bonuses.
    pub bonuses: &'a PerkBonuses,
    /// Formula constants and policies.
    pub config: &'a EngineConfig,
}

impl<'a> GainContext<'a> {
    /// Context for training `input.stat` at `input.gym`.
    pub fn from_input(input: &'a TrainingInput, config: &'a EngineConfig) -> Self {
        Self {
            stat: input.stat,
            gym: &input.gym,
            bonuses: &input.bonuses,
            config,
        }
    }

    /// Gain of one action at the given stat value and happiness.
    ///
    /// Zero when the gym cannot train the stat. Never negative.
    pub fn gain(&self, base_stat_value: f64, happiness: u32) -> f64 {
        let dots = self.gym.dots_for(self.stat);
        if dots <= 0.0 {
            return 0.0;
        }

        let effective = StatCap::from_config(self.config).apply(base_stat_value);
        let happy = f64::from(happiness);
        let (a, b) = self.stat.constants();

        let core = effective * happy_multiplier(happiness)
            + HAPPY_TERM_COEFFICIENT * happy.powf(HAPPY_TERM_EXPONENT)
            + a * (1.0 - (happy / HAPPY_CEILING).powi(2))
            + b;
        let gym_mult = combined_factor(self.stat, self.bonuses, self.config.bonus_stacking);

        let gain = f64::from(self.gym.energy_per_action) * dots * gym_mult * core / GAIN_DIVISOR;
        gain.max(0.0)
    }
}

/// Gain of a single training action for `input`.
pub fn single_action_gain(input: &TrainingInput, config: &EngineConfig) -> f64 {
    GainContext::from_input(input, config).gain(input.base_stat_value, input.happiness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BonusStacking;
    use gym_core::{GymRegistry, StatMap};
    use proptest::prelude::*;

    fn reference_input() -> TrainingInput {
        let gym = GymRegistry::builtin().lookup("George's").unwrap().clone();
        let bonuses = PerkBonuses::none()
            .with_manual(Stat::Speed, 4.0)
            .with_steadfast(Stat::Speed, 7.0);
        TrainingInput::new(Stat::Speed, 303_304_576.0, 5100.0, 400.0, gym, bonuses).unwrap()
    }

    fn plain_input(stat: Stat, base: f64, happiness: u32, dots: f64) -> TrainingInput {
        TrainingInput {
            stat,
            base_stat_value: base,
            happiness,
            energy_budget: 100,
            gym: Gym::new("Test", 10, StatMap::splat(dots)),
            bonuses: PerkBonuses::none(),
        }
    }

    #[test]
    fn reference_scenario() {
        let gain = single_action_gain(&reference_input(), &EngineConfig::default());
        assert!((gain - 26_380.80).abs() < 0.01, "got {gain}");
    }

    #[test]
    fn additive_stacking_is_lower() {
        let config = EngineConfig::default().with_bonus_stacking(BonusStacking::Additive);
        let additive = single_action_gain(&reference_input(), &config);
        let multiplicative = single_action_gain(&reference_input(), &EngineConfig::default());
        assert!(additive < multiplicative);
        assert!((multiplicative / additive - 1.1128 / 1.11).abs() < 1e-9);
    }

    #[test]
    fn low_stat_small_gym() {
        // 5 energy * 2.0 dots * (1000 + 1600 + 1700) / 200000
        let input = TrainingInput {
            gym: Gym::new("Premier Fitness", 5, StatMap::splat(2.0)),
            ..plain_input(Stat::Strength, 1000.0, 0, 2.0)
        };
        let gain = single_action_gain(&input, &EngineConfig::default());
        assert!((gain - 0.215).abs() < 1e-12, "got {gain}");
    }

    #[test]
    fn defense_offset_is_negative_but_gain_is_not() {
        let input = plain_input(Stat::Defense, 0.0, 0, 1.0);
        // 10 * 1.0 * (2100 - 600) / 200000
        let gain = single_action_gain(&input, &EngineConfig::default());
        assert!((gain - 0.075).abs() < 1e-12, "got {gain}");
    }

    #[test]
    fn zero_dots_gain_nothing() {
        let input = plain_input(Stat::Speed, 1_000_000.0, 5000, 0.0);
        assert_eq!(single_action_gain(&input, &EngineConfig::default()), 0.0);
    }

    proptest! {
        #[test]
        fn non_decreasing_in_stat(a in 0.0f64..1e12, b in 0.0f64..1e12, happy in 0u32..99_999) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let config = EngineConfig::default();
            let low = single_action_gain(&plain_input(Stat::Speed, lo, happy, 7.3), &config);
            let high = single_action_gain(&plain_input(Stat::Speed, hi, happy, 7.3), &config);
            prop_assert!(low <= high);
        }

        #[test]
        fn non_decreasing_in_happiness(a in 0u32..99_999, b in 0u32..99_999, stat in 0.0f64..1e10) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let config = EngineConfig::default();
            for s in Stat::ALL {
                let low = single_action_gain(&plain_input(s, stat, lo, 5.0), &config);
                let high = single_action_gain(&plain_input(s, stat, hi, 5.0), &config);
                prop_assert!(low <= high);
            }
        }

        #[test]
        fn non_decreasing_in_dots(a in 0.0f64..10.0, b in 0.0f64..10.0, stat in 0.0f64..1e10) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let config = EngineConfig::default();
            let low = single_action_gain(&plain_input(Stat::Dexterity, stat, 2500, lo), &config);
            let high = single_action_gain(&plain_input(Stat::Dexterity, stat, 2500, hi), &config);
            prop_assert!(low <= high);
            prop_assert!(low >= 0.0);
        }
    }
}
