//! Splitting an energy budget across the four stats.
//!
//! Each stat receives `floor(total * pct / sum(pct))` energy, which buys
//! `floor(energy / energy_per_action)` actions. Energy that does not make
//! up a whole action is dropped. Every stat's session starts from the same
//! happiness; the four sessions are independent of each other.

use gym_core::error::check_non_negative;
use gym_core::{Gym, PerkBonuses, StatMap};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::TrainResult;
use crate::gain::GainContext;
use crate::simulate::{GainMode, run_session};

/// Inputs for an energy split.
#[derive(Debug, Clone)]
pub struct AllocationRequest<'a> {
    /// Energy to distribute.
    pub total_energy: u32,
    /// Relative share per stat. Need not sum to 100.
    pub percentages: StatMap<f64>,
    /// Gym all training happens at.
    pub gym: &'a Gym,
    /// Current value of every stat.
    pub base_stats: StatMap<f64>,
    /// Happiness each stat's session starts with.
    pub happiness: u32,
    /// Resolved bonuses.
    pub bonuses: PerkBonuses,
    /// Static or dynamic gains.
    pub mode: GainMode,
}

/// Result of an energy split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Energy assigned to each stat.
    pub energy: StatMap<u32>,
    /// Whole actions each stat's energy pays for.
    pub actions: StatMap<u32>,
    /// Gain per stat.
    pub gains: StatMap<f64>,
    /// Sum of all per-stat gains.
    pub total_gain: f64,
    /// Energy not spent on any action.
    pub unused_energy: u32,
}

/// Split `request.total_energy` by percentage and compute per-stat gains.
///
/// All-zero percentages yield an all-zero allocation.
pub fn allocate(request: &AllocationRequest<'_>, config: &EngineConfig) -> TrainResult<Allocation> {
    for (stat, pct) in request.percentages.iter() {
        check_non_negative(&format!("allocation percent ({stat})"), *pct)?;
    }
    for (stat, value) in request.base_stats.iter() {
        check_non_negative(&format!("stat ({stat})"), *value)?;
    }
    request.gym.validate()?;
    request.bonuses.validate()?;

    let total_percent = request.percentages.sum();
    if total_percent <= 0.0 {
        tracing::debug!(total_energy = request.total_energy, "no allocation percentages set");
        return Ok(Allocation {
            unused_energy: request.total_energy,
            ..Allocation::default()
        });
    }

    let total_energy = f64::from(request.total_energy);
    let energy = request
        .percentages
        .map(|_, pct| (total_energy * pct / total_percent).floor() as u32);
    let actions = energy.map(|_, e| request.gym.actions_for(*e));

    let gains = actions.map(|stat, count| {
        let ctx = GainContext {
            stat,
            gym: request.gym,
            bonuses: &request.bonuses,
            config,
        };
        run_session(
            &ctx,
            request.base_stats[stat],
            request.happiness,
            *count,
            request.mode,
        )
        .total_gain
    });

    let spent: u32 = actions
        .iter()
        .map(|(_, count)| count * request.gym.energy_per_action)
        .sum();
    let total_gain = gains.sum();

    tracing::debug!(
        gym = %request.gym.name,
        total_energy = request.total_energy,
        spent,
        total_gain,
        mode = %request.mode,
        "allocated energy"
    );

    Ok(Allocation {
        energy,
        actions,
        gains,
        total_gain,
        unused_energy: request.total_energy.saturating_sub(spent),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gym_core::{GymError, GymRegistry, Stat};

    use crate::error::TrainError;

    fn request(gym: &Gym, total_energy: u32, percentages: StatMap<f64>) -> AllocationRequest<'_> {
        AllocationRequest {
            total_energy,
            percentages,
            gym,
            base_stats: StatMap::splat(1_000_000.0),
            happiness: 5000,
            bonuses: PerkBonuses::none(),
            mode: GainMode::Dynamic,
        }
    }

    fn georges() -> Gym {
        GymRegistry::builtin().lookup("George's").unwrap().clone()
    }

    #[test]
    fn zero_percentages_allocate_nothing() {
        let gym = georges();
        let alloc = allocate(&request(&gym, 1000, StatMap::splat(0.0)), &EngineConfig::default())
            .unwrap();
        assert_eq!(alloc.total_gain, 0.0);
        assert_eq!(alloc.energy, StatMap::splat(0));
        assert_eq!(alloc.actions, StatMap::splat(0));
        assert_eq!(alloc.unused_energy, 1000);
    }

    #[test]
    fn even_split() {
        let gym = georges();
        let alloc = allocate(&request(&gym, 1000, StatMap::splat(25.0)), &EngineConfig::default())
            .unwrap();
        assert_eq!(alloc.energy, StatMap::splat(250));
        assert_eq!(alloc.actions, StatMap::splat(25));
        assert_eq!(alloc.unused_energy, 0);
        assert!(alloc.gains.iter().all(|(_, g)| *g > 0.0));
        assert!((alloc.total_gain - alloc.gains.sum()).abs() < 1e-9);
    }

    #[test]
    fn leftover_energy_is_discarded() {
        let gym = georges();
        let alloc = allocate(
            &request(&gym, 100, StatMap::new(1.0, 1.0, 1.0, 0.0)),
            &EngineConfig::default(),
        )
        .unwrap();
        assert_eq!(alloc.energy, StatMap::new(33, 33, 33, 0));
        assert_eq!(alloc.actions, StatMap::new(3, 3, 3, 0));
        assert_eq!(alloc.gains.dexterity, 0.0);
        assert_eq!(alloc.unused_energy, 10);
    }

    #[test]
    fn percentages_are_relative() {
        let gym = georges();
        let config = EngineConfig::default();
        let a = allocate(&request(&gym, 400, StatMap::new(1.0, 1.0, 2.0, 0.0)), &config).unwrap();
        let b = allocate(&request(&gym, 400, StatMap::new(25.0, 25.0, 50.0, 0.0)), &config).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.energy, StatMap::new(100, 100, 200, 0));
    }

    #[test]
    fn per_stat_gain_matches_standalone_session() {
        let gym = georges();
        let config = EngineConfig::default();
        let alloc = allocate(&request(&gym, 400, StatMap::new(0.0, 0.0, 100.0, 0.0)), &config)
            .unwrap();
        let ctx = GainContext {
            stat: Stat::Speed,
            gym: &gym,
            bonuses: &PerkBonuses::none(),
            config: &config,
        };
        let alone = run_session(&ctx, 1_000_000.0, 5000, 40, GainMode::Dynamic);
        assert_eq!(alloc.gains.speed, alone.total_gain);
        assert_eq!(alloc.total_gain, alone.total_gain);
    }

    #[test]
    fn static_mode_at_least_dynamic() {
        let gym = georges();
        let config = EngineConfig::default();
        let dynamic = allocate(&request(&gym, 1000, StatMap::splat(25.0)), &config).unwrap();
        let mut static_request = request(&gym, 1000, StatMap::splat(25.0));
        static_request.mode = GainMode::Static;
        let fixed = allocate(&static_request, &config).unwrap();
        assert!(fixed.total_gain >= dynamic.total_gain);
    }

    #[test]
    fn untrainable_stat_keeps_energy_but_gains_nothing() {
        let gym = GymRegistry::builtin().lookup("Frontline Fitness").unwrap().clone();
        let alloc = allocate(&request(&gym, 100, StatMap::splat(1.0)), &EngineConfig::default())
            .unwrap();
        assert_eq!(alloc.energy, StatMap::splat(25));
        assert_eq!(alloc.actions, StatMap::splat(1));
        assert_eq!(alloc.gains.defense, 0.0);
        assert_eq!(alloc.gains.dexterity, 0.0);
        assert!(alloc.gains.strength > 0.0);
    }

    #[test]
    fn negative_percentage_rejected() {
        let gym = georges();
        let result = allocate(
            &request(&gym, 100, StatMap::new(10.0, -1.0, 0.0, 0.0)),
            &EngineConfig::default(),
        );
        assert!(matches!(
            result,
            Err(TrainError::Gym(GymError::InvalidInput { .. }))
        ));
    }
}
