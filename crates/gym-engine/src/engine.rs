//! The caller-facing entry point of the engine.

use gym_core::{Gym, TrainingInput};

use crate::allocate::{Allocation, AllocationRequest, allocate};
use crate::config::EngineConfig;
use crate::error::TrainResult;
use crate::gain::{GainContext, single_action_gain};
use crate::rank::{GymRanking, RankRequest, rank_gyms, top_gyms};
use crate::simulate::{
    ActionRecord, GainMode, SessionOutcome, multi_action_gain, simulate_with_trace,
};
use crate::stat_cap::StatCap;

/// Training calculator bound to one configuration.
///
/// Every operation is pure: inputs are validated, nothing is cached, and
/// concurrent calls share no state.
#[derive(Debug, Clone, Default)]
pub struct TrainingEngine {
    config: EngineConfig,
}

impl TrainingEngine {
    /// Create an engine, rejecting unusable configurations.
    pub fn new(config: EngineConfig) -> TrainResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Effective stat value after diminishing returns.
    pub fn effective_stat(&self, value: f64) -> f64 {
        StatCap::from_config(&self.config).apply(value)
    }

    /// Gain of a single training action.
    pub fn compute_single_action_gain(&self, input: &TrainingInput) -> TrainResult<f64> {
        input.validate()?;
        let gain = single_action_gain(input, &self.config);
        tracing::debug!(
            stat = %input.stat,
            gym = %input.gym.name,
            happiness = input.happiness,
            gain,
            "single action gain"
        );
        Ok(gain)
    }

    /// Gain of `actions` consecutive actions.
    pub fn compute_multi_action_gain(
        &self,
        input: &TrainingInput,
        actions: u32,
        mode: GainMode,
    ) -> TrainResult<SessionOutcome> {
        input.validate()?;
        let outcome = multi_action_gain(input, actions, mode, &self.config);
        tracing::debug!(
            stat = %input.stat,
            gym = %input.gym.name,
            actions,
            %mode,
            total_gain = outcome.total_gain,
            final_happiness = outcome.final_happiness,
            "multi action gain"
        );
        Ok(outcome)
    }

    /// Gain of spending the whole energy budget on `input.stat`.
    pub fn compute_budget_gain(
        &self,
        input: &TrainingInput,
        mode: GainMode,
    ) -> TrainResult<SessionOutcome> {
        self.compute_multi_action_gain(input, input.affordable_actions(), mode)
    }

    /// Dynamic session with the per-action breakdown.
    pub fn trace_session(
        &self,
        input: &TrainingInput,
        actions: u32,
    ) -> TrainResult<(SessionOutcome, Vec<ActionRecord>)> {
        input.validate()?;
        let ctx = GainContext::from_input(input, &self.config);
        Ok(simulate_with_trace(&ctx, input.base_stat_value, input.happiness, actions))
    }

    /// Split an energy budget across stats.
    pub fn compute_energy_allocation(
        &self,
        request: &AllocationRequest<'_>,
    ) -> TrainResult<Allocation> {
        allocate(request, &self.config)
    }

    /// Rank `gyms` by their best single-stat gain.
    pub fn rank_gyms(&self, gyms: &[Gym], request: &RankRequest) -> TrainResult<Vec<GymRanking>> {
        rank_gyms(gyms, request, &self.config)
    }

    /// The `n` best of `gyms`.
    pub fn top_gyms(
        &self,
        gyms: &[Gym],
        request: &RankRequest,
        n: usize,
    ) -> TrainResult<Vec<GymRanking>> {
        top_gyms(gyms, request, &self.config, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BonusStacking;
    use crate::error::TrainError;
    use gym_core::{GymError, GymRegistry, PerkBonuses, Stat, StatMap};

    fn reference_input() -> TrainingInput {
        let gym = GymRegistry::builtin().lookup("George's").unwrap().clone();
        let bonuses = PerkBonuses::none()
            .with_manual(Stat::Speed, 4.0)
            .with_steadfast(Stat::Speed, 7.0);
        TrainingInput::new(Stat::Speed, 303_304_576.0, 5100.0, 400.0, gym, bonuses).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let config = EngineConfig::default().with_stat_cap_constant(-1.0);
        assert!(matches!(TrainingEngine::new(config), Err(TrainError::InvalidConfig(_))));
    }

    #[test]
    fn single_action_reference() {
        let engine = TrainingEngine::default();
        let gain = engine.compute_single_action_gain(&reference_input()).unwrap();
        assert!((gain - 26_380.80).abs() < 0.01);
    }

    #[test]
    fn single_action_rejects_tampered_input() {
        let engine = TrainingEngine::default();
        let mut input = reference_input();
        input.base_stat_value = -5.0;
        assert!(matches!(
            engine.compute_single_action_gain(&input),
            Err(TrainError::Gym(GymError::InvalidInput { .. }))
        ));
    }

    #[test]
    fn budget_gain_uses_affordable_actions() {
        let engine = TrainingEngine::default();
        let outcome = engine
            .compute_budget_gain(&reference_input(), GainMode::Dynamic)
            .unwrap();
        assert_eq!(outcome.actions, 40);
        assert!((outcome.total_gain - 1_054_117.92).abs() < 0.01);
    }

    #[test]
    fn trace_matches_outcome() {
        let engine = TrainingEngine::default();
        let input = reference_input();
        let (outcome, trace) = engine.trace_session(&input, 40).unwrap();
        let direct = engine
            .compute_multi_action_gain(&input, 40, GainMode::Dynamic)
            .unwrap();
        assert_eq!(outcome, direct);
        assert_eq!(trace.len(), 40);
    }

    #[test]
    fn effective_stat_uses_config() {
        let engine =
            TrainingEngine::new(EngineConfig::default().with_stat_cap_threshold(1_000.0)).unwrap();
        assert!(engine.effective_stat(2_000.0) < 2_000.0);
        assert_eq!(TrainingEngine::default().effective_stat(2_000.0), 2_000.0);
    }

    #[test]
    fn stacking_policy_flows_through() {
        let additive =
            TrainingEngine::new(EngineConfig::default().with_bonus_stacking(BonusStacking::Additive))
                .unwrap();
        let a = additive.compute_single_action_gain(&reference_input()).unwrap();
        let m = TrainingEngine::default()
            .compute_single_action_gain(&reference_input())
            .unwrap();
        assert!(a < m);
    }

    #[test]
    fn allocation_and_ranking_through_engine() {
        let engine = TrainingEngine::default();
        let registry = GymRegistry::builtin();
        let gym = registry.lookup("George's").unwrap();

        let alloc = engine
            .compute_energy_allocation(&AllocationRequest {
                total_energy: 1000,
                percentages: StatMap::splat(0.0),
                gym,
                base_stats: StatMap::splat(1e6),
                happiness: 5000,
                bonuses: PerkBonuses::none(),
                mode: GainMode::Static,
            })
            .unwrap();
        assert_eq!(alloc.total_gain, 0.0);

        let request = RankRequest {
            total_energy: 150,
            base_stats: StatMap::splat(1e6),
            happiness: 5000,
            bonuses: PerkBonuses::none(),
            mode: GainMode::Dynamic,
        };
        let top = engine.top_gyms(registry.gyms(), &request, 1).unwrap();
        let all = engine.rank_gyms(registry.gyms(), &request).unwrap();
        assert_eq!(top[0], all[0]);
    }
}
