//! Ranking gyms by the best gain they offer.
//!
//! Each gym is scored as if the whole energy budget went into a single
//! stat: its total is the best single-stat gain, not the sum over stats.
//! Ties keep registry order.

use gym_core::error::check_non_negative;
use gym_core::{Gym, PerkBonuses, Stat, StatMap};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::TrainResult;
use crate::gain::GainContext;
use crate::simulate::{GainMode, run_session};

/// Inputs for ranking gyms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankRequest {
    /// Energy to spend at each gym.
    pub total_energy: u32,
    /// Current value of every stat.
    pub base_stats: StatMap<f64>,
    /// Happiness at the start of each session.
    pub happiness: u32,
    /// Resolved bonuses.
    pub bonuses: PerkBonuses,
    /// Static or dynamic gains.
    pub mode: GainMode,
}

/// One gym's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GymRanking {
    /// Gym name.
    pub gym_name: String,
    /// Energy per action at this gym.
    pub energy_per_action: u32,
    /// Actions the energy budget pays for.
    pub actions: u32,
    /// Gain per stat, `None` where the gym cannot train the stat.
    pub gains: StatMap<Option<f64>>,
    /// The stat with the highest gain, if any stat is trainable.
    pub best_stat: Option<Stat>,
    /// Highest single-stat gain.
    pub total: f64,
}

/// Score every gym and order them by descending total.
pub fn rank_gyms(
    gyms: &[Gym],
    request: &RankRequest,
    config: &EngineConfig,
) -> TrainResult<Vec<GymRanking>> {
    for (stat, value) in request.base_stats.iter() {
        check_non_negative(&format!("stat ({stat})"), *value)?;
    }
    request.bonuses.validate()?;
    for gym in gyms {
        gym.validate()?;
    }

    let mut rankings = evaluate_all(gyms, request, config);
    rankings.sort_by(|a, b| b.total.total_cmp(&a.total));

    tracing::debug!(
        gyms = rankings.len(),
        total_energy = request.total_energy,
        mode = %request.mode,
        best = rankings.first().map(|r| r.gym_name.as_str()).unwrap_or("-"),
        "ranked gyms"
    );
    Ok(rankings)
}

/// The `n` best gyms.
pub fn top_gyms(
    gyms: &[Gym],
    request: &RankRequest,
    config: &EngineConfig,
    n: usize,
) -> TrainResult<Vec<GymRanking>> {
    let mut rankings = rank_gyms(gyms, request, config)?;
    rankings.truncate(n);
    Ok(rankings)
}

#[cfg(feature = "parallel")]
fn evaluate_all(gyms: &[Gym], request: &RankRequest, config: &EngineConfig) -> Vec<GymRanking> {
    use rayon::prelude::*;

    gyms.par_iter()
        .map(|gym| evaluate_gym(gym, request, config))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn evaluate_all(gyms: &[Gym], request: &RankRequest, config: &EngineConfig) -> Vec<GymRanking> {
    gyms.iter()
        .map(|gym| evaluate_gym(gym, request, config))
        .collect()
}

fn evaluate_gym(gym: &Gym, request: &RankRequest, config: &EngineConfig) -> GymRanking {
    let actions = gym.actions_for(request.total_energy);

    let gains = StatMap::from_fn(|stat| {
        if !gym.can_train(stat) {
            return None;
        }
        let ctx = GainContext {
            stat,
            gym,
            bonuses: &request.bonuses,
            config,
        };
        let outcome = run_session(
            &ctx,
            request.base_stats[stat],
            request.happiness,
            actions,
            request.mode,
        );
        Some(outcome.total_gain)
    });

    let mut best: Option<(Stat, f64)> = None;
    for (stat, gain) in gains.iter() {
        let Some(gain) = *gain else { continue };
        if best.is_none_or(|(_, current)| gain > current) {
            best = Some((stat, gain));
        }
    }

    GymRanking {
        gym_name: gym.name.clone(),
        energy_per_action: gym.energy_per_action,
        actions,
        gains,
        best_stat: best.map(|(stat, _)| stat),
        total: best.map_or(0.0, |(_, gain)| gain),
    }
}
