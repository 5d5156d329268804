//! Gyms: per-stat training efficiency and energy cost.

use serde::{Deserialize, Serialize};

use crate::error::{GymError, GymResult};
use crate::stat::{Stat, StatMap};

/// A gym where stats are trained.
///
/// `dots` is the per-stat efficiency rating. A value of `0` means the gym
/// cannot train that stat at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gym {
    /// Display name, unique within a registry.
    pub name: String,
    /// Energy consumed by a single training action.
    pub energy_per_action: u32,
    /// Training efficiency per stat.
    pub dots: StatMap<f64>,
}

impl Gym {
    /// Create a gym record.
    pub fn new(name: impl Into<String>, energy_per_action: u32, dots: StatMap<f64>) -> Self {
        Self {
            name: name.into(),
            energy_per_action,
            dots,
        }
    }

    /// Efficiency rating for `stat`.
    pub fn dots_for(&self, stat: Stat) -> f64 {
        self.dots[stat]
    }

    /// Whether this gym can train `stat`.
    pub fn can_train(&self, stat: Stat) -> bool {
        self.dots[stat] > 0.0
    }

    /// The stats this gym can train, in canonical order.
    pub fn trainable_stats(&self) -> impl Iterator<Item = Stat> + '_ {
        Stat::ALL.into_iter().filter(|&stat| self.can_train(stat))
    }

    /// Number of whole actions affordable with `energy`.
    pub fn actions_for(&self, energy: u32) -> u32 {
        energy / self.energy_per_action.max(1)
    }

    /// Check that the record is usable by the engine.
    pub fn validate(&self) -> GymResult<()> {
        if self.name.trim().is_empty() {
            return Err(GymError::InvalidGym {
                name: self.name.clone(),
                reason: "name is empty".to_string(),
            });
        }
        if self.energy_per_action == 0 {
            return Err(GymError::InvalidGym {
                name: self.name.clone(),
                reason: "energy per action must be positive".to_string(),
            });
        }
        for (stat, dots) in self.dots.iter() {
            if !dots.is_finite() || *dots < 0.0 {
                return Err(GymError::InvalidGym {
                    name: self.name.clone(),
                    reason: format!("{stat} dots must be a non-negative number, got {dots}"),
                });
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Gym {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}E)", self.name, self.energy_per_action)
    }
}
