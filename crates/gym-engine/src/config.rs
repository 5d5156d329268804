//! Tunable constants and policies for the training engine.

use serde::{Deserialize, Serialize};

use crate::error::{TrainError, TrainResult};

/// Stat value above which diminishing returns apply.
pub const DEFAULT_STAT_CAP_THRESHOLD: f64 = 50_000_000.0;

/// Divisor constant `K` of the stat-cap curve.
///
/// Calibrated so that a 303,304,576 speed stat at 5,100 happiness in
/// George's with +4% manual and +7% steadfast gains 26,380.80 per action.
pub const DEFAULT_STAT_CAP_CONSTANT: f64 = 3.78283;

/// Average happiness depletion factor per action.
pub const DEFAULT_HAPPY_LOSS_FACTOR: f64 = 5.0;

/// How the manual and steadfast percentages combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BonusStacking {
    /// `(1 + manual/100) * (1 + steadfast/100)`.
    #[default]
    Multiplicative,
    /// `1 + (manual + steadfast)/100`.
    Additive,
}

/// Whether gains feed back into the stat during a dynamic session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatProgression {
    /// Every action uses the starting stat value.
    #[default]
    Fixed,
    /// Each action trains from the stat value left by the previous one.
    Compounding,
}

/// Configuration for a [`TrainingEngine`](crate::TrainingEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Stat value above which diminishing returns apply.
    pub stat_cap_threshold: f64,
    /// Divisor constant `K` of the stat-cap curve.
    pub stat_cap_constant: f64,
    /// How bonus categories combine.
    pub bonus_stacking: BonusStacking,
    /// Happiness lost per action is `round(0.1 * energy * factor)`.
    pub happy_loss_factor: f64,
    /// Whether gains compound within one dynamic session.
    pub stat_progression: StatProgression,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            stat_cap_threshold: DEFAULT_STAT_CAP_THRESHOLD,
            stat_cap_constant: DEFAULT_STAT_CAP_CONSTANT,
            bonus_stacking: BonusStacking::default(),
            happy_loss_factor: DEFAULT_HAPPY_LOSS_FACTOR,
            stat_progression: StatProgression::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a (possibly partial) configuration from JSON.
    pub fn from_json(json: &str) -> TrainResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| TrainError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the stat-cap threshold.
    pub fn with_stat_cap_threshold(mut self, threshold: f64) -> Self {
        self.stat_cap_threshold = threshold;
        self
    }

    /// Set the stat-cap constant `K`.
    pub fn with_stat_cap_constant(mut self, constant: f64) -> Self {
        self.stat_cap_constant = constant;
        self
    }

    /// Set the bonus stacking policy.
    pub fn with_bonus_stacking(mut self, stacking: BonusStacking) -> Self {
        self.bonus_stacking = stacking;
        self
    }

    /// Set the happiness depletion factor.
    pub fn with_happy_loss_factor(mut self, factor: f64) -> Self {
        self.happy_loss_factor = factor;
        self
    }

    /// Set the stat progression policy.
    pub fn with_stat_progression(mut self, progression: StatProgression) -> Self {
        self.stat_progression = progression;
        self
    }

    /// Reject constants the formulas cannot work with.
    pub fn validate(&self) -> TrainResult<()> {
        if !self.stat_cap_threshold.is_finite() || self.stat_cap_threshold <= 1.0 {
            return Err(TrainError::InvalidConfig(format!(
                "stat cap threshold must be a finite number above 1, got {}",
                self.stat_cap_threshold
            )));
        }
        if !self.stat_cap_constant.is_finite() || self.stat_cap_constant <= 0.0 {
            return Err(TrainError::InvalidConfig(format!(
                "stat cap constant must be positive, got {}",
                self.stat_cap_constant
            )));
        }
        if self.stat_cap_constant * self.stat_cap_threshold.ln() < 1.0 {
            return Err(TrainError::InvalidConfig(format!(
                "stat cap constant {} times ln(threshold {}) must be at least 1",
                self.stat_cap_constant, self.stat_cap_threshold
            )));
        }
        if !self.happy_loss_factor.is_finite() || self.happy_loss_factor < 0.0 {
            return Err(TrainError::InvalidConfig(format!(
                "happy loss factor must not be negative, got {}",
                self.happy_loss_factor
            )));
        }
        Ok(())
    }
}
