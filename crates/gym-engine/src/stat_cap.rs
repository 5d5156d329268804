//! Diminishing returns for very large stat values.
//!
//! Below the threshold a stat counts at face value. Above it, the excess
//! is divided by `K * ln(value)`, so the effective stat keeps growing but
//! ever more slowly and never drops back below the threshold.

use crate::config::{DEFAULT_STAT_CAP_CONSTANT, DEFAULT_STAT_CAP_THRESHOLD, EngineConfig};

/// The stat-cap curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatCap {
    /// Values at or below this count in full.
    pub threshold: f64,
    /// Divisor constant `K`.
    pub constant: f64,
}

impl Default for StatCap {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_STAT_CAP_THRESHOLD,
            constant: DEFAULT_STAT_CAP_CONSTANT,
        }
    }
}

impl StatCap {
    /// The curve described by `config`.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            threshold: config.stat_cap_threshold,
            constant: config.stat_cap_constant,
        }
    }

    /// Effective value of a stat. The curve is the same for all four stats.
    pub fn apply(&self, value: f64) -> f64 {
        if value <= self.threshold {
            return value;
        }
        (value - self.threshold) / (self.constant * value.ln()) + self.threshold
    }
}
