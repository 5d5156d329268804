//! Training-gain calculation engine.
//!
//! Computes what training a stat at a gym yields: diminishing returns for
//! huge stats, the happiness multiplier, bonus stacking, single actions,
//! multi-action sessions with happiness decay, energy splits across stats,
//! and gym rankings. Everything is synchronous and side-effect free.

/// Energy splits across stats.
pub mod allocate;
/// Perk bonus stacking.
pub mod bonus;
/// Engine configuration.
pub mod config;
/// The training engine facade.
pub mod engine;
/// Error types for the engine.
pub mod error;
/// Single-action gain formula.
pub mod gain;
/// Happiness multiplier.
pub mod happy;
/// Gym rankings.
pub mod rank;
/// Decimal rounding helpers.
pub mod rounding;
/// Multi-action sessions with happiness decay.
pub mod simulate;
/// Diminishing returns above the stat cap.
pub mod stat_cap;

/// Re-export allocation types.
pub use allocate::{Allocation, AllocationRequest};
/// Re-export configuration types.
pub use config::{BonusStacking, EngineConfig, StatProgression};
/// Re-export the engine.
pub use engine::TrainingEngine;
/// Re-export error types.
pub use error::{TrainError, TrainResult};
/// Re-export gain types.
pub use gain::GainContext;
/// Re-export ranking types.
pub use rank::{GymRanking, RankRequest};
/// Re-export session types.
pub use simulate::{ActionRecord, GainMode, SessionOutcome};
/// Re-export stat cap types.
pub use stat_cap::StatCap;
