//! Core types for gym training: stats, gyms, bonuses, and training inputs.
//!
//! This crate holds the data model the calculation engine works on. It
//! performs no calculations beyond validation; see `gym-engine` for the
//! gain formulas.

/// Resolved perk bonus percentages.
pub mod bonus;
/// Error types used throughout the crate.
pub mod error;
/// Gym records.
pub mod gym;
/// Validated training inputs and the persisted profile record.
pub mod input;
/// The ordered set of known gyms.
pub mod registry;
/// Stats and per-stat mappings.
pub mod stat;

/// Re-export bonus types.
pub use bonus::PerkBonuses;
/// Re-export error types.
pub use error::{GymError, GymResult};
/// Re-export gym types.
pub use gym::Gym;
/// Re-export input types.
pub use input::{TrainingInput, TrainingProfile};
/// Re-export registry types.
pub use registry::GymRegistry;
/// Re-export stat types.
pub use stat::{Stat, StatMap};
