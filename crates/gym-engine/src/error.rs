//! Error types for the training engine.

use gym_core::GymError;

/// Errors that can occur during training calculations.
#[derive(Debug, thiserror::Error)]
pub enum TrainError {
    /// An input, gym, or registry problem.
    #[error(transparent)]
    Gym(#[from] GymError),

    /// The engine configuration is unusable.
    #[error("invalid engine config: {0}")]
    InvalidConfig(String),
}

/// Convenience result type for training operations.
pub type TrainResult<T> = Result<T, TrainError>;
