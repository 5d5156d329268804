/// Alias for `Result<T, GymError>`.
pub type GymResult<T> = Result<T, GymError>;

/// Errors that can occur when building training inputs or looking up gyms.
#[derive(Debug, thiserror::Error)]
pub enum GymError {
    /// A numeric input was negative, NaN, or infinite.
    #[error("invalid input: {field} {reason}")]
    InvalidInput {
        /// The name of the offending field.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// No gym with the given name exists in the registry.
    #[error("gym not found: \"{0}\"")]
    GymNotFound(String),

    /// Two gyms in one registry share a name.
    #[error("duplicate gym: \"{0}\"")]
    DuplicateGym(String),

    /// A gym record is malformed.
    #[error("invalid gym \"{name}\": {reason}")]
    InvalidGym {
        /// The gym's name.
        name: String,
        /// What is wrong with the record.
        reason: String,
    },

    /// A stat name could not be parsed.
    #[error("unknown stat: {0}")]
    UnknownStat(String),

    /// A JSON document could not be parsed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GymError {
    /// Shorthand for an [`GymError::InvalidInput`] error.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Reject negative and non-finite values.
///
/// Returns the value unchanged when it is a finite number `>= 0`.
pub fn check_non_negative(field: &str, value: f64) -> GymResult<f64> {
    if !value.is_finite() {
        return Err(GymError::invalid_input(field, format!("must be finite, got {value}")));
    }
    if value < 0.0 {
        return Err(GymError::invalid_input(field, format!("must not be negative, got {value}")));
    }
    Ok(value)
}

/// Validate a non-negative whole number supplied as `f64` and convert it.
///
/// Fractional values and values above `u32::MAX` are rejected.
pub fn check_count(field: &str, value: f64) -> GymResult<u32> {
    let value = check_non_negative(field, value)?;
    if value.fract() != 0.0 {
        return Err(GymError::invalid_input(field, format!("must be a whole number, got {value}")));
    }
    if value > f64::from(u32::MAX) {
        return Err(GymError::invalid_input(field, format!("is too large: {value}")));
    }
    Ok(value.trunc() as u32)
}
