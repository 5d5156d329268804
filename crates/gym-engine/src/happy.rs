//! Happiness to training multiplier.
//!
//! Both rounding steps are part of the game formula: the logarithm is
//! rounded to four places before scaling, and the final factor is rounded
//! to four places again.

use crate::rounding::round_to_decimal_places;

/// Decimal places kept at each rounding step.
const HAPPY_ROUNDING_PLACES: i32 = 4;

/// Happiness value that doubles the logarithm's argument.
const HAPPY_LOG_SCALE: f64 = 250.0;

/// Weight of the logarithmic component.
const HAPPY_LOG_WEIGHT: f64 = 0.07;

/// The multiplier applied to the effective stat for `happiness`.
///
/// Equals `1.0` at zero happiness and never decreases as happiness grows.
pub fn happy_multiplier(happiness: u32) -> f64 {
    let ln_component = round_to_decimal_places(
        (1.0 + f64::from(happiness) / HAPPY_LOG_SCALE).ln(),
        HAPPY_ROUNDING_PLACES,
    );
    round_to_decimal_places(1.0 + HAPPY_LOG_WEIGHT * ln_component, HAPPY_ROUNDING_PLACES)
}
