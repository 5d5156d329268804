//! Decimal rounding used at fixed points in the formulas.

/// Round `value` to `places` decimal places, halves away from zero.
pub fn round_to_decimal_places(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_four_places() {
        assert_eq!(round_to_decimal_places(3.063_39, 4), 3.0634);
        assert_eq!(round_to_decimal_places(1.214_438, 4), 1.2144);
        assert_eq!(round_to_decimal_places(0.003_992, 4), 0.004);
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(round_to_decimal_places(2.5, 0), 3.0);
        assert_eq!(round_to_decimal_places(0.125, 2), 0.13);
    }

    #[test]
    fn zero_places_is_plain_round() {
        assert_eq!(round_to_decimal_places(25.4, 0), 25.0);
    }
}
