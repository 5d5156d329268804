//! Combining bonus percentages into one gym multiplier.

use gym_core::{PerkBonuses, Stat};

use crate::config::BonusStacking;

/// Multiplier from the manual and steadfast percentages for `stat`.
///
/// Under [`BonusStacking::Multiplicative`] each category that is above zero
/// contributes its own `(1 + pct/100)` factor. Under
/// [`BonusStacking::Additive`] the two percentages are summed first.
pub fn combined_factor(stat: Stat, bonuses: &PerkBonuses, stacking: BonusStacking) -> f64 {
    let manual = bonuses.manual_for(stat);
    let steadfast = bonuses.steadfast_for(stat);

    match stacking {
        BonusStacking::Multiplicative => {
            let mut factor = 1.0;
            if manual > 0.0 {
                factor *= 1.0 + manual / 100.0;
            }
            if steadfast > 0.0 {
                factor *= 1.0 + steadfast / 100.0;
            }
            factor
        }
        BonusStacking::Additive => 1.0 + (manual.max(0.0) + steadfast.max(0.0)) / 100.0,
    }
}
