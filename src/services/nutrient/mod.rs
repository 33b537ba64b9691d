//! Nutrient accumulator.
//!
//! Folds confirmed meals into the session's protein total. The total is
//! clamped to [`PROTEIN_CAP`]; once the cap is reached further meals are
//! ignored. Crossing [`GOAL_IMMINENT_THRESHOLD`] is reported so the
//! countdown can be armed.

use crate::models::meal::MealCatalog;
use crate::models::nutrient::{NutrientState, GOAL_IMMINENT_THRESHOLD, PROTEIN_CAP};
use crate::models::timer::RgbaColor;

/// Result of confirming one meal selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealConfirmation {
    pub state: NutrientState,
    /// Grams actually added after clamping.
    pub contribution: u32,
    pub progress_percent: f32,
    /// The total crossed the goal-imminent threshold with this meal.
    pub goal_imminent: bool,
}

/// Add the catalog value of `selection` to `current`.
///
/// Unknown ids and an empty selection contribute zero grams. A state that is
/// already at the cap is returned unchanged.
pub fn confirm_meal(
    selection: Option<&str>,
    current: NutrientState,
    catalog: &MealCatalog,
) -> MealConfirmation {
    let grams = selection.map(|id| catalog.protein_for(id)).unwrap_or(0);

    let next = if current.is_at_cap() || grams == 0 {
        current
    } else {
        NutrientState {
            accumulated_protein: current
                .accumulated_protein
                .saturating_add(grams)
                .min(PROTEIN_CAP),
            ..current
        }
    };

    let goal_imminent = current.accumulated_protein < GOAL_IMMINENT_THRESHOLD
        && next.accumulated_protein >= GOAL_IMMINENT_THRESHOLD;

    match selection {
        Some(id) if grams == 0 => log::debug!("Ignoring unknown meal id '{}'", id),
        Some(id) if next == current => {
            log::debug!("Protein already at cap, '{}' not added", id)
        }
        _ => {}
    }

    MealConfirmation {
        state: next,
        contribution: next.accumulated_protein - current.accumulated_protein,
        progress_percent: next.progress_percent(),
        goal_imminent,
    }
}

/// Ring colour for the protein indicator: yellow until the threshold is
/// reached, green afterwards.
pub fn ring_color(state: &NutrientState) -> RgbaColor {
    if state.is_goal_imminent() {
        RgbaColor::GREEN
    } else {
        RgbaColor::YELLOW
    }
}
