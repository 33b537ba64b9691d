// Property-based tests for the nutrient accumulator and countdown reconciler
// Exercises the invariants with random meals, timestamps and durations

use mypump::models::meal::MealCatalog;
use mypump::models::nutrient::{NutrientState, PROTEIN_CAP};
use mypump::models::timer::{
    ColorBand, EpochSeconds, MAX_DURATION_SECONDS, MIN_DURATION_SECONDS,
    REFERENCE_DURATION_SECONDS,
};
use mypump::services::countdown::{progress_percent, CountdownReconciler};
use mypump::services::nutrient::confirm_meal;
use proptest::prelude::*;

const T0: EpochSeconds = 1_700_000_000.0;

fn meal_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("ChickenBreast".to_string()),
        Just("SalmonFilet".to_string()),
        Just("Quark".to_string()),
        Just("Beef".to_string()),
        Just("Tofu".to_string()),
        Just("Eggs".to_string()),
        Just("Proteinshake".to_string()),
        "[a-z]{0,8}",
    ]
}

proptest! {
    /// Property: the total after a confirmation is min(cap, previous + contribution)
    #[test]
    fn prop_confirmation_clamps_to_cap(start in 0..=PROTEIN_CAP, meal in meal_id()) {
        let catalog = MealCatalog::new();
        let state = NutrientState::new(start);
        let result = confirm_meal(Some(meal.as_str()), state, &catalog);

        let expected = if start >= PROTEIN_CAP {
            start
        } else {
            (start + catalog.protein_for(&meal)).min(PROTEIN_CAP)
        };
        prop_assert_eq!(result.state.accumulated_protein, expected);
        prop_assert!(result.state.accumulated_protein <= PROTEIN_CAP);
        prop_assert!(result.progress_percent <= 100.0);
    }

    /// Property: any sequence of meals never pushes the total past the cap
    #[test]
    fn prop_meal_sequences_stay_capped(meals in proptest::collection::vec(meal_id(), 0..20)) {
        let catalog = MealCatalog::new();
        let mut state = NutrientState::default();
        let mut signals = 0;
        for meal in &meals {
            let result = confirm_meal(Some(meal.as_str()), state, &catalog);
            prop_assert!(result.state.accumulated_protein >= state.accumulated_protein);
            if result.goal_imminent {
                signals += 1;
            }
            state = result.state;
        }
        prop_assert!(state.accumulated_protein <= PROTEIN_CAP);
        // The threshold can only be crossed once
        prop_assert!(signals <= 1);
    }

    /// Property: remaining stays within [0, total] for every tick
    #[test]
    fn prop_remaining_within_total(
        total in MIN_DURATION_SECONDS..=MAX_DURATION_SECONDS,
        offsets in proptest::collection::vec(-10.0f64..4000.0, 1..30),
    ) {
        let mut reconciler = CountdownReconciler::new(total, 0.0);
        reconciler.signal_goal_imminent(T0);
        for offset in offsets {
            let now = T0 + offset;
            reconciler.tick(now);
            let remaining = reconciler.remaining(now);
            prop_assert!(remaining >= 0.0);
            prop_assert!(remaining <= total);
        }
    }

    /// Property: a resync keeps the remaining fraction of the countdown
    #[test]
    fn prop_resync_preserves_fraction(
        old_total in 20.0f64..=MAX_DURATION_SECONDS,
        new_total in MIN_DURATION_SECONDS..=MAX_DURATION_SECONDS,
        elapsed_share in 0.0f64..0.95,
    ) {
        prop_assume!((new_total - old_total).abs() > 1.0);

        let mut reconciler = CountdownReconciler::new(old_total, 0.0);
        reconciler.signal_goal_imminent(T0);
        let now = T0 + old_total * elapsed_share;
        let fraction_before = reconciler.remaining(now) / old_total;

        reconciler.duration_changed(Some(new_total), now);

        let expected = fraction_before * new_total;
        prop_assert!((reconciler.remaining(now) - expected).abs() < 1e-3);
    }

    /// Property: display percent is always within [0, 100]
    #[test]
    fn prop_percent_is_bounded(remaining in -1000.0f64..10_000.0) {
        let percent = progress_percent(remaining, REFERENCE_DURATION_SECONDS);
        prop_assert!((0.0..=100.0).contains(&percent));
    }

    /// Property: bands are ordered by remaining time
    #[test]
    fn prop_bands_are_monotonic(a in 0.0f64..400.0, b in 0.0f64..400.0) {
        let rank = |band: ColorBand| match band {
            ColorBand::Critical => 0,
            ColorBand::Warning => 1,
            ColorBand::Safe => 2,
        };
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            rank(ColorBand::classify(low, REFERENCE_DURATION_SECONDS))
                <= rank(ColorBand::classify(high, REFERENCE_DURATION_SECONDS))
        );
    }
}
