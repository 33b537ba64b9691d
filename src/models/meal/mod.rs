//! Static meal catalog.
//!
//! Maps meal identifiers to a display label and the grams of protein a
//! serving contributes. The table is read-only; unknown identifiers
//! contribute nothing.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Meal {
    pub id: &'static str,
    pub label: &'static str,
    pub protein_grams: u32,
}

impl Meal {
    const fn new(id: &'static str, label: &'static str, protein_grams: u32) -> Self {
        Self {
            id,
            label,
            protein_grams,
        }
    }
}

/// Identifier of the shake, which is always listed last.
pub const PROTEIN_SHAKE: &str = "Proteinshake";

const MEALS: [Meal; 7] = [
    Meal::new("ChickenBreast", "Hähnchenbrust", 30),
    Meal::new("SalmonFilet", "Lachsfilet", 25),
    Meal::new("Quark", "Quark", 20),
    Meal::new("Beef", "Rindfleisch", 40),
    Meal::new("Tofu", "Tofu", 15),
    Meal::new("Eggs", "Eier", 12),
    Meal::new(PROTEIN_SHAKE, "Proteinshake", 54),
];

#[derive(Debug, Clone)]
pub struct MealCatalog {
    /// Display order: by label, shake last.
    meals: Vec<Meal>,
}

impl MealCatalog {
    pub fn new() -> Self {
        let mut meals: Vec<Meal> = MEALS
            .iter()
            .copied()
            .filter(|meal| meal.id != PROTEIN_SHAKE)
            .collect();
        meals.sort_by(|a, b| a.label.cmp(b.label));
        meals.extend(MEALS.iter().copied().filter(|meal| meal.id == PROTEIN_SHAKE));
        Self { meals }
    }

    pub fn get(&self, id: &str) -> Option<&Meal> {
        self.meals.iter().find(|meal| meal.id == id)
    }

    /// Grams contributed by `id`, or 0 when the id is not in the catalog.
    pub fn protein_for(&self, id: &str) -> u32 {
        self.get(id).map(|meal| meal.protein_grams).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Meal> {
        self.meals.iter()
    }
}

impl Default for MealCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shake_is_listed_last() {
        let catalog = MealCatalog::new();
        let last = catalog.iter().last().map(|meal| meal.id);
        assert_eq!(last, Some(PROTEIN_SHAKE));
    }

    #[test]
    fn remaining_meals_sorted_by_label() {
        let catalog = MealCatalog::new();
        let labels: Vec<&str> = catalog
            .iter()
            .filter(|meal| meal.id != PROTEIN_SHAKE)
            .map(|meal| meal.label)
            .collect();
        let mut sorted = labels.clone();
        sorted.sort();
        assert_eq!(labels, sorted);
        assert_eq!(labels.first(), Some(&"Eier"));
    }

    #[test]
    fn unknown_meal_contributes_nothing() {
        let catalog = MealCatalog::new();
        assert_eq!(catalog.protein_for("Pizza"), 0);
        assert_eq!(catalog.protein_for(""), 0);
        assert_eq!(catalog.protein_for(PROTEIN_SHAKE), 54);
    }
}
