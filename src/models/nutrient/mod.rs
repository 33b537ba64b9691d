// Nutrient model
// Running protein total for the current session

use serde::{Deserialize, Serialize};

/// Daily protein goal in grams.
pub const PROTEIN_GOAL: u32 = 120;

/// Upper bound for the accumulated total. One gram short of the goal so the
/// ring never closes completely before the countdown is finished.
pub const PROTEIN_CAP: u32 = 119;

/// Reaching this total fires the goal-imminent signal.
pub const GOAL_IMMINENT_THRESHOLD: u32 = 119;

/// Value every new session starts with.
pub const STARTING_PROTEIN: u32 = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientState {
    pub accumulated_protein: u32,
    pub goal: u32,
}

impl NutrientState {
    /// Create a state seeded with `accumulated_protein`, clamped to the cap.
    pub fn new(accumulated_protein: u32) -> Self {
        Self {
            accumulated_protein: accumulated_protein.min(PROTEIN_CAP),
            goal: PROTEIN_GOAL,
        }
    }

    pub fn is_at_cap(&self) -> bool {
        self.accumulated_protein >= PROTEIN_CAP
    }

    /// True once the total sits at or above the goal-imminent threshold.
    pub fn is_goal_imminent(&self) -> bool {
        self.accumulated_protein >= GOAL_IMMINENT_THRESHOLD
    }

    /// Ring fill in percent, `min(100, 100 * accumulated / goal)`.
    pub fn progress_percent(&self) -> f32 {
        if self.goal == 0 {
            return 100.0;
        }
        (self.accumulated_protein as f32 / self.goal as f32 * 100.0).min(100.0)
    }

    /// Text shown inside the ring, e.g. `65/120g`.
    pub fn label(&self) -> String {
        format!("{}/{}g", self.accumulated_protein, self.goal)
    }
}

impl Default for NutrientState {
    fn default() -> Self {
        Self::new(STARTING_PROTEIN)
    }
}
