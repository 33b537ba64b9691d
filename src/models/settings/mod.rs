// Settings module
// User configuration persisted as TOML

use serde::{Deserialize, Serialize};

use crate::models::nutrient::{PROTEIN_CAP, STARTING_PROTEIN};
use crate::models::timer::{
    normalize_duration, DEFAULT_ACTIVATION_DELAY_SECONDS, DEFAULT_DURATION_SECONDS,
};

const MIN_TICK_INTERVAL_MS: u64 = 16;
const MAX_TICK_INTERVAL_MS: u64 = 1000;
const MAX_ACTIVATION_DELAY_SECONDS: f64 = 60.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Countdown length started when the goal becomes imminent
    pub timer_duration_seconds: f64,
    /// Pause between reaching the threshold and the countdown start; 0 starts immediately
    pub activation_delay_seconds: f64,
    /// Repaint cadence while a countdown is pending or running
    pub tick_interval_ms: u64,
    pub starting_protein: u32,
    pub notifications_enabled: bool,
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timer_duration_seconds: DEFAULT_DURATION_SECONDS,
            activation_delay_seconds: DEFAULT_ACTIVATION_DELAY_SECONDS,
            tick_interval_ms: 100,
            starting_protein: STARTING_PROTEIN,
            notifications_enabled: true,
            dark_mode: true,
        }
    }
}

impl Settings {
    /// Bring hand-edited values back into their valid ranges.
    pub fn normalized(mut self) -> Self {
        self.timer_duration_seconds = normalize_duration(Some(self.timer_duration_seconds));
        self.activation_delay_seconds = if self.activation_delay_seconds.is_finite() {
            self.activation_delay_seconds
                .clamp(0.0, MAX_ACTIVATION_DELAY_SECONDS)
        } else {
            DEFAULT_ACTIVATION_DELAY_SECONDS
        };
        self.tick_interval_ms = self
            .tick_interval_ms
            .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
        self.starting_protein = self.starting_protein.min(PROTEIN_CAP);
        self
    }
}
