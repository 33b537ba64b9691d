// Test fixtures - reusable test data
// Provides consistent timestamps and sessions across test files

#![allow(dead_code)]

use mypump::models::settings::Settings;
use mypump::models::timer::EpochSeconds;
use mypump::services::session::{Session, SessionEvent};

/// Sample wall-clock instants
pub mod instants {
    use super::EpochSeconds;

    /// 2023-11-14T22:13:20Z
    pub const T0: EpochSeconds = 1_700_000_000.0;

    pub fn after(seconds: f64) -> EpochSeconds {
        T0 + seconds
    }
}

/// Settings with the countdown starting as soon as the goal is imminent
pub fn immediate_settings() -> Settings {
    Settings {
        activation_delay_seconds: 0.0,
        ..Settings::default()
    }
}

/// A session whose countdown started at `instants::T0`
pub fn running_session() -> Session {
    let mut session = Session::new(&immediate_settings());
    confirm(&mut session, "Proteinshake", instants::T0);
    session
}

/// Select and confirm a meal in one step
pub fn confirm(session: &mut Session, meal: &str, now: EpochSeconds) {
    session.handle(SessionEvent::SelectMeal(Some(meal.to_string())), now);
    session.handle(SessionEvent::ConfirmMeal, now);
}
