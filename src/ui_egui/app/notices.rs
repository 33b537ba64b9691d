use super::toast::ToastKind;
use super::MyPumpApp;
use crate::models::timer::EpochSeconds;
use crate::services::countdown::format_remaining;
use crate::services::session::SessionNotice;

impl MyPumpApp {
    /// Turn session notices into toasts and desktop notifications.
    pub(super) fn handle_notice(&mut self, notice: SessionNotice, now: EpochSeconds) {
        match notice {
            SessionNotice::MealAdded { meal, grams } => {
                let label = self
                    .session
                    .catalog()
                    .get(&meal)
                    .map(|m| m.label)
                    .unwrap_or(meal.as_str());
                let message = format!("{} hinzugefügt (+{}g)", label, grams);
                self.toasts.push(ToastKind::MealAdded, message, now);
            }
            SessionNotice::GoalImminent => {
                log::info!("Protein goal imminent");
                self.toasts.push(ToastKind::GoalImminent, "Fast am Tagesziel!", now);
            }
            SessionNotice::CountdownStarted { duration_seconds } => {
                if let Err(e) = self
                    .notification_service
                    .show_countdown_started(duration_seconds)
                {
                    log::warn!("Failed to show countdown notification: {}", e);
                }
            }
            SessionNotice::CountdownResynced { duration_seconds } => {
                let message = format!("Timer auf {} angepasst", format_remaining(duration_seconds));
                self.toasts.push(ToastKind::TimerAdjusted, message, now);
            }
            SessionNotice::CountdownExpired => {
                self.toasts.push(ToastKind::TimeUp, "Countdown abgelaufen", now);
                if let Err(e) = self.notification_service.show_countdown_expired() {
                    log::warn!("Failed to show expiry notification: {}", e);
                }
            }
        }
    }
}
