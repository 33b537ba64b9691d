use anyhow::Result;
use notify_rust::{Notification, Timeout};

use crate::services::countdown::format_remaining;

const APP_NAME: &str = "MyPump";

/// Service for displaying system notifications
pub struct NotificationService {
    enabled: bool,
}

impl NotificationService {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Tell the user how long they have left to reach the goal.
    pub fn show_countdown_started(&self, duration_seconds: f64) -> Result<()> {
        self.show(
            "Fast geschafft!",
            &countdown_started_message(duration_seconds),
            NotificationUrgency::Normal,
        )
    }

    pub fn show_countdown_expired(&self) -> Result<()> {
        self.show(
            "Zeit abgelaufen",
            "Der Countdown für dein Tagesziel ist abgelaufen.",
            NotificationUrgency::Critical,
        )
    }

    fn show(&self, title: &str, body: &str, urgency: NotificationUrgency) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let timeout = match urgency {
            NotificationUrgency::Normal => Timeout::Milliseconds(5000),
            NotificationUrgency::Critical => Timeout::Milliseconds(10000),
        };

        Notification::new()
            .appname(APP_NAME)
            .summary(title)
            .body(body)
            .timeout(timeout)
            .show()
            .map_err(|e| anyhow::anyhow!("Failed to show notification: {}", e))?;

        Ok(())
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Notification urgency level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationUrgency {
    Normal,
    Critical,
}

/// Body text shown when the countdown starts, e.g.
/// "Du hast noch 5:00 Minuten für dein Tagesziel!".
pub fn countdown_started_message(duration_seconds: f64) -> String {
    format!(
        "Du hast noch {} Minuten für dein Tagesziel!",
        format_remaining(duration_seconds)
    )
}
