//! Display derivation for the countdown ring.
//!
//! Pure functions shared by every rendering path. Fill and colour are
//! measured against a fixed reference duration, not the configured total.

use serde::Serialize;

use crate::models::timer::{ColorBand, CountdownPhase, RgbaColor};

/// Everything the rendering layer needs for one frame of the timer dialog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountdownDisplay {
    pub phase: CountdownPhase,
    pub remaining_seconds: f64,
    pub percent: f64,
    pub band: ColorBand,
    /// `M:SS`
    pub label: String,
}

impl CountdownDisplay {
    pub fn derive(phase: CountdownPhase, remaining_seconds: f64, reference_seconds: f64) -> Self {
        let remaining_seconds = sanitize_remaining(remaining_seconds);
        Self {
            phase,
            remaining_seconds,
            percent: progress_percent(remaining_seconds, reference_seconds),
            band: ColorBand::classify(remaining_seconds, reference_seconds),
            label: format_remaining(remaining_seconds),
        }
    }

    pub fn color(&self) -> RgbaColor {
        self.band.color()
    }
}

fn sanitize_remaining(remaining: f64) -> f64 {
    if remaining.is_finite() {
        remaining.max(0.0)
    } else {
        0.0
    }
}

/// `clamp(0, 100, 100 * remaining / reference)`.
pub fn progress_percent(remaining: f64, reference: f64) -> f64 {
    if reference <= 0.0 || !reference.is_finite() {
        return 0.0;
    }
    let percent = sanitize_remaining(remaining) / reference * 100.0;
    percent.clamp(0.0, 100.0)
}

impl ColorBand {
    /// `> 2/3` of the reference is safe, `> 1/3` warning, anything else
    /// critical. Both boundaries belong to the lower band.
    pub fn classify(remaining: f64, reference: f64) -> Self {
        let remaining = sanitize_remaining(remaining);
        if remaining > reference * 2.0 / 3.0 {
            ColorBand::Safe
        } else if remaining > reference / 3.0 {
            ColorBand::Warning
        } else {
            ColorBand::Critical
        }
    }
}

/// Format as `M:SS`; minutes are not wrapped at an hour.
pub fn format_remaining(remaining: f64) -> String {
    let whole = sanitize_remaining(remaining).floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}
