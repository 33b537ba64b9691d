use serde::{Deserialize, Serialize};

/// Countdown length used when nothing else is configured (seconds).
pub const DEFAULT_DURATION_SECONDS: f64 = 300.0;
pub const MIN_DURATION_SECONDS: f64 = 10.0;
pub const MAX_DURATION_SECONDS: f64 = 1800.0;

/// Fixed duration the ring fill and colour bands are measured against,
/// independent of the configured countdown length.
pub const REFERENCE_DURATION_SECONDS: f64 = 300.0;

/// Delay between the goal-imminent signal and the countdown start.
pub const DEFAULT_ACTIVATION_DELAY_SECONDS: f64 = 3.0;

/// Edits closer than this to the stored total do not resync a running timer.
pub const RESYNC_TOLERANCE_SECONDS: f64 = 1.0;

/// Wall-clock timestamp in seconds since the Unix epoch.
pub type EpochSeconds = f64;

/// Clamp a user supplied duration into the accepted range. Missing or
/// non-finite input falls back to the default.
pub fn normalize_duration(value: Option<f64>) -> f64 {
    match value {
        Some(seconds) if seconds.is_finite() => {
            seconds.clamp(MIN_DURATION_SECONDS, MAX_DURATION_SECONDS)
        }
        _ => DEFAULT_DURATION_SECONDS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimerState {
    pub total_duration_seconds: f64,
    /// `None` while the timer is unstarted.
    pub start_timestamp: Option<EpochSeconds>,
}

impl TimerState {
    pub fn unstarted(total_duration_seconds: f64) -> Self {
        Self {
            total_duration_seconds,
            start_timestamp: None,
        }
    }

    pub fn started_at(total_duration_seconds: f64, start: EpochSeconds) -> Self {
        Self {
            total_duration_seconds,
            start_timestamp: Some(start),
        }
    }

    pub fn is_started(&self) -> bool {
        self.start_timestamp.is_some()
    }

    /// Seconds since start, never negative. Zero when unstarted.
    pub fn elapsed(&self, now: EpochSeconds) -> f64 {
        self.start_timestamp
            .map(|start| (now - start).max(0.0))
            .unwrap_or(0.0)
    }

    /// `max(0, total - (now - start))`, or the full total when unstarted.
    pub fn remaining(&self, now: EpochSeconds) -> f64 {
        (self.total_duration_seconds - self.elapsed(now))
            .clamp(0.0, self.total_duration_seconds.max(0.0))
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::unstarted(DEFAULT_DURATION_SECONDS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CountdownPhase {
    /// No timer running
    Idle,
    /// Goal-imminent signal received, waiting for the activation delay
    Pending { since: EpochSeconds },
    /// Ticking
    Running,
    /// Remaining time reached zero
    Expired,
}

impl CountdownPhase {
    pub fn name(&self) -> &'static str {
        match self {
            CountdownPhase::Idle => "idle",
            CountdownPhase::Pending { .. } => "pending",
            CountdownPhase::Running => "running",
            CountdownPhase::Expired => "expired",
        }
    }
}

impl Default for CountdownPhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// Colour band of the countdown ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorBand {
    /// More than two thirds of the reference duration left
    Safe,
    /// Between one and two thirds left
    Warning,
    /// One third or less left
    Critical,
}

impl ColorBand {
    pub fn color(&self) -> RgbaColor {
        match self {
            ColorBand::Safe => RgbaColor::GREEN,
            ColorBand::Warning => RgbaColor::YELLOW,
            ColorBand::Critical => RgbaColor::RED,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const GREEN: RgbaColor = RgbaColor::new(0x10, 0xb9, 0x81, 255);
    pub const YELLOW: RgbaColor = RgbaColor::new(0xea, 0xb3, 0x08, 255);
    pub const RED: RgbaColor = RgbaColor::new(0xef, 0x44, 0x44, 255);
    /// Unfilled part of a ring.
    pub const TRACK: RgbaColor = RgbaColor::new(0x1e, 0x29, 0x3b, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}
