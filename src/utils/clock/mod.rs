// Wall-clock sampling

use chrono::{DateTime, Utc};

use crate::models::timer::EpochSeconds;

/// Seconds since the Unix epoch with millisecond precision.
pub fn epoch_seconds(at: DateTime<Utc>) -> EpochSeconds {
    at.timestamp_millis() as f64 / 1000.0
}

pub fn now_epoch_seconds() -> EpochSeconds {
    epoch_seconds(Utc::now())
}
