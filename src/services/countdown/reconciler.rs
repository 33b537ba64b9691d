use crate::models::timer::{
    normalize_duration, CountdownPhase, EpochSeconds, TimerState,
    DEFAULT_ACTIVATION_DELAY_SECONDS, DEFAULT_DURATION_SECONDS, REFERENCE_DURATION_SECONDS,
    RESYNC_TOLERANCE_SECONDS,
};

use super::display::CountdownDisplay;

/// Phase change produced by a reconciler call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTransition {
    Armed,
    Started,
    Resynced,
    Expired,
    Reset,
}

/// Drives the goal countdown from wall-clock samples.
///
/// Remaining time is always recomputed from `now - start`, so missed or
/// irregular ticks never cause drift.
#[derive(Debug, Clone, PartialEq)]
pub struct CountdownReconciler {
    phase: CountdownPhase,
    timer: TimerState,
    /// Last value from the duration input, already normalised.
    configured_duration: f64,
    activation_delay: f64,
    reference_duration: f64,
}

impl Default for CountdownReconciler {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECONDS, DEFAULT_ACTIVATION_DELAY_SECONDS)
    }
}

impl CountdownReconciler {
    pub fn new(configured_duration: f64, activation_delay: f64) -> Self {
        let configured_duration = normalize_duration(Some(configured_duration));
        Self {
            phase: CountdownPhase::Idle,
            timer: TimerState::unstarted(configured_duration),
            configured_duration,
            activation_delay: if activation_delay.is_finite() {
                activation_delay.max(0.0)
            } else {
                DEFAULT_ACTIVATION_DELAY_SECONDS
            },
            reference_duration: REFERENCE_DURATION_SECONDS,
        }
    }

    pub fn phase(&self) -> CountdownPhase {
        self.phase
    }

    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    pub fn configured_duration(&self) -> f64 {
        self.configured_duration
    }

    pub fn activation_delay(&self) -> f64 {
        self.activation_delay
    }

    /// A countdown is pending or running and needs periodic ticks.
    pub fn needs_ticks(&self) -> bool {
        matches!(
            self.phase,
            CountdownPhase::Pending { .. } | CountdownPhase::Running
        )
    }

    /// Arm the countdown. Only honoured while idle; with a zero activation
    /// delay the countdown starts right away.
    pub fn signal_goal_imminent(&mut self, now: EpochSeconds) -> Vec<CountdownTransition> {
        if self.phase != CountdownPhase::Idle {
            log::debug!(
                "Goal-imminent signal ignored while countdown is {}",
                self.phase.name()
            );
            return Vec::new();
        }

        log::info!(
            "Countdown armed, starting in {:.1}s",
            self.activation_delay
        );
        self.phase = CountdownPhase::Pending { since: now };
        let mut transitions = vec![CountdownTransition::Armed];
        if self.activation_delay <= 0.0 {
            transitions.push(self.start(now));
        }
        transitions
    }

    /// Advance the state machine to `now`.
    pub fn tick(&mut self, now: EpochSeconds) -> Vec<CountdownTransition> {
        let mut transitions = Vec::new();

        if let CountdownPhase::Pending { since } = self.phase {
            if now - since >= self.activation_delay {
                transitions.push(self.start(now));
            }
        }

        if self.phase == CountdownPhase::Running && self.timer.remaining(now) <= 0.0 {
            log::info!(
                "Countdown of {:.0}s expired",
                self.timer.total_duration_seconds
            );
            self.phase = CountdownPhase::Expired;
            transitions.push(CountdownTransition::Expired);
        }

        transitions
    }

    /// Take a new value from the duration input.
    ///
    /// While running, a change of more than one second rescales the start
    /// timestamp so the elapsed fraction of the countdown is preserved. A
    /// running countdown whose time is already up expires instead.
    pub fn duration_changed(
        &mut self,
        value: Option<f64>,
        now: EpochSeconds,
    ) -> Option<CountdownTransition> {
        let new_total = normalize_duration(value);
        self.configured_duration = new_total;

        match self.phase {
            CountdownPhase::Running if self.timer.remaining(now) <= 0.0 => {
                log::info!(
                    "Countdown of {:.0}s ran out before the duration edit",
                    self.timer.total_duration_seconds
                );
                self.phase = CountdownPhase::Expired;
                Some(CountdownTransition::Expired)
            }
            CountdownPhase::Running => {
                let old_total = self.timer.total_duration_seconds;
                if (new_total - old_total).abs() <= RESYNC_TOLERANCE_SECONDS {
                    return None;
                }

                let elapsed_fraction = if old_total > 0.0 {
                    (self.timer.elapsed(now) / old_total).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                let effective_elapsed = elapsed_fraction * new_total;
                self.timer = TimerState::started_at(new_total, now - effective_elapsed);
                log::info!(
                    "Countdown resynced from {:.0}s to {:.0}s ({:.0}% elapsed)",
                    old_total,
                    new_total,
                    elapsed_fraction * 100.0
                );
                Some(CountdownTransition::Resynced)
            }
            CountdownPhase::Idle | CountdownPhase::Pending { .. } => {
                self.timer = TimerState::unstarted(new_total);
                None
            }
            CountdownPhase::Expired => None,
        }
    }

    /// Discard the countdown, e.g. when its dialog is dismissed.
    pub fn close(&mut self) -> Option<CountdownTransition> {
        if self.phase == CountdownPhase::Idle {
            return None;
        }
        log::info!("Countdown reset from {}", self.phase.name());
        self.phase = CountdownPhase::Idle;
        self.timer = TimerState::unstarted(self.configured_duration);
        Some(CountdownTransition::Reset)
    }

    pub fn remaining(&self, now: EpochSeconds) -> f64 {
        match self.phase {
            CountdownPhase::Expired => 0.0,
            _ => self.timer.remaining(now),
        }
    }

    pub fn display(&self, now: EpochSeconds) -> CountdownDisplay {
        CountdownDisplay::derive(self.phase, self.remaining(now), self.reference_duration)
    }

    fn start(&mut self, now: EpochSeconds) -> CountdownTransition {
        self.timer = TimerState::started_at(self.configured_duration, now);
        self.phase = CountdownPhase::Running;
        log::info!("Countdown started: {:.0}s", self.configured_duration);
        CountdownTransition::Started
    }
}
