//! Per-session state and event dispatch.
//!
//! A [`Session`] owns everything that changes while the app runs: the protein
//! total, the meal dialog, and the goal countdown. The UI feeds it discrete
//! events one at a time and renders [`SessionDisplay`] snapshots.

use serde::Serialize;

use crate::models::meal::MealCatalog;
use crate::models::nutrient::NutrientState;
use crate::models::settings::Settings;
use crate::models::timer::{CountdownPhase, EpochSeconds, RgbaColor};
use crate::services::countdown::{CountdownDisplay, CountdownReconciler, CountdownTransition};
use crate::services::nutrient::{confirm_meal, ring_color};

/// External events accepted by a session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    OpenMealDialog,
    CloseMealDialog,
    /// Dropdown selection changed; `None` clears it.
    SelectMeal(Option<String>),
    /// Add the selected meal to the total.
    ConfirmMeal,
    /// Periodic wall-clock sample.
    Tick,
    /// New value from the duration input.
    DurationChanged(Option<f64>),
    CloseTimerDialog,
}

/// Things worth telling the user about, produced while handling an event.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionNotice {
    MealAdded { meal: String, grams: u32 },
    GoalImminent,
    CountdownStarted { duration_seconds: f64 },
    CountdownResynced { duration_seconds: f64 },
    CountdownExpired,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProteinDisplay {
    pub percent: f32,
    pub label: String,
    pub color: RgbaColor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionDisplay {
    pub protein: ProteinDisplay,
    pub meal_dialog_open: bool,
    pub selected_meal: Option<String>,
    pub timer_dialog_open: bool,
    pub countdown: CountdownDisplay,
}

pub struct Session {
    catalog: MealCatalog,
    nutrients: NutrientState,
    countdown: CountdownReconciler,
    meal_dialog_open: bool,
    selected_meal: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl Session {
    pub fn new(settings: &Settings) -> Self {
        Self::with_catalog(MealCatalog::new(), settings)
    }

    pub fn with_catalog(catalog: MealCatalog, settings: &Settings) -> Self {
        Self {
            catalog,
            nutrients: NutrientState::new(settings.starting_protein),
            countdown: CountdownReconciler::new(
                settings.timer_duration_seconds,
                settings.activation_delay_seconds,
            ),
            meal_dialog_open: false,
            selected_meal: None,
        }
    }

    pub fn catalog(&self) -> &MealCatalog {
        &self.catalog
    }

    pub fn nutrients(&self) -> NutrientState {
        self.nutrients
    }

    pub fn countdown(&self) -> &CountdownReconciler {
        &self.countdown
    }

    pub fn needs_ticks(&self) -> bool {
        self.countdown.needs_ticks()
    }

    /// Apply one event at wall-clock time `now`.
    pub fn handle(&mut self, event: SessionEvent, now: EpochSeconds) -> Vec<SessionNotice> {
        match event {
            SessionEvent::OpenMealDialog => {
                self.meal_dialog_open = true;
                Vec::new()
            }
            SessionEvent::CloseMealDialog => {
                self.meal_dialog_open = false;
                Vec::new()
            }
            SessionEvent::SelectMeal(selection) => {
                self.selected_meal = selection.filter(|id| !id.is_empty());
                Vec::new()
            }
            SessionEvent::ConfirmMeal => self.confirm_selected_meal(now),
            SessionEvent::Tick => {
                let transitions = self.countdown.tick(now);
                self.notices_for(&transitions)
            }
            SessionEvent::DurationChanged(value) => {
                let transitions: Vec<_> =
                    self.countdown.duration_changed(value, now).into_iter().collect();
                self.notices_for(&transitions)
            }
            SessionEvent::CloseTimerDialog => {
                self.countdown.close();
                Vec::new()
            }
        }
    }

    pub fn display(&self, now: EpochSeconds) -> SessionDisplay {
        SessionDisplay {
            protein: ProteinDisplay {
                percent: self.nutrients.progress_percent(),
                label: self.nutrients.label(),
                color: ring_color(&self.nutrients),
            },
            meal_dialog_open: self.meal_dialog_open,
            selected_meal: self.selected_meal.clone(),
            timer_dialog_open: matches!(
                self.countdown.phase(),
                CountdownPhase::Running | CountdownPhase::Expired
            ),
            countdown: self.countdown.display(now),
        }
    }

    fn confirm_selected_meal(&mut self, now: EpochSeconds) -> Vec<SessionNotice> {
        let selection = self.selected_meal.take();
        let outcome = confirm_meal(selection.as_deref(), self.nutrients, &self.catalog);
        self.nutrients = outcome.state;
        self.meal_dialog_open = false;

        // Any meal confirmed at or above the threshold re-arms a dismissed
        // countdown; only the crossing itself is announced.
        let rearm = selection.is_some()
            && self.nutrients.is_goal_imminent()
            && self.countdown.phase() == CountdownPhase::Idle;

        let mut notices = Vec::new();
        if let Some(meal) = selection.filter(|_| outcome.contribution > 0) {
            log::info!(
                "Added {}g protein from {} ({})",
                outcome.contribution,
                meal,
                self.nutrients.label()
            );
            notices.push(SessionNotice::MealAdded {
                meal,
                grams: outcome.contribution,
            });
        }

        if outcome.goal_imminent {
            notices.push(SessionNotice::GoalImminent);
        }
        if outcome.goal_imminent || rearm {
            let transitions = self.countdown.signal_goal_imminent(now);
            notices.extend(self.notices_for(&transitions));
        }
        notices
    }

    fn notices_for(&self, transitions: &[CountdownTransition]) -> Vec<SessionNotice> {
        let duration_seconds = self.countdown.timer().total_duration_seconds;
        transitions
            .iter()
            .filter_map(|transition| match transition {
                CountdownTransition::Started => {
                    Some(SessionNotice::CountdownStarted { duration_seconds })
                }
                CountdownTransition::Resynced => {
                    Some(SessionNotice::CountdownResynced { duration_seconds })
                }
                CountdownTransition::Expired => Some(SessionNotice::CountdownExpired),
                CountdownTransition::Armed | CountdownTransition::Reset => None,
            })
            .collect()
    }
}
