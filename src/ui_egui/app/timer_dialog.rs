use super::MyPumpApp;
use crate::models::timer::CountdownPhase;
use crate::services::notification::countdown_started_message;
use crate::services::session::{SessionDisplay, SessionEvent};
use crate::ui_egui::theme::to_color32;
use crate::ui_egui::widgets::ProgressRing;
use egui::{Align2, RichText};

const TIMER_RING_DIAMETER: f32 = 150.0;
const TIMER_RING_THICKNESS: f32 = 20.0;

impl MyPumpApp {
    /// "Almost there" dialog with the goal countdown.
    pub(super) fn render_timer_dialog(
        &self,
        ctx: &egui::Context,
        display: &SessionDisplay,
        events: &mut Vec<SessionEvent>,
    ) {
        let mut open = true;
        let countdown = &display.countdown;
        let theme = &self.active_theme;
        let total = self.session.countdown().timer().total_duration_seconds;

        egui::Window::new(RichText::new("Fast geschafft!").strong().size(22.0))
            .id(egui::Id::new("timer_dialog"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(320.0);
                ui.vertical_centered(|ui| {
                    ui.add_space(12.0);
                    ProgressRing {
                        diameter: TIMER_RING_DIAMETER,
                        thickness: TIMER_RING_THICKNESS,
                        percent: countdown.percent as f32,
                        fill: to_color32(countdown.color()),
                        track: theme.ring_track,
                        label: &countdown.label,
                        label_size: 20.0,
                        text_color: theme.text_primary,
                    }
                    .show(ui);
                    ui.add_space(12.0);

                    let message = match countdown.phase {
                        CountdownPhase::Expired => "Die Zeit ist abgelaufen.".to_string(),
                        _ => countdown_started_message(total),
                    };
                    ui.label(RichText::new(message).size(18.0).strong());
                    ui.add_space(8.0);
                });
            });

        if !open {
            events.push(SessionEvent::CloseTimerDialog);
        }
    }
}
