use super::MyPumpApp;
use crate::models::timer::{MAX_DURATION_SECONDS, MIN_DURATION_SECONDS};
use crate::services::session::{SessionDisplay, SessionEvent};
use crate::ui_egui::theme::to_color32;
use crate::ui_egui::widgets::ProgressRing;
use egui::{Button, RichText};

const PROTEIN_RING_DIAMETER: f32 = 220.0;
const PROTEIN_RING_THICKNESS: f32 = 40.0;

impl MyPumpApp {
    pub(super) fn render_main_panel(
        &mut self,
        ctx: &egui::Context,
        display: &SessionDisplay,
        events: &mut Vec<SessionEvent>,
    ) {
        let theme = self.active_theme.clone();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(32.0);
                ui.label(RichText::new("MyPump").size(48.0).strong());
                ui.add_space(12.0);
                ui.label(RichText::new("Dein Proteinziel heute:").size(26.0));
                ui.add_space(28.0);

                ProgressRing {
                    diameter: PROTEIN_RING_DIAMETER,
                    thickness: PROTEIN_RING_THICKNESS,
                    percent: display.protein.percent,
                    fill: to_color32(display.protein.color),
                    track: theme.ring_track,
                    label: &display.protein.label,
                    label_size: 24.0,
                    text_color: theme.text_primary,
                }
                .show(ui);

                ui.add_space(24.0);
                let add_button = Button::new(RichText::new("Gericht hinzufügen").size(22.0))
                    .fill(theme.accent)
                    .min_size(egui::vec2(240.0, 48.0));
                if ui.add(add_button).clicked() {
                    events.push(SessionEvent::OpenMealDialog);
                }

                ui.add_space(48.0);
                self.render_duration_input(ui, events);
            });
        });
    }

    fn render_duration_input(&mut self, ui: &mut egui::Ui, events: &mut Vec<SessionEvent>) {
        ui.collapsing("🛠 Timer anpassen", |ui| {
            ui.horizontal(|ui| {
                ui.label("Zeit in Sekunden:");
                let response = ui.add(
                    egui::DragValue::new(&mut self.duration_input)
                        .clamp_range(MIN_DURATION_SECONDS..=MAX_DURATION_SECONDS)
                        .speed(1.0)
                        .suffix(" s"),
                );
                if response.changed() {
                    events.push(SessionEvent::DurationChanged(Some(self.duration_input)));
                }
            });
            ui.label(
                RichText::new("Änderungen während des Countdowns skalieren die Restzeit.")
                    .small()
                    .color(self.active_theme.text_secondary),
            );

            ui.add_space(8.0);
            let mut notify = self.notification_service.is_enabled();
            if ui.checkbox(&mut notify, "Desktop-Benachrichtigungen").changed() {
                log::info!("Desktop notifications enabled: {}", notify);
                self.notification_service.set_enabled(notify);
                self.settings.notifications_enabled = notify;
            }
        });
    }
}
