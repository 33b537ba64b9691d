use super::MyPumpApp;
use crate::services::session::{SessionDisplay, SessionEvent};
use egui::{Align2, Button, RichText};

impl MyPumpApp {
    /// Modal for picking a meal and adding it to today's total.
    pub(super) fn render_meal_dialog(
        &self,
        ctx: &egui::Context,
        display: &SessionDisplay,
        events: &mut Vec<SessionEvent>,
    ) {
        let mut open = true;
        let mut selection = display.selected_meal.clone();
        let catalog = self.session.catalog();
        let accent = self.active_theme.accent;

        egui::Window::new("Gericht hinzufügen")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(320.0);

                let selected_text = selection
                    .as_deref()
                    .and_then(|id| catalog.get(id))
                    .map(|meal| meal.label)
                    .unwrap_or("Gericht auswählen");

                egui::ComboBox::from_id_source("meal_select")
                    .selected_text(RichText::new(selected_text).size(18.0))
                    .width(300.0)
                    .show_ui(ui, |ui| {
                        for meal in catalog.iter() {
                            ui.selectable_value(
                                &mut selection,
                                Some(meal.id.to_string()),
                                format!("{} ({}g)", meal.label, meal.protein_grams),
                            );
                        }
                    });

                ui.add_space(16.0);
                let confirm = Button::new(RichText::new("Hinzufügen").size(18.0))
                    .fill(accent)
                    .min_size(egui::vec2(ui.available_width(), 40.0));
                if ui.add(confirm).clicked() {
                    events.push(SessionEvent::ConfirmMeal);
                }
            });

        // Selection has to land before a confirm queued in the same frame
        if selection != display.selected_meal {
            events.insert(0, SessionEvent::SelectMeal(selection));
        }
        if !open {
            events.push(SessionEvent::CloseMealDialog);
        }
    }
}
