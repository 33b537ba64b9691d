use super::toast::ToastQueue;
use super::MyPumpApp;
use crate::models::settings::Settings;
use crate::services::notification::NotificationService;
use crate::services::session::{Session, SessionEvent};
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::MyPumpTheme;
use crate::utils::clock;
use std::time::Duration;

impl MyPumpApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        settings_service: SettingsService,
    ) -> Self {
        log::info!(
            "Loaded settings: timer_duration={}s, activation_delay={}s, starting_protein={}g",
            settings.timer_duration_seconds,
            settings.activation_delay_seconds,
            settings.starting_protein
        );

        let active_theme = MyPumpTheme::for_settings(settings.dark_mode);
        active_theme.apply_to_context(&cc.egui_ctx);

        Self {
            session: Session::new(&settings),
            notification_service: NotificationService::new(settings.notifications_enabled),
            duration_input: settings.timer_duration_seconds,
            settings,
            settings_service,
            active_theme,
            toasts: ToastQueue::new(),
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Reconcile against the wall clock before drawing anything
        self.dispatch(SessionEvent::Tick);

        let display = self.session.display(clock::now_epoch_seconds());
        let mut events: Vec<SessionEvent> = Vec::new();

        self.render_main_panel(ctx, &display, &mut events);

        if display.meal_dialog_open {
            self.render_meal_dialog(ctx, &display, &mut events);
        }
        if display.timer_dialog_open {
            self.render_timer_dialog(ctx, &display, &mut events);
        }

        if !events.is_empty() {
            self.dispatch_all(events);
            ctx.request_repaint();
        }

        // Banners last, so they appear on top
        let now = clock::now_epoch_seconds();
        self.toasts.show(ctx, &self.active_theme, now);

        if self.session.needs_ticks() {
            ctx.request_repaint_after(Duration::from_millis(self.settings.tick_interval_ms));
        }
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings.timer_duration_seconds = self.session.countdown().configured_duration();
        if let Err(e) = self.settings_service.save(&self.settings) {
            log::error!("Failed to save settings: {}", e);
        }
    }
}
