mod lifecycle;
mod main_panel;
mod meal_dialog;
mod notices;
mod timer_dialog;
mod toast;

use self::toast::ToastQueue;
use crate::models::settings::Settings;
use crate::services::notification::NotificationService;
use crate::services::session::{Session, SessionEvent};
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::MyPumpTheme;
use crate::utils::clock;

pub struct MyPumpApp {
    /// Per-session protein total, dialogs and countdown
    session: Session,
    /// Configuration loaded at startup; duration edits are written back on exit
    settings: Settings,
    settings_service: SettingsService,
    notification_service: NotificationService,
    active_theme: MyPumpTheme,
    /// Value bound to the duration input
    duration_input: f64,
    toasts: ToastQueue,
}

impl eframe::App for MyPumpApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}

impl MyPumpApp {
    /// Feed queued UI events to the session in order.
    fn dispatch_all(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            self.dispatch(event);
        }
    }

    fn dispatch(&mut self, event: SessionEvent) {
        let now = clock::now_epoch_seconds();
        let notices = self.session.handle(event, now);
        for notice in notices {
            self.handle_notice(notice, now);
        }
    }
}
