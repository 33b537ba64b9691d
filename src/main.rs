// MyPump Application
// Main entry point

use mypump::services::settings::SettingsService;
use mypump::ui_egui::MyPumpApp;

fn main() -> eframe::Result<()> {
    // Initialize logging; RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting MyPump");

    let settings_service = SettingsService::for_user();
    log::info!("Using settings file {}", settings_service.path().display());
    let settings = settings_service.load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("MyPump")
            .with_inner_size([480.0, 760.0])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "MyPump",
        options,
        Box::new(move |cc| Ok(Box::new(MyPumpApp::new(cc, settings, settings_service)))),
    )
}
