//! Number checker desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop form.

use numclass_app::{app, version};

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.numclass";

    better_panic::install();
    env_logger::init();

    log::info!(
        "Starting {}, version={}",
        app::TITLE,
        version::build_version()
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((300.0, 300.0))
            .with_min_inner_size((240.0, 260.0)),
        ..Default::default()
    };
    eframe::run_native(
        app::TITLE,
        options,
        Box::new(|cc| Ok(Box::new(app::NumclassApp::new(cc)))),
    )
}
