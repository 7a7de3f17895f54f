#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use payops_business::DashboardConfig;
use payops_ui::PayopsApp;
use payops_ui::state::State;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    // Filter out egui_winit clipboard errors - they occur when clipboard content
    // is not in a supported text format.
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    let config = DashboardConfig::init().unwrap_or_else(|err| {
        log::error!("Invalid configuration, using defaults: {err:#}");
        DashboardConfig::default()
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PayOps")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "PayOps",
        native_options,
        Box::new(move |cc| {
            let app = PayopsApp::new(State::from_config(config));
            app.apply_theme(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
}
