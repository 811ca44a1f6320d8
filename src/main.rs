mod app;
mod components;
mod lesson;
mod state;

use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config, WindowBuilder};
use dioxus::logger::tracing::Level;
use lesson::load_config;

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = match load_config() {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Default::default()
        }
    };
    let size = config.window.clamped();
    tracing::info!("Starting Lessonbook ({}x{})", size.width, size.height);

    let window_builder = WindowBuilder::new()
        .with_title("Lessonbook")
        .with_inner_size(LogicalSize::new(size.width as f64, size.height as f64));

    dioxus::LaunchBuilder::new()
        .with_cfg(
            Config::new()
                .with_menu(None)
                .with_window(window_builder),
        )
        .launch(app::App);
}
