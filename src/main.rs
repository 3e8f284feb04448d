#![warn(clippy::all)]

use gol_bounded::{App, SimConfig};

fn main() -> anyhow::Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    env_logger::init();

    let config = SimConfig::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1000., 700.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(config)?))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run the window: {}", err))
}
