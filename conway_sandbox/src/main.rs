// main.rs - Conway's Game of Life sandbox

use clap::Parser;
use conway::{Grid, MAX_CELLS};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod bridge;
mod commands;
mod config;
mod console;
mod error;
mod pacing;
mod surface;
mod text_input;

use app::SandboxApp;
use config::Config;
use error::AppError;

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(target: "runtime.panic", %panic_info, "panic");
        default_hook(panic_info);
    }));

    let config = Config::parse();
    if !Grid::fits(config.width as usize, config.height as usize) {
        return Err(AppError::GridTooLarge {
            width: config.width,
            height: config.height,
            max_cells: MAX_CELLS,
        });
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("Game of Life"),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Box::new(SandboxApp::new(&config))),
    )?;

    info!("window closed, exiting");
    Ok(())
}
