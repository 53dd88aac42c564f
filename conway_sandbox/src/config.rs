// config.rs - Start-up options

use clap::Parser;
use conway::{DEFAULT_HEIGHT, DEFAULT_HISTORY_LIMIT, DEFAULT_WIDTH, MAX_DIMENSION};

use crate::console;
use crate::pacing::DEFAULT_FPS;

/// Interactive Conway's Game of Life sandbox.
///
/// Left mouse paints, right mouse clears, space steps (hold to run),
/// `r` undoes a step and the ` / ² key opens the command console.
#[derive(Debug, Clone, Parser)]
#[command(name = "conway_sandbox", version)]
pub struct Config {
    /// Grid width in cells (horizontal)
    #[arg(long, default_value_t = DEFAULT_WIDTH as u32, value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION as i64))]
    pub width: u32,

    /// Grid height in cells (vertical)
    #[arg(long, default_value_t = DEFAULT_HEIGHT as u32, value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION as i64))]
    pub height: u32,

    /// Frame-rate limit, also the auto-step rate while space is held
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Generations kept for undo
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
    pub history_limit: usize,

    /// Lines of console scroll-back
    #[arg(long, default_value_t = console::DEFAULT_HISTORY_LIMIT)]
    pub console_history: usize,

    /// Window width in points
    #[arg(long, default_value_t = 1280.0)]
    pub window_width: f32,

    /// Window height in points
    #[arg(long, default_value_t = 720.0)]
    pub window_height: f32,
}
