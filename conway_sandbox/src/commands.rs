// commands.rs - Console command line grammar and execution

use std::time::{SystemTime, UNIX_EPOCH};

use clap::{CommandFactory, Parser, Subcommand};
use conway::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Grid, GridModel, MAX_CELLS, MAX_DIMENSION, PATTERNS, patterns};
use tracing::debug;

use crate::error::ConsoleError;
use crate::pacing::SharedFps;

#[derive(Debug, Parser)]
#[command(
    name = "APPLICATION",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Reshape the grid to the specified dimensions. (delete all cells)
    Reshape {
        /// Width of the grid
        #[arg(default_value_t = DEFAULT_WIDTH as u32, value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION as i64))]
        width: u32,
        /// Height of the grid
        #[arg(default_value_t = DEFAULT_HEIGHT as u32, value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION as i64))]
        height: u32,
    },
    /// Change the speed of the game.
    LimitFps {
        /// Frames per second
        #[arg(default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
        fps: u32,
    },
    /// Clear the grid of all live cells.
    Clear,
    /// Display help message, list of commands.
    Help,
    /// Clear the grid and load a preset in its center.
    Pattern {
        /// Preset name, e.g. glider or gosper-glider-gun
        name: String,
    },
    /// Fill the grid randomly (about one cell in three alive).
    Random {
        /// Seed for a reproducible fill
        seed: Option<u64>,
    },
}

/// Parses one console line. `Ok(None)` for a blank line.
pub fn parse(line: &str) -> Result<Option<Command>, ConsoleError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(None);
    }
    let parsed = CommandLine::try_parse_from(words)?;
    Ok(Some(parsed.command))
}

pub fn help_text() -> String {
    CommandLine::command().render_help().to_string()
}

/// Runs a command against the handles the console was built with and
/// returns what to print.
pub fn execute(command: Command, model: &mut GridModel, fps: &SharedFps) -> Result<String, ConsoleError> {
    debug!(?command, "executing console command");
    let output = match command {
        Command::Reshape { width, height } => {
            if !Grid::fits(width as usize, height as usize) {
                return Err(ConsoleError::GridTooLarge { width, height, max_cells: MAX_CELLS });
            }
            model.reshape(width as usize, height as usize);
            // Older snapshots have a different shape.
            model.clear_history();
            format!("Grid reshaped, new dimensions: {width}x{height}")
        }
        Command::LimitFps { fps: target } => {
            fps.set(target);
            format!("Speed changed, new speed: {target}")
        }
        Command::Clear => {
            let cleared = model.clear_grid();
            format!("Grid cleared, deleted cells: {cleared}")
        }
        Command::Help => help_text(),
        Command::Pattern { name } => {
            let pattern = patterns::find(&name).ok_or_else(|| ConsoleError::UnknownPattern {
                name: name.clone(),
                known: PATTERNS.iter().map(|p| p.slug()).collect::<Vec<_>>().join(", "),
            })?;
            let placed = model.load_pattern(pattern);
            format!("Pattern loaded: {} ({placed} cells)", pattern.name)
        }
        Command::Random { seed } => {
            let seed = seed.unwrap_or_else(clock_seed);
            model.random_fill(seed);
            format!("Grid randomized (seed {seed}), live cells: {}", model.live_count())
        }
    };
    Ok(output)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn run(line: &str, model: &mut GridModel, fps: &SharedFps) -> Result<String, ConsoleError> {
        let command = parse(line)?.expect("non-blank line");
        execute(command, model, fps)
    }

    #[test]
    fn blank_line_is_not_a_command() {
        assert!(parse("   ").unwrap().is_none());
    }

    #[test]
    fn reshape_defaults_and_explicit() {
        assert_eq!(
            parse("reshape").unwrap(),
            Some(Command::Reshape { width: 65, height: 37 })
        );
        assert_eq!(
            parse("reshape 10 4").unwrap(),
            Some(Command::Reshape { width: 10, height: 4 })
        );
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        assert!(matches!(parse("reshape 0 5"), Err(ConsoleError::Parse(_))));
        assert!(matches!(parse("limit-fps 0"), Err(ConsoleError::Parse(_))));
        assert!(matches!(parse("reshape ten 5"), Err(ConsoleError::Parse(_))));
    }

    #[test]
    fn oversized_reshape_is_reported_and_grid_kept() {
        let mut model = GridModel::new(5, 4, 10);
        model.toggle_cell(1, 1);
        let fps = Rc::new(Cell::new(40));

        assert!(matches!(
            run("reshape 100000 100000", &mut model, &fps),
            Err(ConsoleError::Parse(_))
        ));
        assert!(matches!(
            run("reshape 4294967295 4294967295", &mut model, &fps),
            Err(ConsoleError::Parse(_))
        ));

        // Each side is in range, the product is not.
        let command = Command::Reshape { width: 4096, height: 4096 };
        let error = execute(command, &mut model, &fps).unwrap_err();
        assert!(matches!(error, ConsoleError::GridTooLarge { width: 4096, height: 4096, .. }));

        assert_eq!(model.grid().shape(), (5, 4));
        assert_eq!(model.live_count(), 1);
    }

    #[test]
    fn reshape_clears_history() {
        let mut model = GridModel::new(3, 3, 10);
        model.toggle_cell(1, 1);
        model.next_generation();
        let fps = Rc::new(Cell::new(40));

        let output = run("reshape 8 5", &mut model, &fps).unwrap();
        assert_eq!(output, "Grid reshaped, new dimensions: 8x5");
        assert_eq!(model.grid().shape(), (8, 5));
        assert!(model.history().is_empty());
    }

    #[test]
    fn clear_reports_deleted_cells() {
        let mut model = GridModel::new(4, 4, 10);
        model.toggle_cell(0, 0);
        model.toggle_cell(3, 3);
        let fps = Rc::new(Cell::new(40));
        assert_eq!(run("clear", &mut model, &fps).unwrap(), "Grid cleared, deleted cells: 2");
        assert_eq!(model.live_count(), 0);
    }

    #[test]
    fn limit_fps_updates_shared_target() {
        let mut model = GridModel::new(2, 2, 1);
        let fps = Rc::new(Cell::new(40));
        assert_eq!(run("limit-fps 12", &mut model, &fps).unwrap(), "Speed changed, new speed: 12");
        assert_eq!(fps.get(), 12);
        run("limit-fps", &mut model, &fps).unwrap();
        assert_eq!(fps.get(), 60);
    }

    #[test]
    fn help_lists_commands() {
        let mut model = GridModel::new(2, 2, 1);
        let fps = Rc::new(Cell::new(40));
        let help = run("help", &mut model, &fps).unwrap();
        for name in ["reshape", "limit-fps", "clear", "help", "pattern", "random"] {
            assert!(help.contains(name), "help is missing {name}: {help}");
        }
    }

    #[test]
    fn pattern_by_name() {
        let mut model = GridModel::new(20, 20, 10);
        let fps = Rc::new(Cell::new(40));
        assert_eq!(
            run("pattern glider", &mut model, &fps).unwrap(),
            "Pattern loaded: Glider (5 cells)"
        );
        let error = run("pattern spaceship", &mut model, &fps).unwrap_err();
        assert!(error.to_string().contains("gosper-glider-gun"));
    }

    #[test]
    fn random_with_seed_is_reproducible() {
        let fps = Rc::new(Cell::new(40));
        let mut a = GridModel::new(12, 12, 10);
        let mut b = GridModel::new(12, 12, 10);
        run("random 99", &mut a, &fps).unwrap();
        run("random 99", &mut b, &fps).unwrap();
        assert_eq!(a.grid(), b.grid());
    }
}
