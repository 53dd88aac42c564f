use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to run the sandbox window: {0}")]
    Window(#[from] eframe::Error),
    #[error("grid {width}x{height} is too large, at most {max_cells} cells")]
    GridTooLarge { width: u32, height: u32, max_cells: usize },
}

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("{0}")]
    Parse(#[from] clap::Error),
    #[error("grid {width}x{height} is too large, at most {max_cells} cells")]
    GridTooLarge { width: u32, height: u32, max_cells: usize },
    #[error("unknown pattern '{name}', expected one of: {known}")]
    UnknownPattern { name: String, known: String },
}
