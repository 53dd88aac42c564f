//! Conway's Game of Life sandbox engine.
//!
//! [`GridModel`] owns the cells, the paint-stroke memory and a bounded
//! undo history. [`MouseInfo`] and [`KeyboardInfo`] turn raw
//! [`InputEvent`] batches into per-frame state which [`GridController`]
//! reconciles into at most one pointer mutation per frame, plus the
//! step/undo keys. [`GridView`] draws the grid onto any [`Surface`].

pub mod controller;
pub mod grid;
pub mod history;
pub mod input;
pub mod model;
pub mod patterns;
pub mod view;

pub use controller::{FrameStatus, GridController};
pub use grid::{Cell, DEFAULT_HEIGHT, DEFAULT_WIDTH, Grid, MAX_CELLS, MAX_DIMENSION};
pub use history::{DEFAULT_HISTORY_LIMIT, History};
pub use input::{InputEvent, Key, KeyboardInfo, MouseButton, MouseInfo, WheelDirection};
pub use model::{GridModel, SharedModel, StrokeMemory};
pub use patterns::{PATTERNS, Pattern};
pub use view::{GridView, Palette, Surface};
