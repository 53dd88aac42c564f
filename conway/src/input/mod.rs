//! Per-frame input aggregation.
//!
//! The shell translates its native events into [`InputEvent`] batches;
//! [`MouseInfo`] and [`KeyboardInfo`] fold each batch into stable pointer
//! and key state for the controller to read once per frame.

mod events;
mod keyboard;
mod mouse;

pub use events::{InputEvent, Key, MouseButton, WheelDirection};
pub use keyboard::{DELAY_HARD_HELD, KeyboardInfo};
pub use mouse::MouseInfo;
