// pacing.rs - Frame-rate limiter driven by a shared fps target

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

pub const DEFAULT_FPS: u32 = 40;

/// Target frame rate shared with the console's `limit-fps` command.
pub type SharedFps = Rc<Cell<u32>>;

/// Decides when the next logical frame is due. egui repaints on every
/// input event; the sandbox only advances at `fps`.
#[derive(Debug)]
pub struct FrameLimiter {
    fps: SharedFps,
    last_update: Option<Instant>,
}

impl FrameLimiter {
    pub fn new(fps: SharedFps) -> Self {
        Self { fps, last_update: None }
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.get().max(1)
    }

    /// True, and restarts the interval, when a frame is due at `now`.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = match self.last_update {
            Some(last) => now.saturating_duration_since(last) >= self.update_interval(),
            None => true,
        };
        if due {
            self.last_update = Some(now);
        }
        due
    }

    /// Time left until the next frame is due.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last_update {
            Some(last) => self
                .update_interval()
                .saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }
}
