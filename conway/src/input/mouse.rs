use egui::Pos2;

use super::events::{InputEvent, MouseButton, WheelDirection};

/// Debounced pointer state for one frame.
///
/// `*_click`, `*_up` and the wheel flags are edges, true only on the frame
/// they happen. `*_held` and `position` persist across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseInfo {
    pub position: Pos2,

    pub left_up: bool,
    pub right_up: bool,

    pub left_click: bool,
    pub right_click: bool,

    pub left_held: bool,
    pub right_held: bool,

    pub wheel_up: bool,
    pub wheel_down: bool,
}

impl Default for MouseInfo {
    fn default() -> Self {
        Self {
            position: Pos2::ZERO,
            left_up: false,
            right_up: false,
            left_click: false,
            right_click: false,
            left_held: false,
            right_held: false,
            wheel_up: false,
            wheel_down: false,
        }
    }
}

impl MouseInfo {
    pub fn update(&mut self, events: &[InputEvent]) {
        self.reset_edges();

        for event in events {
            match event {
                InputEvent::PointerMoved(position) => self.position = *position,

                // A repeated down while already held is not a new click
                InputEvent::ButtonDown(MouseButton::Left) => {
                    self.left_click = !self.left_held;
                    self.left_held = true;
                }
                InputEvent::ButtonDown(MouseButton::Right) => {
                    self.right_click = !self.right_held;
                    self.right_held = true;
                }

                InputEvent::ButtonUp(MouseButton::Left) => {
                    self.left_up = true;
                    self.left_held = false;
                }
                InputEvent::ButtonUp(MouseButton::Right) => {
                    self.right_up = true;
                    self.right_held = false;
                }

                InputEvent::Wheel(WheelDirection::Up) => self.wheel_up = true,
                InputEvent::Wheel(WheelDirection::Down) => self.wheel_down = true,

                _ => {}
            }
        }
    }

    fn reset_edges(&mut self) {
        self.left_up = false;
        self.right_up = false;

        self.left_click = false;
        self.right_click = false;

        self.wheel_up = false;
        self.wheel_down = false;
    }
}
