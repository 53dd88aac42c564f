// controller.rs - Turns aggregated input into grid mutations

use std::fmt;

use tracing::debug;

use crate::input::{Key, KeyboardInfo, MouseInfo};
use crate::model::SharedModel;
use crate::view::{GridView, Surface};

/// What the window title shows after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStatus {
    pub row: isize,
    pub column: isize,
    pub generation: u64,
    pub history_len: usize,
    pub history_limit: usize,
}

impl fmt::Display for FrameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Game of Life  (x={}, y={} - history: {}/{})",
            self.row, self.column, self.history_len, self.history_limit
        )
    }
}

/// Reconciles one frame of pointer and key state with the model.
///
/// A paint gesture runs `Idle -> Painting -> Idle`: a left click on a
/// cell starts it with the colour fixed by that cell, held motion keeps
/// painting with the same colour and the left release ends it. Right
/// click and the keys are one-shot actions outside that cycle.
pub struct GridController {
    model: SharedModel,
    view: GridView,
}

impl GridController {
    pub fn new(model: SharedModel, view: GridView) -> Self {
        Self { model, view }
    }

    pub fn model(&self) -> &SharedModel {
        &self.model
    }

    pub fn view(&self) -> &GridView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut GridView {
        &mut self.view
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        self.view.draw(self.model.borrow().grid(), surface);
    }

    /// Call once per frame while the console is closed.
    pub fn handle_event(&self, mouse: &MouseInfo, keyboard: &KeyboardInfo) -> FrameStatus {
        let mut model = self.model.borrow_mut();

        let (row, column) = self
            .view
            .cell_at(model.grid(), mouse.position)
            .unwrap_or((-1, -1));
        let valid_index = model.is_valid_index(row, column);

        // First match wins
        if mouse.left_click && valid_index {
            debug!(row, column, x = mouse.position.x, y = mouse.position.y, "clicked on cell");
            model.toggle_cell(row as usize, column as usize);
        } else if mouse.right_click && valid_index {
            model.clear_grid();
            model.clear_history();
        } else if mouse.left_held && valid_index {
            model.toggle_cell(row as usize, column as usize);
        } else if mouse.left_up {
            model.reset_memory();
        }

        if keyboard.repeating(Key::Space) {
            model.next_generation();
        }

        if keyboard.repeating(Key::R) && model.undo() {
            debug!(history = model.history().len(), "went back one generation");
        }

        FrameStatus {
            row,
            column,
            generation: model.generation(),
            history_len: model.history().len(),
            history_limit: model.history().limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use egui::{Pos2, Rect, pos2, vec2};

    use super::*;
    use crate::grid::Cell;
    use crate::input::{InputEvent, MouseButton};
    use crate::model::GridModel;
    use crate::view::tests::Recorder;

    fn controller(width: usize, height: usize) -> GridController {
        let model = GridModel::new(width, height, 50).into_shared();
        // 10px cells
        let view = GridView::new(Rect::from_min_size(
            Pos2::ZERO,
            vec2(width as f32 * 10.0, height as f32 * 10.0),
        ));
        GridController::new(model, view)
    }

    fn center(row: usize, column: usize) -> Pos2 {
        pos2(row as f32 * 10.0 + 5.0, column as f32 * 10.0 + 5.0)
    }

    #[test]
    fn click_outside_grid_is_ignored() {
        let controller = controller(3, 3);
        let mut mouse = MouseInfo::default();
        mouse.update(&[
            InputEvent::PointerMoved(pos2(500.0, 5.0)),
            InputEvent::ButtonDown(MouseButton::Left),
        ]);
        let status = controller.handle_event(&mouse, &KeyboardInfo::default());
        assert_eq!(controller.model().borrow().live_count(), 0);
        assert_eq!((status.row, status.column), (50, 0));
    }

    #[test]
    fn drag_paints_with_stroke_color() {
        let controller = controller(5, 5);
        controller.model().borrow_mut().toggle_cell(2, 0);
        controller.model().borrow_mut().reset_memory();

        let keyboard = KeyboardInfo::default();
        let mut mouse = MouseInfo::default();
        mouse.update(&[
            InputEvent::PointerMoved(center(0, 0)),
            InputEvent::ButtonDown(MouseButton::Left),
        ]);
        controller.handle_event(&mouse, &keyboard);

        for row in 1..5 {
            mouse.update(&[InputEvent::PointerMoved(center(row, 0))]);
            controller.handle_event(&mouse, &keyboard);
        }
        mouse.update(&[InputEvent::ButtonUp(MouseButton::Left)]);
        controller.handle_event(&mouse, &keyboard);

        let model = controller.model().borrow();
        assert!((0..5).all(|row| model.grid().get(row, 0) == Cell::Alive));
        assert!(model.stroke().active_color.is_none());
    }

    #[test]
    fn release_outside_grid_still_ends_stroke() {
        let controller = controller(3, 3);
        let keyboard = KeyboardInfo::default();
        let mut mouse = MouseInfo::default();
        mouse.update(&[
            InputEvent::PointerMoved(center(1, 1)),
            InputEvent::ButtonDown(MouseButton::Left),
        ]);
        controller.handle_event(&mouse, &keyboard);
        mouse.update(&[
            InputEvent::PointerMoved(pos2(-40.0, -40.0)),
            InputEvent::ButtonUp(MouseButton::Left),
        ]);
        controller.handle_event(&mouse, &keyboard);
        assert!(controller.model().borrow().stroke().active_color.is_none());
    }

    #[test]
    fn right_click_clears_grid_and_history() {
        let controller = controller(3, 3);
        {
            let mut model = controller.model().borrow_mut();
            model.toggle_cell(0, 1);
            model.toggle_cell(1, 1);
            model.toggle_cell(2, 1);
            model.reset_memory();
            model.next_generation();
            assert_eq!(model.history().len(), 1);
        }
        let mut mouse = MouseInfo::default();
        mouse.update(&[
            InputEvent::PointerMoved(center(2, 2)),
            InputEvent::ButtonDown(MouseButton::Right),
        ]);
        let status = controller.handle_event(&mouse, &KeyboardInfo::default());
        assert_eq!(controller.model().borrow().live_count(), 0);
        assert_eq!(status.history_len, 0);
    }

    #[test]
    fn space_steps_and_r_undoes() {
        let controller = controller(3, 3);
        controller.model().borrow_mut().toggle_cell(1, 1);
        let mouse = MouseInfo::default();
        let start = Instant::now();

        let mut keyboard = KeyboardInfo::default();
        keyboard.update(&[InputEvent::KeyDown(Key::Space)], start);
        let status = controller.handle_event(&mouse, &keyboard);
        assert_eq!(controller.model().borrow().live_count(), 0);
        assert_eq!(status.history_len, 1);
        assert_eq!(status.generation, 1);

        // Held under the delay: no second step.
        keyboard.update(&[], start + Duration::from_millis(100));
        let status = controller.handle_event(&mouse, &keyboard);
        assert_eq!(status.history_len, 1);

        keyboard.update(
            &[InputEvent::KeyUp(Key::Space), InputEvent::KeyDown(Key::R)],
            start + Duration::from_millis(120),
        );
        let status = controller.handle_event(&mouse, &keyboard);
        assert_eq!(status.history_len, 0);
        assert_eq!(controller.model().borrow().grid().get(1, 1), Cell::Alive);
    }

    #[test]
    fn status_renders_as_title() {
        let status = FrameStatus {
            row: 3,
            column: 7,
            generation: 2,
            history_len: 2,
            history_limit: 500,
        };
        assert_eq!(status.to_string(), "Game of Life  (x=3, y=7 - history: 2/500)");
    }

    #[test]
    fn draw_reads_model() {
        let controller = controller(2, 2);
        controller.model().borrow_mut().toggle_cell(0, 0);
        let mut recorder = Recorder::default();
        controller.draw(&mut recorder);
        assert!(!recorder.ops.is_empty());
    }
}
