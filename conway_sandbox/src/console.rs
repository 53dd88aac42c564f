// console.rs - Drop-down command console over the grid

use std::collections::VecDeque;

use conway::{InputEvent, Key, KeyboardInfo, SharedModel};
use egui::{Align2, Color32, FontId, Painter, Rect, pos2};
use tracing::{info, warn};

use crate::commands;
use crate::pacing::SharedFps;
use crate::text_input::TextInput;

pub const DEFAULT_HISTORY_LIMIT: usize = 30;
const FONT_SIZE: f32 = 20.0;
const PADDING: f32 = 20.0;

/// Command console. Holds the model and fps handles it was built with
/// and a bounded scroll-back of echoed commands and their output.
pub struct Console {
    input: TextInput,
    active: bool,
    history: VecDeque<String>,
    history_limit: usize,
    model: SharedModel,
    fps: SharedFps,
}

impl Console {
    pub fn new(model: SharedModel, fps: SharedFps, history_limit: usize) -> Self {
        Self {
            input: TextInput::default(),
            active: false,
            history: VecDeque::new(),
            history_limit,
            model,
            fps,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn input_text(&self) -> &str {
        self.input.text()
    }

    pub fn history(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    pub fn handle_event(&mut self, keyboard: &KeyboardInfo, events: &[InputEvent]) {
        // The grave key toggles, like a game console.
        if keyboard.click(Key::Grave) {
            self.set_active(!self.active);
            return;
        }
        if !self.active {
            return;
        }
        if keyboard.click(Key::Escape) {
            self.set_active(false);
            return;
        }

        for event in events {
            if let InputEvent::Text(typed) = event {
                self.input.push_str(typed);
            }
        }
        if keyboard.repeating(Key::Backspace) {
            self.input.backspace();
        }
        if keyboard.click(Key::Enter) {
            let line = self.input.take();
            self.submit(&line);
        }
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
        if active {
            // The grid stops seeing input; end any stroke in progress.
            self.model.borrow_mut().reset_memory();
        }
        info!(active, "console toggled");
    }

    /// Runs one line and records it with its output.
    pub fn submit(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        self.push_line(format!("> {line}"));

        let result = commands::parse(line).and_then(|command| match command {
            Some(command) => commands::execute(command, &mut self.model.borrow_mut(), &self.fps),
            None => Ok(String::new()),
        });
        let output = match result {
            Ok(output) => output,
            Err(error) => {
                warn!(%error, line, "console command rejected");
                error.to_string()
            }
        };
        for text in output.lines() {
            self.push_line(text.to_owned());
        }
    }

    fn push_line(&mut self, line: String) {
        if self.history_limit == 0 {
            return;
        }
        if self.history.len() == self.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(line);
    }

    /// Translucent overlay: the prompt on the bottom line, history above.
    pub fn draw(&self, painter: &Painter, region: Rect) {
        if !self.active {
            return;
        }
        painter.rect_filled(region, 0.0, Color32::from_black_alpha(200));

        let font = FontId::monospace(FONT_SIZE);
        let left = region.left() + PADDING;
        let prompt_y = region.bottom() - FONT_SIZE;
        painter.text(
            pos2(left, prompt_y),
            Align2::LEFT_BOTTOM,
            format!("> {}_", self.input.text()),
            font.clone(),
            Color32::WHITE,
        );

        for (index, line) in self.history().rev().enumerate() {
            let y = prompt_y - (index + 1) as f32 * FONT_SIZE;
            if y < region.top() {
                break;
            }
            painter.text(pos2(left, y), Align2::LEFT_BOTTOM, line, font.clone(), Color32::from_gray(220));
        }
    }
}
