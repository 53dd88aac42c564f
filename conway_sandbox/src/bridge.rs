// bridge.rs - egui events to sandbox input batches

use conway::{InputEvent, Key, MouseButton, WheelDirection};

/// Characters that toggle the console. egui only reports them as text.
const CONSOLE_TOGGLE_CHARS: [char; 2] = ['`', '²'];

/// Collects translated events between logical frames.
///
/// A key released in the same batch it was pressed in has its key-up held
/// back to the start of the following batch, so the press is seen as a
/// click for one frame. The console toggle arrives as text and gets a
/// synthetic press and release.
#[derive(Debug, Default)]
pub struct EventBridge {
    pending: Vec<InputEvent>,
    deferred: Vec<InputEvent>,
}

impl EventBridge {
    pub fn translate(&mut self, event: &egui::Event) {
        match event {
            egui::Event::PointerMoved(position) => {
                self.pending.push(InputEvent::PointerMoved(*position));
            }
            egui::Event::PointerButton { pos, button, pressed, .. } => {
                let button = match button {
                    egui::PointerButton::Primary => MouseButton::Left,
                    egui::PointerButton::Secondary => MouseButton::Right,
                    egui::PointerButton::Middle => MouseButton::Middle,
                    _ => return,
                };
                self.pending.push(InputEvent::PointerMoved(*pos));
                self.pending.push(if *pressed {
                    InputEvent::ButtonDown(button)
                } else {
                    InputEvent::ButtonUp(button)
                });
            }
            egui::Event::Scroll(delta) if delta.y != 0.0 => {
                let direction = if delta.y > 0.0 { WheelDirection::Up } else { WheelDirection::Down };
                self.pending.push(InputEvent::Wheel(direction));
            }
            egui::Event::Key { key, pressed, .. } => {
                if let Some(key) = map_key(*key) {
                    self.pending.push(if *pressed {
                        InputEvent::KeyDown(key)
                    } else {
                        InputEvent::KeyUp(key)
                    });
                }
            }
            egui::Event::Text(text) => {
                let typed: String = text.chars().filter(|c| !CONSOLE_TOGGLE_CHARS.contains(c)).collect();
                if typed.len() != text.len() {
                    self.pending.push(InputEvent::KeyDown(Key::Grave));
                    self.pending.push(InputEvent::KeyUp(Key::Grave));
                }
                if !typed.is_empty() {
                    self.pending.push(InputEvent::Text(typed));
                }
            }
            _ => {}
        }
    }

    /// Takes everything gathered since the last drain as one frame's batch.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        let mut incoming = std::mem::take(&mut self.deferred);
        incoming.append(&mut self.pending);

        let mut pressed_here = [false; Key::COUNT];
        let mut batch = Vec::with_capacity(incoming.len());
        for event in incoming {
            match event {
                InputEvent::KeyDown(key) => pressed_here[key.index()] = true,
                InputEvent::KeyUp(key) if pressed_here[key.index()] => {
                    self.deferred.push(event);
                    continue;
                }
                _ => {}
            }
            batch.push(event);
        }
        batch
    }
}

fn map_key(key: egui::Key) -> Option<Key> {
    match key {
        egui::Key::Space => Some(Key::Space),
        egui::Key::R => Some(Key::R),
        egui::Key::Enter => Some(Key::Enter),
        egui::Key::Backspace => Some(Key::Backspace),
        egui::Key::Escape => Some(Key::Escape),
        _ => None,
    }
}
