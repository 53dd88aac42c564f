use egui::Pos2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelDirection {
    Up,
    Down,
}

/// Closed set of keys the sandbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Step / auto-step a generation.
    Space,
    /// Undo one generation.
    R,
    /// Opens and closes the console (the `` ` `` / `²` key).
    Grave,
    Enter,
    Backspace,
    Escape,
}

impl Key {
    pub const COUNT: usize = 6;

    pub const ALL: [Key; Key::COUNT] = [
        Key::Space,
        Key::R,
        Key::Grave,
        Key::Enter,
        Key::Backspace,
        Key::Escape,
    ];

    /// Dense index into fixed-size key tables.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One raw event, in arrival order within a frame's batch.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMoved(Pos2),
    ButtonDown(MouseButton),
    ButtonUp(MouseButton),
    Wheel(WheelDirection),
    KeyDown(Key),
    KeyUp(Key),
    /// Committed text, for the console's text entry.
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_indices_are_dense() {
        for (expected, key) in Key::ALL.iter().enumerate() {
            assert_eq!(key.index(), expected);
        }
    }
}
