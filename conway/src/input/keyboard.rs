use std::time::{Duration, Instant};

use super::events::{InputEvent, Key};

/// How long a key must stay down before it counts as hard-held.
pub const DELAY_HARD_HELD: Duration = Duration::from_millis(150);

/// Per-key click / soft-held / hard-held state, indexed by [`Key::index`].
///
/// * `click`: true only on the frame the key went down.
/// * `soft_held`: true for as long as the key is physically down.
/// * `hard_held`: true once the soft hold has lasted past the delay.
#[derive(Debug, Clone)]
pub struct KeyboardInfo {
    click: [bool; Key::COUNT],
    soft_held: [bool; Key::COUNT],
    hard_held: [bool; Key::COUNT],
    pressed_at: [Option<Instant>; Key::COUNT],
    delay_hard_held: Duration,
}

impl Default for KeyboardInfo {
    fn default() -> Self {
        Self::with_delay(DELAY_HARD_HELD)
    }
}

impl KeyboardInfo {
    pub fn with_delay(delay_hard_held: Duration) -> Self {
        Self {
            click: [false; Key::COUNT],
            soft_held: [false; Key::COUNT],
            hard_held: [false; Key::COUNT],
            pressed_at: [None; Key::COUNT],
            delay_hard_held,
        }
    }

    pub fn click(&self, key: Key) -> bool {
        self.click[key.index()]
    }

    pub fn soft_held(&self, key: Key) -> bool {
        self.soft_held[key.index()]
    }

    pub fn hard_held(&self, key: Key) -> bool {
        self.hard_held[key.index()]
    }

    /// Click or hard hold: fires once on press, then every frame after
    /// the hold delay.
    pub fn repeating(&self, key: Key) -> bool {
        self.click(key) || self.hard_held(key)
    }

    /// Folds one frame's batch in. `now` is a monotonic timestamp so the
    /// hard-hold threshold does not depend on the frame rate.
    pub fn update(&mut self, events: &[InputEvent], now: Instant) {
        // Keys held from an earlier frame lose their click and may
        // graduate to a hard hold.
        for key in Key::ALL {
            let index = key.index();
            if !self.soft_held[index] {
                continue;
            }
            self.click[index] = false;

            let held_for = self.pressed_at[index].map(|at| now.saturating_duration_since(at));
            if held_for.is_some_and(|held_for| held_for > self.delay_hard_held) {
                self.hard_held[index] = true;
            }
        }

        for event in events {
            match *event {
                InputEvent::KeyDown(key) => {
                    let index = key.index();
                    if !self.soft_held[index] {
                        self.click[index] = true;
                        self.soft_held[index] = true;
                        self.pressed_at[index] = Some(now);
                    }
                }
                InputEvent::KeyUp(key) => {
                    let index = key.index();
                    self.click[index] = false;
                    self.soft_held[index] = false;
                    self.hard_held[index] = false;
                    self.pressed_at[index] = None;
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_only_on_press_frame() {
        let start = Instant::now();
        let mut keys = KeyboardInfo::default();

        keys.update(&[InputEvent::KeyDown(Key::Space)], start);
        assert!(keys.click(Key::Space));
        assert!(keys.soft_held(Key::Space));
        assert!(!keys.hard_held(Key::Space));

        // OS auto-repeat delivers more downs; they must not re-click.
        keys.update(&[InputEvent::KeyDown(Key::Space)], start + Duration::from_millis(30));
        assert!(!keys.click(Key::Space));
        assert!(keys.soft_held(Key::Space));
    }

    #[test]
    fn hard_hold_after_delay() {
        let start = Instant::now();
        let mut keys = KeyboardInfo::default();
        keys.update(&[InputEvent::KeyDown(Key::R)], start);

        keys.update(&[], start + Duration::from_millis(150));
        assert!(!keys.hard_held(Key::R));

        keys.update(&[], start + Duration::from_millis(151));
        assert!(keys.hard_held(Key::R));
        assert!(keys.repeating(Key::R));
    }

    #[test]
    fn release_clears_everything() {
        let start = Instant::now();
        let mut keys = KeyboardInfo::default();
        keys.update(&[InputEvent::KeyDown(Key::Space)], start);
        keys.update(&[], start + Duration::from_secs(1));
        assert!(keys.hard_held(Key::Space));

        keys.update(&[InputEvent::KeyUp(Key::Space)], start + Duration::from_secs(2));
        assert!(!keys.click(Key::Space));
        assert!(!keys.soft_held(Key::Space));
        assert!(!keys.hard_held(Key::Space));
        assert!(!keys.repeating(Key::Space));
    }

    #[test]
    fn keys_are_independent() {
        let start = Instant::now();
        let mut keys = KeyboardInfo::default();
        keys.update(&[InputEvent::KeyDown(Key::Space), InputEvent::KeyDown(Key::Grave)], start);
        keys.update(&[InputEvent::KeyUp(Key::Grave)], start);
        assert!(keys.soft_held(Key::Space));
        assert!(!keys.soft_held(Key::Grave));
        assert!(!keys.click(Key::R));
    }
}
