use glam::Vec2;
use rustc_hash::FxHashSet;

use super::event::MouseButton;
use super::keyboard::Key;

/// Live state of keyboard and mouse.
///
/// Mouse positions are stored in handed screen coordinates: top-down for
/// left-handed cameras, bottom-up for right-handed ones. The caller does the
/// conversion since it knows the viewport height.
#[derive(Debug, Clone, Default)]
pub struct InputDeviceState {
    keys: FxHashSet<Key>,
    buttons: FxHashSet<MouseButton>,
    mouse: Vec2,
    anchor: Vec2,
}

impl InputDeviceState {
    /// All keys and buttons released, mouse at the screen origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns `false` if the key was already down.
    pub fn press_key(&mut self, key: Key) -> bool {
        self.keys.insert(key)
    }

    /// Record a key release. Returns `false` if the key was not down.
    pub fn release_key(&mut self, key: Key) -> bool {
        self.keys.remove(&key)
    }

    /// Whether exactly `key` is down.
    #[must_use]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    /// Whether any held key matches one of `keys`, ignoring letter case.
    #[must_use]
    pub fn any_down(&self, keys: &[Key]) -> bool {
        self.keys
            .iter()
            .any(|held| keys.iter().any(|key| key.matches(*held)))
    }

    /// Whether any key at all is held.
    #[must_use]
    pub fn any_key_down(&self) -> bool {
        !self.keys.is_empty()
    }

    /// Record a button press at `position`. Only the left button starts a
    /// new drag anchor. Returns `false` if the button was already down.
    pub fn press_button(
        &mut self,
        button: MouseButton,
        position: Vec2,
    ) -> bool {
        self.mouse = position;
        if button == MouseButton::Left {
            self.anchor = position;
        }
        self.buttons.insert(button)
    }

    /// Record a button release. Returns `false` if it was not down.
    pub fn release_button(&mut self, button: MouseButton) -> bool {
        self.buttons.remove(&button)
    }

    /// Whether `button` is held.
    #[must_use]
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    /// Whether any button is held, so cursor motion is a drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        !self.buttons.is_empty()
    }

    /// Move the cursor, returning its previous position.
    pub fn move_mouse(&mut self, position: Vec2) -> Vec2 {
        std::mem::replace(&mut self.mouse, position)
    }

    /// Last known cursor position.
    #[must_use]
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse
    }

    /// Where the current (or last) drag started.
    #[must_use]
    pub fn drag_anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Distance from the cursor back to the drag anchor (`anchor - cursor`).
    #[must_use]
    pub fn drag_delta(&self) -> Vec2 {
        self.anchor - self.mouse
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keyboard::SpecialKey;

    #[test]
    fn repeated_presses_are_deduplicated() {
        let mut input = InputDeviceState::new();
        assert!(input.press_key(Key::Char('w')));
        assert!(!input.press_key(Key::Char('w')));
        assert!(input.release_key(Key::Char('w')));
        assert!(!input.release_key(Key::Char('w')));
        assert!(!input.any_key_down());
    }

    #[test]
    fn any_down_folds_case() {
        let mut input = InputDeviceState::new();
        let _ = input.press_key(Key::Char('W'));
        let bound = [Key::Char('w'), Key::Special(SpecialKey::Up)];
        assert!(input.any_down(&bound));
        assert!(!input.any_down(&[Key::Char('s')]));
        assert!(input.is_key_down(Key::Char('W')));
        assert!(!input.is_key_down(Key::Char('w')));
    }

    #[test]
    fn drag_delta_tracks_anchor() {
        let mut input = InputDeviceState::new();
        assert!(!input.is_dragging());
        let _ = input.press_button(MouseButton::Left, Vec2::new(10.0, 20.0));
        assert!(input.is_dragging());

        let previous = input.move_mouse(Vec2::new(4.0, 25.0));
        assert_eq!(previous, Vec2::new(10.0, 20.0));
        assert_eq!(input.drag_delta(), Vec2::new(6.0, -5.0));

        let _ = input.release_button(MouseButton::Left);
        assert!(!input.is_dragging());
        assert_eq!(input.drag_anchor(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn only_left_button_sets_drag_anchor() {
        let mut input = InputDeviceState::new();
        let _ = input.press_button(MouseButton::Left, Vec2::new(10.0, 20.0));
        let _ = input.release_button(MouseButton::Left);

        let _ = input.press_button(MouseButton::Right, Vec2::new(50.0, 60.0));
        assert!(input.is_dragging());
        assert_eq!(input.drag_anchor(), Vec2::new(10.0, 20.0));
        assert_eq!(input.mouse_position(), Vec2::new(50.0, 60.0));
    }
}
