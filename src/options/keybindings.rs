use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::{InputDeviceState, Key, KeyAction, SpecialKey};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to keys.
///
/// Letter keys match regardless of case, so binding `"w"` also answers to
/// `W`.
pub struct KeybindingOptions {
    /// Maps action → keys (e.g. `MoveForward` → `["w", "Up"]`).
    pub bindings: HashMap<KeyAction, Vec<Key>>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let arrow = Key::Special;
        let bindings = HashMap::from([
            (
                KeyAction::MoveForward,
                vec![Key::Char('w'), arrow(SpecialKey::Up)],
            ),
            (
                KeyAction::MoveBackward,
                vec![Key::Char('s'), arrow(SpecialKey::Down)],
            ),
            (
                KeyAction::StrafeLeft,
                vec![Key::Char('a'), arrow(SpecialKey::Left)],
            ),
            (
                KeyAction::StrafeRight,
                vec![Key::Char('d'), arrow(SpecialKey::Right)],
            ),
            (KeyAction::Rise, vec![Key::Char('q')]),
            (KeyAction::Sink, vec![Key::Char('z')]),
            (KeyAction::ZoomIn, vec![Key::Char('+'), Key::Char('=')]),
            (KeyAction::ZoomOut, vec![Key::Char('-'), Key::Char('_')]),
            (KeyAction::Quit, vec![Key::ESCAPE]),
            (KeyAction::ToggleFullscreen, vec![Key::Char('f')]),
            (KeyAction::CycleMode, vec![Key::Char('p')]),
            (KeyAction::WidenFov, vec![Key::Char('.')]),
            (KeyAction::NarrowFov, vec![Key::Char(',')]),
            (KeyAction::ToggleGround, vec![Key::Char('g')]),
            (KeyAction::ToggleGrid, vec![Key::Char('x')]),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Keys bound to `action` (empty if unbound).
    #[must_use]
    pub fn keys(&self, action: KeyAction) -> &[Key] {
        self.bindings.get(&action).map_or(&[], Vec::as_slice)
    }

    /// The discrete (press-once) action bound to `key`, if any.
    ///
    /// Actions are searched in declaration order so a key bound twice
    /// resolves the same way every time.
    #[must_use]
    pub fn lookup(&self, key: Key) -> Option<KeyAction> {
        KeyAction::ALL.into_iter().find(|action| {
            !action.is_held()
                && self.keys(*action).iter().any(|k| k.matches(key))
        })
    }

    /// Whether a key bound to the held `action` is currently down.
    #[must_use]
    pub fn is_held(&self, action: KeyAction, input: &InputDeviceState) -> bool {
        input.any_down(self.keys(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_discrete_actions_only() {
        let kb = KeybindingOptions::default();
        assert_eq!(kb.lookup(Key::Char('p')), Some(KeyAction::CycleMode));
        assert_eq!(kb.lookup(Key::Char('P')), Some(KeyAction::CycleMode));
        assert_eq!(kb.lookup(Key::ESCAPE), Some(KeyAction::Quit));
        // movement keys are held actions, not shortcuts
        assert_eq!(kb.lookup(Key::Char('w')), None);
        assert_eq!(kb.lookup(Key::Char('k')), None);
    }

    #[test]
    fn held_actions_follow_input_state() {
        let kb = KeybindingOptions::default();
        let mut input = InputDeviceState::new();
        assert!(!kb.is_held(KeyAction::MoveForward, &input));

        let _ = input.press_key(Key::Special(SpecialKey::Up));
        assert!(kb.is_held(KeyAction::MoveForward, &input));
        assert!(!kb.is_held(KeyAction::MoveBackward, &input));
    }

    #[test]
    fn unbound_action_has_no_keys() {
        let mut kb = KeybindingOptions::default();
        let _ = kb.bindings.remove(&KeyAction::Rise);
        assert!(kb.keys(KeyAction::Rise).is_empty());
    }
}
