//! Normalized key codes and the actions they can be bound to.
//!
//! Hosts deliver either typed [`Key`]s or raw numeric codes. Raw codes use
//! the classic layout: 0..=127 is ASCII, and non-printable keys are shifted
//! into 128..=255 so they never collide with a character.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Offset added to native special-key codes in the raw code space.
pub const SPECIAL_KEY_OFFSET: u32 = 128;

/// Function key number, always within F1..=F12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FunctionKey(u8);

impl FunctionKey {
    /// Highest function key with a raw code.
    pub const MAX: u8 = 12;

    /// Function key `n`, or `None` outside `1..=12`.
    #[must_use]
    pub const fn new(n: u8) -> Option<Self> {
        if matches!(n, 1..=FunctionKey::MAX) {
            Some(Self(n))
        } else {
            None
        }
    }

    /// The key's number, 1 for F1.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }
}

/// Non-printable keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKey {
    /// Function key F1..=F12.
    Function(FunctionKey),
    /// Left arrow.
    Left,
    /// Up arrow.
    Up,
    /// Right arrow.
    Right,
    /// Down arrow.
    Down,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Home.
    Home,
    /// End.
    End,
    /// Insert.
    Insert,
}

impl SpecialKey {
    /// Native code, before the [`SPECIAL_KEY_OFFSET`] shift.
    #[must_use]
    pub const fn native_code(self) -> u32 {
        match self {
            Self::Function(n) => n.number() as u32,
            Self::Left => 100,
            Self::Up => 101,
            Self::Right => 102,
            Self::Down => 103,
            Self::PageUp => 104,
            Self::PageDown => 105,
            Self::Home => 106,
            Self::End => 107,
            Self::Insert => 108,
        }
    }

    /// Inverse of [`native_code`](Self::native_code).
    #[must_use]
    pub const fn from_native_code(code: u32) -> Option<Self> {
        Some(match code {
            1..=12 => Self::Function(FunctionKey(code as u8)),
            100 => Self::Left,
            101 => Self::Up,
            102 => Self::Right,
            103 => Self::Down,
            104 => Self::PageUp,
            105 => Self::PageDown,
            106 => Self::Home,
            107 => Self::End,
            108 => Self::Insert,
            _ => return None,
        })
    }
}

/// A keyboard key: an ASCII character or a special key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    /// ASCII character, including control characters such as escape.
    Char(char),
    /// Non-printable key.
    Special(SpecialKey),
}

impl Key {
    /// Escape.
    pub const ESCAPE: Self = Self::Char('\u{1b}');
    /// Return / enter.
    pub const RETURN: Self = Self::Char('\r');
    /// Space bar.
    pub const SPACE: Self = Self::Char(' ');
    /// Delete.
    pub const DELETE: Self = Self::Char('\u{7f}');
    /// Tab.
    pub const TAB: Self = Self::Char('\t');
    /// Backspace.
    pub const BACKSPACE: Self = Self::Char('\u{8}');

    /// Decode a raw key code. Returns `None` for codes above 255 and for
    /// unmapped special codes.
    #[must_use]
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0..=127 => char::from_u32(code).map(Self::Char),
            128..=255 => {
                SpecialKey::from_native_code(code - SPECIAL_KEY_OFFSET)
                    .map(Self::Special)
            }
            _ => None,
        }
    }

    /// Raw key code of this key. Specials land in 128..=255.
    #[must_use]
    pub fn code(self) -> u32 {
        match self {
            Self::Char(c) => u32::from(c),
            Self::Special(special) => {
                special.native_code() + SPECIAL_KEY_OFFSET
            }
        }
    }

    /// Function key `n`, or `None` outside F1..=F12.
    #[must_use]
    pub const fn function(n: u8) -> Option<Self> {
        match FunctionKey::new(n) {
            Some(key) => Some(Self::Special(SpecialKey::Function(key))),
            None => None,
        }
    }

    /// ASCII character key, or `None` for non-ASCII input.
    #[must_use]
    pub fn char(c: char) -> Option<Self> {
        c.is_ascii().then_some(Self::Char(c))
    }

    /// Case-folded form used when matching key bindings.
    #[must_use]
    pub fn folded(self) -> Self {
        match self {
            Self::Char(c) => Self::Char(c.to_ascii_lowercase()),
            special @ Self::Special(_) => special,
        }
    }

    /// Whether `self` and `other` are the same key ignoring letter case.
    #[must_use]
    pub fn matches(self, other: Self) -> bool {
        self.folded() == other.folded()
    }
}

const NAMED_CHARS: [(&str, Key); 6] = [
    ("Escape", Key::ESCAPE),
    ("Return", Key::RETURN),
    ("Space", Key::SPACE),
    ("Delete", Key::DELETE),
    ("Tab", Key::TAB),
    ("Backspace", Key::BACKSPACE),
];

const NAMED_SPECIALS: [(&str, SpecialKey); 9] = [
    ("Left", SpecialKey::Left),
    ("Up", SpecialKey::Up),
    ("Right", SpecialKey::Right),
    ("Down", SpecialKey::Down),
    ("PageUp", SpecialKey::PageUp),
    ("PageDown", SpecialKey::PageDown),
    ("Home", SpecialKey::Home),
    ("End", SpecialKey::End),
    ("Insert", SpecialKey::Insert),
];

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some((name, _)) = NAMED_CHARS.iter().find(|(_, k)| k == self) {
            return f.write_str(name);
        }
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::Special(SpecialKey::Function(n)) => {
                write!(f, "F{}", n.number())
            }
            Self::Special(special) => {
                let name = NAMED_SPECIALS
                    .iter()
                    .find(|(_, s)| s == special)
                    .map_or("?", |(name, _)| name);
                f.write_str(name)
            }
        }
    }
}

/// Error returned when a key name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKeyError(String);

impl fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key name '{}'", self.0)
    }
}

impl std::error::Error for ParseKeyError {}

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::char(c).ok_or_else(|| ParseKeyError(s.to_owned()));
        }
        if let Some((_, key)) = NAMED_CHARS.iter().find(|(n, _)| *n == s) {
            return Ok(*key);
        }
        if let Some((_, special)) = NAMED_SPECIALS.iter().find(|(n, _)| *n == s)
        {
            return Ok(Self::Special(*special));
        }
        s.strip_prefix('F')
            .and_then(|n| n.parse::<u8>().ok())
            .and_then(Self::function)
            .ok_or_else(|| ParseKeyError(s.to_owned()))
    }
}

impl TryFrom<String> for Key {
    type Error = ParseKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

#[cfg(feature = "viewer")]
impl Key {
    /// Convert a winit logical key. Returns `None` for keys the shell has no
    /// code for.
    #[must_use]
    pub fn from_winit(key: &winit::keyboard::Key) -> Option<Self> {
        use winit::keyboard::{Key as WinitKey, NamedKey};

        match key {
            WinitKey::Character(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::char(c),
                    _ => None,
                }
            }
            WinitKey::Named(named) => Some(match named {
                NamedKey::Escape => Self::ESCAPE,
                NamedKey::Enter => Self::RETURN,
                NamedKey::Space => Self::SPACE,
                NamedKey::Delete => Self::DELETE,
                NamedKey::Tab => Self::TAB,
                NamedKey::Backspace => Self::BACKSPACE,
                NamedKey::ArrowLeft => Self::Special(SpecialKey::Left),
                NamedKey::ArrowUp => Self::Special(SpecialKey::Up),
                NamedKey::ArrowRight => Self::Special(SpecialKey::Right),
                NamedKey::ArrowDown => Self::Special(SpecialKey::Down),
                NamedKey::PageUp => Self::Special(SpecialKey::PageUp),
                NamedKey::PageDown => Self::Special(SpecialKey::PageDown),
                NamedKey::Home => Self::Special(SpecialKey::Home),
                NamedKey::End => Self::Special(SpecialKey::End),
                NamedKey::Insert => Self::Special(SpecialKey::Insert),
                NamedKey::F1 => return Self::function(1),
                NamedKey::F2 => return Self::function(2),
                NamedKey::F3 => return Self::function(3),
                NamedKey::F4 => return Self::function(4),
                NamedKey::F5 => return Self::function(5),
                NamedKey::F6 => return Self::function(6),
                NamedKey::F7 => return Self::function(7),
                NamedKey::F8 => return Self::function(8),
                NamedKey::F9 => return Self::function(9),
                NamedKey::F10 => return Self::function(10),
                NamedKey::F11 => return Self::function(11),
                NamedKey::F12 => return Self::function(12),
                _ => return None,
            }),
            _ => None,
        }
    }
}

/// Shell actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = ["w", "Up"]
/// cycle_mode = ["p"]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Walk toward the facing direction while held.
    MoveForward,
    /// Walk away from the facing direction while held.
    MoveBackward,
    /// Strafe left while held.
    StrafeLeft,
    /// Strafe right while held.
    StrafeRight,
    /// Raise the origin while held.
    Rise,
    /// Lower the origin while held.
    Sink,
    /// Zoom in while held.
    ZoomIn,
    /// Zoom out while held.
    ZoomOut,
    /// Ask the host to exit.
    Quit,
    /// Toggle fullscreen.
    ToggleFullscreen,
    /// Advance to the next perspective mode.
    CycleMode,
    /// Increase the field of view one step.
    WidenFov,
    /// Decrease the field of view one step.
    NarrowFov,
    /// Toggle the ground overlay.
    ToggleGround,
    /// Toggle the grid overlay.
    ToggleGrid,
}

impl KeyAction {
    /// Every action, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::MoveForward,
        Self::MoveBackward,
        Self::StrafeLeft,
        Self::StrafeRight,
        Self::Rise,
        Self::Sink,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::Quit,
        Self::ToggleFullscreen,
        Self::CycleMode,
        Self::WidenFov,
        Self::NarrowFov,
        Self::ToggleGround,
        Self::ToggleGrid,
    ];

    /// Whether the action applies continuously each tick while its key is
    /// down, rather than once on press.
    #[must_use]
    pub const fn is_held(self) -> bool {
        matches!(
            self,
            Self::MoveForward
                | Self::MoveBackward
                | Self::StrafeLeft
                | Self::StrafeRight
                | Self::Rise
                | Self::Sink
                | Self::ZoomIn
                | Self::ZoomOut
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_codes_round_trip() {
        for code in 0..=255 {
            if let Some(key) = Key::from_code(code) {
                assert_eq!(key.code(), code);
            }
        }
        assert_eq!(
            Key::from_code(101 + SPECIAL_KEY_OFFSET),
            Some(Key::Special(SpecialKey::Up))
        );
        assert_eq!(Key::from_code(u32::from(b'w')), Some(Key::Char('w')));
    }

    #[test]
    fn out_of_range_codes_are_rejected() {
        assert_eq!(Key::from_code(256), None);
        assert_eq!(Key::from_code(10_000), None);
        // 128 + 50 is not a mapped special key
        assert_eq!(Key::from_code(178), None);
    }

    #[test]
    fn names_parse_and_print() {
        for name in ["w", "+", "Escape", "Space", "Up", "PageDown", "F5"] {
            let key: Key = name.parse().unwrap();
            assert_eq!(key.to_string(), name);
        }
        assert!("F13".parse::<Key>().is_err());
        assert!("Banana".parse::<Key>().is_err());
        assert!("é".parse::<Key>().is_err());
    }

    #[test]
    fn every_function_key_survives_code_and_name() {
        for n in 0..=u8::MAX {
            let Some(key) = Key::function(n) else {
                assert!(n == 0 || n > FunctionKey::MAX);
                continue;
            };
            assert_eq!(Key::from_code(key.code()), Some(key));
            assert_eq!(key.to_string().parse::<Key>(), Ok(key));
        }
        assert_eq!(FunctionKey::new(13), None);
    }

    #[test]
    fn matching_ignores_letter_case() {
        assert!(Key::Char('W').matches(Key::Char('w')));
        assert!(!Key::Char('+').matches(Key::Char('=')));
        let up = Key::Special(SpecialKey::Up);
        assert!(up.matches(up));
    }

    #[test]
    fn movement_and_zoom_are_held_actions() {
        assert!(KeyAction::MoveForward.is_held());
        assert!(KeyAction::ZoomOut.is_held());
        assert!(!KeyAction::CycleMode.is_held());
        assert!(!KeyAction::Quit.is_held());
    }
}
