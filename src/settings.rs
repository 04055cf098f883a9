//! Feature toggles that gate the shell's built-in input handling and
//! orientation overlays.
//!
//! Flags are independent: any subset is valid and no flag implies another.
//! They serialize as a list of snake_case names so TOML presets stay
//! readable:
//!
//! ```toml
//! settings = ["mouse_look", "keyboard_zoom", "show_grid"]
//! ```

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single named feature flag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SettingFlag {
    /// Dragging the mouse rotates (or pans) the camera.
    MouseLook,
    /// Movement keys walk the camera origin.
    KeyboardMove,
    /// Zoom keys change FOV, polar distance or the ortho window.
    KeyboardZoom,
    /// Function shortcuts (quit, fullscreen, cycle mode, FOV, overlays).
    KeyboardFunctions,
    /// Checkerboard ground plane under the camera.
    ShowGround,
    /// Repeating 3D axes grid around the camera.
    ShowGrid,
}

impl SettingFlag {
    /// Every flag, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::MouseLook,
        Self::KeyboardMove,
        Self::KeyboardZoom,
        Self::KeyboardFunctions,
        Self::ShowGround,
        Self::ShowGrid,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for SettingFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MouseLook => "mouse look",
            Self::KeyboardMove => "keyboard move",
            Self::KeyboardZoom => "keyboard zoom",
            Self::KeyboardFunctions => "keyboard functions",
            Self::ShowGround => "ground overlay",
            Self::ShowGrid => "grid overlay",
        };
        f.write_str(name)
    }
}

/// Set of enabled [`SettingFlag`]s.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<SettingFlag>", into = "Vec<SettingFlag>")]
pub struct SettingsFlags {
    bits: u8,
}

impl SettingsFlags {
    /// No flags enabled.
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Every flag enabled.
    #[must_use]
    pub fn all() -> Self {
        SettingFlag::ALL.into_iter().collect()
    }

    /// Whether `flag` is enabled.
    #[must_use]
    pub const fn contains(self, flag: SettingFlag) -> bool {
        self.bits & flag.bit() != 0
    }

    /// Whether no flag is enabled.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Enable `flag`.
    pub fn insert(&mut self, flag: SettingFlag) {
        self.bits |= flag.bit();
    }

    /// Disable `flag`.
    pub fn remove(&mut self, flag: SettingFlag) {
        self.bits &= !flag.bit();
    }

    /// Enable or disable `flag`.
    pub fn set(&mut self, flag: SettingFlag, enabled: bool) {
        if enabled {
            self.insert(flag);
        } else {
            self.remove(flag);
        }
    }

    /// Flip `flag` and return its new state.
    pub fn toggle(&mut self, flag: SettingFlag) -> bool {
        self.bits ^= flag.bit();
        self.contains(flag)
    }

    /// Iterate over the enabled flags in declaration order.
    pub fn iter(self) -> impl Iterator<Item = SettingFlag> {
        SettingFlag::ALL
            .into_iter()
            .filter(move |flag| self.contains(*flag))
    }
}

impl Default for SettingsFlags {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Debug for SettingsFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<SettingFlag> for SettingsFlags {
    fn from_iter<I: IntoIterator<Item = SettingFlag>>(iter: I) -> Self {
        let mut flags = Self::empty();
        for flag in iter {
            flags.insert(flag);
        }
        flags
    }
}

impl From<Vec<SettingFlag>> for SettingsFlags {
    fn from(flags: Vec<SettingFlag>) -> Self {
        flags.into_iter().collect()
    }
}

impl From<SettingsFlags> for Vec<SettingFlag> {
    fn from(flags: SettingsFlags) -> Self {
        flags.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_everything() {
        let flags = SettingsFlags::default();
        for flag in SettingFlag::ALL {
            assert!(flags.contains(flag), "{flag} should be on");
        }
    }

    #[test]
    fn toggling_twice_is_identity() {
        for start in [SettingsFlags::all(), SettingsFlags::empty()] {
            for flag in SettingFlag::ALL {
                let mut flags = start;
                let _ = flags.toggle(flag);
                assert_ne!(flags, start);
                let _ = flags.toggle(flag);
                assert_eq!(flags, start);
            }
        }
    }

    #[test]
    fn set_and_remove_are_independent() {
        let mut flags = SettingsFlags::empty();
        flags.set(SettingFlag::ShowGrid, true);
        flags.set(SettingFlag::MouseLook, true);
        flags.remove(SettingFlag::ShowGrid);

        assert!(flags.contains(SettingFlag::MouseLook));
        assert!(!flags.contains(SettingFlag::ShowGrid));
        assert_eq!(flags.iter().count(), 1);
    }

    #[test]
    fn serializes_as_name_list() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            settings: SettingsFlags,
        }

        let flags: SettingsFlags =
            [SettingFlag::KeyboardZoom, SettingFlag::ShowGround]
                .into_iter()
                .collect();
        let text = toml::to_string(&Wrapper { settings: flags }).unwrap();
        assert!(text.contains("keyboard_zoom"));
        assert!(text.contains("show_ground"));

        let parsed: Wrapper = toml::from_str(&text).unwrap();
        assert_eq!(parsed.settings, flags);
    }
}
