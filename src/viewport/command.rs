//! The viewer's command vocabulary.
//!
//! Every state change a key shortcut, host or client can ask for is a
//! `ViewCommand`. Callers construct commands and pass them to
//! [`ViewState::execute`](super::ViewState::execute); each returns a
//! [`Response`] telling the host what to do next.

use crate::camera::PerspectiveMode;
use crate::input::KeyAction;
use crate::settings::SettingFlag;

/// A single state transition on the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewCommand {
    // ── Perspective ─────────────────────────────────────────────────
    /// Switch directly to `mode`.
    SetMode(PerspectiveMode),
    /// Advance first person → polar → orthographic → first person.
    CycleMode,

    // ── Window ──────────────────────────────────────────────────────
    /// Enter or leave fullscreen.
    ToggleFullscreen,
    /// The drawable area changed size.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
    /// Ask the host to exit.
    Quit,

    // ── Camera ──────────────────────────────────────────────────────
    /// Zoom the active mode (positive = in).
    Zoom {
        /// Zoom amount.
        delta: f32,
    },
    /// Add `delta` to the field of view.
    AdjustFov {
        /// Field of view change.
        delta: f32,
    },
    /// Change the field of view by whole shortcut steps (positive widens).
    StepFov {
        /// Number of steps.
        steps: f32,
    },

    // ── Settings ────────────────────────────────────────────────────
    /// Enable or disable a flag.
    SetFlag {
        /// The flag.
        flag: SettingFlag,
        /// New value.
        enabled: bool,
    },
    /// Flip a flag.
    ToggleFlag(SettingFlag),
}

impl ViewCommand {
    /// The command a discrete key action triggers. Held actions have none.
    #[must_use]
    pub const fn from_action(action: KeyAction) -> Option<Self> {
        Some(match action {
            KeyAction::Quit => Self::Quit,
            KeyAction::ToggleFullscreen => Self::ToggleFullscreen,
            KeyAction::CycleMode => Self::CycleMode,
            KeyAction::WidenFov => Self::StepFov { steps: 1.0 },
            KeyAction::NarrowFov => Self::StepFov { steps: -1.0 },
            KeyAction::ToggleGround => {
                Self::ToggleFlag(SettingFlag::ShowGround)
            }
            KeyAction::ToggleGrid => Self::ToggleFlag(SettingFlag::ShowGrid),
            KeyAction::MoveForward
            | KeyAction::MoveBackward
            | KeyAction::StrafeLeft
            | KeyAction::StrafeRight
            | KeyAction::Rise
            | KeyAction::Sink
            | KeyAction::ZoomIn
            | KeyAction::ZoomOut => return None,
        })
    }
}

/// What the host should do after a state transition.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Response {
    /// Something visible changed; schedule a tick.
    pub redraw: bool,
    /// The viewer asked to close.
    pub exit: bool,
    /// The fullscreen state changed to this value.
    pub fullscreen: Option<bool>,
}

impl Response {
    /// Nothing to do.
    pub const NONE: Self = Self {
        redraw: false,
        exit: false,
        fullscreen: None,
    };

    /// Schedule a tick.
    pub const REDRAW: Self = Self {
        redraw: true,
        exit: false,
        fullscreen: None,
    };

    /// Close the viewer.
    pub const EXIT: Self = Self {
        redraw: false,
        exit: true,
        fullscreen: None,
    };

    /// Redraw if `changed`, otherwise nothing.
    pub const fn redraw_if(changed: bool) -> Self {
        Self {
            redraw: changed,
            exit: false,
            fullscreen: None,
        }
    }

    /// Combine two responses. The later fullscreen change wins.
    pub fn merge(self, other: Self) -> Self {
        Self {
            redraw: self.redraw || other.redraw,
            exit: self.exit || other.exit,
            fullscreen: other.fullscreen.or(self.fullscreen),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_discrete_action_has_a_command() {
        for action in KeyAction::ALL {
            assert_eq!(
                ViewCommand::from_action(action).is_some(),
                !action.is_held(),
                "{action:?}"
            );
        }
    }

    #[test]
    fn merge_keeps_every_request() {
        let fullscreen = Response {
            fullscreen: Some(true),
            ..Response::REDRAW
        };
        let merged = fullscreen.merge(Response::EXIT);
        assert!(merged.redraw);
        assert!(merged.exit);
        assert_eq!(merged.fullscreen, Some(true));
        assert_eq!(Response::NONE.merge(Response::NONE), Response::NONE);
    }
}
