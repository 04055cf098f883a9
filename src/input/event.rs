use super::keyboard::Key;

/// Platform-agnostic input events.
///
/// Hosts translate their native window events into these and feed them to
/// [`handle_event`](crate::viewport::ViewportCoordinator::handle_event).
///
/// # Example
///
/// ```
/// # use vantage::input::InputEvent;
/// let event = InputEvent::key(u32::from(b'p'), true);
/// assert!(event.is_some());
/// assert!(InputEvent::key(4096, true).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key went down.
    KeyDown {
        /// The key.
        key: Key,
    },
    /// A key went up.
    KeyUp {
        /// The key.
        key: Key,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
        /// Horizontal cursor position in physical pixels.
        x: f32,
        /// Vertical cursor position in physical pixels, top-down.
        y: f32,
    },
    /// Cursor moved to absolute screen position, with or without a button
    /// held.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels, top-down.
        y: f32,
    },
    /// The drawable area changed size.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}

impl InputEvent {
    /// Key event from a raw key code. Out-of-range codes yield `None`.
    #[must_use]
    pub fn key(code: u32, pressed: bool) -> Option<Self> {
        let key = Key::from_code(code)?;
        Some(if pressed {
            Self::KeyDown { key }
        } else {
            Self::KeyUp { key }
        })
    }
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}
