//! Input handling: key and event types, live device state, and the
//! translator that turns held keys and mouse drags into camera motion.

/// Platform-agnostic input events.
pub mod event;
/// Key identities, key codes and bindable actions.
pub mod keyboard;
/// Held keys, held buttons and cursor tracking.
pub mod state;
/// Converts device state into camera deltas.
pub mod translator;

pub use event::{InputEvent, MouseButton};
pub use keyboard::{FunctionKey, Key, KeyAction, ParseKeyError, SpecialKey};
pub use state::InputDeviceState;
pub use translator::InputTranslator;
