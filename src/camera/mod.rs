//! Camera state and projection pipeline.
//!
//! A single [`CameraState`] carries the parameters of all three
//! [`PerspectiveMode`]s at once; [`projection::build`] turns it into the
//! matrices for whichever mode is active.

/// The three-way perspective mode cycle.
pub mod mode;
/// Projection and view matrix construction per mode.
pub mod projection;
/// Camera pose, ortho window, handedness and viewport size.
pub mod state;

pub use mode::PerspectiveMode;
pub use projection::Projection;
pub use state::{CameraState, Handedness, Horizon, OrthoWindow, Viewport};
