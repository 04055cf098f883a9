// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Minimal real-time 3D viewer shell.
//!
//! Vantage owns the camera, the projection pipeline, and the translation of
//! keyboard and mouse input into camera motion, across three perspective
//! modes: first person, polar (orbiting) and orthographic. It draws nothing
//! itself; a client [`viewport::Scene`] receives the matrices each tick and
//! renders with whatever it likes.
//!
//! # Key entry points
//!
//! - [`viewport::ViewportCoordinator`] - runs the per-tick protocol and
//!   dispatches input
//! - [`viewport::ViewState`] - camera, flags, input and window state, with
//!   the command methods
//! - [`camera::projection`] - pure projection and view matrix builders
//! - [`input::InputTranslator`] - mouse look, walking and zoom
//! - [`options::Options`] - TOML-backed configuration and presets
//!
//! # Tick order
//!
//! Every tick applies held keys, runs the scene's `update` hook, rebuilds
//! the projection, then calls `draw_3d` under the perspective transform and
//! `draw_2d` under a screen-space transform. The 3D transform is restored
//! afterwards so the overlay never leaks into the next frame.
//!
//! With the `viewer` feature, `Viewer` hosts a coordinator in a winit
//! window.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod settings;
#[cfg(feature = "viewer")]
pub mod viewer;
pub mod viewport;

pub use camera::{CameraState, Handedness, PerspectiveMode, Viewport};
pub use error::VantageError;
pub use input::{InputEvent, Key, MouseButton};
pub use options::Options;
pub use settings::{SettingFlag, SettingsFlags};
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
pub use viewport::{Response, Scene, ViewCommand, ViewportCoordinator};
