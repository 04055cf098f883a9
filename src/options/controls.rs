use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
/// Tuning constants for mouse look, walking and zoom.
pub struct ControlOptions {
    /// Degrees of rotation per pixel of mouse drag.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.05, max = 2.0), extend("step" = 0.01))]
    pub mouse_sensitivity: f32,
    /// World units walked per tick while a movement key is held.
    #[schemars(title = "Walk Speed", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub walk_interval: f32,
    /// Polar distance / ortho height change per tick of held zoom.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Fraction of a zoom step applied to the first-person field of view.
    #[schemars(skip)]
    pub fov_zoom_ratio: f32,
    /// Field of view change per press of the FOV shortcuts.
    #[schemars(skip)]
    pub fov_step: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.333,
            walk_interval: 0.077,
            zoom_speed: 0.1,
            fov_zoom_ratio: 0.01,
            fov_step: 0.01,
        }
    }
}
