use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{Handedness, PerspectiveMode};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera pose and projection parameters.
pub struct CameraOptions {
    /// Perspective mode active at startup.
    #[schemars(title = "Start Mode")]
    pub mode: PerspectiveMode,
    /// Coordinate handedness.
    #[schemars(title = "Handedness")]
    pub handedness: Handedness,
    /// Near-plane half extent of the narrower screen dimension.
    #[schemars(title = "Field of View", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub fov: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub near_clip: f32,
    /// Far clipping plane distance; also the orthographic depth range.
    #[schemars(skip)]
    pub far_clip: f32,
    /// First-person eye height above the ground plane.
    #[schemars(title = "Eye Height", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub eye_height: f32,
    /// Polar orbit distance.
    #[schemars(title = "Orbit Distance", range(min = 0.5, max = 100.0), extend("step" = 0.5))]
    pub distance: f32,
    /// Initial azimuth in degrees.
    #[schemars(skip)]
    pub azimuth: f32,
    /// Initial altitude in degrees.
    #[schemars(skip)]
    pub altitude: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            mode: PerspectiveMode::FirstPerson,
            handedness: Handedness::Left,
            fov: 0.1,
            near_clip: 0.1,
            far_clip: 10_000.0,
            eye_height: 1.0,
            distance: 7.0,
            azimuth: 0.0,
            altitude: 0.0,
        }
    }
}
