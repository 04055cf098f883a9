use glam::{Vec2, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::options::{CameraOptions, WindowOptions};

/// Smallest field of view the frustum is built with.
pub const MIN_FOV: f32 = 1.0e-3;
/// Smallest near clip distance.
pub const MIN_NEAR_CLIP: f32 = 1.0e-4;
/// Smallest gap kept between the near and far clip planes.
pub const MIN_DEPTH_SPAN: f32 = 1.0e-3;
/// Smallest ortho window height reachable by zooming in.
pub const MIN_ORTHO_HEIGHT: f32 = 1.0e-3;

/// Coordinate handedness. Controls the Y inversion of every projection and
/// the sign conventions of mouse and keyboard motion.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Handedness {
    /// Screen Y grows downward; projections carry a Y inversion.
    #[default]
    Left,
    /// Screen Y grows upward.
    Right,
}

/// Viewport size in physical pixels. Both dimensions are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Create a viewport, flooring each dimension at one pixel.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(self) -> u32 {
        self.height
    }

    /// Pixel aspect ratio (width / height).
    #[must_use]
    pub fn aspect(self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Size as floats, for pixel to world conversions.
    #[must_use]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// Orientation triple shared by the first-person and polar modes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Horizon {
    /// Horizontal look/orbit angle in degrees. Never wrapped.
    pub azimuth: f32,
    /// Vertical look/orbit angle in degrees. Never clamped.
    pub altitude: f32,
    /// Eye-to-target distance in polar mode; unused in first person.
    pub distance: f32,
}

impl Default for Horizon {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            altitude: 0.0,
            distance: 7.0,
        }
    }
}

/// World-space rectangle shown by the orthographic projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoWindow {
    /// Left edge.
    pub x: f32,
    /// Top edge for left-handed, bottom edge for right-handed.
    pub y: f32,
    /// Width in world units.
    pub width: f32,
    /// Height in world units.
    pub height: f32,
}

impl OrthoWindow {
    /// A window centered on the world origin covering `viewport` at the
    /// given scale.
    #[must_use]
    pub fn centered(viewport: Viewport, units_per_pixel: f32) -> Self {
        let size = viewport.size() * units_per_pixel;
        Self {
            x: -size.x * 0.5,
            y: -size.y * 0.5,
            width: size.x,
            height: size.y,
        }
    }

    /// Center of the rectangle in world units.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Recompute the width from the height so the window matches `aspect`,
    /// keeping the horizontal center fixed.
    pub fn refit_width(&mut self, aspect: f32) {
        let new_width = self.height * aspect;
        let shrink = self.width - new_width;
        self.width = new_width;
        self.x += shrink * 0.5;
    }

    /// Shrink the height by `delta` (grow for negative) around the center,
    /// then refit the width to `aspect`.
    pub fn zoom(&mut self, delta: f32, aspect: f32) {
        let new_height = (self.height - delta).max(MIN_ORTHO_HEIGHT);
        let applied = self.height - new_height;
        self.height = new_height;
        self.y += applied * 0.5;
        self.refit_width(aspect);
    }

    /// Map a handed screen position in pixels to world units.
    #[must_use]
    pub fn to_world(&self, viewport: Viewport, pixel: Vec2) -> Vec2 {
        let t = pixel / viewport.size();
        Vec2::new(t.x * self.width + self.x, t.y * self.height + self.y)
    }
}

/// Camera pose and projection parameters for all three perspective modes.
///
/// Every mode's fields live here at once. Switching modes never touches
/// them, so returning to a mode resumes where it was left.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    /// World position walked by the movement keys.
    pub origin: Vec3,
    /// Azimuth, altitude and polar distance.
    pub horizon: Horizon,
    /// Orthographic view rectangle.
    pub ortho_window: OrthoWindow,
    /// Coordinate handedness.
    pub handedness: Handedness,
    /// Camera height above the ground plane in first person.
    pub eye_height: f32,
    fov: f32,
    near_clip: f32,
    far_clip: f32,
}

impl CameraState {
    /// Default camera for the given viewport, with a 0.02 world units per
    /// pixel ortho window.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            origin: Vec3::ZERO,
            horizon: Horizon::default(),
            ortho_window: OrthoWindow::centered(viewport, 0.02),
            handedness: Handedness::Left,
            eye_height: 1.0,
            fov: 0.1,
            near_clip: 0.1,
            far_clip: 10_000.0,
        }
    }

    /// Camera configured from option sections.
    #[must_use]
    pub fn from_options(
        camera: &CameraOptions,
        window: &WindowOptions,
    ) -> Self {
        let viewport = Viewport::new(window.width, window.height);
        let mut state = Self {
            origin: Vec3::ZERO,
            horizon: Horizon {
                azimuth: camera.azimuth,
                altitude: camera.altitude,
                distance: camera.distance,
            },
            ortho_window: OrthoWindow::centered(
                viewport,
                window.world_units_per_pixel,
            ),
            handedness: camera.handedness,
            eye_height: camera.eye_height,
            ..Self::new(viewport)
        };
        state.set_fov(camera.fov);
        state.set_clip_planes(camera.near_clip, camera.far_clip);
        state
    }

    /// Near-plane half extent of the narrower screen dimension.
    #[must_use]
    pub const fn fov(&self) -> f32 {
        self.fov
    }

    /// Near clip distance.
    #[must_use]
    pub const fn near_clip(&self) -> f32 {
        self.near_clip
    }

    /// Far clip distance; also the orthographic depth range.
    #[must_use]
    pub const fn far_clip(&self) -> f32 {
        self.far_clip
    }

    /// Set the field of view, floored at [`MIN_FOV`].
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov.max(MIN_FOV);
    }

    /// Set both clip planes keeping `far > near > 0`.
    pub fn set_clip_planes(&mut self, near: f32, far: f32) {
        self.near_clip = near.max(MIN_NEAR_CLIP);
        self.far_clip = far.max(self.near_clip + MIN_DEPTH_SPAN);
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}
