//! Projection and view matrices for each perspective mode.
//!
//! Matrices follow OpenGL conventions: right-handed clip space with depth in
//! `[-1, 1]`, column-major `glam::Mat4`. Every function here is pure; none of
//! them touch the [`CameraState`] they read.

use glam::{Mat4, Vec3, Vec4};

use super::mode::PerspectiveMode;
use super::state::{CameraState, Handedness, Viewport};

/// Depth range of the fixed screen-space overlay transform.
const SCREEN_DEPTH: f32 = 100.0;

/// Projection plus view transform for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Frustum or orthographic box.
    pub projection: Mat4,
    /// Camera orientation and offset (identity in orthographic mode).
    pub view: Mat4,
}

impl Projection {
    /// `projection * view`.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            projection: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
        }
    }
}

/// Build the projection for `mode` from the camera's current values.
#[must_use]
pub fn build(
    mode: PerspectiveMode,
    camera: &CameraState,
    viewport: Viewport,
) -> Projection {
    match mode {
        PerspectiveMode::FirstPerson => first_person(camera, viewport),
        PerspectiveMode::Polar => polar(camera, viewport),
        PerspectiveMode::Orthographic => orthographic(camera),
    }
}

/// Look from `eye_height` above the ground in the horizon's direction.
#[must_use]
pub fn first_person(camera: &CameraState, viewport: Viewport) -> Projection {
    let horizon = camera.horizon;
    let view = Mat4::from_rotation_x((-90.0 - horizon.altitude).to_radians())
        * Mat4::from_rotation_z((90.0 + horizon.azimuth).to_radians())
        * handed_flip(camera.handedness)
        * Mat4::from_translation(Vec3::new(0.0, 0.0, -camera.eye_height));
    Projection {
        projection: perspective_frustum(camera, viewport),
        view,
    }
}

/// Orbit the world origin at `horizon.distance`.
#[must_use]
pub fn polar(camera: &CameraState, viewport: Viewport) -> Projection {
    let horizon = camera.horizon;
    let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -horizon.distance))
        * Mat4::from_rotation_x((-90.0 + horizon.altitude).to_radians())
        * Mat4::from_rotation_z((270.0 + horizon.azimuth).to_radians())
        * handed_flip(camera.handedness);
    Projection {
        projection: perspective_frustum(camera, viewport),
        view,
    }
}

/// Box over the ortho window, `[-far, far]` deep.
#[must_use]
pub fn orthographic(camera: &CameraState) -> Projection {
    let w = camera.ortho_window;
    let (bottom, top) = match camera.handedness {
        Handedness::Left => (w.y + w.height, w.y),
        Handedness::Right => (w.y, w.y + w.height),
    };
    Projection {
        projection: Mat4::orthographic_rh_gl(
            w.x,
            w.x + w.width,
            bottom,
            top,
            -camera.far_clip(),
            camera.far_clip(),
        ),
        view: Mat4::IDENTITY,
    }
}

/// Pixel-space transform used for the 2D overlay pass.
#[must_use]
pub fn screen_space(viewport: Viewport, handedness: Handedness) -> Mat4 {
    let size = viewport.size();
    let (bottom, top) = match handedness {
        Handedness::Left => (size.y, 0.0),
        Handedness::Right => (0.0, size.y),
    };
    Mat4::orthographic_rh_gl(
        0.0,
        size.x,
        bottom,
        top,
        -SCREEN_DEPTH,
        SCREEN_DEPTH,
    )
}

/// OpenGL-style asymmetric frustum.
#[must_use]
pub fn frustum(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Mat4 {
    let width = right - left;
    let height = top - bottom;
    let depth = far - near;
    Mat4::from_cols(
        Vec4::new(2.0 * near / width, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 * near / height, 0.0, 0.0),
        Vec4::new(
            (right + left) / width,
            (top + bottom) / height,
            -(far + near) / depth,
            -1.0,
        ),
        Vec4::new(0.0, 0.0, -2.0 * far * near / depth, 0.0),
    )
}

/// Symmetric frustum that keeps the narrower screen dimension's extent at
/// `fov` regardless of aspect ratio.
fn perspective_frustum(camera: &CameraState, viewport: Viewport) -> Mat4 {
    let (w, h) = (viewport.width(), viewport.height());
    let a = w.min(h) as f32 / w.max(h) as f32;
    let fov = camera.fov();
    let (fx, fy) = if w < h { (fov, fov / a) } else { (fov / a, fov) };
    frustum(-fx, fx, -fy, fy, camera.near_clip(), camera.far_clip())
}

/// Y inversion applied for left-handed coordinates.
fn handed_flip(handedness: Handedness) -> Mat4 {
    match handedness {
        Handedness::Left => Mat4::from_scale(Vec3::new(1.0, -1.0, 1.0)),
        Handedness::Right => Mat4::IDENTITY,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn camera(handedness: Handedness) -> CameraState {
        let mut cam = CameraState::default();
        cam.handedness = handedness;
        cam.horizon.azimuth = 37.0;
        cam.horizon.altitude = -12.0;
        cam.origin = Vec3::new(1.0, 2.0, 3.0);
        cam
    }

    #[test]
    fn first_person_looks_along_x_at_zero_azimuth() {
        let cam = CameraState::default();
        let proj = first_person(&cam, Viewport::new(800, 600));
        let eye = proj.view.transform_point3(Vec3::new(5.0, 0.0, 1.0));
        assert!(eye.abs_diff_eq(Vec3::new(0.0, 0.0, -5.0), 1e-4));
    }

    #[test]
    fn polar_keeps_target_at_distance() {
        for handedness in [Handedness::Left, Handedness::Right] {
            let mut cam = camera(handedness);
            cam.horizon.distance = 4.5;
            let proj = polar(&cam, Viewport::new(640, 480));
            let eye = proj.view.transform_point3(Vec3::ZERO);
            assert!(eye.abs_diff_eq(Vec3::new(0.0, 0.0, -4.5), 1e-4));
        }
    }

    #[test]
    fn handedness_differs_only_by_y_flip() {
        let flip = Mat4::from_scale(Vec3::new(1.0, -1.0, 1.0));
        let vp = Viewport::new(1024, 768);
        for mode in [PerspectiveMode::FirstPerson, PerspectiveMode::Polar] {
            let left = build(mode, &camera(Handedness::Left), vp);
            let right = build(mode, &camera(Handedness::Right), vp);
            assert_eq!(left.projection, right.projection);
            assert!(left
                .view_projection()
                .abs_diff_eq(right.view_projection() * flip, 1e-5));
        }
    }

    #[test]
    fn frustum_keeps_narrow_dimension_constant() {
        let cam = CameraState::default();
        let landscape = first_person(&cam, Viewport::new(400, 300)).projection;
        let portrait = first_person(&cam, Viewport::new(300, 400)).projection;

        // narrow dimension: y in landscape, x in portrait
        assert_abs_diff_eq!(
            landscape.y_axis.y,
            portrait.x_axis.x,
            epsilon = 1e-5
        );
        assert_abs_diff_eq!(
            landscape.y_axis.y / landscape.x_axis.x,
            400.0 / 300.0,
            epsilon = 1e-4
        );
    }

    #[test]
    fn frustum_maps_near_and_far_to_clip_bounds() {
        let m = frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
        let near = m.project_point3(Vec3::new(0.0, 0.0, -1.0));
        let far = m.project_point3(Vec3::new(0.0, 0.0, -10.0));
        assert_abs_diff_eq!(near.z, -1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(far.z, 1.0, epsilon = 1e-5);
        let corner = m.project_point3(Vec3::new(1.0, 1.0, -1.0));
        assert_abs_diff_eq!(corner.x, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(corner.y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn orthographic_y_range_follows_handedness() {
        let mut cam = CameraState::default();
        let corner = Vec3::new(-8.0, -6.0, 0.0);

        let left = orthographic(&cam).view_projection();
        assert!(left
            .project_point3(corner)
            .abs_diff_eq(Vec3::new(-1.0, 1.0, 0.0), 1e-5));

        cam.handedness = Handedness::Right;
        let right = orthographic(&cam).view_projection();
        assert!(right
            .project_point3(corner)
            .abs_diff_eq(Vec3::new(-1.0, -1.0, 0.0), 1e-5));
    }

    #[test]
    fn build_is_pure() {
        let cam = camera(Handedness::Left);
        let before = cam.clone();
        let vp = Viewport::new(800, 600);
        let a = build(PerspectiveMode::Polar, &cam, vp);
        let b = build(PerspectiveMode::Polar, &cam, vp);
        assert_eq!(a, b);
        assert_eq!(cam, before);
    }

    #[test]
    fn screen_space_puts_origin_top_left_when_left_handed() {
        let vp = Viewport::new(800, 600);
        let left = screen_space(vp, Handedness::Left);
        assert!(left
            .project_point3(Vec3::ZERO)
            .abs_diff_eq(Vec3::new(-1.0, 1.0, 0.0), 1e-5));
        let right = screen_space(vp, Handedness::Right);
        assert!(right
            .project_point3(Vec3::ZERO)
            .abs_diff_eq(Vec3::new(-1.0, -1.0, 0.0), 1e-5));
    }
}
