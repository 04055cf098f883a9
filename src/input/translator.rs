//! Turns mouse drags and held keys into camera changes.
//!
//! The translator owns only tuning constants. Camera, input state, flags and
//! bindings are borrowed per call, so it never holds a stale copy of any of
//! them.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Vec2, Vec3};

use super::keyboard::KeyAction;
use super::state::InputDeviceState;
use crate::camera::{CameraState, Handedness, PerspectiveMode, Viewport};
use crate::options::{ControlOptions, KeybindingOptions};
use crate::settings::{SettingFlag, SettingsFlags};

/// Converts input into [`CameraState`] deltas.
#[derive(Debug, Clone, PartialEq)]
pub struct InputTranslator {
    mouse_sensitivity: f32,
    walk_interval: f32,
    zoom_speed: f32,
    fov_zoom_ratio: f32,
    fov_step: f32,
}

impl Default for InputTranslator {
    fn default() -> Self {
        Self::new(&ControlOptions::default())
    }
}

impl InputTranslator {
    /// Create a translator with the given tuning.
    #[must_use]
    pub fn new(controls: &ControlOptions) -> Self {
        Self {
            mouse_sensitivity: controls.mouse_sensitivity,
            walk_interval: controls.walk_interval,
            zoom_speed: controls.zoom_speed,
            fov_zoom_ratio: controls.fov_zoom_ratio,
            fov_step: controls.fov_step,
        }
    }

    /// Convert a raw top-down pixel position to handed screen coordinates.
    #[must_use]
    pub fn handed_position(
        handedness: Handedness,
        viewport: Viewport,
        x: f32,
        y: f32,
    ) -> Vec2 {
        match handedness {
            Handedness::Left => Vec2::new(x, y),
            Handedness::Right => Vec2::new(x, viewport.height() as f32 - y),
        }
    }

    /// Look delta between two handed cursor positions.
    #[must_use]
    pub fn pointer_delta(
        handedness: Handedness,
        previous: Vec2,
        current: Vec2,
    ) -> Vec2 {
        let dx = previous.x - current.x;
        let dy = match handedness {
            Handedness::Left => previous.y - current.y,
            Handedness::Right => current.y - previous.y,
        };
        Vec2::new(dx, dy)
    }

    /// Apply a mouse-look drag of `delta` pixels (see
    /// [`pointer_delta`](Self::pointer_delta)).
    ///
    /// Rotates the horizon in first-person and polar modes (polar inverts the
    /// altitude direction) and pans the ortho window in orthographic mode.
    pub fn mouse_look(
        &self,
        mode: PerspectiveMode,
        camera: &mut CameraState,
        viewport: Viewport,
        delta: Vec2,
    ) {
        let scaled = delta * self.mouse_sensitivity;
        match mode {
            PerspectiveMode::FirstPerson => {
                camera.horizon.azimuth -= scaled.x;
                camera.horizon.altitude += scaled.y;
            }
            PerspectiveMode::Polar => {
                camera.horizon.azimuth -= scaled.x;
                camera.horizon.altitude -= scaled.y;
            }
            PerspectiveMode::Orthographic => {
                let window = &mut camera.ortho_window;
                let size = viewport.size();
                window.x += delta.x * window.width / size.x;
                let dy = delta.y * window.height / size.y;
                match camera.handedness {
                    Handedness::Left => window.y += dy,
                    Handedness::Right => window.y -= dy,
                }
            }
        }
    }

    /// Walk the origin by one tick of the held movement keys. Only the
    /// first-person and polar modes walk. Returns whether the origin moved.
    pub fn walk(
        &self,
        mode: PerspectiveMode,
        camera: &mut CameraState,
        input: &InputDeviceState,
        bindings: &KeybindingOptions,
    ) -> bool {
        if !mode.is_perspective() {
            return false;
        }
        let held = |action| bindings.is_held(action, input);
        let step = self.walk_interval;
        let handedness = camera.handedness;

        let mut facing = camera.horizon.azimuth.to_radians();
        if handedness == Handedness::Left {
            facing = -facing;
        }
        if mode == PerspectiveMode::Polar {
            facing += PI;
        }
        let forward = match handedness {
            Handedness::Left => Vec2::new(-facing.cos(), facing.sin()),
            Handedness::Right => Vec2::new(facing.cos(), -facing.sin()),
        } * step;
        let side = facing + FRAC_PI_2;
        let left = Vec2::new(-side.cos(), side.sin()) * step;

        let mut delta = Vec3::ZERO;
        let mut moved = false;
        for (action, planar, vertical) in [
            (KeyAction::MoveForward, forward, 0.0),
            (KeyAction::MoveBackward, -forward, 0.0),
            (KeyAction::StrafeLeft, left, 0.0),
            (KeyAction::StrafeRight, -left, 0.0),
            (KeyAction::Rise, Vec2::ZERO, step),
            (KeyAction::Sink, Vec2::ZERO, -step),
        ] {
            if held(action) {
                delta += planar.extend(vertical);
                moved = true;
            }
        }

        match handedness {
            Handedness::Left => {
                camera.origin.x -= delta.x;
                camera.origin.y -= delta.y;
            }
            Handedness::Right => {
                camera.origin.x += delta.x;
                camera.origin.y += delta.y;
            }
        }
        camera.origin.z += delta.z;
        moved
    }

    /// Zoom by `delta` (positive zooms in): narrows the first-person field
    /// of view, shortens the polar distance, or shrinks the ortho window
    /// around its center at the viewport's aspect ratio.
    pub fn zoom(
        &self,
        mode: PerspectiveMode,
        camera: &mut CameraState,
        viewport: Viewport,
        delta: f32,
    ) {
        match mode {
            PerspectiveMode::FirstPerson => {
                camera.set_fov(camera.fov() - delta * self.fov_zoom_ratio);
            }
            PerspectiveMode::Polar => camera.horizon.distance -= delta,
            PerspectiveMode::Orthographic => {
                camera.ortho_window.zoom(delta, viewport.aspect());
            }
        }
    }

    /// Apply one tick of the held zoom keys. Returns whether anything
    /// changed.
    pub fn held_zoom(
        &self,
        mode: PerspectiveMode,
        camera: &mut CameraState,
        viewport: Viewport,
        input: &InputDeviceState,
        bindings: &KeybindingOptions,
    ) -> bool {
        let mut zoomed = false;
        if bindings.is_held(KeyAction::ZoomOut, input) {
            self.zoom(mode, camera, viewport, -self.zoom_speed);
            zoomed = true;
        }
        if bindings.is_held(KeyAction::ZoomIn, input) {
            self.zoom(mode, camera, viewport, self.zoom_speed);
            zoomed = true;
        }
        zoomed
    }

    /// Widen (positive `steps`) or narrow the field of view by whole
    /// shortcut steps.
    pub fn step_fov(&self, camera: &mut CameraState, steps: f32) {
        camera.set_fov(camera.fov() + steps * self.fov_step);
    }

    /// One tick of continuous key input, gated by the keyboard flags.
    /// Returns whether the camera changed.
    pub fn apply_held_keys(
        &self,
        mode: PerspectiveMode,
        camera: &mut CameraState,
        viewport: Viewport,
        input: &InputDeviceState,
        flags: SettingsFlags,
        bindings: &KeybindingOptions,
    ) -> bool {
        let mut changed = false;
        if flags.contains(SettingFlag::KeyboardMove) {
            changed |= self.walk(mode, camera, input, bindings);
        }
        if flags.contains(SettingFlag::KeyboardZoom) {
            changed |= self.held_zoom(mode, camera, viewport, input, bindings);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::input::{Key, SpecialKey};

    fn held(keys: &[Key]) -> InputDeviceState {
        let mut input = InputDeviceState::new();
        for key in keys {
            let _ = input.press_key(*key);
        }
        input
    }

    #[test]
    fn first_person_and_polar_disagree_on_altitude() {
        let t = InputTranslator::default();
        let vp = Viewport::default();
        let delta = Vec2::new(3.0, 6.0);

        let mut fp = CameraState::default();
        t.mouse_look(PerspectiveMode::FirstPerson, &mut fp, vp, delta);
        assert_abs_diff_eq!(fp.horizon.azimuth, -0.999, epsilon = 1e-5);
        assert_abs_diff_eq!(fp.horizon.altitude, 1.998, epsilon = 1e-5);

        let mut polar = CameraState::default();
        t.mouse_look(PerspectiveMode::Polar, &mut polar, vp, delta);
        assert_abs_diff_eq!(polar.horizon.azimuth, -0.999, epsilon = 1e-5);
        assert_abs_diff_eq!(polar.horizon.altitude, -1.998, epsilon = 1e-5);
    }

    #[test]
    fn orthographic_drag_pans_in_world_units() {
        let t = InputTranslator::default();
        let vp = Viewport::new(800, 600);
        let mut cam = CameraState::default();
        // 16 x 12 world units over 800 x 600 pixels: 0.02 units per pixel
        t.mouse_look(
            PerspectiveMode::Orthographic,
            &mut cam,
            vp,
            Vec2::new(100.0, 50.0),
        );
        assert_abs_diff_eq!(cam.ortho_window.x, -6.0, epsilon = 1e-5);
        assert_abs_diff_eq!(cam.ortho_window.y, -5.0, epsilon = 1e-5);

        cam.handedness = Handedness::Right;
        t.mouse_look(
            PerspectiveMode::Orthographic,
            &mut cam,
            vp,
            Vec2::new(0.0, 50.0),
        );
        assert_abs_diff_eq!(cam.ortho_window.y, -6.0, epsilon = 1e-5);
    }

    #[test]
    fn pointer_delta_is_handedness_neutral_for_raw_motion() {
        let vp = Viewport::new(800, 600);
        for handedness in [Handedness::Left, Handedness::Right] {
            let handed = |x, y| {
                InputTranslator::handed_position(handedness, vp, x, y)
            };
            let a = handed(10.0, 100.0);
            let b = handed(15.0, 90.0);
            let delta = InputTranslator::pointer_delta(handedness, a, b);
            assert_eq!(delta, Vec2::new(-5.0, 10.0));
        }
    }

    #[test]
    fn forward_then_backward_returns_home() {
        let t = InputTranslator::default();
        let kb = KeybindingOptions::default();
        let forward = held(&[Key::Char('w')]);
        let backward = held(&[Key::Special(SpecialKey::Down)]);

        for handedness in [Handedness::Left, Handedness::Right] {
            for mode in [PerspectiveMode::FirstPerson, PerspectiveMode::Polar] {
                let mut cam = CameraState::default();
                cam.handedness = handedness;
                cam.horizon.azimuth = 33.0;
                cam.origin = Vec3::new(1.0, -2.0, 0.5);
                let start = cam.origin;

                for _ in 0..25 {
                    assert!(t.walk(mode, &mut cam, &forward, &kb));
                }
                assert!(cam.origin.distance(start) > 1.0);
                for _ in 0..25 {
                    assert!(t.walk(mode, &mut cam, &backward, &kb));
                }
                assert!(cam.origin.abs_diff_eq(start, 1e-4));
            }
        }
    }

    #[test]
    fn first_person_walks_toward_view_direction() {
        let t = InputTranslator::default();
        let kb = KeybindingOptions::default();
        let forward = held(&[Key::Char('w')]);

        // left-handed, azimuth 0 looks down +X
        let mut cam = CameraState::default();
        let _ = t.walk(PerspectiveMode::FirstPerson, &mut cam, &forward, &kb);
        assert!(cam.origin.abs_diff_eq(Vec3::new(0.077, 0.0, 0.0), 1e-6));

        // polar "forward" faces the target, the opposite way
        let mut cam = CameraState::default();
        let _ = t.walk(PerspectiveMode::Polar, &mut cam, &forward, &kb);
        assert!(cam.origin.abs_diff_eq(Vec3::new(-0.077, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn opposing_keys_cancel_and_vertical_is_direct() {
        let t = InputTranslator::default();
        let kb = KeybindingOptions::default();
        let input = held(&[Key::Char('a'), Key::Char('d'), Key::Char('Q')]);
        let mut cam = CameraState::default();
        assert!(t.walk(PerspectiveMode::FirstPerson, &mut cam, &input, &kb));
        assert!(cam.origin.abs_diff_eq(Vec3::new(0.0, 0.0, 0.077), 1e-6));
    }

    #[test]
    fn orthographic_does_not_walk() {
        let t = InputTranslator::default();
        let kb = KeybindingOptions::default();
        let mut cam = CameraState::default();
        let input = held(&[Key::Char('w')]);
        assert!(!t.walk(PerspectiveMode::Orthographic, &mut cam, &input, &kb));
        assert_eq!(cam.origin, Vec3::ZERO);
    }

    #[test]
    fn polar_zoom_round_trip() {
        let t = InputTranslator::default();
        let vp = Viewport::default();
        let mut cam = CameraState::default();
        for _ in 0..10 {
            t.zoom(PerspectiveMode::Polar, &mut cam, vp, 0.1);
        }
        assert_abs_diff_eq!(cam.horizon.distance, 6.0, epsilon = 1e-4);
        for _ in 0..10 {
            t.zoom(PerspectiveMode::Polar, &mut cam, vp, -0.1);
        }
        assert_abs_diff_eq!(cam.horizon.distance, 7.0, epsilon = 1e-4);
    }

    #[test]
    fn first_person_zoom_narrows_fov() {
        let t = InputTranslator::default();
        let mut cam = CameraState::default();
        t.zoom(
            PerspectiveMode::FirstPerson,
            &mut cam,
            Viewport::default(),
            0.1,
        );
        assert_abs_diff_eq!(cam.fov(), 0.099, epsilon = 1e-6);
    }

    #[test]
    fn held_zoom_respects_flags() {
        let t = InputTranslator::default();
        let kb = KeybindingOptions::default();
        let vp = Viewport::default();
        let input = held(&[Key::Char('+')]);
        let mut cam = CameraState::default();

        let mut flags = SettingsFlags::all();
        flags.remove(SettingFlag::KeyboardZoom);
        assert!(!t.apply_held_keys(
            PerspectiveMode::Polar,
            &mut cam,
            vp,
            &input,
            flags,
            &kb
        ));
        assert_eq!(cam.horizon.distance, 7.0);

        assert!(t.apply_held_keys(
            PerspectiveMode::Polar,
            &mut cam,
            vp,
            &input,
            SettingsFlags::all(),
            &kb
        ));
        assert_abs_diff_eq!(cam.horizon.distance, 6.9, epsilon = 1e-5);
    }

    #[test]
    fn orthographic_zoom_keeps_aspect() {
        let t = InputTranslator::default();
        let vp = Viewport::new(800, 600);
        let mut cam = CameraState::default();
        let center = cam.ortho_window.center();
        t.zoom(PerspectiveMode::Orthographic, &mut cam, vp, 1.0);
        let w = cam.ortho_window;
        assert_abs_diff_eq!(w.height, 11.0, epsilon = 1e-5);
        assert_abs_diff_eq!(w.width / w.height, vp.aspect(), epsilon = 1e-5);
        assert!(w.center().abs_diff_eq(center, 1e-5));
    }
}
