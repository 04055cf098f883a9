//! The viewer's single context object.

use glam::{Mat4, Vec2};

use super::command::{Response, ViewCommand};
use crate::camera::{
    projection, CameraState, PerspectiveMode, Projection, Viewport,
};
use crate::input::{InputDeviceState, InputTranslator, Key};
use crate::options::{KeybindingOptions, Options};
use crate::settings::{SettingFlag, SettingsFlags};

/// Camera, flags, input and window state for one viewer.
///
/// Owned by the [`ViewportCoordinator`](super::ViewportCoordinator) and lent
/// to [`Scene`](super::Scene) hooks. All command methods return a
/// [`Response`].
#[derive(Debug, Clone)]
pub struct ViewState {
    camera: CameraState,
    settings: SettingsFlags,
    input: InputDeviceState,
    mode: PerspectiveMode,
    viewport: Viewport,
    projection: Projection,
    translator: InputTranslator,
    keybindings: KeybindingOptions,
    continuous_refresh: bool,
    fullscreen: bool,
    windowed_size: Viewport,
    screen_size: Option<Viewport>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl ViewState {
    /// Build the initial state from options.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let viewport =
            Viewport::new(options.window.width, options.window.height);
        let camera =
            CameraState::from_options(&options.camera, &options.window);
        let mode = options.camera.mode;
        let projection = projection::build(mode, &camera, viewport);
        Self {
            camera,
            settings: options.settings,
            input: InputDeviceState::new(),
            mode,
            viewport,
            projection,
            translator: InputTranslator::new(&options.controls),
            keybindings: options.keybindings.clone(),
            continuous_refresh: options.window.continuous_refresh,
            fullscreen: options.window.fullscreen,
            windowed_size: viewport,
            screen_size: None,
        }
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Camera pose and parameters.
    #[must_use]
    pub const fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Mutable camera, for scenes that steer it. Changes show from the
    /// next projection rebuild.
    pub fn camera_mut(&mut self) -> &mut CameraState {
        &mut self.camera
    }

    /// Enabled feature flags.
    #[must_use]
    pub const fn settings(&self) -> SettingsFlags {
        self.settings
    }

    /// Live keyboard and mouse state.
    #[must_use]
    pub const fn input(&self) -> &InputDeviceState {
        &self.input
    }

    pub(crate) fn input_mut(&mut self) -> &mut InputDeviceState {
        &mut self.input
    }

    /// Active perspective mode.
    #[must_use]
    pub const fn mode(&self) -> PerspectiveMode {
        self.mode
    }

    /// Current drawable size.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Matrices from the last rebuild.
    #[must_use]
    pub const fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Key bindings in effect.
    #[must_use]
    pub const fn keybindings(&self) -> &KeybindingOptions {
        &self.keybindings
    }

    /// Tuning for mouse look, walking and zoom.
    #[must_use]
    pub const fn translator(&self) -> &InputTranslator {
        &self.translator
    }

    /// Whether the window is fullscreen.
    #[must_use]
    pub const fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Whether the host should tick every frame rather than on demand.
    #[must_use]
    pub const fn continuous_refresh(&self) -> bool {
        self.continuous_refresh
    }

    /// Switch between ticking every frame and ticking on demand.
    pub fn set_continuous_refresh(&mut self, enabled: bool) {
        self.continuous_refresh = enabled;
    }

    /// Whether `flag` is set.
    #[must_use]
    pub const fn flag(&self, flag: SettingFlag) -> bool {
        self.settings.contains(flag)
    }

    /// World transform for the 3D pass: `T(-origin)` while keyboard
    /// movement is on, identity otherwise.
    #[must_use]
    pub fn world_transform(&self) -> Mat4 {
        if self.flag(SettingFlag::KeyboardMove) {
            Mat4::from_translation(-self.camera.origin)
        } else {
            Mat4::IDENTITY
        }
    }

    /// Convert a raw top-down pixel position into handed screen
    /// coordinates.
    #[must_use]
    pub fn handed_position(&self, x: f32, y: f32) -> Vec2 {
        InputTranslator::handed_position(
            self.camera.handedness,
            self.viewport,
            x,
            y,
        )
    }

    /// Cursor position in orthographic world units.
    #[must_use]
    pub fn mouse_world(&self) -> Vec2 {
        self.camera
            .ortho_window
            .to_world(self.viewport, self.input.mouse_position())
    }

    // ── Commands ────────────────────────────────────────────────────

    /// Recompute the matrices for the active mode.
    pub fn rebuild_projection(&mut self) {
        self.projection =
            projection::build(self.mode, &self.camera, self.viewport);
    }

    /// Switch to `mode`. Camera fields are left untouched so returning to
    /// a mode resumes where it was left.
    pub fn set_mode(&mut self, mode: PerspectiveMode) -> Response {
        if mode == self.mode {
            return Response::NONE;
        }
        log::debug!("perspective: {} -> {}", self.mode, mode);
        self.mode = mode;
        self.rebuild_projection();
        Response::REDRAW
    }

    /// Advance to the next mode in the cycle.
    pub fn cycle_mode(&mut self) -> Response {
        self.set_mode(self.mode.next())
    }

    /// Adopt a new drawable size. Both dimensions are floored at one pixel;
    /// the ortho window keeps its height and horizontal center and takes
    /// the new aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) -> Response {
        let viewport = Viewport::new(width, height);
        log::debug!(
            "resize: {}x{} -> {}x{}",
            self.viewport.width(),
            self.viewport.height(),
            viewport.width(),
            viewport.height()
        );
        self.viewport = viewport;
        if !self.fullscreen {
            self.windowed_size = viewport;
        }
        self.camera.ortho_window.refit_width(viewport.aspect());
        self.rebuild_projection();
        Response::REDRAW
    }

    /// Tell the viewer the monitor size, used when entering fullscreen.
    pub fn set_screen_size(&mut self, width: u32, height: u32) {
        self.screen_size = Some(Viewport::new(width, height));
    }

    /// Enter or leave fullscreen.
    ///
    /// Entering remembers the windowed size and adopts the screen size (or
    /// keeps the current one if the host never reported a screen);
    /// leaving restores the windowed size.
    pub fn toggle_fullscreen(&mut self) -> Response {
        let target = if self.fullscreen {
            self.fullscreen = false;
            self.windowed_size
        } else {
            self.windowed_size = self.viewport;
            self.fullscreen = true;
            self.screen_size.unwrap_or(self.viewport)
        };
        log::debug!("fullscreen: {}", self.fullscreen);
        let resized = self.resize(target.width(), target.height());
        Response {
            fullscreen: Some(self.fullscreen),
            ..resized
        }
    }

    /// Zoom the active mode by `delta` (positive = in).
    pub fn adjust_zoom(&mut self, delta: f32) -> Response {
        self.translator
            .zoom(self.mode, &mut self.camera, self.viewport, delta);
        self.rebuild_projection();
        Response::REDRAW
    }

    /// Add `delta` to the field of view.
    pub fn adjust_fov(&mut self, delta: f32) -> Response {
        let fov = self.camera.fov() + delta;
        self.camera.set_fov(fov);
        self.rebuild_projection();
        Response::REDRAW
    }

    /// Set or clear a flag.
    pub fn set_flag(&mut self, flag: SettingFlag, enabled: bool) -> Response {
        let changed = self.flag(flag) != enabled;
        self.settings.set(flag, enabled);
        Response::redraw_if(changed)
    }

    /// Flip a flag.
    pub fn toggle_flag(&mut self, flag: SettingFlag) -> Response {
        let enabled = self.settings.toggle(flag);
        log::debug!("{flag}: {enabled}");
        Response::REDRAW
    }

    /// Apply a command.
    pub fn execute(&mut self, command: ViewCommand) -> Response {
        match command {
            ViewCommand::SetMode(mode) => self.set_mode(mode),
            ViewCommand::CycleMode => self.cycle_mode(),
            ViewCommand::ToggleFullscreen => self.toggle_fullscreen(),
            ViewCommand::Resize { width, height } => self.resize(width, height),
            ViewCommand::Quit => {
                log::debug!("quit requested");
                Response::EXIT
            }
            ViewCommand::Zoom { delta } => self.adjust_zoom(delta),
            ViewCommand::AdjustFov { delta } => self.adjust_fov(delta),
            ViewCommand::StepFov { steps } => {
                self.translator.step_fov(&mut self.camera, steps);
                self.rebuild_projection();
                Response::REDRAW
            }
            ViewCommand::SetFlag { flag, enabled } => {
                self.set_flag(flag, enabled)
            }
            ViewCommand::ToggleFlag(flag) => self.toggle_flag(flag),
        }
    }

    // ── Input ───────────────────────────────────────────────────────

    /// Run the shortcut bound to a freshly pressed `key`, if keyboard
    /// functions are enabled.
    pub(crate) fn key_shortcut(&mut self, key: Key) -> Response {
        if !self.flag(SettingFlag::KeyboardFunctions) {
            return Response::NONE;
        }
        self.keybindings
            .lookup(key)
            .and_then(ViewCommand::from_action)
            .map_or(Response::NONE, |command| self.execute(command))
    }

    /// Apply one tick of held movement and zoom keys, rebuilding the
    /// projection if anything moved.
    pub(crate) fn apply_held_keys(&mut self) -> bool {
        let moved = self.translator.apply_held_keys(
            self.mode,
            &mut self.camera,
            self.viewport,
            &self.input,
            self.settings,
            &self.keybindings,
        );
        if moved {
            self.rebuild_projection();
        }
        moved
    }

    /// Record a cursor move to `position` (handed). Drags turn into mouse
    /// look when that flag is on. Returns whether the camera moved.
    pub(crate) fn track_cursor(&mut self, position: Vec2) -> bool {
        let previous = self.input.move_mouse(position);
        if !self.input.is_dragging() || !self.flag(SettingFlag::MouseLook) {
            return false;
        }
        let delta = InputTranslator::pointer_delta(
            self.camera.handedness,
            previous,
            position,
        );
        self.translator
            .mouse_look(self.mode, &mut self.camera, self.viewport, delta);
        self.rebuild_projection();
        true
    }
}
