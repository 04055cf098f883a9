//! The viewport coordinator and the state it drives.
//!
//! [`ViewportCoordinator`] owns one [`ViewState`] and one [`Scene`]. Hosts
//! feed it [`InputEvent`]s as they arrive and call
//! [`tick`](ViewportCoordinator::tick) once per frame. A tick always runs in
//! the same order: held keys, the scene's `update`, the projection rebuild,
//! `draw_3d`, then `draw_2d`.

mod clock;
/// Commands and host responses.
pub mod command;
/// Status readout text.
pub mod hud;
/// Repeating ground and grid overlays.
pub mod overlay;
/// Client hooks and per-pass frame data.
pub mod scene;
/// The viewer's context object.
pub mod view;

use glam::Mat4;

pub use clock::FrameClock;
pub use command::{Response, ViewCommand};
pub use hud::hud_lines;
pub use overlay::{GridCross, GridOverlay, GroundOverlay, Overlays};
pub use scene::{EmptyScene, Frame, RenderPass, Scene};
pub use view::ViewState;

use crate::camera::{projection, PerspectiveMode};
use crate::input::InputEvent;
use crate::options::Options;
use crate::settings::SettingFlag;

/// Runs the tick protocol over a [`ViewState`] and a client [`Scene`].
pub struct ViewportCoordinator {
    state: ViewState,
    scene: Box<dyn Scene>,
    clock: FrameClock,
    active_transform: Mat4,
}

impl std::fmt::Debug for ViewportCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportCoordinator")
            .field("state", &self.state)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

impl ViewportCoordinator {
    /// Create a coordinator and run the scene's `setup` hook.
    #[must_use]
    pub fn new(options: &Options, scene: Box<dyn Scene>) -> Self {
        let mut coordinator = Self {
            state: ViewState::new(options),
            scene,
            clock: FrameClock::new(),
            active_transform: Mat4::IDENTITY,
        };
        coordinator.scene.setup(&mut coordinator.state);
        coordinator.state.rebuild_projection();
        coordinator.active_transform = coordinator.transform_3d();
        log::debug!(
            "viewport ready: {} at {}x{}",
            coordinator.state.mode(),
            coordinator.state.viewport().width(),
            coordinator.state.viewport().height()
        );
        coordinator
    }

    /// The viewer state.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Mutable viewer state, for hosts issuing commands directly.
    pub fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    /// Frame counter and timing.
    #[must_use]
    pub const fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// The transform left active after the last tick. Always the 3D one,
    /// so nothing from the 2D pass leaks into the next frame.
    #[must_use]
    pub const fn active_transform(&self) -> Mat4 {
        self.active_transform
    }

    /// Whether the host should keep ticking with no new input.
    #[must_use]
    pub fn wants_idle_ticks(&self) -> bool {
        self.state.continuous_refresh() || self.state.input().any_key_down()
    }

    // ── Tick ────────────────────────────────────────────────────────

    /// Run one full tick: [`update`](Self::update) then
    /// [`draw`](Self::draw).
    pub fn tick(&mut self) {
        self.update();
        self.draw();
    }

    /// Advance the clock, apply held keys, run the scene's `update`, and
    /// rebuild the projection.
    pub fn update(&mut self) {
        let _ = self.clock.advance();
        let _ = self.state.apply_held_keys();
        self.scene.update(&mut self.state);
        self.state.rebuild_projection();
    }

    /// Run both draw hooks, then restore the 3D transform.
    pub fn draw(&mut self) {
        let state = &self.state;
        let matrices = state.projection();

        let scene_frame = Frame {
            pass: RenderPass::Scene3D,
            projection: matrices.projection,
            view: matrices.view,
            world: state.world_transform(),
            overlays: Overlays::new(state.camera().origin, state.settings()),
            number: self.clock.frame(),
            elapsed: self.clock.elapsed(),
            state,
        };
        self.active_transform = scene_frame.transform();
        self.scene.draw_3d(&scene_frame);

        let overlay_frame = Frame {
            pass: RenderPass::Overlay2D,
            projection: projection::screen_space(
                state.viewport(),
                state.camera().handedness,
            ),
            view: Mat4::IDENTITY,
            world: Mat4::IDENTITY,
            overlays: Overlays::default(),
            ..scene_frame
        };
        self.active_transform = overlay_frame.transform();
        self.scene.draw_2d(&overlay_frame);

        self.active_transform = self.transform_3d();
    }

    fn transform_3d(&self) -> Mat4 {
        self.state.projection().view_projection() * self.state.world_transform()
    }

    // ── Input ───────────────────────────────────────────────────────

    /// Apply one input event, then forward it to the scene.
    ///
    /// A key-down for a key that is already held is dropped entirely, as
    /// is a key-up for a key that was never pressed.
    pub fn handle_event(&mut self, event: InputEvent) -> Response {
        let state = &mut self.state;
        match event {
            InputEvent::KeyDown { key } => {
                if !state.input_mut().press_key(key) {
                    return Response::NONE;
                }
                let response = state.key_shortcut(key);
                Response::REDRAW
                    .merge(response)
                    .merge(self.scene.key_down(key, state))
            }
            InputEvent::KeyUp { key } => {
                if !state.input_mut().release_key(key) {
                    return Response::NONE;
                }
                Response::REDRAW.merge(self.scene.key_up(key, state))
            }
            InputEvent::MouseButton {
                button,
                pressed,
                x,
                y,
            } => {
                let position = state.handed_position(x, y);
                let response = if pressed {
                    let _ = state.input_mut().press_button(button, position);
                    self.scene.mouse_down(button, position, state)
                } else {
                    let _ = state.input_mut().move_mouse(position);
                    let _ = state.input_mut().release_button(button);
                    self.scene.mouse_up(button, position, state)
                };
                Response::REDRAW.merge(response)
            }
            InputEvent::CursorMoved { x, y } => {
                let position = state.handed_position(x, y);
                let _ = state.track_cursor(position);
                let dragging = state.input().is_dragging();
                Response::REDRAW
                    .merge(self.scene.mouse_moved(position, dragging, state))
            }
            InputEvent::Resized { width, height } => {
                state.resize(width, height)
            }
        }
    }

    // ── Commands ────────────────────────────────────────────────────

    /// See [`ViewState::execute`].
    pub fn execute(&mut self, command: ViewCommand) -> Response {
        self.state.execute(command)
    }

    /// See [`ViewState::set_mode`].
    pub fn set_mode(&mut self, mode: PerspectiveMode) -> Response {
        self.state.set_mode(mode)
    }

    /// See [`ViewState::cycle_mode`].
    pub fn cycle_mode(&mut self) -> Response {
        self.state.cycle_mode()
    }

    /// See [`ViewState::resize`].
    pub fn resize(&mut self, width: u32, height: u32) -> Response {
        self.state.resize(width, height)
    }

    /// See [`ViewState::toggle_fullscreen`].
    pub fn toggle_fullscreen(&mut self) -> Response {
        self.state.toggle_fullscreen()
    }

    /// See [`ViewState::adjust_zoom`].
    pub fn adjust_zoom(&mut self, delta: f32) -> Response {
        self.state.adjust_zoom(delta)
    }

    /// See [`ViewState::adjust_fov`].
    pub fn adjust_fov(&mut self, delta: f32) -> Response {
        self.state.adjust_fov(delta)
    }

    /// See [`ViewState::toggle_flag`].
    pub fn toggle_flag(&mut self, flag: SettingFlag) -> Response {
        self.state.toggle_flag(flag)
    }

    /// See [`ViewState::set_flag`].
    pub fn set_flag(&mut self, flag: SettingFlag, enabled: bool) -> Response {
        self.state.set_flag(flag, enabled)
    }

    /// See [`ViewState::flag`].
    #[must_use]
    pub const fn flag(&self, flag: SettingFlag) -> bool {
        self.state.flag(flag)
    }
}
