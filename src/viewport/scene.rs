//! The client side of the viewer.
//!
//! A [`Scene`] supplies content and reacts to input. The coordinator calls
//! its hooks in a fixed order each tick, handing the draw hooks a [`Frame`]
//! describing the transform to render under.

use glam::{Mat4, Vec2};
use web_time::Duration;

use super::command::Response;
use super::overlay::Overlays;
use super::view::ViewState;
use crate::input::{Key, MouseButton};

/// Which half of the tick a [`Frame`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPass {
    /// The 3D scene under the active perspective.
    Scene3D,
    /// The flat overlay in screen pixels.
    Overlay2D,
}

/// Everything a draw hook needs for one pass.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// The pass being drawn.
    pub pass: RenderPass,
    /// Projection matrix for this pass.
    pub projection: Mat4,
    /// View (camera) matrix. Identity in the 2D pass.
    pub view: Mat4,
    /// World transform. `T(-origin)` in the 3D pass when keyboard movement
    /// is on, otherwise identity.
    pub world: Mat4,
    /// Enabled ground and grid overlays. Empty in the 2D pass.
    pub overlays: Overlays,
    /// Tick number, starting at 1.
    pub number: u64,
    /// Time since the viewer started.
    pub elapsed: Duration,
    /// The viewer state this frame was built from.
    pub state: &'a ViewState,
}

impl Frame<'_> {
    /// Full transform: `projection * view * world`.
    #[must_use]
    pub fn transform(&self) -> Mat4 {
        self.projection * self.view * self.world
    }

    /// Transform for the repeating overlays, which are anchored in view
    /// space rather than moved by the world transform.
    #[must_use]
    pub fn overlay_transform(&self) -> Mat4 {
        self.projection * self.view
    }
}

/// Client hooks. Every method has a no-op default.
///
/// Input hooks run after the viewer's own handling of the event and may
/// steer the camera through the [`ViewState`]. Their [`Response`] is merged
/// into the one returned to the host.
pub trait Scene {
    /// Called once when the coordinator is created.
    fn setup(&mut self, _state: &mut ViewState) {}

    /// Called every tick after held keys are applied, before the
    /// projection is rebuilt.
    fn update(&mut self, _state: &mut ViewState) {}

    /// Draw the 3D scene.
    fn draw_3d(&mut self, _frame: &Frame<'_>) {}

    /// Draw the screen-space overlay.
    fn draw_2d(&mut self, _frame: &Frame<'_>) {}

    /// A key went down (fresh presses only; auto-repeat is filtered).
    fn key_down(&mut self, _key: Key, _state: &mut ViewState) -> Response {
        Response::NONE
    }

    /// A key went up.
    fn key_up(&mut self, _key: Key, _state: &mut ViewState) -> Response {
        Response::NONE
    }

    /// A mouse button went down at `position` (handed screen pixels).
    fn mouse_down(
        &mut self,
        _button: MouseButton,
        _position: Vec2,
        _state: &mut ViewState,
    ) -> Response {
        Response::NONE
    }

    /// A mouse button went up at `position` (handed screen pixels).
    fn mouse_up(
        &mut self,
        _button: MouseButton,
        _position: Vec2,
        _state: &mut ViewState,
    ) -> Response {
        Response::NONE
    }

    /// The cursor moved to `position` (handed screen pixels). `dragging`
    /// is true while any button is held.
    fn mouse_moved(
        &mut self,
        _position: Vec2,
        _dragging: bool,
        _state: &mut ViewState,
    ) -> Response {
        Response::NONE
    }
}

/// A scene with no content, for hosts that only want the camera.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyScene;

impl Scene for EmptyScene {}
