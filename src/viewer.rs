//! Standalone viewer window backed by winit.
//!
//! The window renders nothing itself. It converts window events into
//! [`InputEvent`]s, ticks the [`ViewportCoordinator`] on redraw and applies
//! the fullscreen and exit requests it returns.
//!
//! ```no_run
//! # use vantage::{viewport::EmptyScene, Viewer};
//! Viewer::builder()
//!     .with_title("Orbit")
//!     .build()
//!     .run(Box::new(EmptyScene))
//!     .unwrap();
//! ```

use std::sync::Arc;

use rustc_hash::FxHashMap;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Fullscreen, Window, WindowId},
};

use crate::{
    error::VantageError,
    input::{InputEvent, Key, MouseButton},
    options::Options,
    viewport::{Response, Scene, ViewportCoordinator},
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
#[derive(Debug)]
pub struct ViewerBuilder {
    options: Option<Options>,
    title: Option<String>,
}

impl ViewerBuilder {
    /// Create a builder with default options and the options' title.
    fn new() -> Self {
        Self {
            options: None,
            title: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let mut options = self.options.unwrap_or_default();
        if let Some(title) = self.title {
            options.window.title = title;
        }
        Viewer { options }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window hosting one [`Scene`].
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
#[derive(Debug)]
pub struct Viewer {
    options: Options,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed or the scene asks to quit.
    pub fn run(self, scene: Box<dyn Scene>) -> Result<(), VantageError> {
        let event_loop = EventLoop::new()
            .map_err(|e| VantageError::Viewer(e.to_string()))?;
        let control_flow = if self.options.window.continuous_refresh {
            ControlFlow::Poll
        } else {
            ControlFlow::Wait
        };
        event_loop.set_control_flow(control_flow);

        let mut app = ViewerApp {
            window: None,
            coordinator: ViewportCoordinator::new(&self.options, scene),
            held: FxHashMap::default(),
            cursor: (0.0, 0.0),
            options: self.options,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| VantageError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    coordinator: ViewportCoordinator,
    /// Key reported at press time for each held physical key, so the
    /// release matches it even if modifiers changed in between.
    held: FxHashMap<PhysicalKey, Key>,
    /// Last cursor position in raw top-down pixels.
    cursor: (f32, f32),
    options: Options,
}

impl ViewerApp {
    /// Act on a coordinator response.
    fn apply(&self, response: Response, event_loop: &ActiveEventLoop) {
        if response.exit {
            event_loop.exit();
            return;
        }
        let Some(window) = &self.window else {
            return;
        };
        if let Some(fullscreen) = response.fullscreen {
            window.set_fullscreen(
                fullscreen.then_some(Fullscreen::Borderless(None)),
            );
        }
        if response.redraw {
            window.request_redraw();
        }
    }

    /// Translate a keyboard event into a key press or release.
    fn key_event(&mut self, event: &KeyEvent) -> Option<InputEvent> {
        match event.state {
            ElementState::Pressed => {
                let key = Key::from_winit(&event.logical_key)?;
                let _ = self.held.insert(event.physical_key, key);
                Some(InputEvent::KeyDown { key })
            }
            ElementState::Released => {
                let key = self.held.remove(&event.physical_key)?;
                Some(InputEvent::KeyUp { key })
            }
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_options = &self.options.window;
        let attrs = Window::default_attributes()
            .with_title(&window_options.title)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                window_options.width,
                window_options.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let monitor = window
            .current_monitor()
            .or_else(|| event_loop.primary_monitor());
        if let Some(mon) = monitor {
            let size = mon.size();
            self.coordinator
                .state_mut()
                .set_screen_size(size.width, size.height);
        }

        let inner = window.inner_size();
        let _ = self.coordinator.resize(inner.width, inner.height);
        if self.coordinator.state().is_fullscreen() {
            window.set_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        if self.window.is_none() {
            return;
        }

        let input = match event {
            WindowEvent::Resized(size) => Some(InputEvent::Resized {
                width: size.width,
                height: size.height,
            }),

            WindowEvent::RedrawRequested => {
                self.coordinator.tick();
                if self.coordinator.wants_idle_ticks() {
                    if let Some(w) = &self.window {
                        w.request_redraw();
                    }
                }
                None
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let (x, y) = self.cursor;
                Some(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                    x,
                    y,
                })
            }

            WindowEvent::CursorMoved { position, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                let (x, y) = (position.x as f32, position.y as f32);
                self.cursor = (x, y);
                Some(InputEvent::CursorMoved { x, y })
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                self.key_event(&event)
            }

            WindowEvent::Focused(false) => {
                // Releases are not delivered to an unfocused window.
                let held: Vec<Key> =
                    self.held.drain().map(|(_, key)| key).collect();
                let mut response = Response::NONE;
                for key in held {
                    let released = InputEvent::KeyUp { key };
                    response = response
                        .merge(self.coordinator.handle_event(released));
                }
                self.apply(response, event_loop);
                None
            }

            _ => None,
        };

        if let Some(input) = input {
            let response = self.coordinator.handle_event(input);
            self.apply(response, event_loop);
        }
    }
}
