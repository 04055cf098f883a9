use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Window", inline)]
#[serde(default)]
/// Initial window geometry and refresh policy.
pub struct WindowOptions {
    /// Window title.
    #[schemars(skip)]
    pub title: String,
    /// Initial width in pixels.
    #[schemars(skip)]
    pub width: u32,
    /// Initial height in pixels.
    #[schemars(skip)]
    pub height: u32,
    /// Scale of the initial ortho window.
    #[schemars(title = "World Units per Pixel", range(min = 0.001, max = 1.0))]
    pub world_units_per_pixel: f32,
    /// Tick every frame; when off, tick only while a key is held or after
    /// input.
    #[schemars(title = "Continuous Refresh")]
    pub continuous_refresh: bool,
    /// Start in fullscreen.
    #[schemars(title = "Fullscreen")]
    pub fullscreen: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "Vantage".into(),
            width: 800,
            height: 600,
            world_units_per_pixel: 0.02,
            continuous_refresh: true,
            fullscreen: false,
        }
    }
}
