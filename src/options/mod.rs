//! Centralized shell options with TOML preset support.
//!
//! Camera defaults, control tuning, window geometry, feature flags and key
//! bindings are consolidated here. Options serialize to/from TOML so a
//! viewer setup can be saved and reloaded as a preset.

mod camera;
mod controls;
mod keybindings;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use controls::ControlOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::VantageError;
use crate::settings::{SettingFlag, SettingsFlags};

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[controls]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Enabled feature flags. Kept first so it serializes ahead of the
    /// tables.
    #[schemars(with = "Vec<SettingFlag>")]
    pub settings: SettingsFlags,
    /// Initial camera pose and projection parameters.
    pub camera: CameraOptions,
    /// Mouse and keyboard tuning.
    pub controls: ControlOptions,
    /// Window geometry and refresh policy.
    pub window: WindowOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path).map_err(VantageError::Io)?;
        toml::from_str(&content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VantageError::Io)?;
        }
        std::fs::write(path, content).map_err(VantageError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{Handedness, PerspectiveMode};
    use crate::input::{Key, KeyAction};

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
settings = ["mouse_look", "show_grid"]

[camera]
mode = "polar"
handedness = "right"
distance = 3.3

[keybindings.bindings]
cycle_mode = ["Tab"]
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.mode, PerspectiveMode::Polar);
        assert_eq!(opts.camera.handedness, Handedness::Right);
        assert_eq!(opts.camera.distance, 3.3);
        // Everything else should be default
        assert_eq!(opts.camera.fov, 0.1);
        assert_eq!(opts.controls.mouse_sensitivity, 0.333);
        assert_eq!(opts.window.width, 800);

        assert!(opts.settings.contains(SettingFlag::MouseLook));
        assert!(!opts.settings.contains(SettingFlag::KeyboardMove));
        assert_eq!(
            opts.keybindings.lookup(Key::TAB),
            Some(KeyAction::CycleMode)
        );
    }

    #[test]
    fn bad_key_name_is_a_parse_error() {
        let toml_str = r#"
[keybindings.bindings]
quit = ["NotAKey"]
"#;
        assert!(toml::from_str::<Options>(toml_str).is_err());
    }

    #[test]
    fn save_then_load_preset() {
        let dir = std::env::temp_dir()
            .join(format!("vantage-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.camera.mode = PerspectiveMode::Orthographic;
        opts.settings.remove(SettingFlag::ShowGround);

        let path = dir.join("flat.toml");
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["flat".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Options::load(Path::new("/nonexistent/vantage.toml"))
            .unwrap_err();
        assert!(matches!(err, VantageError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("controls"));
        assert!(props.contains_key("window"));
        assert!(props.contains_key("settings"));
        // Skipped sections should be absent
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fov").is_some());
        assert!(camera.get("near_clip").is_none());
    }
}
