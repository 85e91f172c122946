//! Viewer configuration with TOML file support.
//!
//! Lens, orbit bounds, transition speed, named viewpoints and playback
//! defaults are consolidated here. Every section uses `#[serde(default)]`
//! so partial files (e.g. only an `[orbit]` table) load correctly.

mod camera;
mod orbit;
mod playback;
mod presets;

use std::path::Path;

pub use camera::CameraOptions;
pub use orbit::OrbitOptions;
pub use playback::PlaybackOptions;
pub use presets::PresetOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ViewkitError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Lens parameters and transition tuning.
    pub camera: CameraOptions,
    /// Orbit gesture settings.
    pub orbit: OrbitOptions,
    /// Animation playback defaults.
    pub playback: PlaybackOptions,
    /// Named viewpoints registered at startup.
    #[schemars(skip)]
    pub presets: Vec<PresetOptions>,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ViewkitError> {
        toml::from_str(content)
            .map_err(|e| ViewkitError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ViewkitError> {
        let content = std::fs::read_to_string(path).map_err(ViewkitError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ViewkitError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewkitError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ViewkitError::Io)?;
        }
        std::fs::write(path, content).map_err(ViewkitError::Io)
    }

    /// List available option file names (TOML file stems) in a directory.
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
    use crate::camera::{CameraConfig, OrbitConfig, ViewpointController};
    use crate::math::Vector3;

    #[test]
    fn default_round_trips_through_toml() {
        let mut opts = Options::default();
        opts.presets = PresetOptions::standard_set(12.0);
        opts.camera.initial_preset = Some("Front".to_owned());
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn defaults_match_controller_defaults() {
        let opts = Options::default();
        assert_eq!(opts.camera.lens_config(), CameraConfig::default());
        assert_eq!(opts.orbit.orbit_config(), OrbitConfig::default());
        assert!(opts.presets.is_empty());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[orbit]
enabled = true
min_distance = 4.0

[[presets]]
name = 'Top'
position = [0.0, 10.0, 0.0]
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert!(opts.orbit.enabled);
        assert_eq!(opts.orbit.min_distance, 4.0);
        // Everything else should be default
        assert_eq!(opts.orbit.max_distance, 50.0);
        assert_eq!(opts.camera.focal_length_mm, 80.0);
        assert_eq!(opts.presets.len(), 1);
        assert_eq!(opts.presets[0].look_at, [0.0; 3]);
        assert!(!opts.playback.looping);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml_str("[orbit\nenabled = true").unwrap_err();
        assert!(matches!(err, ViewkitError::OptionsParse(_)));
    }

    #[test]
    fn controller_built_from_options() {
        let toml_str = r"
[camera]
focal_length_mm = 12.0
transition_speed = 2.5
initial_preset = 'Top'

[orbit]
enabled = true
max_distance = 30.0

[[presets]]
name = 'Top'
position = [0.0, 10.0, 0.0]
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        let controller = ViewpointController::from_options(&opts);
        assert_eq!(controller.transition_speed(), 2.5);
        assert_eq!(controller.orbit_config().max_distance, 30.0);
        assert!(controller.is_orbit_enabled());
        assert_eq!(controller.state().position, Vector3::new(0.0, 10.0, 0.0));
        assert_eq!(controller.state().orbit_distance, 10.0);
        assert!((controller.calculate_vertical_fov_degrees() - 90.0).abs() < 1e-4);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = std::env::temp_dir().join(format!(
            "viewkit-options-{}",
            std::process::id()
        ));
        let path = dir.join("studio.toml");
        let mut opts = Options::default();
        opts.playback.autoplay = Some("Idle".to_owned());
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["studio".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Options::load(Path::new("/nonexistent/viewkit.toml")).unwrap_err();
        assert!(matches!(err, ViewkitError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("orbit"));
        assert!(props.contains_key("playback"));
        assert!(!props.contains_key("presets"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("focal_length_mm").is_some());
        assert!(camera.get("transition_speed").is_some());
        assert!(camera.get("near_plane").is_none());
    }
}
