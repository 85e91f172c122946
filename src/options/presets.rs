use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::CameraPreset;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
/// A named viewpoint as written in the options file.
///
/// ```toml
/// [[presets]]
/// name = "Front"
/// position = [0.0, 1.0, 8.0]
/// look_at = [0.0, 1.0, 0.0]
/// ```
pub struct PresetOptions {
    /// Preset name used by `move_to_preset`.
    pub name: String,
    /// Camera position.
    pub position: [f32; 3],
    /// Look-at point.
    #[serde(default)]
    pub look_at: [f32; 3],
}

impl PresetOptions {
    /// Camera preset described by this entry.
    #[must_use]
    pub fn preset(&self) -> CameraPreset {
        CameraPreset::new(
            Vec3::from_array(self.position),
            Vec3::from_array(self.look_at),
        )
    }

    /// The standard viewpoint set at `distance` from the origin.
    #[must_use]
    pub fn standard_set(distance: f32) -> Vec<Self> {
        CameraPreset::standard_set(distance)
            .into_iter()
            .map(|(name, preset)| Self {
                name: name.to_owned(),
                position: preset.position.to_array(),
                look_at: preset.look_at.to_array(),
            })
            .collect()
    }
}
