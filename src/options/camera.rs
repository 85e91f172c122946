use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::CameraConfig;
use crate::camera::controller::DEFAULT_TRANSITION_SPEED;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Lens parameters and transition tuning.
pub struct CameraOptions {
    /// Focal length in millimeters.
    #[schemars(title = "Focal Length", range(min = 10.0, max = 300.0), extend("step" = 1.0))]
    pub focal_length_mm: f32,
    /// Sensor height in millimeters.
    #[schemars(skip)]
    pub sensor_height_mm: f32,
    /// Viewport aspect ratio (width / height).
    #[schemars(skip)]
    pub aspect_ratio: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub near_plane: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub far_plane: f32,
    /// Smooth preset transition speed (per second).
    #[schemars(title = "Transition Speed", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub transition_speed: f32,
    /// Preset to jump to when the controller is built.
    #[schemars(skip)]
    pub initial_preset: Option<String>,
}

impl Default for CameraOptions {
    fn default() -> Self {
        let lens = CameraConfig::default();
        Self {
            focal_length_mm: lens.focal_length_mm,
            sensor_height_mm: lens.sensor_height_mm,
            aspect_ratio: lens.aspect_ratio,
            near_plane: lens.near_plane,
            far_plane: lens.far_plane,
            transition_speed: DEFAULT_TRANSITION_SPEED,
            initial_preset: None,
        }
    }
}

impl CameraOptions {
    /// Lens configuration described by these options.
    #[must_use]
    pub fn lens_config(&self) -> CameraConfig {
        CameraConfig {
            focal_length_mm: self.focal_length_mm,
            sensor_height_mm: self.sensor_height_mm,
            aspect_ratio: self.aspect_ratio,
            near_plane: self.near_plane,
            far_plane: self.far_plane,
        }
    }
}
