use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::OrbitConfig;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit", inline)]
#[serde(default)]
/// Orbit gesture settings.
pub struct OrbitOptions {
    /// Whether orbit gestures are enabled at startup.
    #[schemars(title = "Orbit Enabled")]
    pub enabled: bool,
    /// Closest allowed distance to the pivot.
    #[schemars(title = "Min Distance", range(min = 0.1, max = 100.0), extend("step" = 0.1))]
    pub min_distance: f32,
    /// Farthest allowed distance from the pivot.
    #[schemars(title = "Max Distance", range(min = 1.0, max = 1000.0), extend("step" = 1.0))]
    pub max_distance: f32,
    /// Orbit pivot point.
    #[schemars(skip)]
    pub target: [f32; 3],
}

impl Default for OrbitOptions {
    fn default() -> Self {
        let orbit = OrbitConfig::default();
        Self {
            enabled: false,
            min_distance: orbit.min_distance,
            max_distance: orbit.max_distance,
            target: orbit.target.to_array(),
        }
    }
}

impl OrbitOptions {
    /// Orbit constraints described by these options.
    #[must_use]
    pub fn orbit_config(&self) -> OrbitConfig {
        OrbitConfig {
            min_distance: self.min_distance,
            max_distance: self.max_distance,
            target: Vec3::from_array(self.target),
        }
    }
}
