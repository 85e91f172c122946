//! Camera data model: presets, pose state, lens and orbit configuration.

use crate::math::{Quaternion, Vector3};

/// Named viewpoint: a camera position and the point it looks at.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraPreset {
    /// Camera position in world space.
    pub position: Vector3,
    /// Look-at point in world space.
    pub look_at: Vector3,
}

impl CameraPreset {
    /// Create a preset from a position and look-at point.
    #[must_use]
    pub const fn new(position: Vector3, look_at: Vector3) -> Self {
        Self { position, look_at }
    }

    /// The standard product-viewer viewpoints around the origin at the
    /// given distance.
    ///
    /// Names: `Front`, `Rear`, `Left`, `Right`, `Top`, `ThreeQuarter`.
    #[must_use]
    pub fn standard_set(distance: f32) -> Vec<(&'static str, Self)> {
        let d = distance;
        let three_quarter = Vector3::new(1.0, 0.5, 1.0).normalize() * d;
        vec![
            ("Front", Self::new(Vector3::new(0.0, 0.0, d), Vector3::ZERO)),
            ("Rear", Self::new(Vector3::new(0.0, 0.0, -d), Vector3::ZERO)),
            ("Left", Self::new(Vector3::new(-d, 0.0, 0.0), Vector3::ZERO)),
            ("Right", Self::new(Vector3::new(d, 0.0, 0.0), Vector3::ZERO)),
            ("Top", Self::new(Vector3::new(0.0, d, 0.0), Vector3::ZERO)),
            ("ThreeQuarter", Self::new(three_quarter, Vector3::ZERO)),
        ]
    }
}

/// Mutable camera pose plus orbit bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Camera position in world space.
    pub position: Vector3,
    /// Look-at point in world space.
    pub look_at: Vector3,
    /// Up direction.
    pub up: Vector3,
    /// Orbit rotation. Carried for consumers; the orbit math recomputes
    /// spherical angles from `position` on every gesture.
    pub orbit_rotation: Quaternion,
    /// Distance from the orbit pivot.
    pub orbit_distance: f32,
    /// Whether a smooth transition is in progress.
    pub is_moving: bool,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: Vector3::ZERO,
            look_at: Vector3::ZERO,
            up: Vector3::Y,
            orbit_rotation: Quaternion::IDENTITY,
            orbit_distance: 10.0,
            is_moving: false,
        }
    }
}

/// Physical lens parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Focal length in millimeters.
    pub focal_length_mm: f32,
    /// Sensor height in millimeters.
    pub sensor_height_mm: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Near clipping plane distance.
    pub near_plane: f32,
    /// Far clipping plane distance.
    pub far_plane: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            focal_length_mm: 80.0,
            sensor_height_mm: 24.0,
            aspect_ratio: 16.0 / 9.0,
            near_plane: 0.1,
            far_plane: 1000.0,
        }
    }
}

impl CameraConfig {
    /// Vertical field of view in radians, derived from sensor height and
    /// focal length.
    #[must_use]
    pub fn vertical_fov(&self) -> f32 {
        2.0 * (self.sensor_height_mm / (2.0 * self.focal_length_mm)).atan()
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn vertical_fov_degrees(&self) -> f32 {
        self.vertical_fov().to_degrees()
    }
}

/// Orbit constraints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitConfig {
    /// Closest allowed distance to the pivot.
    pub min_distance: f32,
    /// Farthest allowed distance from the pivot.
    pub max_distance: f32,
    /// Orbit pivot point.
    pub target: Vector3,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            min_distance: 2.0,
            max_distance: 50.0,
            target: Vector3::ZERO,
        }
    }
}
