//! Viewpoint control: camera pose, orbit gestures, named presets and smooth
//! transitions.

/// Preset registry, orbit math and transition stepping.
pub mod controller;
/// Render-facing camera snapshot and matrices.
pub mod core;
/// Camera data model.
pub mod types;

pub use controller::ViewpointController;
pub use self::core::Camera;
pub use types::{CameraConfig, CameraPreset, CameraState, OrbitConfig};
