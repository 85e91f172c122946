use glam::Mat4;

use super::types::{CameraConfig, CameraState};
use crate::math::Vector3;

/// Perspective camera snapshot handed to the renderer each frame.
///
/// Built from the controller's current pose and lens configuration; the
/// renderer applies it to its own camera object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vector3,
    /// Look-at target position.
    pub target: Vector3,
    /// Up direction vector.
    pub up: Vector3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Snapshot a pose through a lens.
    #[must_use]
    pub fn from_state(state: &CameraState, config: &CameraConfig) -> Self {
        Self {
            eye: state.position,
            target: state.look_at,
            up: state.up,
            aspect: config.aspect_ratio,
            fovy: config.vertical_fov_degrees(),
            znear: config.near_plane,
            zfar: config.far_plane,
        }
    }

    /// Right-handed view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Right-handed perspective projection with a [0,1] depth range.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.projection() * self.view_matrix()
    }

    /// Unit vector from eye toward target (zero when they coincide).
    #[must_use]
    pub fn forward(&self) -> Vector3 {
        (self.target - self.eye).normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_copies_pose_and_lens() {
        let state = CameraState {
            position: Vector3::new(0.0, 0.0, 10.0),
            ..CameraState::default()
        };
        let config = CameraConfig::default();
        let camera = Camera::from_state(&state, &config);
        assert_eq!(camera.eye, state.position);
        assert_eq!(camera.target, Vector3::ZERO);
        assert_eq!(camera.znear, config.near_plane);
        assert!((camera.fovy - config.vertical_fov_degrees()).abs() < 1e-6);
        assert_eq!(camera.forward(), Vector3::NEG_Z);
    }

    #[test]
    fn target_projects_to_view_center() {
        let state = CameraState {
            position: Vector3::new(3.0, 4.0, 5.0),
            look_at: Vector3::new(1.0, 0.0, -1.0),
            ..CameraState::default()
        };
        let camera = Camera::from_state(&state, &CameraConfig::default());
        let clip = camera.build_matrix().project_point3(state.look_at);
        assert!(clip.x.abs() < 1e-4);
        assert!(clip.y.abs() < 1e-4);
    }
}
