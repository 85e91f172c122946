use std::collections::HashMap;

use super::core::Camera;
use super::types::{CameraConfig, CameraPreset, CameraState, OrbitConfig};
use crate::math::{lerp_vec3, Vector3};
use crate::options::Options;

/// Default smooth-transition speed (interpolation factor per second).
pub const DEFAULT_TRANSITION_SPEED: f32 = 5.0;

/// A transition is finished once both position and look-at are this close
/// to the target.
pub const ARRIVAL_EPSILON: f32 = 0.01;

/// Lowest allowed polar angle (radians) measured from +Y.
pub const MIN_ELEVATION: f32 = 0.1;

/// Highest allowed polar angle (radians) measured from +Y.
pub const MAX_ELEVATION: f32 = 3.04;

/// Viewpoint controller: orbit gestures, named presets, and smooth
/// preset-to-preset transitions.
///
/// The controller is either *settled* (`current == target`) or *moving*
/// toward `target`. Orbit gestures always leave it settled; only
/// [`move_to_preset`](Self::move_to_preset) with `smooth = true` starts a
/// transition, which [`update`](Self::update) converges once per frame.
#[derive(Debug, Clone)]
pub struct ViewpointController {
    config: CameraConfig,
    orbit_config: OrbitConfig,

    current: CameraState,
    target: CameraState,

    presets: HashMap<String, CameraPreset>,

    orbit_enabled: bool,
    transition_speed: f32,
}

impl Default for ViewpointController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewpointController {
    /// Create a settled controller with default lens and orbit settings and
    /// no presets.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: CameraConfig::default(),
            orbit_config: OrbitConfig::default(),
            current: CameraState::default(),
            target: CameraState::default(),
            presets: HashMap::new(),
            orbit_enabled: false,
            transition_speed: DEFAULT_TRANSITION_SPEED,
        }
    }

    /// Build a controller from loaded options: lens, orbit bounds,
    /// transition speed and presets. Orbit is enabled last so its distance
    /// is seeded from the initial pose.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        let mut controller = Self::new();
        controller.set_config(options.camera.lens_config());
        controller.set_orbit_config(options.orbit.orbit_config());
        controller.set_transition_speed(options.camera.transition_speed);
        for preset in &options.presets {
            controller.register_preset(preset.name.clone(), preset.preset());
        }
        if let Some(initial) = options.camera.initial_preset.as_deref() {
            if !controller.move_to_preset(initial, false) {
                log::warn!("Initial camera preset '{initial}' is not registered");
            }
        }
        controller.set_orbit_enabled(options.orbit.enabled);
        controller
    }

    // ── Configuration ────────────────────────────────────────────────────

    /// Replace the lens configuration.
    pub fn set_config(&mut self, config: CameraConfig) {
        self.config = config;
    }

    /// Replace the orbit constraints.
    pub fn set_orbit_config(&mut self, config: OrbitConfig) {
        self.orbit_config = config;
    }

    /// Current lens configuration.
    #[must_use]
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Current orbit constraints.
    #[must_use]
    pub fn orbit_config(&self) -> &OrbitConfig {
        &self.orbit_config
    }

    /// Set how fast smooth transitions converge (per second).
    pub fn set_transition_speed(&mut self, speed: f32) {
        self.transition_speed = speed;
    }

    /// Smooth transition speed (per second).
    #[must_use]
    pub fn transition_speed(&self) -> f32 {
        self.transition_speed
    }

    // ── Presets ──────────────────────────────────────────────────────────

    /// Register a preset, replacing any existing preset with that name.
    pub fn register_preset(
        &mut self,
        name: impl Into<String>,
        preset: CameraPreset,
    ) {
        let _ = self.presets.insert(name.into(), preset);
    }

    /// Look up a preset by name.
    #[must_use]
    pub fn get_preset(&self, name: &str) -> Option<&CameraPreset> {
        self.presets.get(name)
    }

    /// Registered preset names, sorted.
    #[must_use]
    pub fn preset_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.presets.keys().cloned().collect();
        names.sort();
        names
    }

    /// Move to a registered preset.
    ///
    /// With `smooth`, only the target pose changes and the controller starts
    /// moving; otherwise both poses jump immediately. Returns `false` (and
    /// changes nothing) if the preset is unknown.
    pub fn move_to_preset(&mut self, name: &str, smooth: bool) -> bool {
        let Some(preset) = self.presets.get(name).copied() else {
            log::warn!("Unknown camera preset '{name}'");
            return false;
        };

        self.target.position = preset.position;
        self.target.look_at = preset.look_at;
        if smooth {
            self.current.is_moving = true;
        } else {
            self.current.position = preset.position;
            self.current.look_at = preset.look_at;
            self.current.is_moving = false;
        }
        log::debug!("Camera moving to preset '{name}' (smooth: {smooth})");
        true
    }

    // ── Direct control ───────────────────────────────────────────────────

    /// Jump both poses to `position` looking at `look_at` and settle.
    pub fn set_camera(&mut self, position: Vector3, look_at: Vector3) {
        let distance = (position - look_at).length();
        for state in [&mut self.current, &mut self.target] {
            state.position = position;
            state.look_at = look_at;
            state.orbit_distance = distance;
        }
        self.current.is_moving = false;
    }

    /// Pose the renderer should draw this frame.
    #[must_use]
    pub fn state(&self) -> &CameraState {
        &self.current
    }

    /// Destination of the in-progress transition (equal to
    /// [`state`](Self::state) when settled).
    #[must_use]
    pub fn target_state(&self) -> &CameraState {
        &self.target
    }

    /// Whether a smooth transition is in progress.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.current.is_moving
    }

    /// Render-facing camera snapshot of the current pose.
    #[must_use]
    pub fn camera(&self) -> Camera {
        Camera::from_state(&self.current, &self.config)
    }

    // ── Orbit ────────────────────────────────────────────────────────────

    /// Enable or disable orbit gestures. Enabling re-seeds the orbit
    /// distance from the current pose without moving the camera.
    pub fn set_orbit_enabled(&mut self, enabled: bool) {
        self.orbit_enabled = enabled;
        if enabled {
            self.initialize_orbit_from_camera();
        }
    }

    /// Whether orbit gestures are applied.
    #[must_use]
    pub fn is_orbit_enabled(&self) -> bool {
        self.orbit_enabled
    }

    /// Re-seed the orbit distance from the current position relative to the
    /// orbit pivot.
    pub fn initialize_orbit_from_camera(&mut self) {
        let distance = (self.current.position - self.orbit_config.target).length();
        self.current.orbit_distance = distance;
        self.target.orbit_distance = distance;
    }

    /// Rotate the camera around the orbit pivot.
    ///
    /// `delta_azimuth` turns around the vertical axis, `delta_elevation`
    /// tilts toward the poles. The polar angle is kept within
    /// [`MIN_ELEVATION`]..=[`MAX_ELEVATION`]. Takes effect immediately and
    /// leaves the controller settled.
    pub fn apply_orbit_rotation(
        &mut self,
        delta_azimuth: f32,
        delta_elevation: f32,
    ) {
        if !self.orbit_enabled {
            return;
        }

        let pivot = self.orbit_config.target;
        let dir = self.current.position - pivot;
        let distance = dir.length();
        if distance <= 0.0 {
            return;
        }

        let azimuth = dir.x.atan2(dir.z) + delta_azimuth;
        let elevation = (dir.y / distance).clamp(-1.0, 1.0).acos();
        let elevation =
            (elevation + delta_elevation).clamp(MIN_ELEVATION, MAX_ELEVATION);

        let (sin_el, cos_el) = elevation.sin_cos();
        let (sin_az, cos_az) = azimuth.sin_cos();
        let offset = Vector3::new(
            distance * sin_el * sin_az,
            distance * cos_el,
            distance * sin_el * cos_az,
        );

        self.current.position = pivot + offset;
        self.current.look_at = pivot;
        self.settle_target();
    }

    /// Move the camera toward (negative) or away from (positive) the orbit
    /// pivot, keeping the distance within the orbit bounds.
    ///
    /// Skipped when the camera sits exactly on the pivot, where the viewing
    /// direction is undefined.
    pub fn apply_orbit_zoom(&mut self, delta_distance: f32) {
        if !self.orbit_enabled {
            return;
        }

        let pivot = self.orbit_config.target;
        let dir = self.current.position - pivot;
        let current_distance = dir.length();
        if current_distance <= 0.0 {
            return;
        }

        let new_distance = (current_distance + delta_distance)
            .max(self.orbit_config.min_distance)
            .min(self.orbit_config.max_distance);

        self.current.position = pivot + dir / current_distance * new_distance;
        self.current.orbit_distance = new_distance;
        self.settle_target();
    }

    // ── Frame update ─────────────────────────────────────────────────────

    /// Advance an in-progress transition by `delta_time` seconds.
    ///
    /// Each tick closes a fraction `min(delta_time * speed, 1)` of the
    /// remaining gap, so motion decays toward the target rather than moving
    /// at constant velocity. Snaps and settles once within
    /// [`ARRIVAL_EPSILON`].
    pub fn update(&mut self, delta_time: f32) {
        if !self.current.is_moving {
            return;
        }

        let position_gap = (self.target.position - self.current.position).length();
        let look_at_gap = (self.target.look_at - self.current.look_at).length();

        if position_gap < ARRIVAL_EPSILON && look_at_gap < ARRIVAL_EPSILON {
            self.current.position = self.target.position;
            self.current.look_at = self.target.look_at;
            self.current.is_moving = false;
            log::debug!("Camera transition settled");
            return;
        }

        let t = (delta_time * self.transition_speed).min(1.0);
        self.current.position =
            lerp_vec3(self.current.position, self.target.position, t);
        self.current.look_at =
            lerp_vec3(self.current.look_at, self.target.look_at, t);
    }

    // ── Lens ─────────────────────────────────────────────────────────────

    /// Vertical field of view in radians.
    #[must_use]
    pub fn calculate_vertical_fov(&self) -> f32 {
        self.config.vertical_fov()
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn calculate_vertical_fov_degrees(&self) -> f32 {
        self.config.vertical_fov_degrees()
    }

    /// Copy the current pose into the target and stop any transition.
    fn settle_target(&mut self) {
        self.target.position = self.current.position;
        self.target.look_at = self.current.look_at;
        self.target.orbit_distance = self.current.orbit_distance;
        self.current.is_moving = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orbiting_controller(position: Vector3) -> ViewpointController {
        let mut controller = ViewpointController::new();
        controller.set_camera(position, Vector3::ZERO);
        controller.set_orbit_enabled(true);
        controller
    }

    fn elevation_of(controller: &ViewpointController) -> f32 {
        let dir = controller.state().position - controller.orbit_config().target;
        (dir.y / dir.length()).acos()
    }

    #[test]
    fn top_preset_jumps_immediately() {
        let mut controller = ViewpointController::new();
        controller.register_preset(
            "Top",
            CameraPreset::new(Vector3::new(0.0, 10.0, 0.0), Vector3::ZERO),
        );
        assert!(controller.move_to_preset("Top", false));
        assert_eq!(controller.state().position, Vector3::new(0.0, 10.0, 0.0));
        assert_eq!(controller.state().look_at, Vector3::ZERO);
        assert!(!controller.is_moving());
        assert_eq!(controller.target_state().position, controller.state().position);
    }

    #[test]
    fn unknown_preset_changes_nothing() {
        let mut controller = ViewpointController::new();
        controller.set_camera(Vector3::new(1.0, 2.0, 3.0), Vector3::ZERO);
        let before = *controller.state();
        assert!(!controller.move_to_preset("Nowhere", true));
        assert_eq!(*controller.state(), before);
        assert!(!controller.is_moving());
    }

    #[test]
    fn register_overwrites_existing_name() {
        let mut controller = ViewpointController::new();
        controller.register_preset(
            "Front",
            CameraPreset::new(Vector3::Z, Vector3::ZERO),
        );
        controller.register_preset(
            "Front",
            CameraPreset::new(Vector3::new(0.0, 0.0, 7.0), Vector3::ZERO),
        );
        assert_eq!(controller.preset_names(), vec!["Front".to_owned()]);
        assert_eq!(
            controller.get_preset("Front").map(|p| p.position),
            Some(Vector3::new(0.0, 0.0, 7.0))
        );
    }

    #[test]
    fn smooth_transition_converges_to_preset() {
        let mut controller = ViewpointController::new();
        controller.set_camera(Vector3::new(10.0, 5.0, 0.0), Vector3::ONE);
        let front = CameraPreset::new(Vector3::new(0.0, 0.0, 8.0), Vector3::ZERO);
        controller.register_preset("Front", front);

        assert!(controller.move_to_preset("Front", true));
        assert!(controller.is_moving());
        // Current pose is untouched until the first tick.
        assert_eq!(controller.state().position, Vector3::new(10.0, 5.0, 0.0));

        let mut frames = 0;
        while controller.is_moving() && frames < 1000 {
            controller.update(1.0 / 60.0);
            frames += 1;
        }
        assert!(!controller.is_moving());
        assert!((controller.state().position - front.position).length() < ARRIVAL_EPSILON);
        assert!((controller.state().look_at - front.look_at).length() < ARRIVAL_EPSILON);
    }

    #[test]
    fn large_delta_does_not_overshoot() {
        let mut controller = ViewpointController::new();
        controller.register_preset(
            "Far",
            CameraPreset::new(Vector3::new(0.0, 0.0, 20.0), Vector3::ZERO),
        );
        assert!(controller.move_to_preset("Far", true));
        controller.update(10.0);
        assert_eq!(controller.state().position, Vector3::new(0.0, 0.0, 20.0));
        // Next tick observes arrival and settles.
        assert!(controller.is_moving());
        controller.update(0.0);
        assert!(!controller.is_moving());
    }

    #[test]
    fn update_is_noop_when_settled() {
        let mut controller = ViewpointController::new();
        controller.set_camera(Vector3::new(0.0, 0.0, 5.0), Vector3::ZERO);
        let before = *controller.state();
        controller.update(1.0);
        assert_eq!(*controller.state(), before);
    }

    #[test]
    fn set_camera_settles_and_measures_distance() {
        let mut controller = ViewpointController::new();
        controller.register_preset(
            "Front",
            CameraPreset::new(Vector3::new(0.0, 0.0, 8.0), Vector3::ZERO),
        );
        assert!(controller.move_to_preset("Front", true));
        controller.set_camera(Vector3::new(3.0, 4.0, 0.0), Vector3::ZERO);
        assert!(!controller.is_moving());
        assert_eq!(controller.state().orbit_distance, 5.0);
        assert_eq!(controller.target_state().position, Vector3::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn orbit_gestures_ignored_when_disabled() {
        let mut controller = ViewpointController::new();
        controller.set_camera(Vector3::new(0.0, 0.0, 10.0), Vector3::ZERO);
        controller.apply_orbit_rotation(1.0, 0.5);
        controller.apply_orbit_zoom(-5.0);
        assert_eq!(controller.state().position, Vector3::new(0.0, 0.0, 10.0));
    }

    #[test]
    fn enabling_orbit_seeds_distance_without_moving() {
        let mut controller = ViewpointController::new();
        controller.set_orbit_config(OrbitConfig {
            target: Vector3::new(0.0, 1.0, 0.0),
            ..OrbitConfig::default()
        });
        controller.set_camera(Vector3::new(0.0, 1.0, 6.0), Vector3::ZERO);
        controller.set_orbit_enabled(true);
        assert!(controller.is_orbit_enabled());
        assert_eq!(controller.state().orbit_distance, 6.0);
        assert_eq!(controller.state().position, Vector3::new(0.0, 1.0, 6.0));
    }

    #[test]
    fn orbit_rotation_preserves_distance_and_faces_pivot() {
        let mut controller = orbiting_controller(Vector3::new(0.0, 0.0, 10.0));
        controller.apply_orbit_rotation(std::f32::consts::FRAC_PI_2, 0.0);
        let pos = controller.state().position;
        assert!((pos.length() - 10.0).abs() < 1e-4);
        assert!((pos.x - 10.0).abs() < 1e-4);
        assert!(pos.z.abs() < 1e-4);
        assert_eq!(controller.state().look_at, Vector3::ZERO);
        assert_eq!(controller.target_state().position, pos);
        assert!(!controller.is_moving());
    }

    #[test]
    fn orbit_elevation_stays_clamped() {
        let mut controller = orbiting_controller(Vector3::new(0.0, 0.0, 10.0));
        for _ in 0..50 {
            controller.apply_orbit_rotation(0.3, 100.0);
            let phi = elevation_of(&controller);
            assert!(phi <= MAX_ELEVATION + 1e-4, "phi = {phi}");
        }
        assert!((elevation_of(&controller) - MAX_ELEVATION).abs() < 1e-3);

        for _ in 0..50 {
            controller.apply_orbit_rotation(-0.3, -100.0);
            let phi = elevation_of(&controller);
            assert!(phi >= MIN_ELEVATION - 1e-4, "phi = {phi}");
        }
        assert!((elevation_of(&controller) - MIN_ELEVATION).abs() < 1e-3);
    }

    #[test]
    fn orbit_rotation_at_pivot_is_skipped() {
        let mut controller = orbiting_controller(Vector3::ZERO);
        controller.apply_orbit_rotation(0.5, 0.5);
        assert_eq!(controller.state().position, Vector3::ZERO);
        assert!(!controller.state().position.is_nan());
    }

    #[test]
    fn orbit_zoom_clamps_to_bounds() {
        let mut controller = orbiting_controller(Vector3::new(0.0, 3.0, 4.0));
        for _ in 0..3 {
            controller.apply_orbit_zoom(-1e6);
        }
        let min = controller.orbit_config().min_distance;
        assert!((controller.state().position.length() - min).abs() < 1e-5);
        assert_eq!(controller.state().orbit_distance, min);

        for _ in 0..3 {
            controller.apply_orbit_zoom(1e6);
        }
        let max = controller.orbit_config().max_distance;
        assert!((controller.state().position.length() - max).abs() < 1e-3);
        assert_eq!(controller.state().orbit_distance, max);
        assert_eq!(controller.target_state().position, controller.state().position);

        // Direction is preserved.
        let dir = controller.state().position.normalize();
        assert!((dir - Vector3::new(0.0, 0.6, 0.8)).length() < 1e-5);
    }

    #[test]
    fn orbit_zoom_at_pivot_is_skipped() {
        let mut controller = orbiting_controller(Vector3::ZERO);
        controller.apply_orbit_zoom(5.0);
        assert_eq!(controller.state().position, Vector3::ZERO);
    }

    #[test]
    fn fov_matches_lens() {
        let mut controller = ViewpointController::new();
        controller.set_config(CameraConfig {
            focal_length_mm: 12.0,
            sensor_height_mm: 24.0,
            ..CameraConfig::default()
        });
        // 2 * atan(1) = 90 degrees
        assert!((controller.calculate_vertical_fov_degrees() - 90.0).abs() < 1e-4);
        assert!(
            (controller.calculate_vertical_fov() - std::f32::consts::FRAC_PI_2).abs()
                < 1e-6
        );
    }
}
