//! Options management for Viewer

use std::path::Path;

use super::Viewer;
use crate::options::Options;

impl Viewer<'_> {
    /// Replace the options and re-apply lens, orbit bounds, transition
    /// speed and presets. The current pose is kept.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
        self.apply_camera();
    }

    fn apply_camera(&mut self) {
        let viewpoint = &mut self.viewpoint;
        viewpoint.set_config(self.options.camera.lens_config());
        viewpoint.set_orbit_config(self.options.orbit.orbit_config());
        viewpoint.set_transition_speed(self.options.camera.transition_speed);
        for preset in &self.options.presets {
            viewpoint.register_preset(preset.name.clone(), preset.preset());
        }
        if viewpoint.is_orbit_enabled() != self.options.orbit.enabled {
            viewpoint.set_orbit_enabled(self.options.orbit.enabled);
        }
    }

    /// Load options from a TOML file and apply them.
    /// Returns true on success.
    pub fn load_options(&mut self, path: &Path) -> bool {
        match Options::load(path) {
            Ok(opts) => {
                log::info!("Loaded viewer options from {}", path.display());
                self.set_options(opts);
                true
            }
            Err(e) => {
                log::error!(
                    "Failed to load viewer options from {}: {e}",
                    path.display()
                );
                false
            }
        }
    }

    /// Save the current options to a TOML file.
    /// Returns true on success.
    pub fn save_options(&self, path: &Path) -> bool {
        match self.options.save(path) {
            Ok(()) => {
                log::info!("Saved viewer options to {}", path.display());
                true
            }
            Err(e) => {
                log::error!(
                    "Failed to save viewer options to {}: {e}",
                    path.display()
                );
                false
            }
        }
    }
}
