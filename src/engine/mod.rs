//! Frame driver tying the viewpoint and playback controllers together.
//!
//! A [`Viewer`] owns both controllers plus the material store. The host
//! calls [`Viewer::frame`] (or [`Viewer::tick`]) once per rendered frame:
//! queued commands are applied first, then each controller advances by the
//! frame's delta time. The two controllers never touch each other's state.

mod command;
mod options;

use std::collections::VecDeque;

pub use command::ViewerCommand;

use crate::animation::{AnimationBackend, PlaybackController};
use crate::camera::{Camera, ViewpointController};
use crate::material::MaterialLibrary;
use crate::options::Options;
use crate::util::frame_timing::FrameTiming;

/// Viewer state for one loaded model.
///
/// The `'a` lifetime is that of the backend animator attached with
/// [`attach_animator`](Self::attach_animator); the viewer borrows it and
/// never frees it.
#[derive(Debug)]
pub struct Viewer<'a> {
    viewpoint: ViewpointController,
    playback: PlaybackController<'a>,
    materials: MaterialLibrary,
    options: Options,
    pending: VecDeque<ViewerCommand>,
    frame_timing: FrameTiming,
}

impl Default for Viewer<'_> {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl<'a> Viewer<'a> {
    /// Build a viewer from options. No animator is attached yet.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            viewpoint: ViewpointController::from_options(&options),
            playback: PlaybackController::detached(),
            materials: MaterialLibrary::new(),
            options,
            pending: VecDeque::new(),
            frame_timing: FrameTiming::new(),
        }
    }

    /// Attach the backend animator of the loaded model and start the
    /// configured autoplay animation, if any.
    pub fn attach_animator(&mut self, backend: &'a mut dyn AnimationBackend) {
        self.playback.attach(backend);
        log::debug!(
            "Attached animator with {} animation(s)",
            self.playback.animation_count()
        );
        if let Some(name) = self.options.playback.autoplay.as_deref() {
            if self.playback.play_by_name(name, self.options.playback.looping) {
                log::info!("Autoplaying animation '{name}'");
            }
        }
    }

    /// Detach the animator (e.g. before the model is unloaded).
    pub fn detach_animator(&mut self) {
        self.playback.detach();
    }

    // ── Commands ─────────────────────────────────────────────────────────

    /// Apply a command immediately.
    ///
    /// Returns whether the command took effect: `false` for unknown
    /// presets or animations, out-of-range indices, orbit gestures while
    /// orbit is disabled, and pause/resume in the wrong state.
    pub fn execute(&mut self, command: ViewerCommand) -> bool {
        self.apply(&command)
    }

    fn apply(&mut self, command: &ViewerCommand) -> bool {
        match *command {
            ViewerCommand::MoveToPreset { ref name, smooth } => {
                self.viewpoint.move_to_preset(name, smooth)
            }
            ViewerCommand::SetCamera { position, look_at } => {
                self.viewpoint.set_camera(position, look_at);
                true
            }
            ViewerCommand::SetOrbitEnabled(enabled) => {
                self.viewpoint.set_orbit_enabled(enabled);
                true
            }
            ViewerCommand::Orbit {
                delta_azimuth,
                delta_elevation,
            } => {
                self.viewpoint
                    .apply_orbit_rotation(delta_azimuth, delta_elevation);
                self.viewpoint.is_orbit_enabled()
            }
            ViewerCommand::Zoom(delta) => {
                self.viewpoint.apply_orbit_zoom(delta);
                self.viewpoint.is_orbit_enabled()
            }
            ViewerCommand::Play { index, looping } => {
                self.playback.play(index, looping)
            }
            ViewerCommand::PlayNamed { ref name, looping } => {
                self.playback.play_by_name(name, looping)
            }
            ViewerCommand::Stop => {
                self.playback.stop();
                true
            }
            ViewerCommand::Pause => {
                let was_running =
                    self.playback.is_playing() && !self.playback.is_paused();
                self.playback.pause();
                was_running
            }
            ViewerCommand::Resume => {
                let was_paused = self.playback.is_paused();
                self.playback.resume();
                was_paused
            }
        }
    }

    /// Queue a command for the start of the next frame.
    pub fn queue(&mut self, command: ViewerCommand) {
        self.pending.push_back(command);
    }

    /// Number of commands waiting for the next frame.
    #[must_use]
    pub fn pending_commands(&self) -> usize {
        self.pending.len()
    }

    // ── Frame loop ───────────────────────────────────────────────────────

    /// Run one frame: apply queued commands in order, then advance both
    /// controllers by `delta_time` seconds.
    pub fn frame(&mut self, delta_time: f32) {
        while let Some(command) = self.pending.pop_front() {
            if !self.apply(&command) {
                let target = if command.is_camera() {
                    "Camera"
                } else {
                    "Playback"
                };
                log::debug!("{target} command had no effect: {command:?}");
            }
        }
        self.viewpoint.update(delta_time);
        self.playback.update(delta_time);
    }

    /// Run one frame using the wall-clock time since the previous tick.
    /// Returns the delta time used.
    pub fn tick(&mut self) -> f32 {
        let delta_time = self.frame_timing.end_frame();
        self.frame(delta_time);
        delta_time
    }

    /// Smoothed frames per second measured by [`tick`](Self::tick).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Viewpoint controller.
    #[must_use]
    pub fn viewpoint(&self) -> &ViewpointController {
        &self.viewpoint
    }

    /// Mutable viewpoint controller (presets, configuration).
    pub fn viewpoint_mut(&mut self) -> &mut ViewpointController {
        &mut self.viewpoint
    }

    /// Playback controller.
    #[must_use]
    pub fn playback(&self) -> &PlaybackController<'a> {
        &self.playback
    }

    /// Mutable playback controller.
    pub fn playback_mut(&mut self) -> &mut PlaybackController<'a> {
        &mut self.playback
    }

    /// Per-part material store.
    #[must_use]
    pub fn materials(&self) -> &MaterialLibrary {
        &self.materials
    }

    /// Mutable material store.
    pub fn materials_mut(&mut self) -> &mut MaterialLibrary {
        &mut self.materials
    }

    /// Camera snapshot for the renderer.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.viewpoint.camera()
    }

    /// Options the viewer was configured with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}
