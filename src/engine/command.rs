//! The viewer's discrete command vocabulary.
//!
//! Every gesture or UI action is represented as a `ViewerCommand`.
//! Consumers construct commands and pass them to
//! [`Viewer::execute`](super::Viewer::execute), or queue them with
//! [`Viewer::queue`](super::Viewer::queue) to be applied at the start of the
//! next frame.

use crate::math::Vector3;

/// A discrete command issued between frames.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Move to a registered camera preset.
    MoveToPreset {
        /// Preset name.
        name: String,
        /// Interpolate over the following frames instead of jumping.
        smooth: bool,
    },

    /// Jump the camera to an explicit pose.
    SetCamera {
        /// Camera position.
        position: Vector3,
        /// Look-at point.
        look_at: Vector3,
    },

    /// Enable or disable orbit gestures.
    SetOrbitEnabled(bool),

    /// Rotate around the orbit pivot.
    Orbit {
        /// Horizontal rotation in radians.
        delta_azimuth: f32,
        /// Vertical rotation in radians.
        delta_elevation: f32,
    },

    /// Move toward (negative) or away from (positive) the orbit pivot.
    Zoom(f32),

    // ── Playback ────────────────────────────────────────────────────
    /// Play an animation by index.
    Play {
        /// Animation index.
        index: usize,
        /// Wrap at the end instead of stopping.
        looping: bool,
    },

    /// Play an animation by exact name.
    PlayNamed {
        /// Animation name.
        name: String,
        /// Wrap at the end instead of stopping.
        looping: bool,
    },

    /// Stop and rewind.
    Stop,

    /// Freeze the timeline.
    Pause,

    /// Unfreeze the timeline.
    Resume,
}

impl ViewerCommand {
    /// Whether the command targets the viewpoint controller.
    #[must_use]
    pub fn is_camera(&self) -> bool {
        matches!(
            self,
            Self::MoveToPreset { .. }
                | Self::SetCamera { .. }
                | Self::SetOrbitEnabled(_)
                | Self::Orbit { .. }
                | Self::Zoom(_)
        )
    }
}
