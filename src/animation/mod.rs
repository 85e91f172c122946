//! Skeletal animation playback: timeline stepping, looping and completion
//! on top of a borrowed backend animator.

/// Backend animator capability and an in-memory implementation.
pub mod backend;
/// Playback controller.
pub mod controller;
/// Stopped / playing / paused state.
pub mod state;

pub use backend::{AnimationBackend, Clip, ClipTable};
pub use controller::PlaybackController;
pub use state::PlaybackState;
