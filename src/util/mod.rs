//! Shared utilities.

/// Frame clock with FPS smoothing and optional frame limiting.
pub mod frame_timing;
