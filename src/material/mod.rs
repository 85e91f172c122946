//! Per-part material parameters and the built-in preset catalog.
//!
//! Values only: building GPU material instances from them is the platform
//! layer's job.

mod library;
mod presets;
mod types;

pub use library::MaterialLibrary;
pub use presets::MaterialPreset;
pub use types::{
    clamp01, MaterialColor, MaterialConfig, PbrProperties, TextureSlot,
};
