// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Platform-agnostic camera and animation control for 3D model viewers.
//!
//! Viewkit sits between a viewer's gestures and UI events and a rendering
//! backend's camera and skeletal animator. It turns discrete inputs (preset
//! selection, orbit and zoom deltas, play/pause commands) plus a per-frame
//! delta time into a continuously updated viewpoint and an advancing
//! animation timeline.
//!
//! # Key entry points
//!
//! - [`camera::ViewpointController`] - orbit math, named presets and smooth
//!   preset transitions
//! - [`animation::PlaybackController`] - timeline stepping, looping and
//!   completion over a borrowed [`animation::AnimationBackend`]
//! - [`engine::Viewer`] - applies queued [`engine::ViewerCommand`]s and
//!   ticks both controllers once per frame
//! - [`options::Options`] - TOML configuration (lens, orbit bounds,
//!   presets, playback defaults)
//! - [`material::MaterialLibrary`] - per-part PBR parameters and presets
//!
//! # Frame contract
//!
//! Everything is single-threaded and synchronous. Once per rendered frame
//! the host applies any commands issued since the previous frame, then calls
//! `update(delta_time)` on each controller (in either order), then reads the
//! current pose and timeline for rendering and UI.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod material;
pub mod math;
pub mod options;
pub mod util;

pub use error::ViewkitError;
