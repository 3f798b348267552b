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
// Complexity limits (default thresholds)
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

//! Small interactive wgpu demos built around one vertex buffer each.
//!
//! Every demo follows the same loop: upload a mesh once (or regenerate it
//! on a timer), fold mouse input into a model transform, and issue a draw
//! call per frame.
//!
//! # Key entry points
//!
//! - [`camera::CameraController`] - mouse/keyboard orbit, pan, and zoom
//! - [`demo::Demo`] - the trait each demo implements
//! - [`renderer::SceneRenderer`] - meshes, uniforms, and the frame pass
//! - [`options::Options`] - runtime configuration (window, camera,
//!   lighting, keybindings)
//! - `Viewer` - the winit window that runs a demo (`viewer` feature)
//!
//! # Architecture
//!
//! Input events go through an [`input::InputProcessor`] into the
//! controller, which owns the accumulated rotation, pan, and zoom. Each
//! frame the controller's transform is combined with every draw's offset
//! and the static [`camera::Camera`], written to a dynamic-offset uniform
//! buffer, and drawn in a single multisampled pass.

pub mod camera;
pub mod demo;
pub mod error;
pub mod gpu;
pub mod input;
pub mod math;
pub mod mesh;
pub mod options;
pub mod renderer;
#[cfg(feature = "viewer")]
mod viewer;

pub use camera::{Camera, CameraController, CameraState};
pub use demo::Demo;
pub use error::DemoError;
pub use gpu::render_context::{RenderContext, RenderContextError};
pub use input::{InputEvent, InputProcessor, KeyAction, MouseButton};
pub use options::Options;
pub use renderer::{DrawCall, FillMode, MeshId, SceneRenderer, ShaderKind};
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
