//! Camera system: the static look-at camera each demo views its mesh
//! through, and the mouse-driven controller that spins the mesh.

/// Mouse-driven orbit/pan/zoom controller producing the model transform.
pub mod controller;
/// Look-at camera and the per-draw GPU uniform block.
pub mod core;

pub use self::core::{Camera, TransformUniform};
pub use controller::{CameraController, CameraState, KeyResponse, PointerDragState};
