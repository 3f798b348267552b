//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, growable vertex and index
//! buffers, the lighting uniform, and shader composition.

/// Growable GPU buffers with automatic reallocation.
pub mod dynamic_buffer;
/// Light and material uniform block.
pub mod lighting;
/// wgpu device, surface, queue, and attachment management.
pub mod render_context;
/// WGSL shader composition with `#import` support via naga-oil.
pub mod shader_composer;
