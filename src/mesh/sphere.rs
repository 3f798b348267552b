//! UV sphere laid out as one long triangle strip, after Paul Bourke's
//! sphere routine.

use std::f32::consts::{FRAC_PI_2, TAU};

use super::{MeshData, VertexStream};

/// Interleaved sphere vertex.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    /// Position on the sphere surface.
    pub position: [f32; 3],
    /// Unit outward normal.
    pub normal: [f32; 3],
    /// Longitude in `u`, latitude in `v`, both `[0, 1]`.
    pub uv: [f32; 2],
}

/// Smallest usable number of segments around the equator.
pub const MIN_PRECISION: u32 = 4;

/// Vertex count for a given precision (after clamping).
#[must_use]
pub fn vertex_count(precision: u32) -> usize {
    let p = precision.max(MIN_PRECISION) as usize;
    (p / 2) * (p + 1) * 2
}

/// Strip vertices. A negative radius is mirrored to positive and precision
/// is raised to at least [`MIN_PRECISION`].
#[must_use]
pub fn vertices(radius: f32, precision: u32) -> Vec<SphereVertex> {
    let radius = radius.abs();
    let precision = precision.max(MIN_PRECISION);
    let p = precision as f32;

    let ring = |theta: f32, phi: f32, v: f32, u: f32| {
        let normal = [theta.cos() * phi.cos(), theta.sin(), theta.cos() * phi.sin()];
        SphereVertex {
            position: normal.map(|n| n * radius),
            normal,
            uv: [u, v],
        }
    };

    let mut data = Vec::with_capacity(vertex_count(precision));
    for i in 0..precision / 2 {
        let theta1 = i as f32 * TAU / p - FRAC_PI_2;
        let theta2 = (i + 1) as f32 * TAU / p - FRAC_PI_2;
        for j in 0..=precision {
            let phi = j as f32 * TAU / p;
            let u = j as f32 / p;
            data.push(ring(theta2, phi, 2.0 * (i + 1) as f32 / p, u));
            data.push(ring(theta1, phi, 2.0 * i as f32 / p, u));
        }
    }
    data
}

/// Sphere mesh for the checker shader.
#[must_use]
pub fn mesh(radius: f32, precision: u32) -> MeshData {
    let verts = vertices(radius, precision);
    log::debug!("sphere: {} strip vertices", verts.len());
    MeshData {
        label: "Sphere",
        buffers: vec![bytemuck::cast_slice(&verts).to_vec()],
        streams: vec![VertexStream::new(
            0,
            size_of::<SphereVertex>() as u64,
            &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2],
        )],
        indices: None,
        vertex_count: verts.len() as u32,
        topology: wgpu::PrimitiveTopology::TriangleStrip,
    }
}
