use super::{MeshData, VertexStream};
use crate::math::{calc_normal, Vec3};

const VEC3_SIZE: u64 = size_of::<Vec3>() as u64;

/// Four triangles sharing the apex at `(0, 1, 1)`.
#[must_use]
pub fn positions() -> [Vec3; 12] {
    [
        Vec3::new(0.0, 1.0, 1.0),
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::new(-0.5, 0.0, 1.0),
        Vec3::new(0.0, 1.0, 1.0),
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::new(0.5, 0.0, 1.0),
        Vec3::new(0.0, 1.0, 1.0),
        Vec3::new(0.0, 0.0, 1.5),
        Vec3::new(-0.5, 0.0, 1.0),
        Vec3::new(0.0, 1.0, 1.0),
        Vec3::new(0.0, 0.0, 1.5),
        Vec3::new(0.5, 0.0, 1.0),
    ]
}

/// One normal per triangle. The first and last triangles are wound the
/// other way round, so their vertices are taken in reverse.
#[must_use]
pub fn face_normals(v: &[Vec3; 12]) -> [Vec3; 4] {
    [
        calc_normal(v[2], v[1], v[0]),
        calc_normal(v[3], v[4], v[5]),
        calc_normal(v[6], v[7], v[8]),
        calc_normal(v[11], v[10], v[9]),
    ]
}

/// Positions only, flat colour shader.
#[must_use]
pub fn mesh() -> MeshData {
    let verts = positions();
    MeshData {
        label: "Boid",
        buffers: vec![bytemuck::cast_slice(&verts).to_vec()],
        streams: vec![VertexStream::new(
            0,
            VEC3_SIZE,
            &wgpu::vertex_attr_array![0 => Float32x3],
        )],
        indices: None,
        vertex_count: verts.len() as u32,
        topology: wgpu::PrimitiveTopology::TriangleList,
    }
}

/// 12 positions followed by 12 normals in one buffer: two streams over the
/// same buffer, the normals starting after the last position.
#[must_use]
pub fn shaded_mesh() -> MeshData {
    let positions = positions();
    let mut verts = positions.to_vec();
    for n in face_normals(&positions) {
        verts.extend([n; 3]);
    }
    let normal_offset = VEC3_SIZE * positions.len() as u64;
    log::debug!("shaded boid: {} vec3s, normals at byte {normal_offset}", verts.len());

    MeshData {
        label: "Shaded Boid",
        buffers: vec![bytemuck::cast_slice(&verts).to_vec()],
        streams: vec![
            VertexStream::new(0, VEC3_SIZE, &wgpu::vertex_attr_array![0 => Float32x3]),
            VertexStream::new(0, VEC3_SIZE, &wgpu::vertex_attr_array![1 => Float32x3])
                .at_offset(normal_offset),
        ],
        indices: None,
        vertex_count: positions.len() as u32,
        topology: wgpu::PrimitiveTopology::TriangleList,
    }
}
