use rand::Rng;

use super::{MeshData, VertexStream};
use crate::math::Vec3;

/// Segments always generated on top of the random count.
pub const BASE_SEGMENTS: usize = 100;
/// Exclusive upper bound of the random extra segments.
pub const EXTRA_SEGMENTS: usize = 12_000;
/// Half-width of the cube the points fall in.
pub const EXTENT: f32 = 5.0;

/// A fresh cloud: `BASE_SEGMENTS + rand(0..EXTRA_SEGMENTS)` line segments,
/// so twice that many points, each uniform in `[-EXTENT, EXTENT]^3`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Vec<Vec3> {
    let segments = BASE_SEGMENTS + rng.random_range(0..EXTRA_SEGMENTS);
    (0..segments * 2)
        .map(|_| {
            Vec3::new(
                rng.random_range(-EXTENT..=EXTENT),
                rng.random_range(-EXTENT..=EXTENT),
                rng.random_range(-EXTENT..=EXTENT),
            )
        })
        .collect()
}

/// Line-list mesh over `points`.
#[must_use]
pub fn mesh(points: &[Vec3]) -> MeshData {
    MeshData {
        label: "Point Cloud",
        buffers: vec![bytemuck::cast_slice(points).to_vec()],
        streams: vec![VertexStream::new(
            0,
            size_of::<Vec3>() as u64,
            &wgpu::vertex_attr_array![0 => Float32x3],
        )],
        indices: None,
        vertex_count: points.len() as u32,
        topology: wgpu::PrimitiveTopology::LineList,
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn size_and_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let points = generate(&mut rng);
            assert_eq!(points.len() % 2, 0);
            let segments = points.len() / 2;
            assert!((BASE_SEGMENTS..BASE_SEGMENTS + EXTRA_SEGMENTS).contains(&segments));
            for p in &points {
                assert!(p.x.abs() <= EXTENT && p.y.abs() <= EXTENT && p.z.abs() <= EXTENT);
            }
        }
    }

    #[test]
    fn regeneration_replaces_data() {
        let mut rng = StdRng::seed_from_u64(11);
        let a = generate(&mut rng);
        let b = generate(&mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn mesh_draws_every_point() {
        let points = vec![Vec3::ZERO, Vec3::Y];
        let mesh = mesh(&points);
        assert_eq!(mesh.vertex_count, 2);
        assert_eq!(mesh.topology, wgpu::PrimitiveTopology::LineList);
    }
}
