//! Flattened render buffers handed to the host renderer.
//!
//! Every triangle owns its three vertices, so per-face normals and colors
//! need no adjacency information. The index buffer is therefore just
//! `0..3N`.

use glam::Vec3;

use crate::color::Color;
use crate::error::MeshError;
use crate::normals::compute_face_normals;

/// Interleaved vertex for GPU upload, 40 bytes.
///
/// Layout:
///   - `[0..12]`  position `[f32; 3]`
///   - `[12..24]` normal `[f32; 3]`
///   - `[24..40]` color `[f32; 4]` (RGBA)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlanetVertex {
    /// Displaced position.
    pub position: [f32; 3],
    /// Face normal.
    pub normal: [f32; 3],
    /// Vertex color.
    pub color: [f32; 4],
}

static_assertions::assert_eq_size!(PlanetVertex, [u8; 40]);

/// Parallel per-vertex buffers for one generated planet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
    /// Final positions, three per triangle.
    pub positions: Vec<Vec3>,
    /// One color per position.
    pub colors: Vec<Color>,
    /// One normal per position, recomputed from `positions`.
    pub normals: Vec<Vec3>,
    /// Sequential triangle indices `0..positions.len()`.
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Finish flattened positions and colors into render buffers.
    ///
    /// Recomputes per-face normals and the sequential index list. Fails if
    /// any position is NaN or infinite.
    pub fn from_flattened(positions: Vec<Vec3>, colors: Vec<Color>) -> Result<Self, MeshError> {
        debug_assert_eq!(positions.len(), colors.len());
        if let Some(index) = positions.iter().position(|p| !p.is_finite()) {
            return Err(MeshError::NonFiniteVertex { index });
        }

        let normals = compute_face_normals(&positions);
        let indices = (0..positions.len() as u32).collect();

        Ok(Self {
            positions,
            colors,
            normals,
            indices,
        })
    }

    /// Number of flattened vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns `true` if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Smallest and largest distance from the origin, if any vertex exists.
    pub fn radius_range(&self) -> Option<(f32, f32)> {
        self.positions.iter().map(|p| p.length()).fold(None, |acc, r| match acc {
            None => Some((r, r)),
            Some((lo, hi)) => Some((lo.min(r), hi.max(r))),
        })
    }

    /// Interleave into [`PlanetVertex`] records for a single vertex buffer.
    pub fn interleaved(&self) -> Vec<PlanetVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.colors)
            .map(|((p, n), c)| PlanetVertex {
                position: p.to_array(),
                normal: n.to_array(),
                color: c.to_array(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_triangle() -> MeshBuffers {
        MeshBuffers::from_flattened(
            vec![Vec3::X, Vec3::Y, Vec3::Z],
            vec![Color::WHITE, Color::BLACK, Color::WHITE],
        )
        .unwrap()
    }

    #[test]
    fn test_indices_are_sequential() {
        let buffers = one_triangle();
        assert_eq!(buffers.indices, vec![0, 1, 2]);
        assert_eq!(buffers.triangle_count(), 1);
        assert_eq!(buffers.vertex_count(), 3);
    }

    #[test]
    fn test_normals_point_outward() {
        let buffers = one_triangle();
        let expected = Vec3::ONE.normalize();
        for n in &buffers.normals {
            assert!((*n - expected).length() < 1e-6);
        }
    }

    #[test]
    fn test_nan_position_is_rejected() {
        let err = MeshBuffers::from_flattened(
            vec![Vec3::X, Vec3::new(f32::NAN, 0.0, 0.0), Vec3::Z],
            vec![Color::WHITE; 3],
        )
        .unwrap_err();
        assert_eq!(err, MeshError::NonFiniteVertex { index: 1 });
    }

    #[test]
    fn test_interleaved_matches_buffers() {
        let buffers = one_triangle();
        let verts = buffers.interleaved();
        assert_eq!(verts.len(), 3);
        assert_eq!(verts[1].position, [0.0, 1.0, 0.0]);
        assert_eq!(verts[1].color, [0.0, 0.0, 0.0, 1.0]);
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 120);
    }

    #[test]
    fn test_radius_range() {
        let buffers = MeshBuffers::from_flattened(
            vec![Vec3::X, Vec3::Y * 2.0, Vec3::Z * 0.5],
            vec![Color::WHITE; 3],
        )
        .unwrap();
        assert_eq!(buffers.radius_range(), Some((0.5, 2.0)));
        assert_eq!(MeshBuffers::default().radius_range(), None);
    }
}
