//! Summary numbers for a generated mesh.

use std::fmt;

use icoplanet_mesh::MeshBuffers;

/// Vertex and triangle counts plus the radial extent of a mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshStats {
    /// Flattened vertex count, three per triangle.
    pub vertices: usize,
    /// Triangle count.
    pub triangles: usize,
    /// Distance from the origin to the closest vertex.
    pub min_radius: f32,
    /// Distance from the origin to the farthest vertex.
    pub max_radius: f32,
}

impl MeshStats {
    /// Measure `buffers`. An empty mesh reports a zero radius range.
    pub fn of(buffers: &MeshBuffers) -> Self {
        let (min_radius, max_radius) = buffers.radius_range().unwrap_or((0.0, 0.0));
        Self {
            vertices: buffers.vertex_count(),
            triangles: buffers.triangle_count(),
            min_radius,
            max_radius,
        }
    }
}

impl fmt::Display for MeshStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vertices, {} triangles, radius {:.4}..{:.4}",
            self.vertices, self.triangles, self.min_radius, self.max_radius
        )
    }
}
