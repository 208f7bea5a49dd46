//! Indexed sphere topology: a growable vertex list and the triangles over it.

use glam::Vec3;

/// An ordered triple of vertex indices.
///
/// Winding is counter-clockwise when viewed from outside the sphere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triangle(pub [u32; 3]);

impl Triangle {
    /// Create a triangle from three vertex indices.
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self([a, b, c])
    }

    /// The three directed edges `(a, b)`, `(b, c)`, `(c, a)`.
    pub fn edges(self) -> [(u32, u32); 3] {
        let [a, b, c] = self.0;
        [(a, b), (b, c), (c, a)]
    }
}

/// Vertices shared by index across triangles.
///
/// Vertices are only ever appended; triangles are replaced wholesale by each
/// subdivision pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SphereMesh {
    /// Vertex positions, on the unit sphere before displacement.
    pub vertices: Vec<Vec3>,
    /// Triangles indexing into `vertices`.
    pub triangles: Vec<Triangle>,
}

impl SphereMesh {
    /// Number of distinct vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Corner positions of one triangle.
    ///
    /// # Panics
    ///
    /// Panics if `triangle` references a vertex outside `vertices`.
    pub fn corners(&self, triangle: Triangle) -> [Vec3; 3] {
        triangle.0.map(|i| self.vertices[i as usize])
    }

    /// Expand to three positions per triangle, with no sharing.
    ///
    /// # Panics
    ///
    /// Panics on an out-of-range triangle index, like [`corners`](Self::corners).
    pub fn flattened_positions(&self) -> Vec<Vec3> {
        self.triangles
            .iter()
            .flat_map(|&t| self.corners(t))
            .collect()
    }
}
