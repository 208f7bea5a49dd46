//! Geometry error types.

/// Errors raised while building or finishing sphere geometry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// The midpoint of an edge landed on the origin and cannot be projected
    /// back onto the sphere.
    #[error("midpoint of vertices {a} and {b} has zero length")]
    DegenerateVertex {
        /// First edge endpoint.
        a: u32,
        /// Second edge endpoint.
        b: u32,
    },

    /// A triangle references a vertex that does not exist.
    #[error("triangle references vertex {index}, but the mesh has {vertex_count} vertices")]
    InvalidIndex {
        /// Offending vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// The flattened index buffer for this depth would not fit in `u32`.
    #[error("subdivision depth {depth} exceeds the maximum of {max}")]
    DepthTooLarge {
        /// Requested depth.
        depth: u32,
        /// Largest supported depth.
        max: u32,
    },

    /// A finished vertex position contains NaN or infinity.
    #[error("vertex {index} has a non-finite position")]
    NonFiniteVertex {
        /// Index into the flattened position buffer.
        index: usize,
    },
}
