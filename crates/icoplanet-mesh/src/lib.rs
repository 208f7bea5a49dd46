//! Icosphere geometry: the base icosahedron, watertight midpoint subdivision,
//! topology validation, and the flattened render buffers handed to the host.

pub mod buffers;
pub mod color;
pub mod error;
pub mod icosahedron;
pub mod midpoint_cache;
pub mod normals;
pub mod subdivision;
pub mod topology;
pub mod validation;
pub mod vertex_format;

pub use buffers::{MeshBuffers, PlanetVertex};
pub use color::{Color, ColorRamp, Gradient, GradientStop};
pub use error::MeshError;
pub use icosahedron::{ICOSAHEDRON_FACES, build_icosahedron};
pub use midpoint_cache::{MidpointCache, edge_key, edge_midpoint, midpoint_on_sphere};
pub use normals::{compute_face_normals, face_normal};
pub use subdivision::{MAX_SUBDIVISION_DEPTH, subdivide, subdivide_pass, subdivide_pass_parallel};
pub use topology::{SphereMesh, Triangle};
pub use validation::{
    all_triangles_wind_outward, edge_usage, expected_triangle_count, expected_vertex_count,
    is_consistently_oriented, is_watertight, triangle_winds_outward,
};
pub use vertex_format::{PLANET_VERTEX_ATTRIBUTES, PLANET_VERTEX_LAYOUT, planet_vertex_buffer_layout};
