//! Topology and winding checks for sphere meshes.
//!
//! A closed icosphere is a 2-manifold: every undirected edge is shared by
//! exactly two triangles, and with consistent winding each directed edge
//! appears exactly once.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::midpoint_cache::edge_key;
use crate::topology::{SphereMesh, Triangle};

/// Triangle count after `depth` subdivision passes: `20 * 4^depth`.
pub fn expected_triangle_count(depth: u32) -> usize {
    20 * 4_usize.pow(depth)
}

/// Vertex count after `depth` subdivision passes: `10 * 4^depth + 2`.
///
/// Follows from Euler's formula `V - E + F = 2` with `E = 3F / 2`.
pub fn expected_vertex_count(depth: u32) -> usize {
    10 * 4_usize.pow(depth) + 2
}

/// Count how many triangles use each undirected edge.
pub fn edge_usage(triangles: &[Triangle]) -> FxHashMap<(u32, u32), u32> {
    let mut usage = FxHashMap::default();
    for tri in triangles {
        for (a, b) in tri.edges() {
            *usage.entry(edge_key(a, b)).or_insert(0) += 1;
        }
    }
    usage
}

/// Returns `true` if the mesh is non-empty and every edge borders exactly
/// two triangles.
pub fn is_watertight(triangles: &[Triangle]) -> bool {
    let usage = edge_usage(triangles);
    !usage.is_empty() && usage.values().all(|&count| count == 2)
}

/// Returns `true` if every directed edge appears once and its reverse also
/// appears once, i.e. neighbouring triangles agree on winding.
pub fn is_consistently_oriented(triangles: &[Triangle]) -> bool {
    let mut directed: FxHashMap<(u32, u32), u32> = FxHashMap::default();
    for tri in triangles {
        for edge in tri.edges() {
            *directed.entry(edge).or_insert(0) += 1;
        }
    }
    directed
        .iter()
        .all(|(&(a, b), &count)| count == 1 && directed.get(&(b, a)) == Some(&1))
}

/// Check if a triangle's face normal points away from the origin.
///
/// The centroid stands in for the outward direction at the triangle.
pub fn triangle_winds_outward(v0: Vec3, v1: Vec3, v2: Vec3) -> bool {
    let face_normal = (v1 - v0).cross(v2 - v0);
    let centroid = (v0 + v1 + v2) / 3.0;
    face_normal.dot(centroid) > 0.0
}

/// Returns `true` if every triangle of `mesh` winds outward.
pub fn all_triangles_wind_outward(mesh: &SphereMesh) -> bool {
    mesh.triangles.iter().all(|&tri| {
        let [v0, v1, v2] = mesh.corners(tri);
        triangle_winds_outward(v0, v1, v2)
    })
}
