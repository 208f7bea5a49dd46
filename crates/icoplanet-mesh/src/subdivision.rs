//! Recursive 1-to-4 triangle subdivision with welded edge midpoints.
//!
//! Each pass splits every triangle `(a, b, c)` into
//! `(a, ab, ca)`, `(b, bc, ab)`, `(c, ca, bc)`, `(ab, bc, ca)`, where the
//! midpoints are shared with the neighbouring triangle across each edge and
//! re-projected onto the unit sphere. After `d` passes the mesh has
//! `20 * 4^d` triangles and `10 * 4^d + 2` vertices.

use rayon::prelude::*;
use tracing::debug;

use crate::error::MeshError;
use crate::midpoint_cache::{MidpointCache, edge_midpoint};
use crate::topology::{SphereMesh, Triangle};

/// Deepest supported subdivision.
///
/// At depth 13 the flattened index buffer (`3 * 20 * 4^d` entries) is the
/// last one that still fits in `u32`; one level of headroom is kept.
pub const MAX_SUBDIVISION_DEPTH: u32 = 12;

/// Passes over meshes with fewer triangles than this run single-threaded.
const PARALLEL_THRESHOLD: usize = 4096;

/// Subdivide `mesh` `depth` times. Depth 0 returns the input unchanged.
pub fn subdivide(mut mesh: SphereMesh, depth: u32) -> Result<SphereMesh, MeshError> {
    if depth > MAX_SUBDIVISION_DEPTH {
        return Err(MeshError::DepthTooLarge {
            depth,
            max: MAX_SUBDIVISION_DEPTH,
        });
    }

    for pass in 0..depth {
        mesh = if mesh.triangles.len() >= PARALLEL_THRESHOLD {
            subdivide_pass_parallel(mesh)?
        } else {
            subdivide_pass(mesh)?
        };
        debug!(
            pass = pass + 1,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "subdivision pass complete"
        );
    }

    Ok(mesh)
}

/// One serial subdivision pass.
pub fn subdivide_pass(mesh: SphereMesh) -> Result<SphereMesh, MeshError> {
    let SphereMesh {
        mut vertices,
        triangles,
    } = mesh;

    let new_edges = triangles.len() * 3 / 2;
    let mut cache = MidpointCache::with_capacity(new_edges);
    vertices.reserve(new_edges);
    let mut children = Vec::with_capacity(triangles.len() * 4);

    for tri in &triangles {
        let [a, b, c] = tri.0;
        let ab = cache.midpoint(&mut vertices, a, b)?;
        let bc = cache.midpoint(&mut vertices, b, c)?;
        let ca = cache.midpoint(&mut vertices, c, a)?;
        children.extend_from_slice(&split(*tri, [ab, bc, ca]));
    }

    Ok(SphereMesh {
        vertices,
        triangles: children,
    })
}

/// One subdivision pass with parallel midpoint and triangle generation.
///
/// Midpoint indices are first assigned serially in triangle order, which
/// makes the output identical to [`subdivide_pass`]. Positions and child
/// triangles are then produced in parallel with no shared writes.
pub fn subdivide_pass_parallel(mesh: SphereMesh) -> Result<SphereMesh, MeshError> {
    let SphereMesh {
        mut vertices,
        triangles,
    } = mesh;

    let next_index = vertices.len() as u32;
    let new_edges = triangles.len() * 3 / 2;
    let mut cache = MidpointCache::with_capacity(new_edges);
    let mut pending = Vec::with_capacity(new_edges);

    let midpoints: Vec<[u32; 3]> = triangles
        .iter()
        .map(|tri| {
            let [a, b, c] = tri.0;
            [
                cache.assign(next_index, &mut pending, a, b),
                cache.assign(next_index, &mut pending, b, c),
                cache.assign(next_index, &mut pending, c, a),
            ]
        })
        .collect();

    let positions = pending
        .par_iter()
        .map(|&(a, b)| edge_midpoint(&vertices, a, b))
        .collect::<Result<Vec<_>, _>>()?;
    vertices.extend(positions);

    let children = triangles
        .par_iter()
        .zip(midpoints.par_iter())
        .flat_map_iter(|(tri, mids)| split(*tri, *mids))
        .collect();

    Ok(SphereMesh {
        vertices,
        triangles: children,
    })
}

/// The four children of `tri` given its edge midpoints `[ab, bc, ca]`.
#[inline]
fn split(tri: Triangle, [ab, bc, ca]: [u32; 3]) -> [Triangle; 4] {
    let [a, b, c] = tri.0;
    [
        Triangle::new(a, ab, ca),
        Triangle::new(b, bc, ab),
        Triangle::new(c, ca, bc),
        Triangle::new(ab, bc, ca),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icosahedron::build_icosahedron;
    use crate::validation::{
        all_triangles_wind_outward, expected_triangle_count, expected_vertex_count,
        is_consistently_oriented, is_watertight,
    };
    use glam::Vec3;

    #[test]
    fn test_depth_zero_is_identity() {
        let base = build_icosahedron();
        let mesh = subdivide(base.clone(), 0).unwrap();
        assert_eq!(mesh, base);
    }

    #[test]
    fn test_depth_one_counts() {
        let mesh = subdivide(build_icosahedron(), 1).unwrap();
        assert_eq!(mesh.triangle_count(), 80);
        assert_eq!(mesh.vertex_count(), 42);
    }

    #[test]
    fn test_counts_follow_closed_form() {
        for depth in 0..=5 {
            let mesh = subdivide(build_icosahedron(), depth).unwrap();
            assert_eq!(mesh.triangle_count(), expected_triangle_count(depth));
            assert_eq!(mesh.vertex_count(), expected_vertex_count(depth));
        }
    }

    #[test]
    fn test_vertices_stay_on_unit_sphere() {
        let mesh = subdivide(build_icosahedron(), 4).unwrap();
        for v in &mesh.vertices {
            assert!((v.length() - 1.0).abs() < 1e-5, "length = {}", v.length());
        }
    }

    #[test]
    fn test_indices_in_bounds() {
        let mesh = subdivide(build_icosahedron(), 3).unwrap();
        let n = mesh.vertex_count() as u32;
        for tri in &mesh.triangles {
            for &i in &tri.0 {
                assert!(i < n, "index {i} out of bounds ({n} vertices)");
            }
        }
    }

    #[test]
    fn test_watertight_at_every_depth() {
        for depth in 0..=4 {
            let mesh = subdivide(build_icosahedron(), depth).unwrap();
            assert!(is_watertight(&mesh.triangles), "depth {depth} has open edges");
            assert!(is_consistently_oriented(&mesh.triangles), "depth {depth} has flipped faces");
        }
    }

    #[test]
    fn test_winding_stays_outward() {
        let mesh = subdivide(build_icosahedron(), 3).unwrap();
        assert!(all_triangles_wind_outward(&mesh));
    }

    #[test]
    fn test_no_duplicate_vertices() {
        let mesh = subdivide(build_icosahedron(), 3).unwrap();
        for (i, a) in mesh.vertices.iter().enumerate() {
            for b in &mesh.vertices[i + 1..] {
                assert!(a.distance(*b) > 1e-4, "duplicate vertex at {a}");
            }
        }
    }

    #[test]
    fn test_parallel_pass_matches_serial_pass() {
        let mut mesh = build_icosahedron();
        for _ in 0..4 {
            let serial = subdivide_pass(mesh.clone()).unwrap();
            let parallel = subdivide_pass_parallel(mesh).unwrap();
            assert_eq!(serial, parallel);
            mesh = serial;
        }
    }

    #[test]
    fn test_parallel_threshold_path_matches_serial() {
        // Depth 6 crosses PARALLEL_THRESHOLD on its last passes.
        let parallel = subdivide(build_icosahedron(), 6).unwrap();
        let mut serial = build_icosahedron();
        for _ in 0..6 {
            serial = subdivide_pass(serial).unwrap();
        }
        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_depth_above_limit_is_rejected() {
        let err = subdivide(build_icosahedron(), MAX_SUBDIVISION_DEPTH + 1).unwrap_err();
        assert_eq!(
            err,
            MeshError::DepthTooLarge {
                depth: MAX_SUBDIVISION_DEPTH + 1,
                max: MAX_SUBDIVISION_DEPTH
            }
        );
    }

    #[test]
    fn test_degenerate_midpoint_fails_pass() {
        let mesh = SphereMesh {
            vertices: vec![Vec3::X, Vec3::NEG_X, Vec3::Y],
            triangles: vec![Triangle::new(0, 1, 2)],
        };
        assert_eq!(
            subdivide_pass(mesh.clone()).unwrap_err(),
            MeshError::DegenerateVertex { a: 0, b: 1 }
        );
        assert_eq!(
            subdivide_pass_parallel(mesh).unwrap_err(),
            MeshError::DegenerateVertex { a: 0, b: 1 }
        );
    }

    #[test]
    fn test_out_of_range_triangle_index_is_an_error() {
        let mesh = SphereMesh {
            vertices: vec![Vec3::X, Vec3::Y],
            triangles: vec![Triangle::new(0, 1, 7)],
        };
        let expected = MeshError::InvalidIndex {
            index: 7,
            vertex_count: 2,
        };
        assert_eq!(subdivide(mesh.clone(), 1).unwrap_err(), expected);
        assert_eq!(subdivide_pass_parallel(mesh).unwrap_err(), expected);
    }

    #[test]
    fn test_is_deterministic() {
        let a = subdivide(build_icosahedron(), 5).unwrap();
        let b = subdivide(build_icosahedron(), 5).unwrap();
        assert_eq!(a, b);
    }
}
