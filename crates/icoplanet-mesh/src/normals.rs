//! Per-face normals for flattened triangle buffers.

use glam::Vec3;
use rayon::prelude::*;

/// Unit normal of a counter-clockwise triangle.
///
/// Zero-area triangles fall back to the direction of their centroid, and to
/// [`Vec3::ZERO`] if that is also undefined, so the result is never NaN.
pub fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v1 - v0)
        .cross(v2 - v0)
        .try_normalize()
        .or_else(|| (v0 + v1 + v2).try_normalize())
        .unwrap_or(Vec3::ZERO)
}

/// One normal per flattened vertex, shared by the three corners of a face.
///
/// `positions.len()` must be a multiple of three.
pub fn compute_face_normals(positions: &[Vec3]) -> Vec<Vec3> {
    debug_assert!(positions.len() % 3 == 0, "flattened buffer is not triangles");
    positions
        .par_chunks_exact(3)
        .flat_map_iter(|tri| {
            let n = face_normal(tri[0], tri[1], tri[2]);
            [n, n, n]
        })
        .collect()
}
