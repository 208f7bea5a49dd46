//! The 12-vertex, 20-face regular icosahedron every planet starts from.

use glam::Vec3;

use crate::topology::{SphereMesh, Triangle};

/// Face table, wound counter-clockwise when viewed from outside.
pub const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Build the base icosahedron on the unit sphere.
///
/// The vertices are the corners of three mutually orthogonal `2 x 2φ`
/// golden rectangles, normalized. The result is a constant.
pub fn build_icosahedron() -> SphereMesh {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;

    let vertices = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
    .map(Vec3::normalize)
    .to_vec();

    let triangles = ICOSAHEDRON_FACES
        .iter()
        .map(|&[a, b, c]| Triangle::new(a, b, c))
        .collect();

    SphereMesh {
        vertices,
        triangles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{all_triangles_wind_outward, is_consistently_oriented, is_watertight};

    #[test]
    fn test_counts() {
        let mesh = build_icosahedron();
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.triangle_count(), 20);
    }

    #[test]
    fn test_vertices_on_unit_sphere() {
        for v in build_icosahedron().vertices {
            assert!((v.length() - 1.0).abs() < 1e-6, "length = {}", v.length());
        }
    }

    #[test]
    fn test_all_edges_equal_length() {
        let mesh = build_icosahedron();
        let [a, b, _] = mesh.corners(mesh.triangles[0]);
        let expected = a.distance(b);
        for &tri in &mesh.triangles {
            let [p, q, r] = mesh.corners(tri);
            for len in [p.distance(q), q.distance(r), r.distance(p)] {
                assert!((len - expected).abs() < 1e-5, "edge {len} vs {expected}");
            }
        }
    }

    #[test]
    fn test_closed_and_outward() {
        let mesh = build_icosahedron();
        assert!(is_watertight(&mesh.triangles));
        assert!(is_consistently_oriented(&mesh.triangles));
        assert!(all_triangles_wind_outward(&mesh));
    }

    #[test]
    fn test_is_deterministic() {
        assert_eq!(build_icosahedron(), build_icosahedron());
    }
}
