//! Edge midpoint welding.
//!
//! Each undirected edge gets exactly one midpoint vertex per pass, no matter
//! how many triangles touch it. Keys are canonicalized as `(min, max)` so
//! both windings of a shared edge resolve to the same entry.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::error::MeshError;

/// Canonical key for the undirected edge between `a` and `b`.
#[inline]
pub fn edge_key(a: u32, b: u32) -> (u32, u32) {
    if a < b { (a, b) } else { (b, a) }
}

/// Halfway point between two vertices, projected back onto the unit sphere.
///
/// Returns `None` when the halfway point is the origin (antipodal input).
#[inline]
pub fn midpoint_on_sphere(p1: Vec3, p2: Vec3) -> Option<Vec3> {
    p1.lerp(p2, 0.5).try_normalize()
}

/// Midpoint of the edge `(a, b)` looked up in `vertices`, on the unit sphere.
///
/// Fails on an index outside `vertices` or a midpoint at the origin.
pub fn edge_midpoint(vertices: &[Vec3], a: u32, b: u32) -> Result<Vec3, MeshError> {
    let vertex = |index: u32| {
        vertices
            .get(index as usize)
            .copied()
            .ok_or(MeshError::InvalidIndex {
                index,
                vertex_count: vertices.len(),
            })
    };
    midpoint_on_sphere(vertex(a)?, vertex(b)?).ok_or(MeshError::DegenerateVertex { a, b })
}

/// Maps undirected edges to the index of their midpoint vertex.
#[derive(Debug, Default)]
pub struct MidpointCache {
    map: FxHashMap<(u32, u32), u32>,
}

impl MidpointCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache sized for `edges` distinct edges.
    pub fn with_capacity(edges: usize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(edges, Default::default()),
        }
    }

    /// Number of cached midpoints.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if no midpoint has been cached.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Look up the midpoint of an edge without creating it.
    pub fn get(&self, a: u32, b: u32) -> Option<u32> {
        self.map.get(&edge_key(a, b)).copied()
    }

    /// Return the midpoint index for edge `(a, b)`, appending a new vertex to
    /// `vertices` on first touch.
    pub fn midpoint(&mut self, vertices: &mut Vec<Vec3>, a: u32, b: u32) -> Result<u32, MeshError> {
        let key = edge_key(a, b);
        if let Some(&index) = self.map.get(&key) {
            return Ok(index);
        }

        let middle = edge_midpoint(vertices, key.0, key.1)?;

        let index = vertices.len() as u32;
        vertices.push(middle);
        self.map.insert(key, index);
        Ok(index)
    }

    /// Reserve an index for edge `(a, b)` without computing its position.
    ///
    /// New edges receive `next_index + pending.len()` and are appended to
    /// `pending`, so indices come out in first-touch order exactly as
    /// [`midpoint`](Self::midpoint) would assign them.
    pub fn assign(&mut self, next_index: u32, pending: &mut Vec<(u32, u32)>, a: u32, b: u32) -> u32 {
        let key = edge_key(a, b);
        *self.map.entry(key).or_insert_with(|| {
            let index = next_index + pending.len() as u32;
            pending.push(key);
            index
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_key_is_order_independent() {
        assert_eq!(edge_key(3, 7), (3, 7));
        assert_eq!(edge_key(7, 3), (3, 7));
        assert_eq!(edge_key(5, 5), (5, 5));
    }

    #[test]
    fn test_swapped_query_reuses_midpoint() {
        let mut vertices = vec![Vec3::X, Vec3::Y];
        let mut cache = MidpointCache::new();

        let first = cache.midpoint(&mut vertices, 0, 1).unwrap();
        let second = cache.midpoint(&mut vertices, 1, 0).unwrap();

        assert_eq!(first, 2);
        assert_eq!(first, second);
        assert_eq!(vertices.len(), 3);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_midpoint_is_normalized() {
        let mut vertices = vec![Vec3::X, Vec3::Y];
        let mut cache = MidpointCache::new();
        let index = cache.midpoint(&mut vertices, 0, 1).unwrap();
        let m = vertices[index as usize];
        assert!((m.length() - 1.0).abs() < 1e-6);
        assert!((m - Vec3::new(1.0, 1.0, 0.0).normalize()).length() < 1e-6);
    }

    #[test]
    fn test_out_of_range_index_is_an_error() {
        let mut vertices = vec![Vec3::X, Vec3::Y];
        let mut cache = MidpointCache::new();
        let err = cache.midpoint(&mut vertices, 0, 7).unwrap_err();
        assert_eq!(
            err,
            MeshError::InvalidIndex {
                index: 7,
                vertex_count: 2
            }
        );
        assert_eq!(vertices.len(), 2);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_antipodal_edge_is_degenerate() {
        let mut vertices = vec![Vec3::X, Vec3::NEG_X];
        let mut cache = MidpointCache::new();
        let err = cache.midpoint(&mut vertices, 1, 0).unwrap_err();
        assert_eq!(err, MeshError::DegenerateVertex { a: 0, b: 1 });
        assert_eq!(vertices.len(), 2);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_assign_matches_first_touch_order() {
        let mut cache = MidpointCache::new();
        let mut pending = Vec::new();

        assert_eq!(cache.assign(10, &mut pending, 0, 1), 10);
        assert_eq!(cache.assign(10, &mut pending, 2, 1), 11);
        assert_eq!(cache.assign(10, &mut pending, 1, 0), 10);
        assert_eq!(pending, vec![(0, 1), (1, 2)]);
        assert_eq!(cache.get(2, 1), Some(11));
        assert_eq!(cache.get(0, 2), None);
    }
}
