//! Tesseract (4D Hypercube) geometry
//!
//! A tesseract has 16 vertices (all combinations of ±h for x,y,z,w)
//! and 32 edges joining vertices that differ on exactly one axis.

use crate::{Vec4, shape::{Edge, WireframeShape4D}};

/// Number of vertices of a tesseract
pub const VERTEX_COUNT: usize = 16;
/// Number of edges of a tesseract
pub const EDGE_COUNT: usize = 32;

/// A tesseract (4D hypercube) - pure geometry without colors
#[derive(Clone, Debug)]
pub struct Tesseract4D {
    /// Half the side length
    half_size: f64,
    /// The 16 vertices of the tesseract
    vertices: [Vec4; VERTEX_COUNT],
    /// The 32 edges, sorted by (a, b)
    edges: Vec<Edge>,
}

impl Default for Tesseract4D {
    fn default() -> Self {
        Self::new()
    }
}

impl Tesseract4D {
    /// Unit tesseract: every coordinate is exactly +1 or -1
    pub fn new() -> Self {
        Self::with_half_size(1.0)
    }

    /// Tesseract centered at origin with coordinates ±`half_size`
    pub fn with_half_size(half_size: f64) -> Self {
        let vertices = Self::compute_vertices(half_size);
        let edges = Self::compute_edges(&vertices);

        Self {
            half_size,
            vertices,
            edges,
        }
    }

    /// Get the half-size (half the side length)
    #[inline]
    pub fn half_size(&self) -> f64 {
        self.half_size
    }

    /// Vertex i takes +h on axis k when bit k of i is set, -h otherwise
    fn compute_vertices(h: f64) -> [Vec4; VERTEX_COUNT] {
        let mut vertices = [Vec4::ZERO; VERTEX_COUNT];
        for (i, v) in vertices.iter_mut().enumerate() {
            let coord = |bit: usize| if i & (1 << bit) != 0 { h } else { -h };
            *v = Vec4::new(coord(0), coord(1), coord(2), coord(3));
        }
        vertices
    }

    /// Every pair i < j whose vertices differ on exactly one axis
    fn compute_edges(vertices: &[Vec4]) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(EDGE_COUNT);
        for i in 0..vertices.len() {
            for j in (i + 1)..vertices.len() {
                if vertices[i].differing_axes(vertices[j]) == 1 {
                    edges.push(Edge::new(i, j));
                }
            }
        }
        edges
    }
}

impl WireframeShape4D for Tesseract4D {
    fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tesseract_vertex_count() {
        let t = Tesseract4D::new();
        assert_eq!(t.vertex_count(), 16);
    }

    #[test]
    fn test_vertex_coordinates_are_unit_signs() {
        let t = Tesseract4D::new();
        for v in t.vertices() {
            for c in v.to_array() {
                assert!(c == 1.0 || c == -1.0, "coordinate {} in {:?}", c, v);
            }
        }
    }

    #[test]
    fn test_vertices_follow_index_bits() {
        let t = Tesseract4D::new();
        assert_eq!(t.vertices()[0], Vec4::new(-1.0, -1.0, -1.0, -1.0));
        assert_eq!(t.vertices()[1], Vec4::new(1.0, -1.0, -1.0, -1.0));
        assert_eq!(t.vertices()[8], Vec4::new(-1.0, -1.0, -1.0, 1.0));
        assert_eq!(t.vertices()[15], Vec4::ONE);
    }

    #[test]
    fn test_vertices_are_distinct() {
        let t = Tesseract4D::new();
        let set: HashSet<[u64; 4]> = t
            .vertices()
            .iter()
            .map(|v| v.to_array().map(f64::to_bits))
            .collect();
        assert_eq!(set.len(), 16);
    }

    #[test]
    fn test_tesseract_edge_count() {
        let t = Tesseract4D::new();
        assert_eq!(t.edge_count(), 32);
    }

    #[test]
    fn test_edges_differ_on_one_axis() {
        let t = Tesseract4D::new();
        for e in t.edges() {
            let (a, b) = (t.vertices()[e.a], t.vertices()[e.b]);
            assert_eq!(a.differing_axes(b), 1, "edge {:?}", e);
            // Same relation in index space
            assert_eq!((e.a ^ e.b).count_ones(), 1);
        }
    }

    #[test]
    fn test_edges_unique_and_not_loops() {
        let t = Tesseract4D::new();
        let set: HashSet<Edge> = t.edges().iter().copied().collect();
        assert_eq!(set.len(), t.edge_count());
        for e in t.edges() {
            assert!(e.a < e.b, "edge {:?} is not canonical", e);
        }
    }

    #[test]
    fn test_every_vertex_has_four_edges() {
        let t = Tesseract4D::new();
        let mut degree = [0usize; 16];
        for e in t.edges() {
            degree[e.a] += 1;
            degree[e.b] += 1;
        }
        assert!(degree.iter().all(|&d| d == 4), "degrees {:?}", degree);
    }

    #[test]
    fn test_half_size_scales_vertices() {
        let t = Tesseract4D::with_half_size(0.5);
        assert_eq!(t.half_size(), 0.5);
        assert_eq!(t.vertices()[15], Vec4::new(0.5, 0.5, 0.5, 0.5));
        assert_eq!(t.edge_count(), 32);
    }
}
