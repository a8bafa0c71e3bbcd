//! Shape traits and primitives for 4D wireframes
//!
//! Shapes are pure geometric data - no colors or rendering info.

use crate::Vec4;

/// An unordered pair of vertex indices, stored with `a < b`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    /// Create an edge in canonical (sorted) form
    #[inline]
    pub fn new(i: usize, j: usize) -> Self {
        if i <= j {
            Self { a: i, b: j }
        } else {
            Self { a: j, b: i }
        }
    }

    /// Both endpoint indices
    #[inline]
    pub fn indices(&self) -> [usize; 2] {
        [self.a, self.b]
    }
}

/// Trait for 4D shapes drawn as points joined by straight edges
pub trait WireframeShape4D: Send + Sync {
    /// Get the vertices of this shape
    fn vertices(&self) -> &[Vec4];

    /// Get the edges of this shape
    fn edges(&self) -> &[Edge];

    /// Get the number of vertices
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Get the number of edges
    #[inline]
    fn edge_count(&self) -> usize {
        self.edges().len()
    }
}
