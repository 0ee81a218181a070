//! One line of a generated filtration.

use std::fmt;

/// A vertex subset emitted by the enumerator.
///
/// Rendered as `"<size> <size-1> <v_0> ... <v_k>"`: the subset size doubles
/// as the filtration value and `size - 1` is the simplex dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplexRecord {
    /// Vertex indices (1-based, strictly increasing)
    pub vertices: Vec<usize>,
}

impl SimplexRecord {
    pub fn new(vertices: Vec<usize>) -> Self {
        debug_assert!(!vertices.is_empty());
        debug_assert!(vertices.windows(2).all(|w| w[0] < w[1]));
        Self { vertices }
    }

    /// Number of vertices, written as the first field
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// Simplex dimension, written as the second field
    pub fn dimension(&self) -> usize {
        self.vertices.len() - 1
    }
}

impl fmt::Display for SimplexRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.size(), self.dimension())?;
        for v in &self.vertices {
            write!(f, " {v}")?;
        }
        Ok(())
    }
}
