//! Sparse Z/2 boundary matrix of a filtration

use super::Filtration;
use ndarray::Array2;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use tracing::{info, warn};

/// Sparse column: the set of non-zero row indices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseColumn {
    rows: BTreeSet<usize>,
}

impl SparseColumn {
    pub fn new() -> Self {
        Self { rows: BTreeSet::new() }
    }

    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self { rows: indices.into_iter().collect() }
    }

    pub fn is_zero(&self) -> bool {
        self.rows.is_empty()
    }

    /// Lowest (maximum) non-zero row index
    pub fn low(&self) -> Option<usize> {
        self.rows.iter().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, row: usize) -> bool {
        self.rows.contains(&row)
    }

    /// Row indices in increasing order
    pub fn rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().copied()
    }

    /// Flip a single entry (add the unit column `e_row` over Z/2)
    pub(crate) fn toggle(&mut self, row: usize) {
        if !self.rows.remove(&row) {
            self.rows.insert(row);
        }
    }

    /// Column addition over Z/2 (symmetric difference)
    pub fn add_assign(&mut self, other: &SparseColumn) {
        for &row in &other.rows {
            self.toggle(row);
        }
    }
}

/// Boundary matrix with one column (and one row) per simplex, in filtration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryMatrix {
    pub(crate) columns: Vec<SparseColumn>,
    missing_faces: usize,
}

impl BoundaryMatrix {
    /// Build the boundary matrix of a filtration.
    ///
    /// Column `j` holds the indices of the codimension-1 faces of simplex `j`
    /// that occur before it. Faces that are not in the filtration at all are
    /// skipped and counted in [`missing_faces`](Self::missing_faces).
    pub fn from_filtration(filtration: &Filtration) -> Self {
        let mut index: HashMap<&[u32], usize> = HashMap::with_capacity(filtration.len());
        let mut columns = Vec::with_capacity(filtration.len());
        let mut missing_faces = 0;
        let mut face: Vec<u32> = Vec::new();

        for (col, simplex) in filtration.simplices().iter().enumerate() {
            let mut column = SparseColumn::new();

            if simplex.dim > 0 {
                // Boundary of [v0, ..., vk] = Σ [v0, ..., v̂i, ..., vk]
                for skip in 0..simplex.vertices.len() {
                    face.clear();
                    face.extend(
                        simplex.vertices.iter().enumerate()
                            .filter(|&(i, _)| i != skip)
                            .map(|(_, &v)| v),
                    );
                    match index.get(face.as_slice()) {
                        Some(&row) => column.toggle(row),
                        None => missing_faces += 1,
                    }
                }
            }

            index.insert(simplex.vertices.as_slice(), col);
            columns.push(column);
        }

        let matrix = Self { columns, missing_faces };
        if missing_faces > 0 {
            warn!(missing_faces, "Faces absent from the filtration were skipped");
        }
        info!(non_zeros = matrix.non_zeros(), "Boundary matrix built");
        info!("Matrix dimension: {}x{}", matrix.len(), matrix.len());
        matrix
    }

    pub fn from_columns(columns: Vec<SparseColumn>) -> Self {
        Self { columns, missing_faces: 0 }
    }

    /// Number of columns (equal to the number of rows)
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column(&self, j: usize) -> &SparseColumn {
        &self.columns[j]
    }

    pub fn columns(&self) -> &[SparseColumn] {
        &self.columns
    }

    pub fn non_zeros(&self) -> usize {
        self.columns.iter().map(SparseColumn::len).sum()
    }

    /// Faces referenced by some simplex but absent from the filtration
    pub fn missing_faces(&self) -> usize {
        self.missing_faces
    }

    /// Dense 0/1 view, indexed `[[row, column]]`
    pub fn to_dense(&self) -> Array2<u8> {
        let n = self.len();
        let mut dense = Array2::zeros((n, n));
        for (j, column) in self.columns.iter().enumerate() {
            for i in column.rows() {
                dense[[i, j]] = 1;
            }
        }
        dense
    }
}

impl fmt::Display for BoundaryMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dense = self.to_dense();
        for row in dense.rows() {
            let cells: Vec<String> = row.iter().map(u8::to_string).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
