//! Standard column reduction over Z/2
//!
//! Columns are processed left to right. While the lowest non-zero row of a
//! column is already the pivot of an earlier column, that earlier column is
//! added to it. Afterwards `low` is injective on the non-zero columns.
//!
//! Reference: Edelsbrunner, Letscher, Zomorodian (2002), "Topological
//! Persistence and Simplification".

use super::BoundaryMatrix;
use std::collections::HashMap;
use tracing::info;

/// Work done by [`reduce`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReductionStats {
    pub columns: usize,
    pub column_additions: usize,
}

impl ReductionStats {
    /// Mean number of column additions per column
    pub fn average_additions(&self) -> f64 {
        if self.columns == 0 {
            return 0.0;
        }
        self.column_additions as f64 / self.columns as f64
    }
}

/// Reduce `matrix` in place.
pub fn reduce(matrix: &mut BoundaryMatrix) -> ReductionStats {
    let mut low_to_col: HashMap<usize, usize> = HashMap::new();
    let mut column_additions = 0;

    for j in 0..matrix.columns.len() {
        // Pivot columns are always to the left of j
        let (done, rest) = matrix.columns.split_at_mut(j);
        let column = &mut rest[0];

        while let Some(low) = column.low() {
            match low_to_col.get(&low) {
                Some(&pivot) => {
                    column.add_assign(&done[pivot]);
                    column_additions += 1;
                }
                None => {
                    low_to_col.insert(low, j);
                    break;
                }
            }
        }
    }

    let stats = ReductionStats { columns: matrix.len(), column_additions };
    info!(
        column_additions,
        average = stats.average_additions(),
        "Matrix reduced"
    );
    stats
}

/// True when no two non-zero columns share a `low`.
pub fn is_reduced(matrix: &BoundaryMatrix) -> bool {
    let mut seen = std::collections::HashSet::new();
    matrix.columns().iter()
        .filter_map(|c| c.low())
        .all(|low| seen.insert(low))
}
