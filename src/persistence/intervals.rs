//! Persistence intervals read off a reduced boundary matrix

use super::{BoundaryMatrix, Filtration};
use crate::error::{FiltrationError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Birth/death pair of a homology class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersistenceInterval {
    pub dim: usize,
    pub start: f64,
    /// `f64::INFINITY` for classes that never die
    pub end: f64,
}

impl PersistenceInterval {
    pub fn persistence(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_essential(&self) -> bool {
        self.end.is_infinite()
    }

    /// Order by (start, dimension, end).
    pub fn interval_cmp(&self, other: &Self) -> Ordering {
        self.start
            .total_cmp(&other.start)
            .then(self.dim.cmp(&other.dim))
            .then(self.end.total_cmp(&other.end))
    }
}

impl fmt::Display for PersistenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.dim, self.start)?;
        if self.is_essential() {
            write!(f, "inf")
        } else {
            write!(f, "{}", self.end)
        }
    }
}

/// All intervals of a filtration, sorted by (start, dimension, end)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistenceDiagram {
    pub intervals: Vec<PersistenceInterval>,
}

impl PersistenceDiagram {
    /// Extract intervals from a reduced boundary matrix.
    ///
    /// A zero column opens a class at its simplex's value; a non-zero column
    /// closes the class opened by its `low` row.
    pub fn from_reduced(matrix: &BoundaryMatrix, filtration: &Filtration) -> Result<Self> {
        if matrix.len() != filtration.len() {
            return Err(FiltrationError::InvalidArgument(format!(
                "matrix has {} columns but filtration has {} simplices",
                matrix.len(),
                filtration.len()
            )));
        }

        let simplices = filtration.simplices();
        let mut end = vec![f64::INFINITY; simplices.len()];

        for (col, column) in matrix.columns().iter().enumerate() {
            if let Some(low) = column.low() {
                end[low] = simplices[col].value;
            }
        }

        let mut intervals: Vec<PersistenceInterval> = matrix.columns().iter()
            .zip(simplices)
            .enumerate()
            .filter(|(_, (column, _))| column.is_zero())
            .map(|(col, (_, simplex))| PersistenceInterval {
                dim: simplex.dim,
                start: simplex.value,
                end: end[col],
            })
            .collect();
        intervals.sort_by(PersistenceInterval::interval_cmp);

        info!(intervals = intervals.len(), "Intervals extracted");
        Ok(Self { intervals })
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Intervals in dimension `d`
    pub fn dim(&self, d: usize) -> Vec<&PersistenceInterval> {
        self.intervals.iter().filter(|i| i.dim == d).collect()
    }

    pub fn finite_intervals(&self, d: usize) -> Vec<&PersistenceInterval> {
        self.intervals.iter()
            .filter(|i| i.dim == d && !i.is_essential())
            .collect()
    }

    pub fn essential(&self, d: usize) -> Vec<&PersistenceInterval> {
        self.intervals.iter()
            .filter(|i| i.dim == d && i.is_essential())
            .collect()
    }

    /// Betti numbers of the final complex: essential classes per dimension,
    /// indexed by dimension up to the highest one with a class.
    pub fn betti_numbers(&self) -> Vec<usize> {
        let top = self.intervals.iter()
            .filter(|i| i.is_essential())
            .map(|i| i.dim)
            .max();

        let Some(top) = top else {
            return Vec::new();
        };

        let mut betti = vec![0; top + 1];
        for i in self.intervals.iter().filter(|i| i.is_essential()) {
            betti[i.dim] += 1;
        }
        betti
    }

    /// Write one interval per line: `<dim> <start> <end|inf>`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for interval in &self.intervals {
            writeln!(writer, "{interval}")?;
        }
        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| FiltrationError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)
            .and_then(|_| writer.flush())
            .map_err(|e| FiltrationError::io(path, e))?;
        info!(path = %path.display(), "Intervals saved");
        Ok(())
    }
}
