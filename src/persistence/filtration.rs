//! Filtration files: reading, validation and ordering

use crate::error::{FiltrationError, Result};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// A simplex together with the filtration value at which it appears
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredSimplex {
    /// Filtration value (insertion time)
    pub value: f64,
    pub dim: usize,
    /// Vertex IDs, sorted ascending, `dim + 1` of them
    pub vertices: Vec<u32>,
}

impl FilteredSimplex {
    pub fn new(value: f64, mut vertices: Vec<u32>) -> Self {
        vertices.sort_unstable();
        let dim = vertices.len().saturating_sub(1);
        Self { value, dim, vertices }
    }

    /// Order by (value, dimension, vertex set).
    pub fn filtration_cmp(&self, other: &Self) -> Ordering {
        self.value
            .total_cmp(&other.value)
            .then(self.dim.cmp(&other.dim))
            .then_with(|| self.vertices.cmp(&other.vertices))
    }
}

/// An ordered collection of simplices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filtration {
    simplices: Vec<FilteredSimplex>,
}

impl Filtration {
    pub fn new(simplices: Vec<FilteredSimplex>) -> Self {
        Self { simplices }
    }

    /// Read a filtration file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "Reading filtration");
        let file = File::open(path).map_err(|e| FiltrationError::io(path, e))?;
        Self::parse(BufReader::new(file), path)
    }

    /// Read a filtration from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::parse(reader, Path::new("<input>"))
    }

    fn parse<R: BufRead>(reader: R, source: &Path) -> Result<Self> {
        let mut simplices = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| FiltrationError::io(source, e))?;
            if line.trim().is_empty() {
                continue;
            }
            simplices.push(parse_line(&line, idx + 1)?);
        }

        let filtration = Self { simplices };
        for (dim, count) in filtration.counts_by_dimension() {
            info!(dim, count, "Simplices of dimension");
        }
        info!(simplices = filtration.len(), "Filtration read");
        Ok(filtration)
    }

    /// Sort simplices by (value, dimension, vertex set).
    pub fn sort(&mut self) {
        self.simplices.sort_by(FilteredSimplex::filtration_cmp);
    }

    pub fn is_sorted(&self) -> bool {
        self.simplices
            .windows(2)
            .all(|w| w[0].filtration_cmp(&w[1]) != Ordering::Greater)
    }

    pub fn simplices(&self) -> &[FilteredSimplex] {
        &self.simplices
    }

    pub fn get(&self, index: usize) -> Option<&FilteredSimplex> {
        self.simplices.get(index)
    }

    pub fn len(&self) -> usize {
        self.simplices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    /// Number of simplices per dimension
    pub fn counts_by_dimension(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for s in &self.simplices {
            *counts.entry(s.dim).or_insert(0) += 1;
        }
        counts
    }

    /// Euler characteristic χ = Σ (-1)^d · #d-simplices
    pub fn euler_characteristic(&self) -> i64 {
        self.counts_by_dimension()
            .into_iter()
            .map(|(dim, count)| if dim % 2 == 0 { count as i64 } else { -(count as i64) })
            .sum()
    }
}

fn parse_line(line: &str, line_no: usize) -> Result<FilteredSimplex> {
    let mut fields = line.split_whitespace();

    let value: f64 = next_field(&mut fields, line_no, "filtration value")?;
    if !value.is_finite() {
        return Err(FiltrationError::parse(line_no, format!("filtration value {value} is not finite")));
    }
    let dim: usize = next_field(&mut fields, line_no, "dimension")?;

    let vertices = fields
        .map(|tok| {
            tok.parse::<u32>()
                .map_err(|_| FiltrationError::parse(line_no, format!("invalid vertex {tok:?}")))
        })
        .collect::<Result<Vec<u32>>>()?;

    if vertices.len() != dim + 1 {
        return Err(FiltrationError::parse(
            line_no,
            format!("simplex of dimension {dim} needs {} vertices, found {}", dim + 1, vertices.len()),
        ));
    }

    let distinct: HashSet<u32> = vertices.iter().copied().collect();
    if distinct.len() != vertices.len() {
        return Err(FiltrationError::parse(line_no, "repeated vertex"));
    }

    debug!(line = line_no, value, dim, "parsed simplex");
    Ok(FilteredSimplex::new(value, vertices))
}

fn next_field<'a, T: std::str::FromStr>(
    fields: &mut impl Iterator<Item = &'a str>,
    line_no: usize,
    what: &str,
) -> Result<T> {
    let tok = fields
        .next()
        .ok_or_else(|| FiltrationError::parse(line_no, format!("missing {what}")))?;
    tok.parse()
        .map_err(|_| FiltrationError::parse(line_no, format!("invalid {what} {tok:?}")))
}
