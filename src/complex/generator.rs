//! Ball and sphere filtration generators
//!
//! Both complexes live on the vertex set `{1, ..., n+2}` and consist of every
//! non-empty vertex subset up to a maximum size:
//!
//! - n-ball: subsets of size `1..=n+2` (the full simplex on `n+2` vertices)
//! - n-sphere: subsets of size `1..=n+1` (its boundary, an n-sphere)
//!
//! Subsets are emitted grouped by size, each group in lexicographic
//! combination order.

use super::SimplexRecord;
use crate::config::{GeneratorConfig, OverwritePolicy};
use crate::error::{FiltrationError, Result};
use itertools::Itertools;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Which complex to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexKind {
    Ball,
    Sphere,
}

impl ComplexKind {
    /// Largest subset size written for nominal dimension `n`
    pub fn max_subset_size(self, n: usize) -> usize {
        match self {
            ComplexKind::Ball => n + 2,
            ComplexKind::Sphere => n + 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ComplexKind::Ball => "ball",
            ComplexKind::Sphere => "sphere",
        }
    }

    /// `"<n>-ball.txt"` or `"<n>-sphere.txt"`
    pub fn file_name(self, n: usize) -> String {
        format!("{}-{}.txt", n, self.name())
    }
}

/// Size of the vertex set `{1, ..., n+2}`.
pub fn vertex_count(n: usize) -> usize {
    n + 2
}

/// Lazily enumerate every subset of `{1, ..., n+2}` with size in
/// `1..=max_size`, grouped by size, lexicographic within a group.
pub fn simplices(n: usize, max_size: usize) -> impl Iterator<Item = SimplexRecord> {
    let vertices = vertex_count(n);
    (1..=max_size).flat_map(move |size| {
        (1..=vertices)
            .combinations(size)
            .map(SimplexRecord::new)
    })
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Binomial coefficient C(n, k), 0 when k > n.
///
/// `None` when the result does not fit in a `u128`.
pub fn binomial(n: u64, k: u64) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut c: u128 = 1;
    for i in 0..k {
        // c * (n - i) is divisible by i + 1; cancel the common factor first
        // so the product never exceeds the next coefficient C(n, i + 1)
        let num = u128::from(n - i);
        let den = u128::from(i + 1);
        let g = gcd(c, den);
        c = (c / g).checked_mul(num / (den / g))?;
    }
    Some(c)
}

/// Number of lines the generator writes: `Σ_{i=1}^{M} C(n+2, i)`.
///
/// `None` when the count does not fit in a `u128` (from `n = 127` on).
pub fn expected_simplex_count(n: usize, kind: ComplexKind) -> Option<u128> {
    let vertices = vertex_count(n) as u64;
    (1..=kind.max_subset_size(n) as u64)
        .try_fold(0u128, |acc, i| acc.checked_add(binomial(vertices, i)?))
}

/// Stream the filtration for `kind` into `writer`, one record per line.
///
/// Returns the number of lines written. The writer is not flushed.
pub fn write_filtration<W: Write>(mut writer: W, n: usize, kind: ComplexKind) -> io::Result<usize> {
    let max_size = kind.max_subset_size(n);
    let mut written = 0;
    let mut current_size = 0;

    for record in simplices(n, max_size) {
        if record.size() != current_size {
            current_size = record.size();
            debug!(size = current_size, "writing subsets");
        }
        writeln!(writer, "{record}")?;
        written += 1;
    }

    Ok(written)
}

/// Outcome of a successful [`generate`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub kind: ComplexKind,
    pub path: PathBuf,
    /// Lines written
    pub simplices: usize,
}

/// Write `<output_dir>/<n>-<kind>.txt` according to `config`.
///
/// The output directory must already exist. A failure part-way through
/// leaves a truncated file behind.
pub fn generate(config: &GeneratorConfig, kind: ComplexKind) -> Result<GenerationReport> {
    let path = config.output_path(kind);
    let file = open_output(&path, config.overwrite)?;

    info!(
        kind = kind.name(),
        dimension = config.dimension,
        path = %path.display(),
        "Generating filtration"
    );

    let mut writer = BufWriter::new(file);
    let simplices = write_filtration(&mut writer, config.dimension, kind)
        .map_err(|e| FiltrationError::io(&path, e))?;
    writer.flush().map_err(|e| FiltrationError::io(&path, e))?;

    info!(simplices, "Filtration written");

    Ok(GenerationReport { kind, path, simplices })
}

fn open_output(path: &Path, policy: OverwritePolicy) -> Result<File> {
    let opened = match policy {
        OverwritePolicy::Overwrite => File::create(path),
        OverwritePolicy::Refuse => OpenOptions::new().write(true).create_new(true).open(path),
    };

    opened.map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => FiltrationError::OutputExists { path: path.to_path_buf() },
        _ => FiltrationError::io(path, e),
    })
}
