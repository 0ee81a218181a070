//! Generator configuration and command-line value parsing.

use crate::complex::ComplexKind;
use crate::error::{FiltrationError, Result};
use std::path::{Path, PathBuf};

/// Directory the generators write into unless told otherwise.
pub const DEFAULT_OUTPUT_DIR: &str = "../filtrations";

/// Environment variable that overrides [`DEFAULT_OUTPUT_DIR`] for the CLIs.
pub const OUTPUT_DIR_ENV: &str = "FILTRATION_DIR";

/// What to do when the destination file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    /// Truncate and rewrite the file.
    #[default]
    Overwrite,
    /// Fail with [`FiltrationError::OutputExists`].
    Refuse,
}

/// Settings for one generator run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Nominal dimension `n` of the ball or sphere
    pub dimension: usize,
    /// Pre-existing directory that receives `<n>-ball.txt` / `<n>-sphere.txt`
    pub output_dir: PathBuf,
    pub overwrite: OverwritePolicy,
}

impl GeneratorConfig {
    pub fn new(dimension: usize) -> Result<Self> {
        validate_dimension(dimension)?;
        Ok(Self {
            dimension,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            overwrite: OverwritePolicy::default(),
        })
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_overwrite(mut self, policy: OverwritePolicy) -> Self {
        self.overwrite = policy;
        self
    }

    /// Full path of the file written for `kind`.
    pub fn output_path(&self, kind: ComplexKind) -> PathBuf {
        self.output_dir.join(kind.file_name(self.dimension))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

fn validate_dimension(dimension: usize) -> Result<()> {
    if dimension == 0 {
        return Err(FiltrationError::InvalidArgument(
            "dimension must be at least 1, got 0".to_string(),
        ));
    }
    Ok(())
}

/// Parse the positional dimension argument.
///
/// Used as a clap `value_parser`, so a bad value surfaces as
/// [`FiltrationError::InvalidArgument`] in the usage error.
pub fn parse_dimension(raw: &str) -> Result<usize> {
    let dimension: usize = raw.trim().parse().map_err(|_| {
        FiltrationError::InvalidArgument(format!("dimension must be a positive integer, got {raw:?}"))
    })?;
    validate_dimension(dimension)?;
    Ok(dimension)
}
