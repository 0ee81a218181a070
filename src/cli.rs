//! Shared command-line plumbing for the binaries

use crate::complex::{self, ComplexKind, GenerationReport};
use crate::config::{parse_dimension, GeneratorConfig, OverwritePolicy, DEFAULT_OUTPUT_DIR, OUTPUT_DIR_ENV};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Install the stderr `tracing` subscriber (`RUST_LOG`, default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Arguments accepted by `make-n-ball` and `make-n-sphere`
#[derive(Debug, Parser)]
pub struct GeneratorArgs {
    /// Nominal dimension n (positive integer)
    #[arg(value_parser = parse_dimension, allow_negative_numbers = true)]
    pub dimension: usize,

    /// Existing directory that receives the filtration file
    #[arg(long, env = OUTPUT_DIR_ENV, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Fail instead of overwriting an existing file
    #[arg(long)]
    pub no_clobber: bool,
}

impl GeneratorArgs {
    pub fn into_config(self) -> Result<GeneratorConfig> {
        let policy = if self.no_clobber {
            OverwritePolicy::Refuse
        } else {
            OverwritePolicy::Overwrite
        };
        Ok(GeneratorConfig::new(self.dimension)?
            .with_output_dir(self.output_dir)
            .with_overwrite(policy))
    }
}

/// Body of both generator binaries.
pub fn run_generator(kind: ComplexKind, args: GeneratorArgs) -> Result<GenerationReport> {
    let config = args.into_config()?;

    println!("Dim: {}", config.dimension);

    complex::generate(&config, kind).with_context(|| {
        format!("failed to generate {}-{}", config.dimension, kind.name())
    })
}
