//! Persistent homology of a filtration file
//!
//! Usage: persistence <filtration_file> [output_file]
//! Ex:    persistence filtrations/3-sphere.txt intervals/3-sphere.txt
//!
//! Writes one interval per line as `<dim> <start> <end|inf>`.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tda_filtrations::cli::init_tracing;
use tda_filtrations::{reduce_and_extract, sorted_boundary_matrix, Filtration};
use tracing::info;

#[derive(Parser)]
#[command(name = "persistence")]
#[command(about = "Compute Z/2 persistence intervals of a filtration")]
struct Args {
    /// Filtration file: `<value> <dim> <v_0> ... <v_dim>` per line
    filtration: PathBuf,

    /// Where to write the intervals
    #[arg(default_value = "intervals/interval.txt")]
    output: PathBuf,

    /// Print the dense boundary matrix before reduction
    #[arg(long)]
    print_matrix: bool,
}

fn run(args: Args) -> Result<()> {
    let mut filtration = Filtration::read(&args.filtration)
        .with_context(|| format!("reading filtration {}", args.filtration.display()))?;

    let matrix = sorted_boundary_matrix(&mut filtration);
    if args.print_matrix {
        print!("{matrix}");
    }

    let (diagram, stats) = reduce_and_extract(matrix, &filtration)?;
    info!(
        average = stats.average_additions(),
        "Average reduction times over {} columns",
        stats.columns
    );

    let betti = diagram.betti_numbers();
    info!(?betti, "Done. {} intervals.", diagram.len());

    diagram
        .save(&args.output)
        .with_context(|| format!("saving intervals to {}", args.output.display()))?;
    Ok(())
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(err) = run(args) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
