//! n-ball filtration generator
//!
//! Writes every non-empty subset of `{1, ..., n+2}` to
//! `<output-dir>/<n>-ball.txt`, one `"<i> <i-1> <members>"` line each.

use clap::Parser;
use tda_filtrations::cli::{init_tracing, run_generator, GeneratorArgs};
use tda_filtrations::ComplexKind;

#[derive(Parser)]
#[command(name = "make-n-ball")]
#[command(about = "Generate the n-ball filtration")]
struct Args {
    #[command(flatten)]
    generator: GeneratorArgs,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(err) = run_generator(ComplexKind::Ball, args.generator) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
