//! n-sphere filtration generator
//!
//! Same enumeration as `make-n-ball` but stops at subsets of size `n+1`,
//! leaving the boundary of the simplex: `<output-dir>/<n>-sphere.txt`.

use clap::Parser;
use tda_filtrations::cli::{init_tracing, run_generator, GeneratorArgs};
use tda_filtrations::ComplexKind;

#[derive(Parser)]
#[command(name = "make-n-sphere")]
#[command(about = "Generate the n-sphere filtration")]
struct Args {
    #[command(flatten)]
    generator: GeneratorArgs,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(err) = run_generator(ComplexKind::Sphere, args.generator) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
