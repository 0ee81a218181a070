//! Complex Module: Combinatorial Ball and Sphere Filtrations
//!
//! Enumerates the simplices of the full simplex on `n+2` vertices (an
//! n-ball in the naming used by the output files) and of its boundary
//! (an n-sphere), and writes them in the plain-text filtration format read
//! by [`crate::persistence::Filtration`]:
//!
//! ```text
//! <value> <dimension> <v_0> ... <v_dimension>
//! ```
//!
//! The subset size is used as the filtration value, so every face of a
//! simplex enters the filtration strictly before the simplex itself.

mod generator;
mod simplex;

pub use generator::{
    binomial,
    expected_simplex_count,
    generate,
    simplices,
    vertex_count,
    write_filtration,
    ComplexKind,
    GenerationReport,
};
pub use simplex::SimplexRecord;
