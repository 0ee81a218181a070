//! # TDA-Filtrations
//!
//! Combinatorial ball and sphere filtrations, and the persistent homology
//! pipeline that consumes them.
//!
//! ## Filtration Format
//!
//! One simplex per line:
//!
//! ```text
//! <value> <dimension> <v_0> ... <v_dimension>
//! ```
//!
//! The generators use the subset size as the value, so the n=1 ball reads
//!
//! ```text
//! 1 0 1
//! 1 0 2
//! 1 0 3
//! 2 1 1 2
//! 2 1 1 3
//! 2 1 2 3
//! 3 2 1 2 3
//! ```
//!
//! ## Binaries
//!
//! - `make-n-ball <n>`: every non-empty subset of `{1, ..., n+2}`
//! - `make-n-sphere <n>`: the same without the top subset
//! - `persistence <filtration> [output]`: barcode of a filtration file
//!
//! ## Expected Homology
//!
//! The sphere filtration is the boundary of a simplex on `n+2` vertices,
//! so its barcode has exactly two essential classes (β₀ = βₙ = 1). The
//! ball filtration is contractible (β₀ = 1).
//!
//! ## References
//!
//! - Edelsbrunner & Harer, "Computational Topology" (2010)
//! - Zomorodian & Carlsson, "Computing Persistent Homology" (2005)

pub mod cli;
pub mod complex;
pub mod config;
pub mod error;
pub mod persistence;

// Re-exports from complex
pub use complex::{
    expected_simplex_count,
    generate,
    simplices,
    write_filtration,
    ComplexKind,
    GenerationReport,
    SimplexRecord,
};

pub use config::{GeneratorConfig, OverwritePolicy};
pub use error::{FiltrationError, Result};

// Re-exports from persistence
pub use persistence::{
    compute_persistence,
    reduce,
    reduce_and_extract,
    sorted_boundary_matrix,
    BoundaryMatrix,
    FilteredSimplex,
    Filtration,
    PersistenceDiagram,
    PersistenceInterval,
    ReductionStats,
};
