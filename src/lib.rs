//! Tabu search based color reduction for the Graph Coloring problem

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// graph model, solutions and checker
pub mod color;

/// crate errors
pub mod error;

/// read/write the plain edge-list, coloring and solution formats
pub mod gc;

/// read DIMACS instances
pub mod dimacs;

/// search parameters
pub mod config;

/// export of intermediate solutions
pub mod checkpoint;

/// stopping criteria
pub mod stopping;

/// helper and utility methods for executables
pub mod util;

/// search procedures for the graph coloring problem
pub mod search;

pub use error::{ColorError, Result};
