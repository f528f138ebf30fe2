//! Search procedures for the graph coloring problem.

/// greedy DSATUR algorithm (initial colorings)
pub mod greedy_dsatur;

/// per-vertex conflict counters, updated incrementally
pub mod conflicts;

/// bounded FIFO tabu list of vertices
pub mod tabu;

/// local search state and single steps (vertex and color selection)
pub mod local_search;

/// search of a conflict-free coloring for a fixed number of colors
pub mod feasibility;

/// removal of a color from a coloring
pub mod remap;

/// color reduction (tabu search driver)
pub mod descent;
