//! Coloring the map of Canada by hill-climbing

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


/// coloring instance base trait, palette, assignments and checker
pub mod color;

/// immutable map (regions, names, adjacency)
pub mod map_instance;

/// provinces and territories of Canada
pub mod canada;

/// read DIMACS graphs as maps
pub mod dimacs;

/// errors of the parameters and instance readers
pub mod error;

/// helper and utility methods for executables
pub mod util;

/// search algorithms for the map coloring problem
pub mod search;
