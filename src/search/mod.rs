//! Local search for the map coloring problem.

/// steepest descent hill-climbing over single-vertex recolorings
pub mod hill_climbing;
