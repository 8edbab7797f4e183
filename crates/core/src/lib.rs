pub mod cycle;
pub mod graph;
pub mod path;
pub mod relax;
pub mod solver;
pub mod traits;

pub use graph::Graph;
pub use relax::ShortestPaths;
pub use solver::{BellmanFordSolver, SolveOutcome};
