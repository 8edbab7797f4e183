use super::graph::Graph;
use super::solver::SolveOutcome;
use common::{error::Error, types::Vertex};

/// Trait for single-source shortest path solvers that tolerate negative weights.
pub trait ShortestPathSolver {
    /// Computes shortest paths from `source` and reports a negative cycle
    /// reachable from it, if any.
    ///
    /// A negative cycle is part of a successful outcome, not an error.
    /// `Err(e)` is reserved for invalid input.
    fn solve(&self, graph: &Graph, source: Vertex) -> Result<SolveOutcome, Error>;
}
