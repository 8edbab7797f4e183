use super::cycle::{find_negative_cycle, unbounded_vertices};
use super::graph::Graph;
use super::path::reconstruct_path;
use super::relax::{ShortestPaths, relax};
use super::traits::ShortestPathSolver;
use common::{
    error::Error,
    types::{Distance, NegativeCycle, Vertex},
};
use tracing::debug;

/// Solver running classic Bellman-Ford relaxation followed by negative cycle
/// extraction.
pub struct BellmanFordSolver;

/// Everything one solve produces for a fixed source.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub paths: ShortestPaths,
    /// The first negative cycle met in edge scan order, if any.
    pub negative_cycle: Option<NegativeCycle>,
    /// `unbounded[v]` is true when a reachable negative cycle leads to `v`.
    pub unbounded: Vec<bool>,
}

impl SolveOutcome {
    pub fn source(&self) -> Vertex {
        self.paths.source
    }

    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle.is_some()
    }

    pub fn is_unbounded(&self, v: Vertex) -> bool {
        self.unbounded.get(v).copied().unwrap_or(false)
    }

    fn check_target(&self, target: Vertex) -> Result<(), Error> {
        if target >= self.unbounded.len() {
            return Err(Error::InvalidTarget(target));
        }
        if self.unbounded[target] {
            return Err(Error::NegativeCycleInterference(target));
        }
        Ok(())
    }

    /// Shortest distance to `target`.
    ///
    /// # Errors
    /// `Error::InvalidTarget` for an unknown vertex and
    /// `Error::NegativeCycleInterference` when the distance is unbounded.
    pub fn distance_to(&self, target: Vertex) -> Result<Distance, Error> {
        self.check_target(target)?;
        Ok(self.paths.distance[target])
    }

    /// Shortest path from the source to `target`, source first.
    ///
    /// Unlike the raw [`reconstruct_path`], this refuses targets fed by a
    /// negative cycle, so any path returned is a genuine shortest path.
    pub fn path_to(&self, target: Vertex) -> Result<Vec<Vertex>, Error> {
        self.check_target(target)?;
        reconstruct_path(&self.paths.predecessor, self.paths.source, target)
    }
}

impl ShortestPathSolver for BellmanFordSolver {
    /// Relaxes from `source`, then inspects the frozen tables for a negative cycle.
    ///
    /// # Returns
    /// - `Ok(outcome)` → distances, predecessors and at most one negative cycle.
    /// - `Err(e)` → `source` is not a vertex of `graph`.
    fn solve(&self, graph: &Graph, source: Vertex) -> Result<SolveOutcome, Error> {
        let paths = relax(graph, source)?;

        // A round without relaxations rules out any reachable negative cycle.
        let (negative_cycle, unbounded) = if paths.converged {
            (None, vec![false; graph.vertex_count()])
        } else {
            (
                find_negative_cycle(graph, &paths)?,
                unbounded_vertices(graph, &paths)?,
            )
        };

        debug!(
            source,
            rounds = paths.rounds,
            negative_cycle = negative_cycle.is_some(),
            "solve complete"
        );

        Ok(SolveOutcome {
            paths,
            negative_cycle,
            unbounded,
        })
    }
}
