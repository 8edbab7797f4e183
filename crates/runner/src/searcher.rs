use tracing::info;

use super::error::Error;
use bellman_ford_core::{Graph, SolveOutcome, traits::ShortestPathSolver};
use common::{error::Error as GraphError, types::Vertex};

/// Everything the report prints for one query.
#[derive(Debug)]
pub struct SearchReport {
    pub outcome: SolveOutcome,
    pub target: Option<Vertex>,
    /// Path query result, present when a target was requested.
    pub path: Option<Result<Vec<Vertex>, GraphError>>,
}

/// Runs one shortest path query against a graph with any solver.
pub struct PathSearcher<S> {
    solver: S,
    source: Vertex,
    target: Option<Vertex>,
}

impl<S> PathSearcher<S>
where
    S: ShortestPathSolver,
{
    pub fn new(solver: S, source: Vertex, target: Option<Vertex>) -> Self {
        PathSearcher {
            solver,
            source,
            target,
        }
    }

    /// Solves from the configured source and answers the optional path query.
    ///
    /// Out-of-range source or target vertices are rejected before solving.
    /// An unreachable target or one behind a negative cycle is not an error
    /// here: it ends up in `SearchReport::path`.
    pub fn search(&self, graph: &Graph) -> Result<SearchReport, Error> {
        if let Some(target) = self.target {
            if !graph.contains_vertex(target) {
                return Err(GraphError::InvalidTarget(target).into());
            }
        }

        info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            source = self.source,
            "starting search"
        );

        let outcome = self.solver.solve(graph, self.source)?;

        match &outcome.negative_cycle {
            Some(cycle) => info!(
                cycle = ?cycle.vertices,
                total_weight = cycle.total_weight,
                "negative cycle reachable from source"
            ),
            None => info!(rounds = outcome.paths.rounds, "search complete: no negative cycle"),
        }

        let path = self.target.map(|target| outcome.path_to(target));

        Ok(SearchReport {
            outcome,
            target: self.target,
            path,
        })
    }
}
