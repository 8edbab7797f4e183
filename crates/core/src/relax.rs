use super::graph::Graph;
use common::{
    error::Error,
    numeric_kernel::improves,
    types::{Distance, Vertex},
};
use tracing::debug;

/// Frozen output of the relaxation pass for one source.
///
/// Downstream consumers (cycle detection, path reconstruction) only ever read
/// this snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    pub source: Vertex,
    /// Shortest known distance per vertex, `Unreached` if no walk was found.
    pub distance: Vec<Distance>,
    /// Tail of the edge that last lowered each vertex's distance.
    pub predecessor: Vec<Option<Vertex>>,
    /// Rounds executed, including a final round that relaxed nothing.
    pub rounds: usize,
    /// True when a round relaxed nothing (or the graph has a single vertex),
    /// which proves no negative cycle is reachable from `source`.
    pub converged: bool,
}

/// Runs Bellman-Ford relaxation from `source`.
///
/// Performs at most `vertex_count - 1` rounds over all edges in input order,
/// stopping early once a round relaxes nothing. Any simple path has at most
/// `vertex_count - 1` edges, so after the final round every vertex reachable
/// without a negative cycle holds its true shortest distance.
///
/// # Errors
/// Returns `Error::InvalidSource` if `source` is not a vertex of `graph`.
pub fn relax(graph: &Graph, source: Vertex) -> Result<ShortestPaths, Error> {
    if !graph.contains_vertex(source) {
        return Err(Error::InvalidSource(source));
    }

    let num_nodes = graph.vertex_count();
    let mut distance = vec![Distance::Unreached; num_nodes];
    let mut predecessor = vec![None; num_nodes];
    distance[source] = Distance::Finite(0);

    let mut rounds = 0;
    let mut converged = num_nodes == 1;

    for round in 1..num_nodes {
        let relaxed = relax_round(graph, &mut distance, &mut predecessor);
        rounds = round;
        debug!(round, relaxed, "relaxation round complete");

        if relaxed == 0 {
            debug!(round, "no edge relaxed, stopping early");
            converged = true;
            break;
        }
    }

    Ok(ShortestPaths {
        source,
        distance,
        predecessor,
        rounds,
        converged,
    })
}

/// One pass over every edge of `graph`, updating `distance` and `predecessor`
/// in place. Returns the number of relaxations performed.
///
/// Updates are visible to later edges of the same pass, which only speeds up
/// propagation and keeps the `vertex_count - 1` round bound valid.
pub fn relax_round(
    graph: &Graph,
    distance: &mut [Distance],
    predecessor: &mut [Option<Vertex>],
) -> usize {
    let mut relaxed = 0;

    for &(u, v, weight) in graph.edges() {
        if let Some(candidate) = improves(distance[u], weight, distance[v]) {
            distance[v] = Distance::Finite(candidate);
            predecessor[v] = Some(u);
            relaxed += 1;
        }
    }

    relaxed
}
