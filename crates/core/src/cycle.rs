use std::collections::VecDeque;

use super::graph::Graph;
use super::relax::ShortestPaths;
use common::{
    error::Error,
    numeric_kernel::improves,
    types::{Edge, NegativeCycle, Vertex},
};
use tracing::{debug, info};

/// Looks for an edge that can still be relaxed after the final round and, if
/// one exists, reconstructs a negative cycle from the predecessor table.
///
/// Edges are scanned in input order and the scan stops at the first edge
/// showing residual improvement, so exactly one cycle is reported. That edge
/// `(u, v)` is not necessarily on the cycle; it only proves that a negative
/// cycle is reachable from the source and feeds into `v`.
///
/// `paths` is never modified: the extra predecessor link recorded for `(u, v)`
/// goes into a private copy of the table.
///
/// # Returns
/// - `Ok(Some(cycle))` → Negative cycle found.
/// - `Ok(None)` → No negative cycle is reachable from `paths.source`.
/// - `Err(e)` → `paths` does not belong to `graph`, or the predecessor chain is broken.
pub fn find_negative_cycle(
    graph: &Graph,
    paths: &ShortestPaths,
) -> Result<Option<NegativeCycle>, Error> {
    check_dimensions(graph, paths)?;

    for &(u, v, weight) in graph.edges() {
        if improves(paths.distance[u], weight, paths.distance[v]).is_none() {
            continue;
        }

        debug!(from = u, to = v, "edge still relaxable after final round");

        // Record the relaxation that would happen next. Without this link a
        // cycle through every vertex cannot close when `v`'s predecessor is stale.
        let mut predecessor = paths.predecessor.clone();
        predecessor[v] = Some(u);

        let anchor = locate_cycle_vertex(u, v, &predecessor)?;
        let cycle = reconstruct_cycle(graph, anchor, &predecessor)?;
        debug_assert!(cycle.total_weight < 0, "predecessor cycle must be negative");

        info!(
            length = cycle.len(),
            total_weight = cycle.total_weight,
            "negative cycle found"
        );
        return Ok(Some(cycle));
    }

    Ok(None)
}

/// Walks backward from `u` until a vertex repeats; that vertex lies on a
/// predecessor cycle. `v` counts as visited from the start.
fn locate_cycle_vertex(
    u: Vertex,
    v: Vertex,
    predecessor: &[Option<Vertex>],
) -> Result<Vertex, Error> {
    let mut visited = vec![false; predecessor.len()];
    visited[v] = true;

    let mut current = u;
    while !visited[current] {
        visited[current] = true;
        current = predecessor[current].ok_or(Error::CycleReconstructionFailed)?;
    }

    Ok(current)
}

/// Collects the predecessor cycle through `anchor` and returns it in forward
/// edge order starting at `anchor`.
///
/// # Errors
/// Returns `Error::CycleReconstructionFailed` if the chain from `anchor` hits
/// a vertex without predecessor or does not return to `anchor` within
/// `vertex_count` steps, and `Error::InvalidGraph` if a predecessor link has
/// no matching edge in `graph`.
pub fn reconstruct_cycle(
    graph: &Graph,
    anchor: Vertex,
    predecessor: &[Option<Vertex>],
) -> Result<NegativeCycle, Error> {
    let num_nodes = graph.vertex_count();
    if anchor >= num_nodes || predecessor.len() != num_nodes {
        return Err(Error::InvalidGraph);
    }

    // anchor, predecessor(anchor), predecessor(predecessor(anchor)), ...
    let mut trace = vec![anchor];
    let mut current = predecessor[anchor].ok_or(Error::CycleReconstructionFailed)?;

    while current != anchor {
        if trace.len() >= num_nodes {
            return Err(Error::CycleReconstructionFailed);
        }
        trace.push(current);
        current = predecessor[current].ok_or(Error::CycleReconstructionFailed)?;
    }

    // Flip to edge direction while keeping the anchor first.
    let mut forward = trace;
    forward[1..].reverse();

    let len = forward.len();
    let mut path: Vec<Edge> = Vec::with_capacity(len);
    for (i, &u) in forward.iter().enumerate() {
        let v = forward[(i + 1) % len];
        let weight = graph.weight(u, v).ok_or(Error::InvalidGraph)?;
        path.push((u, v, weight));
    }

    Ok(NegativeCycle::from_path(path))
}

/// Marks every vertex whose shortest distance from the source is unbounded.
///
/// Seeds are the targets of edges that still relax after the final round;
/// each of them is fed by a reachable negative cycle, and so is everything
/// reachable from them. Unmarked vertices have a well-defined distance.
pub fn unbounded_vertices(graph: &Graph, paths: &ShortestPaths) -> Result<Vec<bool>, Error> {
    check_dimensions(graph, paths)?;

    let mut unbounded = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::new();

    for &(u, v, weight) in graph.edges() {
        if !unbounded[v] && improves(paths.distance[u], weight, paths.distance[v]).is_some() {
            unbounded[v] = true;
            queue.push_back(v);
        }
    }

    while let Some(u) = queue.pop_front() {
        for (v, _) in graph.out_edges(u) {
            if !unbounded[v] {
                unbounded[v] = true;
                queue.push_back(v);
            }
        }
    }

    Ok(unbounded)
}

fn check_dimensions(graph: &Graph, paths: &ShortestPaths) -> Result<(), Error> {
    let num_nodes = graph.vertex_count();
    if paths.distance.len() != num_nodes || paths.predecessor.len() != num_nodes {
        return Err(Error::InvalidGraph);
    }
    Ok(())
}
