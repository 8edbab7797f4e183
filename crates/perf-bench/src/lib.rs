// ----------------------------
// Benchmark graphs
// ----------------------------

use common::types::Edge;

pub const NUM_NODES: usize = 100_000;

/// Chain `0 -> 1 -> ... -> n-1` listed in order, so relaxation converges in
/// two rounds. Weights vary by index so the distance sum cannot be folded away.
pub fn generate_chain_edges(num_nodes: usize) -> Vec<Edge> {
    (0..num_nodes.saturating_sub(1))
        .map(|i| (i, i + 1, 1 + (i % 7) as i64))
        .collect()
}

/// Ring of `n` vertices with one closing edge heavy enough to make the whole
/// ring a negative cycle of weight -1. Every round relaxes, so the bench hits
/// the round bound before the cycle scan runs.
pub fn generate_negative_ring_edges(num_nodes: usize) -> Vec<Edge> {
    let mut edges: Vec<Edge> = (0..num_nodes.saturating_sub(1))
        .map(|i| (i, i + 1, 1))
        .collect();
    if num_nodes > 1 {
        edges.push((num_nodes - 1, 0, -(num_nodes as i64)));
    }
    edges
}
