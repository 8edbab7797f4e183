use std::hint::black_box;
use std::time::Instant;

use bellman_ford_core::{Graph, cycle::find_negative_cycle, relax::relax};
use common::types::Edge;
use perf_bench::*;

/// Times relaxation plus the cycle scan and prints a checksum of the distances.
fn run_case(label: &str, num_nodes: usize, edges: Vec<Edge>) {
    let graph = match Graph::from_edges(num_nodes, edges) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("{}: failed to build graph: {}", label, e);
            return;
        }
    };

    let start_time = Instant::now();
    let result = relax(&graph, 0).and_then(|paths| {
        let cycle = find_negative_cycle(&graph, &paths)?;
        Ok((paths, cycle))
    });
    let elapsed_time = start_time.elapsed();

    let (paths, cycle) = match result {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{}: solve failed: {}", label, e);
            return;
        }
    };

    let checksum: i128 = paths
        .distance
        .iter()
        .filter_map(|d| d.value())
        .fold(0, |acc, d| acc.wrapping_add(d));
    let final_checksum = black_box(checksum);

    println!("--- {} ({} Nodes, {} Edges) ---", label, num_nodes, graph.edge_count());
    println!("Rounds: {}", paths.rounds);
    println!("Negative cycle length: {}", cycle.map_or(0, |c| c.len()));
    println!("Checksum: {}", final_checksum);
    println!("Elapsed Time: {:?}", elapsed_time);
}

fn main() {
    run_case("Chain", NUM_NODES, generate_chain_edges(NUM_NODES));

    // The ring takes O(V * E); keep it small enough to finish quickly.
    let ring_nodes = NUM_NODES / 50;
    run_case("Negative Ring", ring_nodes, generate_negative_ring_edges(ring_nodes));
}
