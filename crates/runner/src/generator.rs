use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::config::GraphConfig;
use super::error::Error;
use super::types::GraphProvider;
use bellman_ford_core::Graph;
use common::types::Edge;

/// Produces a reproducible random graph for demos.
///
/// Draws `edge_attempts` edges with uniformly random endpoints and weights in
/// `weight_min..=weight_max`. Self-loops and repeated pairs among the draws
/// are discarded when the graph is built, so the final edge count is usually
/// lower than `edge_attempts`.
pub struct RandomGraphGenerator {
    pub vertex_count: usize,
    pub edge_attempts: usize,
    pub weight_min: i64,
    pub weight_max: i64,
    pub seed: u64,
}

impl RandomGraphGenerator {
    pub fn new(config: &GraphConfig) -> Self {
        RandomGraphGenerator {
            vertex_count: config.vertex_count,
            edge_attempts: config.edge_attempts,
            weight_min: config.weight_min,
            weight_max: config.weight_max,
            seed: config.seed,
        }
    }

    /// Raw draws, before filtering.
    fn generate_edges(&self) -> Result<Vec<Edge>, Error> {
        if self.vertex_count == 0 {
            return Err(Error::InvalidConfig(
                "random graph needs at least one vertex".to_string(),
            ));
        }
        if self.weight_min > self.weight_max {
            return Err(Error::InvalidConfig(format!(
                "empty weight range {}..={}",
                self.weight_min, self.weight_max
            )));
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);

        let node_range = 0..self.vertex_count;
        let weight_range = self.weight_min..=self.weight_max;

        let edges = (0..self.edge_attempts)
            .map(|_| {
                let from = rng.random_range(node_range.clone());
                let to = rng.random_range(node_range.clone());
                let weight = rng.random_range(weight_range.clone());

                (from, to, weight)
            })
            .collect();

        Ok(edges)
    }
}

impl GraphProvider for RandomGraphGenerator {
    fn load(&self) -> Result<Graph, Error> {
        let edges = self.generate_edges()?;
        let drawn = edges.len();

        let graph = Graph::from_raw_edges(self.vertex_count, edges)?;
        debug!(
            seed = self.seed,
            drawn,
            kept = graph.edge_count(),
            "random graph generated"
        );

        Ok(graph)
    }
}
