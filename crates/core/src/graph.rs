use std::collections::HashSet;

use common::error::Error;
use common::types::{Edge, Vertex, Weight, WeightSum};

/// Immutable weighted digraph over the dense vertex range `0..num_nodes`.
///
/// Two views of the same edge set are kept:
/// - `edges`: the edges in their input order. This is the scan order of every
///   relaxation round and of the negative cycle scan, so results are
///   reproducible for a fixed input order.
/// - a Compressed Sparse Row (CSR) index of outgoing edges:
///   `node_pointers[u]..node_pointers[u+1]` addresses the edges leaving `u`
///   in `edge_targets` / `edge_weights`.
///
/// The CSR index serves adjacency queries (`out_edges`, `weight`) in
/// O(out-degree) without scanning the whole edge list.
#[derive(Debug, Clone)]
pub struct Graph {
    num_nodes: usize,
    edges: Vec<Edge>,
    node_pointers: Vec<usize>,
    edge_targets: Vec<Vertex>,
    edge_weights: Vec<Weight>,
}

impl Graph {
    /// Creates a graph from a list of edges `(src, dst, weight)`.
    ///
    /// # Errors
    /// - `Error::EmptyGraph` if `num_nodes` is zero.
    /// - `Error::NodeIndexOutOfBounds` if an endpoint is `>= num_nodes`.
    /// - `Error::SelfLoop` if an edge starts and ends at the same node.
    /// - `Error::DuplicateEdge` if an ordered pair appears more than once.
    pub fn from_edges(num_nodes: usize, edges: Vec<Edge>) -> Result<Self, Error> {
        if num_nodes == 0 {
            return Err(Error::EmptyGraph);
        }

        for &(u, v, _) in &edges {
            if u >= num_nodes {
                return Err(Error::NodeIndexOutOfBounds(u));
            }
            if v >= num_nodes {
                return Err(Error::NodeIndexOutOfBounds(v));
            }
            if u == v {
                return Err(Error::SelfLoop(u));
            }
        }

        let (node_pointers, edge_targets, edge_weights) =
            Self::build_csr_from_edges(num_nodes, &edges);

        Self::check_duplicates(num_nodes, &node_pointers, &edge_targets)?;

        Ok(Self {
            num_nodes,
            edges,
            node_pointers,
            edge_targets,
            edge_weights,
        })
    }

    /// Creates a graph from unfiltered provider output.
    ///
    /// Self-loops are dropped and only the first occurrence of each ordered
    /// pair is kept; the remaining edges go through the same validation as
    /// [`Graph::from_edges`].
    pub fn from_raw_edges(num_nodes: usize, edges: Vec<Edge>) -> Result<Self, Error> {
        let mut seen = HashSet::with_capacity(edges.len());
        let edges = edges
            .into_iter()
            .filter(|&(u, v, _)| u != v && seen.insert((u, v)))
            .collect();

        Self::from_edges(num_nodes, edges)
    }

    /// Two-pass counting construction of the CSR arrays.
    ///
    /// The second pass walks `edges` in input order, so the out-edges of each
    /// node keep their relative input order inside the node's block.
    fn build_csr_from_edges(
        num_nodes: usize,
        edges: &[Edge],
    ) -> (Vec<usize>, Vec<Vertex>, Vec<Weight>) {
        let m = edges.len();
        let mut node_pointers = vec![0; num_nodes + 1];

        for &(u, _, _) in edges {
            node_pointers[u + 1] += 1;
        }

        for i in 1..=num_nodes {
            node_pointers[i] += node_pointers[i - 1];
        }

        let mut edge_targets = vec![0; m];
        let mut edge_weights = vec![0; m];

        let mut cursor = node_pointers.clone();

        for &(u, v, weight) in edges {
            let pos = cursor[u]; // Next free slot in u's block
            edge_targets[pos] = v;
            edge_weights[pos] = weight;
            cursor[u] += 1;
        }

        (node_pointers, edge_targets, edge_weights)
    }

    /// Detects a repeated `(u, v)` pair by stamping targets per source block.
    fn check_duplicates(
        num_nodes: usize,
        node_pointers: &[usize],
        edge_targets: &[Vertex],
    ) -> Result<(), Error> {
        // stamp[v] == u + 1 means v was already seen as a target of u.
        let mut stamp = vec![0usize; num_nodes];

        for u in 0..num_nodes {
            for &v in &edge_targets[node_pointers[u]..node_pointers[u + 1]] {
                if stamp[v] == u + 1 {
                    return Err(Error::DuplicateEdge { from: u, to: v });
                }
                stamp[v] = u + 1;
            }
        }

        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.num_nodes
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges in input order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn contains_vertex(&self, v: Vertex) -> bool {
        v < self.num_nodes
    }

    /// Outgoing edges of `u` as `(target, weight)` pairs, in input order.
    ///
    /// Yields nothing for an out-of-range `u`.
    pub fn out_edges(&self, u: Vertex) -> impl Iterator<Item = (Vertex, Weight)> + '_ {
        let range = if self.contains_vertex(u) {
            self.node_pointers[u]..self.node_pointers[u + 1]
        } else {
            0..0
        };

        self.edge_targets[range.clone()]
            .iter()
            .copied()
            .zip(self.edge_weights[range].iter().copied())
    }

    /// Weight of the edge `(u, v)`, if present.
    pub fn weight(&self, u: Vertex, v: Vertex) -> Option<Weight> {
        self.out_edges(u)
            .find(|&(target, _)| target == v)
            .map(|(_, w)| w)
    }

    /// Sums the edge weights along consecutive pairs of `vertices`.
    ///
    /// # Errors
    /// Returns `Error::NodeIndexOutOfBounds` for an unknown vertex and
    /// `Error::InvalidGraph` if a consecutive pair is not an edge.
    pub fn path_weight(&self, vertices: &[Vertex]) -> Result<WeightSum, Error> {
        if let Some(&v) = vertices.iter().find(|&&v| !self.contains_vertex(v)) {
            return Err(Error::NodeIndexOutOfBounds(v));
        }

        vertices
            .windows(2)
            .try_fold(0, |acc, pair| -> Result<WeightSum, Error> {
                let w = self.weight(pair[0], pair[1]).ok_or(Error::InvalidGraph)?;
                Ok(acc + WeightSum::from(w))
            })
    }
}
