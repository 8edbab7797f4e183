use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A graph needs at least one vertex to host a source.
    #[error("Graph must contain at least one node.")]
    EmptyGraph,

    /// Indicates an attempt to access a node index that exceeds the graph size (N).
    #[error("Node index {0} is out of bounds.")]
    NodeIndexOutOfBounds(usize),

    #[error("Self-loop on node {0} is not allowed.")]
    SelfLoop(usize),

    /// Each ordered pair carries at most one weight.
    #[error("Duplicate edge ({from}, {to}).")]
    DuplicateEdge { from: usize, to: usize },

    #[error("Source node {0} is out of bounds.")]
    InvalidSource(usize),

    #[error("Target node {0} is out of bounds.")]
    InvalidTarget(usize),

    /// The predecessor chain from `target` never reached `start`.
    #[error("Node {target} is unreachable from source node {start}.")]
    Unreachable { start: usize, target: usize },

    /// A negative cycle reachable from the source leads to this node, so its
    /// shortest distance is unbounded.
    #[error("Shortest path to node {0} is undefined: a reachable negative cycle leads to it.")]
    NegativeCycleInterference(usize),

    /// Indicates a structural inconsistency found during graph processing or validation.
    #[error("Graph structure is invalid or inconsistent.")]
    InvalidGraph,

    /// Failed to trace the full cycle path, usually due to broken predecessor chains.
    #[error("Cycle path reconstruction failed due to broken predecessor chain.")]
    CycleReconstructionFailed,
}
