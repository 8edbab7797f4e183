use bellman_ford_core::Graph;

use super::error::Error;

/// A trait defining the contract for any source that supplies the graph the
/// solver runs on.
///
/// This decouples the runner from where edges come from (seeded random draw
/// vs. CSV file). Providers may emit self-loops or repeated pairs; they are
/// expected to build through `Graph::from_raw_edges`, which filters both.
pub trait GraphProvider {
    fn load(&self) -> Result<Graph, Error>;
}
