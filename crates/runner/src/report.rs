use std::fmt;

use super::searcher::SearchReport;
use bellman_ford_core::SolveOutcome;
use common::{error::Error as GraphError, types::Vertex};

/// Distance table; `-inf` marks vertices fed by a negative cycle.
pub fn format_distances(outcome: &SolveOutcome) -> String {
    let cells: Vec<String> = outcome
        .paths
        .distance
        .iter()
        .enumerate()
        .map(|(v, d)| {
            if outcome.is_unbounded(v) {
                "-inf".to_string()
            } else {
                d.to_string()
            }
        })
        .collect();

    format!("[{}]", cells.join(", "))
}

/// Predecessor table; `-` marks vertices without predecessor.
pub fn format_predecessors(predecessor: &[Option<Vertex>]) -> String {
    let cells: Vec<String> = predecessor
        .iter()
        .map(|p| p.map_or_else(|| "-".to_string(), |u| u.to_string()))
        .collect();

    format!("[{}]", cells.join(", "))
}

/// Path printed target first: `5 <-- 2 <-- 3`.
pub fn format_path(path: &[Vertex]) -> String {
    let hops: Vec<String> = path.iter().rev().map(|v| v.to_string()).collect();
    hops.join(" <-- ")
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let outcome = &self.outcome;
        let source = outcome.source();

        writeln!(f, "source: {}", source)?;
        writeln!(f, "distance:    {}", format_distances(outcome))?;
        writeln!(
            f,
            "predecessor: {}",
            format_predecessors(&outcome.paths.predecessor)
        )?;

        match &outcome.negative_cycle {
            Some(cycle) => writeln!(
                f,
                "negative cycle in the graph: {:?} (total weight {})",
                cycle.vertices, cycle.total_weight
            )?,
            None => writeln!(f, "no negative cycle reachable from source {}", source)?,
        }

        if let (Some(target), Some(path)) = (self.target, &self.path) {
            write!(f, "path {} -> {}: ", source, target)?;
            match path {
                Ok(path) => write!(f, "{}", format_path(path))?,
                Err(GraphError::NegativeCycleInterference(_)) => {
                    write!(f, "undefined (a negative cycle leads to {})", target)?
                }
                Err(GraphError::Unreachable { .. }) => write!(f, "unreachable")?,
                Err(e) => write!(f, "{}", e)?,
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::searcher::PathSearcher;
    use bellman_ford_core::{BellmanFordSolver, Graph};
    use common::types::Edge;

    fn report(
        edges: Vec<Edge>,
        n: usize,
        source: Vertex,
        target: Option<Vertex>,
    ) -> SearchReport {
        let graph = Graph::from_edges(n, edges).unwrap();
        PathSearcher::new(BellmanFordSolver, source, target)
            .search(&graph)
            .unwrap()
    }

    #[test]
    fn test_format_path_is_target_first() {
        assert_eq!(format_path(&[3, 2, 5]), "5 <-- 2 <-- 3");
        assert_eq!(format_path(&[4]), "4");
    }

    #[test]
    fn test_format_predecessors() {
        assert_eq!(format_predecessors(&[None, Some(0), Some(1)]), "[-, 0, 1]");
    }

    #[test]
    fn test_report_without_cycle() {
        let report = report(vec![(0, 1, 5)], 3, 0, Some(1));
        let text = report.to_string();

        assert_eq!(
            text,
            "source: 0\n\
             distance:    [0, 5, unreached]\n\
             predecessor: [-, 0, -]\n\
             no negative cycle reachable from source 0\n\
             path 0 -> 1: 1 <-- 0\n"
        );
    }

    #[test]
    fn test_report_with_cycle() {
        let edges = vec![(0, 1, 0), (1, 2, 3), (2, 3, 2), (3, 4, -2), (3, 1, -6)];
        let text = report(edges, 5, 0, Some(4)).to_string();

        assert!(text.contains("distance:    [0, -inf, -inf, -inf, -inf]"));
        assert!(text.contains("negative cycle in the graph: [2, 3, 1] (total weight -1)"));
        assert!(text.contains("path 0 -> 4: undefined (a negative cycle leads to 4)"));
    }

    #[test]
    fn test_report_unreachable_target() {
        let text = report(vec![(0, 1, 1)], 3, 0, Some(2)).to_string();
        assert!(text.ends_with("path 0 -> 2: unreachable\n"));
    }

    #[test]
    fn test_report_without_target_has_no_path_line() {
        let text = report(vec![(0, 1, 1)], 2, 0, None).to_string();
        assert!(!text.contains("path"));
    }
}
