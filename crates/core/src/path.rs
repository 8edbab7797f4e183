use common::{error::Error, types::Vertex};

/// Rebuilds the `source -> target` path by following `predecessor` backward
/// from `target`.
///
/// The walk is capped at `vertex_count` steps, so a chain that never reaches
/// `source` ends in an error instead of looping. `source == target` yields
/// `[source]`.
///
/// This is the raw walk and trusts the table. If a negative cycle reachable
/// from the source feeds into `target`, the chain may run into the cycle and
/// report `Unreachable`, or return a path whose weight does not match the
/// target's distance. Check for negative cycles first, or use
/// [`SolveOutcome::path_to`](crate::solver::SolveOutcome::path_to), which does.
///
/// # Errors
/// - `Error::InvalidSource` / `Error::InvalidTarget` for out-of-range vertices.
/// - `Error::Unreachable` if the chain stops or exceeds the step cap before
///   reaching `source`.
pub fn reconstruct_path(
    predecessor: &[Option<Vertex>],
    source: Vertex,
    target: Vertex,
) -> Result<Vec<Vertex>, Error> {
    let num_nodes = predecessor.len();
    if source >= num_nodes {
        return Err(Error::InvalidSource(source));
    }
    if target >= num_nodes {
        return Err(Error::InvalidTarget(target));
    }

    let unreachable = Error::Unreachable {
        start: source,
        target,
    };

    let mut path = vec![target];
    let mut current = target;

    while current != source {
        if path.len() >= num_nodes {
            return Err(unreachable);
        }
        current = predecessor[current].ok_or_else(|| unreachable.clone())?;
        path.push(current);
    }

    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::relax::relax;

    #[test]
    fn single_edge_path() {
        let graph = Graph::from_edges(2, vec![(0, 1, 5)]).unwrap();
        let paths = relax(&graph, 0).unwrap();

        assert_eq!(reconstruct_path(&paths.predecessor, 0, 1), Ok(vec![0, 1]));
    }

    #[test]
    fn unreachable_target() {
        let graph = Graph::from_edges(3, vec![(0, 1, 1)]).unwrap();
        let paths = relax(&graph, 0).unwrap();

        assert_eq!(
            reconstruct_path(&paths.predecessor, 0, 2),
            Err(Error::Unreachable {
                start: 0,
                target: 2
            })
        );
    }

    #[test]
    fn path_follows_cheaper_detour() {
        let graph = Graph::from_edges(4, vec![(0, 1, 4), (0, 2, 5), (2, 1, -3), (1, 3, 2)]).unwrap();
        let paths = relax(&graph, 0).unwrap();
        let path = reconstruct_path(&paths.predecessor, 0, 3).unwrap();

        assert_eq!(path, vec![0, 2, 1, 3]);
        assert_eq!(graph.path_weight(&path), Ok(4));
    }

    #[test]
    fn source_equals_target() {
        let predecessor = vec![None, Some(0)];
        assert_eq!(reconstruct_path(&predecessor, 1, 1), Ok(vec![1]));
    }

    #[test]
    fn out_of_range_vertices() {
        let predecessor = vec![None, Some(0)];

        assert_eq!(reconstruct_path(&predecessor, 2, 0), Err(Error::InvalidSource(2)));
        assert_eq!(reconstruct_path(&predecessor, 0, 7), Err(Error::InvalidTarget(7)));
    }

    #[test]
    fn predecessor_loop_is_capped() {
        // 1 and 2 point at each other and never lead back to 0.
        let predecessor = vec![None, Some(2), Some(1)];

        assert_eq!(
            reconstruct_path(&predecessor, 0, 1),
            Err(Error::Unreachable {
                start: 0,
                target: 1
            })
        );
    }

    #[test]
    fn longest_simple_path_fits_the_cap() {
        let n: usize = 50;
        let predecessor: Vec<_> = (0..n).map(|i| i.checked_sub(1)).collect();
        let path = reconstruct_path(&predecessor, 0, n - 1).unwrap();

        assert_eq!(path.len(), n);
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&(n - 1)));
    }
}
