use std::fmt;

/// Vertex identifier, a dense index in `0..vertex_count`.
pub type Vertex = usize;

/// Integer edge weight; negative, zero and positive values are all valid.
pub type Weight = i64;

/// Type alias for a single edge list: (from, to, weight)
pub type Edge = (Vertex, Vertex, Weight);

/// Sum of edge weights along a walk.
///
/// Every sum the solver forms adds at most one `Weight` per relaxation
/// performed, so a walk would need more than 2^64 edges to leave the `i128`
/// range. Distances, path weights and cycle weights are exact for any `i64`
/// edge weights.
pub type WeightSum = i128;

/// Shortest known distance from the source to a vertex.
///
/// Variant order matters: the derived `Ord` places `Unreached` above every
/// finite value, so it behaves as positive infinity in comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(WeightSum),
    Unreached,
}

impl Distance {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn value(&self) -> Option<WeightSum> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Unreached => None,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Unreached => write!(f, "unreached"),
        }
    }
}

/// A directed cycle whose edge weights sum to a negative value.
///
/// Fields:
/// - `vertices`: The cycle in forward edge order. `(vertices[i], vertices[i + 1])`
///   is an edge, and the last vertex has an edge back to the first.
/// - `path`: The same cycle as explicit edges, closing edge last.
/// - `total_weight`: Sum of the weights along `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegativeCycle {
    pub vertices: Vec<Vertex>,
    pub path: Vec<Edge>,
    pub total_weight: WeightSum,
}

impl NegativeCycle {
    /// Builds a cycle from its edges in forward order.
    ///
    /// The caller guarantees that `path` is closed, i.e. each edge starts where
    /// the previous one ended and the last edge returns to the first vertex.
    pub fn from_path(path: Vec<Edge>) -> Self {
        let vertices = path.iter().map(|&(u, _, _)| u).collect();
        let total_weight = path
            .iter()
            .map(|&(_, _, w)| WeightSum::from(w))
            .sum();

        NegativeCycle {
            vertices,
            path,
            total_weight,
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        self.vertices.contains(&vertex)
    }

    /// The cycle in the order a backward predecessor walk visits it: the first
    /// vertex, then its predecessor on the cycle, and so on.
    pub fn backward_trace(&self) -> Vec<Vertex> {
        let mut trace = Vec::with_capacity(self.vertices.len());
        if let Some((&first, rest)) = self.vertices.split_first() {
            trace.push(first);
            trace.extend(rest.iter().rev());
        }
        trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreached_is_greater_than_any_finite_distance() {
        assert!(Distance::Finite(WeightSum::MAX) < Distance::Unreached);
        assert!(Distance::Finite(-3) < Distance::Finite(2));
        assert_eq!(Distance::Unreached.value(), None);
        assert_eq!(Distance::Finite(4).value(), Some(4));
    }

    #[test]
    fn distance_display() {
        assert_eq!(Distance::Finite(-7).to_string(), "-7");
        assert_eq!(Distance::Unreached.to_string(), "unreached");
    }

    #[test]
    fn cycle_from_path_sums_weights() {
        let cycle = NegativeCycle::from_path(vec![(2, 3, 2), (3, 1, -6), (1, 2, 3)]);

        assert_eq!(cycle.vertices, vec![2, 3, 1]);
        assert_eq!(cycle.total_weight, -1);
        assert_eq!(cycle.len(), 3);
        assert!(cycle.contains(1));
        assert!(!cycle.contains(0));
    }

    #[test]
    fn cycle_weight_beyond_i64_is_exact() {
        let w = -(1i64 << 62);
        let cycle = NegativeCycle::from_path(vec![(0, 1, w), (1, 2, w), (2, 0, w)]);

        assert_eq!(cycle.total_weight, -3 * (1i128 << 62));
        assert!(cycle.total_weight < WeightSum::from(i64::MIN));
    }

    #[test]
    fn backward_trace_reverses_edge_direction() {
        let cycle = NegativeCycle::from_path(vec![(2, 3, 2), (3, 1, -6), (1, 2, 3)]);

        // 2's predecessor on the cycle is 1, whose predecessor is 3.
        assert_eq!(cycle.backward_trace(), vec![2, 1, 3]);
    }
}
