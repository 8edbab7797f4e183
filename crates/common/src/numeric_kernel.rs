use super::types::{Distance, Weight, WeightSum};

/// Candidate distance for `v` when relaxing an edge `(u, v)` of the given weight.
///
/// Returns `None` when `u` has not been reached yet, since an unreached vertex
/// cannot offer a path to anything. The sum is taken in `WeightSum`, so it is
/// exact: a distance that keeps falling around a negative cycle never clamps
/// and the cycle stays visible to the residual edge scan.
pub fn relaxed_distance(distance_u: Distance, weight: Weight) -> Option<WeightSum> {
    match distance_u {
        Distance::Finite(d) => Some(d + WeightSum::from(weight)),
        Distance::Unreached => None,
    }
}

/// The relaxation test: returns the new distance of `v` only if going through
/// `u` is strictly shorter than what `v` already holds.
pub fn improves(
    distance_u: Distance,
    weight: Weight,
    distance_v: Distance,
) -> Option<WeightSum> {
    relaxed_distance(distance_u, weight).filter(|&candidate| Distance::Finite(candidate) < distance_v)
}

#[cfg(test)]
mod numerical_kernel_tests {
    use super::*;

    #[test]
    fn test_unreached_source_never_relaxes() {
        assert_eq!(relaxed_distance(Distance::Unreached, -5), None);
        assert_eq!(improves(Distance::Unreached, -5, Distance::Unreached), None);
        assert_eq!(improves(Distance::Unreached, -5, Distance::Finite(100)), None);
    }

    #[test]
    fn test_finite_candidate() {
        assert_eq!(relaxed_distance(Distance::Finite(3), 4), Some(7));
        assert_eq!(relaxed_distance(Distance::Finite(3), -4), Some(-1));
    }

    /// Anything finite beats an unreached vertex.
    #[test]
    fn test_improves_unreached_target() {
        assert_eq!(
            improves(Distance::Finite(0), 1_000, Distance::Unreached),
            Some(1_000)
        );
    }

    /// The comparison is strict: ties do not relax.
    #[test]
    fn test_improves_is_strict() {
        assert_eq!(improves(Distance::Finite(2), 3, Distance::Finite(5)), None);
        assert_eq!(improves(Distance::Finite(2), 2, Distance::Finite(5)), Some(4));
        assert_eq!(improves(Distance::Finite(2), 4, Distance::Finite(5)), None);
    }

    #[test]
    fn test_sums_past_i64_bounds_are_exact() {
        let low = WeightSum::from(i64::MIN);
        assert_eq!(
            relaxed_distance(Distance::Finite(low), -10),
            Some(low - 10)
        );

        let high = WeightSum::from(i64::MAX);
        assert_eq!(
            relaxed_distance(Distance::Finite(high), i64::MAX),
            Some(2 * high)
        );

        // A distance already below the i64 range still improves further.
        assert_eq!(
            improves(Distance::Finite(low), -1, Distance::Finite(low)),
            Some(low - 1)
        );
        assert_eq!(
            improves(Distance::Finite(high), 1, Distance::Finite(0)),
            None
        );
    }
}
