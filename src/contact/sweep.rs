//! Rolled-index sweep: each smaller-set point keeps the closest larger-set
//! point it met while the larger index space is rotated one step at a time.

use crate::float_types::Real;
use nalgebra::Point3;
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Best partner (index into the larger set) and its unrounded distance for
/// every position of the smaller set.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Sweep {
    pub partners: Vec<usize>,
    pub distances: Vec<Real>,
}

/// Index of the larger-set point compared with smaller position `i` at `offset`.
///
/// Offset 0 pairs position `i` with `i`; each further offset rolls the larger
/// index space left by one with wrap-around, and only the first
/// `small.len()` rolled indices (the usable window) are looked at.
#[inline]
pub(crate) const fn rolled_index(i: usize, offset: usize, large_len: usize) -> usize {
    (i + offset) % large_len
}

/// Run the full cyclic sweep (`large.len()` offsets).
///
/// `large` must hold at least as many points as `small`, and `small` must not
/// be empty. A candidate only replaces the incumbent when it is strictly
/// closer, so among equidistant partners the first one met is kept.
pub(crate) fn rolled_sweep(small: &[Point3<Real>], large: &[Point3<Real>]) -> Sweep {
    debug_assert!(!small.is_empty());
    debug_assert!(large.len() >= small.len());

    let offsets = large.len();
    let mut distances = distances_at_offset(small, large, 0);
    let mut partners: Vec<usize> = (0..small.len()).collect();

    for offset in 1..offsets {
        let candidates = distances_at_offset(small, large, offset);
        let mut improved = 0usize;
        for (i, candidate) in candidates.into_iter().enumerate() {
            if candidate < distances[i] {
                distances[i] = candidate;
                partners[i] = rolled_index(i, offset, offsets);
                improved += 1;
            }
        }
        if improved > 0 {
            trace!(offset, improved, "closer partners found");
        }
    }

    Sweep {
        partners,
        distances,
    }
}

/// Distances between every smaller-set point and its rolled partner at `offset`.
#[cfg(not(feature = "parallel"))]
fn distances_at_offset(
    small: &[Point3<Real>],
    large: &[Point3<Real>],
    offset: usize,
) -> Vec<Real> {
    small
        .iter()
        .enumerate()
        .map(|(i, p)| nalgebra::distance(p, &large[rolled_index(i, offset, large.len())]))
        .collect()
}

/// Parallel distances between every smaller-set point and its rolled partner at `offset`.
#[cfg(feature = "parallel")]
fn distances_at_offset(
    small: &[Point3<Real>],
    large: &[Point3<Real>],
    offset: usize,
) -> Vec<Real> {
    small
        .par_iter()
        .enumerate()
        .map(|(i, p)| nalgebra::distance(p, &large[rolled_index(i, offset, large.len())]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolled_index_wraps() {
        assert_eq!(rolled_index(0, 0, 5), 0);
        assert_eq!(rolled_index(2, 3, 5), 0);
        assert_eq!(rolled_index(4, 4, 5), 3);
    }

    #[test]
    fn aligned_sets_keep_offset_zero() {
        let small = vec![
            Point3::new(0.0, 0.0, 0.5),
            Point3::new(1.0, 0.0, 0.5),
            Point3::new(2.0, 0.0, 0.5),
        ];
        let large = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        let sweep = rolled_sweep(&small, &large);
        assert_eq!(sweep.partners, vec![0, 1, 2]);
        assert_eq!(sweep.distances, vec![0.5, 0.5, 0.5]);
    }

    #[test]
    fn ties_keep_first_partner() {
        // (1,0,0) is met at offset 1, (-1,0,0) at offset 2; both are 1.0 away.
        let small = vec![Point3::origin()];
        let large = vec![
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(-1.0, 0.0, 0.0),
        ];
        let sweep = rolled_sweep(&small, &large);
        assert_eq!(sweep.partners, vec![1]);
        assert_eq!(sweep.distances, vec![1.0]);
    }

    #[test]
    fn window_visits_every_larger_point() {
        let small = vec![Point3::new(9.0, 0.0, 0.0), Point3::new(0.0, 0.0, 0.0)];
        let large: Vec<_> = (0..10).map(|x| Point3::new(x as Real, 0.0, 0.0)).collect();
        let sweep = rolled_sweep(&small, &large);
        assert_eq!(sweep.partners, vec![9, 0]);
        assert_eq!(sweep.distances, vec![0.0, 0.0]);
    }
}
