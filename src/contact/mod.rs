//! Approximate nearest-pair matching between two point sets, and the driver
//! that records the matched vertices as groups on two objects.
//!
//! The matcher rotates the index space of the larger set one step per offset
//! and compares each point of the smaller set with the larger-set point its
//! index lands on. Over the full sweep every smaller-set point meets every
//! larger-set point, but the result is a per-point closest partner, not an
//! assignment: several smaller-set points may share one partner (see the
//! overlapping-cube case in the tests), and among equidistant partners the one
//! reached at the earliest offset wins, which depends on how the two sets are
//! ordered. Meshes built from parallel or mirrored geometry, whose vertex
//! orders roughly line up, give the most meaningful pairings.

use crate::errors::{ContactError, Side};
use crate::float_types::{Real, round_decimals};
use crate::point_set::PointSet;
use crate::traits::{GeometrySource, GroupSink};
use tracing::{debug, info};

pub mod config;
mod sweep;

pub use config::ContactConfig;

/// Matched identifier pairs that passed the distance threshold.
///
/// `large_ids[k]` and `small_ids[k]` form one pair and `distances[k]` is their
/// distance rounded to [`crate::float_types::DECIMAL_PLACES`] places. Pairs are
/// ordered by the position of their point in the smaller set.
#[derive(Debug, Clone, PartialEq)]
pub struct PairingResult<I> {
    pub large_ids: Vec<I>,
    pub small_ids: Vec<I>,
    pub distances: Vec<Real>,
    pub threshold: Real,
    /// Which input had the larger (or, on equal counts, the first) point set.
    pub larger: Side,
}

impl<I> PairingResult<I> {
    /// Assemble a result, failing with [`ContactError::PairCountMismatch`] when
    /// the two identifier lists differ in length.
    pub fn new(
        large_ids: Vec<I>,
        small_ids: Vec<I>,
        distances: Vec<Real>,
        threshold: Real,
        larger: Side,
    ) -> Result<Self, ContactError> {
        if large_ids.len() != small_ids.len() {
            return Err(ContactError::PairCountMismatch {
                large: large_ids.len(),
                small: small_ids.len(),
            });
        }
        debug_assert_eq!(distances.len(), small_ids.len());

        Ok(PairingResult {
            large_ids,
            small_ids,
            distances,
            threshold,
            larger,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.small_ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.small_ids.is_empty()
    }

    /// `(larger-set id, smaller-set id)` pairs in result order.
    pub fn pairs(&self) -> impl Iterator<Item = (&I, &I)> {
        self.large_ids.iter().zip(self.small_ids.iter())
    }

    /// The matched ids that belong to the given input.
    pub fn ids_for(&self, side: Side) -> &[I] {
        if side == self.larger {
            &self.large_ids
        } else {
            &self.small_ids
        }
    }
}

/// The `sample_size`-th smallest of `rounded_distances`, or the largest one
/// when there are fewer distances than that.
///
/// Returns `None` for an empty slice or a zero sample size.
pub fn contact_threshold(rounded_distances: &[Real], sample_size: usize) -> Option<Real> {
    if rounded_distances.is_empty() || sample_size == 0 {
        return None;
    }
    let mut sorted = rounded_distances.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let k = sample_size.min(sorted.len()) - 1;
    Some(round_decimals(sorted[k]))
}

/// Pair every point of the smaller set with an approximately nearest point of
/// the larger set and keep the pairs no farther apart than the threshold.
///
/// Which input is larger is decided here by point count (the first input wins
/// on equal counts); callers need not order their arguments. All `m` rotations
/// of the larger set are swept, distances are rounded to five decimals, and
/// every pair at or below the `sample_size`-th smallest distance is kept, so
/// ties at the threshold can select more than `sample_size` pairs.
///
/// ```rust
/// # use meshcontact::contact::match_nearest_pairs;
/// # use meshcontact::point_set::PointSet;
/// # use nalgebra::Point3;
/// let a: PointSet<usize> = [(0, Point3::new(0.0, 0.0, 0.0)), (1, Point3::new(4.0, 0.0, 0.0))]
///     .into_iter()
///     .collect();
/// let b: PointSet<usize> = [(0, Point3::new(4.0, 0.0, 1.0)), (1, Point3::new(0.0, 0.0, 2.0))]
///     .into_iter()
///     .collect();
/// let pairing = match_nearest_pairs(&a, &b, 1).unwrap();
/// assert_eq!(pairing.threshold, 1.0);
/// assert_eq!(pairing.large_ids, vec![1]);
/// assert_eq!(pairing.small_ids, vec![0]);
/// ```
pub fn match_nearest_pairs<I: Clone>(
    a: &PointSet<I>,
    b: &PointSet<I>,
    sample_size: usize,
) -> Result<PairingResult<I>, ContactError> {
    if a.is_empty() {
        return Err(ContactError::EmptyPointSet { side: Side::A });
    }
    if b.is_empty() {
        return Err(ContactError::EmptyPointSet { side: Side::B });
    }
    if sample_size == 0 {
        return Err(ContactError::InvalidSampleSize(sample_size));
    }

    let (large, small, larger) = if a.len() >= b.len() {
        (a, b, Side::A)
    } else {
        (b, a, Side::B)
    };
    debug!(
        small = small.len(),
        large = large.len(),
        offsets = large.len(),
        "sweeping rolled offsets"
    );

    let sweep = sweep::rolled_sweep(&small.positions(), &large.positions());
    let rounded: Vec<Real> = sweep.distances.iter().map(|&d| round_decimals(d)).collect();
    let Some(threshold) = contact_threshold(&rounded, sample_size) else {
        return Err(ContactError::InvalidSampleSize(sample_size));
    };

    let mut large_ids = Vec::new();
    let mut small_ids = Vec::new();
    let mut distances = Vec::new();
    for (i, (&partner, &distance)) in sweep.partners.iter().zip(&rounded).enumerate() {
        if distance <= threshold {
            large_ids.push(large.points[partner].id.clone());
            small_ids.push(small.points[i].id.clone());
            distances.push(distance);
        }
    }

    debug!(
        threshold,
        selected = small_ids.len(),
        over_selected = small_ids.len() > sample_size,
        "thresholded pairs"
    );
    PairingResult::new(large_ids, small_ids, distances, threshold, larger)
}

/// Find the contact between exactly two objects and record it on both.
///
/// The larger object's matched ids go into a new group named
/// `config.group_name` on the larger object, the smaller object's ids into one
/// on the smaller object. Nothing is written unless matching succeeded and
/// both objects accepted their ids through [`GroupSink::check_ids`]; a sink
/// whose `add_to_group` can fail after that check may still end up with only
/// the larger object written. [`crate::Mesh`] writes all or nothing.
pub fn contact<T, I>(
    objects: &mut [T],
    config: &ContactConfig,
) -> Result<PairingResult<I>, ContactError>
where
    T: GeometrySource<I> + GroupSink<I>,
    I: Clone,
{
    let found = objects.len();
    let [a, b] = objects else {
        return Err(ContactError::WrongSelection { found });
    };

    let pairing = match_nearest_pairs(&a.point_set(), &b.point_set(), config.sample_size)?;

    let (large_obj, small_obj) = match pairing.larger {
        Side::A => (a, b),
        Side::B => (b, a),
    };
    large_obj.check_ids(&pairing.large_ids)?;
    small_obj.check_ids(&pairing.small_ids)?;
    large_obj.add_to_group(&config.group_name, &pairing.large_ids, config.weight, config.mode)?;
    small_obj.add_to_group(&config.group_name, &pairing.small_ids, config.weight, config.mode)?;

    info!(
        pairs = pairing.len(),
        threshold = pairing.threshold,
        group = %config.group_name,
        "contact recorded"
    );
    Ok(pairing)
}
