//! Identified point sets, the input of the nearest-pair matcher.

use crate::float_types::Real;
use nalgebra::{Matrix4, Point3};

/// A coordinate tagged with a stable external identifier (a vertex index for meshes).
#[derive(Debug, Clone, PartialEq)]
pub struct Point<I> {
    pub id: I,
    pub pos: Point3<Real>,
}

impl<I> Point<I> {
    #[inline]
    pub const fn new(id: I, pos: Point3<Real>) -> Self {
        Point { id, pos }
    }

    /// Euclidean distance between the two coordinates.
    #[inline]
    pub fn distance_to<J>(&self, other: &Point<J>) -> Real {
        (self.pos - other.pos).norm()
    }
}

/// Ordered collection of identified points that all live in one shared frame.
///
/// Identifiers are expected to be unique within a set; this is not checked.
/// The order is kept as given since matching results are reported by position.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet<I> {
    pub points: Vec<Point<I>>,
}

impl<I> Default for PointSet<I> {
    fn default() -> Self {
        PointSet { points: Vec::new() }
    }
}

impl<I> PointSet<I> {
    pub const fn new(points: Vec<Point<I>>) -> Self {
        PointSet { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, id: I, pos: Point3<Real>) {
        self.points.push(Point::new(id, pos));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point<I>> {
        self.points.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &I> {
        self.points.iter().map(|p| &p.id)
    }

    pub fn positions(&self) -> Vec<Point3<Real>> {
        self.points.iter().map(|p| p.pos).collect()
    }

    /// Returns a copy with every coordinate mapped through `matrix`, keeping ids and order.
    pub fn transformed(&self, matrix: &Matrix4<Real>) -> Self
    where
        I: Clone,
    {
        PointSet {
            points: self
                .points
                .iter()
                .map(|p| Point::new(p.id.clone(), matrix.transform_point(&p.pos)))
                .collect(),
        }
    }
}

impl<I> FromIterator<(I, Point3<Real>)> for PointSet<I> {
    fn from_iter<T: IntoIterator<Item = (I, Point3<Real>)>>(iter: T) -> Self {
        PointSet {
            points: iter.into_iter().map(|(id, pos)| Point::new(id, pos)).collect(),
        }
    }
}

impl<'a, I> IntoIterator for &'a PointSet<I> {
    type Item = &'a Point<I>;
    type IntoIter = std::slice::Iter<'a, Point<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn collects_ids_in_order() {
        let set: PointSet<u32> = [
            (7, Point3::new(0.0, 0.0, 0.0)),
            (3, Point3::new(1.0, 0.0, 0.0)),
            (9, Point3::new(0.0, 1.0, 0.0)),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 3);
        assert_eq!(set.ids().copied().collect::<Vec<_>>(), vec![7, 3, 9]);
    }

    #[test]
    fn transformed_keeps_ids() {
        let mut set = PointSet::default();
        set.push("a", Point3::new(1.0, 2.0, 3.0));
        let moved = set.transformed(&Matrix4::new_translation(&Vector3::new(0.0, 0.0, 3.0)));

        assert_eq!(moved.points[0].id, "a");
        assert_eq!(moved.points[0].pos, Point3::new(1.0, 2.0, 6.0));
        assert_eq!(set.points[0].distance_to(&moved.points[0]), 3.0);
    }
}
