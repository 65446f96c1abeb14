//! Indexed polygons and their area-weighted normals.

use crate::float_types::{EPSILON, Real};
use nalgebra::{Point3, Vector3};

/// A planar face, defined by indices into its mesh's vertex array.
/// - `S` is the generic metadata type, stored as `Option<S>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<S: Clone> {
    /// Indices into the vertex array, counter-clockwise seen from outside
    pub indices: Vec<usize>,

    /// Generic metadata associated with the Polygon
    pub metadata: Option<S>,
}

impl<S: Clone> Polygon<S> {
    pub const fn new(indices: Vec<usize>, metadata: Option<S>) -> Self {
        Polygon { indices, metadata }
    }

    /// Iterate over the edges as `(start, end)` index pairs, closing the loop.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.indices.len();
        (0..n).map(move |i| (self.indices[i], self.indices[(i + 1) % n]))
    }

    /// **Newell's method**
    ///
    /// ```text
    /// N = Σᵢ (pᵢ × pᵢ₊₁)
    /// ```
    /// The result points along the face normal and its length is twice the
    /// polygon's area, so summing it over faces weights each face by its area.
    /// Also robust for non-convex and slightly non-planar polygons.
    pub fn area_normal(&self, vertices: &[Point3<Real>]) -> Vector3<Real> {
        self.edges().fold(Vector3::zeros(), |acc, (a, b)| {
            let (p, q) = (vertices[a], vertices[b]);
            acc + Vector3::new(
                (p.y - q.y) * (p.z + q.z),
                (p.z - q.z) * (p.x + q.x),
                (p.x - q.x) * (p.y + q.y),
            )
        })
    }

    /// Unit face normal; `None` for degenerate (zero-area) polygons.
    pub fn normal(&self, vertices: &[Point3<Real>]) -> Option<Vector3<Real>> {
        let n = self.area_normal(vertices);
        if n.norm_squared() > EPSILON {
            Some(n.normalize())
        } else {
            None
        }
    }

    pub fn area(&self, vertices: &[Point3<Real>]) -> Real {
        self.area_normal(vertices).norm() * 0.5
    }

    pub fn centroid(&self, vertices: &[Point3<Real>]) -> Point3<Real> {
        let sum = self
            .indices
            .iter()
            .fold(Vector3::zeros(), |acc, &i| acc + vertices[i].coords);
        Point3::from(sum / self.indices.len() as Real)
    }

    /// Reverse the winding, which flips the normal.
    pub fn flip(&mut self) {
        self.indices.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> (Vec<Point3<Real>>, Polygon<()>) {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        (vertices, Polygon::new(vec![0, 1, 2, 3], None))
    }

    #[test]
    fn newell_vector_is_twice_the_area() {
        let (vertices, square) = unit_square();
        assert_eq!(square.area_normal(&vertices), Vector3::new(0.0, 0.0, 2.0));
        assert_eq!(square.area(&vertices), 1.0);
        assert_eq!(square.normal(&vertices), Some(Vector3::z()));
    }

    #[test]
    fn flip_reverses_normal() {
        let (vertices, mut square) = unit_square();
        square.flip();
        assert_eq!(square.normal(&vertices), Some(-Vector3::z()));
    }

    #[test]
    fn collinear_polygon_has_no_normal() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        let line = Polygon::<()>::new(vec![0, 1, 2], None);
        assert_eq!(line.normal(&vertices), None);
        assert_eq!(line.area(&vertices), 0.0);
    }

    #[test]
    fn edges_close_the_loop() {
        let (_, square) = unit_square();
        let edges: Vec<_> = square.edges().collect();
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
    }
}
