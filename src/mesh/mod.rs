//! `Mesh` struct: indexed polygons, an object-to-world transform and named vertex groups.

use crate::aabb::Aabb;
use crate::errors::ContactError;
use crate::float_types::{EPSILON, Real};
use crate::point_set::PointSet;
use crate::traits::{GeometrySource, GroupSink, Transform};
use nalgebra::{Matrix4, Point3, Vector3};
use std::fmt::Debug;

pub mod polygon;
pub mod shapes;
pub mod vertex_group;

use polygon::Polygon;
use vertex_group::{GroupMode, VertexGroup};

#[derive(Clone, Debug)]
pub struct Mesh<S: Clone + Send + Sync + Debug> {
    /// Vertex positions in object space; a vertex's index is its stable id
    pub vertices: Vec<Point3<Real>>,

    /// Indexed polygons
    pub polygons: Vec<Polygon<S>>,

    /// Object-to-world transform
    pub transform: Matrix4<Real>,

    /// Named vertex groups, in creation order
    pub vertex_groups: Vec<VertexGroup>,

    /// Metadata
    pub metadata: Option<S>,
}

impl<S: Clone + Send + Sync + Debug> Default for Mesh<S> {
    fn default() -> Self {
        Mesh {
            vertices: Vec::new(),
            polygons: Vec::new(),
            transform: Matrix4::identity(),
            vertex_groups: Vec::new(),
            metadata: None,
        }
    }
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mesh from vertices and polygons, checking that every polygon
    /// has at least three indices and that all of them exist.
    pub fn from_parts(
        vertices: Vec<Point3<Real>>,
        polygons: Vec<Polygon<S>>,
        metadata: Option<S>,
    ) -> Result<Self, ContactError> {
        for (polygon, poly) in polygons.iter().enumerate() {
            if poly.indices.len() < 3 {
                return Err(ContactError::InvalidPolygon {
                    polygon,
                    count: poly.indices.len(),
                });
            }
            check_indices(&poly.indices, vertices.len())?;
        }

        Ok(Mesh {
            vertices,
            polygons,
            metadata,
            ..Default::default()
        })
    }

    /// Vertex positions with the object transform applied.
    pub fn world_positions(&self) -> Vec<Point3<Real>> {
        self.vertices
            .iter()
            .map(|p| self.transform.transform_point(p))
            .collect()
    }

    /// Sum of the face normals, each weighted by its face's area, in object space.
    ///
    /// For a closed surface this vanishes; for an open one it points the way
    /// the surface faces on average.
    pub fn resultant_normal(&self) -> Vector3<Real> {
        self.polygons
            .iter()
            .fold(Vector3::zeros(), |acc, poly| acc + poly.area_normal(&self.vertices) * 0.5)
    }

    /// Unit length [`Mesh::resultant_normal`], or `None` when it is (numerically) zero.
    pub fn unit_resultant_normal(&self) -> Option<Vector3<Real>> {
        let n = self.resultant_normal();
        if n.norm_squared() > EPSILON {
            Some(n.normalize())
        } else {
            None
        }
    }

    pub fn surface_area(&self) -> Real {
        self.polygons.iter().map(|p| p.area(&self.vertices)).sum()
    }

    /// Create an empty group called `name`, or `name.001`, `name.002`, … when that is taken.
    pub fn new_vertex_group(&mut self, name: &str) -> &mut VertexGroup {
        let name = vertex_group::unique_group_name(&self.vertex_groups, name);
        self.vertex_groups.push(VertexGroup::new(name));
        let last = self.vertex_groups.len() - 1;
        &mut self.vertex_groups[last]
    }

    pub fn vertex_group(&self, name: &str) -> Option<&VertexGroup> {
        self.vertex_groups.iter().find(|g| g.name == name)
    }

    pub fn vertex_group_mut(&mut self, name: &str) -> Option<&mut VertexGroup> {
        self.vertex_groups.iter_mut().find(|g| g.name == name)
    }
}

fn check_indices(indices: &[usize], len: usize) -> Result<(), ContactError> {
    match indices.iter().find(|&&index| index >= len) {
        Some(&index) => Err(ContactError::VertexIndexOutOfRange { index, len }),
        None => Ok(()),
    }
}

impl<S: Clone + Send + Sync + Debug> Transform for Mesh<S> {
    /// Pre-multiplies `matrix` onto the object transform; vertices stay in object space.
    fn transform(&self, matrix: &Matrix4<Real>) -> Self {
        let mut mesh = self.clone();
        mesh.transform = matrix * self.transform;
        mesh
    }

    fn bounding_box(&self) -> Option<Aabb> {
        Aabb::from_points(&self.world_positions())
    }
}

impl<S: Clone + Send + Sync + Debug> GeometrySource<usize> for Mesh<S> {
    fn point_set(&self) -> PointSet<usize> {
        self.world_positions().into_iter().enumerate().collect()
    }
}

impl<S: Clone + Send + Sync + Debug> GroupSink<usize> for Mesh<S> {
    fn check_ids(&self, ids: &[usize]) -> Result<(), ContactError> {
        check_indices(ids, self.vertices.len())
    }

    fn add_to_group(
        &mut self,
        name: &str,
        ids: &[usize],
        weight: Real,
        mode: GroupMode,
    ) -> Result<(), ContactError> {
        self.check_ids(ids)?;
        self.new_vertex_group(name).add(ids, weight, mode);
        Ok(())
    }
}
