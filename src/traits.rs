use crate::aabb::Aabb;
use crate::errors::ContactError;
use crate::float_types::Real;
use crate::mesh::vertex_group::GroupMode;
use crate::point_set::PointSet;
use nalgebra::{Matrix4, Rotation3, Translation3, Vector3};

/// Anything that can hand out its points, already placed in the shared frame.
pub trait GeometrySource<I> {
    fn point_set(&self) -> PointSet<I>;
}

/// Anything that can record identifiers as members of a named group.
pub trait GroupSink<I> {
    /// Fail if any of `ids` could not be recorded. The contact driver calls
    /// this on both objects before writing to either, so an `add_to_group`
    /// that only fails for ids rejected here never leaves one object written.
    fn check_ids(&self, ids: &[I]) -> Result<(), ContactError> {
        let _ = ids;
        Ok(())
    }

    /// Add `ids` to a new group called `name`. Implementations must validate
    /// every id before mutating anything.
    fn add_to_group(
        &mut self,
        name: &str,
        ids: &[I],
        weight: Real,
        mode: GroupMode,
    ) -> Result<(), ContactError>;
}

/// Object placement, composed into a world matrix
pub trait Transform: Sized + Clone {
    fn transform(&self, matrix: &Matrix4<Real>) -> Self;
    fn bounding_box(&self) -> Option<Aabb>;

    /// Returns a new Self translated by vector.
    fn translate_vector(&self, vector: Vector3<Real>) -> Self {
        self.transform(&Translation3::from(vector).to_homogeneous())
    }

    /// Returns a new Self translated by x, y, and z.
    fn translate(&self, x: Real, y: Real, z: Real) -> Self {
        self.translate_vector(Vector3::new(x, y, z))
    }

    /// Returns a new Self moved so that its bounding-box center is at the origin.
    fn center(&self) -> Self {
        match self.bounding_box() {
            Some(aabb) => self.translate_vector(-aabb.center().coords),
            None => self.clone(),
        }
    }

    /// Rotates by x_degrees, y_degrees, z_degrees (applied x, then y, then z)
    fn rotate(&self, x_deg: Real, y_deg: Real, z_deg: Real) -> Self {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), x_deg.to_radians());
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), y_deg.to_radians());
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), z_deg.to_radians());

        let rot = rz * ry * rx;
        self.transform(&rot.to_homogeneous())
    }

    /// Scales by scale_x, scale_y, scale_z
    fn scale(&self, sx: Real, sy: Real, sz: Real) -> Self {
        let mat4 = Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz));
        self.transform(&mat4)
    }
}
