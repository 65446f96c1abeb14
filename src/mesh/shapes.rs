//! Primitive shapes as indexed `Mesh`es with shared vertices

use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::mesh::polygon::Polygon;
use nalgebra::Point3;
use std::fmt::Debug;

impl<S: Clone + Debug + Send + Sync> Mesh<S> {
    /// Axis-aligned box with one corner at the origin and eight shared vertices.
    ///
    /// ## **Vertex Layout**
    /// ```text
    ///     7-------6
    ///    /|      /|
    ///   4-------5 |
    ///   | |     | |
    ///   | 3-----|-2
    ///   |/      |/
    ///   0-------1
    /// ```
    /// 0 is the origin, 1 is +X, 3 is +Y and 4 is +Z. Vertex ids are these
    /// indices, so contact results on two boxes are easy to read.
    ///
    /// ## **Faces** (counter-clockwise seen from outside)
    /// - **Bottom**: [0,3,2,1]  - **Top**: [4,5,6,7]
    /// - **Front**: [0,1,5,4]   - **Back**: [3,7,6,2]
    /// - **Left**: [0,4,7,3]    - **Right**: [1,2,6,5]
    pub fn cuboid(width: Real, length: Real, height: Real, metadata: Option<S>) -> Mesh<S> {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(width, 0.0, 0.0),
            Point3::new(width, length, 0.0),
            Point3::new(0.0, length, 0.0),
            Point3::new(0.0, 0.0, height),
            Point3::new(width, 0.0, height),
            Point3::new(width, length, height),
            Point3::new(0.0, length, height),
        ];

        let faces = [
            [0, 3, 2, 1],
            [4, 5, 6, 7],
            [0, 1, 5, 4],
            [3, 7, 6, 2],
            [0, 4, 7, 3],
            [1, 2, 6, 5],
        ];
        let polygons = faces
            .iter()
            .map(|face| Polygon::new(face.to_vec(), metadata.clone()))
            .collect();

        Mesh {
            vertices,
            polygons,
            metadata,
            ..Default::default()
        }
    }

    pub fn cube(width: Real, metadata: Option<S>) -> Mesh<S> {
        Self::cuboid(width, width, width, metadata)
    }

    /// Flat rectangular sheet in the XY plane at z = 0, facing +Z.
    ///
    /// Vertices are laid out row by row: the vertex at column `i`, row `j`
    /// has id `j * (segments_x + 1) + i`. Each cell is one quad.
    /// A segment count of zero is treated as one.
    pub fn grid(
        width: Real,
        length: Real,
        segments_x: usize,
        segments_y: usize,
        metadata: Option<S>,
    ) -> Mesh<S> {
        let sx = segments_x.max(1);
        let sy = segments_y.max(1);
        let row = sx + 1;

        let vertices = (0..=sy)
            .flat_map(|j| {
                (0..=sx).map(move |i| {
                    Point3::new(
                        width * i as Real / sx as Real,
                        length * j as Real / sy as Real,
                        0.0,
                    )
                })
            })
            .collect();

        let polygons = (0..sy)
            .flat_map(|j| (0..sx).map(move |i| (i, j)))
            .map(|(i, j)| {
                let a = j * row + i;
                Polygon::new(vec![a, a + 1, a + 1 + row, a + row], metadata.clone())
            })
            .collect();

        Mesh {
            vertices,
            polygons,
            metadata,
            ..Default::default()
        }
    }
}
