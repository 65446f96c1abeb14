use crate::float_types::Real;
use crate::io::IoError;
use crate::mesh::Mesh;
use crate::mesh::polygon::Polygon;
use nalgebra::Point3;
use std::fmt::Debug;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

impl<S: Clone + Debug + Send + Sync> Mesh<S> {
    /// Read an ASCII or binary STL.
    ///
    /// Coincident corners are merged by `stl_io`, so vertex ids are shared
    /// between triangles and stay stable for a given file.
    pub fn from_stl<R: Read + Seek>(reader: &mut R, metadata: Option<S>) -> Result<Self, IoError> {
        let stl = stl_io::read_stl(reader)?;

        #[allow(clippy::unnecessary_cast)]
        let vertices = stl
            .vertices
            .iter()
            .map(|v| Point3::new(v[0] as Real, v[1] as Real, v[2] as Real))
            .collect();
        let polygons = stl
            .faces
            .iter()
            .map(|face| Polygon::new(face.vertices.to_vec(), metadata.clone()))
            .collect();

        Mesh::from_parts(vertices, polygons, metadata)
            .map_err(|e| IoError::MalformedInput(e.to_string()))
    }

    /// Read an STL file from disk.
    pub fn from_stl_file(path: impl AsRef<Path>, metadata: Option<S>) -> Result<Self, IoError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(IoError::MalformedPath("empty path".to_string()));
        }
        let mut reader = BufReader::new(File::open(path)?);
        Self::from_stl(&mut reader, metadata)
    }
}
