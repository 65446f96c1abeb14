#![cfg(feature = "stl-io")]

mod support;

use meshcontact::io::IoError;
use meshcontact::traits::GeometrySource;
use meshcontact::{Mesh, match_nearest_pairs};
use nalgebra::Vector3;
use std::io::Cursor;
use stl_io::{Normal, Triangle, Vertex};

/// Unit square at height `z` as two triangles, written as binary STL.
fn square_stl(z: f32) -> Cursor<Vec<u8>> {
    let corner = |x: f32, y: f32| Vertex::new([x, y, z]);
    let up = Normal::new([0.0, 0.0, 1.0]);
    let triangles = [
        Triangle {
            normal: up,
            vertices: [corner(0.0, 0.0), corner(1.0, 0.0), corner(1.0, 1.0)],
        },
        Triangle {
            normal: up,
            vertices: [corner(0.0, 0.0), corner(1.0, 1.0), corner(0.0, 1.0)],
        },
    ];

    let mut cursor = Cursor::new(Vec::new());
    stl_io::write_stl(&mut cursor, triangles.iter()).unwrap();
    cursor.set_position(0);
    cursor
}

#[test]
fn stl_corners_are_shared() {
    let mesh = Mesh::<()>::from_stl(&mut square_stl(0.0), None).unwrap();

    assert_eq!(mesh.vertices.len(), 4);
    assert_eq!(mesh.polygons.len(), 2);
    assert_eq!(mesh.surface_area(), 1.0);
    assert_eq!(mesh.unit_resultant_normal(), Some(Vector3::z()));
}

#[test]
fn stl_sheets_touch_everywhere() {
    support::init_tracing();
    let lower = Mesh::<()>::from_stl(&mut square_stl(0.0), None).unwrap();
    let upper = Mesh::<()>::from_stl(&mut square_stl(0.5), None).unwrap();

    let pairing = match_nearest_pairs(&lower.point_set(), &upper.point_set(), 1).unwrap();

    assert_eq!(pairing.threshold, 0.5);
    assert_eq!(pairing.len(), 4);
    assert_eq!(pairing.large_ids, pairing.small_ids);
}

#[test]
fn missing_files_are_reported() {
    let missing = Mesh::<()>::from_stl_file("does/not/exist.stl", None);
    assert!(matches!(missing, Err(IoError::StdIo(_))));

    let empty = Mesh::<()>::from_stl_file("", None);
    assert!(matches!(empty, Err(IoError::MalformedPath(_))));
}
