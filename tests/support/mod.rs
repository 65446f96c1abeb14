//! Test support library
//! Provides scene builders and helpers shared by the integration tests.
#![allow(dead_code)]

use meshcontact::{
    Mesh,
    float_types::{Real, round_decimals},
    point_set::PointSet,
    traits::{GeometrySource, Transform},
};

/// Route `tracing` output through the test harness; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

/// Cube of edge 2 centered on the origin, like a freshly added default cube.
///
/// Vertex ids: 0:(-1,-1,-1) 1:(1,-1,-1) 2:(1,1,-1) 3:(-1,1,-1)
///             4:(-1,-1,1)  5:(1,-1,1)  6:(1,1,1)  7:(-1,1,1)
pub fn default_cube(name: &str) -> Mesh<String> {
    Mesh::cube(2.0, Some(name.to_string())).center()
}

/// Two default cubes, the second moved by `(x, y, z)`.
pub fn cube_pair(x: Real, y: Real, z: Real) -> (Mesh<String>, Mesh<String>) {
    let cube1 = default_cube("cube1");
    let cube2 = default_cube("cube2").translate(x, y, z);
    (cube1, cube2)
}

pub fn points(mesh: &Mesh<String>) -> PointSet<usize> {
    mesh.point_set()
}

/// Distance rounded the same way the matcher rounds.
pub fn rounded(value: Real) -> Real {
    round_decimals(value)
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}
