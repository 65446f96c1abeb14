//! Find where two meshes **touch**: pair the vertices of one mesh with
//! approximately nearest vertices of the other, keep the closest pairs, and
//! record them as named vertex groups on both meshes.
//!
//! The matcher in [`contact`] rotates the index space of the larger vertex set
//! instead of searching all pairs. It is exact when the two sets are roughly
//! index-aligned (meshes built from parallel or mirrored geometry) and a
//! heuristic otherwise.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` import
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to compute the distances of each rotation offset
//! - **cli**: build the `meshcontact` binary (pulls in `tracing-subscriber`)

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod aabb;
pub mod contact;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod point_set;
pub mod traits;

#[cfg(any(
    all(feature = "f64", feature = "f32"),
    not(any(feature = "f64", feature = "f32"))
))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use contact::{ContactConfig, PairingResult, contact, match_nearest_pairs};
pub use errors::{ContactError, Side};
pub use mesh::Mesh;
pub use point_set::{Point, PointSet};
