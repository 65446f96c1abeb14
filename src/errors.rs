//! Contact errors

use crate::io::IoError;
use std::fmt::Display;

/// Which of the two inputs of a pairwise operation an error or result refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The first argument
    A,
    /// The second argument
    B,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "first"),
            Side::B => write!(f, "second"),
        }
    }
}

/// All the ways finding or recording a contact can fail
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// (WrongSelection) Contact needs exactly two objects
    #[error("(WrongSelection) Expected exactly two objects, found {found}")]
    WrongSelection { found: usize },
    /// (EmptyPointSet) One of the inputs has no points to match
    #[error("(EmptyPointSet) The {side} point set is empty")]
    EmptyPointSet { side: Side },
    /// (InvalidSampleSize) The sample size has to select at least one pair
    #[error("(InvalidSampleSize) Sample size must be at least 1, got {0}")]
    InvalidSampleSize(usize),
    /// (PairCountMismatch) The emitted identifier lists differ in length.
    /// This is an internal defect, never a consequence of bad input.
    #[error(
        "(PairCountMismatch) Matched {large} larger-set ids but {small} smaller-set ids"
    )]
    PairCountMismatch { large: usize, small: usize },
    /// (InvalidPolygon) A polygon references fewer than three vertices
    #[error("(InvalidPolygon) Polygon {polygon} has only {count} vertex indices")]
    InvalidPolygon { polygon: usize, count: usize },
    /// (VertexIndexOutOfRange) A vertex index does not exist on the mesh
    #[error("(VertexIndexOutOfRange) Vertex index {index} is out of range (vertices.len = {len})")]
    VertexIndexOutOfRange { index: usize, len: usize },
    /// Reading geometry failed
    #[error(transparent)]
    Io(#[from] IoError),
}
