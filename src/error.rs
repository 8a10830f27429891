// Copyright 2025 Lars Brubaker
// License: MIT
//
// Input validation errors. A point that no triangle contains is not an
// error; it is reported through `Location::missing`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LocateError {
    /// The flat triangle index array does not hold whole triangles.
    #[error("Triangle index count {0} is not a multiple of 3")]
    TriangleIndexCount(usize),

    /// A triangle or edge refers to a vertex that does not exist.
    #[error("Vertex index {index} out of range (vertex_count={vertex_count})")]
    VertexIndexOutOfRange { index: u32, vertex_count: usize },

    /// A triangulation vertex is NaN or infinite.
    #[error("Vertex {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    /// A query point is NaN or infinite.
    #[error("Query point {index} has a non-finite coordinate")]
    NonFiniteQuery { index: usize },

    /// `edge_to_tri` does not pair one triangle with every boundary edge.
    #[error("{edges} boundary edges but {triangles} adjacent triangles")]
    EdgeTriangleMismatch { edges: usize, triangles: usize },

    /// A boundary edge names a triangle that does not exist.
    #[error("Triangle index {index} out of range (triangle_count={triangle_count})")]
    TriangleOutOfRange { index: u32, triangle_count: usize },

    /// The missing list names a query point that does not exist.
    #[error("Query index {index} out of range (query_count={query_count})")]
    QueryIndexOutOfRange { index: u32, query_count: usize },

    /// Points need the fallback but the triangulation has no boundary.
    #[error("No boundary edges to resolve missing points against")]
    NoBoundaryEdges,

    /// The per-point output does not match the number of query points.
    #[error("Output has {actual} entries, expected {expected}")]
    OutputLength { expected: usize, actual: usize },
}

/// Result type for locate operations.
pub type LocateResult<T> = std::result::Result<T, LocateError>;
