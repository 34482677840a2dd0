//! Error types for mesh buffer validation.

use thiserror::Error;

/// Broken invariants in a set of mesh buffers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// Normals or UVs are not parallel to the vertex buffer
    #[error("Mismatched buffers: {vertices} vertices, {normals} normals, {uvs} uvs")]
    MismatchedBuffers {
        vertices: usize,
        normals: usize,
        uvs: usize,
    },

    /// Index buffer does not hold whole triangles
    #[error("Index count {count} is not a multiple of 3")]
    PartialTriangle { count: usize },

    /// A triangle references a vertex past the end of the buffer
    #[error("Index {index} at position {position} out of range (vertex count: {vertex_count})")]
    IndexOutOfRange {
        index: u32,
        position: usize,
        vertex_count: usize,
    },
}
