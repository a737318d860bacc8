use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    #[error("facet {facet} refers to vertex {index} but the mesh only has {vertex_count} vertices")]
    FacetOutOfBounds {
        facet: usize,
        index: u32,
        vertex_count: usize,
    },
    #[error("mesh has {0} vertices, more than a u32 index can address")]
    TooManyVertices(usize),
}

/// Reasons an adjacency query can be rejected.
///
/// The display strings are what gets shown to the user, so keep them short.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid input: enter an integer")]
    InvalidInput,
    #[error("vertex index {index} out of bounds (mesh has {vertex_count} vertices)")]
    VertexOutOfBounds { index: usize, vertex_count: usize },
    #[error("face index {index} out of bounds (mesh has {triangle_count} faces)")]
    FaceOutOfBounds { index: usize, triangle_count: usize },
}
