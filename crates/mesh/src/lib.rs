mod adjacency;
mod error;
mod geometry;
mod indexed_mesh;

pub use adjacency::*;
pub use error::*;
pub use geometry::*;
pub use indexed_mesh::*;

/// A reasonable default mesh to select for unopinionated consumers.
pub type DefaultMesh = IndexedMesh;

pub trait TriangleMesh: Sized {
    /// Creates a TriangleMesh from a list of vertices and the facets that index into it.
    ///
    /// # Arguments
    ///
    /// * `points` - The vertices of the mesh. A vertex is identified by its position here.
    /// * `facets` - The triangles of the mesh, as indices into `points`.
    ///
    /// Fails if any facet refers to a vertex that does not exist.
    fn from_indexed(points: Vec<Vector3>, facets: Vec<Facet>) -> Result<Self, MeshError>;

    /// Returns the number of vertices in this mesh.
    fn vertex_count(&self) -> usize;

    /// Returns the number of triangles that comprises this mesh.
    fn triangle_count(&self) -> usize;
}
