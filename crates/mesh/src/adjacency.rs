use crate::{Facet, IndexedMesh, QueryError};

/// What the user asked to highlight.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Query {
    Vertex(usize),
    Face(usize),
}

impl Query {
    pub fn run(self, mesh: &IndexedMesh) -> Result<Selection, QueryError> {
        match self {
            Query::Vertex(vertex) => adjacent_to_vertex(mesh, vertex),
            Query::Face(face) => adjacent_to_face(mesh, face),
        }
    }
}

/// The triangles currently highlighted, as ascending indices into the mesh facets.
///
/// A selection is never edited in place; each query builds a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    query: Query,
    facets: Vec<usize>,
}

impl Selection {
    pub fn query(&self) -> Query {
        self.query
    }

    pub fn facet_indices(&self) -> &[usize] {
        &self.facets
    }

    pub fn len(&self) -> usize {
        self.facets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Yields the selected facets by value.
    ///
    /// `mesh` must be the mesh the selection was built from.
    pub fn triangles<'a>(&'a self, mesh: &'a IndexedMesh) -> impl Iterator<Item = Facet> + 'a {
        self.facets.iter().filter_map(|i| mesh.facet(*i))
    }
}

/// Finds every triangle that has `vertex` as one of its corners.
///
/// This is a linear scan over all facets.
pub fn adjacent_to_vertex(mesh: &IndexedMesh, vertex: usize) -> Result<Selection, QueryError> {
    let vertex_count = mesh.vertex_count();
    if vertex >= vertex_count {
        return Err(QueryError::VertexOutOfBounds {
            index: vertex,
            vertex_count,
        });
    }
    // vertex_count fits in a u32, so this can't truncate.
    let target = vertex as u32;
    let facets = mesh
        .facets()
        .iter()
        .enumerate()
        .filter(|(_, facet)| facet.contains(target))
        .map(|(i, _)| i)
        .collect();
    Ok(Selection {
        query: Query::Vertex(vertex),
        facets,
    })
}

/// Finds every other triangle that shares at least one corner with facet `face`.
///
/// The queried facet itself is not part of the result and a neighbour that shares an edge is
/// only reported once.
pub fn adjacent_to_face(mesh: &IndexedMesh, face: usize) -> Result<Selection, QueryError> {
    let Some(target) = mesh.facet(face) else {
        return Err(QueryError::FaceOutOfBounds {
            index: face,
            triangle_count: mesh.triangle_count(),
        });
    };
    let facets = mesh
        .facets()
        .iter()
        .enumerate()
        .filter(|(i, facet)| *i != face && facet.shares_vertex_with(&target))
        .map(|(i, _)| i)
        .collect();
    Ok(Selection {
        query: Query::Face(face),
        facets,
    })
}

/// Parses an index typed by the user.
///
/// Only a non-empty run of ASCII digits is accepted; signs, decimals and anything else are
/// rejected, as are values that do not fit in a `usize`.
pub fn parse_index(input: &str) -> Result<usize, QueryError> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(QueryError::InvalidInput);
    }
    input.parse().map_err(|_| QueryError::InvalidInput)
}
