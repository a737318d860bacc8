use crate::{Facet, MeshError, Triangle, TriangleMesh, Vector3};

/// A triangle mesh stored as a vertex list plus facets that index into it.
///
/// Every facet index is checked against `points` when the mesh is built, so the accessors
/// below never have to bounds check a corner.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedMesh {
    points: Vec<Vector3>,
    facets: Vec<Facet>,
}

/// Memory used by the vertex and facet storage of a mesh.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MeshFootprint {
    pub vertex_bytes: usize,
    pub facet_bytes: usize,
}

impl MeshFootprint {
    pub fn total_bytes(&self) -> usize {
        self.vertex_bytes + self.facet_bytes
    }

    /// Size in kilobytes, where 1 kB is 1000 bytes.
    pub fn kilobytes(&self) -> f32 {
        self.total_bytes() as f32 / 1000.0
    }
}

impl IndexedMesh {
    pub fn new(points: Vec<Vector3>, facets: Vec<Facet>) -> Result<Self, MeshError> {
        let vertex_count = points.len();
        if u32::try_from(vertex_count).is_err() {
            return Err(MeshError::TooManyVertices(vertex_count));
        }
        for (i, facet) in facets.iter().enumerate() {
            if let Some(index) = facet
                .indices()
                .into_iter()
                .find(|index| *index as usize >= vertex_count)
            {
                return Err(MeshError::FacetOutOfBounds {
                    facet: i,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(Self { points, facets })
    }

    pub fn points(&self) -> &[Vector3] {
        &self.points
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.facets.len()
    }

    pub fn facet(&self, index: usize) -> Option<Facet> {
        self.facets.get(index).copied()
    }

    pub fn triangle(&self, index: usize) -> Option<Triangle> {
        self.facet(index).map(|facet| self.resolve(&facet))
    }

    /// Returns the axis aligned bounding box as `(min, max)`, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vector3, Vector3)> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold((first, first), |(min, max), p| {
            (
                Vector3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z)),
                Vector3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z)),
            )
        }))
    }

    pub fn footprint(&self) -> MeshFootprint {
        MeshFootprint {
            vertex_bytes: self.points.len() * std::mem::size_of::<Vector3>(),
            facet_bytes: self.facets.len() * std::mem::size_of::<Facet>(),
        }
    }

    fn resolve(&self, facet: &Facet) -> Triangle {
        // Indices were validated in `new`.
        Triangle {
            p0: self.points[facet.p0 as usize],
            p1: self.points[facet.p1 as usize],
            p2: self.points[facet.p2 as usize],
        }
    }
}

impl TriangleMesh for IndexedMesh {
    fn from_indexed(points: Vec<Vector3>, facets: Vec<Facet>) -> Result<Self, MeshError> {
        IndexedMesh::new(points, facets)
    }

    fn vertex_count(&self) -> usize {
        IndexedMesh::vertex_count(self)
    }

    fn triangle_count(&self) -> usize {
        IndexedMesh::triangle_count(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> (Vec<Vector3>, Vec<Facet>) {
        (
            vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(1.0, 1.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            ],
            vec![Facet::new(0, 1, 2), Facet::new(0, 2, 3)],
        )
    }

    #[test]
    fn rejects_out_of_bounds_facet() {
        let (points, mut facets) = square();
        facets.push(Facet::new(1, 4, 2));
        assert_eq!(
            Err(MeshError::FacetOutOfBounds {
                facet: 2,
                index: 4,
                vertex_count: 4
            }),
            IndexedMesh::new(points, facets)
        );
    }

    #[test]
    fn resolves_triangles() {
        let (points, facets) = square();
        let mesh = IndexedMesh::new(points, facets).unwrap();
        assert_eq!(
            Some(Triangle {
                p0: Vector3::new(0.0, 0.0, 0.0),
                p1: Vector3::new(1.0, 1.0, 0.0),
                p2: Vector3::new(0.0, 1.0, 0.0),
            }),
            mesh.triangle(1)
        );
        assert_eq!(None, mesh.triangle(2));
    }

    #[test]
    fn bounds_of_square() {
        let (points, facets) = square();
        let mesh = IndexedMesh::new(points, facets).unwrap();
        assert_eq!(
            Some((Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 0.0))),
            mesh.bounds()
        );
        assert_eq!(None, IndexedMesh::new(vec![], vec![]).unwrap().bounds());
    }

    #[test]
    fn footprint_counts_storage() {
        let (points, facets) = square();
        let mesh = IndexedMesh::new(points, facets).unwrap();
        let footprint = mesh.footprint();
        // 4 points * 12b + 2 facets * 12b
        assert_eq!(48, footprint.vertex_bytes);
        assert_eq!(24, footprint.facet_bytes);
        assert_eq!(0.072, footprint.kilobytes());
    }
}
