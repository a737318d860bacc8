pub type Vector3 = cgmath::Vector3<f32>;

// We rely on Vector3 being repr(c).
static_assertions::assert_eq_size!(Vector3, [f32; 3]);
static_assertions::assert_eq_align!(Vector3, f32);

/// A triangle resolved to the positions of its three corners.
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Triangle {
    pub p0: Vector3,
    pub p1: Vector3,
    pub p2: Vector3,
}

impl Triangle {
    pub fn corners(&self) -> [Vector3; 3] {
        [self.p0, self.p1, self.p2]
    }
}

/// Maintains geometry for a single facet.
///
/// This type must be paired with a list of vertices. The points here are only indices into
/// another vector, listed in counter-clockwise order. We do this so we can store each corner
/// as 4 bytes instead of the 12 bytes required to store the entire Vector3. This has further
/// savings if a vertex is reused, which is the common case for OBJ models.
///
/// As a simple example, consider a simple geometry such as:
///
///    *-------*
///    |\     /|
///    | \   / |
///    |  \ /  |
///    |   *   |
///    |  / \  |
///    | /   \ |
///    |/     \|
///    *-------*
///
/// Here we have 5 points and 4 facets. If we would store every facet as a series of points
/// we would need:
///    3 floats * 4b * 3 points * 4 facets = 144 bytes.
///
/// If instead we store:
///    3 floats * 4b * 5 points  = 60b
///  + 3 indices * 4b * 4 facets = 48b
///                              =======
///                               108b
///
/// The layout matches a `u32` index buffer so a facet slice can be handed to the GPU as-is.
#[derive(
    Debug, PartialEq, Eq, Hash, Copy, Clone, Default, bytemuck_derive::Pod, bytemuck_derive::Zeroable,
)]
#[repr(C)]
pub struct Facet {
    pub p0: u32,
    pub p1: u32,
    pub p2: u32,
}

static_assertions::assert_eq_size!(Facet, [u32; 3]);

impl Facet {
    pub fn new(p0: u32, p1: u32, p2: u32) -> Self {
        Self { p0, p1, p2 }
    }

    pub fn indices(&self) -> [u32; 3] {
        [self.p0, self.p1, self.p2]
    }

    /// Returns true if `vertex` is one of the corners of this facet.
    pub fn contains(&self, vertex: u32) -> bool {
        self.p0 == vertex || self.p1 == vertex || self.p2 == vertex
    }

    /// Returns true if the two facets have at least one corner in common.
    pub fn shares_vertex_with(&self, other: &Facet) -> bool {
        other.indices().iter().any(|v| self.contains(*v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_membership() {
        let facet = Facet::new(4, 0, 7);
        assert!(facet.contains(0));
        assert!(facet.contains(7));
        assert!(!facet.contains(1));
        assert_eq!([4, 0, 7], facet.indices());
    }

    #[test]
    fn triangle_corners_in_winding_order() {
        let triangle = Triangle {
            p0: Vector3::new(0.0, 0.0, 0.0),
            p1: Vector3::new(1.0, 0.0, 0.0),
            p2: Vector3::new(0.0, 1.0, 0.0),
        };
        assert_eq!([triangle.p0, triangle.p1, triangle.p2], triangle.corners());
    }

    #[test]
    fn shared_vertices() {
        let a = Facet::new(0, 1, 2);
        assert!(a.shares_vertex_with(&Facet::new(2, 3, 4)));
        assert!(!a.shares_vertex_with(&Facet::new(3, 4, 5)));
    }

    #[test]
    fn facets_cast_to_index_buffer() {
        let facets = [Facet::new(0, 1, 2), Facet::new(2, 1, 3)];
        let indices: &[u32] = bytemuck::cast_slice(&facets);
        assert_eq!(&[0, 1, 2, 2, 1, 3], indices);
    }
}
