use meshpick_mesh::{IndexedMesh, Selection, Vector3};

// Colours are linear, the surface is sRGB.
pub const WIREFRAME_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
pub const SELECTION_COLOR: [f32; 3] = [0.0, 1.0, 0.0];
pub const GRID_COLOR: [f32; 3] = [0.141, 0.141, 0.141];

// Number of grid lines on each side of the centre line.
const GRID_HALF_LINES: i32 = 10;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck_derive::Pod, bytemuck_derive::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    fn new(position: Vector3, color: [f32; 3]) -> Self {
        Self {
            position: position.into(),
            color,
        }
    }

    /// Describes the layout of a vertex buffer holding `Vertex` values.
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// One coloured vertex per mesh point, in point order so facet indices can address it.
pub fn mesh_vertices(mesh: &IndexedMesh, color: [f32; 3]) -> Vec<Vertex> {
    mesh.points().iter().map(|p| Vertex::new(*p, color)).collect()
}

/// Line list indices that outline every facet.
///
/// Edges shared by two facets are emitted twice; the overdraw is harmless.
pub fn wireframe_indices(mesh: &IndexedMesh) -> Vec<u32> {
    mesh.facets()
        .iter()
        .flat_map(|f| [f.p0, f.p1, f.p1, f.p2, f.p2, f.p0])
        .collect()
}

/// A triangle list with three vertices for every selected facet.
pub fn selection_vertices(mesh: &IndexedMesh, selection: &Selection) -> Vec<Vertex> {
    selection
        .facet_indices()
        .iter()
        .filter_map(|i| mesh.triangle(*i))
        .flat_map(|triangle| triangle.corners())
        .map(|p| Vertex::new(p, SELECTION_COLOR))
        .collect()
}

/// Spacing between grid lines so that the grid covers the model with some margin.
pub fn grid_step(mesh: &IndexedMesh) -> f32 {
    let extent = mesh
        .bounds()
        .map(|(min, max)| (max.x - min.x).max(max.z - min.z))
        .unwrap_or(0.0);
    if extent > 0.0 {
        extent / GRID_HALF_LINES as f32
    } else {
        1.0
    }
}

/// A square line grid on the horizontal plane through the bottom of the model.
pub fn grid_vertices(mesh: &IndexedMesh) -> Vec<Vertex> {
    let (center, floor) = match mesh.bounds() {
        Some((min, max)) => ((min + max) * 0.5, min.y),
        None => (Vector3::new(0.0, 0.0, 0.0), 0.0),
    };
    let step = grid_step(mesh);
    let half = step * GRID_HALF_LINES as f32;
    let mut vertices = Vec::with_capacity((GRID_HALF_LINES as usize * 2 + 1) * 4);
    for i in -GRID_HALF_LINES..=GRID_HALF_LINES {
        let offset = i as f32 * step;
        // Parallel to z.
        vertices.push(Vertex::new(
            Vector3::new(center.x + offset, floor, center.z - half),
            GRID_COLOR,
        ));
        vertices.push(Vertex::new(
            Vector3::new(center.x + offset, floor, center.z + half),
            GRID_COLOR,
        ));
        // Parallel to x.
        vertices.push(Vertex::new(
            Vector3::new(center.x - half, floor, center.z + offset),
            GRID_COLOR,
        ));
        vertices.push(Vertex::new(
            Vector3::new(center.x + half, floor, center.z + offset),
            GRID_COLOR,
        ));
    }
    vertices
}
