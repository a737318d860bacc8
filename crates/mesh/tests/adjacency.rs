use meshpick_mesh::{
    adjacent_to_face, adjacent_to_vertex, parse_index, DefaultMesh, Facet, Query, QueryError,
};
use meshpick_test_data::{OBJ_CUBE, OBJ_TETRAHEDRON};

fn cube() -> DefaultMesh {
    meshpick_obj::parse_obj(OBJ_CUBE.source).unwrap()
}

#[test]
fn cube_corner_touches_six_triangles() {
    let mesh = cube();
    let selection = adjacent_to_vertex(&mesh, 0).unwrap();
    assert_eq!(&[0, 1, 4, 5, 8, 9], selection.facet_indices());
    assert!(selection.triangles(&mesh).all(|facet| facet.contains(0)));

    let selection = adjacent_to_vertex(&mesh, 6).unwrap();
    assert_eq!(&[2, 3, 6, 7, 10, 11], selection.facet_indices());
}

#[test]
fn vertex_selection_matches_brute_force() {
    let mesh = cube();
    for vertex in 0..mesh.vertex_count() {
        let expected: Vec<Facet> = mesh
            .facets()
            .iter()
            .copied()
            .filter(|facet| facet.contains(vertex as u32))
            .collect();
        let selection = Query::Vertex(vertex).run(&mesh).unwrap();
        assert_eq!(expected, selection.triangles(&mesh).collect::<Vec<_>>());
    }
}

#[test]
fn cube_face_neighbours() {
    let mesh = cube();
    let selection = adjacent_to_face(&mesh, 0).unwrap();
    assert_eq!(&[1, 4, 5, 6, 7, 8, 9, 10], selection.facet_indices());
}

#[test]
fn every_tetrahedron_face_touches_the_rest() {
    let mesh: DefaultMesh = meshpick_obj::parse_obj(OBJ_TETRAHEDRON.source).unwrap();
    for face in 0..mesh.triangle_count() {
        let selection = adjacent_to_face(&mesh, face).unwrap();
        assert_eq!(3, selection.len());
        assert!(!selection.facet_indices().contains(&face));
    }
}

#[test]
fn typed_input_drives_queries() {
    let mesh = cube();
    let vertex = parse_index("7").unwrap();
    assert_eq!(4, Query::Vertex(vertex).run(&mesh).unwrap().len());

    assert_eq!(Err(QueryError::InvalidInput), parse_index("seven"));
    assert_eq!(
        Err(QueryError::VertexOutOfBounds {
            index: 8,
            vertex_count: 8
        }),
        Query::Vertex(parse_index("8").unwrap()).run(&mesh)
    );
    assert_eq!(
        Err(QueryError::FaceOutOfBounds {
            index: 12,
            triangle_count: 12
        }),
        Query::Face(parse_index("12").unwrap()).run(&mesh)
    );
}
