use float_eq::assert_float_eq;
use meshpick_mesh::{DefaultMesh, Facet, Vector3};
use meshpick_test_data::{OBJ_CUBE, OBJ_TETRAHEDRON};
use std::io::Write;

#[test]
fn parse_cube() {
    let mesh: DefaultMesh = meshpick_obj::parse_obj(OBJ_CUBE.source).unwrap();
    assert_eq!(OBJ_CUBE.vertex_count, mesh.vertex_count());
    // Expect 12 triangles (2 per face x 6 faces)
    assert_eq!(OBJ_CUBE.triangle_count, mesh.triangle_count());

    assert_eq!(Vector3::new(0.0, 0.0, 0.0), mesh.points()[0]);
    assert_eq!(Vector3::new(20.0, 20.0, 20.0), mesh.points()[6]);
    assert_eq!(Facet::new(0, 3, 2), mesh.facets()[0]);
    assert_eq!(Facet::new(4, 5, 6), mesh.facets()[2]);
    assert_eq!(Facet::new(0, 4, 7), mesh.facets()[8]);
    assert_eq!(Facet::new(1, 6, 5), mesh.facets()[11]);

    let (min, max) = mesh.bounds().unwrap();
    assert_float_eq!(0.0, min.x, abs <= f32::EPSILON);
    assert_float_eq!(20.0, max.z, abs <= f32::EPSILON);
}

#[test]
fn parse_tetrahedron() {
    let mesh: DefaultMesh = meshpick_obj::parse_obj(OBJ_TETRAHEDRON.source).unwrap();
    assert_eq!(OBJ_TETRAHEDRON.vertex_count, mesh.vertex_count());
    assert_eq!(OBJ_TETRAHEDRON.triangle_count, mesh.triangle_count());
    assert_eq!(
        &[
            Facet::new(0, 2, 1),
            Facet::new(0, 1, 3),
            Facet::new(0, 3, 2),
            Facet::new(1, 2, 3),
        ],
        mesh.facets()
    );
    // The trailing w component on the last vertex is ignored.
    assert_eq!(Vector3::new(0.0, 0.0, 1.0), mesh.points()[3]);
}

#[test]
fn read_cube_from_disk() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(OBJ_CUBE.source.as_bytes()).unwrap();
    let mesh: DefaultMesh = meshpick_obj::read_obj(f.path()).unwrap();
    assert_eq!(OBJ_CUBE.triangle_count, mesh.triangle_count());
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.obj");
    let err = meshpick_obj::read_obj::<DefaultMesh, _>(&path).unwrap_err();
    assert!(format!("{}", err).contains("missing.obj"));
}
