pub struct TestModel {
    pub source: &'static str,
    pub vertex_count: usize,
    pub triangle_count: usize,
}

pub const OBJ_CUBE: TestModel = TestModel {
    source: include_str!("../../../res/cube/cube.obj"),
    vertex_count: 8,
    triangle_count: 12,
};

pub const OBJ_TETRAHEDRON: TestModel = TestModel {
    source: include_str!("../../../res/tetrahedron/tetrahedron.obj"),
    vertex_count: 4,
    triangle_count: 4,
};
